#[cfg(not(any(target_pointer_width = "64")))]
compile_error!("this crate requires 64-bit limbs");

use crate::bls24param::Twist;
use crate::bw6fp6::BW6Fp6;
use crate::bw6param::BW6Param;
use crate::chain::{run, ChainOp};
use crate::cyclotomic::Cyclotomic;
use crate::fp::Fp;
use crate::pairing::PairingEngine;
use crate::point::{Affine, BW6G1, BW6G2};
use crate::traits::SexticExtension;
use std::marker::PhantomData;

/// The optimal ate pairing for BW6 curves, whose loop counter mixes
/// <i>x&sup3; - x&sup2; - x</i> and <i>x + 1</i> into digits in {-3, -1, 0, 1, 3}.
///
/// References:
///
/// * Youssef El Housni, Aurore Guillevic:
/// "Optimized and secure pairing-friendly elliptic curves suitable for one layer proof composition."
/// In: <i>CANS 2020</i>, LNCS 12579, pp. 259--279. Springer, 2020.
///
/// * Daiki Hayashida, Kenichiro Hayasaka, Tadanori Teruya:
/// "Efficient Final Exponentiation via Cyclotomic Structure for Pairings over Families of Elliptic Curves."
/// IACR Cryptology ePrint Archive, Report 2020/875, (2020) https://eprint.iacr.org/2020/875
#[allow(non_snake_case)]
pub struct BW6Pairing<PAR: BW6Param, const LIMBS: usize>(
    #[doc(hidden)]
    pub PhantomData<PAR>,
);

impl<PAR: BW6Param, const LIMBS: usize> BW6Pairing<PAR, LIMBS> {
    #[inline]
    fn exp(chain: &[ChainOp], f: &BW6Fp6<PAR, LIMBS>) -> BW6Fp6<PAR, LIMBS> {
        run(chain, f)
    }
}

impl<PAR: BW6Param, const LIMBS: usize> PairingEngine for BW6Pairing<PAR, LIMBS> {
    type G1 = BW6G1<PAR, LIMBS>;
    type G2 = BW6G2<PAR, LIMBS>;
    type GT = BW6Fp6<PAR, LIMBS>;

    const TWIST: Twist = Twist::M;
    const ATE_LOOP: &'static [i8] = PAR::ATE_LOOP;
    const NEGATIVE_SEED: bool = false;

    /// <i>Q</i> for digits &plusmn;1, and <i>(&omega;x, -y)</i> for digits &plusmn;3.
    fn addend(q: &Affine<Self::G2>, m: u8) -> Affine<Self::G2> {
        if m == 3 {
            Affine::new(q.x*Fp::<PAR, LIMBS>::from_slice(PAR::OMEGA), -q.y)
        } else {
            *q
        }
    }

    #[inline]
    fn easy_frobenius(t: &Self::GT) -> Self::GT {
        t.frobenius()
    }

    /// Raise <i>f</i> to a multiple of <i>(p&sup2; - p + 1)/r</i>.
    fn hard_part(f: &Self::GT) -> Self::GT {
        let a = Self::exp(PAR::EXPT_MINUS_1_SQ, f)*f.frobenius();
        let b = Self::exp(PAR::EXPT_PLUS_1, &a)*f.conj();
        let a = a*a.cyclotomic_square();
        let c = Self::exp(PAR::EXPT_MINUS_1_DIV_3, &b);
        let d = Self::exp(PAR::EXPT_MINUS_1, &c);
        let e = Self::exp(PAR::EXPT_MINUS_1_SQ, &d)*d;
        let d = d.conj();
        let ff = d*b;
        let g = Self::exp(PAR::EXPT_PLUS_1, &e)*ff;
        let h = g*c;
        let i = g*d;
        let i = Self::exp(PAR::EXPT_PLUS_1, &i)*ff.conj();
        let j = Self::exp(PAR::EXPC1, &h)*e;
        let k = j.cyclotomic_square()*j*b;
        let k = k*Self::exp(PAR::EXPC2, &i);
        a*k
    }
}


#[cfg(test)]
mod tests {
    use crate::fp::FpParam;
    use crate::bw6fp3::BW6Fp3;
    use crate::bw6param::BW6761Param;
    use crate::glv::GlvGroup;
    use crate::pairing::{final_exponentiation, pair, pair_fixed_q, precompute_lines};
    use crate::pairing::tests::Pairing_test;
    use crate::point::Curve;
    use crate::traits::{One, TowerField, Zero};
    use crypto_bigint::Random;
    use std::time::SystemTime;
    use super::*;

    const TESTS: usize = 5;

    #[allow(non_snake_case)]
    fn BW6FinalExp_test<PAR: BW6Param, const LIMBS: usize>() {
        let mut rng = rand::thread_rng();

        println!();
        println!("Performing {} BW6-{:03} final exponentiation test(s)...", TESTS, Fp::<PAR, LIMBS>::modulus().bits());
        let now = SystemTime::now();

        let P = BW6G1::<PAR, LIMBS>::generator();
        let Q = BW6G2::<PAR, LIMBS>::generator();
        let g = pair::<BW6Pairing<PAR, LIMBS>>(&[P], &[Q]).unwrap();
        assert!(g.is_in_subgroup());
        assert_eq!(g.endomorphism(), g.pow(BW6Fp6::<PAR, LIMBS>::lattice().lambda()));

        // the +-3 addend is the image of Q under the order-3 twist automorphism:
        let Q3 = BW6Pairing::<PAR, LIMBS>::addend(&Q, 3);
        assert!(Q3.is_on_curve());
        assert!(Q3.is_in_subgroup());
        assert_eq!(pair_fixed_q::<BW6Pairing<PAR, LIMBS>>(&[P], &[precompute_lines::<BW6Pairing<PAR, LIMBS>>(&Q)]), Ok(g));

        for _t in 0..TESTS {
            // elements of the cubic subfield are killed by the easy part:
            let a = BW6Fp6::<PAR, LIMBS>::from_Fp3_pair(BW6Fp3::random(&mut rng), BW6Fp3::zero());
            assert!(bool::from(final_exponentiation::<BW6Pairing<PAR, LIMBS>>(&a).is_one()));

            let f = BW6Fp6::<PAR, LIMBS>::random(&mut rng);
            let e = final_exponentiation::<BW6Pairing<PAR, LIMBS>>(&f);
            assert!(e.is_in_subgroup());
            assert_eq!(e.exp_glv(BW6Fp6::<PAR, LIMBS>::lattice().lambda()), e.endomorphism());
        }
        match now.elapsed() {
            Ok(elapsed) => {
                println!("Elapsed time: {} ms.", (elapsed.as_micros() as f64)/1000.0);
            }
            Err(e) => {
                println!("Error: {e:?}");
            }
        }
    }

    #[test]
    #[allow(non_snake_case)]
    fn BW6761FinalExp_test() {
        const LIMBS: usize = BW6761Param::LIMBS;
        BW6FinalExp_test::<BW6761Param, LIMBS>();
    }

    #[test]
    #[allow(non_snake_case)]
    fn BW6761Pairing_test() {
        const LIMBS: usize = BW6761Param::LIMBS;
        Pairing_test::<BW6Pairing<BW6761Param, LIMBS>>("BW6-761");
    }
}
