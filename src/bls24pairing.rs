#[cfg(not(any(target_pointer_width = "64")))]
compile_error!("this crate requires 64-bit limbs");

use crate::bls24fp24::BLS24Fp24;
use crate::bls24param::{BLS24Param, Twist};
use crate::chain::run;
use crate::cyclotomic::Cyclotomic;
use crate::pairing::PairingEngine;
use crate::point::{Affine, BLS24G1, BLS24G2};
use crate::traits::SexticExtension;
use std::marker::PhantomData;

/// The optimal ate pairing for BLS24 curves:
/// <i>a&#x1D64;</i>(<i>P</i>,&thinsp;<i>Q'</i>)&nbsp;&#x2254;
/// <i>f</i><sub><i>u</i>,<i>Q'</i></sub>(<i>P</i>)<sup>(<i>p&sup2;&#x2074;</i>&thinsp;-&thinsp;1)/<i>r</i></sup>
/// with <i>Q'</i> on the sextic twist over <b>F</b><sub><i>p&#x2074;</i></sub>.
///
/// References:
///
/// * Hess, F., Smart, N., Vercauteren, F.:
/// "The Eta pairing revisited." IACR Cryptology ePrint Archive,
/// Report 2006/110, (2006) http://eprint.iacr.org/2006/110
///
/// * Craig Costello, Kristin Lauter, Michael Naehrig:
/// "Attractive Subfamilies of BLS Curves for Implementing High-Security Pairings."
/// In: Bernstein, D.J., Chatterjee, S. (eds) <i>Progress in Cryptology -- INDOCRYPT 2011</i>.
/// Lecture Notes in Computer Science, vol 7107, pp. 320--342.
/// Springer, Berlin, Heidelberg, 2011. https://doi.org/10.1007/978-3-642-25578-6_23
#[allow(non_snake_case)]
pub struct BLS24Pairing<PAR: BLS24Param, const LIMBS: usize>(
    #[doc(hidden)]
    pub PhantomData<PAR>,
);

impl<PAR: BLS24Param, const LIMBS: usize> BLS24Pairing<PAR, LIMBS> {
    /// Compute <i>f&#x02E3;</i> on the cyclotomic subgroup.
    #[inline]
    fn expt(f: &BLS24Fp24<PAR, LIMBS>) -> BLS24Fp24<PAR, LIMBS> {
        run(PAR::EXPT, f)
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> PairingEngine for BLS24Pairing<PAR, LIMBS> {
    type G1 = BLS24G1<PAR, LIMBS>;
    type G2 = BLS24G2<PAR, LIMBS>;
    type GT = BLS24Fp24<PAR, LIMBS>;

    const TWIST: Twist = PAR::TWIST;
    const ATE_LOOP: &'static [i8] = PAR::ATE_LOOP;
    const NEGATIVE_SEED: bool = PAR::SEED < 0;

    #[inline]
    fn addend(q: &Affine<Self::G2>, _m: u8) -> Affine<Self::G2> {
        *q
    }

    #[inline]
    fn easy_frobenius(t: &Self::GT) -> Self::GT {
        t.frobenius_quad()
    }

    /// Raise <i>f</i> to a multiple of <i>(p&#x2078; - p&#x2074; + 1)/r</i>
    /// written in base <i>x</i>.
    fn hard_part(f: &Self::GT) -> Self::GT {
        let t0 = f.cyclotomic_square();
        let t1 = Self::expt(f)*f.conj();
        let t2 = Self::expt(&t1);
        let t1 = t1.conj()*t2;
        let t2 = Self::expt(&t1);
        let t1 = t1.frobenius()*t2;
        let f = *f*t0;
        let t0 = Self::expt(&t1);
        let t2 = Self::expt(&t0);
        let t0 = t1.frobenius_square();
        let t2 = t0*t2;
        let t1 = Self::expt(&Self::expt(&Self::expt(&Self::expt(&t2))));
        let t0 = t2.frobenius_quad()*t1*t2.conj();
        f*t0
    }
}


#[cfg(test)]
mod tests {
    use crate::fp::FpParam;
    use crate::bls24fp12::BLS24Fp12;
    use crate::bls24param::{BLS24315Param, BLS24317Param};
    use crate::fp::Fp;
    use crate::glv::GlvGroup;
    use crate::pairing::{final_exponentiation, pair};
    use crate::pairing::tests::Pairing_test;
    use crate::point::Curve;
    use crate::traits::{One, TowerField, Zero};
    use crypto_bigint::Random;
    use std::time::SystemTime;
    use super::*;

    const TESTS: usize = 5;

    #[allow(non_snake_case)]
    fn BLS24FinalExp_test<PAR: BLS24Param, const LIMBS: usize>() {
        let mut rng = rand::thread_rng();

        println!();
        println!("Performing {} BLS24-{:03} final exponentiation test(s)...", TESTS, Fp::<PAR, LIMBS>::modulus().bits());
        let now = SystemTime::now();

        let g = pair::<BLS24Pairing<PAR, LIMBS>>(&[BLS24G1::<PAR, LIMBS>::generator()], &[BLS24G2::<PAR, LIMBS>::generator()]).unwrap();
        assert!(g.is_in_subgroup());
        // the target group endomorphism acts as lambda:
        assert_eq!(g.endomorphism(), g.pow(BLS24Fp24::<PAR, LIMBS>::lattice().lambda()));

        for _t in 0..TESTS {
            // elements of the cubic subfield are killed by the easy part:
            let a = BLS24Fp24::<PAR, LIMBS>::from_Fp12_pair(BLS24Fp12::random(&mut rng), BLS24Fp12::zero());
            assert!(bool::from(final_exponentiation::<BLS24Pairing<PAR, LIMBS>>(&a).is_one()));

            let f = BLS24Fp24::<PAR, LIMBS>::random(&mut rng);
            let e = final_exponentiation::<BLS24Pairing<PAR, LIMBS>>(&f);
            assert!(e.is_in_subgroup());
            assert_eq!(e.exp_glv(BLS24Fp24::<PAR, LIMBS>::lattice().lambda()), e.endomorphism());
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
    fn BLS24315FinalExp_test() {
        const LIMBS: usize = BLS24315Param::LIMBS;
        BLS24FinalExp_test::<BLS24315Param, LIMBS>();
    }

    #[test]
    #[allow(non_snake_case)]
    fn BLS24317FinalExp_test() {
        const LIMBS: usize = BLS24317Param::LIMBS;
        BLS24FinalExp_test::<BLS24317Param, LIMBS>();
    }

    #[test]
    #[allow(non_snake_case)]
    fn BLS24315Pairing_test() {
        const LIMBS: usize = BLS24315Param::LIMBS;
        Pairing_test::<BLS24Pairing<BLS24315Param, LIMBS>>("BLS24-315");
    }

    #[test]
    #[allow(non_snake_case)]
    fn BLS24317Pairing_test() {
        const LIMBS: usize = BLS24317Param::LIMBS;
        Pairing_test::<BLS24Pairing<BLS24317Param, LIMBS>>("BLS24-317");
    }
}
