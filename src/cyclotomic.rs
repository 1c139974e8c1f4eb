#[cfg(not(any(target_pointer_width = "64")))]
compile_error!("this crate requires 64-bit limbs");

use crate::chain::{run, ChainOp};
use crate::error::PairingError;
use crate::glv::naf;
use crate::traits::{CubicExtension, NonResidue, One, SexticExtension, TowerField, Zero};
use num_bigint::BigUint;

/// Karabina's compressed form (<i>g&#x2081;, g&#x2082;, g&#x2083;, g&#x2085;</i>)
/// of a cyclotomic element <i>(g&#x2080; + g&#x2081;w + g&#x2082;w&sup2;) + (g&#x2083; + g&#x2084;w + g&#x2085;w&sup2;)i</i>.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Compressed<B: TowerField> {
    pub g1: B,
    pub g2: B,
    pub g3: B,
    pub g5: B,
}

impl<B: TowerField + NonResidue> Compressed<B> {
    /// Square a compressed cyclotomic element without decompressing it.
    ///
    /// Reference: Koray Karabina, "Squaring in cyclotomic subgroups."
    /// <i>Mathematics of Computation</i> 82(281), pp. 555--579, 2013.
    pub fn cyclotomic_square_compressed(&self) -> Self {
        let Self { g1, g2, g3, g5 } = *self;
        let t0 = g1.sq();
        let t1 = g5.sq();
        let t5 = (g1 + g5).sq() - (t0 + t1);
        let t3 = (g3 + g2).sq();
        let t2 = g3.sq();
        let t6 = t5.mul_by_non_residue();
        let z3 = (t6 + g3).double() + t6;
        let t5 = t0 + t1.mul_by_non_residue();
        let z2 = (t5 - g2).double() + t5;
        let t1 = g2.sq();
        let t5 = t2 + t1.mul_by_non_residue();
        let z1 = (t5 - g1).double() + t5;
        let t5 = t3 - (t2 + t1);
        let z5 = (t5 + g5).double() + t5;
        Self { g1: z1, g2: z2, g3: z3, g5: z5 }
    }

    /// Numerator and denominator of the missing coordinate <i>g&#x2084;</i>,
    /// or `None` when the compressed element stands for one.
    fn g4_fraction(&self) -> Option<(B, B)> {
        let Self { g1, g2, g3, g5 } = *self;
        if bool::from(g3.is_zero()) {
            if bool::from(g2.is_zero()) {
                return None;
            }
            Some(((g1*g5).double(), g2))
        } else {
            let t0 = g1.sq();
            let t1 = (t0 - g2).double() + t0;
            Some((g5.sq().mul_by_non_residue() + t1, g3.double().double()))
        }
    }
}

/// Arithmetic on the cyclotomic subgroup of a quadratic-over-cubic extension,
/// where <i>f&#x207B;&sup1;</i> is the conjugate of <i>f</i>.
///
/// Membership is a precondition of every method but `is_unitary`.
pub trait Cyclotomic: SexticExtension {
    /// Granger-Scott squaring.
    ///
    /// Reference: Robert Granger, Michael Scott, "Faster squaring in the cyclotomic subgroup
    /// of sixth degree extensions." In: <i>PKC 2010</i>, LNCS 6056, pp. 209--223. Springer, 2010.
    fn cyclotomic_square(&self) -> Self {
        let (h0, h1) = self.halves();
        let [a0, a1, a2] = h0.coeffs();
        let [b0, b1, b2] = h1.coeffs();

        let t0 = b1.sq();
        let t1 = a0.sq();
        let t6 = (b1 + a0).sq() - t0 - t1;
        let t2 = a2.sq();
        let t3 = b0.sq();
        let t7 = (a2 + b0).sq() - t2 - t3;
        let t4 = b2.sq();
        let t5 = a1.sq();
        let t8 = ((b2 + a1).sq() - t4 - t5).mul_by_non_residue();
        let t0 = t0.mul_by_non_residue() + t1;
        let t2 = t2.mul_by_non_residue() + t3;
        let t4 = t4.mul_by_non_residue() + t5;

        Self::from_halves(
            Self::Cubic::from_coeffs(
                (t0 - a0).double() + t0,
                (t2 - a1).double() + t2,
                (t4 - a2).double() + t4,
            ),
            Self::Cubic::from_coeffs(
                (t8 + b0).double() + t8,
                (t6 + b1).double() + t6,
                (t7 + b2).double() + t7,
            ),
        )
    }

    /// Drop the <i>g&#x2080;</i> and <i>g&#x2084;</i> coordinates.
    fn compress_karabina(&self) -> Compressed<Self::Base> {
        let (h0, h1) = self.halves();
        let [_, g1, g2] = h0.coeffs();
        let [g3, _, g5] = h1.coeffs();
        Compressed { g1, g2, g3, g5 }
    }

    /// Recover the full element from its compressed form (one base field inversion).
    fn decompress_karabina(c: &Compressed<Self::Base>) -> Self {
        match c.g4_fraction() {
            None => Self::one(),
            Some((num, den)) => finish_karabina(c, num*den.inv()),
        }
    }

    /// Decompress several elements with a single base field inversion.
    fn batch_decompress_karabina(c: &[Compressed<Self::Base>]) -> Vec<Self> {
        let fractions: Vec<Option<(Self::Base, Self::Base)>> = c.iter().map(|ci| ci.g4_fraction()).collect();
        let dens: Vec<Self::Base> = fractions.iter()
            .map(|fr| fr.map_or(Self::Base::one(), |(_, den)| den))
            .collect();
        let inv = Self::Base::batch_invert(&dens);
        c.iter().zip(fractions).zip(inv)
            .map(|((ci, fr), di)| match fr {
                None => Self::one(),
                Some((num, _)) => finish_karabina(ci, num*di),
            })
            .collect()
    }

    /// Torus-based compression <i>y = (z&#x2080; + 1)/z&#x2081;</i> of <i>z = z&#x2080; + z&#x2081;i</i>.
    fn compress_torus(&self) -> Result<Self::Cubic, PairingError> {
        let (z0, z1) = self.halves();
        if bool::from(z1.is_zero()) {
            return Err(PairingError::TorusZeroDivisor);
        }
        Ok((z0 + Self::Cubic::one())*z1.inv())
    }

    /// Inverse of `compress_torus`: <i>(y + i)/(y - i)</i>.
    fn decompress_torus(y: &Self::Cubic) -> Self {
        let num = Self::from_halves(*y, Self::Cubic::one());
        let den = Self::from_halves(*y, -Self::Cubic::one());
        num*den.inv()
    }

    /// Compress several elements with a single inversion.
    /// Fails without computing anything if any element has a zero second half.
    fn batch_compress_torus(z: &[Self]) -> Result<Vec<Self::Cubic>, PairingError> {
        let halves: Vec<(Self::Cubic, Self::Cubic)> = z.iter().map(|zi| zi.halves()).collect();
        if halves.iter().any(|(_, z1)| bool::from(z1.is_zero())) {
            return Err(PairingError::TorusZeroDivisor);
        }
        let dens: Vec<Self::Cubic> = halves.iter().map(|&(_, z1)| z1).collect();
        let inv = Self::Cubic::batch_invert(&dens);
        Ok(halves.iter().zip(inv)
            .map(|(&(z0, _), d)| (z0 + Self::Cubic::one())*d)
            .collect())
    }

    /// Decompress several torus-compressed elements with a single inversion.
    fn batch_decompress_torus(y: &[Self::Cubic]) -> Vec<Self> {
        let dens: Vec<Self> = y.iter().map(|yi| Self::from_halves(*yi, -Self::Cubic::one())).collect();
        let inv = Self::batch_invert(&dens);
        y.iter().zip(inv)
            .map(|(yi, d)| Self::from_halves(*yi, Self::Cubic::one())*d)
            .collect()
    }

    /// Determine whether <i>f&middot;f&#x0304; = 1</i>, where <i>f&#x0304;</i> is the conjugate of <i>f</i>.
    fn is_unitary(&self) -> bool {
        bool::from(((*self)*self.conj()).is_one())
    }

    /// Inverse of a unitary element.
    fn inverse_unitary(&self) -> Self {
        self.conj()
    }

    /// Compute `self`<sup><i>e</i></sup> by cyclotomic squarings along the NAF of <i>e</i>.
    fn cyclotomic_exp(&self, e: &BigUint) -> Self {
        let inv = self.conj();
        let mut v = Self::one();
        for &d in naf(e).iter().rev() {
            v = v.cyclotomic_square();
            match d {
                1 => v *= *self,
                -1 => v *= inv,
                _ => {}
            }
        }
        v
    }

    /// Compute `self`<sup>2<sup><i>n</i></sup></sup> by <i>n</i> Granger-Scott squarings.
    fn n_square(&self, n: usize) -> Self {
        run(&[ChainOp::Square(1, 0, n)], self)
    }

    /// Compute `self`<sup>2<sup><i>n</i></sup></sup> by <i>n</i> compressed squarings.
    fn n_square_compressed(&self, n: usize) -> Self {
        run(&[ChainOp::SquareCompressed(1, 0, n)], self)
    }
}

impl<T: SexticExtension> Cyclotomic for T {}

/// Rebuild <i>g&#x2080; = &nu;(2g&#x2084;&sup2; + g&#x2083;g&#x2085; - 3g&#x2081;g&#x2082;) + 1</i> once <i>g&#x2084;</i> is known.
fn finish_karabina<T: SexticExtension>(c: &Compressed<T::Base>, g4: T::Base) -> T {
    let Compressed { g1, g2, g3, g5 } = *c;
    let t1 = g2*g1;
    let t2 = (g4.sq() - t1).double() - t1 + g3*g5;
    let g0 = t2.mul_by_non_residue() + T::Base::one();
    T::from_halves(
        T::Cubic::from_coeffs(g0, g1, g2),
        T::Cubic::from_coeffs(g3, g4, g5),
    )
}


/// Random elements of the cyclotomic subgroups, for tests.
#[cfg(test)]
pub(crate) mod sampling {
    use crate::bls24fp24::BLS24Fp24;
    use crate::bls24param::BLS24Param;
    use crate::bw6fp6::BW6Fp6;
    use crate::bw6param::BW6Param;
    use crate::traits::{SexticExtension, TowerField};
    use crypto_bigint::Random;
    use crypto_bigint::rand_core::CryptoRngCore;

    /// <i>t</i><sup><i>p&#x2074;</i> + 1</sup> with <i>t = a&#x0304;/a</i>.
    pub(crate) fn bls24_cyclotomic<PAR: BLS24Param, const LIMBS: usize>(rng: &mut impl CryptoRngCore) -> BLS24Fp24<PAR, LIMBS> {
        let a = BLS24Fp24::<PAR, LIMBS>::random(rng);
        let t = a.conj()*a.inv();
        t.frobenius_quad()*t
    }

    /// <i>t</i><sup><i>p</i> + 1</sup> with <i>t = a&#x0304;/a</i>.
    pub(crate) fn bw6_cyclotomic<PAR: BW6Param, const LIMBS: usize>(rng: &mut impl CryptoRngCore) -> BW6Fp6<PAR, LIMBS> {
        let a = BW6Fp6::<PAR, LIMBS>::random(rng);
        let t = a.conj()*a.inv();
        t.frobenius()*t
    }
}


#[cfg(test)]
mod tests {
    use crate::fp::FpParam;
    use crate::bls24param::{BLS24315Param, BLS24317Param, BLS24Param};
    use crate::bw6param::{BW6761Param, BW6Param};
    use crate::bls24fp24::BLS24Fp24;
    use crate::bw6fp6::BW6Fp6;
    use crate::fp::Fp;
    use crypto_bigint::Random;
    use num_bigint::RandBigInt;
    use std::time::SystemTime;
    use super::sampling::{bls24_cyclotomic, bw6_cyclotomic};
    use super::*;

    const TESTS: usize = 20;

    /// Properties shared by both target fields, given a sampler of cyclotomic elements.
    fn cyclotomic_test<T: Cyclotomic>(name: &str, mut sample: impl FnMut() -> T) {
        let mut rng = rand::thread_rng();

        println!();
        println!("Performing {} {} cyclotomic test(s)...", TESTS, name);
        let now = SystemTime::now();

        for _t in 0..TESTS {
            let f = sample();
            let g = sample();
            assert!(f.is_unitary());
            assert_eq!(f.inverse_unitary(), f.inv());

            // squarings:
            let f2 = f.sq();
            assert_eq!(f.cyclotomic_square(), f2);
            let c = f.compress_karabina();
            assert_eq!(T::decompress_karabina(&c), f);
            assert_eq!(T::decompress_karabina(&c.cyclotomic_square_compressed()), f2);
            assert_eq!(f.n_square(5), f2.sq().sq().sq().sq());
            assert_eq!(f.n_square_compressed(5), f.n_square(5));
            assert_eq!(f.n_square(0), f);

            // batch vs. single decompression, including the identity (g2 = g3 = 0):
            let batch = [f.compress_karabina(), g.compress_karabina(), T::one().compress_karabina(), f2.compress_karabina()];
            let single: Vec<T> = batch.iter().map(|ci| T::decompress_karabina(ci)).collect();
            assert_eq!(T::batch_decompress_karabina(&batch), single);
            assert_eq!(single[2], T::one());

            // torus compression:
            let y = f.compress_torus().unwrap();
            assert_eq!(T::decompress_torus(&y), f);
            let ys = T::batch_compress_torus(&[f, g]).unwrap();
            assert_eq!(ys[0], y);
            assert_eq!(T::batch_decompress_torus(&ys), vec![f, g]);

            // exponentiation:
            let e = rng.gen_biguint(128);
            assert_eq!(f.cyclotomic_exp(&e), f.pow(&e));
        }

        // with g3 = 0 the missing coordinate is g4 = 2g1g5/g2:
        let (g1, g2, g5) = (T::Base::random(&mut rng), T::Base::random(&mut rng), T::Base::random(&mut rng));
        let c = Compressed { g1, g2, g3: T::Base::zero(), g5 };
        assert_eq!(c.g4_fraction(), Some(((g1*g5).double(), g2)));
        let d = T::decompress_karabina(&c);
        let (h0, h1) = d.halves();
        let [_, d1, d2] = h0.coeffs();
        let [d3, d4, d5] = h1.coeffs();
        assert_eq!((d1, d2, d3, d5), (g1, g2, T::Base::zero(), g5));
        assert_eq!(d4*g2, (g1*g5).double());
        assert_eq!(T::batch_decompress_karabina(&[c, T::one().compress_karabina()]), vec![d, T::one()]);
        assert_eq!(Compressed { g1, g2: T::Base::zero(), g3: T::Base::zero(), g5 }.g4_fraction(), None);

        // +1 and -1 have no torus representation:
        assert_eq!(T::one().compress_torus(), Err(PairingError::TorusZeroDivisor));
        assert_eq!((-T::one()).compress_torus(), Err(PairingError::TorusZeroDivisor));
        let f = sample();
        assert_eq!(T::batch_compress_torus(&[f, T::one()]), Err(PairingError::TorusZeroDivisor));
        assert!(T::batch_compress_torus(&[]).unwrap().is_empty());
        assert!(T::batch_decompress_karabina(&[]).is_empty());

        match now.elapsed() {
            Ok(elapsed) => {
                println!("Elapsed time: {} ms.", (elapsed.as_micros() as f64)/1000.0);
            }
            Err(e) => {
                println!("Error: {e:?}");
            }
        }
    }

    #[allow(non_snake_case)]
    fn BLS24Cyclotomic_test<PAR: BLS24Param, const LIMBS: usize>() {
        let mut rng = rand::thread_rng();
        let name = format!("BLS24-{:03}", Fp::<PAR, LIMBS>::modulus().bits());
        cyclotomic_test::<BLS24Fp24<PAR, LIMBS>>(&name, || bls24_cyclotomic(&mut rng));
    }

    #[allow(non_snake_case)]
    fn BW6Cyclotomic_test<PAR: BW6Param, const LIMBS: usize>() {
        let mut rng = rand::thread_rng();
        let name = format!("BW6-{:03}", Fp::<PAR, LIMBS>::modulus().bits());
        cyclotomic_test::<BW6Fp6<PAR, LIMBS>>(&name, || bw6_cyclotomic(&mut rng));
    }

    #[test]
    #[allow(non_snake_case)]
    fn BLS24315Cyclotomic_test() {
        const LIMBS: usize = BLS24315Param::LIMBS;
        BLS24Cyclotomic_test::<BLS24315Param, LIMBS>();
    }

    #[test]
    #[allow(non_snake_case)]
    fn BLS24317Cyclotomic_test() {
        const LIMBS: usize = BLS24317Param::LIMBS;
        BLS24Cyclotomic_test::<BLS24317Param, LIMBS>();
    }

    #[test]
    #[allow(non_snake_case)]
    fn BW6761Cyclotomic_test() {
        const LIMBS: usize = BW6761Param::LIMBS;
        BW6Cyclotomic_test::<BW6761Param, LIMBS>();
    }
}
