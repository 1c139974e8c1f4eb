#[cfg(not(any(target_pointer_width = "64")))]
compile_error!("this crate requires 64-bit limbs");

use crate::bls24fp4::BLS24Fp4;
use crate::bls24param::BLS24Param;
use crate::error::PairingError;
use crate::fp::Fp;
use crate::traits::{split_bytes, CubicExtension, NonResidue, One, TowerField, Zero};
use crypto_bigint::Random;
use crypto_bigint::rand_core::CryptoRngCore;
use crypto_bigint::subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use std::fmt::{Debug, Display, Formatter};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// The <b>F</b><sub><i>p&sup1;&sup2;</i></sub> &simeq;
/// <b>F</b><sub><i>p&#x2074;</i></sub>&lbrack;<i>w</i>&rbrack;/&lt;<i>w&sup3; - v</i>&gt; extension field.
pub struct BLS24Fp12<PAR: BLS24Param, const LIMBS: usize> {
    pub(crate) a0: BLS24Fp4<PAR, LIMBS>,
    pub(crate) a1: BLS24Fp4<PAR, LIMBS>,
    pub(crate) a2: BLS24Fp4<PAR, LIMBS>,
}

impl<PAR: BLS24Param, const LIMBS: usize> BLS24Fp12<PAR, LIMBS> {
    /// Convert an <b>F</b><sub><i>p&#x2074;</i></sub> element to its <b>F</b><sub><i>p&sup1;&sup2;</i></sub> counterpart.
    #[allow(non_snake_case)]
    #[inline]
    pub fn from_Fp4(a0: BLS24Fp4<PAR, LIMBS>) -> Self {
        Self { a0, a1: BLS24Fp4::zero(), a2: BLS24Fp4::zero() }
    }

    /// Create an instance of the element <i>w</i> &in; <b>F</b><sub><i>p&sup1;&sup2;</i></sub>.
    #[inline]
    pub fn w() -> Self {
        Self { a0: BLS24Fp4::zero(), a1: BLS24Fp4::one(), a2: BLS24Fp4::zero() }
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Add for BLS24Fp12<PAR, LIMBS> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::Output { a0: self.a0 + rhs.a0, a1: self.a1 + rhs.a1, a2: self.a2 + rhs.a2 }
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> AddAssign for BLS24Fp12<PAR, LIMBS> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.a0 += rhs.a0;
        self.a1 += rhs.a1;
        self.a2 += rhs.a2;
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> TowerField for BLS24Fp12<PAR, LIMBS> {
    type Prime = Fp<PAR, LIMBS>;
    const DEGREE: usize = 12;
    const BYTES: usize = 12*LIMBS*8;

    #[inline]
    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.a2.to_bytes();
        bytes.append(&mut self.a1.to_bytes());
        bytes.append(&mut self.a0.to_bytes());
        bytes
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, PairingError> {
        let parts = split_bytes(bytes, Self::BYTES, 3)?;
        Ok(Self {
            a2: BLS24Fp4::from_bytes(parts[0])?,
            a1: BLS24Fp4::from_bytes(parts[1])?,
            a0: BLS24Fp4::from_bytes(parts[2])?,
        })
    }

    #[inline]
    fn double(&self) -> Self {
        Self { a0: self.a0.double(), a1: self.a1.double(), a2: self.a2.double() }
    }

    #[inline]
    fn half(&self) -> Self {
        Self { a0: self.a0.half(), a1: self.a1.half(), a2: self.a2.half() }
    }

    /// Chung-Hasan SQR2 squaring (Devegili et al., Algorithm 16).
    #[inline]
    fn sq(&self) -> Self {
        let (x0, x1, x2) = (self.a0, self.a1, self.a2);
        let c4 = (x0*x1).double();
        let c5 = x2.sq();
        let c1 = c5.mul_by_non_residue() + c4;
        let c2 = c4 - c5;
        let c3 = x0.sq();
        let c4 = (x0 - x1 + x2).sq();
        let c5 = (x1*x2).double();
        Self {
            a0: c5.mul_by_non_residue() + c3,
            a1: c1,
            a2: c2 + c4 + c5 - c3,
        }
    }

    /// Devegili et al., Algorithm 17.
    #[inline]
    fn inv(&self) -> Self {
        let (x0, x1, x2) = (self.a0, self.a1, self.a2);
        let c0 = x0.sq() - (x1*x2).mul_by_non_residue();
        let c1 = x2.sq().mul_by_non_residue() - x0*x1;
        let c2 = x1.sq() - x0*x2;
        let t = (x0*c0 + (x2*c1 + x1*c2).mul_by_non_residue()).inv();
        Self { a0: c0*t, a1: c1*t, a2: c2*t }
    }

    #[inline]
    fn scale(&self, k: &Fp<PAR, LIMBS>) -> Self {
        Self { a0: self.a0.scale(k), a1: self.a1.scale(k), a2: self.a2.scale(k) }
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> NonResidue for BLS24Fp12<PAR, LIMBS> {
    /// Multiply by <i>w</i>, the non-residue defining <b>F</b><sub><i>p&sup2;&#x2074;</i></sub>.
    #[inline]
    fn mul_by_non_residue(&self) -> Self {
        Self { a0: self.a2.mul_by_non_residue(), a1: self.a0, a2: self.a1 }
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> CubicExtension for BLS24Fp12<PAR, LIMBS> {
    type Base = BLS24Fp4<PAR, LIMBS>;

    #[inline]
    fn from_coeffs(c0: Self::Base, c1: Self::Base, c2: Self::Base) -> Self {
        Self { a0: c0, a1: c1, a2: c2 }
    }

    #[inline]
    fn coeffs(&self) -> [Self::Base; 3] {
        [self.a0, self.a1, self.a2]
    }

    #[inline]
    fn mul_by_01(&self, c0: &Self::Base, c1: &Self::Base) -> Self {
        let a = self.a0*(*c0);
        let b = self.a1*(*c1);
        Self {
            a0: ((*c1)*(self.a1 + self.a2) - b).mul_by_non_residue() + a,
            a1: (*c0 + *c1)*(self.a0 + self.a1) - a - b,
            a2: (*c0)*(self.a0 + self.a2) - a + b,
        }
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Clone for BLS24Fp12<PAR, LIMBS> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> ConditionallySelectable for BLS24Fp12<PAR, LIMBS> {
    #[inline]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            a0: BLS24Fp4::conditional_select(&a.a0, &b.a0, choice),
            a1: BLS24Fp4::conditional_select(&a.a1, &b.a1, choice),
            a2: BLS24Fp4::conditional_select(&a.a2, &b.a2, choice),
        }
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> ConstantTimeEq for BLS24Fp12<PAR, LIMBS> {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        self.a0.ct_eq(&other.a0) & self.a1.ct_eq(&other.a1) & self.a2.ct_eq(&other.a2)
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Copy for BLS24Fp12<PAR, LIMBS> {}

impl<PAR: BLS24Param, const LIMBS: usize> Debug for BLS24Fp12<PAR, LIMBS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self, f)
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Display for BLS24Fp12<PAR, LIMBS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}) + ({})*w + ({})*w^2", self.a0, self.a1, self.a2)
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Eq for BLS24Fp12<PAR, LIMBS> {}

impl<PAR: BLS24Param, const LIMBS: usize> Mul for BLS24Fp12<PAR, LIMBS> {
    type Output = Self;

    /// Karatsuba multiplication (Devegili et al., Algorithm 13).
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        let (x0, x1, x2) = (self.a0, self.a1, self.a2);
        let (y0, y1, y2) = (rhs.a0, rhs.a1, rhs.a2);
        let t0 = x0*y0;
        let t1 = x1*y1;
        let t2 = x2*y2;
        Self::Output {
            a0: ((x1 + x2)*(y1 + y2) - t1 - t2).mul_by_non_residue() + t0,
            a1: (x0 + x1)*(y0 + y1) - t0 - t1 + t2.mul_by_non_residue(),
            a2: (x0 + x2)*(y0 + y2) - t0 - t2 + t1,
        }
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> MulAssign for BLS24Fp12<PAR, LIMBS> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self*rhs;
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Neg for BLS24Fp12<PAR, LIMBS> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::Output { a0: -self.a0, a1: -self.a1, a2: -self.a2 }
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> One for BLS24Fp12<PAR, LIMBS> {
    #[inline]
    fn one() -> Self {
        Self::from_Fp4(BLS24Fp4::one())
    }

    #[inline]
    fn is_one(&self) -> Choice {
        self.a0.is_one() & self.a1.is_zero() & self.a2.is_zero()
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> PartialEq for BLS24Fp12<PAR, LIMBS> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Random for BLS24Fp12<PAR, LIMBS> {
    fn random(rng: &mut impl CryptoRngCore) -> Self {
        Self { a0: BLS24Fp4::random(rng), a1: BLS24Fp4::random(rng), a2: BLS24Fp4::random(rng) }
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Sub for BLS24Fp12<PAR, LIMBS> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::Output { a0: self.a0 - rhs.a0, a1: self.a1 - rhs.a1, a2: self.a2 - rhs.a2 }
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> SubAssign for BLS24Fp12<PAR, LIMBS> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.a0 -= rhs.a0;
        self.a1 -= rhs.a1;
        self.a2 -= rhs.a2;
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Zero for BLS24Fp12<PAR, LIMBS> {
    #[inline]
    fn zero() -> Self {
        Self { a0: BLS24Fp4::zero(), a1: BLS24Fp4::zero(), a2: BLS24Fp4::zero() }
    }

    #[inline]
    fn is_zero(&self) -> Choice {
        self.a0.is_zero() & self.a1.is_zero() & self.a2.is_zero()
    }

    #[inline]
    fn set_zero(&mut self) {
        self.a0.set_zero();
        self.a1.set_zero();
        self.a2.set_zero()
    }
}


#[cfg(test)]
mod tests {
    use crate::fp::FpParam;
    use crate::bls24param::{BLS24315Param, BLS24317Param};
    use crate::traits::field_axioms_test;
    use std::time::SystemTime;
    use super::*;

    const TESTS: usize = 50;

    /// General BLS24Fp12 test template.
    #[allow(non_snake_case)]
    fn BLS24Fp12_test<PAR: BLS24Param, const LIMBS: usize>() {
        let mut rng = rand::thread_rng();

        println!();
        println!("Performing {} BLS24-{:03}Fp12 test(s)...", TESTS, Fp::<PAR, LIMBS>::modulus().bits());
        let now = SystemTime::now();

        // w^3 = v:
        let w = BLS24Fp12::<PAR, LIMBS>::w();
        assert_eq!(w.cb(), BLS24Fp12::from_Fp4(BLS24Fp4::v()));

        for _t in 0..TESTS {
            field_axioms_test::<BLS24Fp12<PAR, LIMBS>>(&mut rng);

            let e12: BLS24Fp12<PAR, LIMBS> = BLS24Fp12::random(&mut rng);
            let c0: BLS24Fp4<PAR, LIMBS> = BLS24Fp4::random(&mut rng);
            let c1: BLS24Fp4<PAR, LIMBS> = BLS24Fp4::random(&mut rng);

            // non-residue multiplication:
            assert_eq!(e12.mul_by_non_residue(), e12*w);

            // sparse multiplication:
            assert_eq!(e12.mul_by_01(&c0, &c1), e12*BLS24Fp12::from_coeffs(c0, c1, BLS24Fp4::zero()));
            assert_eq!(e12.mul_by_0(&c0), e12*BLS24Fp12::from_Fp4(c0));
            assert_eq!(BLS24Fp12::from_coeffs(c0, c1, c0).coeffs(), [c0, c1, c0]);
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
    fn BLS24315Fp12_test() {
        const LIMBS: usize = BLS24315Param::LIMBS;
        BLS24Fp12_test::<BLS24315Param, LIMBS>();
    }

    #[test]
    #[allow(non_snake_case)]
    fn BLS24317Fp12_test() {
        const LIMBS: usize = BLS24317Param::LIMBS;
        BLS24Fp12_test::<BLS24317Param, LIMBS>();
    }
}
