#[cfg(not(any(target_pointer_width = "64")))]
compile_error!("this crate requires 64-bit limbs");

use crate::bw6param::BW6Param;
use crate::error::PairingError;
use crate::fp::Fp;
use crate::traits::{split_bytes, CubicExtension, NonResidue, One, TowerField, Zero};
use crypto_bigint::{Random, Word};
use crypto_bigint::rand_core::CryptoRngCore;
use crypto_bigint::subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use std::fmt::{Debug, Display, Formatter};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// The <b>F</b><sub><i>p&sup3;</i></sub> &simeq;
/// <b>F</b><sub><i>p</i></sub>&lbrack;<i>u</i>&rbrack;/&lt;<i>u&sup3; + 4</i>&gt; extension field.
pub struct BW6Fp3<PAR: BW6Param, const LIMBS: usize> {
    pub(crate) a0: Fp<PAR, LIMBS>,
    pub(crate) a1: Fp<PAR, LIMBS>,
    pub(crate) a2: Fp<PAR, LIMBS>,
}

impl<PAR: BW6Param, const LIMBS: usize> BW6Fp3<PAR, LIMBS> {
    /// Convert an <b>F</b><sub><i>p</i></sub> element to its <b>F</b><sub><i>p&sup3;</i></sub> counterpart.
    #[allow(non_snake_case)]
    #[inline]
    pub fn from_Fp(a0: Fp<PAR, LIMBS>) -> Self {
        Self { a0, a1: Fp::zero(), a2: Fp::zero() }
    }

    /// Convert a word-sized integer <i>w</i> to its <b>F</b><sub><i>p&sup3;</i></sub> counterpart.
    #[inline]
    pub fn from_word(w: Word) -> Self {
        Self::from_Fp(Fp::from_word(w))
    }

    /// Create an instance of the element <i>u</i> &in; <b>F</b><sub><i>p&sup3;</i></sub>.
    #[inline]
    pub fn u() -> Self {
        Self { a0: Fp::zero(), a1: Fp::one(), a2: Fp::zero() }
    }

    /// Hash input data into a field element with SHAKE-128.
    #[inline]
    pub fn shake128(data: &[u8]) -> Self {
        let c = Fp::shake128list(data, 3);
        Self { a0: c[0], a1: c[1], a2: c[2] }
    }

    /// Apply the Frobenius endomorphism to `self`,
    /// i.e. compute `self`<i>&#x1D56;</i> in <b>F</b><sub><i>p&sup3;</i></sub>.
    #[inline]
    pub fn frobenius(&self) -> Self {
        // u = v^2 in F_p6, hence u^k picks slot 2k of the F_p6 table:
        Self {
            a0: self.a0,
            a1: self.a1*Fp::from_slice(&PAR::FROB_1[2*LIMBS..3*LIMBS]),
            a2: self.a2*Fp::from_slice(&PAR::FROB_1[4*LIMBS..5*LIMBS]),
        }
    }
}

impl<PAR: BW6Param, const LIMBS: usize> Add for BW6Fp3<PAR, LIMBS> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::Output { a0: self.a0 + rhs.a0, a1: self.a1 + rhs.a1, a2: self.a2 + rhs.a2 }
    }
}

impl<PAR: BW6Param, const LIMBS: usize> AddAssign for BW6Fp3<PAR, LIMBS> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.a0 += rhs.a0;
        self.a1 += rhs.a1;
        self.a2 += rhs.a2;
    }
}

impl<PAR: BW6Param, const LIMBS: usize> TowerField for BW6Fp3<PAR, LIMBS> {
    type Prime = Fp<PAR, LIMBS>;
    const DEGREE: usize = 3;
    const BYTES: usize = 3*LIMBS*8;

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
            a2: Fp::from_bytes(parts[0])?,
            a1: Fp::from_bytes(parts[1])?,
            a0: Fp::from_bytes(parts[2])?,
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
        Self { a0: self.a0*(*k), a1: self.a1*(*k), a2: self.a2*(*k) }
    }
}

impl<PAR: BW6Param, const LIMBS: usize> NonResidue for BW6Fp3<PAR, LIMBS> {
    /// Multiply by <i>u</i>: (<i>a&#x2080; + a&#x2081;u + a&#x2082;u&sup2;</i>)<i>u</i> = <i>-4a&#x2082; + a&#x2080;u + a&#x2081;u&sup2;</i>.
    #[inline]
    fn mul_by_non_residue(&self) -> Self {
        Self { a0: self.a2.mul_by_non_residue(), a1: self.a0, a2: self.a1 }
    }
}

impl<PAR: BW6Param, const LIMBS: usize> CubicExtension for BW6Fp3<PAR, LIMBS> {
    type Base = Fp<PAR, LIMBS>;

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

impl<PAR: BW6Param, const LIMBS: usize> Clone for BW6Fp3<PAR, LIMBS> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<PAR: BW6Param, const LIMBS: usize> ConditionallySelectable for BW6Fp3<PAR, LIMBS> {
    #[inline]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            a0: Fp::conditional_select(&a.a0, &b.a0, choice),
            a1: Fp::conditional_select(&a.a1, &b.a1, choice),
            a2: Fp::conditional_select(&a.a2, &b.a2, choice),
        }
    }
}

impl<PAR: BW6Param, const LIMBS: usize> ConstantTimeEq for BW6Fp3<PAR, LIMBS> {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        self.a0.ct_eq(&other.a0) & self.a1.ct_eq(&other.a1) & self.a2.ct_eq(&other.a2)
    }
}

impl<PAR: BW6Param, const LIMBS: usize> Copy for BW6Fp3<PAR, LIMBS> {}

impl<PAR: BW6Param, const LIMBS: usize> Debug for BW6Fp3<PAR, LIMBS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self, f)
    }
}

impl<PAR: BW6Param, const LIMBS: usize> Display for BW6Fp3<PAR, LIMBS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} + {}*u + {}*u^2", self.a0, self.a1, self.a2)
    }
}

impl<PAR: BW6Param, const LIMBS: usize> Eq for BW6Fp3<PAR, LIMBS> {}

impl<PAR: BW6Param, const LIMBS: usize> Mul for BW6Fp3<PAR, LIMBS> {
    type Output = Self;

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

impl<PAR: BW6Param, const LIMBS: usize> Mul<BW6Fp3<PAR, LIMBS>> for Fp<PAR, LIMBS> {
    type Output = BW6Fp3<PAR, LIMBS>;

    #[inline]
    fn mul(self, rhs: BW6Fp3<PAR, LIMBS>) -> Self::Output {
        rhs.scale(&self)
    }
}

impl<PAR: BW6Param, const LIMBS: usize> MulAssign for BW6Fp3<PAR, LIMBS> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self*rhs;
    }
}

impl<PAR: BW6Param, const LIMBS: usize> Neg for BW6Fp3<PAR, LIMBS> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::Output { a0: -self.a0, a1: -self.a1, a2: -self.a2 }
    }
}

impl<PAR: BW6Param, const LIMBS: usize> One for BW6Fp3<PAR, LIMBS> {
    #[inline]
    fn one() -> Self {
        Self::from_Fp(Fp::one())
    }

    #[inline]
    fn is_one(&self) -> Choice {
        self.a0.is_one() & self.a1.is_zero() & self.a2.is_zero()
    }
}

impl<PAR: BW6Param, const LIMBS: usize> PartialEq for BW6Fp3<PAR, LIMBS> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<PAR: BW6Param, const LIMBS: usize> Random for BW6Fp3<PAR, LIMBS> {
    fn random(rng: &mut impl CryptoRngCore) -> Self {
        Self { a0: Fp::random(rng), a1: Fp::random(rng), a2: Fp::random(rng) }
    }
}

impl<PAR: BW6Param, const LIMBS: usize> Sub for BW6Fp3<PAR, LIMBS> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::Output { a0: self.a0 - rhs.a0, a1: self.a1 - rhs.a1, a2: self.a2 - rhs.a2 }
    }
}

impl<PAR: BW6Param, const LIMBS: usize> SubAssign for BW6Fp3<PAR, LIMBS> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.a0 -= rhs.a0;
        self.a1 -= rhs.a1;
        self.a2 -= rhs.a2;
    }
}

impl<PAR: BW6Param, const LIMBS: usize> Zero for BW6Fp3<PAR, LIMBS> {
    #[inline]
    fn zero() -> Self {
        Self { a0: Fp::zero(), a1: Fp::zero(), a2: Fp::zero() }
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
    use crate::bw6param::BW6761Param;
    use crate::traits::field_axioms_test;
    use std::time::SystemTime;
    use super::*;

    const TESTS: usize = 50;

    /// General BW6Fp3 test template.
    #[allow(non_snake_case)]
    fn BW6Fp3_test<PAR: BW6Param, const LIMBS: usize>() {
        let mut rng = rand::thread_rng();
        let p = Fp::<PAR, LIMBS>::modulus();

        println!();
        println!("Performing {} BW6-{:03}Fp3 test(s)...", TESTS, p.bits());
        let now = SystemTime::now();

        // u^3 = -4:
        let u = BW6Fp3::<PAR, LIMBS>::u();
        assert_eq!(u.cb(), BW6Fp3::from_Fp(Fp::from_i64(PAR::NON_RESIDUE)));

        for _t in 0..TESTS {
            field_axioms_test::<BW6Fp3<PAR, LIMBS>>(&mut rng);

            let e3: BW6Fp3<PAR, LIMBS> = BW6Fp3::random(&mut rng);
            let f3: BW6Fp3<PAR, LIMBS> = BW6Fp3::random(&mut rng);
            let c0: Fp<PAR, LIMBS> = Fp::random(&mut rng);
            let c1: Fp<PAR, LIMBS> = Fp::random(&mut rng);

            assert_eq!(e3.mul_by_non_residue(), e3*u);
            assert_eq!(e3.mul_by_01(&c0, &c1), e3*BW6Fp3::from_coeffs(c0, c1, Fp::zero()));
            assert_eq!(e3.mul_by_0(&c0), c0*e3);

            // Frobenius:
            assert_eq!(e3.frobenius().frobenius().frobenius(), e3);
            assert_eq!((e3*f3).frobenius(), e3.frobenius()*f3.frobenius());
        }
        let e3: BW6Fp3<PAR, LIMBS> = BW6Fp3::random(&mut rng);
        assert_eq!(e3.frobenius(), e3.pow(&p));
        assert_ne!(BW6Fp3::<PAR, LIMBS>::shake128(b"abc"), BW6Fp3::shake128(b"abd"));

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
    fn BW6761Fp3_test() {
        const LIMBS: usize = BW6761Param::LIMBS;
        BW6Fp3_test::<BW6761Param, LIMBS>();
    }
}
