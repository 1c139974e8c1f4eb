#[cfg(not(any(target_pointer_width = "64")))]
compile_error!("this crate requires 64-bit limbs");

use crate::bls24fp2::BLS24Fp2;
use crate::bls24param::BLS24Param;
use crate::error::PairingError;
use crate::fp::Fp;
use crate::traits::{split_bytes, NonResidue, One, TowerField, Zero};
use crypto_bigint::{Random, Word};
use crypto_bigint::rand_core::CryptoRngCore;
use crypto_bigint::subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use std::fmt::{Debug, Display, Formatter};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// The <b>F</b><sub><i>p&#x2074;</i></sub> &simeq;
/// <b>F</b><sub><i>p&sup2;</i></sub>&lbrack;<i>v</i>&rbrack;/&lt;<i>v&sup2; - &xi;</i>&gt; extension field.
/// NB: <i>v&sup2;</i> = <i>&xi;</i>, and <i>v</i> is the cubic non-residue defining <b>F</b><sub><i>p&sup1;&sup2;</i></sub>.
pub struct BLS24Fp4<PAR: BLS24Param, const LIMBS: usize> {
    pub(crate) re: BLS24Fp2<PAR, LIMBS>,
    pub(crate) im: BLS24Fp2<PAR, LIMBS>,
}

impl<PAR: BLS24Param, const LIMBS: usize> BLS24Fp4<PAR, LIMBS> {
    /// Convert an <b>F</b><sub><i>p&sup2;</i></sub> element to its <b>F</b><sub><i>p&#x2074;</i></sub> counterpart.
    #[allow(non_snake_case)]
    #[inline]
    pub fn from_Fp2(re: BLS24Fp2<PAR, LIMBS>) -> Self {
        Self { re, im: BLS24Fp2::zero() }
    }

    /// Convert an <b>F</b><sub><i>p</i></sub> element to its <b>F</b><sub><i>p&#x2074;</i></sub> counterpart.
    #[allow(non_snake_case)]
    #[inline]
    pub fn from_Fp(re: Fp<PAR, LIMBS>) -> Self {
        Self { re: BLS24Fp2::from_Fp(re), im: BLS24Fp2::zero() }
    }

    /// Convert a word-sized integer <i>w</i> to its <b>F</b><sub><i>p&#x2074;</i></sub> counterpart.
    #[inline]
    pub fn from_word(w: Word) -> Self {
        Self { re: BLS24Fp2::from_word(w), im: BLS24Fp2::zero() }
    }

    /// Assemble an <b>F</b><sub><i>p&#x2074;</i></sub> element
    /// from its <b>F</b><sub><i>p&sup2;</i></sub> components.
    #[allow(non_snake_case)]
    #[inline]
    pub fn from_Fp2_pair(re: BLS24Fp2<PAR, LIMBS>, im: BLS24Fp2<PAR, LIMBS>) -> Self {
        Self { re, im }
    }

    /// Read an element from a constant table holding `4*LIMBS` words in tower order.
    #[inline]
    pub(crate) fn from_slice(v: &[Word]) -> Self {
        Self {
            re: BLS24Fp2::from_slice(&v[0..2*LIMBS]),
            im: BLS24Fp2::from_slice(&v[2*LIMBS..4*LIMBS]),
        }
    }

    /// Hash input data into a field element with SHAKE-128.
    #[inline]
    pub fn shake128(data: &[u8]) -> Self {
        let tuple = Fp::shake128list(data, 4);
        Self {
            re: BLS24Fp2::from_Fp_pair(tuple[0], tuple[1]),
            im: BLS24Fp2::from_Fp_pair(tuple[2], tuple[3]),
        }
    }

    /// Hash input data into a field element with SHAKE-256.
    #[inline]
    pub fn shake256(data: &[u8]) -> Self {
        let tuple = Fp::shake256list(data, 4);
        Self {
            re: BLS24Fp2::from_Fp_pair(tuple[0], tuple[1]),
            im: BLS24Fp2::from_Fp_pair(tuple[2], tuple[3]),
        }
    }

    /// Create an instance of the element <i>v</i> &in; <b>F</b><sub><i>p&#x2074;</i></sub>.
    #[inline]
    pub fn v() -> Self {
        Self { re: BLS24Fp2::zero(), im: BLS24Fp2::one() }
    }

    /// Apply the Frobenius endomorphism to `self`,
    /// i.e. compute `self`<i>&#x1D56;</i> in <b>F</b><sub><i>p&#x2074;</i></sub>,
    /// using <i>v&#x1D56; = &xi;</i><sup>(<i>p</i>-1)/2</sup><i>v</i>.
    #[inline]
    pub fn frobenius(&self) -> Self {
        // v = i^6 in F_p24, so its Frobenius constant is slot 6 of the F_p24 table:
        let c = BLS24Fp2::from_slice(&PAR::FROB_1[12*LIMBS..14*LIMBS]);
        Self { re: self.re.frobenius(), im: self.im.frobenius()*c }
    }

    /// Conjugate of `self` in <b>F</b><sub><i>p&#x2074;</i></sub>
    /// over <b>F</b><sub><i>p&sup2;</i></sub>, namely, `self`<sup><i>p</i>&sup2;</sup>.
    #[inline]
    pub fn conj(&self) -> Self {
        Self { re: self.re, im: -self.im }
    }

    /// <b>F</b><sub><i>p&sup2;</i></sub>-norm of this element,
    /// namely, if this element is <i>a + bv</i>, return <i>a&sup2; - &xi;b&sup2;</i>.
    #[inline]
    pub fn norm(&self) -> BLS24Fp2<PAR, LIMBS> {
        self.re.sq() - self.im.sq().mul_by_non_residue()
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Add for BLS24Fp4<PAR, LIMBS> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::Output { re: self.re + rhs.re, im: self.im + rhs.im }
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> AddAssign for BLS24Fp4<PAR, LIMBS> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.re += rhs.re;
        self.im += rhs.im;
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> TowerField for BLS24Fp4<PAR, LIMBS> {
    type Prime = Fp<PAR, LIMBS>;
    const DEGREE: usize = 4;
    const BYTES: usize = 4*LIMBS*8;

    #[inline]
    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.im.to_bytes();
        bytes.append(&mut self.re.to_bytes());
        bytes
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, PairingError> {
        let parts = split_bytes(bytes, Self::BYTES, 2)?;
        Ok(Self { im: BLS24Fp2::from_bytes(parts[0])?, re: BLS24Fp2::from_bytes(parts[1])? })
    }

    #[inline]
    fn double(&self) -> Self {
        Self { re: self.re.double(), im: self.im.double() }
    }

    #[inline]
    fn half(&self) -> Self {
        Self { re: self.re.half(), im: self.im.half() }
    }

    #[inline]
    fn sq(&self) -> Self {
        let c0 = self.re - self.im;
        let c3 = self.re - self.im.mul_by_non_residue();
        let c2 = self.re*self.im;
        let c0 = c0*c3 + c2;
        Self { re: c0 + c2.mul_by_non_residue(), im: c2.double() }
    }

    #[inline]
    fn inv(&self) -> Self {
        let t = self.norm().inv();
        Self { re: self.re*t, im: -(self.im*t) }
    }

    #[inline]
    fn scale(&self, k: &Fp<PAR, LIMBS>) -> Self {
        Self { re: self.re.scale(k), im: self.im.scale(k) }
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> NonResidue for BLS24Fp4<PAR, LIMBS> {
    /// Multiply by <i>v</i>: (<i>a + bv</i>)<i>v</i> = <i>&xi;b + av</i>.
    #[inline]
    fn mul_by_non_residue(&self) -> Self {
        Self { re: self.im.mul_by_non_residue(), im: self.re }
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Clone for BLS24Fp4<PAR, LIMBS> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> ConditionallySelectable for BLS24Fp4<PAR, LIMBS> {
    #[inline]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            re: BLS24Fp2::conditional_select(&a.re, &b.re, choice),
            im: BLS24Fp2::conditional_select(&a.im, &b.im, choice),
        }
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> ConstantTimeEq for BLS24Fp4<PAR, LIMBS> {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        self.re.ct_eq(&other.re) & self.im.ct_eq(&other.im)
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Copy for BLS24Fp4<PAR, LIMBS> {}

impl<PAR: BLS24Param, const LIMBS: usize> Debug for BLS24Fp4<PAR, LIMBS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self, f)
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Display for BLS24Fp4<PAR, LIMBS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}) + ({})*v", self.re, self.im)
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Eq for BLS24Fp4<PAR, LIMBS> {}

impl<PAR: BLS24Param, const LIMBS: usize> Mul for BLS24Fp4<PAR, LIMBS> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        let t0 = self.re*rhs.re;
        let t1 = self.im*rhs.im;
        Self::Output {
            re: t0 + t1.mul_by_non_residue(),
            im: (self.re + self.im)*(rhs.re + rhs.im) - t0 - t1,
        }
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Mul<BLS24Fp4<PAR, LIMBS>> for Word {
    type Output = BLS24Fp4<PAR, LIMBS>;

    #[inline]
    fn mul(self, rhs: BLS24Fp4<PAR, LIMBS>) -> Self::Output {
        Self::Output { re: self*rhs.re, im: self*rhs.im }
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Mul<BLS24Fp4<PAR, LIMBS>> for Fp<PAR, LIMBS> {
    type Output = BLS24Fp4<PAR, LIMBS>;

    #[inline]
    fn mul(self, rhs: BLS24Fp4<PAR, LIMBS>) -> Self::Output {
        rhs.scale(&self)
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Mul<BLS24Fp4<PAR, LIMBS>> for BLS24Fp2<PAR, LIMBS> {
    type Output = BLS24Fp4<PAR, LIMBS>;

    /// Compute the product of a left factor from <b>F</b><sub><i>p&sup2;</i></sub>
    /// by a right factor from <b>F</b><sub><i>p&#x2074;</i></sub>.
    #[inline]
    fn mul(self, rhs: BLS24Fp4<PAR, LIMBS>) -> Self::Output {
        Self::Output { re: self*rhs.re, im: self*rhs.im }
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> MulAssign for BLS24Fp4<PAR, LIMBS> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self*rhs;
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Neg for BLS24Fp4<PAR, LIMBS> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::Output { re: -self.re, im: -self.im }
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> One for BLS24Fp4<PAR, LIMBS> {
    #[inline]
    fn one() -> Self {
        Self { re: BLS24Fp2::one(), im: BLS24Fp2::zero() }
    }

    #[inline]
    fn is_one(&self) -> Choice {
        self.re.is_one() & self.im.is_zero()
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> PartialEq for BLS24Fp4<PAR, LIMBS> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Random for BLS24Fp4<PAR, LIMBS> {
    fn random(rng: &mut impl CryptoRngCore) -> Self {
        Self { re: BLS24Fp2::random(rng), im: BLS24Fp2::random(rng) }
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Sub for BLS24Fp4<PAR, LIMBS> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::Output { re: self.re - rhs.re, im: self.im - rhs.im }
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> SubAssign for BLS24Fp4<PAR, LIMBS> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.re -= rhs.re;
        self.im -= rhs.im;
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Zero for BLS24Fp4<PAR, LIMBS> {
    #[inline]
    fn zero() -> Self {
        Self { re: BLS24Fp2::zero(), im: BLS24Fp2::zero() }
    }

    #[inline]
    fn is_zero(&self) -> Choice {
        self.re.is_zero() & self.im.is_zero()
    }

    #[inline]
    fn set_zero(&mut self) {
        self.re.set_zero();
        self.im.set_zero()
    }
}


#[cfg(test)]
mod tests {
    use crate::fp::FpParam;
    use crate::bls24param::{BLS24315Param, BLS24317Param};
    use crate::traits::field_axioms_test;
    use std::time::SystemTime;
    use super::*;

    const TESTS: usize = 100;

    /// General BLS24Fp4 test template.
    #[allow(non_snake_case)]
    fn BLS24Fp4_test<PAR: BLS24Param, const LIMBS: usize>() {
        let mut rng = rand::thread_rng();
        let p = Fp::<PAR, LIMBS>::modulus();

        println!();
        println!("Performing {} BLS24-{:03}Fp4 test(s)...", TESTS, p.bits());
        let now = SystemTime::now();

        // v^2 = xi:
        let v = BLS24Fp4::<PAR, LIMBS>::v();
        assert_eq!(v.sq(), BLS24Fp4::from_Fp2(BLS24Fp2::one().mul_by_non_residue()));

        for _t in 0..TESTS {
            field_axioms_test::<BLS24Fp4<PAR, LIMBS>>(&mut rng);

            let e4: BLS24Fp4<PAR, LIMBS> = BLS24Fp4::random(&mut rng);
            let f4: BLS24Fp4<PAR, LIMBS> = BLS24Fp4::random(&mut rng);

            // non-residue multiplication:
            assert_eq!(e4.mul_by_non_residue(), e4*v);

            // norm and conjugation:
            assert_eq!(e4*e4.conj(), BLS24Fp4::from_Fp2(e4.norm()));
            assert_eq!((e4*f4).norm(), e4.norm()*f4.norm());

            // Frobenius:
            assert_eq!(e4.frobenius().frobenius(), e4.conj());
            assert_eq!(e4.frobenius().frobenius().frobenius().frobenius(), e4);
            assert_eq!((e4*f4).frobenius(), e4.frobenius()*f4.frobenius());

            // hybrid multiplication:
            let e2: BLS24Fp2<PAR, LIMBS> = BLS24Fp2::random(&mut rng);
            assert_eq!(e2*e4, BLS24Fp4::from_Fp2(e2)*e4);
        }
        // Frobenius vs. exponentiation:
        let e4: BLS24Fp4<PAR, LIMBS> = BLS24Fp4::random(&mut rng);
        assert_eq!(e4.frobenius(), e4.pow(&p));

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
    fn BLS24315Fp4_test() {
        const LIMBS: usize = BLS24315Param::LIMBS;
        BLS24Fp4_test::<BLS24315Param, LIMBS>();
    }

    #[test]
    #[allow(non_snake_case)]
    fn BLS24317Fp4_test() {
        const LIMBS: usize = BLS24317Param::LIMBS;
        BLS24Fp4_test::<BLS24317Param, LIMBS>();
    }
}
