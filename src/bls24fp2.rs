#[cfg(not(any(target_pointer_width = "64")))]
compile_error!("this crate requires 64-bit limbs");

use crate::bls24param::BLS24Param;
use crate::error::PairingError;
use crate::fp::Fp;
use crate::traits::{split_bytes, NonResidue, One, TowerField, Zero};
use crypto_bigint::{Random, Word};
use crypto_bigint::rand_core::CryptoRngCore;
use crypto_bigint::subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use std::fmt::{Debug, Display, Formatter};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// The <b>F</b><sub><i>p&sup2;</i></sub> &simeq; <b>F</b><sub><i>p</i></sub>&lbrack;<i>u</i>&rbrack;/&lt;<i>u&sup2; - &beta;</i>&gt;
/// extension field, where <i>&beta;</i> is the curve's small quadratic non-residue.
pub struct BLS24Fp2<PAR: BLS24Param, const LIMBS: usize> {
    pub(crate) re: Fp<PAR, LIMBS>,
    pub(crate) im: Fp<PAR, LIMBS>,
}

impl<PAR: BLS24Param, const LIMBS: usize> BLS24Fp2<PAR, LIMBS> {
    /// Convert an <b>F</b><sub><i>p</i></sub> element to its <b>F</b><sub><i>p&sup2;</i></sub> counterpart.
    #[allow(non_snake_case)]
    #[inline]
    pub fn from_Fp(re: Fp<PAR, LIMBS>) -> Self {
        Self { re, im: Fp::zero() }
    }

    /// Assemble an <b>F</b><sub><i>p&sup2;</i></sub> element
    /// from its <b>F</b><sub><i>p</i></sub> components.
    #[allow(non_snake_case)]
    #[inline]
    pub fn from_Fp_pair(re: Fp<PAR, LIMBS>, im: Fp<PAR, LIMBS>) -> Self {
        Self { re, im }
    }

    /// Convert a word-sized integer <i>w</i> to its <b>F</b><sub><i>p&sup2;</i></sub> counterpart.
    #[inline]
    pub fn from_word(w: Word) -> Self {
        Self { re: Fp::from_word(w), im: Fp::zero() }
    }

    /// Read an element from a constant table holding `2*LIMBS` words (real part first).
    #[inline]
    pub(crate) fn from_slice(v: &[Word]) -> Self {
        Self {
            re: Fp::from_slice(&v[0..LIMBS]),
            im: Fp::from_slice(&v[LIMBS..2*LIMBS]),
        }
    }

    /// Hash input data into a field element with SHAKE-128.
    #[inline]
    pub fn shake128(data: &[u8]) -> Self {
        let pair = Fp::shake128list(data, 2);
        Self { re: pair[0], im: pair[1] }
    }

    /// Hash input data into a field element with SHAKE-256.
    #[inline]
    pub fn shake256(data: &[u8]) -> Self {
        let pair = Fp::shake256list(data, 2);
        Self { re: pair[0], im: pair[1] }
    }

    /// Conjugate of `self` in <b>F</b><sub><i>p&sup2;</i></sub>
    /// over <b>F</b><sub><i>p</i></sub>, i.e. if `self` = <i>a + bu</i>, return <i>a - bu</i>.
    #[inline]
    pub fn conj(&self) -> Self {
        Self { re: self.re, im: -self.im }
    }

    /// The Frobenius endomorphism `self`<i>&#x1D56;</i>, which coincides with conjugation
    /// since <i>u&#x1D56;</i> = <i>&beta;</i><sup>(<i>p</i>-1)/2</sup><i>u</i> = -<i>u</i>.
    #[inline]
    pub fn frobenius(&self) -> Self {
        self.conj()
    }

    /// <b>F</b><sub><i>p</i></sub>-norm of this element,
    /// namely, if this element is <i>a + bu</i>, return <i>a&sup2; - &beta;b&sup2;</i>.
    #[inline]
    pub fn norm(&self) -> Fp<PAR, LIMBS> {
        self.re.sq() - self.im.sq().mul_by_non_residue()
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Add for BLS24Fp2<PAR, LIMBS> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::Output { re: self.re + rhs.re, im: self.im + rhs.im }
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> AddAssign for BLS24Fp2<PAR, LIMBS> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.re += rhs.re;
        self.im += rhs.im;
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> TowerField for BLS24Fp2<PAR, LIMBS> {
    type Prime = Fp<PAR, LIMBS>;
    const DEGREE: usize = 2;
    const BYTES: usize = 2*LIMBS*8;

    /// Serialize `self` as the big-endian encodings of its imaginary, then real part.
    #[inline]
    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.im.to_bytes();
        bytes.append(&mut self.re.to_bytes());
        bytes
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, PairingError> {
        let parts = split_bytes(bytes, Self::BYTES, 2)?;
        Ok(Self { im: Fp::from_bytes(parts[0])?, re: Fp::from_bytes(parts[1])? })
    }

    #[inline]
    fn double(&self) -> Self {
        Self { re: self.re.double(), im: self.im.double() }
    }

    #[inline]
    fn half(&self) -> Self {
        Self { re: self.re.half(), im: self.im.half() }
    }

    /// Complex squaring (Devegili et al., Algorithm 22).
    #[inline]
    fn sq(&self) -> Self {
        let c0 = self.re - self.im;
        let c3 = self.re - self.im.mul_by_non_residue();
        let c2 = self.re*self.im;
        let c0 = c0*c3 + c2;
        Self { re: c0 + c2.mul_by_non_residue(), im: c2.double() }
    }

    /// Inversion via the norm (Devegili et al., Algorithm 23).
    #[inline]
    fn inv(&self) -> Self {
        let t = self.norm().inv();
        Self { re: self.re*t, im: -(self.im*t) }
    }

    #[inline]
    fn scale(&self, k: &Fp<PAR, LIMBS>) -> Self {
        Self { re: self.re*(*k), im: self.im*(*k) }
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> NonResidue for BLS24Fp2<PAR, LIMBS> {
    /// Multiply by <i>&xi; = &xi;&#x2080; + &xi;&#x2081;u</i>:
    /// (<i>a&#x2080; + a&#x2081;u</i>)<i>&xi;</i> = (<i>&xi;&#x2080;a&#x2080; + &beta;&xi;&#x2081;a&#x2081;</i>) + (<i>&xi;&#x2081;a&#x2080; + &xi;&#x2080;a&#x2081;</i>)<i>u</i>.
    #[inline]
    fn mul_by_non_residue(&self) -> Self {
        let [x0, x1] = PAR::XI;
        Self {
            re: x0*self.re + (x1*self.im).mul_by_non_residue(),
            im: x1*self.re + x0*self.im,
        }
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Clone for BLS24Fp2<PAR, LIMBS> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> ConditionallySelectable for BLS24Fp2<PAR, LIMBS> {
    #[inline]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            re: Fp::conditional_select(&a.re, &b.re, choice),
            im: Fp::conditional_select(&a.im, &b.im, choice),
        }
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> ConstantTimeEq for BLS24Fp2<PAR, LIMBS> {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        self.re.ct_eq(&other.re) & self.im.ct_eq(&other.im)
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Copy for BLS24Fp2<PAR, LIMBS> {}

impl<PAR: BLS24Param, const LIMBS: usize> Debug for BLS24Fp2<PAR, LIMBS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self, f)
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Display for BLS24Fp2<PAR, LIMBS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if bool::from(self.im.is_zero()) {
            write!(f, "{}", self.re)
        } else if bool::from(self.re.is_zero()) {
            write!(f, "{}*u", self.im)
        } else {
            write!(f, "{} + {}*u", self.re, self.im)
        }
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Eq for BLS24Fp2<PAR, LIMBS> {}

impl<PAR: BLS24Param, const LIMBS: usize> Mul for BLS24Fp2<PAR, LIMBS> {
    type Output = Self;

    /// Karatsuba multiplication in <b>F</b><sub><i>p&sup2;</i></sub>.
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

impl<PAR: BLS24Param, const LIMBS: usize> Mul<BLS24Fp2<PAR, LIMBS>> for Word {
    type Output = BLS24Fp2<PAR, LIMBS>;

    /// Compute the product of a small integer left factor
    /// by a right factor from <b>F</b><sub><i>p&sup2;</i></sub>.
    #[inline]
    fn mul(self, rhs: BLS24Fp2<PAR, LIMBS>) -> Self::Output {
        Self::Output { re: self*rhs.re, im: self*rhs.im }
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Mul<BLS24Fp2<PAR, LIMBS>> for Fp<PAR, LIMBS> {
    type Output = BLS24Fp2<PAR, LIMBS>;

    #[inline]
    fn mul(self, rhs: BLS24Fp2<PAR, LIMBS>) -> Self::Output {
        rhs.scale(&self)
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> MulAssign for BLS24Fp2<PAR, LIMBS> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self*rhs;
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Neg for BLS24Fp2<PAR, LIMBS> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::Output { re: -self.re, im: -self.im }
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> One for BLS24Fp2<PAR, LIMBS> {
    #[inline]
    fn one() -> Self {
        Self { re: Fp::one(), im: Fp::zero() }
    }

    #[inline]
    fn is_one(&self) -> Choice {
        self.re.is_one() & self.im.is_zero()
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> PartialEq for BLS24Fp2<PAR, LIMBS> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Random for BLS24Fp2<PAR, LIMBS> {
    /// Pick a uniform element from <b>F</b><sub><i>p&sup2;</i></sub> by rejection sampling.
    fn random(rng: &mut impl CryptoRngCore) -> Self {
        Self { re: Fp::random(rng), im: Fp::random(rng) }
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Sub for BLS24Fp2<PAR, LIMBS> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::Output { re: self.re - rhs.re, im: self.im - rhs.im }
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> SubAssign for BLS24Fp2<PAR, LIMBS> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.re -= rhs.re;
        self.im -= rhs.im;
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Zero for BLS24Fp2<PAR, LIMBS> {
    #[inline]
    fn zero() -> Self {
        Self { re: Fp::zero(), im: Fp::zero() }
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
    use crypto_bigint::rand_core::RngCore;
    use std::time::SystemTime;
    use super::*;

    const TESTS: usize = 100;

    /// General BLS24Fp2 test template.
    #[allow(non_snake_case)]
    fn BLS24Fp2_test<PAR: BLS24Param, const LIMBS: usize>() {
        let mut rng = rand::thread_rng();

        println!();
        println!("Performing {} BLS24-{:03}Fp2 test(s)...", TESTS, Fp::<PAR, LIMBS>::modulus().bits());
        let now = SystemTime::now();

        // u^2 = beta:
        let u = BLS24Fp2::<PAR, LIMBS>::from_Fp_pair(Fp::zero(), Fp::one());
        assert_eq!(u.sq(), BLS24Fp2::from_Fp(Fp::from_i64(PAR::NON_RESIDUE)));

        // xi:
        let xi = BLS24Fp2::<PAR, LIMBS>::from_Fp_pair(Fp::from_i64(PAR::XI[0]), Fp::from_i64(PAR::XI[1]));
        assert_eq!(BLS24Fp2::one().mul_by_non_residue(), xi);

        for _t in 0..TESTS {
            field_axioms_test::<BLS24Fp2<PAR, LIMBS>>(&mut rng);

            let e2: BLS24Fp2<PAR, LIMBS> = BLS24Fp2::random(&mut rng);
            let f2: BLS24Fp2<PAR, LIMBS> = BLS24Fp2::random(&mut rng);

            // non-residue multiplication:
            assert_eq!(e2.mul_by_non_residue(), e2*xi);

            // norm and conjugation:
            assert_eq!(e2*e2.conj(), BLS24Fp2::from_Fp(e2.norm()));
            assert_eq!((e2*f2).norm(), e2.norm()*f2.norm());
            assert_eq!((e2*f2).frobenius(), e2.frobenius()*f2.frobenius());
            assert_eq!(e2.frobenius().frobenius(), e2);

            // hybrid multiplication:
            let k2: Word = rng.next_u64() & 0xF;
            assert_eq!(k2*e2, Fp::from_word(k2)*e2);

            // hashing:
            let h = BLS24Fp2::<PAR, LIMBS>::shake128(&e2.to_bytes());
            assert_eq!(h, BLS24Fp2::shake128(&e2.to_bytes()));
            assert_ne!(h, BLS24Fp2::shake256(&e2.to_bytes()));
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
    fn BLS24315Fp2_test() {
        const LIMBS: usize = BLS24315Param::LIMBS;
        BLS24Fp2_test::<BLS24315Param, LIMBS>();
    }

    #[test]
    #[allow(non_snake_case)]
    fn BLS24317Fp2_test() {
        const LIMBS: usize = BLS24317Param::LIMBS;
        BLS24Fp2_test::<BLS24317Param, LIMBS>();
    }
}
