#[cfg(not(any(target_pointer_width = "64")))]
compile_error!("this crate requires 64-bit limbs");

use crate::bw6fp3::BW6Fp3;
use crate::bw6param::BW6Param;
use crate::cyclotomic::Cyclotomic;
use crate::error::PairingError;
use crate::fp::Fp;
use crate::glv::{mul_glv, words_to_biguint, GlvGroup, Lattice};
use crate::traits::{split_bytes, CubicExtension, NonResidue, One, SexticExtension, TowerField, Zero};
use crypto_bigint::{Random, Word};
use crypto_bigint::rand_core::CryptoRngCore;
use crypto_bigint::subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use num_bigint::BigUint;
use std::fmt::{Debug, Display, Formatter};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// The <b>F</b><sub><i>p&#x2076;</i></sub> &simeq;
/// <b>F</b><sub><i>p&sup3;</i></sub>&lbrack;<i>v</i>&rbrack;/&lt;<i>v&sup2; - u</i>&gt; extension field,
/// which hosts the target group of the BW6 pairing.
pub struct BW6Fp6<PAR: BW6Param, const LIMBS: usize> {
    pub(crate) re: BW6Fp3<PAR, LIMBS>,
    pub(crate) im: BW6Fp3<PAR, LIMBS>,
}

impl<PAR: BW6Param, const LIMBS: usize> BW6Fp6<PAR, LIMBS> {
    /// Assemble an <b>F</b><sub><i>p&#x2076;</i></sub> element
    /// from its <b>F</b><sub><i>p&sup3;</i></sub> components.
    #[allow(non_snake_case)]
    #[inline]
    pub fn from_Fp3_pair(re: BW6Fp3<PAR, LIMBS>, im: BW6Fp3<PAR, LIMBS>) -> Self {
        Self { re, im }
    }

    /// Convert an <b>F</b><sub><i>p</i></sub> element to its <b>F</b><sub><i>p&#x2076;</i></sub> counterpart.
    #[allow(non_snake_case)]
    #[inline]
    pub fn from_Fp(a0: Fp<PAR, LIMBS>) -> Self {
        Self { re: BW6Fp3::from_Fp(a0), im: BW6Fp3::zero() }
    }

    /// Hash input data into a field element with SHAKE-128.
    pub fn shake128(data: &[u8]) -> Self {
        let c = Fp::shake128list(data, 6);
        Self {
            re: BW6Fp3::from_coeffs(c[0], c[1], c[2]),
            im: BW6Fp3::from_coeffs(c[3], c[4], c[5]),
        }
    }

    /// Multiply slot <i>k</i> (the coefficient of <i>v&#x1D4F;</i>, <i>v&#x2076; = -4</i>)
    /// by the <i>k</i>-th entry of a Frobenius table.
    fn frobenius_map(&self, table: &[Word]) -> Self {
        let g = |k: usize| Fp::<PAR, LIMBS>::from_slice(&table[k*LIMBS..(k + 1)*LIMBS]);
        let [a0, a1, a2] = self.re.coeffs();
        let [b0, b1, b2] = self.im.coeffs();
        Self {
            re: BW6Fp3::from_coeffs(a0, a1*g(2), a2*g(4)),
            im: BW6Fp3::from_coeffs(b0*g(1), b1*g(3), b2*g(5)),
        }
    }

    /// Apply the Frobenius endomorphism to `self`,
    /// i.e. compute `self`<i>&#x1D56;</i> in <b>F</b><sub><i>p&#x2076;</i></sub>.
    #[inline]
    pub fn frobenius(&self) -> Self {
        self.frobenius_map(PAR::FROB_1)
    }

    /// Compute `self`<sup><i>p&sup2;</i></sup>.
    #[inline]
    pub fn frobenius_square(&self) -> Self {
        self.frobenius_map(PAR::FROB_2)
    }

    /// Determine whether `self` lies in the cyclotomic subgroup of order <i>&Phi;&#x2086;(p) = p&sup2; - p + 1</i>.
    pub fn is_cyclotomic(&self) -> bool {
        self.frobenius_square()*(*self) == self.frobenius()
    }

    /// Determine whether `self` lies in the order-<i>r</i> pairing target group.
    pub fn is_in_subgroup(&self) -> bool {
        self.is_cyclotomic() && bool::from(self.pow(&words_to_biguint(PAR::ORDER)).is_one())
    }

    /// Compute `self`<sup><i>e</i></sup> for `self` in the target group,
    /// via the endomorphism <i>f &#x21A6; f</i><sup><i>p&sup2;</i></sup>.
    #[inline]
    pub fn exp_glv(&self, e: &BigUint) -> Self {
        mul_glv(self, e)
    }
}

impl<PAR: BW6Param, const LIMBS: usize> Add for BW6Fp6<PAR, LIMBS> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::Output { re: self.re + rhs.re, im: self.im + rhs.im }
    }
}

impl<PAR: BW6Param, const LIMBS: usize> AddAssign for BW6Fp6<PAR, LIMBS> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.re += rhs.re;
        self.im += rhs.im;
    }
}

impl<PAR: BW6Param, const LIMBS: usize> TowerField for BW6Fp6<PAR, LIMBS> {
    type Prime = Fp<PAR, LIMBS>;
    const DEGREE: usize = 6;
    const BYTES: usize = 6*LIMBS*8;

    #[inline]
    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.im.to_bytes();
        bytes.append(&mut self.re.to_bytes());
        bytes
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, PairingError> {
        let parts = split_bytes(bytes, Self::BYTES, 2)?;
        Ok(Self { im: BW6Fp3::from_bytes(parts[0])?, re: BW6Fp3::from_bytes(parts[1])? })
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
        let t = (self.re.sq() - self.im.sq().mul_by_non_residue()).inv();
        Self { re: self.re*t, im: -(self.im*t) }
    }

    #[inline]
    fn scale(&self, k: &Fp<PAR, LIMBS>) -> Self {
        Self { re: self.re.scale(k), im: self.im.scale(k) }
    }
}

impl<PAR: BW6Param, const LIMBS: usize> SexticExtension for BW6Fp6<PAR, LIMBS> {
    type Base = Fp<PAR, LIMBS>;
    type Cubic = BW6Fp3<PAR, LIMBS>;

    #[inline]
    fn from_halves(h0: Self::Cubic, h1: Self::Cubic) -> Self {
        Self { re: h0, im: h1 }
    }

    #[inline]
    fn halves(&self) -> (Self::Cubic, Self::Cubic) {
        (self.re, self.im)
    }
}

impl<PAR: BW6Param, const LIMBS: usize> GlvGroup for BW6Fp6<PAR, LIMBS> {
    fn identity() -> Self {
        Self::one()
    }

    fn combine(&self, other: &Self) -> Self {
        (*self)*(*other)
    }

    fn combine_self(&self) -> Self {
        self.cyclotomic_square()
    }

    fn inverse(&self) -> Self {
        self.conj()
    }

    /// <i>f &#x21A6; f</i><sup><i>p&sup2;</i></sup>, with <i>p&sup2; &equiv; &lambda;</i> (mod <i>r</i>).
    fn endomorphism(&self) -> Self {
        self.frobenius_square()
    }

    fn lattice() -> &'static Lattice {
        PAR::glv_lattice()
    }
}

impl<PAR: BW6Param, const LIMBS: usize> Clone for BW6Fp6<PAR, LIMBS> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<PAR: BW6Param, const LIMBS: usize> ConditionallySelectable for BW6Fp6<PAR, LIMBS> {
    #[inline]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            re: BW6Fp3::conditional_select(&a.re, &b.re, choice),
            im: BW6Fp3::conditional_select(&a.im, &b.im, choice),
        }
    }
}

impl<PAR: BW6Param, const LIMBS: usize> ConstantTimeEq for BW6Fp6<PAR, LIMBS> {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        self.re.ct_eq(&other.re) & self.im.ct_eq(&other.im)
    }
}

impl<PAR: BW6Param, const LIMBS: usize> Copy for BW6Fp6<PAR, LIMBS> {}

impl<PAR: BW6Param, const LIMBS: usize> Debug for BW6Fp6<PAR, LIMBS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self, f)
    }
}

impl<PAR: BW6Param, const LIMBS: usize> Display for BW6Fp6<PAR, LIMBS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}) + ({})*v", self.re, self.im)
    }
}

impl<PAR: BW6Param, const LIMBS: usize> Eq for BW6Fp6<PAR, LIMBS> {}

impl<PAR: BW6Param, const LIMBS: usize> Mul for BW6Fp6<PAR, LIMBS> {
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

impl<PAR: BW6Param, const LIMBS: usize> MulAssign for BW6Fp6<PAR, LIMBS> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self*rhs;
    }
}

impl<PAR: BW6Param, const LIMBS: usize> Neg for BW6Fp6<PAR, LIMBS> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::Output { re: -self.re, im: -self.im }
    }
}

impl<PAR: BW6Param, const LIMBS: usize> One for BW6Fp6<PAR, LIMBS> {
    #[inline]
    fn one() -> Self {
        Self { re: BW6Fp3::one(), im: BW6Fp3::zero() }
    }

    #[inline]
    fn is_one(&self) -> Choice {
        self.re.is_one() & self.im.is_zero()
    }
}

impl<PAR: BW6Param, const LIMBS: usize> PartialEq for BW6Fp6<PAR, LIMBS> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<PAR: BW6Param, const LIMBS: usize> Random for BW6Fp6<PAR, LIMBS> {
    fn random(rng: &mut impl CryptoRngCore) -> Self {
        Self { re: BW6Fp3::random(rng), im: BW6Fp3::random(rng) }
    }
}

impl<PAR: BW6Param, const LIMBS: usize> Sub for BW6Fp6<PAR, LIMBS> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::Output { re: self.re - rhs.re, im: self.im - rhs.im }
    }
}

impl<PAR: BW6Param, const LIMBS: usize> SubAssign for BW6Fp6<PAR, LIMBS> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.re -= rhs.re;
        self.im -= rhs.im;
    }
}

impl<PAR: BW6Param, const LIMBS: usize> Zero for BW6Fp6<PAR, LIMBS> {
    #[inline]
    fn zero() -> Self {
        Self { re: BW6Fp3::zero(), im: BW6Fp3::zero() }
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
    use crate::bw6param::BW6761Param;
    use crate::traits::field_axioms_test;
    use std::time::SystemTime;
    use super::*;

    const TESTS: usize = 20;

    /// General BW6Fp6 test template.
    #[allow(non_snake_case)]
    fn BW6Fp6_test<PAR: BW6Param, const LIMBS: usize>() {
        let mut rng = rand::thread_rng();
        let p = Fp::<PAR, LIMBS>::modulus();

        println!();
        println!("Performing {} BW6-{:03}Fp6 test(s)...", TESTS, p.bits());
        let now = SystemTime::now();

        // v^2 = u:
        let v = BW6Fp6::<PAR, LIMBS>::from_Fp3_pair(BW6Fp3::zero(), BW6Fp3::one());
        assert_eq!(v.sq(), BW6Fp6::from_Fp3_pair(BW6Fp3::u(), BW6Fp3::zero()));

        for _t in 0..TESTS {
            field_axioms_test::<BW6Fp6<PAR, LIMBS>>(&mut rng);

            let e6: BW6Fp6<PAR, LIMBS> = BW6Fp6::random(&mut rng);
            let f6: BW6Fp6<PAR, LIMBS> = BW6Fp6::random(&mut rng);

            // Frobenius orders:
            let mut g1 = e6;
            for _ in 0..6 {
                g1 = g1.frobenius();
            }
            assert_eq!(g1, e6);
            let mut g2 = e6;
            for _ in 0..3 {
                g2 = g2.frobenius_square();
            }
            assert_eq!(g2, e6);
            assert_eq!(e6.frobenius().frobenius(), e6.frobenius_square());
            assert_eq!(e6.frobenius().frobenius().frobenius(), e6.conj());
            assert_eq!((e6*f6).frobenius(), e6.frobenius()*f6.frobenius());

            // compatibility with the F_p3 Frobenius:
            assert_eq!(e6.frobenius().re, e6.re.frobenius());
        }

        // Frobenius vs. exponentiation:
        let e6: BW6Fp6<PAR, LIMBS> = BW6Fp6::random(&mut rng);
        assert_eq!(e6.frobenius(), e6.pow(&p));
        assert_eq!(e6.frobenius_square(), e6.pow(&(&p*&p)));
        assert!(!e6.is_cyclotomic());
        assert!(!e6.is_in_subgroup());
        assert_ne!(BW6Fp6::<PAR, LIMBS>::shake128(b"abc"), e6);

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
    fn BW6761Fp6_test() {
        const LIMBS: usize = BW6761Param::LIMBS;
        BW6Fp6_test::<BW6761Param, LIMBS>();
    }
}
