#[cfg(not(any(target_pointer_width = "64")))]
compile_error!("this crate requires 64-bit limbs");

use crate::bls24fp2::BLS24Fp2;
use crate::bls24fp4::BLS24Fp4;
use crate::bls24fp12::BLS24Fp12;
use crate::bls24param::BLS24Param;
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

/// The <b>F</b><sub><i>p&sup2;&#xFEFF;&#x2074;</i></sub> &simeq;
/// <b>F</b><sub><i>p&sup1;&sup2;</i></sub>&lbrack;<i>i</i>&rbrack;/&lt;<i>i&sup2; - w</i>&gt; extension field,
/// which hosts the target group of the BLS24 pairing.
///
/// Viewed over <b>F</b><sub><i>p&sup2;</i></sub>, an element is
/// <i>&sum;&#x2096; a&#x2096;i&#x1D4F;</i> for <i>0 &le; k &lt; 12</i>, with <i>i&sup1;&sup2; = &xi;</i>.
pub struct BLS24Fp24<PAR: BLS24Param, const LIMBS: usize> {
    pub(crate) re: BLS24Fp12<PAR, LIMBS>,
    pub(crate) im: BLS24Fp12<PAR, LIMBS>,
}

impl<PAR: BLS24Param, const LIMBS: usize> BLS24Fp24<PAR, LIMBS> {
    /// Assemble an <b>F</b><sub><i>p&sup2;&#xFEFF;&#x2074;</i></sub> element
    /// from its <b>F</b><sub><i>p&sup1;&sup2;</i></sub> components.
    #[allow(non_snake_case)]
    #[inline]
    pub fn from_Fp12_pair(re: BLS24Fp12<PAR, LIMBS>, im: BLS24Fp12<PAR, LIMBS>) -> Self {
        Self { re, im }
    }

    /// Convert an <b>F</b><sub><i>p&#x2074;</i></sub> element to its <b>F</b><sub><i>p&sup2;&#xFEFF;&#x2074;</i></sub> counterpart.
    #[allow(non_snake_case)]
    #[inline]
    pub fn from_Fp4(a0: BLS24Fp4<PAR, LIMBS>) -> Self {
        Self { re: BLS24Fp12::from_Fp4(a0), im: BLS24Fp12::zero() }
    }

    /// Convert an <b>F</b><sub><i>p</i></sub> element to its <b>F</b><sub><i>p&sup2;&#xFEFF;&#x2074;</i></sub> counterpart.
    #[allow(non_snake_case)]
    #[inline]
    pub fn from_Fp(a0: Fp<PAR, LIMBS>) -> Self {
        Self::from_Fp4(BLS24Fp4::from_Fp(a0))
    }

    /// Hash input data into a field element with SHAKE-128.
    pub fn shake128(data: &[u8]) -> Self {
        Self::from_prime_coords(&Fp::shake128list(data, 24))
    }

    /// Hash input data into a field element with SHAKE-256.
    pub fn shake256(data: &[u8]) -> Self {
        Self::from_prime_coords(&Fp::shake256list(data, 24))
    }

    fn from_prime_coords(c: &[Fp<PAR, LIMBS>]) -> Self {
        let mut slots = [BLS24Fp2::zero(); 12];
        for (k, s) in slots.iter_mut().enumerate() {
            *s = BLS24Fp2::from_Fp_pair(c[2*k], c[2*k + 1]);
        }
        Self::from_slots(&slots)
    }

    /// The <b>F</b><sub><i>p&sup2;</i></sub> coefficients of `self`, indexed by powers of <i>i</i>:
    /// slot <i>d + 2c + 6b</i> holds the <i>v&#x1D47;</i> coefficient
    /// of the <i>w&#x1D9C;</i> coefficient of the <i>i&#x1D48;</i> half.
    fn slots(&self) -> [BLS24Fp2<PAR, LIMBS>; 12] {
        let mut s = [BLS24Fp2::zero(); 12];
        for (d, half) in [self.re, self.im].iter().enumerate() {
            for (c, a) in half.coeffs().iter().enumerate() {
                s[d + 2*c] = a.re;
                s[d + 2*c + 6] = a.im;
            }
        }
        s
    }

    fn from_slots(s: &[BLS24Fp2<PAR, LIMBS>; 12]) -> Self {
        let half = |d: usize| BLS24Fp12::from_coeffs(
            BLS24Fp4::from_Fp2_pair(s[d], s[d + 6]),
            BLS24Fp4::from_Fp2_pair(s[d + 2], s[d + 8]),
            BLS24Fp4::from_Fp2_pair(s[d + 4], s[d + 10]),
        );
        Self { re: half(0), im: half(1) }
    }

    /// Raise `self` to <i>q = p&#x207F;</i>, given the table of
    /// <i>&xi;</i><sup>(<i>kq</i> - (<i>kq</i> mod 12))/12</sup> and <i>q</i> mod 12.
    fn frobenius_map(&self, table: &[Word], q_mod_12: usize, conj: bool) -> Self {
        let a = self.slots();
        let mut s = [BLS24Fp2::zero(); 12];
        for k in 0..12 {
            let ak = if conj { a[k].conj() } else { a[k] };
            s[(k*q_mod_12) % 12] = ak*BLS24Fp2::from_slice(&table[2*k*LIMBS..2*(k + 1)*LIMBS]);
        }
        Self::from_slots(&s)
    }

    /// Apply the Frobenius endomorphism to `self`,
    /// i.e. compute `self`<i>&#x1D56;</i> in <b>F</b><sub><i>p&sup2;&#xFEFF;&#x2074;</i></sub>.
    #[inline]
    pub fn frobenius(&self) -> Self {
        self.frobenius_map(PAR::FROB_1, PAR::P_MOD_12, true)
    }

    /// Compute `self`<sup><i>p&sup2;</i></sup>.
    #[inline]
    pub fn frobenius_square(&self) -> Self {
        self.frobenius_map(PAR::FROB_2, 1, false)
    }

    /// Compute `self`<sup><i>p&#x2074;</i></sup>.
    #[inline]
    pub fn frobenius_quad(&self) -> Self {
        self.frobenius_map(PAR::FROB_4, 1, false)
    }

    /// Determine whether `self` lies in the cyclotomic subgroup of order
    /// <i>&Phi;&#x2082;&#x2084;(p) = p&#x2078; - p&#x2074; + 1</i>.
    pub fn is_cyclotomic(&self) -> bool {
        let f4 = self.frobenius_quad();
        f4.frobenius_quad()*(*self) == f4
    }

    /// Determine whether `self` lies in the order-<i>r</i> pairing target group.
    pub fn is_in_subgroup(&self) -> bool {
        self.is_cyclotomic() && bool::from(self.pow(&words_to_biguint(PAR::ORDER)).is_one())
    }

    /// Compute `self`<sup><i>e</i></sup> for `self` in the target group,
    /// via the endomorphism <i>f &#x21A6; f</i><sup><i>p&#x2078;</i></sup>.
    #[inline]
    pub fn exp_glv(&self, e: &BigUint) -> Self {
        mul_glv(self, e)
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Add for BLS24Fp24<PAR, LIMBS> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::Output { re: self.re + rhs.re, im: self.im + rhs.im }
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> AddAssign for BLS24Fp24<PAR, LIMBS> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.re += rhs.re;
        self.im += rhs.im;
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> TowerField for BLS24Fp24<PAR, LIMBS> {
    type Prime = Fp<PAR, LIMBS>;
    const DEGREE: usize = 24;
    const BYTES: usize = 24*LIMBS*8;

    #[inline]
    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.im.to_bytes();
        bytes.append(&mut self.re.to_bytes());
        bytes
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, PairingError> {
        let parts = split_bytes(bytes, Self::BYTES, 2)?;
        Ok(Self { im: BLS24Fp12::from_bytes(parts[0])?, re: BLS24Fp12::from_bytes(parts[1])? })
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

impl<PAR: BLS24Param, const LIMBS: usize> SexticExtension for BLS24Fp24<PAR, LIMBS> {
    type Base = BLS24Fp4<PAR, LIMBS>;
    type Cubic = BLS24Fp12<PAR, LIMBS>;

    #[inline]
    fn from_halves(h0: Self::Cubic, h1: Self::Cubic) -> Self {
        Self { re: h0, im: h1 }
    }

    #[inline]
    fn halves(&self) -> (Self::Cubic, Self::Cubic) {
        (self.re, self.im)
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> GlvGroup for BLS24Fp24<PAR, LIMBS> {
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

    /// <i>f &#x21A6; f</i><sup><i>p&#x2078;</i></sup>, with <i>p&#x2078; &equiv; &lambda;</i> (mod <i>r</i>).
    fn endomorphism(&self) -> Self {
        self.frobenius_quad().frobenius_quad()
    }

    fn lattice() -> &'static Lattice {
        PAR::glv_lattice()
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Clone for BLS24Fp24<PAR, LIMBS> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> ConditionallySelectable for BLS24Fp24<PAR, LIMBS> {
    #[inline]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            re: BLS24Fp12::conditional_select(&a.re, &b.re, choice),
            im: BLS24Fp12::conditional_select(&a.im, &b.im, choice),
        }
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> ConstantTimeEq for BLS24Fp24<PAR, LIMBS> {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        self.re.ct_eq(&other.re) & self.im.ct_eq(&other.im)
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Copy for BLS24Fp24<PAR, LIMBS> {}

impl<PAR: BLS24Param, const LIMBS: usize> Debug for BLS24Fp24<PAR, LIMBS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self, f)
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Display for BLS24Fp24<PAR, LIMBS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}) + ({})*i", self.re, self.im)
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Eq for BLS24Fp24<PAR, LIMBS> {}

impl<PAR: BLS24Param, const LIMBS: usize> Mul for BLS24Fp24<PAR, LIMBS> {
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

impl<PAR: BLS24Param, const LIMBS: usize> MulAssign for BLS24Fp24<PAR, LIMBS> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self*rhs;
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Neg for BLS24Fp24<PAR, LIMBS> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::Output { re: -self.re, im: -self.im }
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> One for BLS24Fp24<PAR, LIMBS> {
    #[inline]
    fn one() -> Self {
        Self { re: BLS24Fp12::one(), im: BLS24Fp12::zero() }
    }

    #[inline]
    fn is_one(&self) -> Choice {
        self.re.is_one() & self.im.is_zero()
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> PartialEq for BLS24Fp24<PAR, LIMBS> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Random for BLS24Fp24<PAR, LIMBS> {
    fn random(rng: &mut impl CryptoRngCore) -> Self {
        Self { re: BLS24Fp12::random(rng), im: BLS24Fp12::random(rng) }
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Sub for BLS24Fp24<PAR, LIMBS> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::Output { re: self.re - rhs.re, im: self.im - rhs.im }
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> SubAssign for BLS24Fp24<PAR, LIMBS> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.re -= rhs.re;
        self.im -= rhs.im;
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Zero for BLS24Fp24<PAR, LIMBS> {
    #[inline]
    fn zero() -> Self {
        Self { re: BLS24Fp12::zero(), im: BLS24Fp12::zero() }
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

    const TESTS: usize = 10;

    /// General BLS24Fp24 test template.
    #[allow(non_snake_case)]
    fn BLS24Fp24_test<PAR: BLS24Param, const LIMBS: usize>() {
        let mut rng = rand::thread_rng();
        let p = Fp::<PAR, LIMBS>::modulus();

        println!();
        println!("Performing {} BLS24-{:03}Fp24 test(s)...", TESTS, p.bits());
        let now = SystemTime::now();

        for _t in 0..TESTS {
            field_axioms_test::<BLS24Fp24<PAR, LIMBS>>(&mut rng);

            let e24: BLS24Fp24<PAR, LIMBS> = BLS24Fp24::random(&mut rng);
            let f24: BLS24Fp24<PAR, LIMBS> = BLS24Fp24::random(&mut rng);

            // slot layout:
            assert_eq!(BLS24Fp24::from_slots(&e24.slots()), e24);

            // conjugation over F_p12 is the p^12-th power:
            let mut g = e24;
            for _ in 0..3 {
                g = g.frobenius_quad();
            }
            assert_eq!(g, e24.conj());

            // Frobenius orders:
            let mut g1 = e24;
            for _ in 0..24 {
                g1 = g1.frobenius();
            }
            assert_eq!(g1, e24);
            let mut g2 = e24;
            for _ in 0..12 {
                g2 = g2.frobenius_square();
            }
            assert_eq!(g2, e24);
            let mut g4 = e24;
            for _ in 0..6 {
                g4 = g4.frobenius_quad();
            }
            assert_eq!(g4, e24);

            // Frobenius compositions:
            assert_eq!(e24.frobenius().frobenius(), e24.frobenius_square());
            assert_eq!(e24.frobenius_square().frobenius_square(), e24.frobenius_quad());
            assert_eq!((e24*f24).frobenius(), e24.frobenius()*f24.frobenius());
        }

        // Frobenius vs. exponentiation:
        let e24: BLS24Fp24<PAR, LIMBS> = BLS24Fp24::random(&mut rng);
        assert_eq!(e24.frobenius(), e24.pow(&p));
        assert_eq!(e24.frobenius_square(), e24.pow(&(&p*&p)));
        assert_eq!(e24.frobenius_quad(), e24.pow(&(&p*&p*&p*&p)));

        // hashing:
        assert_eq!(BLS24Fp24::<PAR, LIMBS>::shake128(b"abc"), BLS24Fp24::shake128(b"abc"));
        assert_ne!(BLS24Fp24::<PAR, LIMBS>::shake128(b"abc"), BLS24Fp24::shake256(b"abc"));

        // random elements are not in the target group:
        assert!(!e24.is_cyclotomic());
        assert!(!e24.is_in_subgroup());

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
    fn BLS24315Fp24_test() {
        const LIMBS: usize = BLS24315Param::LIMBS;
        BLS24Fp24_test::<BLS24315Param, LIMBS>();
    }

    #[test]
    #[allow(non_snake_case)]
    fn BLS24317Fp24_test() {
        const LIMBS: usize = BLS24317Param::LIMBS;
        BLS24Fp24_test::<BLS24317Param, LIMBS>();
    }
}
