#[cfg(not(any(target_pointer_width = "64")))]
compile_error!("this crate requires 64-bit limbs");

use crate::error::PairingError;
use crate::traits::{NonResidue, One, TowerField, Zero};
use crypto_bigint::{Integer, Limb, Random, Uint, Word};
use crypto_bigint::rand_core::CryptoRngCore;
use crypto_bigint::subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeLess};
use crypto_bigint::Zero as _;
use num_bigint::BigUint;
use sha3::{Shake128, Shake256};
use sha3::digest::{ExtendableOutput, Update, XofReader};
use std::fmt::{Debug, Display, Formatter};
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Constants of a Montgomery-form prime field.
pub trait FpParam: Send + Sync + 'static {
    const LIMBS: usize;
    const MODULUS: &'static [Word];
    const NEG_INV_MOD: &'static [Word];
    const MONTY_P: &'static [Word];
    /// Small constant <i>&nu;</i> defining the first extension above <b>F</b><sub><i>p</i></sub>.
    const NON_RESIDUE: i64;
}

/// The <b>F</b><sub><i>p</i></sub> &simeq; <b>&Zopf;</b>/<i>p</i><b>&Zopf;</b> finite field.
pub struct Fp<PAR: FpParam, const LIMBS: usize>(
    #[doc(hidden)]
    pub Uint<LIMBS>,
    #[doc(hidden)]
    pub PhantomData<PAR>,
);

impl<PAR: FpParam, const LIMBS: usize> Fp<PAR, LIMBS> {
    #[inline]
    fn p() -> Uint<LIMBS> {
        Uint::from_words(PAR::MODULUS.try_into().unwrap())
    }

    /// The modulus <i>p</i> as an arbitrary-precision integer.
    pub fn modulus() -> BigUint {
        let bytes: Vec<u8> = Self::p().as_words().iter().rev().flat_map(|w| w.to_be_bytes()).collect();
        BigUint::from_bytes_be(&bytes)
    }

    /// Montgomery reduction of <i>t</i> = (<i>t_lo</i>, <i>t_hi</i>) in range 0..&lt;<i>p&times;2&#x02B7;</i>,
    /// where <i>p &lt; 2&#x02B7;</i> is the modulus and <i>w</i> &#x2254; <i>64&times;LIMBS</i>.
    ///
    /// Return <i>t&times;2&#8315;&#x02B7;</i> in range 0..&lt;<i>p</i>.
    #[inline]
    fn redc(t_lo: Uint<LIMBS>, t_hi: Uint<LIMBS>) -> Uint<LIMBS> {
        let p = Self::p();  // p < 2^w
        let q: Uint<LIMBS> = Uint::from_words(PAR::NEG_INV_MOD.try_into().unwrap());  // q := -1/p mod 2^w
        // m ← ((t mod s)*q) mod s = (t_lo*q) mod s:
        let (m, _) = t_lo.mul_wide(&q);
        // t ← (t + m*p) / s:
        let (mp_lo, mp_hi) = m.mul_wide(&p);
        let (_, carry) = t_lo.adc(&mp_lo, Limb::ZERO);
        let (t, _) = t_hi.adc(&mp_hi, carry);
        // return if t < p { t } else { t - p }
        t.wrapping_sub(&Uint::conditional_select(&p, &Uint::ZERO, t.ct_lt(&p)))
    }

    /// Convert an unsigned integer (Uint) value <i>w</i> to Montgomery form,
    /// namely, the value <i>w&middot;s</i> mod <i>p</i> =
    /// redc((<i>w</i> mod <i>p</i>)&middot;(<i>s&sup2;</i> mod <i>p</i>)),
    /// where <i>s > p</i> is a power of 2.
    #[inline]
    pub fn from_uint(w: Uint<LIMBS>) -> Self {
        let s2: Uint<LIMBS> = Uint::from_words(PAR::MONTY_P.try_into().unwrap());
        let (lo, hi) = w.mul_wide(&s2);
        Self(Self::redc(lo, hi), PhantomData)
    }

    /// Convert a word-sized integer <i>w</i> to Montgomery form.
    #[inline]
    pub fn from_word(w: Word) -> Self {
        Self::from_uint(Uint::from_word(w))
    }

    /// Convert a signed word-sized integer <i>w</i> to Montgomery form.
    #[inline]
    pub fn from_i64(w: i64) -> Self {
        let u = Self::from_word(w.unsigned_abs());
        Self::conditional_select(&u, &(-u), Choice::from((w < 0) as u8))
    }

    /// Convert an integer <i>w</i> represented by a sequence of words to Montgomery form.
    #[inline]
    pub(crate) fn from_words(v: [Word; LIMBS]) -> Self {
        Self::from_uint(Uint::from_words(v))
    }

    /// Convert a constant table slice holding exactly `LIMBS` words to Montgomery form.
    #[inline]
    pub(crate) fn from_slice(v: &[Word]) -> Self {
        Self::from_words(v.try_into().unwrap())
    }

    /// Reduce an arbitrary-precision integer mod <i>p</i> and convert it to Montgomery form.
    pub fn from_biguint(n: &BigUint) -> Self {
        let n = n % Self::modulus();
        let digits = n.to_u64_digits();
        let mut w: [Word; LIMBS] = [0; LIMBS];
        w[..digits.len()].copy_from_slice(&digits);
        Self::from_words(w)
    }

    /// Hash input data into a field element with SHAKE-128.
    ///
    /// Twice as much hash output is converted to the field element via Montgomery reduction.
    /// This ensures the deviation from uniform sampling over <b>F</b><sub><i>p</i></sub>
    /// is upper-bounded by <i>p&#8315;&sup1;</i>.
    #[inline]
    pub fn shake128(data: &[u8]) -> Self {
        Self::shake128list(data, 1)[0]
    }

    /// Hash input data into a field element with SHAKE-256.
    #[inline]
    pub fn shake256(data: &[u8]) -> Self {
        Self::shake256list(data, 1)[0]
    }

    fn from_xof(buf: &mut [u8], k: usize) -> Vec<Self> {
        let mut out: Vec<Self> = Vec::with_capacity(k);
        for j in 0..k {
            buf[2*(j + 1)*LIMBS*8 - 1] = 0;  // make sure the lift of this chunk to Z does not exceed p^2
            let lo: Uint<LIMBS> = Uint::from_le_slice(&buf[2*j*LIMBS*8..(2*j + 1)*LIMBS*8]);
            let hi: Uint<LIMBS> = Uint::from_le_slice(&buf[(2*j + 1)*LIMBS*8..2*(j + 1)*LIMBS*8]);
            out.push(Self(Self::redc(lo, hi), PhantomData));
        }
        out
    }

    /// Hash input data into a list of base field elements with SHAKE-128.
    pub fn shake128list(data: &[u8], k: usize) -> Vec<Self> {
        let mut buf = vec![0u8; 2*k*LIMBS*8];  // twice the space taken by k base field elements
        let mut xof = Shake128::default();
        xof.update(data);
        xof.finalize_xof().read(&mut buf);
        Self::from_xof(&mut buf, k)
    }

    /// Hash input data into a list of base field elements with SHAKE-256.
    pub fn shake256list(data: &[u8], k: usize) -> Vec<Self> {
        let mut buf = vec![0u8; 2*k*LIMBS*8];
        let mut xof = Shake256::default();
        xof.update(data);
        xof.finalize_xof().read(&mut buf);
        Self::from_xof(&mut buf, k)
    }

    /// Convert an integer in Montgomery form to plain representation.
    ///
    /// NB: the plain representation of <i>m</i> = <i>w&middot;r</i> mod <i>p</i> is
    /// <i>w</i> = redc(<i>m</i>), where <i>r > p</i> is a power of 2.
    #[inline]
    pub fn to_uint(&self) -> Uint<LIMBS> {
        Self::redc(self.0, Uint::ZERO)
    }

    /// The plain representation of `self` as an arbitrary-precision integer.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.to_bytes())
    }

    /// Compute <i>v</i> = `self`<i>&#x02E3;</i> mod <i>p</i>.
    #[inline]
    pub fn pow_uint(&self, x: Uint<LIMBS>) -> Self {
        // the exponents used internally are fixed and public, hence square-and-multiply suffices:
        let mut v = Self::one();
        let w = x.as_words();  // presumed NOT to be in Montgomery form
        for i in (0..LIMBS << 6).rev() {
            v = v.sq();
            if ((w[i >> 6] >> (i & 63)) & 1) == 1 {
                v *= *self;
            }
        }
        v
    }

    /// Determine if the plain representation of `self` is odd.
    #[inline]
    pub fn is_odd(&self) -> Choice {
        Self::redc(self.0, Uint::ZERO).is_odd()
    }

    /// Compute the Legendre symbol (<i>`self`/p</i>):<br>
    /// &nbsp;   +1      if <i>`self`</i> is a nonzero quadratic residue mod <i>p</i>,<br>
    /// &nbsp;   &nbsp;0 if <i>`self`</i> = <i>0</i><br>
    /// &nbsp;   -1      if <i>`self`</i> is a nonzero quadratic non-residue mod <i>p</i>.
    #[inline]
    pub fn legendre(&self) -> isize {
        // (v/p) = v^((p - 1)/2) mod p for prime p
        let e = Self::p().wrapping_sub(&Uint::ONE) >> 1;
        let m = self.pow_uint(e);
        if bool::from(m.is_zero()) {
            0
        } else if bool::from(m.is_one()) {
            1
        } else {
            -1
        }
    }

    /// Compute a square root of `self` with the Tonelli-Shanks algorithm,
    /// or `None` if `self` is a quadratic non-residue.
    pub fn sqrt(&self) -> Option<Self> {
        match self.legendre() {
            0 => return Some(Self::zero()),
            -1 => return None,
            _ => {}
        }
        let pm1 = Self::p().wrapping_sub(&Uint::ONE);
        let w = pm1.as_words();
        let s = w.iter().position(|&x| x != 0).map_or(0, |k| 64*k + w[k].trailing_zeros() as usize);
        let t = pm1.shr_vartime(s);
        let mut z = Self::from_word(2);
        while z.legendre() != -1 {
            z += Self::one();
        }
        let mut m = s;
        let mut c = z.pow_uint(t);
        let mut u = self.pow_uint(t);
        let mut r = self.pow_uint(t.wrapping_add(&Uint::ONE) >> 1);
        while !bool::from(u.is_one()) {
            // least i with u^(2^i) = 1:
            let mut i = 0;
            let mut u2 = u;
            while !bool::from(u2.is_one()) {
                u2 = u2.sq();
                i += 1;
            }
            let mut b = c;
            for _ in 0..m - i - 1 {
                b = b.sq();
            }
            m = i;
            c = b.sq();
            u *= c;
            r *= b;
        }
        Some(r)
    }
}

impl<PAR: FpParam, const LIMBS: usize> Add for Fp<PAR, LIMBS> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.add_mod(&rhs.0, &Self::p()), PhantomData)
    }
}

impl<PAR: FpParam, const LIMBS: usize> AddAssign for Fp<PAR, LIMBS> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.add_mod(&rhs.0, &Self::p());
    }
}

impl<PAR: FpParam, const LIMBS: usize> TowerField for Fp<PAR, LIMBS> {
    type Prime = Self;
    const DEGREE: usize = 1;
    const BYTES: usize = LIMBS*8;

    /// Big-endian byte representation of the plain value of `self`.
    #[inline]
    fn to_bytes(&self) -> Vec<u8> {
        self.to_uint().as_words().iter().rev().flat_map(|w| w.to_be_bytes()).collect()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, PairingError> {
        if bytes.len() != Self::BYTES {
            return Err(PairingError::InvalidLength { expected: Self::BYTES, found: bytes.len() });
        }
        let mut w: [Word; LIMBS] = [0; LIMBS];
        for (wi, chunk) in w.iter_mut().rev().zip(bytes.chunks(8)) {
            let mut b = [0u8; 8];
            b.copy_from_slice(chunk);
            *wi = Word::from_be_bytes(b);
        }
        let u = Uint::from_words(w);
        if !bool::from(u.ct_lt(&Self::p())) {
            return Err(PairingError::NonCanonical);
        }
        Ok(Self::from_uint(u))
    }

    /// Compute the value of twice this element.
    #[inline]
    fn double(&self) -> Self {
        Self(self.0.add_mod(&self.0, &Self::p()), PhantomData)
    }

    /// Compute `self`/2 mod <i>p</i>.
    ///
    /// Technique: if the lift of `self` to &Zopf; is even, a right-shift does the required division;
    /// if it is odd, then `self` + <i>p</i> is even,
    /// and hence 0 &leq; (`self` + <i>p</i>) &gt;&gt; 1 =
    /// (`self` &gt;&gt; 1) + (<i>p</i> + 1) &gt;&gt; 1 &lt; <i>p</i>
    /// is the desired value.
    #[inline]
    fn half(&self) -> Self {
        let hp: Uint<LIMBS> = Self::p().wrapping_add(&Uint::ONE) >> 1;
        let hs = self.0 >> 1;
        Self(Uint::conditional_select(&hs, &hs.wrapping_add(&hp), self.0.is_odd()), PhantomData)
    }

    #[inline]
    fn sq(&self) -> Self {
        let (lo, hi) = self.0.square_wide();
        Self(Self::redc(lo, hi), PhantomData)
    }

    #[inline]
    fn cb(&self) -> Self {
        let (lo, hi) = self.0.square_wide();
        let (lo, hi) = self.0.mul_wide(&Self::redc(lo, hi));
        Self(Self::redc(lo, hi), PhantomData)
    }

    /// Compute <i>r</i> = <i>u&#8315;&sup1;</i> = <i>u&#x1D56;&#8315;&sup2;</i> mod <i>p</i>
    /// for <i>u</i> &#x2254; `self`, which satisfies
    /// <i>r&times;u</i> mod <i>p</i> = <i>1</i> if <i>u &ne; 0</i>, and <i>r</i> = <i>0</i> otherwise.
    #[inline]
    fn inv(&self) -> Self {
        self.pow_uint(Self::p().wrapping_sub(&Uint::from_word(2)))  // inv exponent: p - 2
    }

    #[inline]
    fn scale(&self, k: &Self) -> Self {
        *self*(*k)
    }
}

impl<PAR: FpParam, const LIMBS: usize> NonResidue for Fp<PAR, LIMBS> {
    #[inline]
    fn mul_by_non_residue(&self) -> Self {
        PAR::NON_RESIDUE*(*self)
    }
}

impl<PAR: FpParam, const LIMBS: usize> Clone for Fp<PAR, LIMBS> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<PAR: FpParam, const LIMBS: usize> ConditionallySelectable for Fp<PAR, LIMBS> {
    #[inline]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(Uint::conditional_select(&a.0, &b.0, choice), PhantomData)
    }
}

impl<PAR: FpParam, const LIMBS: usize> ConstantTimeEq for Fp<PAR, LIMBS> {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl<PAR: FpParam, const LIMBS: usize> Copy for Fp<PAR, LIMBS> {}

impl<PAR: FpParam, const LIMBS: usize> Debug for Fp<PAR, LIMBS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self, f)
    }
}

impl<PAR: FpParam, const LIMBS: usize> Display for Fp<PAR, LIMBS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_biguint())
    }
}

impl<PAR: FpParam, const LIMBS: usize> Eq for Fp<PAR, LIMBS> {}

impl<PAR: FpParam, const LIMBS: usize> Mul for Fp<PAR, LIMBS> {
    type Output = Self;

    /// Compute a product in <b>F</b><sub><i>p</i></sub>.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        let (lo, hi) = self.0.mul_wide(&rhs.0);
        Self(Self::redc(lo, hi), PhantomData)
    }
}

impl<PAR: FpParam, const LIMBS: usize> Mul<Fp<PAR, LIMBS>> for Word {
    type Output = Fp<PAR, LIMBS>;

    /// Compute the product of a word-sized integer left factor
    /// by a right factor from <b>F</b><sub><i>p</i></sub>.
    #[inline]
    fn mul(self, rhs: Fp<PAR, LIMBS>) -> Self::Output {
        if self >= 1 << 4 {
            return Fp::from_word(self)*rhs;
        }
        // small factors: double-and-add over 4 bits
        let mut val = Self::Output::zero();
        let mut fac = self as u8;
        let mut add = rhs;
        for _ in 0..4 {
            val = Fp::conditional_select(&val, &(val + add), Choice::from(fac & 1));
            fac >>= 1;
            add += add;
        }
        val
    }
}

impl<PAR: FpParam, const LIMBS: usize> Mul<Fp<PAR, LIMBS>> for i64 {
    type Output = Fp<PAR, LIMBS>;

    /// Compute the product of a single-precision, signed integer left factor
    /// by a right factor from <b>F</b><sub><i>p</i></sub>.
    #[inline]
    fn mul(self, rhs: Fp<PAR, LIMBS>) -> Self::Output {
        let u = self.unsigned_abs()*rhs;
        Self::Output::conditional_select(&u, &(-u), Choice::from((self < 0) as u8))
    }
}

impl<PAR: FpParam, const LIMBS: usize> Mul<Fp<PAR, LIMBS>> for Uint<LIMBS> {
    type Output = Fp<PAR, LIMBS>;

    #[inline]
    fn mul(self, rhs: Fp<PAR, LIMBS>) -> Self::Output {
        Fp::from_uint(self)*rhs
    }
}

impl<PAR: FpParam, const LIMBS: usize> MulAssign for Fp<PAR, LIMBS> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        let (lo, hi) = self.0.mul_wide(&rhs.0);
        self.0 = Self::redc(lo, hi);
    }
}

impl<PAR: FpParam, const LIMBS: usize> Neg for Fp<PAR, LIMBS> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(self.0.neg_mod(&Self::p()), PhantomData)
    }
}

impl<PAR: FpParam, const LIMBS: usize> One for Fp<PAR, LIMBS> {
    #[inline]
    fn one() -> Self {
        let r2: Uint<LIMBS> = Uint::from_words(PAR::MONTY_P.try_into().unwrap());
        Self(Self::redc(r2, Uint::ZERO), PhantomData)  // (1*r) mod p
    }

    fn is_one(&self) -> Choice {
        Self::redc(self.0, Uint::ZERO).ct_eq(&Uint::ONE)
    }
}

impl<PAR: FpParam, const LIMBS: usize> PartialEq for Fp<PAR, LIMBS> {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl<PAR: FpParam, const LIMBS: usize> Random for Fp<PAR, LIMBS> {
    /// Pick a uniform element from <b>F</b><sub><i>p</i></sub> by rejection sampling mod <i>p</i>.
    fn random(rng: &mut impl CryptoRngCore) -> Self {
        let p = Self::p();
        let top = LIMBS - 1;
        let mask: Word = if p.bits() & 63 == 0 { Word::MAX } else { (1 << (p.bits() & 63)) - 1 };
        let mut w: [Word; LIMBS] = [0; LIMBS];
        loop {
            // uniformly sample the bit capacity of the modulus:
            for wi in w.iter_mut() {
                *wi = rng.next_u64();
            }
            w[top] &= mask;
            // rejection sampling for the most significant word:
            while w[top] > PAR::MODULUS[top] {  // this means the whole value exceeds the modulus
                w[top] = rng.next_u64() & mask;
            }
            // rejection sampling for the whole value:
            let r = Uint::from_words(w);
            if r < p {
                return Self::from_uint(r);
            }
        }
    }
}

impl<PAR: FpParam, const LIMBS: usize> Sub for Fp<PAR, LIMBS> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.sub_mod(&rhs.0, &Self::p()), PhantomData)
    }
}

impl<PAR: FpParam, const LIMBS: usize> SubAssign for Fp<PAR, LIMBS> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0.sub_mod(&rhs.0, &Self::p());
    }
}

impl<PAR: FpParam, const LIMBS: usize> Zero for Fp<PAR, LIMBS> {
    #[inline]
    fn zero() -> Self {
        Self(Uint::ZERO, PhantomData)  // (0*r) mod p
    }

    #[inline]
    fn is_zero(&self) -> Choice {
        self.0.is_zero()
    }

    fn set_zero(&mut self) {
        self.0 = Uint::ZERO
    }
}


#[cfg(test)]
mod tests {
    use crate::bls24param::{BLS24315Param, BLS24317Param};
    use crate::bw6param::BW6761Param;
    use crypto_bigint::rand_core::RngCore;
    use std::time::SystemTime;
    use super::*;

    const TESTS: usize = 100;

    /// General Fp test template.
    #[allow(non_snake_case)]
    fn Fp_test<PAR: FpParam, const LIMBS: usize>() {
        let p: Uint<LIMBS> = Uint::from_words(PAR::MODULUS.try_into().unwrap());
        let mut rng = rand::thread_rng();

        println!();
        println!("Performing {} Fp{:03} test(s)...", TESTS, p.bits());
        let now = SystemTime::now();

        // neutral elements:
        assert!(bool::from(Fp::<PAR, LIMBS>::zero().is_zero()));
        assert!(bool::from(Fp::<PAR, LIMBS>::one().is_one()));
        assert_eq!(Fp::<PAR, LIMBS>::zero().inv(), Fp::zero());
        assert_eq!(Fp::<PAR, LIMBS>::zero().try_inv(), Err(PairingError::DivisionByZero));

        // non-residue:
        assert_eq!(Fp::<PAR, LIMBS>::one().mul_by_non_residue(), Fp::from_i64(PAR::NON_RESIDUE));

        for _t in 0..TESTS {
            // Montgomery form:
            let v1: Word = rng.next_u64() & 0xF;
            let m1: Fp<PAR, LIMBS> = Fp::from_word(v1);
            assert_eq!(Uint::from_word(v1), m1.to_uint());

            let e1: Fp<PAR, LIMBS> = Fp::random(&mut rng);
            assert_eq!(e1 + Fp::zero(), e1);
            assert_eq!(e1*Fp::one(), e1);

            // serialization:
            let bytes = e1.to_bytes();
            assert_eq!(bytes.len(), LIMBS*8);
            assert_eq!(Fp::from_bytes(&bytes), Ok(e1));
            assert_eq!(Fp::<PAR, LIMBS>::from_bytes(&bytes[1..]),
                Err(PairingError::InvalidLength { expected: LIMBS*8, found: LIMBS*8 - 1 }));
            assert_eq!(Fp::from_biguint(&e1.to_biguint()), e1);

            // addition vs subtraction:
            assert!(bool::from((e1 - e1).is_zero()));
            assert!(bool::from((e1 + (-e1)).is_zero()));
            assert_eq!(-(-e1), e1);

            // double and half:
            assert_eq!(e1.double(), e1 + e1);
            assert_eq!(e1.double().half(), e1);
            assert_eq!(e1.half().double(), e1);

            // square and cube:
            assert_eq!(e1.sq(), e1*e1);
            assert_eq!(e1.cb(), e1*e1*e1);

            // field inversion:
            assert!(bool::from((e1*e1.inv()).is_one() | e1.is_zero()));
            assert_eq!(e1.inv().inv(), e1);

            // square roots:
            match e1.sqrt() {
                Some(sr1) => {
                    assert!(e1.legendre() >= 0);
                    assert_eq!(sr1.sq(), e1);
                }
                None => assert_eq!(e1.legendre(), -1),
            }
            assert_eq!(e1.sq().legendre(), if bool::from(e1.is_zero()) { 0 } else { 1 });
            assert!(e1.sq().sqrt().is_some());

            // hybrid multiplication (Word*Fp, i64*Fp):
            let k1: Word = rng.next_u64() & 0xF;
            assert_eq!(k1*e1, Fp::from_word(k1)*e1);
            let k2 = rng.next_u64() as i64 >> 16;
            assert_eq!(k2*e1, Fp::from_i64(k2)*e1);

            let f1 = Fp::random(&mut rng);
            let g1 = Fp::random(&mut rng);

            // commutativity, associativity and distributivity:
            assert_eq!(e1 + f1, f1 + e1);
            assert_eq!(e1*f1, f1*e1);
            assert_eq!((e1 + f1) + g1, e1 + (f1 + g1));
            assert_eq!((e1*f1)*g1, e1*(f1*g1));
            assert_eq!(e1*(f1 + g1), e1*f1 + e1*g1);
            assert_eq!((e1 + f1) - f1, e1);

            // batch inversion:
            let v = [e1, Fp::zero(), f1, g1];
            let w = Fp::batch_invert(&v);
            for (vi, wi) in v.iter().zip(w.iter()) {
                assert_eq!(*wi, vi.inv());
            }
        }

        // non-canonical encoding:
        let mut bytes = vec![0xFFu8; LIMBS*8];
        assert_eq!(Fp::<PAR, LIMBS>::from_bytes(&bytes), Err(PairingError::NonCanonical));
        bytes = (-Fp::<PAR, LIMBS>::one()).to_bytes();
        *bytes.last_mut().unwrap() += 1;  // p itself
        assert_eq!(Fp::<PAR, LIMBS>::from_bytes(&bytes), Err(PairingError::NonCanonical));

        // hashing:
        assert_eq!(Fp::<PAR, LIMBS>::shake128(b"abc"), Fp::shake128list(b"abc", 3)[0]);
        assert_ne!(Fp::<PAR, LIMBS>::shake256(b"abc"), Fp::shake128(b"abc"));

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
    fn BLS24315Fp_test() {
        const LIMBS: usize = BLS24315Param::LIMBS;
        Fp_test::<BLS24315Param, LIMBS>();
    }

    #[test]
    #[allow(non_snake_case)]
    fn BLS24317Fp_test() {
        const LIMBS: usize = BLS24317Param::LIMBS;
        Fp_test::<BLS24317Param, LIMBS>();
    }

    #[test]
    #[allow(non_snake_case)]
    fn BW6761Fp_test() {
        const LIMBS: usize = BW6761Param::LIMBS;
        Fp_test::<BW6761Param, LIMBS>();
    }
}
