#[cfg(not(any(target_pointer_width = "64")))]
compile_error!("this crate requires 64-bit limbs");

use crate::error::PairingError;
use crypto_bigint::Random;
use crypto_bigint::subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use num_bigint::BigUint;
use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

pub trait One {
    fn one() -> Self;
    fn is_one(&self) -> Choice;
}

pub trait Zero {
    fn zero() -> Self;
    fn is_zero(&self) -> Choice;
    fn set_zero(&mut self);
}

/// Multiplication by the constant that defines the next extension level
/// on top of this field, e.g. <i>&xi;</i> for <b>F</b><sub><i>p&sup2;</i></sub>
/// when <b>F</b><sub><i>p&#x2074;</i></sub> = <b>F</b><sub><i>p&sup2;</i></sub>&lbrack;<i>v</i>&rbrack;/&lt;<i>v&sup2; - &xi;</i>&gt;.
pub trait NonResidue {
    fn mul_by_non_residue(&self) -> Self;
}

/// Arithmetic shared by the prime field and every extension field built on top of it.
pub trait TowerField:
    Sized + Copy + Debug + Display + PartialEq + Eq + Random
    + ConditionallySelectable + ConstantTimeEq
    + Add<Output = Self> + AddAssign + Sub<Output = Self> + SubAssign
    + Mul<Output = Self> + MulAssign + Neg<Output = Self>
    + One + Zero
{
    /// The prime field at the bottom of the tower.
    type Prime: TowerField;

    /// Number of prime field coordinates of an element.
    const DEGREE: usize;

    /// Size of the serialized form of an element, in bytes.
    const BYTES: usize;

    /// Big-endian encoding of the plain (non-Montgomery) coordinates,
    /// most significant tower component first.
    fn to_bytes(&self) -> Vec<u8>;

    /// Decode the output of `to_bytes`.
    fn from_bytes(bytes: &[u8]) -> Result<Self, PairingError>;

    fn double(&self) -> Self;

    fn half(&self) -> Self;

    fn sq(&self) -> Self;

    fn cb(&self) -> Self {
        self.sq()*(*self)
    }

    /// Multiplicative inverse, with the convention 0<sup>-1</sup> = 0.
    fn inv(&self) -> Self;

    /// Multiplicative inverse of a nonzero element.
    fn try_inv(&self) -> Result<Self, PairingError> {
        if bool::from(self.is_zero()) {
            Err(PairingError::DivisionByZero)
        } else {
            Ok(self.inv())
        }
    }

    /// Multiply every coordinate by a prime field element.
    fn scale(&self, k: &Self::Prime) -> Self;

    /// Compute `self`<sup><i>e</i></sup> with a fixed 4-bit window.
    fn pow(&self, e: &BigUint) -> Self {
        let mut table = [Self::one(); 16];
        for i in 1..16 {
            table[i] = table[i - 1]*(*self);
        }
        let digits = e.to_radix_le(16);
        let mut v = Self::one();
        for &d in digits.iter().rev() {
            v = v.sq().sq().sq().sq();
            if d != 0 {
                v *= table[d as usize];
            }
        }
        v
    }

    /// Invert all entries of `v` at the cost of a single inversion (Montgomery's trick).
    /// Zero entries are passed through unchanged.
    fn batch_invert(v: &[Self]) -> Vec<Self> {
        let mut res = vec![Self::zero(); v.len()];
        let mut acc = Self::one();
        for (ri, vi) in res.iter_mut().zip(v) {
            if !bool::from(vi.is_zero()) {
                *ri = acc;
                acc *= *vi;
            }
        }
        acc = acc.inv();
        for (ri, vi) in res.iter_mut().zip(v).rev() {
            if !bool::from(vi.is_zero()) {
                *ri *= acc;
                acc *= *vi;
            }
        }
        res
    }
}

/// Ring axioms, inversion and serialization checks shared by the field tests.
#[cfg(test)]
pub(crate) fn field_axioms_test<F: TowerField>(rng: &mut impl crypto_bigint::rand_core::CryptoRngCore) {
    assert!(bool::from(F::zero().is_zero()));
    assert!(bool::from(F::one().is_one()));
    assert_eq!(F::zero().inv(), F::zero());
    assert_eq!(F::zero().try_inv(), Err(PairingError::DivisionByZero));

    let a = F::random(rng);
    let b = F::random(rng);
    let c = F::random(rng);

    assert_eq!(a + F::zero(), a);
    assert_eq!(a*F::one(), a);
    assert_eq!((a + b) - b, a);
    assert!(bool::from((a - a).is_zero()));
    assert_eq!(-(-a), a);
    assert_eq!(a.double(), a + a);
    assert_eq!(a.double().half(), a);
    assert_eq!(a.sq(), a*a);
    assert_eq!(a.cb(), a*a*a);
    assert_eq!(a + b, b + a);
    assert_eq!(a*b, b*a);
    assert_eq!((a + b) + c, a + (b + c));
    assert_eq!((a*b)*c, a*(b*c));
    assert_eq!(a*(b + c), a*b + a*c);
    assert_eq!(a*b.inv()*b, a);
    assert_eq!(a.inv().inv(), a);
    assert_eq!(a.try_inv(), Ok(a.inv()));

    let mut d = a;
    d += b;
    d -= c;
    d *= a;
    assert_eq!(d, (a + b - c)*a);

    let k = F::Prime::random(rng);
    assert_eq!(a.scale(&k).scale(&k.inv()), a);

    let bytes = a.to_bytes();
    assert_eq!(bytes.len(), F::BYTES);
    assert_eq!(F::from_bytes(&bytes), Ok(a));
    assert_eq!(F::from_bytes(&bytes[..F::BYTES - 1]),
        Err(PairingError::InvalidLength { expected: F::BYTES, found: F::BYTES - 1 }));

    let v = [a, F::zero(), b, c];
    let w = F::batch_invert(&v);
    for (vi, wi) in v.iter().zip(w.iter()) {
        assert_eq!(*wi, vi.inv());
    }

    let e = BigUint::from(37u32);
    assert_eq!(a.pow(&e), (0..37).fold(F::one(), |acc, _| acc*a));
}

/// Split a buffer holding `parts` equally sized encodings, checking its total length.
pub(crate) fn split_bytes(bytes: &[u8], expected: usize, parts: usize) -> Result<Vec<&[u8]>, PairingError> {
    if bytes.len() != expected {
        return Err(PairingError::InvalidLength { expected, found: bytes.len() });
    }
    Ok(bytes.chunks(expected/parts).collect())
}

/// A cubic extension <i>B</i>&lbrack;<i>w</i>&rbrack;/&lt;<i>w&sup3; - &nu;</i>&gt;
/// where <i>&nu;</i> is the non-residue of the base field <i>B</i>.
pub trait CubicExtension: TowerField + NonResidue {
    type Base: TowerField<Prime = Self::Prime> + NonResidue;

    fn from_coeffs(c0: Self::Base, c1: Self::Base, c2: Self::Base) -> Self;

    fn coeffs(&self) -> [Self::Base; 3];

    /// Multiply by the sparse element <i>c&#x2080; + c&#x2081;w</i>.
    fn mul_by_01(&self, c0: &Self::Base, c1: &Self::Base) -> Self;

    /// Multiply every coefficient by an element of the base field.
    fn mul_by_0(&self, c0: &Self::Base) -> Self {
        let [a0, a1, a2] = self.coeffs();
        Self::from_coeffs(a0*(*c0), a1*(*c0), a2*(*c0))
    }
}

/// A quadratic extension <i>C</i>&lbrack;<i>i</i>&rbrack;/&lt;<i>i&sup2; - w</i>&gt;
/// of a cubic extension <i>C</i> = <i>B</i>&lbrack;<i>w</i>&rbrack;/&lt;<i>w&sup3; - &nu;</i>&gt;,
/// hence a sextic extension of <i>B</i> hosting the pairing target group.
///
/// Its six <i>B</i>-coordinates are labelled
/// <i>g&#x2080;, g&#x2081;, g&#x2082;</i> (first half) and <i>g&#x2083;, g&#x2084;, g&#x2085;</i> (second half).
pub trait SexticExtension: TowerField {
    type Base: TowerField<Prime = Self::Prime> + NonResidue;
    type Cubic: CubicExtension<Base = Self::Base, Prime = Self::Prime>;

    fn from_halves(h0: Self::Cubic, h1: Self::Cubic) -> Self;

    fn halves(&self) -> (Self::Cubic, Self::Cubic);

    /// Conjugation over the cubic subfield, i.e. negation of the second half.
    /// On the cyclotomic subgroup this is the inverse.
    fn conj(&self) -> Self {
        let (h0, h1) = self.halves();
        Self::from_halves(h0, -h1)
    }
}
