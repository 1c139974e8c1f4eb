#[cfg(not(any(target_pointer_width = "64")))]
compile_error!("this crate requires 64-bit limbs");

use crate::bls24fp4::BLS24Fp4;
use crate::bls24param::BLS24Param;
use crate::bw6param::BW6Param;
use crate::fp::Fp;
use crate::glv::{mul_glv, GlvGroup, Lattice};
use crate::traits::{One, TowerField, Zero};
use crypto_bigint::subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use num_bigint::BigUint;
use std::fmt::{Debug, Display, Formatter};
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A short Weierstrass curve <i>y&sup2; = x&sup3; + b</i> carrying an order-<i>r</i> subgroup
/// and the endomorphism <i>(x, y) &#x21A6; (&omega;x, y)</i> with a cube root of unity <i>&omega;</i>.
pub trait Curve: 'static {
    /// The field of definition of the point coordinates.
    type F: TowerField;

    fn b() -> Self::F;

    /// The cube root of unity defining the GLV endomorphism on this group.
    fn endomorphism_coeff() -> <Self::F as TowerField>::Prime;

    /// Default generator of the order-<i>r</i> subgroup.
    fn generator() -> Affine<Self> where Self: Sized;

    /// The GLV lattice, which also knows the group order <i>r</i>.
    fn lattice() -> &'static Lattice;
}

/// <b>G&#x2081;</b> of a BLS24 curve, over <b>F</b><sub><i>p</i></sub>.
pub struct BLS24G1<PAR: BLS24Param, const LIMBS: usize>(PhantomData<PAR>);

/// <b>G&#x2082;</b> of a BLS24 curve, on the sextic twist over <b>F</b><sub><i>p&#x2074;</i></sub>.
pub struct BLS24G2<PAR: BLS24Param, const LIMBS: usize>(PhantomData<PAR>);

/// <b>G&#x2081;</b> of a BW6 curve.
pub struct BW6G1<PAR: BW6Param, const LIMBS: usize>(PhantomData<PAR>);

/// <b>G&#x2082;</b> of a BW6 curve, on its twist over <b>F</b><sub><i>p</i></sub>.
pub struct BW6G2<PAR: BW6Param, const LIMBS: usize>(PhantomData<PAR>);

impl<PAR: BLS24Param, const LIMBS: usize> Curve for BLS24G1<PAR, LIMBS> {
    type F = Fp<PAR, LIMBS>;

    fn b() -> Self::F {
        Fp::from_word(PAR::CURVE_B)
    }

    fn endomorphism_coeff() -> Fp<PAR, LIMBS> {
        Fp::from_slice(PAR::OMEGA)
    }

    fn generator() -> Affine<Self> {
        Affine::new(Fp::from_slice(PAR::G1_X), Fp::from_slice(PAR::G1_Y))
    }

    fn lattice() -> &'static Lattice {
        PAR::glv_lattice()
    }
}

impl<PAR: BLS24Param, const LIMBS: usize> Curve for BLS24G2<PAR, LIMBS> {
    type F = BLS24Fp4<PAR, LIMBS>;

    fn b() -> Self::F {
        BLS24Fp4::from_slice(PAR::TWIST_B)
    }

    fn endomorphism_coeff() -> Fp<PAR, LIMBS> {
        Fp::<PAR, LIMBS>::from_slice(PAR::OMEGA).sq()
    }

    fn generator() -> Affine<Self> {
        Affine::new(BLS24Fp4::from_slice(PAR::G2_X), BLS24Fp4::from_slice(PAR::G2_Y))
    }

    fn lattice() -> &'static Lattice {
        PAR::glv_lattice()
    }
}

impl<PAR: BW6Param, const LIMBS: usize> Curve for BW6G1<PAR, LIMBS> {
    type F = Fp<PAR, LIMBS>;

    fn b() -> Self::F {
        Fp::from_i64(PAR::CURVE_B)
    }

    fn endomorphism_coeff() -> Fp<PAR, LIMBS> {
        Fp::from_slice(PAR::OMEGA)
    }

    fn generator() -> Affine<Self> {
        Affine::new(Fp::from_slice(PAR::G1_X), Fp::from_slice(PAR::G1_Y))
    }

    fn lattice() -> &'static Lattice {
        PAR::glv_lattice()
    }
}

impl<PAR: BW6Param, const LIMBS: usize> Curve for BW6G2<PAR, LIMBS> {
    type F = Fp<PAR, LIMBS>;

    fn b() -> Self::F {
        Fp::from_i64(PAR::TWIST_B)
    }

    fn endomorphism_coeff() -> Fp<PAR, LIMBS> {
        Fp::<PAR, LIMBS>::from_slice(PAR::OMEGA).sq()
    }

    fn generator() -> Affine<Self> {
        Affine::new(Fp::from_slice(PAR::G2_X), Fp::from_slice(PAR::G2_Y))
    }

    fn lattice() -> &'static Lattice {
        PAR::glv_lattice()
    }
}

/// A point in affine coordinates, with <i>(0, 0)</i> standing for the point at infinity
/// (which is never an affine solution since <i>b &ne; 0</i>).
pub struct Affine<C: Curve> {
    pub(crate) x: C::F,
    pub(crate) y: C::F,
}

impl<C: Curve> Affine<C> {
    /// Wrap a coordinate pair without validation (see `is_on_curve`).
    #[inline]
    pub fn new(x: C::F, y: C::F) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn infinity() -> Self {
        Self { x: C::F::zero(), y: C::F::zero() }
    }

    #[inline]
    pub fn x(&self) -> C::F {
        self.x
    }

    #[inline]
    pub fn y(&self) -> C::F {
        self.y
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        bool::from(self.x.is_zero() & self.y.is_zero())
    }

    /// Check the curve equation <i>y&sup2; = x&sup3; + b</i> (the point at infinity passes).
    pub fn is_on_curve(&self) -> bool {
        self.is_infinity() || self.y.sq() == self.x.cb() + C::b()
    }

    /// Check that `self` lies on the curve and has order dividing <i>r</i>.
    pub fn is_in_subgroup(&self) -> bool {
        self.is_on_curve() && Point::from_affine(self).is_in_subgroup()
    }

    #[inline]
    pub fn to_projective(&self) -> Point<C> {
        Point::from_affine(self)
    }
}

impl<C: Curve> Clone for Affine<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Curve> Copy for Affine<C> {}

impl<C: Curve> Debug for Affine<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self, f)
    }
}

impl<C: Curve> Display for Affine<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_infinity() {
            write!(f, "O")
        } else {
            write!(f, "({}, {})", self.x, self.y)
        }
    }
}

impl<C: Curve> Eq for Affine<C> {}

impl<C: Curve> Neg for Affine<C> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::Output { x: self.x, y: -self.y }
    }
}

impl<C: Curve> PartialEq for Affine<C> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

/// A point <i>&lbrack;X : Y : Z&rbrack;</i> in homogeneous projective coordinates
/// on <i>Y&sup2;Z = X&sup3; + bZ&sup3;</i>, with <i>Z = 0</i> for the point at infinity.
pub struct Point<C: Curve> {
    pub(crate) x: C::F,
    pub(crate) y: C::F,
    pub(crate) z: C::F,
}

impl<C: Curve> Point<C> {
    #[inline]
    pub fn from_affine(a: &Affine<C>) -> Self {
        if a.is_infinity() {
            Self::zero()
        } else {
            Self { x: a.x, y: a.y, z: C::F::one() }
        }
    }

    #[inline]
    pub fn from_proj(x: C::F, y: C::F, z: C::F) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn generator() -> Self {
        Self::from_affine(&C::generator())
    }

    /// Create an instance of the neutral element ("point at infinity")
    /// in projective coordinates, hence <i>&lbrack;0 : 1 : 0&rbrack;</i>.
    #[inline]
    pub fn zero() -> Self {
        Self { x: C::F::zero(), y: C::F::one(), z: C::F::zero() }
    }

    #[inline]
    pub fn is_zero(&self) -> Choice {
        self.z.is_zero()
    }

    /// Compute the affine point equivalent to this.
    pub fn to_affine(&self) -> Affine<C> {
        let inv = self.z.inv();  // 0 for the point at infinity, which then maps to (0, 0)
        Affine { x: self.x*inv, y: self.y*inv }
    }

    /// Normalize several points with a single field inversion.
    pub fn batch_to_affine(points: &[Self]) -> Vec<Affine<C>> {
        let zs: Vec<C::F> = points.iter().map(|pt| pt.z).collect();
        C::F::batch_invert(&zs).iter().zip(points)
            .map(|(inv, pt)| Affine { x: pt.x*(*inv), y: pt.y*(*inv) })
            .collect()
    }

    /// Compute <i>&lbrack;2&rbrack;P</i> via complete elliptic point doubling.
    ///
    /// Reference:
    ///
    /// *; Joost Renes, Craig Costello, Lejla Batina:
    /// <a href="https://link.springer.com/content/pdf/10.1007/978-3-662-49890-3_16">
    /// "Complete addition formulas for prime order elliptic curves"</a>
    /// (Algorithm 9), Eurocrypt 2016, LNCS 9665 (part I), pp. 403--428, Springer, 2016.
    pub fn double(&self) -> Self {
        let (x, y, z) = (self.x, self.y, self.z);
        let b3 = C::b().double() + C::b();

        let t0 = y.sq();
        let z3 = t0.double().double().double();
        let t1 = y*z;
        let t2 = b3*z.sq();
        let x3 = t2*z3;
        let y3 = t0 + t2;
        let z3 = t1*z3;
        let t2 = t2.double() + t2;
        let t0 = t0 - t2;
        let y3 = x3 + t0*y3;
        let x3 = (t0*(x*y)).double();
        Self { x: x3, y: y3, z: z3 }
    }

    /// Compute <i>&lbrack;2&#x1D57;&rbrack;P</i>.
    pub fn double_n(&self, t: usize) -> Self {
        let mut d = *self;
        for _ in 0..t {
            d = d.double();
        }
        d
    }

    /// Multiply by a scalar via fixed-window multiplication.
    ///
    /// Reference:
    ///
    /// *; Alfred J. Menezes, Paul C. van Oorschot, Scott A. Vanstone,
    /// <a href="https://cacr.uwaterloo.ca/hac/">"Handbook of Applied Cryptography"</a>,
    /// CRC Press (1997), section 14.6 (Exponentiation), algorithm 14.82.
    pub fn mul_windowed(&self, s: &BigUint) -> Self {
        // prepare a table such that t[d] = d*P, where 0 <= d < 16:
        let mut t = [Self::zero(); 16];
        t[1] = *self;
        for d in 1..8 {
            t[2*d] = t[d].double();
            t[2*d + 1] = t[2*d] + *self;
        }

        // scan the scalar from most to least significant nybble:
        let digits = s.to_radix_le(16);
        let mut v = Self::zero();
        for &d in digits.iter().rev() {
            v = v.double_n(4);
            // constant-time sequential search on t to extract t[d]:
            let mut w = Self::zero();
            for (e, te) in t.iter().enumerate() {
                w = Self::conditional_select(&w, te, (e as u8).ct_eq(&d));
            }
            v += w;
        }
        v
    }

    /// Multiply by a scalar via the GLV decomposition.
    #[inline]
    pub fn mul_glv(&self, s: &BigUint) -> Self {
        mul_glv(self, s)
    }

    /// Check that <i>&lbrack;r&rbrack;P = O</i>.
    pub fn is_in_subgroup(&self) -> bool {
        bool::from(self.mul_windowed(C::lattice().order()).is_zero())
    }
}

impl<C: Curve> Add for Point<C> {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        let mut point = self;
        point += other;
        point
    }
}

impl<C: Curve> AddAssign for Point<C> {
    /// Complete elliptic point addition.
    ///
    /// Reference: Joost Renes, Craig Costello, Lejla Batina:
    /// <a href="https://link.springer.com/content/pdf/10.1007/978-3-662-49890-3_16">
    /// "Complete addition formulas for prime order elliptic curves"</a>
    /// (Algorithm 7), Eurocrypt 2016, LNCS 9665 (part I), pp. 403--428, Springer, 2016.
    fn add_assign(&mut self, pair: Self) {
        let (x1, y1, z1) = (self.x, self.y, self.z);
        let (x2, y2, z2) = (pair.x, pair.y, pair.z);
        let b3 = C::b().double() + C::b();

        let t0 = x1*x2;
        let t1 = y1*y2;
        let t2 = z1*z2;
        let t3 = (x1 + y1)*(x2 + y2) - (t0 + t1);
        let t4 = (y1 + z1)*(y2 + z2) - (t1 + t2);
        let y3 = (x1 + z1)*(x2 + z2) - (t0 + t2);
        let t0 = t0.double() + t0;
        let t2 = b3*t2;
        let z3 = t1 + t2;
        let t1 = t1 - t2;
        let y3 = b3*y3;
        let x3 = t3*t1 - t4*y3;
        let y3 = t1*z3 + y3*t0;
        let z3 = z3*t4 + t0*t3;

        self.x = x3;
        self.y = y3;
        self.z = z3;
    }
}

impl<C: Curve> GlvGroup for Point<C> {
    fn identity() -> Self {
        Self::zero()
    }

    fn combine(&self, other: &Self) -> Self {
        *self + *other
    }

    fn combine_self(&self) -> Self {
        self.double()
    }

    fn inverse(&self) -> Self {
        -*self
    }

    fn endomorphism(&self) -> Self {
        Self { x: self.x.scale(&C::endomorphism_coeff()), y: self.y, z: self.z }
    }

    fn lattice() -> &'static Lattice {
        C::lattice()
    }
}

impl<C: Curve> Clone for Point<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Curve> Copy for Point<C> {}

impl<C: Curve> ConditionallySelectable for Point<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: C::F::conditional_select(&a.x, &b.x, choice),
            y: C::F::conditional_select(&a.y, &b.y, choice),
            z: C::F::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl<C: Curve> ConstantTimeEq for Point<C> {
    fn ct_eq(&self, pair: &Self) -> Choice {
        // x/z = pair.x/pair.z <=> x*pair.z = pair.x*z
        // y/z = pair.y/pair.z <=> y*pair.z = pair.y*z
        (self.x*pair.z).ct_eq(&(pair.x*self.z)) &
            (self.y*pair.z).ct_eq(&(pair.y*self.z))
    }
}

impl<C: Curve> Debug for Point<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self, f)
    }
}

impl<C: Curve> Display for Point<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let normal = self.to_affine();
        let z = if bool::from(self.is_zero()) { C::F::zero() } else { C::F::one() };
        write!(f, "[{} : {} : {}]", normal.x, normal.y, z)
    }
}

impl<C: Curve> Eq for Point<C> {}

impl<C: Curve> Neg for Point<C> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::Output { x: self.x, y: -self.y, z: self.z }
    }
}

impl<C: Curve> PartialEq for Point<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: Curve> Sub for Point<C> {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        let mut point = self;
        point -= other;
        point
    }
}

impl<C: Curve> SubAssign for Point<C> {
    fn sub_assign(&mut self, pair: Self) {
        self.add_assign(pair.neg())
    }
}
