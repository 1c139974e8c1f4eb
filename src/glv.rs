#[cfg(not(any(target_pointer_width = "64")))]
compile_error!("this crate requires 64-bit limbs");

use crypto_bigint::Word;
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{Signed, Zero};
use tracing::debug;

/// Convert a little-endian word table into an arbitrary-precision integer.
pub fn words_to_biguint(w: &[Word]) -> BigUint {
    BigUint::new(w.iter().flat_map(|&x| [x as u32, (x >> 32) as u32]).collect())
}

/// A reduced basis <i>v&#x2081;, v&#x2082;</i> of the lattice
/// {(<i>a</i>, <i>b</i>) : <i>a + b&lambda;</i> &equiv; 0 (mod <i>r</i>)}.
#[derive(Clone, Debug)]
pub struct Lattice {
    pub v1: [BigInt; 2],
    pub v2: [BigInt; 2],
    pub det: BigInt,
    order: BigUint,
    lambda: BigUint,
}

/// Round <i>n/d</i> to the nearest integer, for <i>n &ge; 0</i> and <i>d &gt; 0</i>.
fn rounding(n: &BigUint, d: &BigUint) -> BigUint {
    let (q, rm) = n.div_rem(d);
    if rm > (d >> 1) { q + 1u32 } else { q }
}

impl Lattice {
    /// Run the extended Euclidean algorithm on (<i>r</i>, <i>&lambda;</i>) until the remainder
    /// drops below <i>&radic;r</i> and extract the two shortest vectors found.
    pub fn new(order: &[Word], lambda: &[Word]) -> Self {
        let order = words_to_biguint(order);
        let lambda = words_to_biguint(lambda);
        let sq = BigInt::from(order.sqrt());
        let (mut r0, mut t0) = (BigInt::from(order.clone()), BigInt::zero());
        let (mut r1, mut t1) = (BigInt::from(lambda.clone()), BigInt::from(1));
        while r1 > sq {
            let q = &r0/&r1;
            let r2 = &r0 - &q*&r1;
            let t2 = &t0 - &q*&t1;
            r0 = std::mem::replace(&mut r1, r2);
            t0 = std::mem::replace(&mut t1, t2);
        }
        let q = &r0/&r1;
        let rr = &r0 - &q*&r1;
        let tt = &t0 - &q*&t1;
        let v1 = [r1, -t1];
        let v2 = if &r0*&r0 + &t0*&t0 > &rr*&rr + &tt*&tt {
            [rr, -tt]
        } else {
            [r0, -t0]
        };
        let det = &v1[0]*&v2[1] - &v1[1]*&v2[0];
        debug!(order_bits = order.bits(), v1_bits = v1[0].bits().max(v1[1].bits()),
            v2_bits = v2[0].bits().max(v2[1].bits()), "GLV lattice basis computed");
        Self { v1, v2, det, order, lambda }
    }

    pub fn order(&self) -> &BigUint {
        &self.order
    }

    pub fn lambda(&self) -> &BigUint {
        &self.lambda
    }

    /// Signed rounding of <i>num/det</i>.
    fn round_div(&self, num: &BigInt) -> BigInt {
        let q = BigInt::from(rounding(num.magnitude(), self.det.magnitude()));
        if num.is_negative() != self.det.is_negative() { -q } else { q }
    }

    /// Split a scalar <i>s</i> into (<i>k&#x2081;</i>, <i>k&#x2082;</i>) with
    /// <i>k&#x2081; + k&#x2082;&lambda;</i> &equiv; <i>s</i> (mod <i>r</i>) and both halves of size about <i>&radic;r</i>.
    pub fn split(&self, s: &BigUint) -> (BigInt, BigInt) {
        let s = BigInt::from(s % &self.order);
        let c1 = self.round_div(&(&s*&self.v2[1]));
        let c2 = self.round_div(&(-&s*&self.v1[1]));
        let k1 = &s - (&c1*&self.v1[0] + &c2*&self.v2[0]);
        let k2 = -(&c1*&self.v1[1] + &c2*&self.v2[1]);
        (k1, k2)
    }
}

/// Non-adjacent form of <i>n</i>: digits in {-1, 0, 1}, least significant first,
/// with no two consecutive nonzero digits.
pub fn naf(n: &BigUint) -> Vec<i8> {
    let mut k = BigInt::from(n.clone());
    let mut digits = Vec::with_capacity(n.bits() as usize + 1);
    while !k.is_zero() {
        let d = if k.is_odd() {
            let d: i8 = if k.mod_floor(&BigInt::from(4)) == BigInt::from(1) { 1 } else { -1 };
            k -= BigInt::from(d);
            d
        } else {
            0
        };
        digits.push(d);
        k >>= 1;
    }
    digits
}

/// A group with an efficiently computable endomorphism <i>&phi;</i> acting as
/// multiplication by <i>&lambda;</i> on its prime-order subgroup.
///
/// Written additively for curve points and multiplicatively for the pairing target group.
pub trait GlvGroup: Copy {
    fn identity() -> Self;
    fn combine(&self, other: &Self) -> Self;
    /// Doubling (points) or cyclotomic squaring (target group).
    fn combine_self(&self) -> Self;
    fn inverse(&self) -> Self;
    fn endomorphism(&self) -> Self;
    fn lattice() -> &'static Lattice;
}

/// Compute [<i>s</i>]<i>x</i> via the GLV split <i>s = k&#x2081; + k&#x2082;&lambda;</i>
/// and a joint 2-bit window over (<i>x</i>, <i>&phi;</i>(<i>x</i>)).
pub fn mul_glv<G: GlvGroup>(x: &G, s: &BigUint) -> G {
    let (k1, k2) = G::lattice().split(s);
    let mut p = *x;
    let mut q = x.endomorphism();
    if k1.sign() == Sign::Minus {
        p = p.inverse();
    }
    if k2.sign() == Sign::Minus {
        q = q.inverse();
    }
    let (k1, k2) = (k1.magnitude(), k2.magnitude());

    // table[(b2 << 2 | b1) - 1] = b1*p + b2*q:
    let pm = [G::identity(), p, p.combine_self(), p.combine_self().combine(&p)];
    let qm = [G::identity(), q, q.combine_self(), q.combine_self().combine(&q)];
    let mut table = [G::identity(); 15];
    for b2 in 0..4 {
        for b1 in 0..4 {
            let idx = (b2 << 2) | b1;
            if idx != 0 {
                table[idx - 1] = match (b1, b2) {
                    (_, 0) => pm[b1],
                    (0, _) => qm[b2],
                    _ => pm[b1].combine(&qm[b2]),
                };
            }
        }
    }

    let bits = k1.bits().max(k2.bits()).div_ceil(2)*2;
    let two_bits = |k: &BigUint, i: u64| -> usize {
        (k.bit(i) as usize) | ((k.bit(i + 1) as usize) << 1)
    };
    let mut v = G::identity();
    for i in (0..bits as usize).step_by(2).rev() {
        let i = i as u64;
        v = v.combine_self().combine_self();
        let idx = (two_bits(k2, i) << 2) | two_bits(k1, i);
        if idx != 0 {
            v = v.combine(&table[idx - 1]);
        }
    }
    v
}


#[cfg(test)]
mod tests {
    use crate::bls24param::{BLS24315Param, BLS24317Param, BLS24Param};
    use crate::bw6param::{BW6761Param, BW6Param};
    use num_bigint::RandBigInt;
    use std::time::SystemTime;
    use super::*;

    const TESTS: usize = 100;

    #[allow(non_snake_case)]
    fn Lattice_test(name: &str, lattice: &Lattice) {
        let mut rng = rand::thread_rng();
        let r = BigInt::from(lattice.order().clone());
        let lambda = BigInt::from(lattice.lambda().clone());

        println!();
        println!("Performing {} {} GLV split test(s)...", TESTS, name);
        let now = SystemTime::now();

        // the basis vectors lie in the lattice and span it:
        for v in [&lattice.v1, &lattice.v2] {
            assert!((&v[0] + &v[1]*&lambda).mod_floor(&r).is_zero());
        }
        assert_eq!(lattice.det.magnitude(), lattice.order());

        // lambda is a primitive cube root of unity mod r:
        assert!((&lambda*&lambda + &lambda + BigInt::from(1)).mod_floor(&r).is_zero());

        for _t in 0..TESTS {
            let s = rng.gen_biguint_below(lattice.order());
            let (k1, k2) = lattice.split(&s);
            assert_eq!((&k1 + &k2*&lambda).mod_floor(&r), BigInt::from(s));
            assert!(k1.bits() <= lattice.order().bits()/2 + 2);
            assert!(k2.bits() <= lattice.order().bits()/2 + 2);
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
    fn BLS24315Lattice_test() {
        Lattice_test("BLS24-315", BLS24315Param::glv_lattice());
    }

    #[test]
    #[allow(non_snake_case)]
    fn BLS24317Lattice_test() {
        Lattice_test("BLS24-317", BLS24317Param::glv_lattice());
    }

    #[test]
    #[allow(non_snake_case)]
    fn BW6761Lattice_test() {
        Lattice_test("BW6-761", BW6761Param::glv_lattice());
    }

    #[test]
    fn lattice_is_shared() {
        assert!(std::ptr::eq(BLS24315Param::glv_lattice(), BLS24315Param::glv_lattice()));
    }

    #[test]
    fn naf_test() {
        let mut rng = rand::thread_rng();
        assert!(naf(&BigUint::zero()).is_empty());
        assert_eq!(naf(&BigUint::from(7u32)), vec![-1, 0, 0, 1]);
        for _t in 0..TESTS {
            let n = rng.gen_biguint(256);
            let digits = naf(&n);
            let mut v = BigInt::zero();
            for &d in digits.iter().rev() {
                v = (v << 1) + BigInt::from(d);
            }
            assert_eq!(v, BigInt::from(n));
            for w in digits.windows(2) {
                assert!(w[0] == 0 || w[1] == 0);
            }
        }
    }

    /// Integers modulo a prime, under addition, with multiplication by lambda as endomorphism.
    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Zr(u64);

    const ZR_ORDER: u64 = 0xFFFFFFFFFFFFFFC5;  // largest 64-bit prime

    impl GlvGroup for Zr {
        fn identity() -> Self { Zr(0) }
        fn combine(&self, other: &Self) -> Self { Zr(((self.0 as u128 + other.0 as u128) % ZR_ORDER as u128) as u64) }
        fn combine_self(&self) -> Self { self.combine(self) }
        fn inverse(&self) -> Self { Zr((ZR_ORDER - self.0) % ZR_ORDER) }
        fn endomorphism(&self) -> Self {
            let lambda = Self::lattice().lambda().to_u64_digits()[0];
            Zr(((self.0 as u128*lambda as u128) % ZR_ORDER as u128) as u64)
        }
        fn lattice() -> &'static Lattice {
            static LATTICE: std::sync::OnceLock<Lattice> = std::sync::OnceLock::new();
            // any lambda works for the ring Z/rZ itself, pick one of half size:
            LATTICE.get_or_init(|| Lattice::new(&[ZR_ORDER], &[0x123456789ABCDEF]))
        }
    }

    #[test]
    fn mul_glv_test() {
        let mut rng = rand::thread_rng();
        for _t in 0..TESTS {
            let x = Zr(rng.gen_biguint_below(&BigUint::from(ZR_ORDER)).to_u64_digits().first().copied().unwrap_or(0));
            let s = rng.gen_biguint(64);
            let expected = (BigUint::from(x.0)*&s) % ZR_ORDER;
            assert_eq!(BigUint::from(mul_glv(&x, &s).0), expected);
        }
    }
}
