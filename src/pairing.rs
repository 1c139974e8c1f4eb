#[cfg(not(any(target_pointer_width = "64")))]
compile_error!("this crate requires 64-bit limbs");

use crate::bls24param::Twist;
use crate::cyclotomic::Cyclotomic;
use crate::error::PairingError;
use crate::glv::GlvGroup;
use crate::point::{Affine, Curve, Point};
use crate::traits::{CubicExtension, NonResidue, One, SexticExtension, TowerField, Zero};
use tracing::debug;

/// The target group field of an engine.
type Target<E> = <E as PairingEngine>::GT;

/// The field hosting the line coefficients, i.e. the field of definition of the twist.
type LineField<E> = <<E as PairingEngine>::GT as SexticExtension>::Base;

/// The cubic subfield over which the target field is quadratic.
type Cubic<E> = <<E as PairingEngine>::GT as SexticExtension>::Cubic;

/// The prime field, where the coordinates of <b>G&#x2081;</b> points live.
type Scalar<E> = <<E as PairingEngine>::GT as TowerField>::Prime;

/// Description of a family of pairing-friendly curves for the generic optimal ate pairing.
///
/// The Miller loop runs on the twist, whose field of definition is the base
/// of the sextic target extension, so that each line function is sparse.
pub trait PairingEngine: Sized + 'static {
    type G1: Curve<F = Scalar<Self>>;
    type G2: Curve<F = LineField<Self>>;
    type GT: Cyclotomic + GlvGroup;

    /// Where line coefficients land in the target field.
    const TWIST: Twist;

    /// Signed digits of the loop counter, least significant first.
    const ATE_LOOP: &'static [i8];

    /// Whether the Miller loop output must be conjugated (negative curve seed).
    const NEGATIVE_SEED: bool;

    /// The point added into the accumulator for a loop digit of magnitude `m`.
    fn addend(q: &Affine<Self::G2>, m: u8) -> Affine<Self::G2>;

    /// The Frobenius power closing the easy part of the final exponentiation,
    /// <i>t &#x21A6; t</i><sup><i>p&#x1D4F;</i></sup> with <i>p&#x1D4F; + 1</i> the second easy factor.
    fn easy_frobenius(t: &Self::GT) -> Self::GT;

    /// The hard part of the final exponentiation, on the cyclotomic subgroup.
    fn hard_part(f: &Self::GT) -> Self::GT;
}

/// A sparse line value: each half <i>c&#x2080; + c&#x2081;w</i> of the target element
/// has its <i>w&sup2;</i> coefficient equal to zero.
struct Line<B> {
    h0: (B, B),
    h1: (B, B),
}

/// Place the evaluated line coefficients (<i>y</i>-coefficient, <i>x</i>-coefficient, constant)
/// according to the twist type.
fn place<E: PairingEngine>(ly: LineField<E>, lx: LineField<E>, lc: LineField<E>) -> Line<LineField<E>> {
    let zero = LineField::<E>::zero();
    match E::TWIST {
        Twist::D => Line { h0: (ly, zero), h1: (lx, lc) },
        Twist::M => Line { h0: (lc, lx), h1: (zero, ly) },
    }
}

/// Multiply a dense target element by a sparse line value.
fn mul_by_line<E: PairingEngine>(f: &Target<E>, l: &Line<LineField<E>>) -> Target<E> {
    let (f0, f1) = f.halves();
    let (a0, a1) = l.h0;
    let (b0, b1) = l.h1;
    let t0 = f0.mul_by_01(&a0, &a1);
    let t1 = f1.mul_by_01(&b0, &b1);
    let t2 = (f0 + f1).mul_by_01(&(a0 + b0), &(a1 + b1));
    Target::<E>::from_halves(t0 + t1.mul_by_non_residue(), t2 - t0 - t1)
}

/// <i>(a&#x2080; + a&#x2081;w)(b&#x2080; + b&#x2081;w)</i> with three base field products.
fn mul_01_by_01<E: PairingEngine>(a: &(LineField<E>, LineField<E>), b: &(LineField<E>, LineField<E>)) -> Cubic<E> {
    let t0 = a.0*b.0;
    let t1 = a.1*b.1;
    let t2 = (a.0 + a.1)*(b.0 + b.1) - (t0 + t1);
    Cubic::<E>::from_coeffs(t0, t2, t1)
}

/// Multiply two sparse line values, for nine base field products.
///
/// The product is dense and goes into the accumulator with one full multiplication,
/// against two full-by-sparse multiplications for the lines taken one at a time.
fn mul_line_by_line<E: PairingEngine>(l1: &Line<LineField<E>>, l2: &Line<LineField<E>>) -> Target<E> {
    let t0 = mul_01_by_01::<E>(&l1.h0, &l2.h0);
    let t1 = mul_01_by_01::<E>(&l1.h1, &l2.h1);
    let s1 = (l1.h0.0 + l1.h1.0, l1.h0.1 + l1.h1.1);
    let s2 = (l2.h0.0 + l2.h1.0, l2.h0.1 + l2.h1.1);
    let t2 = mul_01_by_01::<E>(&s1, &s2);
    Target::<E>::from_halves(t0 + t1.mul_by_non_residue(), t2 - (t0 + t1))
}

/// Coefficients of the tangent line at <i>T</i>, together with <i>&lbrack;2&rbrack;T</i>.
///
/// Reference: Craig Costello, Tanja Lange, Michael Naehrig:
/// "Faster pairing computations on curves with high-degree twists."
/// In: <i>PKC 2010</i>, LNCS 6056, pp. 224--242. Springer, 2010.
fn double_step<E: PairingEngine>(t: &Point<E::G2>) -> (Point<E::G2>, [LineField<E>; 3]) {
    let (x, y, z) = (t.x, t.y, t.z);
    let a = (x*y).half();
    let b = y.sq();
    let c = z.sq();
    let e = (c.double() + c)*E::G2::b();
    let f = e.double() + e;
    let g = (b + f).half();
    let h = (y + z).sq() - (b + c);
    let i = e - b;
    let j = x.sq();
    let ee = e.sq();
    let next = Point::from_proj((b - f)*a, g.sq() - (ee.double() + ee), b*h);
    (next, [-h, j.double() + j, i])
}

/// Coefficients of the line through <i>T</i> and <i>Q</i>, together with <i>T + Q</i>.
fn add_step<E: PairingEngine>(t: &Point<E::G2>, q: &Affine<E::G2>) -> (Point<E::G2>, [LineField<E>; 3]) {
    let (x, y, z) = (t.x, t.y, t.z);
    let (qx, qy) = (q.x, q.y);
    let o = y - qy*z;
    let l = x - qx*z;
    let c = o.sq();
    let d = l.sq();
    let e = l*d;
    let f = z*c;
    let g = x*d;
    let h = e + f - g.double();
    let next = Point::from_proj(l*h, (g - h)*o - y*e, e*z);
    (next, [l, -o, qx*o - l*qy])
}

/// Evaluate projective line coefficients at a <b>G&#x2081;</b> point.
fn eval_line<E: PairingEngine>(l: &[LineField<E>; 3], p: &Affine<E::G1>) -> Line<LineField<E>> {
    place::<E>(l[0].scale(&p.y), l[1].scale(&p.x), l[2])
}

fn signed_addend<E: PairingEngine>(q: &Affine<E::G2>, digit: i8) -> Affine<E::G2> {
    let a = E::addend(q, digit.unsigned_abs());
    if digit < 0 { -a } else { a }
}

fn check_sizes(g1: usize, g2: usize) -> Result<(), PairingError> {
    if g1 == 0 || g1 != g2 {
        return Err(PairingError::SizeMismatch { g1, g2 });
    }
    Ok(())
}

/// The multi Miller loop <i>&prod;&#x2C7C; f</i><sub><i>u</i>,<i>Q&#x2C7C;</i></sub>(<i>P&#x2C7C;</i>),
/// skipping every pair with a point at infinity.
///
/// The output is only defined up to factors killed by the final exponentiation.
pub fn miller_loop<E: PairingEngine>(ps: &[Affine<E::G1>], qs: &[Affine<E::G2>]) -> Result<Target<E>, PairingError> {
    check_sizes(ps.len(), qs.len())?;
    let pairs: Vec<(Affine<E::G1>, Affine<E::G2>)> = ps.iter().zip(qs)
        .filter(|(p, q)| !p.is_infinity() && !q.is_infinity())
        .map(|(p, q)| (*p, *q))
        .collect();
    debug!(pairs = ps.len(), skipped = ps.len() - pairs.len(), "Miller loop");
    if pairs.is_empty() {
        return Ok(Target::<E>::one());
    }

    let digits = E::ATE_LOOP;
    let n = digits.len();
    let mut f = Target::<E>::one();
    let mut ts: Vec<Point<E::G2>> = pairs.iter()
        .map(|(_, q)| signed_addend::<E>(q, digits[n - 1]).to_projective())
        .collect();
    for i in (0..n - 1).rev() {
        if i != n - 2 {
            f = f.sq();
        }
        let d = digits[i];
        for ((p, q), t) in pairs.iter().zip(ts.iter_mut()) {
            let (t2, l1) = double_step::<E>(t);
            let l1 = eval_line::<E>(&l1, p);
            if d == 0 {
                f = mul_by_line::<E>(&f, &l1);
                *t = t2;
            } else {
                let (t3, l2) = add_step::<E>(&t2, &signed_addend::<E>(q, d));
                let l2 = eval_line::<E>(&l2, p);
                f *= mul_line_by_line::<E>(&l1, &l2);
                *t = t3;
            }
        }
    }
    if E::NEGATIVE_SEED {
        f = f.conj();
    }
    Ok(f)
}

/// Raise a Miller loop output to the power <i>(p&#x1D4F; - 1)/r</i> (up to a fixed multiple
/// coprime to <i>r</i>), mapping it into the order-<i>r</i> target group.
///
/// The input must be nonzero, as every Miller loop output is. Zero is mapped to zero,
/// which lies outside the target group.
pub fn final_exponentiation<E: PairingEngine>(f: &Target<E>) -> Target<E> {
    // easy part: f^((p^(k/2) - 1)(p^(k/d) + 1))
    let t = f.conj()*f.inv();
    let t = E::easy_frobenius(&t)*t;
    if bool::from(t.is_one()) {
        debug!("final exponentiation: easy part is one");
        return t;
    }
    E::hard_part(&t)
}

/// The final exponentiation of the product of several Miller loop outputs,
/// e.g. from loops run separately on plain and precomputed arguments.
/// An empty slice yields one.
pub fn final_exponentiation_product<E: PairingEngine>(fs: &[Target<E>]) -> Target<E> {
    let f = fs.iter().fold(Target::<E>::one(), |acc, fi| acc*(*fi));
    final_exponentiation::<E>(&f)
}

/// The optimal ate multi-pairing <i>&prod;&#x2C7C; e</i>(<i>P&#x2C7C;</i>, <i>Q&#x2C7C;</i>).
///
/// Example:
///
/// &nbsp;&nbsp;&nbsp;&nbsp;let g = pair::&lt;BLS24Pairing&lt;BLS24317Param, LIMBS&gt;&gt;(&[P], &[Q])?;<br>
pub fn pair<E: PairingEngine>(ps: &[Affine<E::G1>], qs: &[Affine<E::G2>]) -> Result<Target<E>, PairingError> {
    Ok(final_exponentiation::<E>(&miller_loop::<E>(ps, qs)?))
}

/// Check whether <i>&prod;&#x2C7C; e</i>(<i>P&#x2C7C;</i>, <i>Q&#x2C7C;</i>) = 1.
pub fn pairing_check<E: PairingEngine>(ps: &[Affine<E::G1>], qs: &[Affine<E::G2>]) -> Result<bool, PairingError> {
    Ok(bool::from(pair::<E>(ps, qs)?.is_one()))
}

/// Affine line data of a fixed <b>G&#x2082;</b> point, one entry per loop position:
/// the tangent line and, on positions with a nonzero digit, the addition line,
/// each as the pair (<i>&lambda;</i>, <i>&mu;</i>) of the line <i>y = &lambda;x - &mu;</i>.
pub struct LineTable<E: PairingEngine> {
    lines: Vec<((LineField<E>, LineField<E>), Option<(LineField<E>, LineField<E>)>)>,
}

impl<E: PairingEngine> LineTable<E> {
    /// Whether the table stands for the point at infinity (every line trivial).
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

impl<E: PairingEngine> Clone for LineTable<E> {
    fn clone(&self) -> Self {
        Self { lines: self.lines.clone() }
    }
}

/// Replay the Miller loop ladder on a fixed point <i>Q</i> in affine coordinates,
/// recording the line slopes and intercepts to be reused against many <b>G&#x2081;</b> points.
pub fn precompute_lines<E: PairingEngine>(q: &Affine<E::G2>) -> LineTable<E> {
    if q.is_infinity() {
        return LineTable { lines: Vec::new() };
    }
    let zero = LineField::<E>::zero();
    let digits = E::ATE_LOOP;
    let n = digits.len();
    let mut t = Some(signed_addend::<E>(q, digits[n - 1]));
    let mut lines = Vec::with_capacity(n - 1);
    for i in (0..n - 1).rev() {
        let dbl = match t {
            Some(a) => {
                let (x, y) = (a.x, a.y);
                let x2 = x.sq();
                let lambda = (x2.double() + x2)*y.double().inv();
                let mu = lambda*x - y;
                let x3 = lambda.sq() - x.double();
                t = Some(Affine::new(x3, lambda*(x - x3) - y));
                (lambda, mu)
            }
            None => (zero, zero),
        };
        let add = match (digits[i], t) {
            (0, _) => None,
            (_, None) => Some((zero, zero)),
            (d, Some(a)) => {
                let b = signed_addend::<E>(q, d);
                if a.x == b.x {
                    t = None;
                    Some((zero, zero))
                } else {
                    let lambda = (b.y - a.y)*(b.x - a.x).inv();
                    let mu = lambda*a.x - a.y;
                    let x3 = lambda.sq() - a.x - b.x;
                    t = Some(Affine::new(x3, lambda*(a.x - x3) - a.y));
                    Some((lambda, mu))
                }
            }
        };
        lines.push((dbl, add));
    }
    lines.reverse();  // index by loop position
    debug!(lines = lines.len(), "fixed-argument line table");
    LineTable { lines }
}

/// The multi Miller loop against precomputed line tables, one per <b>G&#x2081;</b> point.
///
/// Each line is scaled by <i>1/y&#x209A;</i> &in; <b>F</b><sub><i>p</i></sub>, a factor the
/// final exponentiation removes, so that its <i>y</i>-coefficient is one.
pub fn miller_loop_fixed_q<E: PairingEngine>(ps: &[Affine<E::G1>], tables: &[LineTable<E>]) -> Result<Target<E>, PairingError> {
    check_sizes(ps.len(), tables.len())?;
    let pairs: Vec<(&Affine<E::G1>, &LineTable<E>)> = ps.iter().zip(tables)
        .filter(|(p, t)| !p.is_infinity() && !t.is_empty())
        .collect();
    debug!(pairs = ps.len(), skipped = ps.len() - pairs.len(), "fixed-argument Miller loop");
    if pairs.is_empty() {
        return Ok(Target::<E>::one());
    }

    let y_inv = Scalar::<E>::batch_invert(&pairs.iter().map(|(p, _)| p.y).collect::<Vec<_>>());
    let x_over_y: Vec<Scalar<E>> = pairs.iter().zip(&y_inv).map(|((p, _), yi)| -(p.x*(*yi))).collect();
    let eval = |(lambda, mu): &(LineField<E>, LineField<E>), k: usize| {
        place::<E>(LineField::<E>::one(), lambda.scale(&x_over_y[k]), mu.scale(&y_inv[k]))
    };

    let digits = E::ATE_LOOP;
    let n = digits.len();
    let mut f = Target::<E>::one();
    for i in (0..n - 1).rev() {
        if i != n - 2 {
            f = f.sq();
        }
        for (k, (_, table)) in pairs.iter().enumerate() {
            let (dbl, add) = &table.lines[i];
            let l1 = eval(dbl, k);
            match add {
                None => f = mul_by_line::<E>(&f, &l1),
                Some(add) => f *= mul_line_by_line::<E>(&l1, &eval(add, k)),
            }
        }
    }
    if E::NEGATIVE_SEED {
        f = f.conj();
    }
    Ok(f)
}

/// The multi-pairing against precomputed line tables.
pub fn pair_fixed_q<E: PairingEngine>(ps: &[Affine<E::G1>], tables: &[LineTable<E>]) -> Result<Target<E>, PairingError> {
    Ok(final_exponentiation::<E>(&miller_loop_fixed_q::<E>(ps, tables)?))
}

/// Check whether the multi-pairing against precomputed line tables is one.
pub fn pairing_check_fixed_q<E: PairingEngine>(ps: &[Affine<E::G1>], tables: &[LineTable<E>]) -> Result<bool, PairingError> {
    Ok(bool::from(pair_fixed_q::<E>(ps, tables)?.is_one()))
}


#[cfg(test)]
pub(crate) mod tests {
    use crate::glv::{mul_glv, GlvGroup};
    use crate::point::Point;
    use crypto_bigint::Random;
    use num_bigint::RandBigInt;
    use std::time::SystemTime;
    use super::*;

    const TESTS: usize = 3;

    /// The line value as a dense target element.
    fn line_to_target<E: PairingEngine>(l: &Line<LineField<E>>) -> Target<E> {
        let zero = LineField::<E>::zero();
        Target::<E>::from_halves(
            Cubic::<E>::from_coeffs(l.h0.0, l.h0.1, zero),
            Cubic::<E>::from_coeffs(l.h1.0, l.h1.1, zero),
        )
    }

    /// Pairing properties shared by every engine.
    #[allow(non_snake_case)]
    pub(crate) fn Pairing_test<E: PairingEngine>(name: &str) {
        let mut rng = rand::thread_rng();
        let r = <E::GT as GlvGroup>::lattice().order().clone();
        let P = E::G1::generator();
        let Q = E::G2::generator();
        let O1 = Affine::<E::G1>::infinity();
        let O2 = Affine::<E::G2>::infinity();

        println!();
        println!("Performing {} {} pairing test(s)...", TESTS, name);
        let now = SystemTime::now();

        // input validation:
        assert_eq!(pair::<E>(&[], &[]), Err(PairingError::SizeMismatch { g1: 0, g2: 0 }));
        assert_eq!(pair::<E>(&[P, P], &[Q]), Err(PairingError::SizeMismatch { g1: 2, g2: 1 }));
        assert_eq!(miller_loop::<E>(&[P], &[]), Err(PairingError::SizeMismatch { g1: 1, g2: 0 }));
        assert_eq!(pair_fixed_q::<E>(&[], &[]), Err(PairingError::SizeMismatch { g1: 0, g2: 0 }));

        // degenerate arguments:
        assert_eq!(pair::<E>(&[O1], &[Q]), Ok(Target::<E>::one()));
        assert_eq!(pair::<E>(&[P], &[O2]), Ok(Target::<E>::one()));
        assert_eq!(pair_fixed_q::<E>(&[P], &[precompute_lines::<E>(&O2)]), Ok(Target::<E>::one()));
        assert_eq!(final_exponentiation::<E>(&Target::<E>::one()), Target::<E>::one());
        assert_eq!(final_exponentiation_product::<E>(&[]), Target::<E>::one());
        assert!(bool::from(final_exponentiation::<E>(&Target::<E>::zero()).is_zero()));

        // sparse line products against dense ones:
        for _t in 0..TESTS {
            let mut line = || place::<E>(LineField::<E>::random(&mut rng), LineField::<E>::random(&mut rng), LineField::<E>::random(&mut rng));
            let (l1, l2) = (line(), line());
            let f = Target::<E>::random(&mut rng);
            assert_eq!(mul_by_line::<E>(&f, &l1), f*line_to_target::<E>(&l1));
            assert_eq!(mul_line_by_line::<E>(&l1, &l2), line_to_target::<E>(&l1)*line_to_target::<E>(&l2));
            assert_eq!(mul_line_by_line::<E>(&l1, &l2), mul_line_by_line::<E>(&l2, &l1));
        }

        // non-degeneracy and target group membership:
        let g = pair::<E>(&[P], &[Q]).unwrap();
        assert!(!bool::from(g.is_one()));
        assert!(g.is_unitary());
        assert!(bool::from(g.pow(&r).is_one()));
        assert_eq!(pair::<E>(&[P, O1], &[Q, Q]), Ok(g));

        // fixed argument:
        let table = precompute_lines::<E>(&Q);
        assert_eq!(table.len(), E::ATE_LOOP.len() - 1);
        assert_eq!(pair_fixed_q::<E>(&[P], &[table.clone()]), Ok(g));

        for _t in 0..TESTS {
            let a = rng.gen_biguint_below(&r);
            let b = rng.gen_biguint_below(&r);
            let aP = Point::<E::G1>::generator().mul_glv(&a).to_affine();
            let bQ = Point::<E::G2>::generator().mul_glv(&b).to_affine();
            let ab = (&a*&b) % &r;

            // bilinearity:
            let gab = pair::<E>(&[aP], &[bQ]).unwrap();
            assert_eq!(gab, g.pow(&ab));
            assert_eq!(gab, mul_glv(&g, &ab));
            assert_eq!(pair::<E>(&[aP], &[Q]).unwrap(), pair::<E>(&[P], &[Q.to_projective().mul_glv(&a).to_affine()]).unwrap());

            // multi-pairing and check:
            assert_eq!(pair::<E>(&[P, aP], &[bQ, Q]).unwrap(), g.pow(&((&a + &b) % &r)));
            assert_eq!(pairing_check::<E>(&[aP, -aP], &[bQ, bQ]), Ok(true));
            assert_eq!(pairing_check::<E>(&[aP, aP], &[bQ, -bQ]), Ok(true));
            assert_eq!(pairing_check::<E>(&[aP, P], &[bQ, bQ]), Ok(false));

            // fixed argument against the plain pairing:
            let tab = precompute_lines::<E>(&bQ);
            assert_eq!(pair_fixed_q::<E>(&[P, aP], &[tab.clone(), tab.clone()]), pair::<E>(&[P, aP], &[bQ, bQ]));
            assert_eq!(pair_fixed_q::<E>(&[aP, O1], &[table.clone(), tab.clone()]), Ok(pair::<E>(&[aP], &[Q]).unwrap()));
            assert_eq!(pairing_check_fixed_q::<E>(&[aP, -aP], &[tab.clone(), tab.clone()]), Ok(true));
            assert_eq!(pairing_check_fixed_q::<E>(&[aP, P], &[tab.clone(), tab.clone()]), Ok(false));
            assert_eq!(pairing_check_fixed_q::<E>(&[aP], &[]), Err(PairingError::SizeMismatch { g1: 1, g2: 0 }));

            // the final exponentiation is a homomorphism:
            let f1 = miller_loop::<E>(&[aP], &[Q]).unwrap();
            let f2 = miller_loop::<E>(&[P], &[bQ]).unwrap();
            assert_eq!(final_exponentiation::<E>(&(f1*f2)), pair::<E>(&[aP, P], &[Q, bQ]).unwrap());

            // one final exponentiation over plain and fixed-argument loops:
            let f3 = miller_loop_fixed_q::<E>(&[-aP], &[tab]).unwrap();
            assert_eq!(final_exponentiation_product::<E>(&[f1, f2, f3]), pair::<E>(&[aP, P], &[Q, bQ]).unwrap()*pair::<E>(&[-aP], &[bQ]).unwrap());
            assert!(bool::from(final_exponentiation_product::<E>(&[miller_loop::<E>(&[aP], &[bQ]).unwrap(), f3]).is_one()));
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
}
