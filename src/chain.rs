#[cfg(not(any(target_pointer_width = "64")))]
compile_error!("this crate requires 64-bit limbs");

use crate::cyclotomic::Cyclotomic;
use num_bigint::BigInt;
use tracing::trace;

/// Number of registers available to an exponentiation chain.
pub const REGISTERS: usize = 5;

/// One instruction of a fixed-exponent addition chain over the cyclotomic subgroup.
///
/// Register 0 holds the input, register 1 the result, all others start at one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChainOp {
    /// `dst` &larr; `src`<sup>2<sup><i>n</i></sup></sup> by Granger-Scott squarings (a copy when <i>n</i> = 0).
    Square(usize, usize, usize),
    /// `dst` &larr; `src`<sup>2<sup><i>n</i></sup></sup> by compressed squarings and one decompression.
    SquareCompressed(usize, usize, usize),
    /// `dst` &larr; `a`&middot;`b`.
    Mul(usize, usize, usize),
    /// `dst` &larr; `src`<sup>-1</sup>, i.e. the conjugate of `src`.
    Conj(usize, usize),
}

/// Execute a chain on a cyclotomic element.
pub fn run<T: Cyclotomic>(chain: &[ChainOp], x: &T) -> T {
    trace!(ops = chain.len(), "running exponentiation chain");
    let mut r = [T::one(); REGISTERS];
    r[0] = *x;
    for op in chain {
        match *op {
            ChainOp::Square(dst, src, n) => {
                let mut t = r[src];
                for _ in 0..n {
                    t = t.cyclotomic_square();
                }
                r[dst] = t;
            }
            ChainOp::SquareCompressed(dst, src, n) => {
                let mut c = r[src].compress_karabina();
                for _ in 0..n {
                    c = c.cyclotomic_square_compressed();
                }
                r[dst] = T::decompress_karabina(&c);
            }
            ChainOp::Mul(dst, a, b) => r[dst] = r[a]*r[b],
            ChainOp::Conj(dst, src) => r[dst] = r[src].conj(),
        }
    }
    r[1]
}

/// The exponent a chain computes, found by running it on the integers
/// (registers hold exponents, squaring doubles and multiplication adds).
pub fn exponent(chain: &[ChainOp]) -> BigInt {
    let mut r: [BigInt; REGISTERS] = Default::default();
    r[0] = BigInt::from(1);
    for op in chain {
        match *op {
            ChainOp::Square(dst, src, n) | ChainOp::SquareCompressed(dst, src, n) => r[dst] = &r[src] << n,
            ChainOp::Mul(dst, a, b) => r[dst] = &r[a] + &r[b],
            ChainOp::Conj(dst, src) => r[dst] = -&r[src],
        }
    }
    r[1].clone()
}


#[cfg(test)]
mod tests {
    use crate::fp::FpParam;
    use crate::bls24param::{BLS24315Param, BLS24317Param, BLS24Param};
    use crate::bw6param::{BW6761Param, BW6Param};
    use crate::cyclotomic::sampling::{bls24_cyclotomic, bw6_cyclotomic};
    use crate::fp::Fp;
    use num_bigint::Sign;
    use num_traits::Zero;
    use std::time::SystemTime;
    use super::*;

    const TESTS: usize = 5;

    /// <i>f</i><sup><i>e</i></sup> for a signed exponent, via the conjugate.
    fn pow_signed<T: Cyclotomic>(f: &T, e: &BigInt) -> T {
        let v = f.pow(e.magnitude());
        if e.sign() == Sign::Minus { v.conj() } else { v }
    }

    #[allow(non_snake_case)]
    fn BLS24Chain_test<PAR: BLS24Param, const LIMBS: usize>() {
        let mut rng = rand::thread_rng();

        println!();
        println!("Performing {} BLS24-{:03} chain test(s)...", TESTS, Fp::<PAR, LIMBS>::modulus().bits());
        let now = SystemTime::now();

        let x = BigInt::from(PAR::SEED);
        assert_eq!(exponent(PAR::EXPT), x);
        for _t in 0..TESTS {
            let f = bls24_cyclotomic::<PAR, LIMBS>(&mut rng);
            assert_eq!(run(PAR::EXPT, &f), pow_signed(&f, &x));
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

    #[allow(non_snake_case)]
    fn BW6Chain_test<PAR: BW6Param, const LIMBS: usize>() {
        let mut rng = rand::thread_rng();

        println!();
        println!("Performing {} BW6-{:03} chain test(s)...", TESTS, Fp::<PAR, LIMBS>::modulus().bits());
        let now = SystemTime::now();

        let x = BigInt::from(PAR::SEED);
        let one = BigInt::from(1);
        let chains = [
            (PAR::EXPT, x.clone()),
            (PAR::EXPT_MINUS_1, &x - &one),
            (PAR::EXPT_PLUS_1, &x + &one),
            (PAR::EXPT_MINUS_1_SQ, (&x - &one)*(&x - &one)),
            (PAR::EXPT_MINUS_1_DIV_3, (&x - &one)/3),
            (PAR::EXPC1, BigInt::from(11)),
            (PAR::EXPC2, BigInt::from(103)),
        ];
        for (chain, e) in chains.iter() {
            assert_eq!(exponent(chain), *e);
        }
        for _t in 0..TESTS {
            let f = bw6_cyclotomic::<PAR, LIMBS>(&mut rng);
            for (chain, e) in chains.iter() {
                assert_eq!(run(chain, &f), pow_signed(&f, e));
            }
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
    fn exponent_test() {
        assert_eq!(exponent(&[]), BigInt::zero());
        assert_eq!(exponent(&[ChainOp::Square(1, 0, 0)]), BigInt::from(1));
        let chain = [
            ChainOp::Square(2, 0, 3),
            ChainOp::Conj(3, 0),
            ChainOp::Mul(1, 2, 3),
            ChainOp::SquareCompressed(1, 1, 2),
        ];
        assert_eq!(exponent(&chain), BigInt::from(28));
    }

    #[test]
    #[allow(non_snake_case)]
    fn BLS24315Chain_test() {
        const LIMBS: usize = BLS24315Param::LIMBS;
        BLS24Chain_test::<BLS24315Param, LIMBS>();
    }

    #[test]
    #[allow(non_snake_case)]
    fn BLS24317Chain_test() {
        const LIMBS: usize = BLS24317Param::LIMBS;
        BLS24Chain_test::<BLS24317Param, LIMBS>();
    }

    #[test]
    #[allow(non_snake_case)]
    fn BW6761Chain_test() {
        const LIMBS: usize = BW6761Param::LIMBS;
        BW6Chain_test::<BW6761Param, LIMBS>();
    }
}
