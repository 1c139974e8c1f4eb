//! Optimal ate pairings over BLS24 and BW6 curves.
//!
//! The crate provides the extension field towers
//! <b>F</b><sub><i>p</i></sub> &rarr; <b>F</b><sub><i>p&sup2;</i></sub> &rarr; <b>F</b><sub><i>p&#x2074;</i></sub> &rarr;
//! <b>F</b><sub><i>p&sup1;&sup2;</i></sub> &rarr; <b>F</b><sub><i>p&sup2;&#xFEFF;&#x2074;</i></sub> (BLS24) and
//! <b>F</b><sub><i>p</i></sub> &rarr; <b>F</b><sub><i>p&sup3;</i></sub> &rarr; <b>F</b><sub><i>p&#x2076;</i></sub> (BW6),
//! curve groups <b>G&#x2081;</b> and <b>G&#x2082;</b>, the multi Miller loop (also against precomputed
//! lines for a fixed <b>G&#x2082;</b> argument), the final exponentiation, and GLV scalar
//! multiplication and exponentiation.
//!
//! Example:
//!
//! &nbsp;&nbsp;&nbsp;&nbsp;const LIMBS: usize = BLS24317Param::LIMBS;<br>
//! &nbsp;&nbsp;&nbsp;&nbsp;type E = BLS24Pairing&lt;BLS24317Param, LIMBS&gt;;<br>
//! &nbsp;&nbsp;&nbsp;&nbsp;let P = BLS24G1::&lt;BLS24317Param, LIMBS&gt;::generator();<br>
//! &nbsp;&nbsp;&nbsp;&nbsp;let Q = BLS24G2::&lt;BLS24317Param, LIMBS&gt;::generator();<br>
//! &nbsp;&nbsp;&nbsp;&nbsp;assert!(pairing_check::&lt;E&gt;(&[P, -P], &[Q, Q])?);<br>

#[cfg(not(any(target_pointer_width = "64")))]
compile_error!("this crate requires 64-bit limbs");

pub mod bls24fp12;
pub mod bls24fp2;
pub mod bls24fp24;
pub mod bls24fp4;
pub mod bls24pairing;
pub mod bls24param;
pub mod bw6fp3;
pub mod bw6fp6;
pub mod bw6pairing;
pub mod bw6param;
pub mod chain;
pub mod cyclotomic;
pub mod error;
pub mod fp;
pub mod glv;
pub mod pairing;
pub mod point;
pub mod traits;
