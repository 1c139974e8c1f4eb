#[cfg(not(any(target_pointer_width = "64")))]
compile_error!("this crate requires 64-bit limbs");

use thiserror::Error;

/// Failures reported by the pairing engine.
///
/// Every fallible operation of this crate reports one of these values
/// and leaves its inputs untouched.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum PairingError {
    /// The G1 and G2 input lists of a (multi-)pairing are empty or of different lengths.
    #[error("invalid input sizes: {g1} G1 point(s) against {g2} G2 point(s)")]
    SizeMismatch { g1: usize, g2: usize },

    /// Checked inversion of a zero field element.
    #[error("division by zero")]
    DivisionByZero,

    /// Torus compression of an element whose second half vanishes, i.e. of &plusmn;1.
    #[error("torus compression is undefined for elements with zero second half")]
    TorusZeroDivisor,

    /// Deserialization from a buffer of the wrong size.
    #[error("invalid encoding length: expected {expected} bytes, found {found}")]
    InvalidLength { expected: usize, found: usize },

    /// Deserialization of a base field coordinate that is not reduced modulo p.
    #[error("encoded coordinate is not reduced modulo the field characteristic")]
    NonCanonical,
}
