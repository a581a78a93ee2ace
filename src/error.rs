use thiserror::Error;

use crate::math::NumComponent;

pub type Result<T> = std::result::Result<T, RecoverError>;

/// Why a digit string was rejected by the decoder.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NumeralFault {
    #[error("base must be at least 2")]
    BaseTooSmall,
    #[error("digit string is empty")]
    Empty,
    #[error("character {ch:?} at position {position} is not a digit of this base")]
    BadDigit { ch: char, position: usize },
}

/// Errors raised by decoding, point selection and interpolation.
///
/// Every failure is a deterministic function of the input, so nothing here is
/// retried. Variants carry the offending values so the caller can report them
/// without re-running.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RecoverError {
    #[error("invalid numeral {digits:?} in base {base}: {fault}")]
    InvalidNumeral {
        base: u32,
        digits: String,
        fault: NumeralFault,
    },
    #[error("unsupported base {base} for numeral {digits:?}: digits only go up to base 36")]
    UnsupportedBase { base: NumComponent, digits: String },
    #[error("insufficient points: need {needed}, got {available}")]
    InsufficientPoints { needed: usize, available: usize },
    #[error("duplicate x-coordinate {x} in the interpolation set")]
    DuplicateX { x: NumComponent },
    #[error("k must be at least 1")]
    ZeroThreshold,
    #[error("internal arithmetic error: {0}")]
    InternalArithmetic(String),
}
