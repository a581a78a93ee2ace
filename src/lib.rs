//! Recovers the constant term of a polynomial from samples whose y-values
//! are written in arbitrary bases.
//!
//! Decoding ([`math::numeral`]) and interpolation ([`math::lagrange`]) are
//! exact: integers are `BigInt`, fractions are `BigRational`, nothing goes
//! through floating point. [`selection`] picks which samples are used.

pub mod config;
pub mod error;
pub mod input;
pub mod math;
pub mod report;
pub mod selection;
pub mod term_frontend;

pub use error::{NumeralFault, RecoverError, Result};
pub use math::lagrange::{interpolate_at_zero, InterpolationResult, Point, TermDetail};
pub use math::numeral::{decode, Numeral};
pub use selection::{check_consistency, recover, select};
