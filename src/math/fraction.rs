//! Exact fraction helpers on top of `BigRational`.
//!
//! `BigRational` already keeps its values reduced with a positive
//! denominator. What it does not do is refuse a zero denominator without
//! panicking, or round without going through a float, so those live here.

use num_traits::{Signed, Zero};

use super::{Num, NumComponent};
use crate::error::{RecoverError, Result};

/// Builds `numer / denom` in lowest terms.
pub fn checked_new(numer: NumComponent, denom: NumComponent) -> Result<Num> {
    if denom.is_zero() {
        return Err(RecoverError::InternalArithmetic(format!(
            "zero denominator in {numer}/0"
        )));
    }
    Ok(Num::new(numer, denom))
}

/// Fails if `n` breaks the lowest-terms, positive-denominator invariant.
pub fn ensure_canonical(n: &Num) -> Result<()> {
    if !n.denom().is_positive() {
        return Err(RecoverError::InternalArithmetic(format!(
            "non-positive denominator in {}/{}",
            n.numer(),
            n.denom()
        )));
    }
    // Ratio equality is by value, compare the parts
    let reduced = n.reduced();
    if reduced.numer() != n.numer() || reduced.denom() != n.denom() {
        return Err(RecoverError::InternalArithmetic(format!(
            "fraction {}/{} is not in lowest terms",
            n.numer(),
            n.denom()
        )));
    }
    Ok(())
}

/// Nearest integer to `n`, halves rounded away from zero.
///
/// Works on the reduced numerator and denominator with integer division only.
pub fn round_half_away(n: &Num) -> NumComponent {
    let denom = n.denom();
    let magnitude = n.numer().abs();
    let mut q = &magnitude / denom;
    let r = &magnitude % denom;
    if r * 2 >= *denom {
        q += 1;
    }
    if n.is_negative() {
        -q
    } else {
        q
    }
}
