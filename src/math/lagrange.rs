use num_traits::{One, Zero};

use super::fraction::{checked_new, ensure_canonical, round_half_away};
use super::{Num, NumComponent};
use crate::error::{RecoverError, Result};

/// A sample `(x, y)` of the unknown polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: NumComponent,
    pub y: NumComponent,
}

impl Point {
    pub fn new(x: impl Into<NumComponent>, y: impl Into<NumComponent>) -> Self {
        Self { x: x.into(), y: y.into() }
    }
}

/// One factor `(0 - x_j) / (x_i - x_j)` of a basis product, as written
/// before reduction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Factor {
    pub x_j: NumComponent,
    pub numer: NumComponent,
    pub denom: NumComponent,
}

impl Factor {
    pub fn value(&self) -> Result<Num> {
        checked_new(self.numer.clone(), self.denom.clone())
    }
}

/// Diagnostic record of how sample `i` contributed to the constant term.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TermDetail {
    pub x: NumComponent,
    pub y: NumComponent,
    pub factors: Vec<Factor>,
    /// Lagrange basis polynomial of this sample evaluated at 0.
    pub basis: Num,
    /// `y * basis`
    pub contribution: Num,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterpolationResult {
    pub exact_value: Num,
    pub rounded: NumComponent,
    pub terms: Vec<TermDetail>,
}

impl InterpolationResult {
    pub fn is_integer(&self) -> bool {
        self.exact_value.is_integer()
    }
}

/// Value at `x = 0` of the lowest degree polynomial through `points`.
///
/// Each basis value `prod_{j != i} (0 - x_j) / (x_i - x_j)` is folded one
/// factor at a time, and every product is reduced as it is formed so the
/// numerators stay small. Terms are summed in input order.
pub fn interpolate_at_zero(points: &[Point]) -> Result<InterpolationResult> {
    if points.is_empty() {
        return Err(RecoverError::ZeroThreshold);
    }

    let mut terms = Vec::with_capacity(points.len());
    let mut sum = Num::zero();

    for (i, p_i) in points.iter().enumerate() {
        let mut basis = Num::one();
        let mut factors = Vec::with_capacity(points.len() - 1);

        for (j, p_j) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            let denom = &p_i.x - &p_j.x;
            if denom.is_zero() {
                return Err(RecoverError::DuplicateX { x: p_i.x.clone() });
            }
            let factor = Factor {
                x_j: p_j.x.clone(),
                numer: -&p_j.x,
                denom,
            };
            basis = basis * factor.value()?;
            factors.push(factor);
        }

        let contribution = &basis * Num::from(p_i.y.clone());
        ensure_canonical(&contribution)?;
        sum = sum + &contribution;

        terms.push(TermDetail {
            x: p_i.x.clone(),
            y: p_i.y.clone(),
            factors,
            basis,
            contribution,
        });
    }

    ensure_canonical(&sum)?;
    let rounded = round_half_away(&sum);

    Ok(InterpolationResult {
        exact_value: sum,
        rounded,
        terms,
    })
}
