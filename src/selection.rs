//! Choosing which `k` samples feed the interpolation.
//!
//! Samples are sorted by ascending x and the first `k` are used. Any `k`
//! samples of a genuine degree `k - 1` polynomial give the same constant
//! term, so this order is a reproducibility convention only. Whether the
//! data really is such a sample is not verified unless
//! [`check_consistency`] is called explicitly.

use crate::error::{RecoverError, Result};
use crate::math::lagrange::{interpolate_at_zero, InterpolationResult, Point};
use crate::math::Num;

/// The `k` samples with the smallest x, in ascending x order.
pub fn select(points: &[Point], k: usize) -> Result<Vec<Point>> {
    if k == 0 {
        return Err(RecoverError::ZeroThreshold);
    }
    if points.len() < k {
        return Err(RecoverError::InsufficientPoints {
            needed: k,
            available: points.len(),
        });
    }

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.cmp(&b.x));
    sorted.truncate(k);

    if let Some(pair) = sorted.windows(2).find(|pair| pair[0].x == pair[1].x) {
        return Err(RecoverError::DuplicateX { x: pair[0].x.clone() });
    }
    Ok(sorted)
}

/// Selects `k` samples and returns the constant term they determine.
pub fn recover(points: &[Point], k: usize) -> Result<InterpolationResult> {
    let selected = select(points, k)?;
    interpolate_at_zero(&selected)
}

/// A sample outside the selected set that implies a different constant term.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Disagreement {
    pub point: Point,
    pub expected: Num,
    pub found: Num,
}

/// Cross-checks the unused samples against the selected ones.
///
/// For each sample beyond the first `k` (by x), the set made of the first
/// `k - 1` selected samples plus that sample is interpolated. Any result
/// differing from the first-`k` constant term is returned. An empty result
/// means every sample agrees on the constant term, which any set of samples
/// from one degree `k - 1` polynomial does.
pub fn check_consistency(points: &[Point], k: usize) -> Result<Vec<Disagreement>> {
    let selected = select(points, k)?;
    let expected = interpolate_at_zero(&selected)?.exact_value;

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.cmp(&b.x));

    let mut disagreements = Vec::new();
    for extra in &sorted[k..] {
        let mut subset: Vec<Point> = selected[..k - 1].to_vec();
        subset.push(extra.clone());
        let found = interpolate_at_zero(&subset)?.exact_value;
        if found != expected {
            disagreements.push(Disagreement {
                point: extra.clone(),
                expected: expected.clone(),
                found,
            });
        }
    }
    Ok(disagreements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::lagrange::tests::sample;
    use crate::math::{num, NumComponent};

    fn line() -> Vec<Point> {
        vec![Point::new(3, 3), Point::new(1, 1), Point::new(2, 2)]
    }

    #[test]
    fn selects_smallest_x_in_order() {
        let selected = select(&line(), 2).unwrap();
        assert_eq!(selected, vec![Point::new(1, 1), Point::new(2, 2)]);
    }

    #[test]
    fn recovers_from_unordered_input() {
        let result = recover(&line(), 2).unwrap();
        assert_eq!(result.exact_value, num!(0, 1));
        assert_eq!(result.rounded, NumComponent::from(0));
    }

    #[test]
    fn threshold_of_one_uses_smallest_x_only() {
        let points = vec![Point::new(9, -1), Point::new(5, 42), Point::new(7, 0)];
        let result = recover(&points, 1).unwrap();
        assert_eq!(result.exact_value, num!(42, 1));
    }

    #[test]
    fn not_enough_points() {
        assert_eq!(
            select(&line(), 4),
            Err(RecoverError::InsufficientPoints { needed: 4, available: 3 })
        );
        assert_eq!(select(&line(), 0), Err(RecoverError::ZeroThreshold));
    }

    #[test]
    fn duplicate_x_in_selected_subset() {
        let points = vec![
            Point::new(3, 10),
            Point::new(1, 1),
            Point::new(3, 11),
            Point::new(8, 2),
        ];
        assert_eq!(
            recover(&points, 3),
            Err(RecoverError::DuplicateX { x: NumComponent::from(3) })
        );
    }

    #[test]
    fn duplicate_outside_subset_is_ignored() {
        let points = vec![
            Point::new(1, 1),
            Point::new(2, 2),
            Point::new(5, 5),
            Point::new(5, 6),
        ];
        assert!(recover(&points, 2).is_ok());
    }

    #[test]
    fn consistent_samples_have_no_disagreements() {
        let c = [7, -2, 5].map(NumComponent::from);
        let points = sample(&c, &[4, -1, 2, 9, 3, 11]);
        assert_eq!(check_consistency(&points, 3), Ok(vec![]));
        assert_eq!(recover(&points, 3).unwrap().exact_value, num!(7, 1));
    }

    #[test]
    fn outlier_is_reported() {
        let c = [7, -2, 5].map(NumComponent::from);
        let mut points = sample(&c, &[1, 2, 3, 4]);
        points.push(Point::new(10, 0));
        let found = check_consistency(&points, 3).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].point, Point::new(10, 0));
        assert_eq!(found[0].expected, num!(7, 1));
        assert_ne!(found[0].found, num!(7, 1));
    }
}
