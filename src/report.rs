//! Human readable report of a recovery.

use crate::input::Input;
use crate::math::base::NumberBase;
use crate::math::lagrange::{InterpolationResult, Point};
use crate::math::parsefmt::{fmt, fmt_fraction, fmt_int};
use crate::selection::Disagreement;

pub const CONSTANT_TERM_LABEL: &str = "Constant term (c)";
pub const DISAGREEMENT_LABEL: &str = "Inconsistent sample";

#[derive(Clone, Copy, Debug)]
pub struct ReportOptions {
    pub fractional_places: u32,
    pub output_base: NumberBase,
    pub show_breakdown: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            fractional_places: 128,
            output_base: NumberBase::DECIMAL,
            show_breakdown: true,
        }
    }
}

pub fn render(
    input: &Input,
    points: &[Point],
    result: &InterpolationResult,
    disagreements: Option<&[Disagreement]>,
    options: &ReportOptions,
) -> String {
    let mut out = "".to_owned();

    out += format!("Number of points (n): {}\n", input.n).as_str();
    out += format!("Minimum required points (k): {}\n", input.k).as_str();

    if options.show_breakdown {
        out += "Decoded points:\n";
        for (record, point) in input.records.iter().zip(points) {
            out += format!(
                "  x = {}: {:?} in base {} = {}\n",
                point.x, record.numeral.digits, record.numeral.base, point.y
            )
            .as_str();
        }

        out += "Lagrange terms at x = 0:\n";
        for (i, term) in result.terms.iter().enumerate() {
            out += format!("  term {} (x = {}, y = {})\n", i, term.x, term.y).as_str();
            for factor in &term.factors {
                out += format!(
                    "    (0 - {}) / ({} - {}) = {}/{}\n",
                    factor.x_j, term.x, factor.x_j, factor.numer, factor.denom
                )
                .as_str();
            }
            out += format!("    basis = {}\n", fmt_fraction(&term.basis)).as_str();
            out += format!(
                "    y * basis = {} * {} = {}\n",
                term.y,
                fmt_fraction(&term.basis),
                fmt_fraction(&term.contribution)
            )
            .as_str();
        }
        out += format!("Exact sum: {}\n", fmt_fraction(&result.exact_value)).as_str();
    }

    if !result.is_integer() {
        out += format!(
            "Exact value: {} = {}\n",
            fmt_fraction(&result.exact_value),
            fmt(&result.exact_value, NumberBase::DECIMAL, options.fractional_places)
        )
        .as_str();
    }

    out += format!("{} = {}\n", CONSTANT_TERM_LABEL, result.rounded).as_str();
    if options.output_base != NumberBase::DECIMAL {
        out += format!(
            "{} in base {} = {}\n",
            CONSTANT_TERM_LABEL,
            options.output_base.place_value(),
            fmt_int(&result.rounded, options.output_base)
        )
        .as_str();
    }

    if let Some(disagreements) = disagreements {
        if disagreements.is_empty() {
            out += "All samples agree on the constant term\n";
        }
        for d in disagreements {
            out += format!(
                "{}: x = {}, y = {} implies {} instead of {}\n",
                DISAGREEMENT_LABEL,
                d.point.x,
                d.point.y,
                fmt_fraction(&d.found),
                fmt_fraction(&d.expected)
            )
            .as_str();
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input;
    use crate::selection::{check_consistency, recover};

    const SAMPLE: &str = r#"{
        "keys": { "n": 4, "k": 3 },
        "1": { "base": "10", "value": "4" },
        "2": { "base": "2", "value": "111" },
        "3": { "base": "10", "value": "12" },
        "6": { "base": "4", "value": "213" }
    }"#;

    fn rendered(options: &ReportOptions, check: bool) -> String {
        let input = input::from_str(SAMPLE).unwrap();
        let points = input.decode_points().unwrap();
        let result = recover(&points, input.k).unwrap();
        let disagreements = check.then(|| check_consistency(&points, input.k).unwrap());
        render(&input, &points, &result, disagreements.as_deref(), options)
    }

    #[test]
    fn full_report() {
        let text = rendered(&ReportOptions::default(), false);
        assert!(text.starts_with("Number of points (n): 4\nMinimum required points (k): 3\n"));
        assert!(text.contains("  x = 6: \"213\" in base 4 = 39\n"));
        assert!(text.contains("  term 0 (x = 1, y = 4)\n"));
        assert!(text.contains("    (0 - 2) / (1 - 2) = -2/-1\n"));
        assert!(text.contains("    basis = 3\n"));
        assert!(text.contains("Exact sum: 3\n"));
        assert!(text.ends_with("Constant term (c) = 3\n"));
        assert!(!text.contains("Exact value"));
    }

    #[test]
    fn quiet_report_with_check_and_base() {
        let options = ReportOptions {
            output_base: NumberBase::BINARY,
            show_breakdown: false,
            ..ReportOptions::default()
        };
        let text = rendered(&options, true);
        assert!(!text.contains("Lagrange terms"));
        assert!(text.contains("Constant term (c) = 3\n"));
        assert!(text.contains("Constant term (c) in base 2 = 11\n"));
        assert!(text.contains("All samples agree on the constant term\n"));
    }

    #[test]
    fn fractional_result_shows_expansion() {
        let input = input::from_str(
            r#"{"keys": {"n": 2, "k": 2},
                "1": {"base": "10", "value": "0"},
                "3": {"base": "10", "value": "1"}}"#,
        )
        .unwrap();
        let points = input.decode_points().unwrap();
        let result = recover(&points, 2).unwrap();
        let options = ReportOptions { show_breakdown: false, ..ReportOptions::default() };
        let text = render(&input, &points, &result, None, &options);
        assert!(text.contains("Exact value: -1/2 = -0.5\n"));
        assert!(text.contains("Constant term (c) = -1\n"));
    }
}
