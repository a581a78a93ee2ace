use super::base::NumberBase;
use super::NumComponent;
use crate::error::{NumeralFault, RecoverError, Result};

/// A digit string together with the base it is written in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Numeral {
    pub base: u32,
    pub digits: String,
}

impl Numeral {
    pub fn new(base: u32, digits: impl Into<String>) -> Self {
        Self { base, digits: digits.into() }
    }

    pub fn decode(&self) -> Result<NumComponent> {
        decode(self.base, &self.digits)
    }
}

/// Decodes `digits` as a positional numeral in `base`.
///
/// Digits are `0-9` then `a-z` (either case) for 10 to 35. No sign, prefix or
/// separator is accepted. The value is accumulated digit by digit in a
/// `BigInt`, so the result is exact for any length.
pub fn decode(base: u32, digits: &str) -> Result<NumComponent> {
    let radix = NumberBase::new(base, digits)?;
    if digits.is_empty() {
        return Err(RecoverError::InvalidNumeral {
            base,
            digits: digits.to_owned(),
            fault: NumeralFault::Empty,
        });
    }

    let placevalue = NumComponent::from(radix.place_value());
    let mut n = NumComponent::from(0);
    for (position, ch) in digits.chars().enumerate() {
        let digit = match radix.digit_value(ch) {
            Some(digit) => digit,
            None => {
                return Err(RecoverError::InvalidNumeral {
                    base,
                    digits: digits.to_owned(),
                    fault: NumeralFault::BadDigit { ch, position },
                })
            }
        };
        n *= &placevalue;
        n += digit;
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{One, Zero};
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    fn digit_string(raw: &[u8], base: u32) -> String {
        raw.iter()
            .map(|b| ALPHABET[(*b as u32 % base) as usize] as char)
            .collect()
    }

    // sum of d_i * b^i, evaluated from the least significant digit up
    fn reference(base: u32, digits: &str) -> NumComponent {
        let mut total = NumComponent::zero();
        let mut power = NumComponent::one();
        for ch in digits.chars().rev() {
            let d = ch.to_digit(36).unwrap();
            total += &power * d;
            power *= base;
        }
        total
    }

    #[test]
    fn known_values() {
        assert_eq!(decode(2, "1010"), Ok(NumComponent::from(10)));
        assert_eq!(decode(16, "ff"), Ok(NumComponent::from(255)));
        assert_eq!(decode(16, "FF"), Ok(NumComponent::from(255)));
        assert_eq!(decode(4, "213"), Ok(NumComponent::from(39)));
        assert_eq!(decode(10, "000"), Ok(NumComponent::from(0)));
        assert_eq!(decode(36, "z"), Ok(NumComponent::from(35)));
    }

    #[test]
    fn beyond_f64_precision() {
        let digits = "aed7015a346d63";
        let expected = NumComponent::parse_bytes(digits.as_bytes(), 16).unwrap();
        assert_eq!(decode(16, digits), Ok(expected));

        let long = "9".repeat(60);
        let expected = NumComponent::parse_bytes(long.as_bytes(), 10).unwrap();
        assert_eq!(decode(10, &long), Ok(expected));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            decode(37, "z"),
            Err(RecoverError::UnsupportedBase { base: 37.into(), digits: "z".to_owned() })
        );
        assert_eq!(
            decode(2, "102"),
            Err(RecoverError::InvalidNumeral {
                base: 2,
                digits: "102".to_owned(),
                fault: NumeralFault::BadDigit { ch: '2', position: 2 },
            })
        );
        assert!(matches!(
            decode(10, ""),
            Err(RecoverError::InvalidNumeral { fault: NumeralFault::Empty, .. })
        ));
        assert!(matches!(
            decode(1, "0"),
            Err(RecoverError::InvalidNumeral { fault: NumeralFault::BaseTooSmall, .. })
        ));
        assert!(matches!(decode(10, "-5"), Err(RecoverError::InvalidNumeral { .. })));
        assert!(matches!(decode(10, "1_000"), Err(RecoverError::InvalidNumeral { .. })));
        assert!(matches!(decode(10, " 1"), Err(RecoverError::InvalidNumeral { .. })));
    }

    #[quickcheck]
    fn matches_reference(base: u8, raw: Vec<u8>) -> TestResult {
        let base = base as u32 % 35 + 2;
        if raw.is_empty() {
            return TestResult::discard();
        }
        let digits = digit_string(&raw, base);
        TestResult::from_bool(decode(base, &digits) == Ok(reference(base, &digits)))
    }

    #[quickcheck]
    fn long_alphanumeric_strings(seed: Vec<u8>) -> bool {
        // at least 50 digits, well past 2^53
        let raw: Vec<u8> = seed.iter().copied().chain(1..=50).collect();
        let digits = digit_string(&raw, 36);
        decode(36, &digits) == Ok(reference(36, &digits))
    }

    #[quickcheck]
    fn injective_without_leading_zeros(base: u8, a: Vec<u8>, b: Vec<u8>) -> TestResult {
        let base = base as u32 % 35 + 2;
        let a = digit_string(&a, base);
        let b = digit_string(&b, base);
        let a = a.trim_start_matches('0');
        let b = b.trim_start_matches('0');
        if a.is_empty() || b.is_empty() || a == b {
            return TestResult::discard();
        }
        TestResult::from_bool(decode(base, a).unwrap() != decode(base, b).unwrap())
    }
}
