use crate::error::{NumeralFault, RecoverError, Result};

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

/// A validated positional base in `2..=36`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberBase(u32);

impl NumberBase {
    pub const BINARY: NumberBase = NumberBase(2);
    pub const DECIMAL: NumberBase = NumberBase(10);
    pub const HEXADECIMAL: NumberBase = NumberBase(16);

    /// `digits` is only used to give the error some context.
    pub fn new(base: u32, digits: &str) -> Result<Self> {
        if base < MIN_BASE {
            return Err(RecoverError::InvalidNumeral {
                base,
                digits: digits.to_owned(),
                fault: NumeralFault::BaseTooSmall,
            });
        }
        if base > MAX_BASE {
            return Err(RecoverError::UnsupportedBase {
                base: base.into(),
                digits: digits.to_owned(),
            });
        }
        Ok(NumberBase(base))
    }

    pub fn place_value(&self) -> u32 {
        self.0
    }

    /// Value of `ch` in this base, `None` if it is not one of its digits.
    /// Letters are case-insensitive.
    pub fn digit_value(&self, ch: char) -> Option<u32> {
        let value = match ch {
            '0'..='9' => ch as u32 - '0' as u32,
            'a'..='z' => ch as u32 - 'a' as u32 + 10,
            'A'..='Z' => ch as u32 - 'A' as u32 + 10,
            _ => return None,
        };
        if value < self.0 {
            Some(value)
        } else {
            None
        }
    }
}

#[test]
fn digit_value_test() {
    let hex = NumberBase::HEXADECIMAL;
    assert_eq!(hex.digit_value('0'), Some(0));
    assert_eq!(hex.digit_value('f'), Some(15));
    assert_eq!(hex.digit_value('F'), Some(15));
    assert_eq!(hex.digit_value('g'), None);
    assert_eq!(hex.digit_value('-'), None);

    assert_eq!(NumberBase::BINARY.digit_value('2'), None);
    assert_eq!(NumberBase::new(36, "").unwrap().digit_value('Z'), Some(35));
}

#[test]
fn base_bounds_test() {
    assert!(matches!(
        NumberBase::new(1, "0"),
        Err(RecoverError::InvalidNumeral { fault: NumeralFault::BaseTooSmall, .. })
    ));
    assert!(matches!(
        NumberBase::new(0, "0"),
        Err(RecoverError::InvalidNumeral { .. })
    ));
    assert_eq!(
        NumberBase::new(37, "z"),
        Err(RecoverError::UnsupportedBase { base: 37.into(), digits: "z".to_owned() })
    );
    assert_eq!(NumberBase::new(10, "9").unwrap(), NumberBase::DECIMAL);
}
