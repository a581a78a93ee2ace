//! Loading sample files.
//!
//! The document is a JSON object with a `keys` entry holding `n` and `k`,
//! and one entry per sample keyed by its x-coordinate:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use num_traits::ToPrimitive;
use serde::Deserialize;
use thiserror::Error;

use crate::error::RecoverError;
use crate::math::lagrange::Point;
use crate::math::numeral::Numeral;
use crate::math::NumComponent;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record key {0:?} is not an integer x-coordinate")]
    BadKey(String),

    #[error("record {key:?}: base {base:?} is not a non-negative integer")]
    BadBase { key: String, base: String },

    #[error("record {key:?}: {field} {value} is not an exact integer, write it as a string")]
    NotAnInteger {
        key: String,
        field: &'static str,
        value: String,
    },

    #[error("record {key:?}: {source}")]
    Record {
        key: String,
        #[source]
        source: RecoverError,
    },
}

pub type Result<T> = std::result::Result<T, InputError>;

// "base": "16" and "base": 16 are both accepted, same for "value"
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

impl Scalar {
    // JSON numbers past 64 bits arrive as floats and have lost digits already
    fn into_text(self, key: &str, field: &'static str) -> Result<String> {
        match self {
            Scalar::Text(s) => Ok(s),
            Scalar::Number(n) if n.is_u64() || n.is_i64() => Ok(n.to_string()),
            Scalar::Number(n) => Err(InputError::NotAnInteger {
                key: key.to_owned(),
                field,
                value: n.to_string(),
            }),
        }
    }
}

/// ASCII digits with an optional leading sign when `signed`.
/// `BigInt::from_str` alone would also let `_` separators through.
fn is_integer_literal(s: &str, signed: bool) -> bool {
    let digits = if signed {
        s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s)
    } else {
        s
    };
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[derive(Deserialize, Debug)]
struct RawKeys {
    n: usize,
    k: usize,
}

#[derive(Deserialize, Debug)]
struct RawRecord {
    base: Scalar,
    value: Scalar,
}

#[derive(Deserialize, Debug)]
struct RawInput {
    keys: RawKeys,
    #[serde(flatten)]
    records: BTreeMap<String, RawRecord>,
}

/// One sample as written in the file, not yet decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub key: String,
    pub x: NumComponent,
    pub numeral: Numeral,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Input {
    /// Declared sample count, informational only.
    pub n: usize,
    pub k: usize,
    /// Sorted by x.
    pub records: Vec<Record>,
}

impl Input {
    /// Decodes every record. The first failure aborts with the record key.
    pub fn decode_points(&self) -> Result<Vec<Point>> {
        self.records
            .iter()
            .map(|record| {
                let y = record.numeral.decode().map_err(|source| InputError::Record {
                    key: record.key.clone(),
                    source,
                })?;
                Ok(Point { x: record.x.clone(), y })
            })
            .collect()
    }
}

impl FromStr for Input {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self> {
        let raw: RawInput = serde_json::from_str(s)?;

        let mut records = Vec::with_capacity(raw.records.len());
        for (key, record) in raw.records {
            let key_text = key.trim();
            if !is_integer_literal(key_text, true) {
                return Err(InputError::BadKey(key));
            }
            let x = NumComponent::from_str(key_text).map_err(|_| InputError::BadKey(key.clone()))?;

            let digits = record.value.into_text(&key, "value")?.trim().to_owned();
            let base_text = record.base.into_text(&key, "base")?;
            let base_trimmed = base_text.trim();
            if !is_integer_literal(base_trimmed, false) {
                return Err(InputError::BadBase { key, base: base_text });
            }
            let wide_base = NumComponent::from_str(base_trimmed)
                .map_err(|_| InputError::BadBase { key: key.clone(), base: base_text.clone() })?;
            let base = match wide_base.to_u32() {
                Some(base) => base,
                None => {
                    return Err(InputError::Record {
                        key,
                        source: RecoverError::UnsupportedBase { base: wide_base, digits },
                    })
                }
            };
            records.push(Record { key, x, numeral: Numeral::new(base, digits) });
        }
        records.sort_by(|a, b| a.x.cmp(&b.x));

        if raw.keys.n != records.len() {
            tracing::warn!(
                "declared n = {} but {} records are present",
                raw.keys.n,
                records.len()
            );
        }

        Ok(Input { n: raw.keys.n, k: raw.keys.k, records })
    }
}

pub fn from_str(s: &str) -> Result<Input> {
    Input::from_str(s)
}

pub fn load(path: &Path) -> Result<Input> {
    tracing::debug!("reading {:?}", path);
    let data = fs::read_to_string(path)?;
    let input = from_str(&data)?;
    tracing::debug!("{:?}: n = {}, k = {}, {} records", path, input.n, input.k, input.records.len());
    Ok(input)
}
