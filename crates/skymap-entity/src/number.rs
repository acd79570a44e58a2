//! Lenient numeric deserializers.
//!
//! Map clients send coordinates and speeds either as JSON numbers or as the
//! raw text of an input box. Both forms are accepted; anything that does not
//! parse to a finite number is rejected.

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberLike {
    Number(f64),
    Text(String),
}

impl NumberLike {
    /// `Ok(None)` for blank text.
    fn into_f64(self) -> Result<Option<f64>, String> {
        let value = match self {
            Self::Number(n) => n,
            Self::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                trimmed
                    .parse::<f64>()
                    .map_err(|_| format!("'{trimmed}' is not a number"))?
            }
        };

        if value.is_finite() {
            Ok(Some(value))
        } else {
            Err("number must be finite".to_string())
        }
    }
}

/// Required float.
pub fn float<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    NumberLike::deserialize(deserializer)?
        .into_f64()
        .map_err(de::Error::custom)?
        .ok_or_else(|| de::Error::custom("number is required"))
}

/// Optional float; `null`, missing and blank text all map to `None`.
pub fn option_float<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberLike>::deserialize(deserializer)? {
        Some(raw) => raw.into_f64().map_err(de::Error::custom),
        None => Ok(None),
    }
}

/// Whole degrees; fractional input is truncated toward zero.
pub fn degrees<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(option_float(deserializer)?.map(|v| v.trunc() as i64).unwrap_or(0))
}
