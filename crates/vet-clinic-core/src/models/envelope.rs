//! Response envelope and lenient field decoders shared by the models.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

/// Every backend response wraps its payload in a `data` member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

impl<T> ApiEnvelope<T> {
    pub fn into_inner(self) -> T {
        self.data
    }
}

/// Text field that the backend may send as `null`.
pub(crate) fn nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Identifier as sent: a JSON string or a JSON number.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl RawId {
    fn into_text(self) -> Option<String> {
        match self {
            RawId::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            RawId::Integer(n) => Some(n.to_string()),
            RawId::Float(f) => Some(f.to_string()),
        }
    }

    fn is_zero(&self) -> bool {
        match self {
            RawId::Integer(n) => *n == 0,
            RawId::Float(f) => *f == 0.0,
            RawId::Text(_) => false,
        }
    }
}

/// Identifier that arrives either as a JSON string or a JSON number.
///
/// Blank strings count as absent.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?.and_then(RawId::into_text))
}

/// Key of a related collection. A numeric `0` means no key, like a blank string.
pub(crate) fn record_key<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?
        .filter(|raw| !raw.is_zero())
        .and_then(RawId::into_text))
}

/// A display-only measurement (weight, temperature, cost).
///
/// Numbers are kept as numbers; text is kept exactly as the backend sent it,
/// so `"15.000"` or `"4.2 kg"` reach the screen unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Measure {
    Number(f64),
    Text(String),
}

impl Measure {
    /// The numeric value, when the backend sent a JSON number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Measure::Number(n) => Some(*n),
            Measure::Text(_) => None,
        }
    }
}

impl From<f64> for Measure {
    fn from(n: f64) -> Self {
        Measure::Number(n)
    }
}

impl From<&str> for Measure {
    fn from(s: &str) -> Self {
        Measure::Text(s.to_string())
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measure::Number(n) => write!(f, "{}", n),
            Measure::Text(s) => f.write_str(s),
        }
    }
}

/// Measurement field; `null` and blank text count as absent.
pub(crate) fn measure<'de, D>(deserializer: D) -> Result<Option<Measure>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Measure>::deserialize(deserializer)? {
        Some(Measure::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(Measure::Text(trimmed.to_string()))
            }
        }
        other => other,
    })
}

/// Condition list sent either as an array or as one comma-separated string.
pub(crate) fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Many(Vec<String>),
        One(String),
    }

    let items = match Option::<Raw>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(Raw::Many(items)) => items,
        Some(Raw::One(joined)) => joined.split(',').map(str::to_string).collect(),
    };

    Ok(items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect())
}

/// Format a backend date for display as `dd-mm-yyyy`.
///
/// Accepts RFC 3339 timestamps, naive timestamps and plain dates. Anything
/// else is shown unchanged.
pub fn display_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return ts.format("%d-%m-%Y").to_string();
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return ts.format("%d-%m-%Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.format("%d-%m-%Y").to_string();
    }

    trimmed.to_string()
}
