//! Inclusive integer range as the engine spells it in JSON.

use std::fmt;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// `{from, to}` inclusive range.
///
/// Accepts `150`, `"150"`, `"100-200"` and `{"from": 100, "to": 200}`.
/// Always serializes as `"from-to"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Int32Range {
    pub from: i32,
    pub to: i32,
}

impl Int32Range {
    pub const fn new(from: i32, to: i32) -> Self {
        Self { from, to }
    }

    pub fn is_unset(&self) -> bool {
        self.from == 0 && self.to == 0
    }
}

impl fmt::Display for Int32Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

impl Serialize for Int32Range {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RangeRepr {
    Single(i32),
    Text(String),
    Bounds { from: i32, to: i32 },
}

fn parse_bound<E: DeError>(text: &str, original: &str) -> Result<i32, E> {
    text.trim()
        .parse::<i32>()
        .map_err(|_| E::custom(format!("invalid range: {original}")))
}

impl<'de> Deserialize<'de> for Int32Range {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RangeRepr::deserialize(deserializer)? {
            RangeRepr::Single(value) => Ok(Self::new(value, value)),
            RangeRepr::Bounds { from, to } => Ok(Self::new(from, to)),
            RangeRepr::Text(text) => match text.split_once('-') {
                Some((from, to)) => Ok(Self::new(
                    parse_bound::<D::Error>(from, &text)?,
                    parse_bound::<D::Error>(to, &text)?,
                )),
                None => {
                    let value = parse_bound::<D::Error>(&text, &text)?;
                    Ok(Self::new(value, value))
                }
            },
        }
    }
}
