//! Brand records as served by the brand data source.
//!
//! The source is schemaless: any field may be missing, `null`, empty, or of
//! an unexpected type. Reading never fails; a field that is not usable is
//! treated as absent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::CatalogError;

/// Presence marker for a social network account.
///
/// The source stores either a boolean flag or a handle/URL string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SocialPresence {
    Flag(bool),
    Handle(String),
}

impl SocialPresence {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(flag) => Some(Self::Flag(*flag)),
            Value::String(handle) => Some(Self::Handle(handle.clone())),
            Value::Number(n) => Some(Self::Flag(n.as_f64().is_some_and(|f| f != 0.0))),
            Value::Array(_) | Value::Object(_) => Some(Self::Flag(true)),
        }
    }

    /// `true` for a set flag or a non-empty handle.
    #[must_use]
    pub fn is_present(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Handle(handle) => !handle.is_empty(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SocialMedia {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<SocialPresence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<SocialPresence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<SocialPresence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<SocialPresence>,
}

impl SocialMedia {
    fn from_object(object: &Map<String, Value>) -> Self {
        let read = |key: &str| object.get(key).and_then(SocialPresence::from_value);
        Self {
            facebook: read("facebook"),
            instagram: read("instagram"),
            twitter: read("twitter"),
            linkedin: read("linkedin"),
        }
    }

    #[must_use]
    pub fn has_facebook(&self) -> bool {
        is_set(self.facebook.as_ref())
    }

    #[must_use]
    pub fn has_instagram(&self) -> bool {
        is_set(self.instagram.as_ref())
    }

    #[must_use]
    pub fn has_twitter(&self) -> bool {
        is_set(self.twitter.as_ref())
    }

    #[must_use]
    pub fn has_linkedin(&self) -> bool {
        is_set(self.linkedin.as_ref())
    }

    /// Names of the networks that are present, in display order.
    #[must_use]
    pub fn present_networks(&self) -> Vec<&'static str> {
        [
            ("facebook", self.has_facebook()),
            ("instagram", self.has_instagram()),
            ("twitter", self.has_twitter()),
            ("linkedin", self.has_linkedin()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect()
    }
}

fn is_set(presence: Option<&SocialPresence>) -> bool {
    presence.is_some_and(SocialPresence::is_present)
}

/// A single brand as received from the data source.
///
/// String fields hold `Some` only for non-empty strings. `founded_year`
/// holds `Some` for any set year, including a year read as 0 from `"0"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "Value")]
pub struct BrandRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub founded_year: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headquarters: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub founder_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_media: Option<SocialMedia>,
}

impl BrandRecord {
    /// Read a record from an arbitrary JSON value.
    ///
    /// Non-object values produce a record with every field absent.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };

        let text = |key: &str| {
            object
                .get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
        };

        Self {
            name: text("name"),
            logo_url: text("logoUrl"),
            website: text("website"),
            tagline: text("tagline"),
            description: text("description"),
            founded_year: object.get("foundedYear").and_then(parse_year),
            headquarters: text("headquarters"),
            founder_name: text("founderName"),
            social_media: object
                .get("socialMedia")
                .and_then(Value::as_object)
                .map(SocialMedia::from_object),
        }
    }
}

impl From<Value> for BrandRecord {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

/// Read a founding year from a JSON integer, float, or numeric string.
///
/// Only a falsy value (`null`, `false`, `0`, `""`) counts as unset. Any other
/// value is read as a year: strings by their leading integer prefix
/// (`"1998 AD"` is 1998) and floats truncated, so `"0"` and `0.5` are year 0.
/// A set value with no readable integer is absent.
fn parse_year(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => n.as_i64().or_else(|| {
            #[allow(clippy::cast_possible_truncation)]
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < 1e15)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => parse_leading_int(s),
        _ => None,
    }
}

fn parse_leading_int(s: &str) -> Option<i64> {
    let trimmed = s.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// The fetched brand collection, keyed by brand identifier.
///
/// Entries keep the key order of the JSON object they were read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandCatalog {
    entries: Vec<(String, BrandRecord)>,
}

impl BrandCatalog {
    /// Read a catalog from the JSON body returned by the data source.
    ///
    /// A `null` body is an empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotAnObject`] if `value` is neither an object
    /// nor `null`.
    pub fn from_json(value: &Value) -> Result<Self, CatalogError> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(object) => Ok(object
                .iter()
                .map(|(id, record)| (id.clone(), BrandRecord::from_value(record)))
                .collect()),
            other => Err(CatalogError::NotAnObject {
                found: json_type_name(other),
            }),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BrandRecord)> {
        self.entries
            .iter()
            .map(|(id, record)| (id.as_str(), record))
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&BrandRecord> {
        self.entries
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, record)| record)
    }
}

impl FromIterator<(String, BrandRecord)> for BrandCatalog {
    fn from_iter<I: IntoIterator<Item = (String, BrandRecord)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "brands_test.rs"]
mod tests;
