//! Typed identifier for monitored websites.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opaque identifier assigned by the backend to a monitored website.
///
/// The backend may encode it as a JSON number or a string. Each is kept in
/// the form it arrived in: numbers re-encode as numbers, strings verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WebsiteId(IdRepr);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum IdRepr {
    Number(u64),
    Text(String),
}

impl WebsiteId {
    /// Wrap a textual identifier as-is.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(IdRepr::Text(raw.into()))
    }
}

impl From<u64> for WebsiteId {
    fn from(value: u64) -> Self {
        Self(IdRepr::Number(value))
    }
}

impl fmt::Display for WebsiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            IdRepr::Number(n) => n.fmt(f),
            IdRepr::Text(s) => f.write_str(s),
        }
    }
}

impl Serialize for WebsiteId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            IdRepr::Number(n) => serializer.serialize_u64(*n),
            IdRepr::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for WebsiteId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = WebsiteId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a non-negative integer or a string id")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(WebsiteId::from(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                u64::try_from(v)
                    .map(WebsiteId::from)
                    .map_err(|_| E::custom("website id must not be negative"))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(WebsiteId::new(v))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}
