//! Lenient field deserializers.
//!
//! Figment types environment values, so `SYLLABUS_GENERAL__DEFAULT_MODEL=4`
//! arrives as a number and `..._DEFAULT_STATE=InProgress` as a free-form
//! string. These helpers accept what a user would type.

use std::fmt;

use serde::Deserializer;
use serde::de::{self, Visitor};
use syl_core::enums::CompletionState;

struct ScalarString;

impl Visitor<'_> for ScalarString {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number, or boolean")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_char<E: de::Error>(self, v: char) -> Result<String, E> {
        Ok(v.to_string())
    }
}

/// Any scalar, as its string form.
pub fn scalar_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    deserializer.deserialize_any(ScalarString)
}

/// A completion state in any spelling `CompletionState::from_str` accepts.
pub fn completion_state<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<CompletionState, D::Error> {
    scalar_string(deserializer)?
        .parse()
        .map_err(de::Error::custom)
}
