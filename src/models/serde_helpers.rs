//! Serde helpers for the loosely-typed JSON the host page hands over

use serde::de::{self, Deserializer, Visitor};
use std::fmt;

/// Deserialize an identifier that may arrive as a JSON number or a string
///
/// Sentence ids are numbers in most story indexes but the result container
/// stores them as an attribute string, so both forms are accepted and kept
/// as a string.
pub fn deserialize_id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number or a string identifier")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            // JS numbers come through as f64 from serde-wasm-bindgen
            if v.fract() == 0.0 && v.abs() < 9_007_199_254_740_992.0 {
                Ok((v as i64).to_string())
            } else {
                Ok(v.to_string())
            }
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }
    }

    deserializer.deserialize_any(IdVisitor)
}
