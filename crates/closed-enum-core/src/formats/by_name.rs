//! # Name Format
//!
//! Serde support that writes a value as its name.
//!
//! Kinds declared with [`closed_enumeration!`](crate::closed_enumeration) use
//! these functions for their `Serialize`/`Deserialize` impls. Hand-written
//! kinds can opt in per field:
//!
//! ```ignore
//! #[derive(Serialize, Deserialize)]
//! struct Rule {
//!     #[serde(with = "closed_enum_core::formats::by_name")]
//!     freq: MyFrequency,
//! }
//! ```

use crate::enumeration::{ClosedEnumeration, from_name};
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::Serializer;

/// Serialize a value as its canonical name.
pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: ClosedEnumeration,
    S: Serializer,
{
    serializer.serialize_str(value.name())
}

/// Deserialize a value from a name, ignoring case.
///
/// Unknown or ambiguous names fail with the lookup error message, which
/// lists every valid name of the kind.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: ClosedEnumeration,
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    from_name::<T>(&name).map_err(de::Error::custom)
}

#[cfg(test)]
mod tests {
    use crate::kinds::{Frequency, Weekday};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Rule {
        freq: Frequency,
        by_day: Vec<Weekday>,
    }

    #[test]
    fn struct_round_trip_restores_equal_values() {
        let rule = Rule {
            freq: Frequency::WEEKLY,
            by_day: vec![Weekday::MONDAY, Weekday::FRIDAY],
        };
        let json = serde_json::to_string(&rule).unwrap_or_default();
        assert_eq!(json, r#"{"freq":"WEEKLY","by_day":["MO","FR"]}"#);

        let back: Option<Rule> = serde_json::from_str(&json).ok();
        assert_eq!(back, Some(rule));
    }

    #[test]
    fn lowercase_input_is_accepted() {
        let rule: Option<Rule> =
            serde_json::from_str(r#"{"freq":"daily","by_day":["su"]}"#).ok();
        assert_eq!(
            rule,
            Some(Rule {
                freq: Frequency::DAILY,
                by_day: vec![Weekday::SUNDAY],
            })
        );
    }

    #[test]
    fn non_string_input_is_rejected() {
        assert!(serde_json::from_str::<Rule>(r#"{"freq":3,"by_day":[]}"#).is_err());
    }
}
