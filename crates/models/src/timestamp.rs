//! Local date-time parsing for request fields.
//!
//! Browser `datetime-local` inputs omit seconds (`2022-01-03T00:00`), so both
//! that form and the full `YYYY-MM-DDTHH:MM:SS[.fff]` form are accepted.
//! Serialization is unchanged.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};

const WITH_SECONDS: &str = "%Y-%m-%dT%H:%M:%S%.f";
const WITHOUT_SECONDS: &str = "%Y-%m-%dT%H:%M";

pub fn parse(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, WITH_SECONDS).or_else(|_| NaiveDateTime::parse_from_str(raw, WITHOUT_SECONDS))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(|e| serde::de::Error::custom(format!("invalid date-time `{raw}`: {e}")))
}
