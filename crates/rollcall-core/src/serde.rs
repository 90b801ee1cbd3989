use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};

use crate::decode::parse_naive_datetime;

/// Deserializes a timestamp in any of the formats the backend emits.
pub fn deserialize_flexible_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_naive_datetime(&s)
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognised timestamp `{}`", s)))
}

/// Like [`deserialize_flexible_datetime`], treating `null` and `""` as absent.
pub fn deserialize_optional_flexible_datetime<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt {
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => parse_naive_datetime(&s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unrecognised timestamp `{}`", s))),
        None => Ok(None),
    }
}

/// Treats `null` and `""` as `None` for optional text columns.
pub fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.filter(|s| !s.is_empty()))
}
