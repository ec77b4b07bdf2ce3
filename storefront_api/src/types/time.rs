//! Tolerant timestamp (de)serialization.
//!
//! The backend emits RFC 3339 for some records and naive
//! `YYYY-MM-DDTHH:MM:SS[.fff]` strings for others. Unparseable values decode
//! to `None` instead of failing the whole record.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(t) => serializer.serialize_str(&t.to_rfc3339()),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse))
}

fn parse(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

#[cfg(test)]
mod tests {
    use super::parse;

    #[test]
    fn accepts_rfc3339_and_naive_timestamps() {
        assert!(parse("2024-05-01T09:30:00Z").is_some());
        assert!(parse("2024-05-01T09:30:00+04:00").is_some());
        assert!(parse("2024-05-01T09:30:00.123456").is_some());
        assert!(parse("not a date").is_none());
    }
}
