// ArticleShelf - core/timestamp.rs
//
// Publish-time parsing and formatting.
//
// The CSV carries wall-clock times in a fixed UTC+8 offset; everything
// downstream works with UTC instants, serialised with millisecond precision
// and a `Z` suffix so the JSON round-trips through any ISO 8601 parser.

use crate::util::constants;
use chrono::{DateTime, FixedOffset, NaiveDateTime, SecondsFormat, TimeZone, Utc};

/// Parse a `YYYY-MM-DD HH:MM:SS` publish time recorded at UTC+8.
///
/// An empty (or all-whitespace) value resolves to `now`. Returns `None` for a
/// non-empty value that does not match the format.
pub fn parse_publish_time(raw: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(now);
    }
    let naive = NaiveDateTime::parse_from_str(raw, constants::PUBLISH_TIME_FORMAT).ok()?;
    let offset = FixedOffset::east_opt(constants::PUBLISH_TIME_UTC_OFFSET_SECS)?;
    offset
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Format an instant as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn format_iso(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Format the calendar date of `dt` as seen in `tz`.
pub fn format_date_in<Tz: TimeZone>(dt: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.with_timezone(tz)
        .format(constants::DISPLAY_DATE_FORMAT)
        .to_string()
}

/// Serde adapter storing `DateTime<Utc>` as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
///
/// Deserialisation accepts any RFC 3339 timestamp and normalises it to UTC.
pub mod iso_millis {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_iso(dt))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 1, 2, 3, 4, 5).unwrap()
    }

    #[test]
    fn test_utc8_wall_clock_converts_to_utc() {
        let dt = parse_publish_time("2025-11-07 15:42:46", fixed_now()).unwrap();
        assert_eq!(format_iso(&dt), "2025-11-07T07:42:46.000Z");
    }

    #[test]
    fn test_conversion_crosses_midnight() {
        let dt = parse_publish_time("2025-01-01 03:00:00", fixed_now()).unwrap();
        assert_eq!(format_iso(&dt), "2024-12-31T19:00:00.000Z");
    }

    #[test]
    fn test_empty_value_uses_now() {
        assert_eq!(parse_publish_time("", fixed_now()), Some(fixed_now()));
        assert_eq!(parse_publish_time("   ", fixed_now()), Some(fixed_now()));
    }

    #[test]
    fn test_malformed_value_is_rejected() {
        assert!(parse_publish_time("2025-11-07", fixed_now()).is_none());
        assert!(parse_publish_time("yesterday", fixed_now()).is_none());
        assert!(parse_publish_time("2025-13-40 10:00:00", fixed_now()).is_none());
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let dt = parse_publish_time("  2025-11-07 15:42:46 ", fixed_now()).unwrap();
        assert_eq!(format_iso(&dt), "2025-11-07T07:42:46.000Z");
    }

    #[test]
    fn test_date_in_timezone() {
        let dt = Utc.with_ymd_and_hms(2025, 11, 6, 20, 0, 0).unwrap();
        let shanghai = FixedOffset::east_opt(8 * 3600).unwrap();
        let new_york = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(format_date_in(&dt, &shanghai), "2025-11-07");
        assert_eq!(format_date_in(&dt, &new_york), "2025-11-06");
        assert_eq!(format_date_in(&dt, &Utc), "2025-11-06");
    }

    #[test]
    fn test_serde_round_trip_normalises_offset() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Wrapper {
            #[serde(with = "iso_millis")]
            at: DateTime<Utc>,
        }
        let parsed: Wrapper = serde_json::from_str(r#"{"at":"2025-11-07T15:42:46+08:00"}"#).unwrap();
        assert_eq!(
            serde_json::to_string(&parsed).unwrap(),
            r#"{"at":"2025-11-07T07:42:46.000Z"}"#
        );
    }
}
