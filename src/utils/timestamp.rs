//! Text codec for persisted timestamps.
//!
//! Timestamps are stored as UTC strings in the fixed layout
//! `YYYY-MM-DDTHH:mm:ss.sssZ` (millisecond precision, literal `Z`).

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

/// `strftime` layout matching the persisted representation.
pub const TIMESTAMP_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Errors produced when a stored timestamp cannot be decoded.
#[derive(Debug, thiserror::Error)]
pub enum TimestampParseError {
    #[error("timestamp is missing")]
    Missing,

    #[error("cannot parse '{input}' as timestamp: {source}")]
    Malformed {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Formats a timestamp in the persisted layout.
///
/// Sub-millisecond precision is truncated.
///
/// # Examples
///
/// ```ignore
/// let t = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
/// assert_eq!(format_timestamp(&t), "2024-03-09T07:05:01.000Z");
/// ```
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses a timestamp in the persisted layout.
///
/// # Errors
///
/// Returns [`TimestampParseError::Malformed`] if `input` does not match
/// [`TIMESTAMP_LAYOUT`] exactly.
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, TimestampParseError> {
    NaiveDateTime::parse_from_str(input, TIMESTAMP_LAYOUT)
        .map(|naive| naive.and_utc())
        .map_err(|source| TimestampParseError::Malformed {
            input: input.to_string(),
            source,
        })
}

/// Decodes the `createdat` / `updatedat` pair of a stored row.
///
/// `created_at` is required. `updated_at` is optional: `None` or an empty
/// string mean the link was never updated.
pub fn parse_created_and_updated(
    created_at: Option<&str>,
    updated_at: Option<&str>,
) -> Result<(DateTime<Utc>, Option<DateTime<Utc>>), TimestampParseError> {
    let created_at = created_at
        .filter(|s| !s.is_empty())
        .ok_or(TimestampParseError::Missing)
        .and_then(parse_timestamp)?;

    let updated_at = match updated_at {
        Some(s) if !s.is_empty() => Some(parse_timestamp(s)?),
        _ => None,
    };

    Ok((created_at, updated_at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_format_layout() {
        let t = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(format_timestamp(&t), "2024-03-09T07:05:01.000Z");
    }

    #[test]
    fn test_format_keeps_milliseconds() {
        let t = Utc
            .with_ymd_and_hms(2024, 12, 31, 23, 59, 59)
            .unwrap()
            .with_nanosecond(123_456_789)
            .unwrap();
        assert_eq!(format_timestamp(&t), "2024-12-31T23:59:59.123Z");
    }

    #[test]
    fn test_parse_valid() {
        let parsed = parse_timestamp("2024-03-09T07:05:01.250Z").unwrap();
        assert_eq!(
            parsed,
            Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap() + chrono::Duration::milliseconds(250)
        );
    }

    #[test]
    fn test_parse_formatted_now() {
        let now = Utc::now();
        let parsed = parse_timestamp(&format_timestamp(&now)).unwrap();
        assert_eq!(parsed.timestamp_millis(), now.timestamp_millis());
    }

    #[test]
    fn test_parse_rejects_other_layouts() {
        assert!(parse_timestamp("2024-03-09 07:05:01").is_err());
        assert!(parse_timestamp("2024-03-09T07:05:01+00:00").is_err());
        assert!(parse_timestamp("not a date").is_err());
        assert!(parse_timestamp("").is_err());
    }

    #[test]
    fn test_parse_created_required() {
        assert!(matches!(
            parse_created_and_updated(None, None),
            Err(TimestampParseError::Missing)
        ));
        assert!(matches!(
            parse_created_and_updated(Some(""), None),
            Err(TimestampParseError::Missing)
        ));
    }

    #[test]
    fn test_parse_updated_optional() {
        let (created, updated) =
            parse_created_and_updated(Some("2024-01-01T00:00:00.000Z"), Some("")).unwrap();
        assert_eq!(created, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert!(updated.is_none());

        let (_, updated) = parse_created_and_updated(
            Some("2024-01-01T00:00:00.000Z"),
            Some("2024-01-02T00:00:00.000Z"),
        )
        .unwrap();
        assert_eq!(
            updated,
            Some(Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_parse_malformed_updated_fails() {
        let result =
            parse_created_and_updated(Some("2024-01-01T00:00:00.000Z"), Some("yesterday"));
        assert!(matches!(result, Err(TimestampParseError::Malformed { .. })));
    }
}
