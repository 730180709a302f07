//! Timestamp parsing for snapshot boundaries.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

const LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Parses a snapshot timestamp.
///
/// Accepts RFC 3339 text, or a zone-less `YYYY-MM-DDTHH:MM[:SS]` value as
/// produced by date-time form inputs, which is read in `offset`.
///
/// Returns `None` when the text matches neither shape.
#[must_use]
pub fn parse_timestamp(raw: &str, offset: FixedOffset) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .and_then(|naive| offset.from_local_datetime(&naive).single())
        .map(|local| local.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::parse_timestamp;
    use chrono::{FixedOffset, TimeZone, Utc};
    use rstest::rstest;

    #[rstest]
    #[case("2026-01-12T09:00", 0, (2026, 1, 12, 9, 0))]
    #[case("2026-01-12T09:00:00", 0, (2026, 1, 12, 9, 0))]
    #[case("2026-01-12T09:00", 3600, (2026, 1, 12, 8, 0))]
    #[case("2026-01-12T09:00:00Z", 3600, (2026, 1, 12, 9, 0))]
    #[case(" 2026-01-12T09:00:00+02:00 ", 0, (2026, 1, 12, 7, 0))]
    fn parses_supported_shapes(
        #[case] raw: &str,
        #[case] offset_seconds: i32,
        #[case] expected: (i32, u32, u32, u32, u32),
    ) {
        let offset = FixedOffset::east_opt(offset_seconds).expect("valid offset");
        let (year, month, day, hour, minute) = expected;
        let expected_utc = Utc
            .with_ymd_and_hms(year, month, day, hour, minute, 0)
            .single()
            .expect("valid timestamp");

        assert_eq!(parse_timestamp(raw, offset), Some(expected_utc));
    }

    #[rstest]
    #[case("")]
    #[case("yesterday")]
    #[case("2026-13-01T09:00")]
    fn rejects_unrecognised_text(#[case] raw: &str) {
        let offset = FixedOffset::east_opt(0).expect("valid offset");
        assert_eq!(parse_timestamp(raw, offset), None);
    }
}
