//! Total timestamp normalization for rows coming back from the hosted store.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Offset-bearing layouts tried after RFC 3339 (short `+00` offsets included).
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"];

/// Offset-less layouts, read as UTC.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Instant substituted for absent or unparseable timestamps.
pub fn fallback_instant() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

/// Resolve a possibly malformed timestamp to a usable instant. Never fails.
///
/// Tries a direct parse, then the same text with its first space replaced by
/// `T`, then gives up and returns the epoch.
pub fn safe_parse(value: Option<&str>) -> DateTime<Utc> {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return fallback_instant();
    };

    if let Some(instant) = parse_instant(raw) {
        return instant;
    }

    if raw.contains(' ') {
        if let Some(instant) = parse_instant(&raw.replacen(' ', "T", 1)) {
            return instant;
        }
    }

    tracing::debug!(value = %raw, "Unparseable timestamp, using epoch");
    fallback_instant()
}

/// Strict single-pass parse over the accepted ISO layouts.
fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(raw, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn absent_and_empty_fall_back_to_epoch() {
        assert_eq!(safe_parse(None), fallback_instant());
        assert_eq!(safe_parse(Some("")), fallback_instant());
        assert_eq!(safe_parse(Some("   ")), fallback_instant());
    }

    #[test]
    fn garbage_falls_back_to_epoch() {
        for bad in ["bad-date", "2024-13-45", "yesterday", "15/01/2024", "2024-01-15 nope"] {
            assert_eq!(safe_parse(Some(bad)), fallback_instant(), "input {bad:?}");
        }
    }

    #[test]
    fn bare_date_is_utc_midnight() {
        let dt = safe_parse(Some("2024-01-15"));
        assert_eq!((dt.year(), dt.month0(), dt.day()), (2024, 0, 15));
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn rfc3339_with_offset_is_normalized() {
        let dt = safe_parse(Some("2024-03-01T01:30:00+02:00"));
        assert_eq!(dt.month0(), 1);
        assert_eq!(dt.day(), 29);
        assert_eq!(dt.hour(), 23);
    }

    #[test]
    fn postgres_text_form_parses_after_separator_swap() {
        let dt = safe_parse(Some("2024-06-10 14:05:09.123456+00"));
        assert_eq!(dt.month0(), 5);
        assert_eq!((dt.hour(), dt.minute()), (14, 5));
    }

    #[test]
    fn naive_space_separated_parses() {
        let dt = safe_parse(Some("2023-11-02 08:00:00"));
        assert_eq!(dt.year(), 2023);
        assert_eq!(dt.month0(), 10);
    }
}
