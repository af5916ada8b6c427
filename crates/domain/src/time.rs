//! Time and timestamp helpers.
//!
//! Appointments are wall-clock times without a zone, compared against the
//! local clock of the machine running the program.

use chrono::{Local, NaiveDateTime};

use crate::error::ValidationError;

/// Local date-time of a scheduled service.
pub type Timestamp = NaiveDateTime;

/// Format accepted from users and used when rendering appointments.
pub const INPUT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Human-readable form of [`INPUT_FORMAT`].
pub const INPUT_PATTERN: &str = "YYYY-MM-DD HH:MM";

/// Return the current local wall-clock time.
#[must_use]
pub fn now() -> Timestamp {
    Local::now().naive_local()
}

/// Parse a `YYYY-MM-DD HH:MM` string (24-hour clock).
///
/// Every field must carry its full width: `2030-1-5 9:30` is rejected even
/// though it names a valid instant. Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDateTime`] when the input does not match
/// the pattern or names an impossible date.
pub fn parse_input(input: &str) -> Result<Timestamp, ValidationError> {
    let trimmed = input.trim();
    let invalid = || ValidationError::InvalidDateTime {
        input: trimmed.to_string(),
    };

    if !matches_pattern(trimmed) {
        return Err(invalid());
    }
    NaiveDateTime::parse_from_str(trimmed, INPUT_FORMAT).map_err(|_| invalid())
}

fn matches_pattern(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == INPUT_PATTERN.len()
        && bytes
            .iter()
            .zip(INPUT_PATTERN.bytes())
            .all(|(&actual, expected)| match expected {
                b'Y' | b'M' | b'D' | b'H' => actual.is_ascii_digit(),
                separator => actual == separator,
            })
}

/// Render a timestamp the way users typed it.
#[must_use]
pub fn format_display(value: &Timestamp) -> String {
    value.format(INPUT_FORMAT).to_string()
}

/// Reject `scheduled_at` when it lies strictly before `now`.
///
/// # Errors
///
/// Returns [`ValidationError::ScheduledInPast`] for past timestamps.
pub fn ensure_not_in_past(scheduled_at: Timestamp, now: Timestamp) -> Result<(), ValidationError> {
    if scheduled_at < now {
        return Err(ValidationError::ScheduledInPast { scheduled_at });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> Timestamp {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn should_parse_well_formed_input() {
        let parsed = parse_input("2030-01-15 09:30").unwrap();
        assert_eq!(parsed, at(2030, 1, 15, 9, 30));
    }

    #[test]
    fn should_ignore_surrounding_whitespace() {
        let parsed = parse_input("  2030-01-15 09:30\n").unwrap();
        assert_eq!(parsed, at(2030, 1, 15, 9, 30));
    }

    #[test]
    fn should_reject_day_first_input() {
        let result = parse_input("15-01-2030 9:30");
        assert_eq!(
            result,
            Err(ValidationError::InvalidDateTime {
                input: "15-01-2030 9:30".to_string()
            })
        );
    }

    #[test]
    fn should_reject_unpadded_fields() {
        assert!(parse_input("2030-1-15 09:30").is_err());
        assert!(parse_input("2030-01-15 9:30").is_err());
    }

    #[test]
    fn should_reject_seconds_and_iso_separator() {
        assert!(parse_input("2030-01-15 09:30:00").is_err());
        assert!(parse_input("2030-01-15T09:30").is_err());
    }

    #[test]
    fn should_reject_impossible_dates() {
        assert!(parse_input("2030-02-30 09:30").is_err());
        assert!(parse_input("2030-01-15 24:00").is_err());
    }

    #[test]
    fn should_format_in_input_pattern() {
        assert_eq!(format_display(&at(2030, 1, 15, 9, 30)), "2030-01-15 09:30");
    }

    #[test]
    fn should_accept_now_and_future() {
        let now = at(2030, 1, 15, 9, 30);
        assert!(ensure_not_in_past(now, now).is_ok());
        assert!(ensure_not_in_past(now + Duration::minutes(1), now).is_ok());
    }

    #[test]
    fn should_reject_strictly_past() {
        let now = at(2030, 1, 15, 9, 30);
        let past = now - Duration::seconds(1);
        assert_eq!(
            ensure_not_in_past(past, now),
            Err(ValidationError::ScheduledInPast { scheduled_at: past })
        );
    }
}
