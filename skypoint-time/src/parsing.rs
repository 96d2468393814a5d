//! Timestamp parsing for the fixed observation-time pattern.
//!
//! The accepted dialect is deliberately small: the canonical
//! `YYYY-MM-DD HH:MM:SS`, with `T` allowed as the date/time separator, an
//! optional trailing `Z`, and an optional fractional-seconds suffix.
//! Anything else is a [`TimeError::Parse`] naming the offending field,
//! raised before any computation runs. The timestamp is UTC by contract;
//! no offset syntax is recognized.

use crate::calendar::CalendarTime;
use crate::errors::{TimeError, TimeResult};

/// Minimum input: `YYYY-MM-DD HH:MM:SS`.
const BASE_LENGTH: usize = 19;

/// Generous cap so a pasted paragraph fails fast instead of being scanned.
const MAX_LENGTH: usize = 32;

/// Parses a UTC timestamp in the pattern `YYYY-MM-DD HH:MM:SS`.
///
/// Also accepted: `T` instead of the space, a trailing `Z`, and fractional
/// seconds (`...:SS.25`). Field ranges (month, day for the month, hour,
/// minute, second) are enforced by [`CalendarTime::new`].
///
/// # Errors
///
/// [`TimeError::Parse`] for malformed text, [`TimeError::InvalidTimestamp`]
/// for well-formed text naming no real instant (e.g. February 30).
pub fn parse_timestamp(input: &str) -> TimeResult<CalendarTime> {
    let s = input.trim();

    if s.len() > MAX_LENGTH {
        return Err(TimeError::Parse(format!(
            "timestamp too long ({} bytes, max {MAX_LENGTH})",
            s.len()
        )));
    }

    let s = s.strip_suffix('Z').unwrap_or(s);
    let bytes = s.as_bytes();

    if bytes.len() < BASE_LENGTH {
        return Err(TimeError::Parse(format!(
            "timestamp '{s}' does not match YYYY-MM-DD HH:MM:SS"
        )));
    }

    // Fixed layout: 0123-56-89 12:45:78
    expect_byte(bytes, 4, b'-', "date separator")?;
    expect_byte(bytes, 7, b'-', "date separator")?;
    if bytes[10] != b' ' && bytes[10] != b'T' {
        return Err(TimeError::Parse(format!(
            "expected ' ' or 'T' between date and time, found '{}'",
            bytes[10] as char
        )));
    }
    expect_byte(bytes, 13, b':', "time separator")?;
    expect_byte(bytes, 16, b':', "time separator")?;

    let year = parse_digits(&s[0..4], "year")? as i32;
    let month = parse_digits(&s[5..7], "month")? as u8;
    let day = parse_digits(&s[8..10], "day")? as u8;
    let hour = parse_digits(&s[11..13], "hour")? as u8;
    let minute = parse_digits(&s[14..16], "minute")? as u8;

    // Seconds may carry a fractional tail; f64 parsing covers both, but
    // signs, exponents, and bare dots are rejected first.
    let second_text = &s[17..];
    if !second_text
        .bytes()
        .all(|b| b.is_ascii_digit() || b == b'.')
        || second_text.starts_with('.')
        || second_text.ends_with('.')
    {
        return Err(TimeError::Parse(format!("invalid second: '{second_text}'")));
    }
    let second: f64 = second_text
        .parse()
        .map_err(|_| TimeError::Parse(format!("invalid second: '{second_text}'")))?;

    CalendarTime::new(year, month, day, hour, minute, second)
}

fn expect_byte(bytes: &[u8], index: usize, expected: u8, what: &str) -> TimeResult<()> {
    if bytes[index] == expected {
        return Ok(());
    }

    Err(TimeError::Parse(format!(
        "expected {what} '{}' at position {index}, found '{}'",
        expected as char, bytes[index] as char
    )))
}

fn parse_digits(field: &str, what: &str) -> TimeResult<u32> {
    let bytes = field.as_bytes();
    if !bytes.iter().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::Parse(format!("invalid {what}: '{field}'")));
    }

    Ok(bytes
        .iter()
        .fold(0u32, |acc, &b| acc * 10 + u32::from(b - b'0')))
}
