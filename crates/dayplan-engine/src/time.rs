//! Time-of-day values and 24-hour axis positions.
//!
//! A [`TimeOfDay`] is always a valid `HH:MM` 24-hour time. Its ordering is
//! chronological, which matches lexicographic ordering of the zero-padded
//! string form.

use std::fmt;
use std::str::FromStr;

use chrono::Timelike;

/// Minutes in one day (length of the timeline axis).
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A wall-clock time of day with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// 00:00.
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    /// Create a time, validating the hour (0-23) and minute (0-59).
    pub fn new(hour: u8, minute: u8) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(TimeError::MinuteOutOfRange(minute));
        }
        Ok(Self { hour, minute })
    }

    /// Build a time from minutes since midnight, wrapping around the day.
    // Both quotient and remainder are bounded by the day length.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_minutes(minutes: i32) -> Self {
        let wrapped = minutes.rem_euclid(i32::from(MINUTES_PER_DAY));
        Self {
            hour: (wrapped / 60) as u8,
            minute: (wrapped % 60) as u8,
        }
    }

    /// Read hour and minute from any `chrono` time-like value.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_timelike<T: Timelike>(value: &T) -> Self {
        Self {
            hour: value.hour() as u8,
            minute: value.minute() as u8,
        }
    }

    /// Hour component (0-23).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Minute component (0-59).
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since 00:00.
    pub fn minutes_since_midnight(self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }

    /// Percentage offset along a 24-hour axis.
    ///
    /// 0.0 is 00:00, 100.0 would be 24:00 (never reached).
    pub fn position(self) -> f64 {
        f64::from(self.minutes_since_midnight()) / f64::from(MINUTES_PER_DAY) * 100.0
    }

    /// Shift the hour segment, wrapping 23 -> 00. Minutes are untouched.
    #[must_use]
    pub fn with_hour_offset(self, delta: i32) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let hour = (i32::from(self.hour) + delta).rem_euclid(24) as u8;
        Self { hour, ..self }
    }

    /// Shift the minute segment, wrapping 59 -> 00 without carrying into the hour.
    #[must_use]
    pub fn with_minute_offset(self, delta: i32) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let minute = (i32::from(self.minute) + delta).rem_euclid(60) as u8;
        Self { minute, ..self }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TimeError::Malformed(s.to_string());

        let (hours, minutes) = s.split_once(':').ok_or_else(malformed)?;
        let hour = parse_two_digits(hours).ok_or_else(malformed)?;
        let minute = parse_two_digits(minutes).ok_or_else(malformed)?;

        Self::new(hour, minute)
    }
}

fn parse_two_digits(part: &str) -> Option<u8> {
    let bytes = part.as_bytes();
    if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some((bytes[0] - b'0') * 10 + (bytes[1] - b'0'))
}

/// Parse an `HH:MM` string and return its percentage offset on the 24-hour axis.
pub fn position(time: &str) -> Result<f64, TimeError> {
    time.parse::<TimeOfDay>().map(TimeOfDay::position)
}

/// Errors produced when reading a time of day.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    /// Input is not two digits, a colon, and two digits.
    #[error("expected HH:MM, got {0:?}")]
    Malformed(String),

    /// Hour outside 0-23.
    #[error("hour {0} is out of range (0-23)")]
    HourOutOfRange(u8),

    /// Minute outside 0-59.
    #[error("minute {0} is out of range (0-59)")]
    MinuteOutOfRange(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        let time = t("09:05");
        assert_eq!(time.hour(), 9);
        assert_eq!(time.minute(), 5);
        assert_eq!(time.to_string(), "09:05");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["", "9:05", "09:5", "0905", "09:05:00", "ab:cd", " 9:05", "+9:05"] {
            assert!(
                matches!(input.parse::<TimeOfDay>(), Err(TimeError::Malformed(_))),
                "{input:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!("24:00".parse::<TimeOfDay>(), Err(TimeError::HourOutOfRange(24)));
        assert_eq!("12:60".parse::<TimeOfDay>(), Err(TimeError::MinuteOutOfRange(60)));
    }

    #[test]
    fn test_position_known_values() {
        assert!((position("00:00").unwrap() - 0.0).abs() < f64::EPSILON);
        assert!((position("12:00").unwrap() - 50.0).abs() < f64::EPSILON);
        assert!((position("06:00").unwrap() - 25.0).abs() < f64::EPSILON);

        let late = position("23:59").unwrap();
        assert!((late - 99.93).abs() < 0.01, "got {late}");
        assert!(late < 100.0);
    }

    #[test]
    fn test_position_of_malformed_input() {
        assert!(position("noon").is_err());
    }

    #[test]
    fn test_ordering_matches_string_ordering() {
        let mut times = vec![t("23:00"), t("09:30"), t("09:05"), t("00:00"), t("10:00")];
        let mut strings: Vec<String> = times.iter().map(ToString::to_string).collect();

        times.sort();
        strings.sort();

        let sorted: Vec<String> = times.iter().map(ToString::to_string).collect();
        assert_eq!(sorted, strings);
    }

    #[test]
    fn test_from_minutes_wraps() {
        assert_eq!(TimeOfDay::from_minutes(0), TimeOfDay::MIDNIGHT);
        assert_eq!(TimeOfDay::from_minutes(630), t("10:30"));
        assert_eq!(TimeOfDay::from_minutes(1440), TimeOfDay::MIDNIGHT);
        assert_eq!(TimeOfDay::from_minutes(-1), t("23:59"));
    }

    #[test]
    fn test_segment_offsets_wrap_independently() {
        let time = t("23:59");
        assert_eq!(time.with_minute_offset(1), t("23:00"));
        assert_eq!(time.with_hour_offset(1), t("00:59"));
        assert_eq!(t("00:00").with_hour_offset(-1), t("23:00"));
        assert_eq!(t("00:00").with_minute_offset(-1), t("00:59"));
    }

    #[test]
    fn test_from_timelike() {
        let naive = chrono::NaiveTime::from_hms_opt(17, 42, 13).unwrap();
        assert_eq!(TimeOfDay::from_timelike(&naive), t("17:42"));
    }
}
