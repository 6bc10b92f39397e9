//! Date/time and duration display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A wrapper around `Timestamp` that provides system timezone formatting
/// via the `Display` trait.
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// A minute count formatted the way durations read in the UI: `1h 30m`,
/// or just `45m` under an hour.
///
/// # Examples
///
/// ```rust
/// use fehrist_core::display::DurationLabel;
///
/// assert_eq!(DurationLabel(90).to_string(), "1h 30m");
/// assert_eq!(DurationLabel(45).to_string(), "45m");
/// assert_eq!(DurationLabel(120).to_string(), "2h 0m");
/// ```
pub struct DurationLabel(pub u32);

impl fmt::Display for DurationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0 / 60;
        let minutes = self.0 % 60;
        if hours > 0 {
            write!(f, "{hours}h {minutes}m")
        } else {
            write!(f, "{minutes}m")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_label() {
        assert_eq!(DurationLabel(0).to_string(), "0m");
        assert_eq!(DurationLabel(59).to_string(), "59m");
        assert_eq!(DurationLabel(60).to_string(), "1h 0m");
        assert_eq!(DurationLabel(135).to_string(), "2h 15m");
    }
}
