//! Time-of-day values and cyclic time arithmetic.
//!
//! All spinner arithmetic goes through seconds-of-day with euclidean
//! wrapping, so overflow in a small unit carries into the next larger one
//! and hours wrap modulo 24 in both directions. There is no clamping and
//! no noon/midnight special case.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Error produced when parsing a time, date or datetime from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    /// The input does not have a recognizable time or datetime shape.
    Malformed(String),
    /// A component was numeric but outside its allowed range.
    OutOfRange {
        /// Component name ("hours", "minutes", ...)
        component: &'static str,
        /// The rejected value
        value: u32,
    },
    /// A component was not a non-negative number.
    NotANumber {
        /// Component name ("hours", "minutes", ...)
        component: &'static str,
    },
}

impl fmt::Display for TimeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(input) => write!(f, "not a recognizable time: {input:?}"),
            Self::OutOfRange { component, value } => {
                write!(f, "{component} out of range: {value}")
            }
            Self::NotANumber { component } => write!(f, "{component} is not a number"),
        }
    }
}

impl std::error::Error for TimeParseError {}

/// The three spinner units of a time picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Hour field (0-23 internally)
    Hours,
    /// Minute field (0-59)
    Minutes,
    /// Second field (0-59)
    Seconds,
}

impl Unit {
    /// Length of one unit in seconds of day.
    #[must_use]
    pub const fn span_seconds(self) -> i64 {
        match self {
            Self::Hours => 3600,
            Self::Minutes => 60,
            Self::Seconds => 1,
        }
    }
}

/// Spinner direction for a discrete increment operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Add one step
    Up,
    /// Subtract one step
    Down,
}

impl Direction {
    /// Signed multiplier for the step magnitude.
    #[must_use]
    pub const fn signum(self) -> i64 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }
}

fn parse_component(raw: &str, component: &'static str, max: u32) -> Result<u8, TimeParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(TimeParseError::NotANumber { component });
    }
    let value: u32 = trimmed
        .parse()
        .map_err(|_| TimeParseError::NotANumber { component })?;
    if value > max {
        return Err(TimeParseError::OutOfRange { component, value });
    }
    Ok(value as u8)
}

/// A canonical time of day: hours 0-23, minutes 0-59, seconds 0-59.
///
/// The 24-hour range is the single source of truth; 12-hour display is a
/// projection via [`TimeOfDay::hours_12`] and [`TimeOfDay::is_pm`] and never
/// changes the stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeOfDay {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl TimeOfDay {
    /// 00:00:00.
    pub const MIDNIGHT: Self = Self {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Create a time of day, rejecting out-of-range components.
    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Result<Self, TimeParseError> {
        if hours > 23 {
            return Err(TimeParseError::OutOfRange {
                component: "hours",
                value: u32::from(hours),
            });
        }
        if minutes > 59 {
            return Err(TimeParseError::OutOfRange {
                component: "minutes",
                value: u32::from(minutes),
            });
        }
        if seconds > 59 {
            return Err(TimeParseError::OutOfRange {
                component: "seconds",
                value: u32::from(seconds),
            });
        }
        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }

    /// Build from a signed seconds-of-day count, wrapping into one day.
    #[must_use]
    pub fn from_seconds_of_day(total: i64) -> Self {
        let total = total.rem_euclid(SECONDS_PER_DAY);
        Self {
            hours: (total / 3600) as u8,
            minutes: (total / 60 % 60) as u8,
            seconds: (total % 60) as u8,
        }
    }

    /// Hours in the canonical 24-hour range.
    #[must_use]
    pub const fn hours(self) -> u8 {
        self.hours
    }

    /// Minutes 0-59.
    #[must_use]
    pub const fn minutes(self) -> u8 {
        self.minutes
    }

    /// Seconds 0-59.
    #[must_use]
    pub const fn seconds(self) -> u8 {
        self.seconds
    }

    /// Seconds elapsed since midnight.
    #[must_use]
    pub const fn seconds_of_day(self) -> i64 {
        self.hours as i64 * 3600 + self.minutes as i64 * 60 + self.seconds as i64
    }

    /// Add `amount` units, carrying/borrowing through larger units and
    /// wrapping cyclically across midnight in either direction.
    #[must_use]
    pub fn wrapping_add(self, unit: Unit, amount: i64) -> Self {
        Self::from_seconds_of_day(self.seconds_of_day() + amount * unit.span_seconds())
    }

    /// Whether this time falls in the PM half of the day.
    #[must_use]
    pub const fn is_pm(self) -> bool {
        self.hours >= 12
    }

    /// Hour projected into the 12-hour display range 1-12.
    ///
    /// Internal 0 and 12 both project to 12.
    #[must_use]
    pub const fn hours_12(self) -> u8 {
        let h = self.hours % 12;
        if h == 0 {
            12
        } else {
            h
        }
    }

    /// Replace the hour component, wrapping into 0-23.
    #[must_use]
    pub const fn with_hours(self, hours: u8) -> Self {
        Self {
            hours: hours % 24,
            minutes: self.minutes,
            seconds: self.seconds,
        }
    }

    /// Replace the minute component, wrapping into 0-59.
    #[must_use]
    pub const fn with_minutes(self, minutes: u8) -> Self {
        Self {
            hours: self.hours,
            minutes: minutes % 60,
            seconds: self.seconds,
        }
    }

    /// Replace the second component, wrapping into 0-59.
    #[must_use]
    pub const fn with_seconds(self, seconds: u8) -> Self {
        Self {
            hours: self.hours,
            minutes: self.minutes,
            seconds: seconds % 60,
        }
    }
}

impl Default for TimeOfDay {
    fn default() -> Self {
        Self::MIDNIGHT
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeParseError;

    /// Parse `"HH:MM"` or `"HH:MM:SS"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        if parts.len() != 2 && parts.len() != 3 {
            return Err(TimeParseError::Malformed(s.to_string()));
        }
        let hours = parse_component(parts[0], "hours", 23)?;
        let minutes = parse_component(parts[1], "minutes", 59)?;
        let seconds = if parts.len() == 3 {
            parse_component(parts[2], "seconds", 59)?
        } else {
            0
        };
        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }
}

/// The opaque calendar portion of a bound value.
///
/// Time edits carry this through verbatim; nothing in the picker ever
/// performs calendar arithmetic on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Date {
    /// Calendar year
    pub year: i32,
    /// Month 1-12
    pub month: u8,
    /// Day of month 1-31
    pub day: u8,
}

impl Date {
    /// Create a date, rejecting out-of-range month or day.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, TimeParseError> {
        if month == 0 || month > 12 {
            return Err(TimeParseError::OutOfRange {
                component: "month",
                value: u32::from(month),
            });
        }
        if day == 0 || day > 31 {
            return Err(TimeParseError::OutOfRange {
                component: "day",
                value: u32::from(day),
            });
        }
        Ok(Self { year, month, day })
    }
}

impl Default for Date {
    fn default() -> Self {
        Self {
            year: 1970,
            month: 1,
            day: 1,
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for Date {
    type Err = TimeParseError;

    /// Parse `"YYYY-MM-DD"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('-').collect();
        if parts.len() != 3 {
            return Err(TimeParseError::Malformed(s.to_string()));
        }
        let year: i32 = parts[0]
            .parse()
            .map_err(|_| TimeParseError::NotANumber { component: "year" })?;
        let month = parse_component(parts[1], "month", 12)?;
        let day = parse_component(parts[2], "day", 31)?;
        Self::new(year, month, day)
    }
}

/// A date-like bound value: an opaque calendar date plus a time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateTime {
    /// Calendar portion, preserved across all time edits
    pub date: Date,
    /// Time portion the picker operates on
    pub time: TimeOfDay,
}

impl DateTime {
    /// Create a datetime from its two portions.
    #[must_use]
    pub const fn new(date: Date, time: TimeOfDay) -> Self {
        Self { date, time }
    }

    /// Create a datetime with the default calendar date.
    #[must_use]
    pub fn from_time(time: TimeOfDay) -> Self {
        Self {
            date: Date::default(),
            time,
        }
    }

    /// Replace the time portion, preserving the calendar portion verbatim.
    #[must_use]
    pub const fn with_time(self, time: TimeOfDay) -> Self {
        Self {
            date: self.date,
            time,
        }
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}

impl FromStr for DateTime {
    type Err = TimeParseError;

    /// Parse `"YYYY-MM-DD HH:MM[:SS]"`, or a bare `"HH:MM[:SS]"` with the
    /// default calendar date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some((date_part, time_part)) = trimmed.split_once(' ') {
            let date: Date = date_part.parse()?;
            let time: TimeOfDay = time_part.parse()?;
            Ok(Self { date, time })
        } else if trimmed.contains(':') {
            Ok(Self::from_time(trimmed.parse()?))
        } else {
            Err(TimeParseError::Malformed(s.to_string()))
        }
    }
}
