//! Day-of-week index.
//!
//! # Responsibility
//! - Represent the board column a task lives in.
//! - Reject out-of-range values at construction and deserialization time.
//!
//! # Invariants
//! - Inner value is always in `0..=6`, `0` being Sunday.
//! - Wire form is a bare integer.

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Validation error for day-of-week construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayOfWeekError {
    /// Value outside `0..=6`.
    OutOfRange(i64),
}

impl Display for DayOfWeekError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange(value) => {
                write!(f, "day must be in 0..=6 (0 = Sunday), got {value}")
            }
        }
    }
}

impl Error for DayOfWeekError {}

/// Board column index, Sunday-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct DayOfWeek(u8);

impl DayOfWeek {
    pub const SUNDAY: Self = Self(0);
    pub const MONDAY: Self = Self(1);
    pub const TUESDAY: Self = Self(2);
    pub const WEDNESDAY: Self = Self(3);
    pub const THURSDAY: Self = Self(4);
    pub const FRIDAY: Self = Self(5);
    pub const SATURDAY: Self = Self(6);

    /// All seven columns in board order.
    pub const ALL: [Self; 7] = [
        Self::SUNDAY,
        Self::MONDAY,
        Self::TUESDAY,
        Self::WEDNESDAY,
        Self::THURSDAY,
        Self::FRIDAY,
        Self::SATURDAY,
    ];

    /// Checked constructor.
    pub fn new(value: u8) -> Result<Self, DayOfWeekError> {
        Self::try_from(i64::from(value))
    }

    /// Local weekday of the host clock.
    pub fn today() -> Self {
        let index = Local::now().weekday().num_days_from_sunday();
        // num_days_from_sunday is always 0..=6.
        Self(index as u8)
    }

    /// Day `days` later, wrapping around the week.
    pub fn offset(self, days: u8) -> Self {
        Self(((u16::from(self.0) + u16::from(days)) % 7) as u8)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// English display name, e.g. `Sunday`.
    pub fn name(self) -> &'static str {
        DAY_NAMES[usize::from(self.0)]
    }
}

impl TryFrom<i64> for DayOfWeek {
    type Error = DayOfWeekError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u8::try_from(value) {
            Ok(index) if index <= 6 => Ok(Self(index)),
            _ => Err(DayOfWeekError::OutOfRange(value)),
        }
    }
}

impl From<DayOfWeek> for u8 {
    fn from(value: DayOfWeek) -> Self {
        value.0
    }
}

impl Display for DayOfWeek {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::{DayOfWeek, DayOfWeekError};

    #[test]
    fn new_accepts_full_week_and_rejects_seven() {
        for value in 0..=6 {
            assert_eq!(DayOfWeek::new(value).unwrap().index(), value);
        }
        assert_eq!(
            DayOfWeek::new(7).unwrap_err(),
            DayOfWeekError::OutOfRange(7)
        );
    }

    #[test]
    fn offset_wraps_around_week() {
        assert_eq!(DayOfWeek::FRIDAY.offset(3), DayOfWeek::MONDAY);
        assert_eq!(DayOfWeek::SATURDAY.offset(1), DayOfWeek::SUNDAY);
        assert_eq!(DayOfWeek::TUESDAY.offset(0), DayOfWeek::TUESDAY);
    }

    #[test]
    fn names_are_sunday_first() {
        assert_eq!(DayOfWeek::SUNDAY.name(), "Sunday");
        assert_eq!(DayOfWeek::SATURDAY.to_string(), "Saturday");
    }

    #[test]
    fn today_is_in_range() {
        assert!(DayOfWeek::today().index() <= 6);
    }

    #[test]
    fn serde_uses_bare_integer_and_rejects_negative() {
        let json = serde_json::to_string(&DayOfWeek::THURSDAY).unwrap();
        assert_eq!(json, "4");
        assert!(serde_json::from_str::<DayOfWeek>("-1").is_err());
        assert!(serde_json::from_str::<DayOfWeek>("9").is_err());
        assert_eq!(
            serde_json::from_str::<DayOfWeek>("0").unwrap(),
            DayOfWeek::SUNDAY
        );
    }
}
