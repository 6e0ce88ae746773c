//! Timetable times.
//!
//! The stop timetable only lists hours and minutes. Dates are never
//! attached during extraction; callers combine a [`ScheduledTime`] with a
//! calendar date of their choosing.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use std::fmt;

/// Error returned when constructing a time with out-of-range fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A scheduled arrival at a stop, without a date.
///
/// Ordering is chronological within a single day.
///
/// # Examples
///
/// ```
/// use gortrans::domain::ScheduledTime;
/// use chrono::NaiveDate;
///
/// let t = ScheduledTime::new(6, 16).unwrap();
/// assert_eq!(t.to_string(), "06:16");
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// assert_eq!(t.on(date).to_string(), "2024-03-15 06:16:00");
///
/// assert!(ScheduledTime::new(24, 0).is_err());
/// assert!(ScheduledTime::new(5, 60).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ScheduledTime {
    hour: u8,
    minute: u8,
}

impl ScheduledTime {
    /// Create a time from hour (0-23) and minute (0-59).
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.hour as u32
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.minute as u32
    }

    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour(), self.minute(), 0)
            .expect("fields validated at construction")
    }

    /// Attach a calendar date, producing an absolute local timestamp.
    pub fn on(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.to_naive_time())
    }
}

impl fmt::Debug for ScheduledTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScheduledTime({:02}:{:02})", self.hour, self.minute)
    }
}

impl fmt::Display for ScheduledTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_day_bounds() {
        let t = ScheduledTime::new(0, 0).unwrap();
        assert_eq!((t.hour(), t.minute()), (0, 0));

        let t = ScheduledTime::new(23, 59).unwrap();
        assert_eq!((t.hour(), t.minute()), (23, 59));
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            ScheduledTime::new(24, 0).unwrap_err().to_string(),
            "invalid time: hour must be 0-23"
        );
        assert_eq!(
            ScheduledTime::new(5, 60).unwrap_err().to_string(),
            "invalid time: minute must be 0-59"
        );
    }

    #[test]
    fn ordering_is_chronological() {
        let a = ScheduledTime::new(5, 50).unwrap();
        let b = ScheduledTime::new(6, 16).unwrap();
        let c = ScheduledTime::new(6, 38).unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn attaches_date() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 3).unwrap();
        let dt = ScheduledTime::new(9, 37).unwrap().on(date);
        assert_eq!(dt.date(), date);
        assert_eq!(dt.time(), NaiveTime::from_hms_opt(9, 37, 0).unwrap());
    }

    #[test]
    fn display_and_debug() {
        let t = ScheduledTime::new(7, 1).unwrap();
        assert_eq!(format!("{}", t), "07:01");
        assert_eq!(format!("{:?}", t), "ScheduledTime(07:01)");
    }

    #[test]
    fn serializes_fields() {
        let json = serde_json::to_value(ScheduledTime::new(8, 7).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({ "hour": 8, "minute": 7 }));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every in-range pair constructs and reads back unchanged
        #[test]
        fn in_range_roundtrip(h in 0u32..24, m in 0u32..60) {
            let t = ScheduledTime::new(h, m).unwrap();
            prop_assert_eq!(t.hour(), h);
            prop_assert_eq!(t.minute(), m);
            prop_assert_eq!(t.to_string(), format!("{:02}:{:02}", h, m));
        }

        /// Hours above 23 are always rejected
        #[test]
        fn hour_out_of_range(h in 24u32..10_000, m in 0u32..60) {
            prop_assert!(ScheduledTime::new(h, m).is_err());
        }

        /// Minutes above 59 are always rejected
        #[test]
        fn minute_out_of_range(h in 0u32..24, m in 60u32..10_000) {
            prop_assert!(ScheduledTime::new(h, m).is_err());
        }
    }
}
