//! Scheduled departure times.

use std::fmt;

use chrono::NaiveTime;
use serde::{Serialize, Serializer};

/// Error returned when a departure time is out of range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid departure {hour}:{minute:02}: {reason}")]
pub struct InvalidDeparture {
    hour: u32,
    minute: u32,
    reason: &'static str,
}

/// A time of day at which a vehicle leaves a stop.
///
/// Hour is always 0-23 and minute 0-59.
///
/// # Examples
///
/// ```
/// use mpk_timetable::domain::Departure;
///
/// let dep = Departure::new(5, 7).unwrap();
/// assert_eq!(dep.to_string(), "05:07");
///
/// assert!(Departure::new(24, 0).is_err());
/// assert!(Departure::new(12, 60).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Departure {
    hour: u8,
    minute: u8,
}

impl Departure {
    /// Create a departure, validating the hour and minute.
    pub fn new(hour: u32, minute: u32) -> Result<Self, InvalidDeparture> {
        if hour > 23 {
            return Err(InvalidDeparture {
                hour,
                minute,
                reason: "hour must be 0-23",
            });
        }
        if minute > 59 {
            return Err(InvalidDeparture {
                hour,
                minute,
                reason: "minute must be 0-59",
            });
        }

        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        u32::from(self.hour)
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        u32::from(self.minute)
    }

    /// Converts to a NaiveTime.
    pub fn time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour(), self.minute(), 0).unwrap_or_default()
    }
}

impl fmt::Debug for Departure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Departure({:02}:{:02})", self.hour, self.minute)
    }
}

impl fmt::Display for Departure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for Departure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert!(Departure::new(0, 0).is_ok());
        assert!(Departure::new(23, 59).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        let err = Departure::new(24, 5).unwrap_err();
        assert_eq!(err.to_string(), "invalid departure 24:05: hour must be 0-23");

        let err = Departure::new(7, 75).unwrap_err();
        assert_eq!(err.to_string(), "invalid departure 7:75: minute must be 0-59");
    }

    #[test]
    fn converts_to_naive_time() {
        let dep = Departure::new(14, 30).unwrap();
        assert_eq!(dep.time(), NaiveTime::from_hms_opt(14, 30, 0).unwrap());
    }

    #[test]
    fn serializes_as_hhmm() {
        let dep = Departure::new(4, 9).unwrap();
        assert_eq!(serde_json::to_string(&dep).unwrap(), "\"04:09\"");
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", Departure::new(9, 5).unwrap()), "Departure(09:05)");
    }
}
