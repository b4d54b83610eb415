//! Day-type classification of calendar dates.
//!
//! The timetable pages print three parallel minute columns per hour row,
//! one for each day type. [`DayType::column`] is the documented mapping
//! from a day type to its column.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

/// Which timetable column applies to a date.
///
/// There is no public-holiday calendar: Sunday is the only day classified
/// as [`DayType::Holiday`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday to Friday.
    Regular,
    Saturday,
    /// Sunday.
    Holiday,
}

impl DayType {
    /// Classify a date by its weekday.
    ///
    /// # Examples
    ///
    /// ```
    /// use mpk_timetable::domain::DayType;
    /// use chrono::NaiveDate;
    ///
    /// let saturday = NaiveDate::from_ymd_opt(2024, 3, 16).unwrap();
    /// assert_eq!(DayType::classify(saturday), DayType::Saturday);
    /// ```
    pub fn classify(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Sat => DayType::Saturday,
            Weekday::Sun => DayType::Holiday,
            Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu | Weekday::Fri => {
                DayType::Regular
            }
        }
    }

    /// Cell position of this day type's minutes within an hour row.
    ///
    /// Cell 0 holds the hour, so the columns are 1-based.
    pub fn column(self) -> usize {
        match self {
            DayType::Regular => 1,
            DayType::Saturday => 2,
            DayType::Holiday => 3,
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DayType::Regular => "regular",
            DayType::Saturday => "saturday",
            DayType::Holiday => "holiday",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn classify_every_weekday() {
        // 2024-03-11 is a Monday.
        let expected = [
            DayType::Regular,
            DayType::Regular,
            DayType::Regular,
            DayType::Regular,
            DayType::Regular,
            DayType::Saturday,
            DayType::Holiday,
        ];
        for (offset, want) in expected.iter().enumerate() {
            let d = date(2024, 3, 11 + offset as u32);
            assert_eq!(DayType::classify(d), *want, "{d}");
        }
    }

    #[test]
    fn public_holidays_on_weekdays_stay_regular() {
        // 2024-12-25 was a Wednesday.
        assert_eq!(DayType::classify(date(2024, 12, 25)), DayType::Regular);
    }

    #[test]
    fn column_mapping() {
        assert_eq!(DayType::Regular.column(), 1);
        assert_eq!(DayType::Saturday.column(), 2);
        assert_eq!(DayType::Holiday.column(), 3);
    }

    #[test]
    fn display() {
        assert_eq!(DayType::Holiday.to_string(), "holiday");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Saturday iff the weekday is Saturday, Holiday iff Sunday
        #[test]
        fn classification_follows_weekday(days in 1i32..800_000) {
            let d = NaiveDate::from_num_days_from_ce_opt(days).unwrap();
            let day_type = DayType::classify(d);
            prop_assert_eq!(day_type == DayType::Saturday, d.weekday() == Weekday::Sat);
            prop_assert_eq!(day_type == DayType::Holiday, d.weekday() == Weekday::Sun);
            prop_assert!((1..=3).contains(&day_type.column()));
        }
    }
}
