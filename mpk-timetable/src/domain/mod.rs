//! Domain types for the timetable scraper.
//!
//! This module contains the value types a schedule query produces. All
//! types enforce their invariants at construction time, so code that
//! receives these types can trust their validity.

mod day_type;
mod departure;
mod lane;
mod schedule;

pub use day_type::DayType;
pub use departure::{Departure, InvalidDeparture};
pub use lane::{InvalidLane, Lane};
pub use schedule::{
    Route, RouteSchedule, ScheduleQueryResult, Stop, StopSchedule, global_stop_index,
};
