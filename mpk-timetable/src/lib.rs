//! MPK Kraków timetable scraper.
//!
//! Fetches a bus lane's routes, stops and departure times for one date
//! from the timetable web pages and assembles them into a
//! [`ScheduleQueryResult`](domain::ScheduleQueryResult).

pub mod domain;
pub mod fetcher;
pub mod mpk;
