//! Schedule query orchestration.
//!
//! A query runs three stages against one session: the route list of the
//! lane, the stop list of every route, and the timetable of every stop
//! except each route's terminus. Any failure aborts the whole query.

mod config;
mod error;
mod fetch;
mod source;

pub use config::FetcherConfig;
pub use error::{FetchError, Stage};
pub use fetch::ScheduleFetcher;
pub use source::{TimetableSession, TimetableSource};
