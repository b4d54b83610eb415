//! MPK Kraków timetable pages.
//!
//! This module covers everything specific to the timetable server:
//! query parameters, the page layout the extraction depends on, HTML
//! extraction, and the HTTP session.
//!
//! Key characteristics of the server:
//! - Every page is the same URL with `lang`, `rozklad` (date) and `linia`
//!   (line selector) query parameters
//! - A session cookie is set by the landing page, so each query warms up
//!   with one plain GET before any parameterized request
//! - Cells are recognised only by their inline `style` attribute

mod client;
mod error;
mod layout;
mod mock;
pub mod pages;
mod parse;
mod request;

pub use client::{MpkClient, MpkConfig, MpkSession};
pub use error::{LayoutError, MpkError};
pub use layout::{
    LabelPattern, PageLayout, ROUTE_CELL_STYLE, STOP_CELL_STYLE, TIMETABLE_CELL_STYLE,
};
pub use mock::{MockSession, MockTimetable};
pub use parse::{parse_departures, parse_routes, parse_stops};
pub use request::{DATE_PARAM, LANG_PARAM, LINE_PARAM, LineSelector, TimetableRequest};
