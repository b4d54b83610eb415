//! Query parameters for timetable pages.
//!
//! Every request is built fresh from its lane, route, stop and date; nothing
//! is carried over between stages.

use std::fmt;

use chrono::NaiveDate;

use crate::domain::Lane;

/// Query parameter holding the page language.
pub const LANG_PARAM: &str = "lang";

/// Query parameter holding the timetable date (`YYYYMMDD`).
pub const DATE_PARAM: &str = "rozklad";

/// Query parameter holding the line selector.
pub const LINE_PARAM: &str = "linia";

/// Which part of a lane a page describes.
///
/// Renders as `<lane>`, `<lane>__<route>` or `<lane>__<route>__<stop>`,
/// where `stop` is a global stop index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LineSelector {
    /// The lane as a whole: lists its routes.
    Lane(Lane),
    /// One route: lists its stops.
    Route { lane: Lane, route: usize },
    /// One stop on a route: its timetable.
    Stop {
        lane: Lane,
        route: usize,
        stop: usize,
    },
}

impl fmt::Display for LineSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineSelector::Lane(lane) => write!(f, "{lane}"),
            LineSelector::Route { lane, route } => write!(f, "{lane}__{route}"),
            LineSelector::Stop { lane, route, stop } => write!(f, "{lane}__{route}__{stop}"),
        }
    }
}

/// One timetable page request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimetableRequest {
    pub date: NaiveDate,
    pub selector: LineSelector,
}

impl TimetableRequest {
    /// Request for the route list of a lane.
    pub fn routes(lane: Lane, date: NaiveDate) -> Self {
        Self {
            date,
            selector: LineSelector::Lane(lane),
        }
    }

    /// Request for the stop list of a route.
    pub fn stops(lane: Lane, route: usize, date: NaiveDate) -> Self {
        Self {
            date,
            selector: LineSelector::Route { lane, route },
        }
    }

    /// Request for the timetable of a stop, addressed by global stop index.
    pub fn schedule(lane: Lane, route: usize, stop: usize, date: NaiveDate) -> Self {
        Self {
            date,
            selector: LineSelector::Stop { lane, route, stop },
        }
    }

    /// The date formatted as the server expects it.
    pub fn date_param(&self) -> String {
        self.date.format("%Y%m%d").to_string()
    }

    /// Full query string parameters, in the server's order.
    pub fn query(&self, lang: &str) -> [(&'static str, String); 3] {
        [
            (LANG_PARAM, lang.to_string()),
            (DATE_PARAM, self.date_param()),
            (LINE_PARAM, self.selector.to_string()),
        ]
    }
}
