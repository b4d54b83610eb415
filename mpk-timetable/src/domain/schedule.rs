//! Routes, stops and the assembled result of one schedule query.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use super::{DayType, Departure, Lane};

/// One directional variant of a lane, e.g. outbound or inbound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// 1-based position within the lane's route list.
    pub index: usize,
    /// Label as printed by the timetable pages.
    pub label: String,
}

/// A named stop on a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stop {
    /// 1-based position within the route's stop sequence.
    pub position: usize,
    pub name: String,
}

/// Compute the stop number the timetable server uses to address a stop.
///
/// The server numbers the stops of all routes in one flat space, offset per
/// route by the stop count of the first route. All arguments and the result
/// are 1-based.
///
/// # Examples
///
/// ```
/// use mpk_timetable::domain::global_stop_index;
///
/// // First route: the local position is the global index
/// assert_eq!(global_stop_index(1, 2, 3), 2);
/// // Second route is offset by the first route's stop count
/// assert_eq!(global_stop_index(2, 1, 3), 4);
/// ```
pub fn global_stop_index(route_index: usize, position: usize, first_route_stops: usize) -> usize {
    position + route_index.saturating_sub(1) * first_route_stops
}

/// Departures from one non-terminus stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StopSchedule {
    pub stop: Stop,
    /// Stop number used to request this schedule (see [`global_stop_index`]).
    pub global_index: usize,
    /// Departures in timetable row order.
    pub departures: Vec<Departure>,
}

/// A route with its stops and per-stop schedules.
///
/// `schedules` has one entry per stop except the terminus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSchedule {
    pub route: Route,
    pub stops: Vec<Stop>,
    pub schedules: Vec<StopSchedule>,
}

impl RouteSchedule {
    /// The final stop of the route, which has no outgoing schedule.
    pub fn terminus(&self) -> Option<&Stop> {
        self.stops.last()
    }
}

/// Result of querying one lane on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleQueryResult {
    pub lane: Lane,
    pub date: NaiveDate,
    pub day_type: DayType,
    pub routes: Vec<RouteSchedule>,
}

impl ScheduleQueryResult {
    /// An empty result, for lanes without route variants.
    pub fn empty(lane: Lane, date: NaiveDate) -> Self {
        Self {
            lane,
            date,
            day_type: DayType::classify(date),
            routes: Vec::new(),
        }
    }

    /// Departures for a stop, addressed by 1-based route index and stop position.
    ///
    /// Returns `None` for unknown routes, unknown stops and termini.
    pub fn departures_at(&self, route_index: usize, position: usize) -> Option<&[Departure]> {
        self.routes
            .iter()
            .find(|r| r.route.index == route_index)?
            .schedules
            .iter()
            .find(|s| s.stop.position == position)
            .map(|s| s.departures.as_slice())
    }

    /// Total number of departures across all routes and stops.
    pub fn departure_count(&self) -> usize {
        self.routes
            .iter()
            .flat_map(|r| &r.schedules)
            .map(|s| s.departures.len())
            .sum()
    }
}

impl fmt::Display for ScheduleQueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Lane {} on {} ({})", self.lane, self.date, self.day_type)?;

        for route in &self.routes {
            writeln!(f)?;
            writeln!(f, "Route {}: {}", route.route.index, route.route.label)?;

            for schedule in &route.schedules {
                let times: Vec<String> =
                    schedule.departures.iter().map(|d| d.to_string()).collect();
                writeln!(f, "  {}: {}", schedule.stop.name, times.join(" "))?;
            }

            if let Some(terminus) = route.terminus() {
                writeln!(f, "  {} (terminus)", terminus.name)?;
            }
        }

        Ok(())
    }
}
