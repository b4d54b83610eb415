//! The schedule fetcher.

use chrono::{Local, NaiveDate};
use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, info};

use crate::domain::{
    DayType, Departure, Lane, Route, RouteSchedule, ScheduleQueryResult, Stop, StopSchedule,
    global_stop_index,
};
use crate::mpk::{LayoutError, TimetableRequest, parse_departures, parse_routes, parse_stops};

use super::config::FetcherConfig;
use super::error::{FetchError, Stage};
use super::source::{TimetableSession, TimetableSource};

/// Fetch one page, tagging transport failures with the stage.
async fn fetch_html<T: TimetableSession>(
    session: &T,
    request: &TimetableRequest,
    stage: Stage,
) -> Result<String, FetchError> {
    session
        .fetch_page(request)
        .await
        .map_err(|source| FetchError::Transport { stage, source })
}

fn mismatch(stage: Stage) -> impl FnOnce(LayoutError) -> FetchError {
    move |source| FetchError::StructuralMismatch { stage, source }
}

/// Builds [`ScheduleQueryResult`]s from a timetable source.
pub struct ScheduleFetcher<S> {
    source: S,
    config: FetcherConfig,
}

impl<S: TimetableSource> ScheduleFetcher<S> {
    pub fn new(source: S, config: FetcherConfig) -> Self {
        Self { source, config }
    }

    /// Fetch the schedule of a lane for the current local date.
    pub async fn fetch_today(&self, lane: Lane) -> Result<ScheduleQueryResult, FetchError> {
        self.fetch_full_schedule(lane, Local::now().date_naive())
            .await
    }

    /// Fetch every route, stop and departure of a lane on a date.
    ///
    /// Opens one session, resolves the routes, then the stops of each
    /// route, then the departures of each stop except the termini. The
    /// first failure aborts the query; no partial result is returned.
    pub async fn fetch_full_schedule(
        &self,
        lane: Lane,
        date: NaiveDate,
    ) -> Result<ScheduleQueryResult, FetchError> {
        let day_type = DayType::classify(date);
        info!(%lane, %date, %day_type, "fetching schedule");

        let session = self
            .source
            .open_session()
            .await
            .map_err(|source| FetchError::Transport {
                stage: Stage::Session,
                source,
            })?;

        let routes = self.fetch_routes(&session, &lane, date).await?;
        if routes.is_empty() {
            info!(%lane, "lane has no routes");
            return Ok(ScheduleQueryResult::empty(lane, date));
        }

        let stop_lists: Vec<Vec<Stop>> = stream::iter(routes.iter().map(|r| r.index))
            .map(|route| self.fetch_stops(&session, &lane, route, date))
            .buffered(self.config.concurrency())
            .try_collect()
            .await?;

        // The server offsets every route by the first route's stop count
        let first_route_stops = stop_lists.first().map_or(0, Vec::len);

        let mut route_schedules = Vec::with_capacity(routes.len());
        for (route, stops) in routes.into_iter().zip(stop_lists) {
            let schedules = self
                .fetch_route_schedules(&session, &lane, &route, &stops, first_route_stops, date)
                .await?;
            route_schedules.push(RouteSchedule {
                route,
                stops,
                schedules,
            });
        }

        let result = ScheduleQueryResult {
            lane,
            date,
            day_type,
            routes: route_schedules,
        };
        info!(
            routes = result.routes.len(),
            departures = result.departure_count(),
            "schedule complete"
        );
        Ok(result)
    }

    /// Resolve the route variants of a lane.
    pub async fn fetch_routes(
        &self,
        session: &S::Session,
        lane: &Lane,
        date: NaiveDate,
    ) -> Result<Vec<Route>, FetchError> {
        let stage = Stage::Routes;
        let request = TimetableRequest::routes(lane.clone(), date);
        let html = fetch_html(session, &request, stage).await?;

        let labels = parse_routes(&html, &self.config.layout).map_err(mismatch(stage))?;
        debug!(%lane, count = labels.len(), "resolved routes");

        Ok(labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| Route {
                index: i + 1,
                label,
            })
            .collect())
    }

    /// Resolve the stops of one route, terminus last.
    pub async fn fetch_stops(
        &self,
        session: &S::Session,
        lane: &Lane,
        route: usize,
        date: NaiveDate,
    ) -> Result<Vec<Stop>, FetchError> {
        let stage = Stage::Stops { route };
        let request = TimetableRequest::stops(lane.clone(), route, date);
        let html = fetch_html(session, &request, stage).await?;

        let names = parse_stops(&html, &self.config.layout).map_err(mismatch(stage))?;
        debug!(%lane, route, count = names.len(), "resolved stops");

        Ok(names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Stop {
                position: i + 1,
                name,
            })
            .collect())
    }

    /// Resolve the departures of one stop, addressed by global stop index,
    /// for the day type of `date`.
    pub async fn fetch_schedule(
        &self,
        session: &S::Session,
        lane: &Lane,
        route: usize,
        global_stop: usize,
        date: NaiveDate,
    ) -> Result<Vec<Departure>, FetchError> {
        let stage = Stage::Schedule {
            route,
            stop: global_stop,
        };
        let request = TimetableRequest::schedule(lane.clone(), route, global_stop, date);
        let html = fetch_html(session, &request, stage).await?;

        let departures = parse_departures(&html, &self.config.layout, DayType::classify(date))
            .map_err(mismatch(stage))?;
        debug!(%lane, route, stop = global_stop, count = departures.len(), "resolved departures");

        Ok(departures)
    }

    /// Departures of every stop on a route except its terminus.
    async fn fetch_route_schedules(
        &self,
        session: &S::Session,
        lane: &Lane,
        route: &Route,
        stops: &[Stop],
        first_route_stops: usize,
        date: NaiveDate,
    ) -> Result<Vec<StopSchedule>, FetchError> {
        let departing = &stops[..stops.len().saturating_sub(1)];

        stream::iter(departing)
            .map(|stop| async move {
                let global_index = global_stop_index(route.index, stop.position, first_route_stops);
                let departures = self
                    .fetch_schedule(session, lane, route.index, global_index, date)
                    .await?;
                Ok::<_, FetchError>(StopSchedule {
                    stop: stop.clone(),
                    global_index,
                    departures,
                })
            })
            .buffered(self.config.concurrency())
            .try_collect()
            .await
    }
}

#[cfg(test)]
#[path = "fetch_tests.rs"]
mod tests;
