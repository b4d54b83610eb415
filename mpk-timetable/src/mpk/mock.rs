//! In-memory timetable for testing without the live server.
//!
//! Serves canned documents keyed by line selector and records every
//! request in the order it was issued.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::fetcher::{TimetableSession, TimetableSource};

use super::error::MpkError;
use super::request::{LineSelector, TimetableRequest};

/// Mock timetable server.
#[derive(Clone, Default)]
pub struct MockTimetable {
    pages: Arc<HashMap<String, String>>,
    requests: Arc<Mutex<Vec<TimetableRequest>>>,
    sessions: Arc<AtomicUsize>,
}

impl MockTimetable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` for requests whose `linia` parameter equals `selector`.
    pub fn with_page(mut self, selector: impl Into<String>, html: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.pages).insert(selector.into(), html.into());
        self
    }

    /// All requests issued so far, in order.
    pub fn requests(&self) -> Vec<TimetableRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of sessions opened (one warm-up each).
    pub fn sessions_opened(&self) -> usize {
        self.sessions.load(Ordering::SeqCst)
    }

    /// Count requests of each stage: (routes, stops, schedules).
    pub fn request_counts(&self) -> (usize, usize, usize) {
        self.requests()
            .iter()
            .fold((0, 0, 0), |(routes, stops, schedules), r| match r.selector {
                LineSelector::Lane(_) => (routes + 1, stops, schedules),
                LineSelector::Route { .. } => (routes, stops + 1, schedules),
                LineSelector::Stop { .. } => (routes, stops, schedules + 1),
            })
    }
}

/// Session handed out by [`MockTimetable`].
pub struct MockSession {
    pages: Arc<HashMap<String, String>>,
    requests: Arc<Mutex<Vec<TimetableRequest>>>,
}

impl TimetableSource for MockTimetable {
    type Session = MockSession;

    async fn open_session(&self) -> Result<MockSession, MpkError> {
        self.sessions.fetch_add(1, Ordering::SeqCst);
        Ok(MockSession {
            pages: Arc::clone(&self.pages),
            requests: Arc::clone(&self.requests),
        })
    }
}

impl TimetableSession for MockSession {
    async fn fetch_page(&self, request: &TimetableRequest) -> Result<String, MpkError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        let selector = request.selector.to_string();
        self.pages
            .get(&selector)
            .cloned()
            .ok_or(MpkError::MissingPage(selector))
    }
}
