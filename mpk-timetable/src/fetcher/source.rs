//! The seam between orchestration and the timetable transport.

use crate::mpk::{MpkError, TimetableRequest};

/// Something that can open timetable sessions.
#[allow(async_fn_in_trait)]
pub trait TimetableSource {
    type Session: TimetableSession;

    /// Open a session, including its warm-up request.
    async fn open_session(&self) -> Result<Self::Session, MpkError>;
}

/// An open session that serves timetable pages as HTML.
#[allow(async_fn_in_trait)]
pub trait TimetableSession {
    async fn fetch_page(&self, request: &TimetableRequest) -> Result<String, MpkError>;
}
