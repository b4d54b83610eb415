//! Schedule query error types.

use std::fmt;

use crate::mpk::{LayoutError, MpkError};

/// The stage of a query at which a failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Warm-up request opening the session
    Session,
    /// Route list of the lane
    Routes,
    /// Stop list of a route
    Stops { route: usize },
    /// Timetable of a stop, by global stop index
    Schedule { route: usize, stop: usize },
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Session => write!(f, "session warm-up"),
            Stage::Routes => write!(f, "route list"),
            Stage::Stops { route } => write!(f, "stop list of route {route}"),
            Stage::Schedule { route, stop } => {
                write!(f, "timetable of route {route} stop {stop}")
            }
        }
    }
}

/// Errors that abort a schedule query.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The server could not be reached or refused the request
    #[error("{stage}: {source}")]
    Transport { stage: Stage, source: MpkError },

    /// A page did not have the expected shape
    #[error("{stage}: page layout mismatch: {source}")]
    StructuralMismatch { stage: Stage, source: LayoutError },
}

impl FetchError {
    /// The stage that failed.
    pub fn stage(&self) -> Stage {
        match self {
            FetchError::Transport { stage, .. } | FetchError::StructuralMismatch { stage, .. } => {
                *stage
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FetchError::StructuralMismatch {
            stage: Stage::Schedule { route: 2, stop: 4 },
            source: LayoutError::Missing("a timetable cell".into()),
        };
        assert_eq!(
            err.to_string(),
            "timetable of route 2 stop 4: page layout mismatch: expected a timetable cell, found none"
        );
        assert_eq!(err.stage(), Stage::Schedule { route: 2, stop: 4 });

        let err = FetchError::Transport {
            stage: Stage::Stops { route: 1 },
            source: MpkError::MissingPage("144__1".into()),
        };
        assert_eq!(
            err.to_string(),
            "stop list of route 1: no page for line selector 144__1"
        );
    }

    #[test]
    fn error_source_chain() {
        use std::error::Error;

        let err = FetchError::StructuralMismatch {
            stage: Stage::Routes,
            source: LayoutError::InvalidHour("x".into()),
        };
        assert!(err.source().is_some());
    }
}
