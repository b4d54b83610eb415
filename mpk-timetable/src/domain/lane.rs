//! Bus lane identifiers.

use std::fmt;

use serde::Serialize;

/// Error returned when parsing an invalid lane identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid lane: {reason}")]
pub struct InvalidLane {
    reason: &'static str,
}

/// A bus line identifier as known to the transit authority (e.g. `144`).
///
/// Lanes are non-empty ASCII alphanumeric strings. This keeps them safe to
/// embed in the `__`-separated line selector.
///
/// # Examples
///
/// ```
/// use mpk_timetable::domain::Lane;
///
/// let lane = Lane::parse("144").unwrap();
/// assert_eq!(lane.as_str(), "144");
/// assert_eq!(Lane::from(503u32).as_str(), "503");
///
/// assert!(Lane::parse("").is_err());
/// assert!(Lane::parse("14__4").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Lane(String);

impl Lane {
    /// Parse a lane identifier from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidLane> {
        if s.is_empty() {
            return Err(InvalidLane {
                reason: "must not be empty",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(InvalidLane {
                reason: "must be ASCII letters or digits",
            });
        }

        Ok(Lane(s.to_string()))
    }

    /// Returns the lane identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u32> for Lane {
    fn from(number: u32) -> Self {
        Lane(number.to_string())
    }
}

impl TryFrom<&str> for Lane {
    type Error = InvalidLane;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Lane::parse(s)
    }
}

impl std::str::FromStr for Lane {
    type Err = InvalidLane;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lane::parse(s)
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_lanes() {
        assert!(Lane::parse("144").is_ok());
        assert!(Lane::parse("4").is_ok());
        assert!(Lane::parse("N1").is_ok());
        assert!(Lane::parse("902").is_ok());
    }

    #[test]
    fn reject_empty() {
        assert_eq!(
            Lane::parse("").unwrap_err().to_string(),
            "invalid lane: must not be empty"
        );
    }

    #[test]
    fn reject_separators_and_spaces() {
        assert!(Lane::parse("144__1").is_err());
        assert!(Lane::parse("14 4").is_err());
        assert!(Lane::parse("14-4").is_err());
        assert!(Lane::parse("1ł4").is_err());
    }

    #[test]
    fn from_integer() {
        assert_eq!(Lane::from(144), Lane::parse("144").unwrap());
    }

    #[test]
    fn display_roundtrip() {
        let lane: Lane = "N1".parse().unwrap();
        assert_eq!(lane.to_string(), "N1");
    }
}
