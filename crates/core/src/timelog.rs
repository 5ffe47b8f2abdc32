//! Card time-tracking actions.
//!
//! A card carries one optional open session: `start`/`resume` open it,
//! `pause`/`stop` close it and fold the elapsed seconds into the card's
//! running total. Which side of that line an action falls on is the
//! only distinction the storage layer needs.

use crate::error::CoreError;

/// A time-tracking action recorded against a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackAction {
    Start,
    Pause,
    Resume,
    Stop,
}

impl TrackAction {
    pub fn as_str(self) -> &'static str {
        match self {
            TrackAction::Start => "start",
            TrackAction::Pause => "pause",
            TrackAction::Resume => "resume",
            TrackAction::Stop => "stop",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "start" => Ok(TrackAction::Start),
            "pause" => Ok(TrackAction::Pause),
            "resume" => Ok(TrackAction::Resume),
            "stop" => Ok(TrackAction::Stop),
            other => Err(CoreError::Validation(format!(
                "unknown tracking action: {other}"
            ))),
        }
    }

    /// Whether this action opens a tracking session (as opposed to
    /// closing one).
    pub fn opens_session(self) -> bool {
        matches!(self, TrackAction::Start | TrackAction::Resume)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_round_trips_through_str() {
        for a in [
            TrackAction::Start,
            TrackAction::Pause,
            TrackAction::Resume,
            TrackAction::Stop,
        ] {
            assert_eq!(TrackAction::parse(a.as_str()).unwrap(), a);
        }
        assert!(TrackAction::parse("begin").is_err());
    }

    #[test]
    fn start_and_resume_open_a_session() {
        assert!(TrackAction::Start.opens_session());
        assert!(TrackAction::Resume.opens_session());
        assert!(!TrackAction::Pause.opens_session());
        assert!(!TrackAction::Stop.opens_session());
    }
}
