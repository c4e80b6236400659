use serde::{Deserialize, Serialize};

/// Messages specific to SessionState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionMsg {
    /// The name field was edited; carries the complete new value
    NameChanged(String),

    /// Pick a specific countdown duration from the configured choices
    SelectDuration(u64),

    /// Advance to the next configured duration, wrapping around
    CycleDuration,

    /// Begin a countdown from the selected duration
    Start,

    /// One second elapsed on the live countdown
    Tick,

    /// The random affirmation chosen for the current completion
    QuotePicked(String),

    /// Full reset back to the initial state, name included
    Reset,
}

impl SessionMsg {
    /// Determine if this is a frequent message during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, SessionMsg::Tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use color_eyre::Result;

    #[test]
    fn test_session_msg_frequent_detection() {
        assert!(SessionMsg::Tick.is_frequent());
        assert!(!SessionMsg::Start.is_frequent());
        assert!(!SessionMsg::NameChanged("Ada".to_string()).is_frequent());
    }

    #[test]
    fn test_session_msg_equality() {
        assert_eq!(SessionMsg::Start, SessionMsg::Start);
        assert_ne!(SessionMsg::Start, SessionMsg::Reset);

        let a = SessionMsg::SelectDuration(20);
        let b = SessionMsg::SelectDuration(20);
        assert_eq!(a, b);
    }

    #[test]
    fn test_session_msg_serialization() -> Result<()> {
        let msg = SessionMsg::NameChanged("Ada".to_string());
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: SessionMsg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);

        Ok(())
    }
}
