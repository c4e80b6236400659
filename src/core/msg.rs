use serde::{Deserialize, Serialize};

pub mod session;
pub mod system;

use session::SessionMsg;
use system::SystemMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // Countdown session operations (delegated to SessionState)
    Session(SessionMsg),

    // System operations (delegated to SystemState)
    System(SystemMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::Session(msg) => msg.is_frequent(),
            Msg::System(msg) => msg.is_frequent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msg_frequent_detection() {
        assert!(Msg::Session(SessionMsg::Tick).is_frequent());
        assert!(!Msg::Session(SessionMsg::Start).is_frequent());
        assert!(!Msg::System(SystemMsg::Quit).is_frequent());
    }

    #[test]
    fn test_msg_equality() {
        assert_eq!(Msg::System(SystemMsg::Quit), Msg::System(SystemMsg::Quit));
        assert_eq!(
            Msg::Session(SessionMsg::Start),
            Msg::Session(SessionMsg::Start)
        );
        assert_ne!(
            Msg::Session(SessionMsg::Start),
            Msg::Session(SessionMsg::Reset)
        );
    }

    #[test]
    fn test_msg_serialization() {
        let msg = Msg::Session(SessionMsg::NameChanged("Ada".to_string()));
        let serialized = serde_json::to_string(&msg).unwrap();
        let deserialized: Msg = serde_json::from_str(&serialized).unwrap();
        assert_eq!(msg, deserialized);
    }
}
