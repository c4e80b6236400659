pub mod session;
pub mod system;

use crate::{domain::session::Phase, infrastructure::config::Config};
use session::SessionState;
use system::SystemState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub session: SessionState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file (or built-in defaults)
    pub config: Config,
}

impl AppState {
    /// Initialize AppState from the loaded configuration
    pub fn new(config: Config) -> Self {
        Self {
            session: SessionState::new(
                config.default_duration_secs,
                config.duration_choices.clone(),
            ),
            system: SystemState::default(),
            config: ConfigState { config },
        }
    }

    /// Restore a previously persisted name, if any
    pub fn with_saved_name(mut self, name: Option<String>) -> Self {
        if let Some(name) = name.filter(|n| !n.trim().is_empty()) {
            self.session.name = name;
        }
        self
    }

    /// Derive the current session phase
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    /// Whether the start control is enabled
    pub fn can_start(&self) -> bool {
        self.session.can_start()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();

        assert_eq!(state.phase(), Phase::Idle);
        assert!(!state.can_start());
        assert!(!state.system.should_quit);
        assert_eq!(state.session.duration_secs, 10);
    }

    #[test]
    fn test_app_state_from_config() {
        let config = Config {
            default_duration_secs: 20,
            ..Default::default()
        };
        let state = AppState::new(config);

        assert_eq!(state.session.duration_secs, 20);
        assert_eq!(state.config.config.default_duration_secs, 20);
    }

    #[test]
    fn test_with_saved_name() {
        let state = AppState::new(Config::default()).with_saved_name(Some("Ada".to_string()));
        assert_eq!(state.session.name, "Ada");
        assert_eq!(state.phase(), Phase::Ready);
    }

    #[test]
    fn test_with_saved_name_ignores_blank() {
        let state = AppState::new(Config::default()).with_saved_name(Some("   ".to_string()));
        assert_eq!(state.session.name, "");
        assert_eq!(state.phase(), Phase::Idle);

        let state = AppState::new(Config::default()).with_saved_name(None);
        assert_eq!(state.session.name, "");
    }
}
