use serde::{Deserialize, Serialize};

/// Countdown ticker sub-commands executed by the host runtime.
///
/// The ticker is the only repeating timer in the application; at most one is
/// live at any moment. `StartTicker` replaces a live ticker, `StopTicker` is
/// a no-op when none is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountdownCmd {
    StartTicker,
    StopTicker,
}

/// Elm-like command definitions
/// Represents side effects (timer control, file I/O, randomness) generated by
/// the pure update function and executed by the command executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // Countdown ticker control
    Countdown(CountdownCmd),

    // Pick a random affirmation; the result comes back as a message
    PickQuote,

    // Persist the entered name to the name store
    SaveName { name: String },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        match commands.len() {
            0 => Cmd::None,
            1 => commands.into_iter().next().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }

    /// Whether the command touches the filesystem or another slow resource
    pub fn is_async(&self) -> bool {
        match self {
            Cmd::SaveName { .. } => true,

            Cmd::Countdown(..) | Cmd::PickQuote | Cmd::None => false,

            Cmd::Batch(cmds) => cmds.iter().any(|cmd| cmd.is_async()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmd_batch_empty() {
        let cmd = Cmd::batch(vec![]);
        assert_eq!(cmd, Cmd::None);
    }

    #[test]
    fn test_cmd_batch_single() {
        let original_cmd = Cmd::PickQuote;
        let cmd = Cmd::batch(vec![original_cmd.clone()]);
        assert_eq!(cmd, original_cmd);
    }

    #[test]
    fn test_cmd_batch_multiple() {
        // Batch should wrap when there are 2+ commands
        let cmds = vec![
            Cmd::Countdown(CountdownCmd::StopTicker),
            Cmd::PickQuote,
        ];
        let batch_cmd = Cmd::batch(cmds.clone());
        assert_eq!(batch_cmd, Cmd::Batch(cmds));
    }

    #[test]
    fn test_cmd_is_async() {
        assert!(Cmd::SaveName {
            name: "Ada".to_string()
        }
        .is_async());

        assert!(!Cmd::Countdown(CountdownCmd::StartTicker).is_async());
        assert!(!Cmd::PickQuote.is_async());
    }

    #[test]
    fn test_cmd_batch_is_async() {
        let sync_batch = Cmd::Batch(vec![Cmd::PickQuote]);
        assert!(!sync_batch.is_async());

        let async_batch = Cmd::Batch(vec![Cmd::SaveName {
            name: "Ada".to_string(),
        }]);
        assert!(async_batch.is_async());
    }

    #[test]
    fn test_cmd_serialization() {
        let cmd = Cmd::SaveName {
            name: "Ada".to_string(),
        };

        let serialized = serde_json::to_string(&cmd).unwrap();
        let deserialized: Cmd = serde_json::from_str(&serialized).unwrap();
        assert_eq!(cmd, deserialized);
    }
}
