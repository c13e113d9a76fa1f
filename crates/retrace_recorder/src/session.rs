//! Session commands.
//!
//! Hosts map their own input (key bindings, menu items) onto these
//! commands and hand them to [`CaptureController::apply`].
//!
//! [`CaptureController::apply`]: crate::CaptureController::apply

use std::fmt;
use std::str::FromStr;

/// A command that changes the recording session as a whole.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionCommand {
    /// Clear the canvas, discard the recorded path and cancel any replay.
    Reset,
    /// Clear the canvas and unset the live position; keep the path.
    ClearVisible,
    /// Replay the recorded path from its first sample.
    StartReplay,
    /// Serialize the recorded path to interchange text.
    Export,
}

impl SessionCommand {
    pub const ALL: [SessionCommand; 4] = [
        SessionCommand::Reset,
        SessionCommand::ClearVisible,
        SessionCommand::StartReplay,
        SessionCommand::Export,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SessionCommand::Reset => "reset",
            SessionCommand::ClearVisible => "clear",
            SessionCommand::StartReplay => "replay",
            SessionCommand::Export => "export",
        }
    }
}

impl fmt::Display for SessionCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SessionCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|command| command.name() == s)
            .ok_or_else(|| format!("unknown session command '{s}'"))
    }
}

/// What a successfully applied command did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Reset { cancelled_replay: bool },
    Cleared,
    ReplayStarted { samples: usize, replaced: bool },
    Exported(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_names_parse_back() {
        for command in SessionCommand::ALL {
            assert_eq!(command.name().parse::<SessionCommand>(), Ok(command));
        }
        assert!("rewind".parse::<SessionCommand>().is_err());
    }
}
