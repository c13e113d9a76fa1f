//! Key bindings to session commands

use anyhow::Result;
use retrace_core::{KeyChord, KeyCode, Modifiers};
use retrace_recorder::SessionCommand;

use crate::config::KeysConfig;

/// Maps key-downs to session commands.
#[derive(Clone, Debug)]
pub struct Keymap {
    bindings: Vec<(KeyChord, SessionCommand)>,
}

impl Keymap {
    pub fn from_config(keys: &KeysConfig) -> Result<Self> {
        Ok(Self {
            bindings: keys.chords()?,
        })
    }

    /// Command bound to this exact key and modifier combination
    pub fn lookup(&self, key: KeyCode, modifiers: Modifiers) -> Option<SessionCommand> {
        self.bindings
            .iter()
            .find(|(chord, _)| chord.matches(key, modifiers))
            .map(|(_, command)| *command)
    }

    pub fn bindings(&self) -> &[(KeyChord, SessionCommand)] {
        &self.bindings
    }
}
