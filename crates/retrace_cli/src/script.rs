//! Input scripts
//!
//! A script is a JSON array of events replayed against a session in order:
//!
//! ```json
//! [
//!   {"type": "tick"},
//!   {"type": "pointer_move", "x": 10, "y": 10},
//!   {"type": "key_down", "key": "c", "ctrl": true}
//! ]
//! ```

use anyhow::{Context, Result};
use retrace_core::{InputEvent, KeyCode, Modifiers, Point};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One scripted event as written in the file
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    Tick,
    PointerDown {
        x: f32,
        y: f32,
    },
    PointerMove {
        x: f32,
        y: f32,
    },
    KeyDown {
        key: String,
        #[serde(default)]
        shift: bool,
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        alt: bool,
        #[serde(default)]
        meta: bool,
    },
}

impl ScriptEvent {
    pub fn to_input(&self) -> Result<InputEvent> {
        Ok(match self {
            ScriptEvent::Tick => InputEvent::Tick,
            ScriptEvent::PointerDown { x, y } => InputEvent::PointerDown(Point::new(*x, *y)),
            ScriptEvent::PointerMove { x, y } => InputEvent::PointerMove(Point::new(*x, *y)),
            ScriptEvent::KeyDown {
                key,
                shift,
                ctrl,
                alt,
                meta,
            } => InputEvent::KeyDown {
                key: KeyCode::from_name(key)?,
                modifiers: Modifiers::new(*shift, *ctrl, *alt, *meta),
            },
        })
    }
}

/// Parse script text into input events
pub fn parse(content: &str) -> Result<Vec<InputEvent>> {
    let events: Vec<ScriptEvent> = serde_json::from_str(content)?;
    events
        .iter()
        .enumerate()
        .map(|(index, event)| {
            event
                .to_input()
                .with_context(|| format!("Bad event at index {index}"))
        })
        .collect()
}

/// Read and parse a script file
pub fn load(path: &Path) -> Result<Vec<InputEvent>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_event_kinds() {
        let events = parse(
            r#"[
                {"type": "tick"},
                {"type": "pointer_down", "x": 1, "y": 2},
                {"type": "pointer_move", "x": 3.5, "y": 4},
                {"type": "key_down", "key": "c", "ctrl": true},
                {"type": "key_down", "key": "space"}
            ]"#,
        )
        .unwrap();

        assert_eq!(events.len(), 5);
        assert_eq!(events[0], InputEvent::Tick);
        assert_eq!(events[1], InputEvent::PointerDown(Point::new(1.0, 2.0)));
        assert_eq!(events[2], InputEvent::PointerMove(Point::new(3.5, 4.0)));
        assert_eq!(
            events[3],
            InputEvent::KeyDown {
                key: KeyCode::C,
                modifiers: Modifiers::new(false, true, false, false),
            }
        );
        assert_eq!(
            events[4],
            InputEvent::KeyDown {
                key: KeyCode::SPACE,
                modifiers: Modifiers::NONE,
            }
        );
    }

    #[test]
    fn test_unknown_key_names_the_event() {
        let err = parse(r#"[{"type": "tick"}, {"type": "key_down", "key": "f13"}]"#).unwrap_err();
        assert!(err.to_string().contains("index 1"));
    }

    #[test]
    fn test_unknown_event_type_fails() {
        assert!(parse(r#"[{"type": "wheel"}]"#).is_err());
    }
}
