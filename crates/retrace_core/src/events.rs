//! Input events
//!
//! Pointer and keyboard events delivered to the recorder between ticks,
//! plus the key chords used to bind keys to session commands.

use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, Result};
use crate::point::Point;

/// An input event, or the animation tick that separates them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerDown(Point),
    PointerMove(Point),
    KeyDown { key: KeyCode, modifiers: Modifiers },
    /// One step of the fixed-rate animation clock
    Tick,
}

impl InputEvent {
    /// Position carried by a pointer event
    pub fn pointer_position(&self) -> Option<Point> {
        match self {
            InputEvent::PointerDown(p) | InputEvent::PointerMove(p) => Some(*p),
            _ => None,
        }
    }
}

/// Virtual key codes (platform-agnostic)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct KeyCode(pub u32);

impl KeyCode {
    // Letters and digits use their uppercase ASCII value.
    pub const C: KeyCode = KeyCode(0x43);
    pub const R: KeyCode = KeyCode(0x52);
    pub const Z: KeyCode = KeyCode(0x5A);

    pub const BACKSPACE: KeyCode = KeyCode(0x08);
    pub const TAB: KeyCode = KeyCode(0x09);
    pub const ENTER: KeyCode = KeyCode(0x0D);
    pub const ESCAPE: KeyCode = KeyCode(0x1B);
    pub const SPACE: KeyCode = KeyCode(0x20);
    pub const DELETE: KeyCode = KeyCode(0x7F);

    /// Look up a key by name.
    ///
    /// Accepts a single letter or digit (case-insensitive) or one of
    /// `space`, `enter`, `tab`, `escape`, `backspace`, `delete`.
    pub fn from_name(name: &str) -> Result<Self> {
        let lower = name.to_ascii_lowercase();
        let named = match lower.as_str() {
            "space" | " " => Some(Self::SPACE),
            "enter" | "return" => Some(Self::ENTER),
            "tab" => Some(Self::TAB),
            "escape" | "esc" => Some(Self::ESCAPE),
            "backspace" => Some(Self::BACKSPACE),
            "delete" | "del" => Some(Self::DELETE),
            _ => None,
        };
        if let Some(code) = named {
            return Ok(code);
        }

        let mut chars = lower.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphanumeric() => {
                Ok(KeyCode(c.to_ascii_uppercase() as u32))
            }
            _ => Err(CoreError::UnknownKey(name.to_string())),
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::SPACE => f.write_str("space"),
            Self::ENTER => f.write_str("enter"),
            Self::TAB => f.write_str("tab"),
            Self::ESCAPE => f.write_str("escape"),
            Self::BACKSPACE => f.write_str("backspace"),
            Self::DELETE => f.write_str("delete"),
            KeyCode(code) => match char::from_u32(code) {
                Some(c) if c.is_ascii_alphanumeric() => {
                    write!(f, "{}", c.to_ascii_lowercase())
                }
                _ => write!(f, "key#{code}"),
            },
        }
    }
}

/// Modifier keys held during a key-down.
///
/// Bindings compare the whole set, so `ctrl+c` and `c` never collide.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    held: u8,
}

const SHIFT: u8 = 1;
const CTRL: u8 = 1 << 1;
const ALT: u8 = 1 << 2;
const META: u8 = 1 << 3;

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { held: 0 };

    pub const fn new(shift: bool, ctrl: bool, alt: bool, meta: bool) -> Self {
        Self {
            held: (shift as u8 * SHIFT)
                | (ctrl as u8 * CTRL)
                | (alt as u8 * ALT)
                | (meta as u8 * META),
        }
    }

    pub const fn shift(&self) -> bool {
        self.held & SHIFT != 0
    }

    pub const fn ctrl(&self) -> bool {
        self.held & CTRL != 0
    }

    pub const fn alt(&self) -> bool {
        self.held & ALT != 0
    }

    /// Cmd on macOS, Win elsewhere
    pub const fn meta(&self) -> bool {
        self.held & META != 0
    }
}

/// A key plus the exact modifier set that must be held with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub key: KeyCode,
    pub modifiers: Modifiers,
}

impl KeyChord {
    pub const fn new(key: KeyCode, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Whether a key-down with these exact modifiers triggers the chord
    pub fn matches(&self, key: KeyCode, modifiers: Modifiers) -> bool {
        self.key == key && self.modifiers == modifiers
    }
}

impl FromStr for KeyChord {
    type Err = CoreError;

    /// Parse `[ctrl+|shift+|alt+|meta+]<key>`, e.g. `ctrl+c` or `space`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CoreError::InvalidBinding(s.to_string()));
        }

        let mut parts: Vec<&str> = trimmed.split('+').collect();
        let key_name = parts
            .pop()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| CoreError::InvalidBinding(s.to_string()))?;

        let (mut shift, mut ctrl, mut alt, mut meta) = (false, false, false, false);
        for part in parts {
            match part.to_ascii_lowercase().as_str() {
                "shift" => shift = true,
                "ctrl" | "control" => ctrl = true,
                "alt" | "option" => alt = true,
                "meta" | "cmd" | "super" => meta = true,
                _ => return Err(CoreError::InvalidBinding(s.to_string())),
            }
        }

        Ok(Self {
            key: KeyCode::from_name(key_name)?,
            modifiers: Modifiers::new(shift, ctrl, alt, meta),
        })
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.ctrl() {
            f.write_str("ctrl+")?;
        }
        if self.modifiers.shift() {
            f.write_str("shift+")?;
        }
        if self.modifiers.alt() {
            f.write_str("alt+")?;
        }
        if self.modifiers.meta() {
            f.write_str("meta+")?;
        }
        write!(f, "{}", self.key)
    }
}
