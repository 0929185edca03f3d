use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArrowKey {
    Left,
    Right,
    Up,
    Down,
}

impl ArrowKey {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyState {
    Pressed,
    Repeated,
    Released,
}

impl KeyState {
    /// Press and auto-repeat both count as activation.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Released)
    }
}

/// Modifier keys held at the instant of a key event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        control: false,
    };
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
    };
    pub const CONTROL: Self = Self {
        shift: false,
        control: true,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: ArrowKey,
    pub state: KeyState,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn pressed(key: ArrowKey, modifiers: Modifiers) -> Self {
        Self {
            key,
            state: KeyState::Pressed,
            modifiers,
        }
    }

    pub fn repeated(key: ArrowKey, modifiers: Modifiers) -> Self {
        Self {
            key,
            state: KeyState::Repeated,
            modifiers,
        }
    }

    pub fn released(key: ArrowKey, modifiers: Modifiers) -> Self {
        Self {
            key,
            state: KeyState::Released,
            modifiers,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseKeyError {
    #[error("empty key event")]
    Empty,
    #[error("unknown key {0:?}, expected left, right, up or down")]
    UnknownKey(String),
    #[error("unknown prefix {0:?}, expected shift, ctrl, repeat or release")]
    UnknownPrefix(String),
}

/// Parses `[prefix+]*key`, e.g. `left`, `shift+up`, `ctrl+release+down`.
///
/// Prefixes are `shift`, `ctrl`/`control`, `repeat` and `release`;
/// matching is case-insensitive.
impl FromStr for KeyEvent {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseKeyError::Empty);
        }
        let mut parts: Vec<&str> = s.split('+').map(str::trim).collect();
        let key_part = parts.pop().ok_or(ParseKeyError::Empty)?;
        let key = match key_part.to_ascii_lowercase().as_str() {
            "left" => ArrowKey::Left,
            "right" => ArrowKey::Right,
            "up" => ArrowKey::Up,
            "down" => ArrowKey::Down,
            "" => return Err(ParseKeyError::Empty),
            _ => return Err(ParseKeyError::UnknownKey(key_part.to_string())),
        };

        let mut event = KeyEvent::pressed(key, Modifiers::NONE);
        for prefix in parts {
            match prefix.to_ascii_lowercase().as_str() {
                "shift" => event.modifiers.shift = true,
                "ctrl" | "control" => event.modifiers.control = true,
                "repeat" => event.state = KeyState::Repeated,
                "release" => event.state = KeyState::Released,
                _ => return Err(ParseKeyError::UnknownPrefix(prefix.to_string())),
            }
        }
        Ok(event)
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.control {
            f.write_str("ctrl+")?;
        }
        if self.modifiers.shift {
            f.write_str("shift+")?;
        }
        match self.state {
            KeyState::Pressed => {}
            KeyState::Repeated => f.write_str("repeat+")?,
            KeyState::Released => f.write_str("release+")?,
        }
        f.write_str(self.key.name())
    }
}
