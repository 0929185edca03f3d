//! Input: arrow-key events mapped to camera state transitions.
//!
//! # Invariants
//! - Mapping is a pure function of (camera state, key event); no window is needed.
//! - Key releases never change camera state.
//! - The move/rotate mode is read from the modifier bit of each event; no mode is stored.

pub mod action;
pub mod key;
pub mod mapping;

pub use action::CameraAction;
pub use key::{ArrowKey, KeyEvent, KeyState, Modifiers, ParseKeyError};
pub use mapping::{CameraChange, DEFAULT_STEP, KeyMap, RotateModifier, apply_key};
