use crate::action::CameraAction;
use crate::key::{ArrowKey, KeyEvent, Modifiers};
use cubeview_camera::CameraState;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Distance one arrow press moves the eye or the gaze.
pub const DEFAULT_STEP: f32 = 0.05;

/// Which modifier turns an arrow press into a camera rotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotateModifier {
    #[default]
    Shift,
    Control,
}

impl RotateModifier {
    pub fn is_held(&self, modifiers: Modifiers) -> bool {
        match self {
            Self::Shift => modifiers.shift,
            Self::Control => modifiers.control,
        }
    }
}

/// Arrow-key lookup table.
///
/// | key   | move (gaze) | rotate (eye)        |
/// |-------|-------------|---------------------|
/// | left  | x + step    | x + step, z + step  |
/// | right | x - step    | x - step, z - step  |
/// | up    | y + step    | y + step, z + step  |
/// | down  | y - step    | y - step, z - step  |
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyMap {
    pub step: f32,
    pub rotate_modifier: RotateModifier,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            rotate_modifier: RotateModifier::default(),
        }
    }
}

impl KeyMap {
    pub fn new(step: f32, rotate_modifier: RotateModifier) -> Self {
        Self {
            step,
            rotate_modifier,
        }
    }

    /// The action an event maps to, or `None` for releases.
    pub fn action(&self, event: &KeyEvent) -> Option<CameraAction> {
        if !event.state.is_active() {
            return None;
        }
        let s = self.step;
        let action = if self.rotate_modifier.is_held(event.modifiers) {
            CameraAction::RotateEye(match event.key {
                ArrowKey::Left => Vec3::new(s, 0.0, s),
                ArrowKey::Right => Vec3::new(-s, 0.0, -s),
                ArrowKey::Up => Vec3::new(0.0, s, s),
                ArrowKey::Down => Vec3::new(0.0, -s, -s),
            })
        } else {
            CameraAction::MoveGaze(match event.key {
                ArrowKey::Left => Vec3::new(s, 0.0, 0.0),
                ArrowKey::Right => Vec3::new(-s, 0.0, 0.0),
                ArrowKey::Up => Vec3::new(0.0, s, 0.0),
                ArrowKey::Down => Vec3::new(0.0, -s, 0.0),
            })
        };
        Some(action)
    }
}

/// A camera transition: the action plus the state before and after it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraChange {
    pub action: CameraAction,
    pub before: CameraState,
    pub after: CameraState,
}

/// Pure transition `(camera, key event) -> new camera`.
///
/// Returns `None` when the event causes no change.
pub fn apply_key(map: &KeyMap, camera: &CameraState, event: &KeyEvent) -> Option<CameraChange> {
    let action = map.action(event)?;
    Some(CameraChange {
        action,
        before: *camera,
        after: action.apply(*camera),
    })
}
