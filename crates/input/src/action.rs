use cubeview_camera::CameraState;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A camera adjustment produced by a key event.
///
/// The viewer consumes actions, never raw key events, so the same
/// transitions apply to any windowing backend (or none, in tests).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CameraAction {
    /// Shift the look-at target by a delta ("move camera").
    MoveGaze(Vec3),
    /// Shift the eye position by a delta ("rotate camera").
    RotateEye(Vec3),
}

impl CameraAction {
    /// New camera state with this action applied.
    pub fn apply(&self, camera: CameraState) -> CameraState {
        match *self {
            Self::MoveGaze(d) => camera.with_gaze_offset(d),
            Self::RotateEye(d) => camera.with_eye_offset(d),
        }
    }

    /// Short present-participle label used in log lines.
    pub fn verb(&self) -> &'static str {
        match self {
            Self::MoveGaze(_) => "moving",
            Self::RotateEye(_) => "rotating",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_gaze_leaves_eye() {
        let cam = CameraState::default();
        let next = CameraAction::MoveGaze(Vec3::X).apply(cam);
        assert_eq!(next.eye, cam.eye);
        assert_eq!(next.gaze, Vec3::X);
        assert_eq!(next.up, cam.up);
    }

    #[test]
    fn rotate_eye_leaves_gaze() {
        let cam = CameraState::default();
        let next = CameraAction::RotateEye(Vec3::new(1.0, 0.0, 1.0)).apply(cam);
        assert_eq!(next.gaze, cam.gaze);
        assert_eq!(next.eye, Vec3::new(1.0, 0.0, 4.0));
    }
}
