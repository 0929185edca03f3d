use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Look-at camera: the eye position, the point it looks at, and the up hint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    pub eye: Vec3,
    pub gaze: Vec3,
    pub up: Vec3,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 3.0),
            gaze: Vec3::ZERO,
            up: Vec3::new(0.0, 0.1, 0.0),
        }
    }
}

impl CameraState {
    pub fn new(eye: Vec3, gaze: Vec3, up: Vec3) -> Self {
        Self { eye, gaze, up }
    }

    /// Copy with `eye` shifted by `delta`.
    pub fn with_eye_offset(self, delta: Vec3) -> Self {
        Self {
            eye: self.eye + delta,
            ..self
        }
    }

    /// Copy with `gaze` shifted by `delta`.
    pub fn with_gaze_offset(self, delta: Vec3) -> Self {
        Self {
            gaze: self.gaze + delta,
            ..self
        }
    }

    /// Look-at view from `eye` toward `gaze`.
    ///
    /// Positions are not clamped. When `eye == gaze`, or the view direction
    /// is parallel to `up`, the basis is undefined and the result is NaN.
    /// Use [`CameraState::try_view_matrix`] where that matters.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.gaze, self.up)
    }

    /// The view matrix, or `None` when it has no finite basis.
    pub fn try_view_matrix(&self) -> Option<Mat4> {
        let view = self.view_matrix();
        view.is_finite().then_some(view)
    }
}
