use crate::bootstrap::WindowSpec;
use cubeview_camera::{CameraState, Projection};
use cubeview_input::{CameraChange, KeyEvent, KeyMap, apply_key};
use cubeview_render::{Frame, FrameUniforms, Variant};
use glam::{Mat4, Vec3};
use std::time::Instant;

/// Settings chosen at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewerConfig {
    pub variant: Variant,
    pub key_map: KeyMap,
}

/// Mutable per-run state: the camera and the start time.
///
/// `view` is the last finite view matrix. A camera whose view has no basis
/// keeps drawing with it until a later key restores one.
#[derive(Debug, Clone)]
pub struct Session {
    config: ViewerConfig,
    camera: CameraState,
    view: Mat4,
    projection: Projection,
    started: Instant,
}

fn fmt_vec(v: Vec3) -> String {
    format!("({:.2}, {:.2}, {:.2})", v.x, v.y, v.z)
}

impl Session {
    pub fn new(config: ViewerConfig, spec: &WindowSpec) -> Self {
        let camera = CameraState::default();
        Self {
            config,
            camera,
            view: camera.view_matrix(),
            projection: Projection::for_size(spec.width, spec.height),
            started: Instant::now(),
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Apply a key event. Returns the change, if any, after committing it.
    pub fn handle_key(&mut self, event: &KeyEvent) -> Option<CameraChange> {
        let change = apply_key(&self.config.key_map, &self.camera, event)?;
        self.camera = change.after;
        match self.camera.try_view_matrix() {
            Some(view) => self.view = view,
            None => tracing::warn!(
                eye = %fmt_vec(self.camera.eye),
                gaze = %fmt_vec(self.camera.gaze),
                "view direction undefined, keeping previous view"
            ),
        }
        tracing::info!(
            key = %event,
            "{} camera {}: eye={} gaze={}",
            change.action.verb(),
            event.key.name(),
            fmt_vec(self.camera.eye),
            fmt_vec(self.camera.gaze),
        );
        Some(change)
    }

    /// Wall-clock seconds since the session started.
    pub fn elapsed(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }

    pub fn frame_at(&self, elapsed: f32) -> Frame {
        let mut frame = Frame::new(self.config.variant, self.camera, &self.projection, elapsed);
        if self.config.variant.uses_view_projection() {
            frame.uniforms.view = self.view;
        }
        frame
    }

    pub fn uniforms_at(&self, elapsed: f32) -> FrameUniforms {
        self.frame_at(elapsed).uniforms
    }
}
