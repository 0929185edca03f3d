use crate::variant::Variant;
use cubeview_camera::{CameraState, Projection};
use cubeview_geometry::CUBE_VERTEX_COUNT;
use glam::Mat4;
use serde::{Deserialize, Serialize};

/// Background fill, RGBA.
pub const CLEAR_COLOR: [f64; 4] = [0.85, 0.65, 0.65, 0.8];

/// The three matrices uploaded before the draw call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameUniforms {
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
}

impl Default for FrameUniforms {
    fn default() -> Self {
        Self {
            model: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
        }
    }
}

impl FrameUniforms {
    /// Uniforms for `variant` at `elapsed` seconds. View and projection are
    /// identity unless the variant consumes them.
    pub fn compute(
        variant: Variant,
        camera: &CameraState,
        projection: &Projection,
        elapsed: f32,
    ) -> Self {
        let model = variant.model_matrix(elapsed);
        if variant.uses_view_projection() {
            Self {
                model,
                view: camera.view_matrix(),
                projection: projection.matrix(),
            }
        } else {
            Self {
                model,
                ..Self::default()
            }
        }
    }

    /// `projection · view · model`, the full clip transform.
    pub fn clip_from_object(&self) -> Mat4 {
        self.projection * self.view * self.model
    }
}

/// Everything one frame needs: settings, camera snapshot and derived uniforms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub variant: Variant,
    pub elapsed: f32,
    pub camera: CameraState,
    pub uniforms: FrameUniforms,
    pub vertex_count: u32,
}

impl Frame {
    pub fn new(variant: Variant, camera: CameraState, projection: &Projection, elapsed: f32) -> Self {
        Self {
            variant,
            elapsed,
            camera,
            uniforms: FrameUniforms::compute(variant, &camera, projection, elapsed),
            vertex_count: CUBE_VERTEX_COUNT as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn spin_keeps_view_and_projection_identity() {
        let cam = CameraState::new(Vec3::new(4.0, 1.0, 2.0), Vec3::ONE, Vec3::Y);
        let u = FrameUniforms::compute(Variant::Spin, &cam, &Projection::default(), 2.0);
        assert_eq!(u.view, Mat4::IDENTITY);
        assert_eq!(u.projection, Mat4::IDENTITY);
        assert_eq!(u.model, Variant::Spin.model_matrix(2.0));
    }

    #[test]
    fn look_at_uses_camera_and_projection() {
        let cam = CameraState::default();
        let proj = Projection::default();
        let u = FrameUniforms::compute(Variant::LookAt, &cam, &proj, 0.0);
        assert_eq!(u.view, cam.view_matrix());
        assert_eq!(u.projection, proj.matrix());
        assert_eq!(u.clip_from_object(), proj.matrix() * cam.view_matrix() * u.model);
    }

    #[test]
    fn cube_is_in_front_of_default_camera() {
        let frame = Frame::new(
            Variant::LookAt,
            CameraState::default(),
            &Projection::default(),
            0.0,
        );
        let clip = frame.uniforms.clip_from_object() * glam::Vec4::new(0.25, 0.25, 0.0, 1.0);
        let ndc = clip / clip.w;
        assert!(clip.w > 0.0);
        assert!(ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0);
        assert!((0.0..=1.0).contains(&ndc.z));
    }

    #[test]
    fn frame_draws_whole_cube() {
        let frame = Frame::new(Variant::Spin, CameraState::default(), &Projection::default(), 0.0);
        assert_eq!(frame.vertex_count, 36);
    }

    #[test]
    fn clear_color_is_fixed() {
        assert_eq!(CLEAR_COLOR, [0.85, 0.65, 0.65, 0.8]);
    }
}
