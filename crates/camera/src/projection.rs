use glam::Mat4;
use serde::{Deserialize, Serialize};

/// Perspective frustum parameters. `fov_y` is in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    /// 45° vertical field of view, near 0.1, far 100.
    pub fn for_aspect(aspect: f32) -> Self {
        Self {
            fov_y: 45.0_f32.to_radians(),
            aspect,
            near: 0.1,
            far: 100.0,
        }
    }

    pub fn for_size(width: u32, height: u32) -> Self {
        Self::for_aspect(width as f32 / height.max(1) as f32)
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::for_size(800, 600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn default_is_800_by_600() {
        let p = Projection::default();
        assert!((p.aspect - 800.0 / 600.0).abs() < f32::EPSILON);
        assert!((p.fov_y - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
        assert_eq!(p.near, 0.1);
        assert_eq!(p.far, 100.0);
    }

    #[test]
    fn matrix_matches_reference() {
        let f = 1.0 / (22.5_f64.to_radians()).tan();
        let aspect = 800.0 / 600.0;
        let (near, far) = (0.1_f64, 100.0_f64);
        let r = far / (near - far);
        let reference = Mat4::from_cols(
            Vec4::new((f / aspect) as f32, 0.0, 0.0, 0.0),
            Vec4::new(0.0, f as f32, 0.0, 0.0),
            Vec4::new(0.0, 0.0, r as f32, -1.0),
            Vec4::new(0.0, 0.0, (r * near) as f32, 0.0),
        );
        let m = Projection::default().matrix();
        assert!(m.abs_diff_eq(reference, 1e-5), "{m:?}");
        assert!((m.x_axis.x - 1.810_660_2).abs() < 1e-5);
        assert!((m.y_axis.y - 2.414_213_5).abs() < 1e-5);
    }

    #[test]
    fn near_and_far_map_to_depth_range() {
        let m = Projection::default().matrix();
        let near = m * Vec4::new(0.0, 0.0, -0.1, 1.0);
        let far = m * Vec4::new(0.0, 0.0, -100.0, 1.0);
        assert!((near.z / near.w).abs() < 1e-5);
        assert!((far.z / far.w - 1.0).abs() < 1e-4);
    }

    #[test]
    fn zero_height_does_not_divide_by_zero() {
        let p = Projection::for_size(800, 0);
        assert!(p.aspect.is_finite());
    }
}
