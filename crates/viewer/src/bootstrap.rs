use crate::error::{BootstrapError, FrameError};
use cubeview_render::{FrameUniforms, Variant};

/// Fixed window parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSpec {
    pub title: &'static str,
    pub width: u32,
    pub height: u32,
}

pub const WINDOW_SPEC: WindowSpec = WindowSpec {
    title: "CISC3620",
    width: 800,
    height: 600,
};

impl WindowSpec {
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

/// Something that can be drawn into once per frame.
pub trait FrameTarget {
    /// Human-readable graphics API / adapter / driver description.
    fn describe(&self) -> String;

    /// Clear, draw the cube with `uniforms`, and present.
    fn draw(&mut self, uniforms: &FrameUniforms) -> Result<(), FrameError>;

    /// Ask the platform for another frame. Backends without a window ignore this.
    fn request_redraw(&self) {}
}

/// Creates the window and GPU context.
///
/// `Target` is whatever the backend needs to create a window (the winit
/// event loop on desktop, `()` in tests).
pub trait ContextFactory {
    type Target: ?Sized;
    type Context: FrameTarget;

    fn create(
        &mut self,
        target: &Self::Target,
        spec: &WindowSpec,
        variant: Variant,
    ) -> Result<Self::Context, BootstrapError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_window() {
        assert_eq!(WINDOW_SPEC.title, "CISC3620");
        assert_eq!((WINDOW_SPEC.width, WINDOW_SPEC.height), (800, 600));
        assert!((WINDOW_SPEC.aspect() - 4.0 / 3.0).abs() < 1e-6);
    }
}
