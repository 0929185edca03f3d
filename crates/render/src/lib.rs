//! Rendering Adapter: renderer-agnostic description of one frame.
//!
//! # Invariants
//! - Renderers read camera state; they never mutate it.
//! - Which uniforms a frame carries is decided by one [`Variant`] flag,
//!   not by separate renderer copies.

mod frame;
mod renderer;
mod variant;

pub use frame::{CLEAR_COLOR, Frame, FrameUniforms};
pub use renderer::{DebugTextRenderer, Renderer};
pub use variant::Variant;

pub fn crate_info() -> &'static str {
    "cubeview-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
