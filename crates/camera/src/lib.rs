//! Camera: look-at state for the view matrix and a fixed perspective frustum.
//!
//! # Invariants
//! - Camera state is a plain value; nothing here mutates shared globals.
//! - Matrices follow wgpu clip conventions (right-handed, depth in `[0, 1]`).

mod projection;
mod state;

pub use projection::Projection;
pub use state::CameraState;
