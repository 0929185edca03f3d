//! wgpu render backend for the cube viewer.
//!
//! Uploads the static cube once, compiles the vertex/fragment pair inside a
//! validation error scope, and draws all 36 vertices each frame.
//!
//! # Invariants
//! - The vertex buffer is written at creation and never again.
//! - Shader or pipeline validation failures are returned, never ignored.
//! - GPU objects are released pipeline first, then shaders, then buffers.

mod error;
mod gpu;
mod shaders;

pub use error::RenderError;
pub use gpu::{GpuUniforms, WgpuRenderer, vertex_layout};
pub use shaders::{FRAGMENT_SHADER, MODEL_VERTEX_SHADER, MVP_VERTEX_SHADER, vertex_shader};
