//! Static geometry: the cube mesh uploaded once at startup.
//!
//! # Invariants
//! - Vertex data is fixed at compile time and never rewritten after upload.
//! - Every vertex is interleaved as position (3 × f32) then color (3 × f32).

mod cube;
mod vertex;

pub use cube::{CUBE_VERTICES, CUBE_VERTEX_COUNT, cube_bytes};
pub use vertex::{
    COLOR_OFFSET, FLOATS_PER_VERTEX, POSITION_OFFSET, VERTEX_STRIDE, Vertex, buffer_size,
};

pub fn crate_info() -> &'static str {
    "cubeview-geometry v0.1.0"
}
