use bytemuck::{Pod, Zeroable};

/// Number of f32 components in one interleaved vertex.
pub const FLOATS_PER_VERTEX: usize = 6;

/// Byte distance between consecutive vertices.
pub const VERTEX_STRIDE: u64 = (FLOATS_PER_VERTEX * std::mem::size_of::<f32>()) as u64;

/// Byte offset of the `position` attribute.
pub const POSITION_OFFSET: u64 = 0;

/// Byte offset of the `color` attribute, directly after the three position floats.
pub const COLOR_OFFSET: u64 = (3 * std::mem::size_of::<f32>()) as u64;

/// One interleaved vertex: position followed by RGB color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    pub const fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }
}

/// Byte size of a vertex buffer holding `vertex_count` vertices.
pub const fn buffer_size(vertex_count: usize) -> u64 {
    (vertex_count * FLOATS_PER_VERTEX * std::mem::size_of::<f32>()) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_matches_struct_size() {
        assert_eq!(VERTEX_STRIDE, std::mem::size_of::<Vertex>() as u64);
        assert_eq!(VERTEX_STRIDE, 24);
    }

    #[test]
    fn color_follows_position() {
        assert_eq!(POSITION_OFFSET, 0);
        assert_eq!(COLOR_OFFSET, 12);
        assert!(COLOR_OFFSET + 12 <= VERTEX_STRIDE);
    }

    #[test]
    fn vertex_casts_to_six_floats() {
        let v = Vertex::new([1.0, 2.0, 3.0], [0.1, 0.2, 0.3]);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&v));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 0.1, 0.2, 0.3]);
    }
}
