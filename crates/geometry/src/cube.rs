use crate::vertex::{Vertex, buffer_size};

const RED: [f32; 3] = [1.0, 0.0, 0.0];
const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
const BLUE: [f32; 3] = [0.0, 0.0, 1.0];

const fn v(x: f32, y: f32, z: f32, color: [f32; 3]) -> Vertex {
    Vertex::new([x, y, z], color)
}

pub const CUBE_VERTEX_COUNT: usize = 36;

/// Twelve triangles forming the rectangular prism, two per side.
#[rustfmt::skip]
pub static CUBE_VERTICES: [Vertex; CUBE_VERTEX_COUNT] = [
    // Front
    v(0.0, 0.0,  0.5, RED), v(0.5, 0.0,  0.5, GREEN), v(0.0, 0.5,  0.5, BLUE),
    v(0.5, 0.5,  0.5, RED), v(0.5, 0.0,  0.5, GREEN), v(0.0, 0.5,  0.5, BLUE),
    // Back
    v(0.0, 0.0, -0.5, RED), v(0.5, 0.0, -0.5, GREEN), v(0.0, 0.5, -0.5, BLUE),
    v(0.5, 0.5, -0.5, RED), v(0.5, 0.0, -0.5, GREEN), v(0.0, 0.5, -0.5, BLUE),
    // Left
    v(0.0, 0.0, -0.5, RED), v(0.5, 0.0, -0.5, GREEN), v(0.0, 0.5,  0.5, BLUE),
    v(0.0, 0.0,  0.5, RED), v(0.5, 0.0, -0.5, GREEN), v(0.5, 0.0,  0.5, BLUE),
    // Right
    v(0.5, 0.0, -0.5, RED), v(0.5, 0.5, -0.5, GREEN), v(0.5, 0.0,  0.5, BLUE),
    v(0.5, 0.0,  0.5, RED), v(0.5, 0.5, -0.5, GREEN), v(0.5, 0.5,  0.5, BLUE),
    // Top
    v(0.5, 0.5, -0.5, RED), v(0.5, 0.5,  0.5, GREEN), v(0.0, 0.5, -0.5, BLUE),
    v(0.0, 0.5, -0.5, RED), v(0.0, 0.5,  0.5, GREEN), v(0.5, 0.5,  0.5, BLUE),
    // Bottom
    v(0.5, 0.0, -0.5, RED), v(0.5, 0.0,  0.5, GREEN), v(0.0, 0.0, -0.5, BLUE),
    v(0.0, 0.0, -0.5, RED), v(0.0, 0.0,  0.5, GREEN), v(0.5, 0.0,  0.5, BLUE),
];

/// Raw bytes of the cube mesh, ready for a single static upload.
pub fn cube_bytes() -> &'static [u8] {
    bytemuck::cast_slice(&CUBE_VERTICES)
}

const _: () = assert!(buffer_size(CUBE_VERTEX_COUNT) == 864);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertex::FLOATS_PER_VERTEX;

    #[test]
    fn twelve_triangles() {
        assert_eq!(CUBE_VERTICES.len() % 3, 0);
        assert_eq!(CUBE_VERTICES.len() / 3, 12);
    }

    #[test]
    fn upload_size_is_count_times_six_floats() {
        let expected = CUBE_VERTEX_COUNT * FLOATS_PER_VERTEX * std::mem::size_of::<f32>();
        assert_eq!(cube_bytes().len(), expected);
        assert_eq!(buffer_size(CUBE_VERTEX_COUNT), expected as u64);
    }

    #[test]
    fn colors_cycle_red_green_blue() {
        for (i, vertex) in CUBE_VERTICES.iter().enumerate() {
            let expected = [RED, GREEN, BLUE][i % 3];
            assert_eq!(vertex.color, expected, "vertex {i}");
        }
    }

    #[test]
    fn positions_stay_in_prism_bounds() {
        for vertex in &CUBE_VERTICES {
            let [x, y, z] = vertex.position;
            assert!((0.0..=0.5).contains(&x));
            assert!((0.0..=0.5).contains(&y));
            assert!(z == 0.5 || z == -0.5);
        }
    }
}
