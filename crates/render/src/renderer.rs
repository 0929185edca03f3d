use crate::frame::Frame;
use glam::Mat4;

/// Renderer-agnostic interface.
///
/// A renderer reads a [`Frame`] and produces output. It never writes camera
/// state back; the viewer session owns that.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame.
    fn render(&self, frame: &Frame) -> Self::Output;
}

/// Produces a human-readable dump of a frame: camera vectors and every
/// matrix the variant uploads. Used by the CLI and in tests.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

fn write_matrix(out: &mut String, name: &str, m: &Mat4) {
    out.push_str(&format!("{name}:\n"));
    // Row-major for reading; storage is column-major.
    for row in 0..4 {
        let r = m.row(row);
        out.push_str(&format!(
            "  [{:>9.4} {:>9.4} {:>9.4} {:>9.4}]\n",
            r.x, r.y, r.z, r.w
        ));
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, frame: &Frame) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "=== Frame (variant={}, t={:.3}s) ===\n",
            frame.variant, frame.elapsed
        ));
        let c = &frame.camera;
        out.push_str(&format!(
            "Camera: eye=({:.2}, {:.2}, {:.2}) gaze=({:.2}, {:.2}, {:.2}) up=({:.2}, {:.2}, {:.2})\n",
            c.eye.x, c.eye.y, c.eye.z, c.gaze.x, c.gaze.y, c.gaze.z, c.up.x, c.up.y, c.up.z
        ));
        out.push_str(&format!("Draw: {} vertices as triangles\n", frame.vertex_count));

        let u = &frame.uniforms;
        for name in frame.variant.uniform_names() {
            let m = match *name {
                "view" => &u.view,
                "projection" => &u.projection,
                _ => &u.model,
            };
            write_matrix(&mut out, name, m);
        }
        out
    }
}
