use cubeview_render::Variant;

/// Vertex shader for [`Variant::Spin`]: object space goes straight to clip
/// space through `model`.
pub const MODEL_VERTEX_SHADER: &str = r#"
struct Uniforms {
    model: mat4x4<f32>,
    view: mat4x4<f32>,
    projection: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) color: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec3<f32>,
};

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = uniforms.model * vec4<f32>(vertex.position, 1.0);
    out.color = vertex.color;
    return out;
}
"#;

/// Vertex shader for [`Variant::LookAt`]: `projection * view * model`.
pub const MVP_VERTEX_SHADER: &str = r#"
struct Uniforms {
    model: mat4x4<f32>,
    view: mat4x4<f32>,
    projection: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) color: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec3<f32>,
};

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = uniforms.projection * uniforms.view * uniforms.model
        * vec4<f32>(vertex.position, 1.0);
    out.color = vertex.color;
    return out;
}
"#;

/// Pass-through fragment shader; alpha is fixed at 1.
pub const FRAGMENT_SHADER: &str = r#"
struct FragmentInput {
    @location(0) color: vec3<f32>,
};

struct FragmentOutput {
    @location(0) out_color: vec4<f32>,
};

@fragment
fn fs_main(in: FragmentInput) -> FragmentOutput {
    var out: FragmentOutput;
    out.out_color = vec4<f32>(in.color, 1.0);
    return out;
}
"#;

pub fn vertex_shader(variant: Variant) -> &'static str {
    match variant {
        Variant::Spin => MODEL_VERTEX_SHADER,
        Variant::LookAt => MVP_VERTEX_SHADER,
    }
}
