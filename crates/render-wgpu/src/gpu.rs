use crate::error::RenderError;
use crate::shaders;
use bytemuck::{Pod, Zeroable};
use cubeview_geometry::{
    COLOR_OFFSET, CUBE_VERTEX_COUNT, POSITION_OFFSET, VERTEX_STRIDE, cube_bytes,
};
use cubeview_render::{CLEAR_COLOR, FrameUniforms, Variant};
use std::num::NonZeroU64;
use wgpu::util::DeviceExt;

/// Uniform block as laid out in the WGSL `Uniforms` struct.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GpuUniforms {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

impl From<&FrameUniforms> for GpuUniforms {
    fn from(u: &FrameUniforms) -> Self {
        Self {
            model: u.model.to_cols_array_2d(),
            view: u.view.to_cols_array_2d(),
            projection: u.projection.to_cols_array_2d(),
        }
    }
}

impl Default for GpuUniforms {
    fn default() -> Self {
        Self::from(&FrameUniforms::default())
    }
}

static VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 2] = [
    // position
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x3,
        offset: POSITION_OFFSET,
        shader_location: 0,
    },
    // color
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x3,
        offset: COLOR_OFFSET,
        shader_location: 1,
    },
];

/// Interleaved position + color layout of the cube buffer.
pub fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: VERTEX_STRIDE,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRIBUTES,
    }
}

fn clear_color() -> wgpu::Color {
    let [r, g, b, a] = CLEAR_COLOR;
    wgpu::Color { r, g, b, a }
}

/// Runs `build` inside a validation error scope and reports any error raised.
fn validated<T>(device: &wgpu::Device, build: impl FnOnce() -> T) -> Result<T, String> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let value = build();
    match pollster::block_on(device.pop_error_scope()) {
        Some(err) => Err(err.to_string()),
        None => Ok(value),
    }
}

fn compile(
    device: &wgpu::Device,
    stage: &'static str,
    source: &'static str,
) -> Result<wgpu::ShaderModule, RenderError> {
    validated(device, || {
        device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(stage),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        })
    })
    .map_err(|message| RenderError::Shader { stage, message })
}

/// wgpu-based cube renderer.
///
/// Fields drop in declaration order, so the pipeline goes first, then the
/// shader modules, then the buffers.
pub struct WgpuRenderer {
    pipeline: wgpu::RenderPipeline,
    _vertex_shader: wgpu::ShaderModule,
    _fragment_shader: wgpu::ShaderModule,
    vertex_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,
    vertex_count: u32,
    variant: Variant,
}

impl WgpuRenderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        variant: Variant,
    ) -> Result<Self, RenderError> {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube_vertex_buffer"),
            contents: cube_bytes(),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("uniform_buffer"),
            contents: bytemuck::bytes_of(&GpuUniforms::default()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("uniform_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: NonZeroU64::new(std::mem::size_of::<GpuUniforms>() as u64),
                },
                count: None,
            }],
        });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("uniform_bind_group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let vertex_shader = compile(device, "vertex", shaders::vertex_shader(variant))?;
        let fragment_shader = compile(device, "fragment", shaders::FRAGMENT_SHADER)?;

        let pipeline = validated(device, || {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("cube_pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &vertex_shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[vertex_layout()],
                },
                fragment: Some(wgpu::FragmentState {
                    module: &fragment_shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: surface_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                // No depth test and no culling: faces draw in buffer order.
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    cull_mode: None,
                    ..Default::default()
                },
                depth_stencil: None,
                multisample: Default::default(),
                multiview: None,
                cache: None,
            })
        })
        .map_err(RenderError::Pipeline)?;

        tracing::debug!(
            variant = %variant,
            bytes = cube_bytes().len(),
            "cube pipeline ready"
        );

        Ok(Self {
            pipeline,
            _vertex_shader: vertex_shader,
            _fragment_shader: fragment_shader,
            vertex_buffer,
            uniform_bind_group,
            uniform_buffer,
            vertex_count: CUBE_VERTEX_COUNT as u32,
            variant,
        })
    }

    /// Byte size of the uploaded cube buffer.
    pub fn vertex_buffer_size(&self) -> u64 {
        self.vertex_buffer.size()
    }

    /// Render one frame: upload the uniforms, clear, draw the cube.
    pub fn render(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        view: &wgpu::TextureView,
        uniforms: &FrameUniforms,
    ) {
        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&GpuUniforms::from(uniforms)),
        );

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("render_encoder"),
        });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("main_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear_color()),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                ..Default::default()
            });

            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &self.uniform_bind_group, &[]);
            pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            pass.draw(0..self.vertex_count, 0..1);
        }

        queue.submit(std::iter::once(encoder.finish()));
    }
}

impl Drop for WgpuRenderer {
    fn drop(&mut self) {
        tracing::debug!(variant = %self.variant, "releasing pipeline, shaders and buffers");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubeview_geometry::buffer_size;
    use glam::{Mat4, Vec3};

    #[test]
    fn uniform_block_is_three_mat4() {
        assert_eq!(std::mem::size_of::<GpuUniforms>(), 3 * 64);
    }

    #[test]
    fn uniforms_are_column_major() {
        let u = FrameUniforms {
            model: Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)),
            ..FrameUniforms::default()
        };
        let gpu = GpuUniforms::from(&u);
        assert_eq!(gpu.model[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(gpu.view, Mat4::IDENTITY.to_cols_array_2d());
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&gpu));
        assert_eq!(&floats[12..16], &[1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn layout_matches_geometry() {
        let layout = vertex_layout();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.attributes.len(), 2);
        assert_eq!(layout.attributes[0].shader_location, 0);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[1].shader_location, 1);
        assert_eq!(layout.attributes[1].offset, 12);
        for attr in layout.attributes {
            assert_eq!(attr.format, wgpu::VertexFormat::Float32x3);
        }
    }

    #[test]
    fn background_color() {
        let c = clear_color();
        assert_eq!((c.r, c.g, c.b, c.a), (0.85, 0.65, 0.65, 0.8));
    }

    const TARGET_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

    /// Headless device, or `None` on machines without any adapter.
    fn headless_device() -> Option<(wgpu::Device, wgpu::Queue)> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: None,
            force_fallback_adapter: false,
        }))?;
        pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("test_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .ok()
    }

    #[test]
    fn broken_shader_is_reported() {
        let Some((device, _queue)) = headless_device() else {
            return;
        };
        let err = compile(&device, "vertex", "fn broken( {").unwrap_err();
        assert!(matches!(err, RenderError::Shader { stage: "vertex", .. }), "{err}");
        assert!(err.to_string().starts_with("shader compilation failed (vertex)"));
    }

    #[test]
    fn both_variants_build_and_upload_the_cube() {
        let Some((device, _queue)) = headless_device() else {
            return;
        };
        for variant in [Variant::Spin, Variant::LookAt] {
            let renderer = WgpuRenderer::new(&device, TARGET_FORMAT, variant).unwrap();
            assert_eq!(renderer.vertex_buffer_size(), buffer_size(CUBE_VERTEX_COUNT));
        }
    }

    #[test]
    fn frame_renders_without_validation_errors() {
        let Some((device, queue)) = headless_device() else {
            return;
        };
        let renderer = WgpuRenderer::new(&device, TARGET_FORMAT, Variant::LookAt).unwrap();
        let target = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("offscreen_target"),
            size: wgpu::Extent3d {
                width: 800,
                height: 600,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: TARGET_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = target.create_view(&wgpu::TextureViewDescriptor::default());

        let result = validated(&device, || {
            renderer.render(&device, &queue, &view, &FrameUniforms::default());
        });
        assert_eq!(result, Ok(()));
    }
}
