use cubeview_render::{FrameUniforms, Variant};
use cubeview_render_wgpu::WgpuRenderer;
use cubeview_viewer::{BootstrapError, ContextFactory, FrameError, FrameTarget, WindowSpec};
use std::sync::Arc;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

/// Window, surface and device for one viewer run.
///
/// Fields drop in declaration order: renderer objects first, then the
/// surface, the device and finally the window.
pub struct GpuContext {
    renderer: WgpuRenderer,
    surface: wgpu::Surface<'static>,
    queue: wgpu::Queue,
    device: wgpu::Device,
    config: wgpu::SurfaceConfiguration,
    description: String,
    window: Arc<Window>,
}

impl GpuContext {
    /// Reconfigure the surface after the platform changed the window size.
    /// The projection keeps the fixed window aspect.
    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        self.config.width = size.width.max(1);
        self.config.height = size.height.max(1);
        self.surface.configure(&self.device, &self.config);
    }
}

impl FrameTarget for GpuContext {
    fn describe(&self) -> String {
        self.description.clone()
    }

    fn draw(&mut self, uniforms: &FrameUniforms) -> Result<(), FrameError> {
        let output = match self.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(e) => return Err(FrameError::Surface(e.to_string())),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.renderer
            .render(&self.device, &self.queue, &view, uniforms);
        self.window.pre_present_notify();
        output.present();
        Ok(())
    }

    fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Creates a [`GpuContext`] on the winit event loop.
#[derive(Debug, Default)]
pub struct DesktopFactory;

impl ContextFactory for DesktopFactory {
    type Target = ActiveEventLoop;
    type Context = GpuContext;

    fn create(
        &mut self,
        event_loop: &ActiveEventLoop,
        spec: &WindowSpec,
        variant: Variant,
    ) -> Result<GpuContext, BootstrapError> {
        let attrs = Window::default_attributes()
            .with_title(spec.title)
            .with_inner_size(PhysicalSize::new(spec.width, spec.height))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| BootstrapError::Window(e.to_string()))?,
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .map_err(|e| BootstrapError::Surface(e.to_string()))?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .ok_or(BootstrapError::NoAdapter)?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("cubeview_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .map_err(|e| BootstrapError::Device(e.to_string()))?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or_else(|| BootstrapError::Surface("surface reports no formats".into()))?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let renderer = WgpuRenderer::new(&device, surface_format, variant)
            .map_err(|e| BootstrapError::Renderer(e.to_string()))?;

        let info = adapter.get_info();
        let description = format!(
            "{} backend, adapter {} ({:?}), driver {} {}, vertex buffer {} bytes",
            info.backend.to_str(),
            info.name,
            info.device_type,
            info.driver,
            info.driver_info,
            renderer.vertex_buffer_size()
        );

        Ok(GpuContext {
            renderer,
            surface,
            queue,
            device,
            config,
            description,
            window,
        })
    }
}
