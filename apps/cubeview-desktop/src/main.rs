mod context;
mod keys;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use context::DesktopFactory;
use cubeview_input::{DEFAULT_STEP, KeyMap, Modifiers, RotateModifier};
use cubeview_render::Variant;
use cubeview_viewer::{FrameError, Viewer, ViewerConfig};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::event::{KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::WindowId;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModifierArg {
    Shift,
    Control,
}

impl From<ModifierArg> for RotateModifier {
    fn from(arg: ModifierArg) -> Self {
        match arg {
            ModifierArg::Shift => RotateModifier::Shift,
            ModifierArg::Control => RotateModifier::Control,
        }
    }
}

#[derive(Parser)]
#[command(name = "cubeview-desktop", about = "Cube viewer with arrow-key camera controls")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Which uniforms the renderer drives: spin or look-at
    #[arg(long, default_value = "look-at")]
    variant: Variant,

    /// Modifier that turns arrow keys into camera rotation
    #[arg(long, value_enum, default_value = "shift")]
    rotate_modifier: ModifierArg,
}

impl Cli {
    fn viewer_config(&self) -> ViewerConfig {
        ViewerConfig {
            variant: self.variant,
            key_map: KeyMap::new(DEFAULT_STEP, self.rotate_modifier.into()),
        }
    }
}

struct App {
    viewer: Viewer<DesktopFactory>,
    modifiers: Modifiers,
}

impl App {
    fn new(config: ViewerConfig) -> Self {
        Self {
            viewer: Viewer::new(DesktopFactory, config),
            modifiers: Modifiers::NONE,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.viewer.resume(event_loop).is_err() {
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.viewer.shutdown();
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(context) = self.viewer.context_mut() {
                    context.resize(new_size);
                }
            }
            WindowEvent::ModifiersChanged(mods) => {
                self.modifiers = keys::modifiers(mods.state());
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        repeat,
                        ..
                    },
                ..
            } => {
                if let Some(key) = keys::translate(code, state, repeat, self.modifiers) {
                    self.viewer.handle_key(&key);
                }
            }
            WindowEvent::RedrawRequested => match self.viewer.redraw() {
                Ok(()) | Err(FrameError::NoContext) => {}
                Err(e) => tracing::error!("{e}"),
            },
            _ => {}
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("cubeview-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(cli.viewer_config());
    event_loop.run_app(&mut app)?;

    app.viewer.shutdown();
    Ok(app.viewer.exit_status().into())
}
