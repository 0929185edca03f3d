use clap::{Parser, Subcommand};
use cubeview_camera::{CameraState, Projection};
use cubeview_geometry::{CUBE_VERTEX_COUNT, VERTEX_STRIDE, buffer_size};
use cubeview_input::{KeyEvent, KeyMap, apply_key};
use cubeview_render::{DebugTextRenderer, Frame, Renderer, Variant};
use cubeview_render_wgpu::{FRAGMENT_SHADER, vertex_shader};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cubeview-cli", about = "Headless inspection of cube viewer frames")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version, geometry and uniform layout
    Info,
    /// Replay key presses and print the resulting frame uniforms
    Frame {
        /// Renderer variant: spin or look-at
        #[arg(long, default_value = "look-at")]
        variant: Variant,
        /// Seconds since start
        #[arg(short, long, default_value = "0")]
        time: f32,
        /// Comma-separated key events, e.g. left,shift+up,release+down
        #[arg(short, long, value_delimiter = ',')]
        keys: Vec<KeyEvent>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the WGSL shader sources
    Shaders {
        #[arg(long, default_value = "look-at")]
        variant: Variant,
    },
}

/// Apply `keys` in order starting from the default camera.
fn replay(map: &KeyMap, keys: &[KeyEvent]) -> CameraState {
    keys.iter().fold(CameraState::default(), |camera, key| {
        match apply_key(map, &camera, key) {
            Some(change) => {
                tracing::debug!(%key, eye = ?change.after.eye, gaze = ?change.after.gaze, "applied");
                change.after
            }
            None => camera,
        }
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Info => {
            println!("cubeview-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("geometry: {}", cubeview_geometry::crate_info());
            println!("render: {}", cubeview_render::crate_info());
            println!(
                "cube: {} vertices, stride {} bytes, buffer {} bytes",
                CUBE_VERTEX_COUNT,
                VERTEX_STRIDE,
                buffer_size(CUBE_VERTEX_COUNT)
            );
            for variant in [Variant::Spin, Variant::LookAt] {
                println!(
                    "uniforms ({variant}): {}",
                    variant.uniform_names().join(", ")
                );
            }
        }
        Commands::Frame {
            variant,
            time,
            keys,
            json,
        } => {
            let camera = replay(&KeyMap::default(), &keys);
            let frame = Frame::new(variant, camera, &Projection::default(), time);
            if json {
                println!("{}", serde_json::to_string_pretty(&frame)?);
            } else {
                print!("{}", DebugTextRenderer::new().render(&frame));
            }
        }
        Commands::Shaders { variant } => {
            println!("// vertex ({variant})");
            println!("{}", vertex_shader(variant).trim());
            println!("// fragment");
            println!("{}", FRAGMENT_SHADER.trim());
        }
    }

    Ok(())
}
