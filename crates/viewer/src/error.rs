/// Errors creating the window or GPU context. All are fatal.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("failed to create window: {0}")]
    Window(String),
    #[error("failed to create surface: {0}")]
    Surface(String),
    #[error("no compatible graphics adapter found")]
    NoAdapter,
    #[error("failed to create device: {0}")]
    Device(String),
    #[error("failed to set up renderer: {0}")]
    Renderer(String),
}

/// Errors drawing a single frame. The frame is skipped; the loop continues.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("surface error: {0}")]
    Surface(String),
    #[error("no context available")]
    NoContext,
}

#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),
}
