/// Errors from building the GPU pipeline.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("shader compilation failed ({stage}): {message}")]
    Shader {
        stage: &'static str,
        message: String,
    },
    #[error("pipeline link failed: {0}")]
    Pipeline(String),
}
