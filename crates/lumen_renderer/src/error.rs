use lumen_core::SceneError;
use thiserror::Error;

/// Errors that stop a frame from being rendered.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("scene is not renderable: {0}")]
    Scene(#[from] SceneError),

    #[error("frame has no pixels ({width}x{height})")]
    EmptyFrame { width: u32, height: u32 },

    #[error("frame buffer holds {actual} pixels, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("worker count must be at least 1")]
    NoWorkers,
}

pub type RenderResult<T> = Result<T, RenderError>;
