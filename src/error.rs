//! Error types for planets.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a scene file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scene file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid setting: {0}")]
    Invalid(String),
}

/// Errors raised by the window renderer.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("shader program error: {0}")]
    Program(#[from] glium::ProgramCreationError),

    #[error("vertex buffer error: {0}")]
    VertexBuffer(#[from] glium::vertex::BufferCreationError),

    #[error("draw error: {0}")]
    Draw(#[from] glium::DrawError),

    #[error("swap buffers error: {0}")]
    SwapBuffers(#[from] glium::SwapBuffersError),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
pub type RenderResult<T> = std::result::Result<T, RenderError>;
