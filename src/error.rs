//! Error types for the viewer
//!
//! Everything that can stop the renderer from starting is a [`ViewerError`].
//! Per-frame problems (a lost surface, a skipped frame) are logged and never
//! surface as errors, since the next frame simply tries again.

use crate::config::ConfigError;

/// Fatal start-up and resource errors
#[derive(thiserror::Error, Debug)]
pub enum ViewerError {
    /// The window surface could not be created
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    /// No graphics adapter is compatible with the surface
    #[error("no compatible graphics adapter: {0}")]
    NoAdapter(#[from] wgpu::RequestAdapterError),

    /// The adapter refused to hand out a device
    #[error("failed to request device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    /// The surface reports no usable texture format
    #[error("surface does not support any texture format")]
    UnsupportedSurface,

    /// A shader module failed to compile or validate
    #[error("shader '{name}' failed to compile: {message}")]
    ShaderCompilation {
        /// Shader identifier
        name: String,
        /// Backend diagnostic
        message: String,
    },

    /// A render pipeline could not be built from its configuration
    #[error("pipeline '{name}' could not be created: {message}")]
    Pipeline {
        /// Pipeline identifier
        name: String,
        /// What went wrong
        message: String,
    },

    /// Procedural texture parameters are unusable
    #[error("invalid texture parameters: {0}")]
    Texture(String),

    /// The windowing event loop could not be created or failed while running
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// The window could not be created
    #[error("failed to create window: {0}")]
    CreateWindow(#[from] winit::error::OsError),

    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Convenience result alias used across the crate
pub type Result<T> = std::result::Result<T, ViewerError>;
