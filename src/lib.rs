// src/lib.rs
//! deskview
//!
//! An interactive 3D desk scene built from boxes, rendered with Phong-Blinn
//! lighting on wgpu and driven by a Dear ImGui control panel.

pub mod app;
pub mod config;
pub mod error;
pub mod gfx;
pub mod ui;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use app::DeskViewApp;
pub use config::ViewerConfig;
pub use error::{Result, ViewerError};

/// Opens the viewer window and blocks until it is closed
pub fn run(config: ViewerConfig) -> Result<()> {
    DeskViewApp::new(config)?.run()
}
