// src/gfx/rendering/mod.rs
//! Core rendering functionality
//!
//! Handles the render pipeline, GPU resource ownership, and frame rendering.

pub mod pipeline_manager;
pub mod render_engine;

// Re-export main types
pub use pipeline_manager::{PipelineConfig, PipelineManager};
pub use render_engine::RenderEngine;
