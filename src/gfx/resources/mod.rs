// src/gfx/resources/mod.rs
//! GPU resource management
//!
//! Handles textures, lighting uniforms, buffers, and bind groups for rendering.

pub mod checkerboard;
pub mod draw_pass;
pub mod global_bindings;
pub mod lighting;
pub mod texture_resource;

// Re-export main types
pub use checkerboard::{generate_checkerboard, Checkerboard};
pub use draw_pass::{PassBindings, PassUniform};
pub use global_bindings::{update_global_ubo, GlobalBindings, GlobalUBO, GlobalUBOContent};
pub use lighting::{LightState, LightingModel, LightingUniform, MaterialState};
pub use texture_resource::TextureResource;
