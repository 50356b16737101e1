//! # Graphics Module
//!
//! Everything between the scene description and the pixels on screen.
//!
//! ## Architecture Overview
//!
//! - **Geometry** ([`geometry`]) - Boxes to a flat-shaded mesh with two draw sets
//! - **Camera** ([`camera`]) - Model transform, projection and mouse input
//! - **Scene** ([`scene`]) - Mutable viewer state and the per-frame plan
//! - **Resources** ([`resources`]) - Lighting, checkerboard texture and bindings
//! - **Rendering** ([`rendering`]) - Pipeline and frame execution
//!
//! ## Usage
//!
//! ```no_run
//! use deskview::config::ViewerConfig;
//! use deskview::gfx::{geometry::{build_scene, desk_scene}, RenderEngine};
//!
//! // The render engine is created by the application once the window exists:
//! // let engine = RenderEngine::new(window, w, h, build_scene(&desk_scene()), &config).await?;
//! ```

pub mod camera;
pub mod geometry;
pub mod rendering;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use camera::InputController;
pub use rendering::render_engine::RenderEngine;
pub use scene::SceneState;
