//! # User Interface Module
//!
//! Dear ImGui control panel for the desk viewer.
//!
//! ## Key Components
//!
//! - [`UiManager`] - ImGui integration with winit and wgpu
//! - [`control_panel`] - Transform, camera, lighting and texture controls
//!
//! ## Input Handling
//!
//! Events the panel captures never reach the scene's mouse controls, so
//! dragging a slider does not also rotate the desk.

pub mod manager;
pub mod panel;

// Re-export main types
pub use manager::UiManager;
pub use panel::control_panel;
