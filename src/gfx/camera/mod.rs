pub mod camera_controller;
pub mod camera_utils;
pub mod transform_state;

// Re-export main types
pub use camera_controller::InputController;
pub use camera_utils::CameraUniform;
pub use transform_state::{compose_model_view, compose_projection, Axis, TransformState};
