//! # Scene State Module
//!
//! Mutable viewer state and the per-frame plan derived from it.
//!
//! ## Key Components
//!
//! - [`SceneState`] - Transform, lighting and texture toggles behind one facade
//! - [`plan_frame`] - Pure conversion of the state into a [`FramePlan`]
//! - [`Vertex3D`] - GPU vertex format
//!
//! ## Usage
//!
//! ```rust
//! use deskview::gfx::geometry::{build_scene, desk_scene};
//! use deskview::gfx::scene::{plan_frame, SceneState};
//!
//! let mesh = build_scene(&desk_scene());
//! let mut state = SceneState::default();
//! state.zoom_in();
//!
//! let plan = plan_frame(&state, &mesh, 1.5);
//! assert_eq!(plan.passes.len(), 2);
//! ```

pub mod frame;
pub mod scene;
pub mod vertex;

pub use frame::{plan_frame, DrawPass, DrawSet, FramePlan, TextureMode};
pub use scene::{SceneState, ZoomDirection};
pub use vertex::Vertex3D;
