//! Per-frame planning
//!
//! [`plan_frame`] turns the current [`SceneState`] into everything the GPU
//! needs for one frame: the uniform values and the ordered draw passes.
//! It touches no GPU object, so the whole frame can be checked in tests.

use crate::gfx::{
    camera::camera_utils::CameraUniform, geometry::Mesh,
    resources::lighting::LightingUniform,
};

use super::scene::SceneState;

/// Where a fragment's base color comes from
///
/// The discriminant is the value the shader switches on.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureMode {
    /// Flat per-box vertex color
    VertexColor = 0,
    /// The uploaded checkerboard bitmap
    Sampled = 1,
    /// Checkerboard computed in the fragment shader from the texture coordinates
    Procedural = 2,
}

impl TextureMode {
    pub fn shader_value(self) -> u32 {
        self as u32
    }
}

/// Which index buffer a pass draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawSet {
    NonTextured,
    Textured,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawPass {
    pub set: DrawSet,
    pub index_count: u32,
    pub texture_mode: TextureMode,
}

/// Everything needed to render one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FramePlan {
    pub camera: CameraUniform,
    pub lighting: LightingUniform,
    /// Draw order; sets without indices are left out
    pub passes: Vec<DrawPass>,
}

impl SceneState {
    /// Base color source for the textured draw set
    ///
    /// The procedural screen texture takes precedence over the sampled
    /// back-casing checkerboard; with both off the faces keep their color.
    pub fn texture_mode(&self) -> TextureMode {
        if self.screen_texture() {
            TextureMode::Procedural
        } else if self.back_checkerboard() {
            TextureMode::Sampled
        } else {
            TextureMode::VertexColor
        }
    }
}

/// Build the frame for the current state and viewport aspect ratio
pub fn plan_frame(state: &SceneState, mesh: &Mesh, aspect: f32) -> FramePlan {
    let passes = [
        DrawPass {
            set: DrawSet::NonTextured,
            index_count: mesh.non_textured_indices.len() as u32,
            texture_mode: TextureMode::VertexColor,
        },
        DrawPass {
            set: DrawSet::Textured,
            index_count: mesh.textured_indices.len() as u32,
            texture_mode: state.texture_mode(),
        },
    ]
    .into_iter()
    .filter(|pass| pass.index_count > 0)
    .collect();

    FramePlan {
        camera: CameraUniform::from_transform(state.transform(), aspect),
        lighting: state.lighting().uniform(),
        passes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::{
        camera::transform_state::{compose_model_view, Axis},
        geometry::{build_scene, desk_scene, BoxDescriptor},
    };
    use cgmath::Matrix4;

    fn desk_mesh() -> Mesh {
        build_scene(&desk_scene())
    }

    #[test]
    fn test_default_frame() {
        let mesh = desk_mesh();
        let plan = plan_frame(&SceneState::default(), &mesh, 1.5);

        assert_eq!(plan.passes.len(), 2);
        assert_eq!(plan.passes[0].set, DrawSet::NonTextured);
        assert_eq!(plan.passes[0].texture_mode, TextureMode::VertexColor);
        assert_eq!(plan.passes[1].set, DrawSet::Textured);
        assert_eq!(plan.passes[1].index_count, 36);
        assert_eq!(plan.passes[1].texture_mode, TextureMode::Sampled);

        let total: u32 = plan.passes.iter().map(|pass| pass.index_count).sum();
        assert_eq!(total as usize, mesh.index_count());
    }

    #[test]
    fn test_texture_mode_precedence() {
        let mut state = SceneState::default();
        assert_eq!(state.texture_mode(), TextureMode::Sampled);

        state.toggle_screen_texture();
        assert_eq!(state.texture_mode(), TextureMode::Procedural);

        state.toggle_back_checkerboard();
        assert_eq!(state.texture_mode(), TextureMode::Procedural);

        state.toggle_screen_texture();
        assert_eq!(state.texture_mode(), TextureMode::VertexColor);
    }

    #[test]
    fn test_non_textured_pass_never_textured() {
        let mut state = SceneState::default();
        state.toggle_screen_texture();
        let plan = plan_frame(&state, &desk_mesh(), 1.0);
        assert_eq!(plan.passes[0].texture_mode, TextureMode::VertexColor);
        assert_eq!(plan.passes[1].texture_mode, TextureMode::Procedural);
    }

    #[test]
    fn test_empty_sets_are_skipped() {
        let mesh = build_scene(&[BoxDescriptor::new(
            [0.0; 3],
            [2.0; 3],
            [1.0; 3],
            false,
        )]);
        let plan = plan_frame(&SceneState::default(), &mesh, 1.0);
        assert_eq!(plan.passes.len(), 1);
        assert_eq!(plan.passes[0].set, DrawSet::NonTextured);
        assert_eq!(plan.passes[0].index_count, 36);

        let plan = plan_frame(&SceneState::default(), &Mesh::new(), 1.0);
        assert!(plan.passes.is_empty());
    }

    #[test]
    fn test_uniforms_follow_state() {
        let mut state = SceneState::default();
        state.set_rotation(Axis::Y, 0.7);
        state.zoom(2.0);
        state.toggle_lighting();

        let plan = plan_frame(&state, &desk_mesh(), 1.0);
        assert_eq!(
            Matrix4::from(plan.camera.model_view),
            compose_model_view(state.transform())
        );
        assert_eq!(plan.lighting, state.lighting().uniform());
        assert_eq!(plan.lighting.lighting_enabled, 0);
    }

    #[test]
    fn test_plan_is_pure() {
        let state = SceneState::default();
        let mesh = desk_mesh();
        assert_eq!(plan_frame(&state, &mesh, 1.25), plan_frame(&state, &mesh, 1.25));
    }
}
