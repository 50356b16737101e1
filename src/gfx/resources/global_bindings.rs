//! Global uniform bindings for camera and lighting data
//!
//! Everything shared by both draw passes of a frame lives in one uniform
//! buffer bound at group 0.

use crate::{
    gfx::{camera::camera_utils::CameraUniform, resources::lighting::LightingUniform, scene::FramePlan},
    wgpu_utils::{
        binding_builder::{BindGroupBuilder, BindGroupLayoutBuilder, BindGroupLayoutWithDesc},
        binding_types,
        uniform_buffer::UniformBuffer,
    },
};

/// Global uniform buffer content structure
///
/// MUST match the `Globals` struct in `phong.wgsl` exactly.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobalUBOContent {
    model_view: [[f32; 4]; 4],
    projection: [[f32; 4]; 4],
    lighting: LightingUniform,
}
// Total: 64 + 64 + 80 = 208 bytes

impl GlobalUBOContent {
    pub fn new(camera: CameraUniform, lighting: LightingUniform) -> Self {
        Self {
            model_view: camera.model_view,
            projection: camera.projection,
            lighting,
        }
    }

    pub fn from_plan(plan: &FramePlan) -> Self {
        Self::new(plan.camera, plan.lighting)
    }
}

/// Type alias for the global uniform buffer
pub type GlobalUBO = UniformBuffer<GlobalUBOContent>;

/// Push the frame's uniforms; nothing is written if they did not change
pub fn update_global_ubo(ubo: &mut GlobalUBO, queue: &wgpu::Queue, plan: &FramePlan) {
    if ubo.update_content(queue, GlobalUBOContent::from_plan(plan)) {
        log::trace!("Global uniforms updated");
    }
}

/// Bind group layout and bind group for the global uniforms (group 0)
pub struct GlobalBindings {
    bind_group_layout: BindGroupLayoutWithDesc,
    bind_group: wgpu::BindGroup,
}

impl GlobalBindings {
    pub fn new(device: &wgpu::Device, ubo: &GlobalUBO) -> Self {
        let bind_group_layout = BindGroupLayoutBuilder::new()
            .next_binding_rendering(binding_types::uniform())
            .create(device, "Globals Bind Group Layout");

        let bind_group = BindGroupBuilder::new(&bind_group_layout)
            .resource(ubo.binding_resource())
            .create(device, "Globals Bind Group");

        GlobalBindings {
            bind_group_layout,
            bind_group,
        }
    }

    /// Used when creating render pipelines that need access to global uniforms
    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout.layout
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::{
        geometry::{build_scene, desk_scene},
        scene::{plan_frame, SceneState},
    };

    #[test]
    fn test_content_size_matches_shader() {
        assert_eq!(std::mem::size_of::<GlobalUBOContent>(), 208);
        assert_eq!(std::mem::size_of::<GlobalUBOContent>() % 16, 0);
    }

    #[test]
    fn test_unchanged_state_gives_identical_bytes() {
        let mesh = build_scene(&desk_scene());
        let mut state = SceneState::default();
        let first = GlobalUBOContent::from_plan(&plan_frame(&state, &mesh, 1.5));
        let second = GlobalUBOContent::from_plan(&plan_frame(&state, &mesh, 1.5));
        assert_eq!(bytemuck::bytes_of(&first), bytemuck::bytes_of(&second));

        state.set_diffuse(0.5, 0.5, 0.5);
        let third = GlobalUBOContent::from_plan(&plan_frame(&state, &mesh, 1.5));
        assert_ne!(bytemuck::bytes_of(&first), bytemuck::bytes_of(&third));
    }
}
