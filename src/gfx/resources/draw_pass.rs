//! Per-pass bindings (group 1)
//!
//! Each draw set gets its own small uniform naming the texture mode, plus
//! the checkerboard texture and sampler. The non-textured pass binds the
//! texture too so both passes share one pipeline layout.

use crate::{
    gfx::{
        resources::texture_resource::TextureResource,
        scene::{DrawPass, DrawSet, TextureMode},
    },
    wgpu_utils::{
        binding_builder::{BindGroupBuilder, BindGroupLayoutBuilder, BindGroupLayoutWithDesc},
        binding_types,
        uniform_buffer::UniformBuffer,
    },
};

/// GPU uniform data for one draw pass
///
/// MUST match the `PassUniform` struct in `phong.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PassUniform {
    pub texture_mode: u32,
    /// Checker squares per unit of texture coordinate in procedural mode
    pub checker_tiles: f32,
    _padding: [u32; 2],
}

impl PassUniform {
    pub fn new(texture_mode: TextureMode, checker_tiles: f32) -> Self {
        Self {
            texture_mode: texture_mode.shader_value(),
            checker_tiles,
            _padding: [0; 2],
        }
    }
}

type PassUBO = UniformBuffer<PassUniform>;

struct PassSlot {
    ubo: PassUBO,
    bind_group: wgpu::BindGroup,
}

/// Bind group layout plus one bind group per draw set
pub struct PassBindings {
    bind_group_layout: BindGroupLayoutWithDesc,
    non_textured: PassSlot,
    textured: PassSlot,
    checker_tiles: f32,
}

impl PassBindings {
    pub fn new(device: &wgpu::Device, checkerboard: &TextureResource, checker_tiles: f32) -> Self {
        let bind_group_layout = BindGroupLayoutBuilder::new()
            .next_binding_fragment(binding_types::uniform())
            .next_binding_fragment(binding_types::texture_2d())
            .next_binding_fragment(binding_types::sampler(wgpu::SamplerBindingType::Filtering))
            .create(device, "Pass Bind Group Layout");

        let make_slot = |label: &str| {
            let ubo = PassUBO::new_with_data(
                device,
                &PassUniform::new(TextureMode::VertexColor, checker_tiles),
            );
            let bind_group = BindGroupBuilder::new(&bind_group_layout)
                .resource(ubo.binding_resource())
                .texture(&checkerboard.view)
                .sampler(&checkerboard.sampler)
                .create(device, label);
            PassSlot { ubo, bind_group }
        };

        let non_textured = make_slot("Non-textured Pass Bind Group");
        let textured = make_slot("Textured Pass Bind Group");

        PassBindings {
            bind_group_layout,
            non_textured,
            textured,
            checker_tiles,
        }
    }

    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout.layout
    }

    /// Push the texture mode of every planned pass
    ///
    /// Must run before the render pass is recorded.
    pub fn update(&mut self, queue: &wgpu::Queue, passes: &[DrawPass]) {
        for pass in passes {
            let uniform = PassUniform::new(pass.texture_mode, self.checker_tiles);
            let slot = match pass.set {
                DrawSet::NonTextured => &mut self.non_textured,
                DrawSet::Textured => &mut self.textured,
            };
            if slot.ubo.update_content(queue, uniform) {
                log::trace!("{:?} pass now uses {:?}", pass.set, pass.texture_mode);
            }
        }
    }

    pub fn bind_group(&self, set: DrawSet) -> &wgpu::BindGroup {
        match set {
            DrawSet::NonTextured => &self.non_textured.bind_group,
            DrawSet::Textured => &self.textured.bind_group,
        }
    }
}
