// src/wgpu_utils/binding_builder.rs
//! Fluent builders for bind group layouts and bind groups
//!
//! Bindings are numbered in call order, so a layout and the bind groups made
//! from it are written as two parallel lists.

/// A bind group layout together with the entries it was built from
pub struct BindGroupLayoutWithDesc {
    pub layout: wgpu::BindGroupLayout,
    pub entries: Vec<wgpu::BindGroupLayoutEntry>,
}

#[derive(Default)]
pub struct BindGroupLayoutBuilder {
    entries: Vec<wgpu::BindGroupLayoutEntry>,
    next_binding_index: u32,
}

impl BindGroupLayoutBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_binding(mut self, visibility: wgpu::ShaderStages, ty: wgpu::BindingType) -> Self {
        self.entries.push(wgpu::BindGroupLayoutEntry {
            binding: self.next_binding_index,
            visibility,
            ty,
            count: None,
        });
        self.next_binding_index += 1;
        self
    }

    /// Visible to both the vertex and fragment stage
    pub fn next_binding_rendering(self, ty: wgpu::BindingType) -> Self {
        self.next_binding(wgpu::ShaderStages::VERTEX_FRAGMENT, ty)
    }

    pub fn next_binding_fragment(self, ty: wgpu::BindingType) -> Self {
        self.next_binding(wgpu::ShaderStages::FRAGMENT, ty)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn create(self, device: &wgpu::Device, label: &str) -> BindGroupLayoutWithDesc {
        BindGroupLayoutWithDesc {
            layout: device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some(label),
                entries: &self.entries,
            }),
            entries: self.entries,
        }
    }
}

/// Fills the bindings of a layout in order
pub struct BindGroupBuilder<'a> {
    layout_with_desc: &'a BindGroupLayoutWithDesc,
    entries: Vec<wgpu::BindGroupEntry<'a>>,
}

impl<'a> BindGroupBuilder<'a> {
    pub fn new(layout_with_desc: &'a BindGroupLayoutWithDesc) -> Self {
        BindGroupBuilder {
            layout_with_desc,
            entries: Vec::with_capacity(layout_with_desc.entries.len()),
        }
    }

    pub fn resource(mut self, resource: wgpu::BindingResource<'a>) -> Self {
        assert!(
            self.entries.len() < self.layout_with_desc.entries.len(),
            "More resources than layout bindings"
        );
        self.entries.push(wgpu::BindGroupEntry {
            binding: self.layout_with_desc.entries[self.entries.len()].binding,
            resource,
        });
        self
    }

    pub fn texture(self, view: &'a wgpu::TextureView) -> Self {
        self.resource(wgpu::BindingResource::TextureView(view))
    }

    pub fn sampler(self, sampler: &'a wgpu::Sampler) -> Self {
        self.resource(wgpu::BindingResource::Sampler(sampler))
    }

    pub fn create(&self, device: &wgpu::Device, label: &str) -> wgpu::BindGroup {
        assert_eq!(
            self.entries.len(),
            self.layout_with_desc.entries.len(),
            "Bind group '{}' does not fill every layout binding",
            label
        );
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &self.layout_with_desc.layout,
            entries: &self.entries,
        })
    }
}
