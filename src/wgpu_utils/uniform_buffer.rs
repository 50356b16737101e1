// src/wgpu_utils/uniform_buffer.rs
use std::marker::PhantomData;

/// Typed uniform buffer that only writes to the GPU when its content changes
pub struct UniformBuffer<Content> {
    buffer: wgpu::Buffer,
    content_type: PhantomData<Content>,
    previous_content: Vec<u8>,
}

impl<Content: bytemuck::Pod> UniformBuffer<Content> {
    fn name() -> &'static str {
        let type_name = std::any::type_name::<Content>();
        match type_name.rfind(':') {
            Some(pos) => &type_name[(pos + 1)..],
            None => type_name,
        }
    }

    /// Create a buffer already holding `initial_content`
    pub fn new_with_data(device: &wgpu::Device, initial_content: &Content) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("UniformBuffer: {}", Self::name())),
            size: std::mem::size_of::<Content>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: true,
        });

        buffer
            .slice(..)
            .get_mapped_range_mut()
            .copy_from_slice(bytemuck::bytes_of(initial_content));
        buffer.unmap();

        UniformBuffer {
            buffer,
            content_type: PhantomData,
            previous_content: bytemuck::bytes_of(initial_content).to_vec(),
        }
    }

    /// Write `content` unless it is byte-identical to the last write
    ///
    /// Returns true if a write was queued.
    pub fn update_content(&mut self, queue: &wgpu::Queue, content: Content) -> bool {
        let new_content = bytemuck::bytes_of(&content);
        if self.previous_content == new_content {
            return false;
        }
        queue.write_buffer(&self.buffer, 0, new_content);
        self.previous_content = new_content.to_vec();
        true
    }

    pub fn binding_resource(&self) -> wgpu::BindingResource {
        self.buffer.as_entire_binding()
    }
}
