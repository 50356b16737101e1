//! # Vertex Data Structures
//!
//! GPU-compatible vertex format for the box scene.

/// A 3D vertex with position, face normal, flat color and texture coordinate.
///
/// # Memory Layout
///
/// `#[repr(C)]` keeps the field order fixed so [`Vertex3D::desc`] offsets
/// line up with the struct.
///
/// # Examples
///
/// ```no_run
/// use deskview::gfx::scene::vertex::Vertex3D;
///
/// let vertex = Vertex3D {
///     position: [0.0, 1.0, 0.0],
///     normal: [0.0, 1.0, 0.0],
///     color: [0.2, 0.2, 0.2],
///     tex_coord: [0.0, 0.0],
/// };
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3D {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
    pub tex_coord: [f32; 2],
}

impl Vertex3D {
    const ATTRIBUTES: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x3,
        2 => Float32x3,
        3 => Float32x2,
    ];

    /// Returns the vertex buffer layout for wgpu rendering.
    ///
    /// - Attribute 0: Position (Float32x3)
    /// - Attribute 1: Normal (Float32x3)
    /// - Attribute 2: Color (Float32x3)
    /// - Attribute 3: Texture coordinate (Float32x2)
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex3D>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_struct() {
        let layout = Vertex3D::desc();
        assert_eq!(layout.array_stride, 44);
        assert_eq!(layout.attributes.len(), 4);
        assert_eq!(layout.attributes[2].offset, 24);
        assert_eq!(layout.attributes[3].offset, 36);
        assert_eq!(layout.attributes[3].format, wgpu::VertexFormat::Float32x2);
    }
}
