//! # Procedural Geometry Generation
//!
//! The whole scene is assembled from axis-aligned boxes. Each box becomes
//! 24 vertices (4 per face, never shared between faces, so every face keeps
//! its own flat normal) and 36 indices.
//!
//! ## Usage
//!
//! ```rust
//! use deskview::gfx::geometry::{build_scene, desk_scene};
//!
//! let mesh = build_scene(&desk_scene());
//! assert_eq!(mesh.vertex_count(), 24 * desk_scene().len());
//! ```

pub mod desk;
pub mod primitives;

pub use desk::desk_scene;
pub use primitives::*;

use crate::gfx::scene::vertex::Vertex3D;

/// Scene geometry ready for GPU upload
///
/// Attributes are stored as parallel arrays. The indices are split in two
/// draw sets: faces of textured boxes and everything else. Together the two
/// lists cover every face exactly once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions (x, y, z)
    pub positions: Vec<[f32; 3]>,
    /// Per-vertex face normals
    pub normals: Vec<[f32; 3]>,
    /// Flat RGB color of the owning box
    pub colors: Vec<[f32; 3]>,
    /// Texture coordinates (u, v); all zero on untextured boxes
    pub tex_coords: Vec<[f32; 2]>,
    /// Triangle indices of textured faces
    pub textured_indices: Vec<u32>,
    /// Triangle indices of untextured faces
    pub non_textured_indices: Vec<u32>,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of vertices in this mesh
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Total number of indices across both draw sets
    pub fn index_count(&self) -> usize {
        self.textured_indices.len() + self.non_textured_indices.len()
    }

    /// Get the number of triangles in this mesh
    pub fn triangle_count(&self) -> usize {
        self.index_count() / 3
    }

    /// Interleave the attribute arrays into the vertex format used by the renderer
    pub fn to_vertices(&self) -> Vec<Vertex3D> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.colors)
            .zip(&self.tex_coords)
            .map(|(((&position, &normal), &color), &tex_coord)| Vertex3D {
                position,
                normal,
                color,
                tex_coord,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_vertices_interleaves_in_order() {
        let mesh = build_scene(&[BoxDescriptor::new(
            [1.0, 2.0, 3.0],
            [2.0, 2.0, 2.0],
            [0.5, 0.25, 0.125],
            true,
        )]);
        let vertices = mesh.to_vertices();

        assert_eq!(vertices.len(), mesh.vertex_count());
        for (i, vertex) in vertices.iter().enumerate() {
            assert_eq!(vertex.position, mesh.positions[i]);
            assert_eq!(vertex.normal, mesh.normals[i]);
            assert_eq!(vertex.color, [0.5, 0.25, 0.125]);
            assert_eq!(vertex.tex_coord, mesh.tex_coords[i]);
        }
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = Mesh::new();
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert!(mesh.to_vertices().is_empty());
    }
}
