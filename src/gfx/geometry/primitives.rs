//! # Box Primitive Generation
//!
//! Builds the scene [`Mesh`] from a list of [`BoxDescriptor`]s. Faces are
//! emitted as quads whose corner order is fixed so that the cross product of
//! the first two edges points away from the box.

use cgmath::{InnerSpace, Vector3};

use super::Mesh;

/// Vertices per quad face
const QUAD_VERTICES: u32 = 4;

/// Texture coordinates of a textured quad, matching corner order a, b, c, d
const QUAD_TEX_COORDS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// Placeholder coordinates for untextured quads, keeping the vertex layout uniform
const NO_TEX_COORDS: [[f32; 2]; 4] = [[0.0; 2]; 4];

/// An axis-aligned box in the static scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxDescriptor {
    /// Center of the box
    pub center: [f32; 3],
    /// Width, height and depth
    pub size: [f32; 3],
    /// Flat RGB color applied to every face
    pub color: [f32; 3],
    /// Whether this box is drawn in the textured pass
    pub textured: bool,
}

impl BoxDescriptor {
    /// Box centered at `center` with full edge lengths `size` and a flat `color`
    pub const fn new(center: [f32; 3], size: [f32; 3], color: [f32; 3], textured: bool) -> Self {
        Self {
            center,
            size,
            color,
            textured,
        }
    }

    /// The 8 corners, front face (+z) first, counter-clockwise from bottom-left
    pub fn corners(&self) -> [[f32; 3]; 8] {
        let [x, y, z] = self.center;
        let hw = self.size[0] / 2.0;
        let hh = self.size[1] / 2.0;
        let hd = self.size[2] / 2.0;

        [
            [x - hw, y - hh, z + hd],
            [x + hw, y - hh, z + hd],
            [x + hw, y + hh, z + hd],
            [x - hw, y + hh, z + hd],
            [x - hw, y - hh, z - hd],
            [x + hw, y - hh, z - hd],
            [x + hw, y + hh, z - hd],
            [x - hw, y + hh, z - hd],
        ]
    }

    /// Corner indices of each face: front, back, right, left, top, bottom
    pub const FACES: [[usize; 4]; 6] = [
        [0, 1, 2, 3],
        [5, 4, 7, 6],
        [1, 5, 6, 2],
        [4, 0, 3, 7],
        [3, 2, 6, 7],
        [4, 5, 1, 0],
    ];
}

/// Unit normal of the plane through `a`, `b`, `c`
///
/// Returns `None` when the points are collinear or coincide, which happens
/// for faces of zero-size boxes.
pub fn face_normal(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> Option<[f32; 3]> {
    let a = Vector3::from(a);
    let b = Vector3::from(b);
    let c = Vector3::from(c);

    let normal = (b - a).cross(c - b);
    let length = normal.magnitude();
    if length <= f32::EPSILON {
        return None;
    }
    Some((normal / length).into())
}

/// Build the scene mesh from box descriptors
///
/// Produces 24 vertices per box. Indices of each box go to either the
/// textured or the untextured list according to its flag.
pub fn build_scene(descriptors: &[BoxDescriptor]) -> Mesh {
    let vertex_total = descriptors.len() * 24;
    let mut mesh = Mesh {
        positions: Vec::with_capacity(vertex_total),
        normals: Vec::with_capacity(vertex_total),
        colors: Vec::with_capacity(vertex_total),
        tex_coords: Vec::with_capacity(vertex_total),
        textured_indices: Vec::new(),
        non_textured_indices: Vec::new(),
    };

    for descriptor in descriptors {
        let corners = descriptor.corners();
        for face in BoxDescriptor::FACES {
            push_quad(&mut mesh, face.map(|i| corners[i]), descriptor);
        }
    }

    log::debug!(
        "Built scene mesh: {} boxes, {} vertices, {} textured / {} untextured indices",
        descriptors.len(),
        mesh.vertex_count(),
        mesh.textured_indices.len(),
        mesh.non_textured_indices.len()
    );

    mesh
}

/// Append one quad face of `descriptor` to the mesh
fn push_quad(mesh: &mut Mesh, quad: [[f32; 3]; 4], descriptor: &BoxDescriptor) {
    let [a, b, c, _] = quad;
    let normal = face_normal(a, b, c).unwrap_or_else(|| {
        log::warn!(
            "Degenerate face on box at {:?} (size {:?}), using zero normal",
            descriptor.center,
            descriptor.size
        );
        [0.0; 3]
    });

    let offset = mesh.positions.len() as u32;

    mesh.positions.extend_from_slice(&quad);
    mesh.normals.extend_from_slice(&[normal; 4]);
    mesh.colors.extend_from_slice(&[descriptor.color; 4]);
    mesh.tex_coords.extend_from_slice(if descriptor.textured {
        &QUAD_TEX_COORDS
    } else {
        &NO_TEX_COORDS
    });

    let indices = if descriptor.textured {
        &mut mesh.textured_indices
    } else {
        &mut mesh.non_textured_indices
    };
    indices.extend_from_slice(&[offset, offset + 1, offset + 2, offset, offset + 2, offset + 3]);

    debug_assert_eq!(mesh.positions.len() as u32, offset + QUAD_VERTICES);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::collections::HashSet;

    const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

    fn mixed_boxes() -> Vec<BoxDescriptor> {
        vec![
            BoxDescriptor::new([0.0, 0.0, 0.0], [2.0, 2.0, 2.0], WHITE, false),
            BoxDescriptor::new([1.0, -2.0, 0.5], [0.5, 3.0, 1.5], [0.2, 0.2, 0.2], true),
            BoxDescriptor::new([-4.0, 1.0, 2.0], [5.0, 0.1, 4.0], [0.8, 0.66, 0.53], false),
        ]
    }

    #[test]
    fn test_single_untextured_box() {
        let mesh = build_scene(&[BoxDescriptor::new([0.0; 3], [2.0; 3], WHITE, false)]);

        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.non_textured_indices.len(), 36);
        assert!(mesh.textured_indices.is_empty());
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn test_attribute_arrays_match_and_indices_in_range() {
        let boxes = mixed_boxes();
        let mesh = build_scene(&boxes);
        let count = 24 * boxes.len();

        assert_eq!(mesh.positions.len(), count);
        assert_eq!(mesh.normals.len(), count);
        assert_eq!(mesh.colors.len(), count);
        assert_eq!(mesh.tex_coords.len(), count);
        assert!(mesh
            .textured_indices
            .iter()
            .chain(&mesh.non_textured_indices)
            .all(|&i| (i as usize) < count));
    }

    #[test]
    fn test_index_lists_partition_all_faces() {
        let boxes = mixed_boxes();
        let mesh = build_scene(&boxes);

        let textured: HashSet<u32> = mesh.textured_indices.iter().copied().collect();
        let untextured: HashSet<u32> = mesh.non_textured_indices.iter().copied().collect();

        assert!(textured.is_disjoint(&untextured));
        let all: HashSet<u32> = textured.union(&untextured).copied().collect();
        assert_eq!(all, (0..(24 * boxes.len()) as u32).collect::<HashSet<u32>>());

        // Second box is the textured one: vertices 24..48
        assert!(textured.iter().all(|&i| (24..48).contains(&i)));
        assert_eq!(mesh.textured_indices.len(), 36);
    }

    #[test]
    fn test_quad_index_pattern() {
        let mesh = build_scene(&mixed_boxes());
        // Third box, first face: global vertex offset 48
        let third = &mesh.non_textured_indices[36..42];
        assert_eq!(third, &[48, 49, 50, 48, 50, 51]);
        assert_eq!(&mesh.non_textured_indices[..6], &[0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn test_normals_are_unit_and_point_outward() {
        for descriptor in mixed_boxes() {
            let mesh = build_scene(&[descriptor]);
            let center = Vector3::from(descriptor.center);

            for face in 0..6 {
                let base = face * 4;
                let normal = Vector3::from(mesh.normals[base]);
                assert_abs_diff_eq!(normal.magnitude(), 1.0, epsilon = 1e-5);

                let face_center = (0..4)
                    .map(|k| Vector3::from(mesh.positions[base + k]))
                    .fold(Vector3::new(0.0, 0.0, 0.0), |acc, p| acc + p)
                    / 4.0;
                assert!(normal.dot(face_center - center) > 0.0);

                for k in 1..4 {
                    assert_eq!(mesh.normals[base + k], mesh.normals[base]);
                }
            }
        }
    }

    #[test]
    fn test_face_order_normals() {
        let mesh = build_scene(&[BoxDescriptor::new([0.0; 3], [1.0; 3], WHITE, false)]);
        let expected = [
            [0.0, 0.0, 1.0],
            [0.0, 0.0, -1.0],
            [1.0, 0.0, 0.0],
            [-1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, -1.0, 0.0],
        ];
        for (face, normal) in expected.iter().enumerate() {
            for axis in 0..3 {
                assert_abs_diff_eq!(mesh.normals[face * 4][axis], normal[axis], epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_texture_coordinates_follow_flag() {
        let mesh = build_scene(&mixed_boxes());
        assert_eq!(&mesh.tex_coords[24..28], &QUAD_TEX_COORDS);
        assert!(mesh.tex_coords[..24].iter().all(|uv| *uv == [0.0, 0.0]));
    }

    #[test]
    fn test_zero_size_box_is_well_defined() {
        let mesh = build_scene(&[BoxDescriptor::new([1.0, 1.0, 1.0], [0.0; 3], WHITE, true)]);

        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.textured_indices.len(), 36);
        assert!(mesh.normals.iter().all(|n| *n == [0.0; 3]));
        assert!(mesh.positions.iter().all(|p| *p == [1.0, 1.0, 1.0]));
    }

    #[test]
    fn test_face_normal_rejects_collinear_points() {
        assert!(face_normal([0.0; 3], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]).is_none());
        assert!(face_normal([0.0; 3], [0.0; 3], [0.0; 3]).is_none());
    }

    #[test]
    fn test_empty_descriptor_list() {
        let mesh = build_scene(&[]);
        assert_eq!(mesh, Mesh::default());
    }
}
