use cgmath::{Matrix4, SquareMatrix};

use super::transform_state::{compose_model_view, compose_projection, TransformState};

/// Maps OpenGL clip depth [-1, 1] onto the [0, 1] range wgpu expects
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug, PartialEq)]
pub struct CameraUniform {
    /// Model-view matrix; its upper 3×3 also transforms normals
    pub model_view: [[f32; 4]; 4],

    /// Projection matrix, already in wgpu clip conventions
    pub projection: [[f32; 4]; 4],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            model_view: convert_matrix4_to_array(Matrix4::identity()),
            projection: convert_matrix4_to_array(Matrix4::identity()),
        }
    }
}

impl CameraUniform {
    /// Recompute both matrices from the current transform and viewport aspect
    pub fn from_transform(state: &TransformState, aspect: f32) -> Self {
        Self {
            model_view: convert_matrix4_to_array(compose_model_view(state)),
            projection: convert_matrix4_to_array(OPENGL_TO_WGPU_MATRIX * compose_projection(aspect)),
        }
    }
}

pub fn convert_matrix4_to_array(matrix4: Matrix4<f32>) -> [[f32; 4]; 4] {
    matrix4.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use cgmath::Vector4;

    #[test]
    fn test_depth_range_is_remapped() {
        let uniform = CameraUniform::from_transform(&TransformState::default(), 1.0);
        let projection = Matrix4::from(uniform.projection);

        let near = projection * Vector4::new(0.0, 0.0, -0.1, 1.0);
        let far = projection * Vector4::new(0.0, 0.0, -100.0, 1.0);
        assert_abs_diff_eq!(near.z / near.w, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(far.z / far.w, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_model_view_matches_transform() {
        let state = TransformState {
            rotate: [0.3, -0.2, 1.1],
            scale: [1.0, -2.0, 0.5],
            ..Default::default()
        };
        let uniform = CameraUniform::from_transform(&state, 1.5);
        assert_eq!(Matrix4::from(uniform.model_view), compose_model_view(&state));
    }
}
