use cgmath::{perspective, Matrix4, Rad, Vector3};
use std::f32::consts::FRAC_PI_4;

/// Translation of the canonical viewing pose
pub const DEFAULT_TRANSLATE: [f32; 3] = [0.0, -0.8, -8.0];

pub const FIELD_OF_VIEW: Rad<f32> = Rad(FRAC_PI_4);
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;

/// Coordinate axis selector used by the per-axis setters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

/// The single model transform applied to the whole scene
///
/// Camera zoom is folded into `translate.z`; there is no separate view matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    pub translate: [f32; 3],
    /// Euler angles in radians, applied X then Y then Z
    pub rotate: [f32; 3],
    pub scale: [f32; 3],
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            translate: DEFAULT_TRANSLATE,
            rotate: [0.0; 3],
            scale: [1.0; 3],
        }
    }
}

impl TransformState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// `T · Rx · Ry · Rz · S`, so scale is applied to vertices first
    pub fn model_view(&self) -> Matrix4<f32> {
        let [sx, sy, sz] = self.scale;
        Matrix4::from_translation(Vector3::from(self.translate))
            * Matrix4::from_angle_x(Rad(self.rotate[0]))
            * Matrix4::from_angle_y(Rad(self.rotate[1]))
            * Matrix4::from_angle_z(Rad(self.rotate[2]))
            * Matrix4::from_nonuniform_scale(sx, sy, sz)
    }
}

/// Model-view matrix for the current transform
pub fn compose_model_view(state: &TransformState) -> Matrix4<f32> {
    state.model_view()
}

/// Perspective projection in OpenGL clip conventions
///
/// A zero, negative or non-finite aspect (minimised window) falls back to 1.0.
pub fn compose_projection(aspect: f32) -> Matrix4<f32> {
    let aspect = if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    };
    perspective(FIELD_OF_VIEW, aspect, Z_NEAR, Z_FAR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use cgmath::{SquareMatrix, Transform, Point3};

    fn assert_point_eq(actual: Point3<f32>, expected: [f32; 3]) {
        assert_abs_diff_eq!(actual.x, expected[0], epsilon = 1e-5);
        assert_abs_diff_eq!(actual.y, expected[1], epsilon = 1e-5);
        assert_abs_diff_eq!(actual.z, expected[2], epsilon = 1e-5);
    }

    #[test]
    fn test_identity_pose() {
        let state = TransformState {
            translate: [0.0; 3],
            ..Default::default()
        };
        assert_eq!(compose_model_view(&state), Matrix4::identity());
    }

    #[test]
    fn test_default_pose_translates_only() {
        let mv = compose_model_view(&TransformState::default());
        assert_point_eq(mv.transform_point(Point3::new(1.0, 2.0, 3.0)), [1.0, 1.2, -5.0]);
    }

    #[test]
    fn test_scale_applies_before_rotation_and_translation() {
        let state = TransformState {
            translate: [10.0, 0.0, 0.0],
            rotate: [0.0, 0.0, std::f32::consts::FRAC_PI_2],
            scale: [2.0, 1.0, 1.0],
        };
        // (1,0,0) -> scale (2,0,0) -> rotZ 90° (0,2,0) -> translate (10,2,0)
        assert_point_eq(
            compose_model_view(&state).transform_point(Point3::new(1.0, 0.0, 0.0)),
            [10.0, 2.0, 0.0],
        );
    }

    #[test]
    fn test_rotation_order_is_x_then_y_then_z() {
        let half_pi = std::f32::consts::FRAC_PI_2;
        let state = TransformState {
            translate: [0.0; 3],
            rotate: [half_pi, half_pi, 0.0],
            scale: [1.0; 3],
        };
        // Rx · Ry applied to (0,0,1): Ry gives (1,0,0), Rx leaves it at (1,0,0)
        assert_point_eq(
            compose_model_view(&state).transform_point(Point3::new(0.0, 0.0, 1.0)),
            [1.0, 0.0, 0.0],
        );
    }

    #[test]
    fn test_projection_parameters() {
        let proj = compose_projection(2.0);
        let f = 1.0 / (FRAC_PI_4 / 2.0).tan();
        assert_abs_diff_eq!(proj.x.x, f / 2.0, epsilon = 1e-5);
        assert_abs_diff_eq!(proj.y.y, f, epsilon = 1e-5);
        assert_abs_diff_eq!(proj.z.z, (Z_FAR + Z_NEAR) / (Z_NEAR - Z_FAR), epsilon = 1e-5);
        assert_abs_diff_eq!(proj.w.z, 2.0 * Z_FAR * Z_NEAR / (Z_NEAR - Z_FAR), epsilon = 1e-5);
    }

    #[test]
    fn test_projection_bad_aspect_falls_back() {
        assert_eq!(compose_projection(0.0), compose_projection(1.0));
        assert_eq!(compose_projection(f32::NAN), compose_projection(1.0));
    }

    #[test]
    fn test_reset_restores_default_pose() {
        let mut state = TransformState {
            translate: [1.0, 2.0, 3.0],
            rotate: [0.4, 0.5, 0.6],
            scale: [-1.0, 2.0, 0.5],
        };
        state.reset();
        assert_eq!(state.translate, [0.0, -0.8, -8.0]);
        assert_eq!(state.rotate, [0.0; 3]);
        assert_eq!(state.scale, [1.0; 3]);
    }
}
