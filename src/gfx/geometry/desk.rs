//! The static desk scene: a monitor on a desk with keyboard and mouse

use super::BoxDescriptor;

const WHITE: [f32; 3] = [1.0, 1.0, 1.0];
const SILVER: [f32; 3] = [0.75, 0.75, 0.75];
const DARK_GREY: [f32; 3] = [0.2, 0.2, 0.2];
const WOOD: [f32; 3] = [0.8, 0.66, 0.53];
const SCREEN: [f32; 3] = [0.2, 0.2, 0.2];

const LEG_HEIGHT: f32 = 1.5;
const LEG_WIDTH: f32 = 0.2;
const DESK_HALF_WIDTH: f32 = 2.5;
const DESK_HALF_DEPTH: f32 = 2.0;
const DESK_BOTTOM_Y: f32 = -1.0;

/// Desk surface height plus half the keyboard height
const KEYBOARD_Y: f32 = -0.85 + 0.02;

/// Index of the monitor back casing, the only textured box
pub const BACK_CASING: usize = 2;

/// Every box in the scene, in draw order
pub fn desk_scene() -> Vec<BoxDescriptor> {
    let mut boxes = vec![
        // Monitor: screen panel, bezel, back casing, logo, neck, base
        BoxDescriptor::new([0.0, 0.275, 0.05], [2.0, 1.0, 0.05], SCREEN, false),
        BoxDescriptor::new([0.0, 0.275, 0.035], [2.1, 1.1, 0.03], WHITE, false),
        BoxDescriptor::new([0.0, 0.275, -0.05], [2.05, 1.05, 0.1], SILVER, true),
        BoxDescriptor::new([0.0, 0.475, -0.105], [0.2, 0.3, 0.01], DARK_GREY, false),
        BoxDescriptor::new([0.0, -0.425, 0.01], [0.1, 0.7, 0.04], SILVER, false),
        BoxDescriptor::new([0.0, -0.825, 0.0], [0.8, 0.05, 0.5], SILVER, false),
        // Desk top
        BoxDescriptor::new([0.0, -0.9, 0.0], [5.0, 0.1, 4.0], WOOD, false),
    ];

    let leg_y = DESK_BOTTOM_Y - LEG_HEIGHT / 2.0;
    let leg_x = DESK_HALF_WIDTH - LEG_WIDTH / 2.0;
    let leg_z = DESK_HALF_DEPTH - LEG_WIDTH / 2.0;
    for (sx, sz) in [(1.0, 1.0), (-1.0, 1.0), (1.0, -1.0), (-1.0, -1.0)] {
        boxes.push(BoxDescriptor::new(
            [sx * leg_x, leg_y, sz * leg_z],
            [LEG_WIDTH, LEG_HEIGHT, LEG_WIDTH],
            WOOD,
            false,
        ));
    }

    boxes.extend([
        // Keyboard body and a single key
        BoxDescriptor::new([0.0, KEYBOARD_Y, 0.6], [1.5, 0.04, 0.4], WHITE, false),
        BoxDescriptor::new([0.7, KEYBOARD_Y + 0.02, 0.7], [0.1, 0.02, 0.1], DARK_GREY, false),
        // Mouse
        BoxDescriptor::new([1.5, KEYBOARD_Y, 0.7], [0.3, 0.04, 0.4], WHITE, false),
    ]);

    boxes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::build_scene;

    #[test]
    fn test_desk_scene_layout() {
        let boxes = desk_scene();
        assert_eq!(boxes.len(), 14);
        assert_eq!(boxes.iter().filter(|b| b.textured).count(), 1);
        assert!(boxes[BACK_CASING].textured);
        // The screen panel keeps its flat color under every texture mode
        assert!(!boxes[0].textured);
    }

    #[test]
    fn test_desk_scene_mesh() {
        let mesh = build_scene(&desk_scene());
        assert_eq!(mesh.vertex_count(), 14 * 24);
        assert_eq!(mesh.textured_indices.len(), 36);
        assert_eq!(mesh.non_textured_indices.len(), 13 * 36);
        // Back casing starts after two boxes
        assert_eq!(mesh.textured_indices[0], 48);
    }

    #[test]
    fn test_legs_sit_under_desk_corners() {
        let boxes = desk_scene();
        for leg in &boxes[7..11] {
            assert_eq!(leg.size, [LEG_WIDTH, LEG_HEIGHT, LEG_WIDTH]);
            assert!((leg.center[0].abs() - 2.4).abs() < 1e-6);
            assert!((leg.center[2].abs() - 1.9).abs() < 1e-6);
            assert!((leg.center[1] + 1.75).abs() < 1e-6);
        }
    }
}
