// src/ui/panel.rs
//! Control panel for the desk viewer
//!
//! Every widget reads its value from [`SceneState`] each frame and writes
//! changes back through the state's setters, so mouse rotation, wheel zoom
//! and reset are reflected in the sliders without extra bookkeeping.

use crate::gfx::{camera::transform_state::Axis, scene::SceneState};

const TRANSLATE_RANGE: (f32, f32) = (-10.0, 10.0);
const ROTATE_RANGE_DEGREES: (f32, f32) = (-360.0, 360.0);
const AXIS_SCALE_RANGE: (f32, f32) = (-3.0, 3.0);
const LIGHT_POSITION_RANGE: (f32, f32) = (-10.0, 10.0);

/// Rotation slider value for an angle, in degrees modulo 360
pub fn rotation_degrees(radians: f32) -> f32 {
    radians.to_degrees() % 360.0
}

pub fn lighting_button_label(enabled: bool) -> &'static str {
    if enabled {
        "Turn Lighting OFF"
    } else {
        "Turn Lighting ON"
    }
}

/// Main viewer panel: transform, camera, lighting and texture controls
///
/// # Arguments
/// * `ui` - ImGui UI context
/// * `state` - Scene state the widgets edit
pub fn control_panel(ui: &imgui::Ui, state: &mut SceneState) {
    let display_size = ui.io().display_size;
    // Guard against invalid display size that could cause crashes
    if display_size[0] <= 0.0 || display_size[1] <= 0.0 {
        return;
    }
    let panel_width = (display_size[0] * 0.3).clamp(320.0, 420.0);
    let panel_height = (display_size[1] * 0.9).max(400.0);

    ui.window("Desk Controls")
        .size([panel_width, panel_height], imgui::Condition::FirstUseEver)
        .position([20.0, 20.0], imgui::Condition::FirstUseEver)
        .resizable(true)
        .collapsible(true)
        .build(|| {
            render_translation_controls(ui, state);
            render_rotation_controls(ui, state);
            render_scale_controls(ui, state);
            render_camera_controls(ui, state);
            ui.separator();
            render_lighting_controls(ui, state);
            ui.separator();
            render_texture_controls(ui, state);
        });
}

fn render_translation_controls(ui: &imgui::Ui, state: &mut SceneState) {
    if ui.collapsing_header("Translation", imgui::TreeNodeFlags::DEFAULT_OPEN) {
        for axis in Axis::ALL {
            let mut value = state.transform().translate[axis.index()];
            let label = format!("Translate {}", axis.label());
            if ui.slider(&label, TRANSLATE_RANGE.0, TRANSLATE_RANGE.1, &mut value) {
                state.set_translation(axis, value);
            }
        }
    }
}

fn render_rotation_controls(ui: &imgui::Ui, state: &mut SceneState) {
    if ui.collapsing_header("Rotation", imgui::TreeNodeFlags::DEFAULT_OPEN) {
        for axis in Axis::ALL {
            let mut degrees = rotation_degrees(state.transform().rotate[axis.index()]);
            let label = format!("Rotate {} (deg)", axis.label());
            if ui.slider(&label, ROTATE_RANGE_DEGREES.0, ROTATE_RANGE_DEGREES.1, &mut degrees) {
                state.set_rotation(axis, degrees.to_radians());
            }
        }
    }
}

fn render_scale_controls(ui: &imgui::Ui, state: &mut SceneState) {
    if ui.collapsing_header("Scale", imgui::TreeNodeFlags::DEFAULT_OPEN) {
        let [min, max] = state.controls().scale_range;
        let mut uniform = state.uniform_scale();
        if ui.slider("Uniform", min, max, &mut uniform) {
            state.set_uniform_scale(uniform);
        }

        for axis in Axis::ALL {
            let mut value = state.transform().scale[axis.index()];
            let label = format!("Scale {}", axis.label());
            if ui.slider(&label, AXIS_SCALE_RANGE.0, AXIS_SCALE_RANGE.1, &mut value) {
                state.set_axis_scale(axis, value);
            }
        }

        for (i, axis) in Axis::ALL.into_iter().enumerate() {
            if i > 0 {
                ui.same_line();
            }
            if ui.button(format!("Reflect {}", axis.label())) {
                state.reflect(axis);
            }
        }
    }
}

fn render_camera_controls(ui: &imgui::Ui, state: &mut SceneState) {
    ui.spacing();
    if ui.button("Zoom In") {
        state.zoom_in();
    }
    ui.same_line();
    if ui.button("Zoom Out") {
        state.zoom_out();
    }
    ui.same_line();
    if ui.button("Reset View") {
        state.reset_view();
    }
}

fn render_lighting_controls(ui: &imgui::Ui, state: &mut SceneState) {
    if ui.button(lighting_button_label(state.lighting().is_enabled())) {
        state.toggle_lighting();
    }

    if ui.collapsing_header("Light", imgui::TreeNodeFlags::DEFAULT_OPEN) {
        let light = *state.lighting().light();

        let mut position = [light.position[0], light.position[1], light.position[2]];
        let mut moved = false;
        for axis in Axis::ALL {
            let label = format!("Light {}", axis.label());
            let value = &mut position[axis.index()];
            moved |= ui.slider(&label, LIGHT_POSITION_RANGE.0, LIGHT_POSITION_RANGE.1, value);
            ui.same_line();
            ui.text(format!("{:.1}", value));
        }
        if moved {
            state.set_light_position(position[0], position[1], position[2]);
        }

        if let Some([r, g, b]) = color_sliders(ui, "Ambient", light.ambient) {
            state.set_ambient(r, g, b);
        }
        if let Some([r, g, b]) = color_sliders(ui, "Diffuse", light.diffuse) {
            state.set_diffuse(r, g, b);
        }
        if let Some([r, g, b]) = color_sliders(ui, "Specular", light.specular) {
            state.set_specular(r, g, b);
        }
    }
}

/// Three 0..1 channel sliders; returns the new rgb if any moved
fn color_sliders(ui: &imgui::Ui, name: &str, color: [f32; 4]) -> Option<[f32; 3]> {
    let mut rgb = [color[0], color[1], color[2]];
    let mut changed = false;
    for (channel, value) in ["R", "G", "B"].iter().zip(rgb.iter_mut()) {
        let label = format!("{} {}", name, channel);
        changed |= ui.slider(&label, 0.0, 1.0, value);
        ui.same_line();
        ui.text(format!("{:.2}", value));
    }
    changed.then_some(rgb)
}

fn render_texture_controls(ui: &imgui::Ui, state: &mut SceneState) {
    let mut screen_texture = state.screen_texture();
    if ui.checkbox("Procedural checkerboard (back casing)", &mut screen_texture) {
        state.toggle_screen_texture();
    }
    let mut back_checkerboard = state.back_checkerboard();
    if ui.checkbox("Sampled checkerboard (back casing)", &mut back_checkerboard) {
        state.toggle_back_checkerboard();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_rotation_degrees_wraps() {
        assert_abs_diff_eq!(rotation_degrees(0.0), 0.0);
        assert_abs_diff_eq!(rotation_degrees(std::f32::consts::PI), 180.0, epsilon = 1e-4);
        assert_abs_diff_eq!(rotation_degrees(3.0 * std::f32::consts::PI), 180.0, epsilon = 1e-3);
        assert_abs_diff_eq!(
            rotation_degrees(-2.5 * std::f32::consts::PI),
            -90.0,
            epsilon = 1e-3
        );
    }

    #[test]
    fn test_lighting_button_label() {
        assert_eq!(lighting_button_label(true), "Turn Lighting OFF");
        assert_eq!(lighting_button_label(false), "Turn Lighting ON");
    }
}
