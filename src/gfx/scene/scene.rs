use crate::{
    config::{ControlConfig, ViewerConfig},
    gfx::{
        camera::transform_state::{Axis, TransformState},
        resources::lighting::LightingModel,
    },
};

/// Uniform scale multiplier per wheel notch
pub const WHEEL_ZOOM_IN: f32 = 1.1;
pub const WHEEL_ZOOM_OUT: f32 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Everything the UI can change, behind one set of setters
///
/// The frame loop reads this every frame and never mutates it, so a change
/// made between two frames is visible in the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneState {
    transform: TransformState,
    lighting: LightingModel,
    /// Last value of the uniform scale control; the wheel scales from here
    uniform_scale: f32,
    screen_texture: bool,
    back_checkerboard: bool,
    controls: ControlConfig,
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new(&ViewerConfig::default())
    }
}

impl SceneState {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            transform: TransformState::default(),
            lighting: LightingModel::from_config(&config.lighting),
            uniform_scale: 1.0,
            screen_texture: false,
            back_checkerboard: true,
            controls: config.controls.clone(),
        }
    }

    pub fn transform(&self) -> &TransformState {
        &self.transform
    }

    pub fn lighting(&self) -> &LightingModel {
        &self.lighting
    }

    pub fn uniform_scale(&self) -> f32 {
        self.uniform_scale
    }

    pub fn screen_texture(&self) -> bool {
        self.screen_texture
    }

    pub fn back_checkerboard(&self) -> bool {
        self.back_checkerboard
    }

    pub fn controls(&self) -> &ControlConfig {
        &self.controls
    }

    // Transform

    pub fn set_translation(&mut self, axis: Axis, value: f32) {
        self.transform.translate[axis.index()] = value;
    }

    pub fn set_rotation(&mut self, axis: Axis, radians: f32) {
        self.transform.rotate[axis.index()] = radians;
    }

    /// Set all three axis scales at once
    pub fn set_uniform_scale(&mut self, value: f32) {
        self.uniform_scale = value;
        self.transform.scale = [value; 3];
    }

    pub fn set_axis_scale(&mut self, axis: Axis, value: f32) {
        self.transform.scale[axis.index()] = value;
    }

    /// Mirror the scene across `axis` by negating that axis's scale
    pub fn reflect(&mut self, axis: Axis) {
        self.transform.scale[axis.index()] *= -1.0;
    }

    // Camera

    /// Move the camera along the view axis; positive values move closer
    pub fn zoom(&mut self, delta: f32) {
        self.transform.translate[2] += delta;
    }

    pub fn zoom_in(&mut self) {
        self.zoom(self.controls.zoom_step);
    }

    pub fn zoom_out(&mut self) {
        self.zoom(-self.controls.zoom_step);
    }

    /// Restore the canonical viewing pose
    pub fn reset_view(&mut self) {
        self.transform.reset();
        self.uniform_scale = 1.0;
        log::debug!("View reset");
    }

    /// Rotate from a mouse drag of (`delta_x`, `delta_y`) pixels
    ///
    /// Horizontal motion turns about Y (yaw), vertical about X (pitch).
    pub fn drag_rotate(&mut self, delta_x: f32, delta_y: f32) {
        let sensitivity = self.controls.drag_sensitivity;
        self.transform.rotate[1] += delta_x * sensitivity;
        self.transform.rotate[0] += delta_y * sensitivity;
    }

    /// Scale the uniform scale by one wheel notch, clamped to the configured range
    pub fn wheel_zoom(&mut self, direction: ZoomDirection) {
        let factor = match direction {
            ZoomDirection::In => WHEEL_ZOOM_IN,
            ZoomDirection::Out => WHEEL_ZOOM_OUT,
        };
        let [min, max] = self.controls.scale_range;
        self.set_uniform_scale((self.uniform_scale * factor).clamp(min, max));
    }

    // Lighting

    pub fn toggle_lighting(&mut self) -> bool {
        self.lighting.toggle_lighting()
    }

    pub fn set_light_position(&mut self, x: f32, y: f32, z: f32) {
        self.lighting.set_light_position(x, y, z);
    }

    pub fn set_ambient(&mut self, r: f32, g: f32, b: f32) {
        self.lighting.set_ambient(r, g, b);
    }

    pub fn set_diffuse(&mut self, r: f32, g: f32, b: f32) {
        self.lighting.set_diffuse(r, g, b);
    }

    pub fn set_specular(&mut self, r: f32, g: f32, b: f32) {
        self.lighting.set_specular(r, g, b);
    }

    // Texture display modes

    pub fn toggle_screen_texture(&mut self) -> bool {
        self.screen_texture = !self.screen_texture;
        log::debug!("Screen texture: {}", self.screen_texture);
        self.screen_texture
    }

    pub fn toggle_back_checkerboard(&mut self) -> bool {
        self.back_checkerboard = !self.back_checkerboard;
        log::debug!("Back checkerboard: {}", self.back_checkerboard);
        self.back_checkerboard
    }
}
