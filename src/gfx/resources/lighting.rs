//! Phong-Blinn light and material state
//!
//! The shading stage never sees raw light or material colors. It receives
//! their component-wise products, which [`LightingModel`] recomputes every
//! time a light parameter changes.

use crate::config::LightingConfig;

/// The single scene light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightState {
    /// Homogeneous position, w = 0 for a light at infinity
    pub position: [f32; 4],
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    pub enabled: bool,
}

/// Surface response shared by every box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialState {
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    pub shininess: f32,
}

/// Light-material products, alpha fixed at 1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightingProducts {
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
}

/// GPU layout of the lighting uniforms
///
/// MUST match the `Lighting` struct in `phong.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    pub light_position: [f32; 4],
    pub ambient_product: [f32; 4],
    pub diffuse_product: [f32; 4],
    pub specular_product: [f32; 4],
    pub shininess: f32,
    /// 1 when lighting is on; WGSL uniforms cannot hold `bool`
    pub lighting_enabled: u32,
    _padding: [u32; 2],
}

/// Light and material with eagerly maintained products
#[derive(Debug, Clone, PartialEq)]
pub struct LightingModel {
    light: LightState,
    material: MaterialState,
    products: LightingProducts,
}

/// Component-wise product of the rgb channels, alpha forced to 1.0
fn product(light: [f32; 4], material: [f32; 4]) -> [f32; 4] {
    [
        light[0] * material[0],
        light[1] * material[1],
        light[2] * material[2],
        1.0,
    ]
}

impl LightingModel {
    pub fn new(light: LightState, material: MaterialState) -> Self {
        let mut model = Self {
            light,
            material,
            products: LightingProducts {
                ambient: [0.0; 4],
                diffuse: [0.0; 4],
                specular: [0.0; 4],
            },
        };
        model.update_products();
        model
    }

    pub fn from_config(config: &LightingConfig) -> Self {
        Self::new(
            LightState {
                position: config.light_position,
                ambient: config.light_ambient,
                diffuse: config.light_diffuse,
                specular: config.light_specular,
                enabled: config.enabled,
            },
            MaterialState {
                ambient: config.material_ambient,
                diffuse: config.material_diffuse,
                specular: config.material_specular,
                shininess: config.shininess,
            },
        )
    }

    fn update_products(&mut self) {
        self.products = LightingProducts {
            ambient: product(self.light.ambient, self.material.ambient),
            diffuse: product(self.light.diffuse, self.material.diffuse),
            specular: product(self.light.specular, self.material.specular),
        };
    }

    /// Move the light, keeping its w component
    pub fn set_light_position(&mut self, x: f32, y: f32, z: f32) {
        self.light.position = [x, y, z, self.light.position[3]];
        self.update_products();
    }

    pub fn set_ambient(&mut self, r: f32, g: f32, b: f32) {
        self.light.ambient = [r, g, b, self.light.ambient[3]];
        self.update_products();
    }

    pub fn set_diffuse(&mut self, r: f32, g: f32, b: f32) {
        self.light.diffuse = [r, g, b, self.light.diffuse[3]];
        self.update_products();
    }

    pub fn set_specular(&mut self, r: f32, g: f32, b: f32) {
        self.light.specular = [r, g, b, self.light.specular[3]];
        self.update_products();
    }

    /// Flip lighting on/off and return the new state
    pub fn toggle_lighting(&mut self) -> bool {
        self.light.enabled = !self.light.enabled;
        self.update_products();
        log::debug!("Lighting {}", if self.light.enabled { "enabled" } else { "disabled" });
        self.light.enabled
    }

    pub fn light(&self) -> &LightState {
        &self.light
    }

    pub fn products(&self) -> &LightingProducts {
        &self.products
    }

    pub fn is_enabled(&self) -> bool {
        self.light.enabled
    }

    /// Pack everything the shading stage needs
    pub fn uniform(&self) -> LightingUniform {
        LightingUniform {
            light_position: self.light.position,
            ambient_product: self.products.ambient,
            diffuse_product: self.products.diffuse,
            specular_product: self.products.specular,
            shininess: self.material.shininess,
            lighting_enabled: self.light.enabled as u32,
            _padding: [0; 2],
        }
    }
}

impl Default for LightingModel {
    fn default() -> Self {
        Self::from_config(&LightingConfig::default())
    }
}
