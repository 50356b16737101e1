//! Viewer configuration
//!
//! All tunables live in [`ViewerConfig`]. Every field has a default matching
//! the stock desk scene, so a configuration file only needs the keys it
//! overrides.
//!
//! ```toml
//! [window]
//! title = "My desk"
//!
//! [controls]
//! scale_range = [0.2, 2.5]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Values that parse but make no sense
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    pub controls: ControlConfig,
    pub texture: TextureConfig,
    pub lighting: LightingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Background color, RGBA
    pub clear_color: [f64; 4],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "deskview".to_string(),
            width: 1200,
            height: 800,
            clear_color: [0.9, 0.9, 0.9, 1.0],
        }
    }
}

/// Input sensitivities and limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    /// Bounds for the uniform scale reached through the mouse wheel
    pub scale_range: [f32; 2],
    /// Z offset applied by one press of the zoom buttons
    pub zoom_step: f32,
    /// Radians of rotation per pixel of mouse drag
    pub drag_sensitivity: f32,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            scale_range: [0.1, 3.0],
            zoom_step: 0.5,
            drag_sensitivity: 0.01,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureConfig {
    /// Edge length of the checkerboard bitmap in pixels
    pub checkerboard_size: u32,
    /// Edge length of one checker square in pixels
    pub checkerboard_tile: u32,
    /// Checker squares per face edge for the shader-computed pattern
    pub procedural_tiles: f32,
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            checkerboard_size: 64,
            checkerboard_tile: 8,
            procedural_tiles: 8.0,
        }
    }
}

/// Initial light and the fixed material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    pub enabled: bool,
    pub light_position: [f32; 4],
    pub light_ambient: [f32; 4],
    pub light_diffuse: [f32; 4],
    pub light_specular: [f32; 4],
    pub material_ambient: [f32; 4],
    pub material_diffuse: [f32; 4],
    pub material_specular: [f32; 4],
    pub shininess: f32,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            light_position: [1.0, 1.0, 1.0, 0.0],
            light_ambient: [0.2, 0.2, 0.2, 1.0],
            light_diffuse: [1.0, 1.0, 1.0, 1.0],
            light_specular: [1.0, 1.0, 1.0, 1.0],
            material_ambient: [1.0, 1.0, 1.0, 1.0],
            material_diffuse: [1.0, 1.0, 1.0, 1.0],
            material_specular: [1.0, 1.0, 1.0, 1.0],
            shininess: 100.0,
        }
    }
}

/// Largest checkerboard edge every wgpu backend can upload
/// (`Limits::downlevel_defaults().max_texture_dimension_2d`)
pub const MAX_CHECKERBOARD_SIZE: u32 = 2048;

impl ViewerConfig {
    /// Load and validate a TOML configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values the viewer cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let [min, max] = self.controls.scale_range;
        if !(min > 0.0 && min <= max && max.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "scale_range must satisfy 0 < min <= max, got [{min}, {max}]"
            )));
        }
        let texture = &self.texture;
        if texture.checkerboard_size == 0 || texture.checkerboard_tile == 0 {
            return Err(ConfigError::Invalid(
                "checkerboard size and tile must be non-zero".to_string(),
            ));
        }
        if texture.checkerboard_size > MAX_CHECKERBOARD_SIZE {
            return Err(ConfigError::Invalid(format!(
                "checkerboard_size must be at most {MAX_CHECKERBOARD_SIZE}, got {}",
                texture.checkerboard_size
            )));
        }
        if texture.checkerboard_tile > texture.checkerboard_size {
            return Err(ConfigError::Invalid(format!(
                "checkerboard_tile ({}) must not exceed checkerboard_size ({})",
                texture.checkerboard_tile, texture.checkerboard_size
            )));
        }
        if !(texture.procedural_tiles.is_finite() && texture.procedural_tiles > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "procedural_tiles must be finite and positive, got {}",
                texture.procedural_tiles
            )));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid("window size must be non-zero".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ViewerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.controls.scale_range, [0.1, 3.0]);
        assert_eq!(config.lighting.shininess, 100.0);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = ViewerConfig::from_toml(
            r#"
            [controls]
            zoom_step = 1.0
            "#,
        )
        .unwrap();
        assert_eq!(config.controls.zoom_step, 1.0);
        assert_eq!(config.controls.drag_sensitivity, 0.01);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_inverted_scale_range_rejected() {
        let result = ViewerConfig::from_toml(
            r#"
            [controls]
            scale_range = [2.0, 1.0]
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_oversized_checkerboard_rejected() {
        let result = ViewerConfig::from_toml("[texture]\ncheckerboard_size = 40000");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let at_limit = format!("[texture]\ncheckerboard_size = {MAX_CHECKERBOARD_SIZE}");
        assert!(ViewerConfig::from_toml(&at_limit).is_ok());
    }

    #[test]
    fn test_tile_larger_than_board_rejected() {
        let result = ViewerConfig::from_toml(
            r#"
            [texture]
            checkerboard_size = 16
            checkerboard_tile = 32
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_non_positive_procedural_tiles_rejected() {
        for tiles in ["0.0", "-4.0", "nan", "inf"] {
            let text = format!("[texture]\nprocedural_tiles = {tiles}");
            let result = ViewerConfig::from_toml(&text);
            assert!(
                matches!(result, Err(ConfigError::Invalid(_))),
                "procedural_tiles = {tiles} accepted"
            );
        }
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let result = ViewerConfig::from_toml("[controls\nzoom_step = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = ViewerConfig::default();
        config.window.title = "Office".to_string();
        let text = config.to_toml().unwrap();
        assert_eq!(ViewerConfig::from_toml(&text).unwrap(), config);
    }
}
