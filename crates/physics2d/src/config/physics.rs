//! Physics world and joint presentation settings

use super::{Config, ConfigError};
use crate::foundation::math::Vec2;
use serde::{Deserialize, Serialize};

/// # Joint Line Style
///
/// How the debug line between a joint's two anchors should look. The crate only
/// produces line data; drawing it is left to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JointLineStyle {
    /// Whether the line is produced at all
    pub show_line: bool,
    /// Line thickness in pixels
    pub thickness: f32,
    /// Packed 0xRRGGBB color
    pub color: u32,
    /// Opacity in 0.0..=1.0
    pub alpha: f32,
}

impl JointLineStyle {
    /// Red, green and blue channels as floats in 0.0..=1.0
    pub fn rgb(&self) -> [f32; 3] {
        let channel = |shift: u32| ((self.color >> shift) & 0xFF) as f32 / 255.0;
        [channel(16), channel(8), channel(0)]
    }

    /// Color with alpha as an RGBA quadruple
    pub fn rgba(&self) -> [f32; 4] {
        let [r, g, b] = self.rgb();
        [r, g, b, self.alpha]
    }
}

impl Default for JointLineStyle {
    fn default() -> Self {
        Self {
            show_line: true,
            thickness: 1.0,
            color: 0xFF_FF_FF,
            alpha: 1.0,
        }
    }
}

/// # Physics Configuration
///
/// World-level settings read by [`PhysicsWorld`](crate::physics::PhysicsWorld)
/// and the defaults handed to new joints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Gravity vector in world units per second squared
    pub gravity: Vec2,
    /// Ground bodies closer than this to a requested position are reused
    pub ground_snap_distance: f32,
    /// Style applied to joints that don't override it
    pub joint_line: JointLineStyle,
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
}

impl PhysicsConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self {
            gravity: Vec2::new(0.0, -9.8),
            ground_snap_distance: 1.0e-3,
            joint_line: JointLineStyle::default(),
            log_level: "info".to_string(),
        }
    }

    /// Set gravity
    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the distance under which ground bodies are shared
    pub fn with_ground_snap_distance(mut self, distance: f32) -> Self {
        self.ground_snap_distance = distance;
        self
    }

    /// Set the default joint line style
    pub fn with_joint_line(mut self, style: JointLineStyle) -> Self {
        self.joint_line = style;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gravity.iter().all(|c| c.is_finite()) {
            return Err(ConfigError::Invalid("gravity must be finite".to_string()));
        }

        if self.ground_snap_distance.is_nan() || self.ground_snap_distance < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "ground_snap_distance must be non-negative, got {}",
                self.ground_snap_distance
            )));
        }

        if !(0.0..=1.0).contains(&self.joint_line.alpha) {
            return Err(ConfigError::Invalid(format!(
                "joint_line.alpha must be within 0..=1, got {}",
                self.joint_line.alpha
            )));
        }

        if self.joint_line.color > 0xFF_FF_FF {
            return Err(ConfigError::Invalid(format!(
                "joint_line.color must be 0xRRGGBB, got {:#x}",
                self.joint_line.color
            )));
        }

        Ok(())
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for PhysicsConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(PhysicsConfig::default().validate().is_ok());
    }

    #[test]
    fn test_toml_partial_config_uses_defaults() {
        let text = r#"
            ground_snap_distance = 0.5

            [joint_line]
            color = 0xFF0000
            alpha = 0.25
        "#;

        let config = PhysicsConfig::from_str_with_format(text, "physics.toml").unwrap();
        assert_eq!(config.ground_snap_distance, 0.5);
        assert_eq!(config.joint_line.color, 0xFF0000);
        assert_eq!(config.joint_line.alpha, 0.25);
        assert!(config.joint_line.show_line);
        assert_eq!(config.gravity, Vec2::new(0.0, -9.8));
    }

    #[test]
    fn test_ron_config() {
        let text = "(ground_snap_distance: 0.25, log_level: \"debug\")";
        let config = PhysicsConfig::from_str_with_format(text, "physics.ron").unwrap();
        assert_eq!(config.ground_snap_distance, 0.25);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_unsupported_format() {
        let result = PhysicsConfig::from_str_with_format("{}", "physics.json");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_validation_rejects_bad_alpha() {
        let config = PhysicsConfig::new().with_joint_line(JointLineStyle {
            alpha: 1.5,
            ..JointLineStyle::default()
        });
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_line_style_channels() {
        let style = JointLineStyle {
            color: 0xFF8000,
            alpha: 0.5,
            ..JointLineStyle::default()
        };
        let [r, g, b, a] = style.rgba();
        assert_eq!(r, 1.0);
        assert!((g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(b, 0.0);
        assert_eq!(a, 0.5);
    }
}
