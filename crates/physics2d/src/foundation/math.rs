//! Math utilities and types
//!
//! Provides the 2D math types shared by bodies, joints and configuration.

pub use nalgebra::{Rotation2, Vector2};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Multiply degrees by this to get radians
pub const DEG_TO_RAD: f32 = std::f32::consts::PI / 180.0;

/// Multiply radians by this to get degrees
pub const RAD_TO_DEG: f32 = 180.0 / std::f32::consts::PI;

/// Convert an angle in degrees to radians
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * DEG_TO_RAD
}

/// Convert an angle in radians to degrees
#[inline]
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * RAD_TO_DEG
}

/// Rigid 2D transform: translation followed by a rotation about the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2 {
    /// Translation in world space
    pub position: Vec2,

    /// Rotation in radians, counter-clockwise
    pub angle: f32,
}

impl Default for Transform2 {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            angle: 0.0,
        }
    }
}

impl Transform2 {
    /// Create a new transform
    pub fn new(position: Vec2, angle: f32) -> Self {
        Self { position, angle }
    }

    /// Map a point from local space into world space
    pub fn transform_point(&self, local: Vec2) -> Vec2 {
        self.position + Rotation2::new(self.angle) * local
    }

    /// Map a point from world space into local space
    pub fn inverse_transform_point(&self, world: Vec2) -> Vec2 {
        Rotation2::new(self.angle).inverse() * (world - self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_degree_conversion() {
        assert_relative_eq!(deg_to_rad(180.0), std::f32::consts::PI);
        assert_relative_eq!(deg_to_rad(-90.0), -std::f32::consts::FRAC_PI_2);
        assert_relative_eq!(rad_to_deg(std::f32::consts::FRAC_PI_4), 45.0, epsilon = 1e-4);
    }

    #[test]
    fn test_transform_round_trip_point() {
        let transform = Transform2::new(Vec2::new(3.0, -2.0), std::f32::consts::FRAC_PI_2);

        // Quarter turn maps +x onto +y
        let world = transform.transform_point(Vec2::new(1.0, 0.0));
        assert_relative_eq!(world, Vec2::new(3.0, -1.0), epsilon = 1e-5);

        let local = transform.inverse_transform_point(world);
        assert_relative_eq!(local, Vec2::new(1.0, 0.0), epsilon = 1e-5);
    }
}
