//! Rigid body records stored by the physics world
//!
//! Bodies here are plain state: a transform, a center of mass offset and a
//! type. Nothing integrates them; they exist so joints have something to
//! attach to and measure against.

use crate::foundation::collections::BodyHandle;
use crate::foundation::math::{Transform2, Vec2};

/// How a body participates in the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BodyType {
    /// Never moves, infinite mass
    Static,
    /// Moved by the user, unaffected by forces
    Kinematic,
    /// Fully simulated
    #[default]
    Dynamic,
}

/// Description used to create a [`Body`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyDef {
    /// Simulation type
    pub body_type: BodyType,
    /// World position of the body origin
    pub position: Vec2,
    /// Rotation in radians
    pub angle: f32,
    /// Center of mass relative to the body origin
    pub local_center: Vec2,
}

impl Default for BodyDef {
    fn default() -> Self {
        Self {
            body_type: BodyType::Dynamic,
            position: Vec2::zeros(),
            angle: 0.0,
            local_center: Vec2::zeros(),
        }
    }
}

impl BodyDef {
    /// Dynamic body at a position
    pub fn dynamic(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Static body at a position
    pub fn fixed(position: Vec2) -> Self {
        Self {
            body_type: BodyType::Static,
            position,
            ..Default::default()
        }
    }

    /// Set the body type
    pub fn with_type(mut self, body_type: BodyType) -> Self {
        self.body_type = body_type;
        self
    }

    /// Set the rotation in radians
    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    /// Set the center of mass offset
    pub fn with_local_center(mut self, local_center: Vec2) -> Self {
        self.local_center = local_center;
        self
    }
}

/// A body owned by a [`PhysicsWorld`](super::PhysicsWorld)
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    body_type: BodyType,
    transform: Transform2,
    local_center: Vec2,
}

impl Body {
    pub(crate) fn from_def(def: &BodyDef) -> Self {
        Self {
            body_type: def.body_type,
            transform: Transform2::new(def.position, def.angle),
            local_center: def.local_center,
        }
    }

    /// Simulation type
    pub fn body_type(&self) -> BodyType {
        self.body_type
    }

    /// Whether this body never moves
    pub fn is_static(&self) -> bool {
        self.body_type == BodyType::Static
    }

    /// World position of the body origin
    pub fn position(&self) -> Vec2 {
        self.transform.position
    }

    /// Rotation in radians
    pub fn angle(&self) -> f32 {
        self.transform.angle
    }

    /// Center of mass in body space
    pub fn local_center(&self) -> Vec2 {
        self.local_center
    }

    /// Center of mass in world space
    pub fn world_center(&self) -> Vec2 {
        self.transform.transform_point(self.local_center)
    }

    /// Convert a world point into body space
    pub fn local_point(&self, world_point: Vec2) -> Vec2 {
        self.transform.inverse_transform_point(world_point)
    }

    /// Convert a body-space point into world space
    pub fn world_point(&self, local_point: Vec2) -> Vec2 {
        self.transform.transform_point(local_point)
    }

    /// Teleport the body
    pub fn set_transform(&mut self, position: Vec2, angle: f32) {
        self.transform = Transform2::new(position, angle);
    }
}

/// A game object that may be backed by a physics body
///
/// Joint wrappers accept anything implementing this so sprites and other
/// scene objects can be jointed directly.
pub trait PhysicsObject {
    /// The body attached to this object, if it has one yet
    fn body(&self) -> Option<BodyHandle>;
}

impl PhysicsObject for BodyHandle {
    fn body(&self) -> Option<BodyHandle> {
        Some(*self)
    }
}

impl PhysicsObject for Option<BodyHandle> {
    fn body(&self) -> Option<BodyHandle> {
        *self
    }
}
