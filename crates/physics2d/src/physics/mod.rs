//! Physics module: bodies, the world that owns them, and joint wrappers
//!
//! The world stores state and hands out handles; it does not simulate.
//! Joints are configured through fluent wrappers and created in a world
//! through the [`PhysicsBackend`] interface.

pub mod body;
pub mod joints;
pub mod world;

#[cfg(test)]
mod tests;

pub use body::{Body, BodyDef, BodyType, PhysicsObject};
pub use joints::{
    JointError,
    JointLine,
    JointSettings,
    LineOverrides,
    RevoluteJoint,
    RevoluteJointDef,
    RevoluteJointState,
};
pub use world::{PhysicsBackend, PhysicsWorld};
