//! # Physics2D
//!
//! Fluent 2D physics joint configuration bound to game objects.
//!
//! ## Features
//!
//! - **Revolute Joints**: Chainable builder with limits, motor and anchors
//! - **Ground Bodies**: Missing joint sides are pinned to shared static bodies
//! - **Game Objects**: Anything implementing `PhysicsObject` can be jointed
//! - **Configuration**: World defaults loaded from TOML or RON
//!
//! ## Quick Start
//!
//! ```rust
//! use physics2d::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut world = PhysicsWorld::new(PhysicsConfig::default())?;
//!     let arm = world.create_body(&BodyDef::dynamic(Vec2::new(0.0, -2.0)));
//!
//!     let mut pivot = RevoluteJoint::anchored_to_ground(arm);
//!     pivot
//!         .set_anchor_a(Vec2::new(0.0, 0.0))
//!         .set_enable_limit(true)
//!         .set_lower_angle(-45.0)
//!         .set_upper_angle(45.0)
//!         .create(&mut world)?;
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod physics;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, JointLineStyle, PhysicsConfig},
        foundation::{
            collections::{BodyHandle, JointHandle},
            math::{deg_to_rad, rad_to_deg, Vec2},
        },
        physics::{
            Body, BodyDef, BodyType, JointError, JointLine, PhysicsBackend, PhysicsObject,
            PhysicsWorld, RevoluteJoint, RevoluteJointDef, RevoluteJointState,
        },
    };
}
