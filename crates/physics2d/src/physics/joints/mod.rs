//! Joint wrappers
//!
//! A joint wrapper owns a joint definition until [`RevoluteJoint::create`]
//! hands it to a [`PhysicsBackend`](super::PhysicsBackend); from then on the
//! world owns the joint and the wrapper keeps its handle.
//!
//! Settings shared by every joint kind (the attached bodies, world anchors,
//! debug line style and the survive flag) live in [`JointSettings`].

pub mod revolute;

pub use revolute::{RevoluteJoint, RevoluteJointDef, RevoluteJointState};

use crate::config::JointLineStyle;
use crate::foundation::collections::{BodyHandle, JointHandle};
use crate::foundation::math::Vec2;

/// Joint creation and lookup errors
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum JointError {
    /// Neither side of the joint has a body, so no ground body can be placed
    #[error("joint has no bodies; at least one side must be set")]
    MissingBodies,

    /// A body handle that isn't in the world
    #[error("body {0:?} does not exist in the world")]
    UnknownBody(BodyHandle),

    /// Both sides resolve to the same body
    #[error("a joint cannot connect a body to itself")]
    SameBody,

    /// Angle limit enabled with an inverted range
    #[error("lower angle {lower} rad is greater than upper angle {upper} rad")]
    InvalidLimits {
        /// Lower limit in radians
        lower: f32,
        /// Upper limit in radians
        upper: f32,
    },

    /// Motor torque must be non-negative
    #[error("max motor torque must be non-negative, got {0}")]
    NegativeTorque(f32),

    /// Runtime access before `create`
    #[error("joint has not been created yet")]
    NotCreated,

    /// A joint handle that isn't in the world
    #[error("joint {0:?} does not exist in the world")]
    UnknownJoint(JointHandle),
}

/// Per-joint overrides of the world's default [`JointLineStyle`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LineOverrides {
    /// Whether to produce a line
    pub show_line: Option<bool>,
    /// Thickness in pixels
    pub thickness: Option<f32>,
    /// Packed 0xRRGGBB color
    pub color: Option<u32>,
    /// Opacity in 0.0..=1.0
    pub alpha: Option<f32>,
}

impl LineOverrides {
    /// Apply the overrides on top of a base style
    pub fn resolve(&self, base: JointLineStyle) -> JointLineStyle {
        JointLineStyle {
            show_line: self.show_line.unwrap_or(base.show_line),
            thickness: self.thickness.unwrap_or(base.thickness),
            color: self.color.unwrap_or(base.color),
            alpha: self.alpha.unwrap_or(base.alpha),
        }
    }
}

/// Settings common to every joint wrapper
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct JointSettings {
    /// First body; a ground body is substituted when unset
    pub body_a: Option<BodyHandle>,
    /// Second body; a ground body is substituted when unset
    pub body_b: Option<BodyHandle>,
    /// World anchor on the first body
    pub anchor_a: Option<Vec2>,
    /// World anchor on the second body
    pub anchor_b: Option<Vec2>,
    /// Debug line style overrides
    pub line: LineOverrides,
    /// Keep the joint when the world clears transient joints
    pub survive: bool,
}

/// Debug line data for a created joint
///
/// The line runs from body A's center through the joint anchor to body B's
/// center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointLine {
    /// Body A's world center
    pub start: Vec2,
    /// Joint anchor in world space
    pub anchor: Vec2,
    /// Body B's world center
    pub end: Vec2,
    /// Resolved style
    pub style: JointLineStyle,
}

impl JointLine {
    /// The two segments making up the line
    pub fn segments(&self) -> [(Vec2, Vec2); 2] {
        [(self.start, self.anchor), (self.anchor, self.end)]
    }
}
