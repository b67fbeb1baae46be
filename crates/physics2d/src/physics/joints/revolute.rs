//! Revolute joints
//!
//! A revolute joint constrains two bodies to share a common point while they
//! are free to rotate about it. The relative rotation about the shared point
//! is the joint angle. The rotation can be limited to a lower and upper angle,
//! and a motor can drive it with a capped torque.
//!
//! [`RevoluteJoint`] is the fluent wrapper: configure it, then call
//! [`RevoluteJoint::create`] with the world.
//!
//! ```
//! use physics2d::prelude::*;
//!
//! let mut world = PhysicsWorld::default();
//! let wheel = world.create_body(&BodyDef::dynamic(Vec2::new(0.0, 2.0)));
//!
//! let mut joint = RevoluteJoint::anchored_to_ground(wheel);
//! joint
//!     .set_enable_motor(true)
//!     .set_motor_speed(3.0)
//!     .set_max_motor_torque(50.0)
//!     .create(&mut world)?;
//!
//! assert!(joint.is_created());
//! # Ok::<(), JointError>(())
//! ```

use super::{JointError, JointLine, JointSettings};
use crate::foundation::collections::{BodyHandle, JointHandle};
use crate::foundation::math::{deg_to_rad, Vec2};
use crate::physics::body::{Body, PhysicsObject};
use crate::physics::world::PhysicsBackend;
use log::{debug, warn};

/// Definition record a physics world turns into a revolute joint
///
/// Angles are in radians, speeds in radians per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevoluteJointDef {
    /// First attached body
    pub body_a: Option<BodyHandle>,
    /// Second attached body
    pub body_b: Option<BodyHandle>,
    /// Anchor relative to body A's origin
    pub local_anchor_a: Vec2,
    /// Anchor relative to body B's origin
    pub local_anchor_b: Vec2,
    /// `angle_b - angle_a` at which the joint angle reads zero
    pub reference_angle: f32,
    /// Whether the angle limit is active
    pub enable_limit: bool,
    /// Lower joint angle limit
    pub lower_angle: f32,
    /// Upper joint angle limit
    pub upper_angle: f32,
    /// Whether the motor is active
    pub enable_motor: bool,
    /// Target relative angular speed
    pub motor_speed: f32,
    /// Torque cap for the motor
    pub max_motor_torque: f32,
    /// Whether the attached bodies may collide with each other
    pub collide_connected: bool,
}

impl Default for RevoluteJointDef {
    fn default() -> Self {
        Self {
            body_a: None,
            body_b: None,
            local_anchor_a: Vec2::zeros(),
            local_anchor_b: Vec2::zeros(),
            reference_angle: 0.0,
            enable_limit: false,
            lower_angle: 0.0,
            upper_angle: 0.0,
            enable_motor: false,
            motor_speed: 0.0,
            max_motor_torque: 0.0,
            collide_connected: false,
        }
    }
}

impl RevoluteJointDef {
    /// Attach both bodies at a shared world anchor
    ///
    /// Stores the anchor in each body's local frame and records the current
    /// relative angle as the reference angle.
    pub fn initialize(
        &mut self,
        body_a: BodyHandle,
        a: &Body,
        body_b: BodyHandle,
        b: &Body,
        anchor: Vec2,
    ) {
        self.body_a = Some(body_a);
        self.body_b = Some(body_b);
        self.local_anchor_a = a.local_point(anchor);
        self.local_anchor_b = b.local_point(anchor);
        self.reference_angle = b.angle() - a.angle();
    }

    /// Check the values a world would reject
    pub fn validate(&self) -> Result<(), JointError> {
        if self.body_a.is_some() && self.body_a == self.body_b {
            return Err(JointError::SameBody);
        }

        self.validate_limits()
    }

    /// Check the limit and motor values, ignoring the bodies
    pub fn validate_limits(&self) -> Result<(), JointError> {
        if self.enable_limit && self.lower_angle > self.upper_angle {
            return Err(JointError::InvalidLimits {
                lower: self.lower_angle,
                upper: self.upper_angle,
            });
        }

        if self.max_motor_torque < 0.0 {
            return Err(JointError::NegativeTorque(self.max_motor_torque));
        }

        Ok(())
    }
}

/// A created revolute joint as owned by the world
#[derive(Debug, Clone, PartialEq)]
pub struct RevoluteJointState {
    body_a: BodyHandle,
    body_b: BodyHandle,
    local_anchor_a: Vec2,
    local_anchor_b: Vec2,
    reference_angle: f32,
    enable_limit: bool,
    lower_angle: f32,
    upper_angle: f32,
    enable_motor: bool,
    motor_speed: f32,
    max_motor_torque: f32,
    collide_connected: bool,
}

impl RevoluteJointState {
    pub(crate) fn from_def(def: &RevoluteJointDef, body_a: BodyHandle, body_b: BodyHandle) -> Self {
        Self {
            body_a,
            body_b,
            local_anchor_a: def.local_anchor_a,
            local_anchor_b: def.local_anchor_b,
            reference_angle: def.reference_angle,
            enable_limit: def.enable_limit,
            lower_angle: def.lower_angle,
            upper_angle: def.upper_angle,
            enable_motor: def.enable_motor,
            motor_speed: def.motor_speed,
            max_motor_torque: def.max_motor_torque,
            collide_connected: def.collide_connected,
        }
    }

    /// First attached body
    pub fn body_a(&self) -> BodyHandle {
        self.body_a
    }

    /// Second attached body
    pub fn body_b(&self) -> BodyHandle {
        self.body_b
    }

    /// Whether `body` is one of the two attached bodies
    pub fn is_attached_to(&self, body: BodyHandle) -> bool {
        self.body_a == body || self.body_b == body
    }

    /// Anchor relative to body A
    pub fn local_anchor_a(&self) -> Vec2 {
        self.local_anchor_a
    }

    /// Anchor relative to body B
    pub fn local_anchor_b(&self) -> Vec2 {
        self.local_anchor_b
    }

    /// Relative angle at which the joint angle is zero
    pub fn reference_angle(&self) -> f32 {
        self.reference_angle
    }

    /// Current joint angle in radians, given the two attached bodies
    pub fn joint_angle(&self, a: &Body, b: &Body) -> f32 {
        b.angle() - a.angle() - self.reference_angle
    }

    /// Whether the angle limit is active
    pub fn is_limit_enabled(&self) -> bool {
        self.enable_limit
    }

    /// Turn the angle limit on or off
    pub fn enable_limit(&mut self, enabled: bool) {
        self.enable_limit = enabled;
    }

    /// Lower limit in radians
    pub fn lower_limit(&self) -> f32 {
        self.lower_angle
    }

    /// Upper limit in radians
    pub fn upper_limit(&self) -> f32 {
        self.upper_angle
    }

    /// Set both limits in radians
    pub fn set_limits(&mut self, lower: f32, upper: f32) -> Result<(), JointError> {
        if lower > upper {
            return Err(JointError::InvalidLimits { lower, upper });
        }
        self.lower_angle = lower;
        self.upper_angle = upper;
        Ok(())
    }

    /// Whether the motor is active
    pub fn is_motor_enabled(&self) -> bool {
        self.enable_motor
    }

    /// Turn the motor on or off
    pub fn enable_motor(&mut self, enabled: bool) {
        self.enable_motor = enabled;
    }

    /// Motor target speed in radians per second
    pub fn motor_speed(&self) -> f32 {
        self.motor_speed
    }

    /// Set the motor target speed in radians per second
    pub fn set_motor_speed(&mut self, speed: f32) {
        self.motor_speed = speed;
    }

    /// Motor torque cap
    pub fn max_motor_torque(&self) -> f32 {
        self.max_motor_torque
    }

    /// Set the motor torque cap
    pub fn set_max_motor_torque(&mut self, torque: f32) -> Result<(), JointError> {
        if torque < 0.0 {
            return Err(JointError::NegativeTorque(torque));
        }
        self.max_motor_torque = torque;
        Ok(())
    }

    /// Whether the attached bodies collide with each other
    pub fn collide_connected(&self) -> bool {
        self.collide_connected
    }
}

/// Fluent revolute joint wrapper
///
/// Every setter returns the same wrapper so calls can be chained. The joint
/// definition is allocated on first use and owned here until
/// [`create`](Self::create) passes it to the world.
#[derive(Debug, Clone, Default)]
pub struct RevoluteJoint {
    settings: JointSettings,
    def: Option<RevoluteJointDef>,
    joint: Option<JointHandle>,
    // Bodies the created joint ended up attached to, ground bodies included
    attached: Option<(BodyHandle, BodyHandle)>,
}

impl RevoluteJoint {
    /// Joint between two optional bodies
    pub fn new(body_a: Option<BodyHandle>, body_b: Option<BodyHandle>) -> Self {
        Self {
            settings: JointSettings {
                body_a,
                body_b,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Joint between two bodies
    pub fn between(body_a: BodyHandle, body_b: BodyHandle) -> Self {
        Self::new(Some(body_a), Some(body_b))
    }

    /// Joint pinning a body to a ground body at its own position
    pub fn anchored_to_ground(body_a: BodyHandle) -> Self {
        Self::new(Some(body_a), None)
    }

    /// Joint using an existing definition
    pub fn with_def(
        body_a: Option<BodyHandle>,
        body_b: Option<BodyHandle>,
        def: RevoluteJointDef,
    ) -> Self {
        Self {
            def: Some(def),
            ..Self::new(body_a, body_b)
        }
    }

    /// Joint between two game objects
    pub fn from_objects(a: &impl PhysicsObject, b: &impl PhysicsObject) -> Self {
        Self::new(a.body(), b.body())
    }

    /// Joint pinning a game object to the ground
    pub fn from_object(a: &impl PhysicsObject) -> Self {
        Self::new(a.body(), None)
    }

    fn def_mut(&mut self) -> &mut RevoluteJointDef {
        self.def.get_or_insert_with(RevoluteJointDef::default)
    }

    /// Turn the angle limit on or off
    pub fn set_enable_limit(&mut self, enable_limit: bool) -> &mut Self {
        self.def_mut().enable_limit = enable_limit;
        self
    }

    /// Turn the motor on or off
    pub fn set_enable_motor(&mut self, enable_motor: bool) -> &mut Self {
        self.def_mut().enable_motor = enable_motor;
        self
    }

    /// Motor target speed in radians per second
    pub fn set_motor_speed(&mut self, motor_speed: f32) -> &mut Self {
        self.def_mut().motor_speed = motor_speed;
        self
    }

    /// Motor torque cap
    pub fn set_max_motor_torque(&mut self, max_motor_torque: f32) -> &mut Self {
        self.def_mut().max_motor_torque = max_motor_torque;
        self
    }

    /// Upper angle limit in degrees
    pub fn set_upper_angle(&mut self, upper_angle: f32) -> &mut Self {
        self.def_mut().upper_angle = deg_to_rad(upper_angle);
        self
    }

    /// Lower angle limit in degrees
    pub fn set_lower_angle(&mut self, lower_angle: f32) -> &mut Self {
        self.def_mut().lower_angle = deg_to_rad(lower_angle);
        self
    }

    /// Replace the whole definition
    pub fn set_joint_def(&mut self, def: RevoluteJointDef) -> &mut Self {
        self.def = Some(def);
        self
    }

    /// First body
    pub fn set_body_a(&mut self, body_a: BodyHandle) -> &mut Self {
        self.settings.body_a = Some(body_a);
        self
    }

    /// Second body
    pub fn set_body_b(&mut self, body_b: BodyHandle) -> &mut Self {
        self.settings.body_b = Some(body_b);
        self
    }

    /// World anchor shared by both bodies; defaults to body A's world center
    pub fn set_anchor_a(&mut self, anchor_a: Vec2) -> &mut Self {
        self.settings.anchor_a = Some(anchor_a);
        self
    }

    /// Separate world anchor for body B; defaults to the shared anchor
    pub fn set_anchor_b(&mut self, anchor_b: Vec2) -> &mut Self {
        self.settings.anchor_b = Some(anchor_b);
        self
    }

    /// Let the attached bodies collide with each other
    pub fn set_collide_connected(&mut self, collide_connected: bool) -> &mut Self {
        self.def_mut().collide_connected = collide_connected;
        self
    }

    /// Produce a debug line for this joint
    pub fn set_show_line(&mut self, show_line: bool) -> &mut Self {
        self.settings.line.show_line = Some(show_line);
        self
    }

    /// Debug line thickness in pixels
    pub fn set_line_thickness(&mut self, line_thickness: f32) -> &mut Self {
        self.settings.line.thickness = Some(line_thickness.max(0.0));
        self
    }

    /// Debug line color as 0xRRGGBB
    pub fn set_line_color(&mut self, line_color: u32) -> &mut Self {
        self.settings.line.color = Some(line_color & 0xFF_FF_FF);
        self
    }

    /// Debug line opacity, clamped to 0.0..=1.0
    pub fn set_line_alpha(&mut self, line_alpha: f32) -> &mut Self {
        if !(0.0..=1.0).contains(&line_alpha) {
            warn!("Line alpha {} out of range, clamping to 0..=1", line_alpha);
        }
        self.settings.line.alpha = Some(line_alpha.clamp(0.0, 1.0));
        self
    }

    /// Keep this joint when the world clears transient joints
    pub fn set_survive(&mut self, survive: bool) -> &mut Self {
        self.settings.survive = survive;
        self
    }

    /// Create the joint in `world`
    ///
    /// A missing body is replaced by a static ground body at the other body's
    /// position. The shared anchor defaults to body A's world center. On error
    /// neither the wrapper nor the world is changed.
    pub fn create<W>(&mut self, world: &mut W) -> Result<&mut Self, JointError>
    where
        W: PhysicsBackend + ?Sized,
    {
        let mut def = self.def.unwrap_or_default();
        def.validate_limits()?;

        let (body_a, body_b) = self.resolve_bodies(world)?;

        let a = world.body(body_a).ok_or(JointError::UnknownBody(body_a))?;
        let b = world.body(body_b).ok_or(JointError::UnknownBody(body_b))?;
        let anchor = self.settings.anchor_a.unwrap_or_else(|| a.world_center());

        def.initialize(body_a, a, body_b, b, anchor);
        if let Some(anchor_b) = self.settings.anchor_b {
            def.local_anchor_b = b.local_point(anchor_b);
        }

        let handle = world.create_revolute_joint(&def, &self.settings)?;
        debug!(
            "Revolute joint {:?} anchored at ({}, {})",
            handle, anchor.x, anchor.y
        );

        self.def = Some(def);
        self.joint = Some(handle);
        self.attached = Some((body_a, body_b));
        Ok(self)
    }

    fn resolve_bodies<W>(&self, world: &mut W) -> Result<(BodyHandle, BodyHandle), JointError>
    where
        W: PhysicsBackend + ?Sized,
    {
        let position_of = |world: &W, handle: BodyHandle| {
            world
                .body(handle)
                .map(Body::position)
                .ok_or(JointError::UnknownBody(handle))
        };

        match (self.settings.body_a, self.settings.body_b) {
            (Some(a), Some(b)) => {
                position_of(world, a)?;
                position_of(world, b)?;
                Ok((a, b))
            }
            (None, Some(b)) => {
                let position = position_of(world, b)?;
                let ground = world.ground_body(position);
                debug!("Body A unset, using ground body {:?}", ground);
                Ok((ground, b))
            }
            (Some(a), None) => {
                let position = position_of(world, a)?;
                let ground = world.ground_body(position);
                debug!("Body B unset, using ground body {:?}", ground);
                Ok((a, ground))
            }
            (None, None) => Err(JointError::MissingBodies),
        }
    }

    /// Handle of the created joint
    pub fn handle(&self) -> Option<JointHandle> {
        self.joint
    }

    /// Whether [`create`](Self::create) has succeeded
    pub fn is_created(&self) -> bool {
        self.joint.is_some()
    }

    /// The created joint as stored by `world`
    pub fn joint<'w, W>(&self, world: &'w W) -> Result<&'w RevoluteJointState, JointError>
    where
        W: PhysicsBackend + ?Sized,
    {
        let handle = self.joint.ok_or(JointError::NotCreated)?;
        world
            .revolute_joint(handle)
            .ok_or(JointError::UnknownJoint(handle))
    }

    /// The definition, if one has been allocated
    pub fn def(&self) -> Option<&RevoluteJointDef> {
        self.def.as_ref()
    }

    /// Shared settings
    pub fn settings(&self) -> &JointSettings {
        &self.settings
    }

    /// First body, including a substituted ground body while created
    pub fn body_a(&self) -> Option<BodyHandle> {
        self.attached.map(|(a, _)| a).or(self.settings.body_a)
    }

    /// Second body, including a substituted ground body while created
    pub fn body_b(&self) -> Option<BodyHandle> {
        self.attached.map(|(_, b)| b).or(self.settings.body_b)
    }

    /// Current joint angle in radians
    pub fn joint_angle<W>(&self, world: &W) -> Result<f32, JointError>
    where
        W: PhysicsBackend + ?Sized,
    {
        let state = self.joint(world)?;
        let (a, b) = Self::bodies_of(world, state)?;
        Ok(state.joint_angle(a, b))
    }

    /// Debug line data, or `None` when the line is hidden
    pub fn debug_line<W>(&self, world: &W) -> Result<Option<JointLine>, JointError>
    where
        W: PhysicsBackend + ?Sized,
    {
        let state = self.joint(world)?;
        let handle = self.joint.ok_or(JointError::NotCreated)?;
        let style = world
            .joint_line_style(handle)
            .ok_or(JointError::UnknownJoint(handle))?;
        if !style.show_line {
            return Ok(None);
        }

        let (a, b) = Self::bodies_of(world, state)?;
        Ok(Some(JointLine {
            start: a.world_center(),
            anchor: a.world_point(state.local_anchor_a()),
            end: b.world_center(),
            style,
        }))
    }

    /// Remove the created joint from `world`
    ///
    /// The wrapper keeps its definition and can be created again.
    pub fn destroy<W>(&mut self, world: &mut W) -> Result<(), JointError>
    where
        W: PhysicsBackend + ?Sized,
    {
        let handle = self.joint.take().ok_or(JointError::NotCreated)?;
        self.attached = None;
        if world.destroy_joint(handle) {
            Ok(())
        } else {
            Err(JointError::UnknownJoint(handle))
        }
    }

    fn bodies_of<'w, W>(
        world: &'w W,
        state: &RevoluteJointState,
    ) -> Result<(&'w Body, &'w Body), JointError>
    where
        W: PhysicsBackend + ?Sized,
    {
        let a = world
            .body(state.body_a())
            .ok_or(JointError::UnknownBody(state.body_a()))?;
        let b = world
            .body(state.body_b())
            .ok_or(JointError::UnknownBody(state.body_b()))?;
        Ok((a, b))
    }
}
