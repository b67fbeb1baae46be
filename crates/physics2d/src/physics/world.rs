//! Physics world: body and joint storage
//!
//! [`PhysicsBackend`] is the narrow interface joint wrappers consume. The
//! in-memory [`PhysicsWorld`] implements it by storing bodies and joints in
//! slot maps and handing out stable handles; it never steps a simulation.

use crate::config::{ConfigError, JointLineStyle, PhysicsConfig};
use crate::foundation::collections::{BodyHandle, JointHandle, SlotMap};
use crate::foundation::math::Vec2;
use crate::physics::body::{Body, BodyDef};
use crate::physics::joints::{JointError, JointSettings, RevoluteJointDef, RevoluteJointState};
use log::{debug, trace};

/// What a joint wrapper needs from the world it creates joints in
pub trait PhysicsBackend {
    /// Look up a body
    fn body(&self, handle: BodyHandle) -> Option<&Body>;

    /// Get or create a static ground body at a position
    fn ground_body(&mut self, position: Vec2) -> BodyHandle;

    /// Create a revolute joint from an initialized definition
    fn create_revolute_joint(
        &mut self,
        def: &RevoluteJointDef,
        settings: &JointSettings,
    ) -> Result<JointHandle, JointError>;

    /// Look up a created revolute joint
    fn revolute_joint(&self, handle: JointHandle) -> Option<&RevoluteJointState>;

    /// Resolved debug line style of a joint
    fn joint_line_style(&self, handle: JointHandle) -> Option<JointLineStyle>;

    /// Remove a joint; returns whether it existed
    fn destroy_joint(&mut self, handle: JointHandle) -> bool;
}

/// A joint as stored by the world
#[derive(Debug, Clone)]
struct JointRecord {
    state: RevoluteJointState,
    line: JointLineStyle,
    survive: bool,
}

/// In-memory physics world
pub struct PhysicsWorld {
    config: PhysicsConfig,
    bodies: SlotMap<BodyHandle, Body>,
    joints: SlotMap<JointHandle, JointRecord>,
    ground_bodies: Vec<BodyHandle>,
}

impl PhysicsWorld {
    /// Create an empty world, rejecting an invalid configuration
    pub fn new(config: PhysicsConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: PhysicsConfig) -> Self {
        Self {
            config,
            bodies: SlotMap::with_key(),
            joints: SlotMap::with_key(),
            ground_bodies: Vec::new(),
        }
    }

    /// World configuration
    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Gravity vector
    pub fn gravity(&self) -> Vec2 {
        self.config.gravity
    }

    /// Add a body
    pub fn create_body(&mut self, def: &BodyDef) -> BodyHandle {
        let handle = self.bodies.insert(Body::from_def(def));
        trace!("Created {:?} body {:?} at {:?}", def.body_type, handle, def.position);
        handle
    }

    /// Mutable access to a body
    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.bodies.get_mut(handle)
    }

    /// Remove a body and every joint attached to it
    pub fn destroy_body(&mut self, handle: BodyHandle) -> bool {
        if self.bodies.remove(handle).is_none() {
            return false;
        }

        self.ground_bodies.retain(|&ground| ground != handle);
        let before = self.joints.len();
        self.joints.retain(|_, record| !record.state.is_attached_to(handle));
        let removed = before - self.joints.len();
        if removed > 0 {
            debug!("Destroyed body {:?} and {} attached joint(s)", handle, removed);
        }
        true
    }

    /// Mutable access to a created revolute joint
    pub fn revolute_joint_mut(&mut self, handle: JointHandle) -> Option<&mut RevoluteJointState> {
        self.joints.get_mut(handle).map(|record| &mut record.state)
    }

    /// Handles of every joint attached to a body
    pub fn joints_of(&self, body: BodyHandle) -> impl Iterator<Item = JointHandle> + '_ {
        self.joints
            .iter()
            .filter(move |(_, record)| record.state.is_attached_to(body))
            .map(|(handle, _)| handle)
    }

    /// Destroy every joint not marked to survive
    ///
    /// Returns the number of joints removed.
    pub fn clear_transient_joints(&mut self) -> usize {
        let before = self.joints.len();
        self.joints.retain(|_, record| record.survive);
        let removed = before - self.joints.len();
        debug!("Cleared {} transient joint(s), {} survive", removed, self.joints.len());
        removed
    }

    /// Number of bodies
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Number of joints
    pub fn joint_count(&self) -> usize {
        self.joints.len()
    }

    fn require_body(&self, handle: Option<BodyHandle>) -> Result<BodyHandle, JointError> {
        let handle = handle.ok_or(JointError::MissingBodies)?;
        if self.bodies.contains_key(handle) {
            Ok(handle)
        } else {
            Err(JointError::UnknownBody(handle))
        }
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::with_valid_config(PhysicsConfig::default())
    }
}

impl PhysicsBackend for PhysicsWorld {
    fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle)
    }

    fn ground_body(&mut self, position: Vec2) -> BodyHandle {
        let snap = self.config.ground_snap_distance;
        let existing = self.ground_bodies.iter().copied().find(|&handle| {
            self.bodies
                .get(handle)
                .is_some_and(|body| (body.position() - position).norm() <= snap)
        });

        if let Some(handle) = existing {
            return handle;
        }

        let handle = self.create_body(&BodyDef::fixed(position));
        self.ground_bodies.push(handle);
        debug!("Created ground body {:?} at ({}, {})", handle, position.x, position.y);
        handle
    }

    fn create_revolute_joint(
        &mut self,
        def: &RevoluteJointDef,
        settings: &JointSettings,
    ) -> Result<JointHandle, JointError> {
        let body_a = self.require_body(def.body_a)?;
        let body_b = self.require_body(def.body_b)?;
        def.validate()?;

        let state = RevoluteJointState::from_def(def, body_a, body_b);
        let line = settings.line.resolve(self.config.joint_line);
        let handle = self.joints.insert(JointRecord {
            state,
            line,
            survive: settings.survive,
        });

        debug!(
            "Created revolute joint {:?} between {:?} and {:?} (limit: {}, motor: {})",
            handle, body_a, body_b, def.enable_limit, def.enable_motor
        );
        Ok(handle)
    }

    fn revolute_joint(&self, handle: JointHandle) -> Option<&RevoluteJointState> {
        self.joints.get(handle).map(|record| &record.state)
    }

    fn joint_line_style(&self, handle: JointHandle) -> Option<JointLineStyle> {
        self.joints.get(handle).map(|record| record.line)
    }

    fn destroy_joint(&mut self, handle: JointHandle) -> bool {
        self.joints.remove(handle).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def_between(a: BodyHandle, b: BodyHandle) -> RevoluteJointDef {
        RevoluteJointDef {
            body_a: Some(a),
            body_b: Some(b),
            ..Default::default()
        }
    }

    #[test]
    fn test_ground_body_is_static_at_position() {
        let mut world = PhysicsWorld::default();
        let ground = world.ground_body(Vec2::new(3.0, 4.0));

        let body = world.body(ground).unwrap();
        assert!(body.is_static());
        assert_eq!(body.position(), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_ground_body_shared_per_position() {
        let mut world = PhysicsWorld::default();
        let first = world.ground_body(Vec2::new(1.0, 1.0));
        let again = world.ground_body(Vec2::new(1.0, 1.0));
        let elsewhere = world.ground_body(Vec2::new(5.0, 1.0));

        assert_eq!(first, again);
        assert_ne!(first, elsewhere);
        assert_eq!(world.body_count(), 2);
    }

    #[test]
    fn test_ground_snap_distance_from_config() {
        let mut world = PhysicsWorld::new(PhysicsConfig::new().with_ground_snap_distance(0.5)).unwrap();
        let first = world.ground_body(Vec2::new(0.0, 0.0));
        let near = world.ground_body(Vec2::new(0.3, 0.0));

        assert_eq!(first, near);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let nan_snap = PhysicsConfig::new().with_ground_snap_distance(f32::NAN);
        assert!(matches!(PhysicsWorld::new(nan_snap), Err(ConfigError::Invalid(_))));

        let nan_gravity = PhysicsConfig::new().with_gravity(Vec2::new(f32::NAN, 0.0));
        assert!(matches!(PhysicsWorld::new(nan_gravity), Err(ConfigError::Invalid(_))));

        let zero_g = PhysicsConfig::new().with_gravity(Vec2::zeros());
        let world = PhysicsWorld::new(zero_g).unwrap();
        assert_eq!(world.gravity(), Vec2::zeros());
    }

    #[test]
    fn test_create_joint_rejects_missing_and_unknown_bodies() {
        let mut world = PhysicsWorld::default();
        let a = world.create_body(&BodyDef::dynamic(Vec2::zeros()));
        let settings = JointSettings::default();

        let missing = RevoluteJointDef {
            body_a: Some(a),
            ..Default::default()
        };
        assert_eq!(
            world.create_revolute_joint(&missing, &settings),
            Err(JointError::MissingBodies)
        );

        let b = world.create_body(&BodyDef::dynamic(Vec2::zeros()));
        world.destroy_body(b);
        assert_eq!(
            world.create_revolute_joint(&def_between(a, b), &settings),
            Err(JointError::UnknownBody(b))
        );
        assert_eq!(world.joint_count(), 0);
    }

    #[test]
    fn test_destroy_body_removes_attached_joints() {
        let mut world = PhysicsWorld::default();
        let a = world.create_body(&BodyDef::dynamic(Vec2::zeros()));
        let b = world.create_body(&BodyDef::dynamic(Vec2::new(1.0, 0.0)));
        let c = world.create_body(&BodyDef::dynamic(Vec2::new(2.0, 0.0)));
        let settings = JointSettings::default();

        world.create_revolute_joint(&def_between(a, b), &settings).unwrap();
        let kept = world.create_revolute_joint(&def_between(b, c), &settings).unwrap();
        assert_eq!(world.joints_of(b).count(), 2);

        assert!(world.destroy_body(a));
        assert_eq!(world.joint_count(), 1);
        assert!(world.revolute_joint(kept).is_some());
        assert!(!world.destroy_body(a));
    }

    #[test]
    fn test_clear_transient_joints_keeps_survivors() {
        let mut world = PhysicsWorld::default();
        let a = world.create_body(&BodyDef::dynamic(Vec2::zeros()));
        let b = world.create_body(&BodyDef::dynamic(Vec2::new(1.0, 0.0)));

        let transient = world
            .create_revolute_joint(&def_between(a, b), &JointSettings::default())
            .unwrap();
        let survivor = world
            .create_revolute_joint(
                &def_between(a, b),
                &JointSettings {
                    survive: true,
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(world.clear_transient_joints(), 1);
        assert!(world.revolute_joint(transient).is_none());
        assert!(world.revolute_joint(survivor).is_some());
    }

    #[test]
    fn test_line_style_resolved_against_config() {
        let style = JointLineStyle {
            color: 0x123456,
            ..JointLineStyle::default()
        };
        let mut world = PhysicsWorld::new(PhysicsConfig::new().with_joint_line(style)).unwrap();
        let a = world.create_body(&BodyDef::dynamic(Vec2::zeros()));
        let b = world.create_body(&BodyDef::dynamic(Vec2::new(1.0, 0.0)));

        let mut settings = JointSettings::default();
        settings.line.alpha = Some(0.25);
        let joint = world.create_revolute_joint(&def_between(a, b), &settings).unwrap();

        let resolved = world.joint_line_style(joint).unwrap();
        assert_eq!(resolved.color, 0x123456);
        assert_eq!(resolved.alpha, 0.25);
    }
}
