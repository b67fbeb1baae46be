//! Scene-level tests combining bodies, ground bodies and several joints

use crate::config::{Config, PhysicsConfig};
use crate::foundation::math::Vec2;
use crate::physics::{BodyDef, PhysicsBackend, PhysicsWorld, RevoluteJoint};
use approx::assert_relative_eq;

#[test]
fn test_chain_of_links_shares_one_ground_body() {
    let mut world = PhysicsWorld::default();

    // Two independent pendulums hung from the same point
    let left = world.create_body(&BodyDef::dynamic(Vec2::new(0.0, 0.0)));
    let right = world.create_body(&BodyDef::dynamic(Vec2::new(0.0, 0.0)));

    let mut left_pivot = RevoluteJoint::anchored_to_ground(left);
    left_pivot.create(&mut world).unwrap();
    let mut right_pivot = RevoluteJoint::anchored_to_ground(right);
    right_pivot.create(&mut world).unwrap();

    assert_eq!(left_pivot.body_b(), right_pivot.body_b());
    assert_eq!(world.body_count(), 3);
    assert_eq!(world.joint_count(), 2);
}

#[test]
fn test_pendulum_chain() {
    let mut world = PhysicsWorld::default();
    let links: Vec<_> = (0..3)
        .map(|i| world.create_body(&BodyDef::dynamic(Vec2::new(0.0, -(i as f32) - 1.0))))
        .collect();

    let mut top = RevoluteJoint::new(None, Some(links[0]));
    top.set_anchor_a(Vec2::new(0.0, 0.0)).create(&mut world).unwrap();

    let mut joints = vec![top];
    for pair in links.windows(2) {
        let mut joint = RevoluteJoint::between(pair[0], pair[1]);
        let anchor = world.body(pair[0]).unwrap().position() - Vec2::new(0.0, 0.5);
        joint
            .set_anchor_a(anchor)
            .set_enable_limit(true)
            .set_lower_angle(-20.0)
            .set_upper_angle(20.0)
            .create(&mut world)
            .unwrap();
        joints.push(joint);
    }

    assert_eq!(world.joint_count(), 3);

    // Ground body for the top joint sits at the first link
    let ground = world.body(joints[0].body_a().unwrap()).unwrap();
    assert!(ground.is_static());
    assert_eq!(ground.position(), Vec2::new(0.0, -1.0));

    // Joint between link 0 and 1 is half way between them
    let state = joints[1].joint(&world).unwrap();
    assert_relative_eq!(state.local_anchor_a(), Vec2::new(0.0, -0.5));
    assert_relative_eq!(state.local_anchor_b(), Vec2::new(0.0, 0.5));
    assert_relative_eq!(state.upper_limit(), 20.0_f32.to_radians());
}

#[test]
fn test_scene_reset_keeps_surviving_joints() {
    let mut world = PhysicsWorld::default();
    let door = world.create_body(&BodyDef::dynamic(Vec2::new(1.0, 0.0)));
    let wheel = world.create_body(&BodyDef::dynamic(Vec2::new(5.0, 0.0)));

    let mut hinge = RevoluteJoint::anchored_to_ground(door);
    hinge.set_survive(true).create(&mut world).unwrap();
    let mut axle = RevoluteJoint::anchored_to_ground(wheel);
    axle.create(&mut world).unwrap();

    assert_eq!(world.clear_transient_joints(), 1);
    assert!(hinge.joint(&world).is_ok());
    assert!(axle.joint(&world).is_err());
}

#[test]
fn test_world_from_config_file() {
    let path = std::env::temp_dir().join(format!("physics2d_test_{}.toml", std::process::id()));
    let path = path.to_string_lossy().into_owned();

    let mut config = PhysicsConfig::new().with_ground_snap_distance(2.0);
    config.joint_line.color = 0x336699;
    config.save_to_file(&path).unwrap();

    let loaded = PhysicsConfig::load_from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded, config);

    let mut world = PhysicsWorld::new(loaded).unwrap();
    assert_eq!(world.config().ground_snap_distance, 2.0);
    let a = world.create_body(&BodyDef::dynamic(Vec2::new(0.0, 0.0)));
    let b = world.create_body(&BodyDef::dynamic(Vec2::new(1.0, 0.0)));

    let mut first = RevoluteJoint::anchored_to_ground(a);
    first.create(&mut world).unwrap();
    let mut second = RevoluteJoint::anchored_to_ground(b);
    second.create(&mut world).unwrap();

    // Within snap distance, both use the same ground body
    assert_eq!(first.body_b(), second.body_b());
    let line = first.debug_line(&world).unwrap().unwrap();
    assert_eq!(line.style.color, 0x336699);
}
