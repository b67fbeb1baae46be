//! Revolute joint demo
//!
//! Builds a limited pendulum and a motorised wheel, then reports the joints
//! the world ended up with. Pass a `.toml` or `.ron` physics config path as
//! the first argument to override the defaults.

mod components;

use components::Sprite;
use log::{info, warn};
use physics2d::foundation::logging;
use physics2d::prelude::*;

/// Load and validate the config at `path`, or the defaults when there is none
fn load_config(path: Option<&str>) -> Result<PhysicsConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(PhysicsConfig::default());
    };

    let config = PhysicsConfig::load_from_file(path)?;
    config.validate()?;
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args().nth(1);
    let (config, load_error) = match load_config(path.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (PhysicsConfig::default(), Some(e)),
    };

    // Logger comes up before anything is reported, at the configured level
    logging::init_with_level(&config.log_level);
    if let (Some(path), Some(e)) = (&path, &load_error) {
        warn!("Ignoring config {}: {}", path, e);
    }

    let mut world = PhysicsWorld::new(config)?;
    let gravity = world.gravity();
    info!("Gravity: ({}, {})", gravity.x, gravity.y);

    // Pendulum hanging from a ground body at its top
    let bob = Sprite::spawn(&mut world, "bob", &BodyDef::dynamic(Vec2::new(0.0, -3.0)));
    let mut pendulum = RevoluteJoint::from_object(&bob);
    pendulum
        .set_anchor_a(Vec2::new(0.0, 0.0))
        .set_enable_limit(true)
        .set_lower_angle(-60.0)
        .set_upper_angle(60.0)
        .set_line_color(0xFFCC00)
        .set_survive(true)
        .create(&mut world)?;

    // Wheel on a chassis, driven by a motor
    let chassis = Sprite::spawn(&mut world, "chassis", &BodyDef::dynamic(Vec2::new(6.0, 1.0)));
    let wheel = Sprite::spawn(
        &mut world,
        "wheel",
        &BodyDef::dynamic(Vec2::new(7.0, 0.0)).with_angle(0.5),
    );
    let mut axle = RevoluteJoint::from_objects(&chassis, &wheel);
    axle.set_anchor_a(Vec2::new(7.0, 0.0))
        .set_enable_motor(true)
        .set_motor_speed(deg_to_rad(360.0))
        .set_max_motor_torque(40.0)
        .set_show_line(false)
        .create(&mut world)?;

    for (name, joint) in [(bob.name, &pendulum), ("axle", &axle)] {
        let state = joint.joint(&world)?;
        info!(
            "{}: angle {:.1} deg, limit [{:.1}, {:.1}] deg (enabled: {}), motor {} rad/s (enabled: {})",
            name,
            rad_to_deg(joint.joint_angle(&world)?),
            rad_to_deg(state.lower_limit()),
            rad_to_deg(state.upper_limit()),
            state.is_limit_enabled(),
            state.motor_speed(),
            state.is_motor_enabled(),
        );

        match joint.debug_line(&world)? {
            Some(line) => {
                for (from, to) in line.segments() {
                    info!(
                        "{} line: ({}, {}) -> ({}, {}) color {:#08x}",
                        name, from.x, from.y, to.x, to.y, line.style.color
                    );
                }
            }
            None => info!("{} line hidden", name),
        }
    }

    let removed = world.clear_transient_joints();
    info!(
        "Scene reset removed {} joint(s); {} remain ({} on {})",
        removed,
        world.joint_count(),
        world.joints_of(bob.body.ok_or("bob has no body")?).count(),
        bob.name
    );

    Ok(())
}
