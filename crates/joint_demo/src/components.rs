//! Demo game objects

use physics2d::prelude::*;

/// A sprite with an optional physics body
#[derive(Debug, Clone)]
pub struct Sprite {
    /// Display name used in log output
    pub name: &'static str,

    /// Body backing this sprite, once spawned
    pub body: Option<BodyHandle>,
}

impl Sprite {
    /// Spawn a sprite with a body in `world`
    pub fn spawn(world: &mut PhysicsWorld, name: &'static str, def: &BodyDef) -> Self {
        Self {
            name,
            body: Some(world.create_body(def)),
        }
    }
}

impl PhysicsObject for Sprite {
    fn body(&self) -> Option<BodyHandle> {
        self.body
    }
}
