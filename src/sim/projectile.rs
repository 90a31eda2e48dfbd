//! Projectiles fired by the player

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::{Body, Lifecycle, UpdateContext};
use crate::consts::*;

/// A shot travelling straight up at constant speed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub body: Body,
}

impl Projectile {
    pub fn new(pos: Vec2) -> Self {
        Self::with_motion(pos, PROJECTILE_SPEED, Vec2::new(0.0, -1.0))
    }

    pub fn with_motion(pos: Vec2, speed: f32, direction: Vec2) -> Self {
        Self {
            body: Body::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT, pos, speed, direction),
        }
    }

    pub fn update(&mut self, ctx: &mut UpdateContext<'_>) -> Lifecycle {
        self.body.move_within(&ctx.boundary, ctx.policy);

        let pos = self.body.pos;
        if ctx.boundary.touches_x(pos.x) || ctx.boundary.touches_y(pos.y) {
            return Lifecycle::Despawn;
        }

        Lifecycle::Alive
    }
}
