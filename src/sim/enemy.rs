//! Enemies
//!
//! An enemy drifts along its direction, bounces off the left and right
//! edges, and leaves the field for good once it touches the top or bottom.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::{Body, Lifecycle, UpdateContext};
use crate::consts::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub body: Body,
    pub hitpoints: u32,
}

impl Enemy {
    pub fn new(pos: Vec2, speed: f32, direction: Vec2) -> Self {
        Self {
            body: Body::new(ENEMY_WIDTH, ENEMY_HEIGHT, pos, speed, direction),
            hitpoints: ENEMY_HITPOINTS,
        }
    }

    pub fn update(&mut self, ctx: &mut UpdateContext<'_>) -> Lifecycle {
        self.body.move_within(&ctx.boundary, ctx.policy);

        if ctx.boundary.touches_x(self.body.pos.x) {
            self.body.direction.x = -self.body.direction.x;
        }

        if ctx.boundary.touches_y(self.body.pos.y) {
            log::debug!("Enemy left the field at {:?}", self.body.pos);
            return Lifecycle::Despawn;
        }

        Lifecycle::Alive
    }
}
