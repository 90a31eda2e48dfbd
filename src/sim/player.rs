//! The player's ship

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, Body, Lifecycle, UpdateContext, compute_direction};
use super::projectile::Projectile;
use crate::consts::*;
use crate::platform::input::Action;

/// Player-controlled ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    pub standard_speed: f32,
    pub slowed_speed: f32,
    /// Focus mode held: slowed speed and visible hitbox
    pub is_slowed: bool,
    /// Bomb key held (bombs are not implemented beyond the flag)
    pub is_bombing: bool,
    /// Clock reading of the last shot, `None` before the first one
    pub last_shot_ms: Option<f64>,
    pub shooting_cooldown_ms: f64,
}

impl Player {
    pub fn new(pos: Vec2, speed: f32, slow_factor: f32, shooting_cooldown_ms: f64) -> Self {
        Self {
            body: Body::new(PLAYER_WIDTH, PLAYER_HEIGHT, pos, speed, Vec2::ZERO),
            standard_speed: speed,
            slowed_speed: speed * slow_factor,
            is_slowed: false,
            is_bombing: false,
            last_shot_ms: None,
            shooting_cooldown_ms,
        }
    }

    /// True once more than the cooldown has elapsed since the last shot
    pub fn can_shoot(&self, now_ms: f64) -> bool {
        match self.last_shot_ms {
            None => true,
            Some(last) => now_ms - last > self.shooting_cooldown_ms,
        }
    }

    /// Where projectiles leave the ship: centred, just above the nose
    pub fn muzzle(&self, scale: f32) -> Vec2 {
        Vec2::new(
            self.body.pos.x + self.body.width * scale / 2.0,
            self.body.pos.y - self.body.height * scale / 10.0,
        )
    }

    /// Fire if the cooldown allows. Returns whether a projectile spawned.
    pub fn shoot(&mut self, ctx: &mut UpdateContext<'_>) -> bool {
        if !self.can_shoot(ctx.now_ms) {
            return false;
        }
        self.last_shot_ms = Some(ctx.now_ms);
        ctx.spawn(Actor::Projectile(Projectile::new(self.muzzle(ctx.scale))));
        true
    }

    pub fn update(&mut self, ctx: &mut UpdateContext<'_>) -> Lifecycle {
        self.is_slowed = ctx.input.is_held(Action::Slow);

        let bombing = ctx.input.is_held(Action::Cancel);
        if bombing && !self.is_bombing {
            log::debug!("Bomb requested at {:?}", self.body.pos);
        }
        self.is_bombing = bombing;

        self.body.speed = if self.is_slowed {
            self.slowed_speed
        } else {
            self.standard_speed
        };

        if ctx.input.is_held(Action::Confirm) {
            self.shoot(ctx);
        }

        self.body.direction = compute_direction(ctx.input);
        self.body.move_within(&ctx.boundary, ctx.policy);

        Lifecycle::Alive
    }
}
