//! Game state and HUD counters

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::boundary::{Boundary, ClampPolicy};
use super::enemy::Enemy;
use super::player::Player;
use crate::consts::*;
use crate::settings::Settings;

/// Heads-up display counters
///
/// Tracked for display only; nothing in the simulation reads them yet and
/// none are persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub high_score: u64,
    pub score: u64,
    pub lives: u32,
    pub bombs: u32,
    pub power: u32,
    pub max_power: u32,
    pub graze: u32,
    pub collected_score: u64,
}

impl Hud {
    pub fn new(lives: u32, bombs: u32) -> Self {
        Self {
            high_score: 0,
            score: 0,
            lives,
            bombs,
            power: 0,
            max_power: 0,
            graze: 0,
            collected_score: 0,
        }
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new(STARTING_LIVES, STARTING_BOMBS)
    }
}

/// The in-game state: play area, actors and HUD
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub scale: f32,
    /// Unscaled play area size
    pub game_screen: Vec2,
    /// Unscaled gap between window edge and play area
    pub padding: f32,
    pub clamp_policy: ClampPolicy,
    /// Live actors; insertion order is draw order
    pub actors: Vec<Actor>,
    pub hud: Hud,
    /// Ticks simulated so far
    pub time_ticks: u64,
}

impl GameState {
    /// A state with no actors
    pub fn empty(scale: f32, clamp_policy: ClampPolicy) -> Self {
        Self {
            scale,
            game_screen: Vec2::new(GAME_SCREEN.0, GAME_SCREEN.1),
            padding: GAME_PADDING,
            clamp_policy,
            actors: Vec::new(),
            hud: Hud::default(),
            time_ticks: 0,
        }
    }

    /// Opening layout: one enemy near the top, the player near the bottom
    pub fn new(settings: &Settings) -> Self {
        let mut state = Self::empty(settings.scale, settings.clamp_policy);
        state.hud = Hud::new(settings.lives, settings.bombs);

        let scale = state.scale;
        let area = state.game_area();

        let start = Vec2::new(
            area.max.x / 2.0 + PLAYER_WIDTH * scale,
            area.max.y - PLAYER_HEIGHT * scale,
        );
        let player = Player::new(
            start,
            settings.player_speed * scale,
            settings.slow_factor,
            settings.shooting_cooldown_ms,
        );

        let enemy = Enemy::new(
            Vec2::new(start.x, area.min.y + PLAYER_HEIGHT * scale),
            ENEMY_SPEED * scale,
            Vec2::new(ENEMY_DIRECTION.0, ENEMY_DIRECTION.1),
        );

        state.actors.push(Actor::Enemy(enemy));
        state.actors.push(Actor::Player(player));

        log::info!(
            "Game state ready: play area {:?}..{:?}, {} actors, clamp {}",
            area.min,
            area.max,
            state.actors.len(),
            state.clamp_policy.as_str()
        );

        state
    }

    /// Scaled play area actors are clamped to
    pub fn game_area(&self) -> Boundary {
        let padding = self.padding * self.scale;
        Boundary::new(
            padding,
            padding / 1.5,
            self.game_screen.x * self.scale + padding,
            self.game_screen.y * self.scale + padding / 1.5,
        )
    }

    pub fn player(&self) -> Option<&Player> {
        self.actors.iter().find_map(|actor| match actor {
            Actor::Player(player) => Some(player),
            _ => None,
        })
    }

    pub fn enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.actors.iter().filter_map(|actor| match actor {
            Actor::Enemy(enemy) => Some(enemy),
            _ => None,
        })
    }

    pub fn projectile_count(&self) -> usize {
        self.actors.iter().filter(|a| a.is_projectile()).count()
    }
}
