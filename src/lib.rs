//! Canvas SHMUP - a vertical shoot-'em-up prototype
//!
//! Core modules:
//! - `sim`: Simulation (actors, movement, boundary clamping, game state)
//! - `renderer`: Canvas-style drawing surface and frame composition
//! - `platform`: Keyboard input mapping and the fixed-rate game loop
//! - `settings`: Player-tunable configuration

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::ShmupError;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Game loop rate
    pub const TICK_RATE_HZ: u32 = 60;
    /// Milliseconds between two ticks
    pub const TICK_INTERVAL_MS: f64 = 1000.0 / TICK_RATE_HZ as f64;

    /// Unscaled window resolution
    pub const BASE_RESOLUTION: (f32, f32) = (640.0, 480.0);
    /// Unscaled play area size
    pub const GAME_SCREEN: (f32, f32) = (340.0, 400.0);
    /// Gap between the window edge and the play area
    pub const GAME_PADDING: f32 = 40.0;

    /// Player defaults (sizes are native, speeds are multiplied by scale)
    pub const PLAYER_WIDTH: f32 = 25.0;
    pub const PLAYER_HEIGHT: f32 = 25.0;
    pub const PLAYER_SPEED: f32 = 4.0;
    pub const PLAYER_SLOW_FACTOR: f32 = 0.5;
    pub const SHOOTING_COOLDOWN_MS: f64 = 50.0;

    /// Enemy defaults
    pub const ENEMY_WIDTH: f32 = 25.0;
    pub const ENEMY_HEIGHT: f32 = 25.0;
    pub const ENEMY_SPEED: f32 = 1.0;
    pub const ENEMY_DIRECTION: (f32, f32) = (1.0, 0.25);
    pub const ENEMY_HITPOINTS: u32 = 1;

    /// Projectile defaults
    pub const PROJECTILE_WIDTH: f32 = 5.0;
    pub const PROJECTILE_HEIGHT: f32 = 7.0;
    pub const PROJECTILE_SPEED: f32 = 10.0;

    /// Starting HUD counters
    pub const STARTING_LIVES: u32 = 3;
    pub const STARTING_BOMBS: u32 = 3;
    /// Upper bound for lives and bombs (drawn as one star each)
    pub const MAX_HUD_COUNT: u32 = 99;
}

/// Scale a direction to unit length when it points diagonally.
///
/// Axis-aligned and zero vectors are returned untouched, so a diagonal
/// move covers the same distance per tick as an axial one.
#[inline]
pub fn normalize_direction(direction: Vec2) -> Vec2 {
    if direction.x != 0.0 && direction.y != 0.0 {
        direction / direction.length()
    } else {
        direction
    }
}
