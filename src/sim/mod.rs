//! Simulation module
//!
//! All gameplay logic lives here:
//! - One tick per call, clock passed in (no hidden time source)
//! - Actors updated in list order, each exactly once
//! - No rendering or platform dependencies beyond the input snapshot

pub mod actor;
pub mod boundary;
pub mod enemy;
pub mod player;
pub mod projectile;
pub mod state;
pub mod tick;

pub use actor::{Actor, Body, Lifecycle, UpdateContext, compute_direction};
pub use boundary::{Boundary, ClampPolicy, clamp_axis};
pub use enemy::Enemy;
pub use player::Player;
pub use projectile::Projectile;
pub use state::{GameState, Hud};
pub use tick::tick;
