//! Platform abstraction layer
//!
//! Handles the host-facing side of the game:
//! - Keyboard input mapping
//! - Fixed-rate frame driving

pub mod game_loop;
pub mod input;

pub use game_loop::Game;
pub use input::{Action, InputState, KEY_BINDINGS, KeyBinding, binding_for};
