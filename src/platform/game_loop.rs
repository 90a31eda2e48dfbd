//! Fixed-rate game loop driver
//!
//! The host (a browser interval or a native sleep loop) calls
//! [`Game::frame`] once per tick and forwards key events to
//! [`Game::key_down`] / [`Game::key_up`]. Both run on the same thread, so
//! input never changes in the middle of a tick.

use super::input::{Action, InputState};
use crate::renderer::{RenderSurface, draw_frame};
use crate::settings::Settings;
use crate::sim::{GameState, tick};

/// Top-level game: input, state stack and settings
pub struct Game {
    input: InputState,
    /// Last entry is the active state
    states: Vec<GameState>,
    settings: Settings,
    frames: u64,
}

impl Game {
    /// Start with a single in-game state
    pub fn new(settings: Settings) -> Self {
        let state = GameState::new(&settings);
        Self {
            input: InputState::new(),
            states: vec![state],
            settings,
            frames: 0,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn key_down(&mut self, code: &str) -> Option<Action> {
        let action = self.input.press(code);
        if let Some(action) = action {
            log::trace!("key down {} -> {}", code, action.as_str());
        }
        action
    }

    pub fn key_up(&mut self, code: &str) -> Option<Action> {
        self.input.release(code)
    }

    /// Focus lost: key-up events will not arrive, so release everything
    pub fn release_all(&mut self) {
        self.input.clear();
    }

    pub fn active_state(&self) -> Option<&GameState> {
        self.states.last()
    }

    pub fn active_state_mut(&mut self) -> Option<&mut GameState> {
        self.states.last_mut()
    }

    pub fn push_state(&mut self, state: GameState) {
        self.states.push(state);
    }

    pub fn pop_state(&mut self) -> Option<GameState> {
        self.states.pop()
    }

    /// Run one tick: update then draw the active state.
    ///
    /// Returns `false` once there is no state left to run; the host should
    /// stop its ticker.
    pub fn frame<S: RenderSurface>(&mut self, now_ms: f64, surface: &mut S) -> bool {
        let show_hitbox = self.settings.show_hitbox;
        let Some(state) = self.states.last_mut() else {
            return false;
        };

        tick(state, &self.input, now_ms);
        draw_frame(surface, state, show_hitbox);

        self.frames += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TICK_INTERVAL_MS;
    use crate::renderer::{Color, RecordingSurface};
    use crate::sim::Actor;

    #[test]
    fn test_new_game_has_one_state() {
        let game = Game::new(Settings::default());
        let state = game.active_state().expect("active state");
        assert_eq!(state.actors.len(), 2);
    }

    #[test]
    fn test_frame_updates_then_draws() {
        let mut game = Game::new(Settings::default());
        let mut surface = RecordingSurface::new(1.0);

        game.key_down("ArrowLeft");
        let start = game.active_state().and_then(|s| s.player()).map(|p| p.body.pos);

        assert!(game.frame(0.0, &mut surface));

        let after = game.active_state().and_then(|s| s.player()).map(|p| p.body.pos);
        let (start, after) = (start.expect("player"), after.expect("player"));
        assert_eq!(after.x, start.x - 4.0);
        assert!(!surface.commands.is_empty());
        assert_eq!(game.frames(), 1);
    }

    #[test]
    fn test_unbound_keys_do_nothing() {
        let mut game = Game::new(Settings::default());
        assert_eq!(game.key_down("KeyQ"), None);
        assert_eq!(*game.input(), InputState::new());
    }

    #[test]
    fn test_shooting_through_the_loop() {
        let mut game = Game::new(Settings::default());
        let mut surface = RecordingSurface::new(1.0);
        game.key_down("KeyZ");

        for i in 0..3 {
            surface.clear();
            game.frame(i as f64 * TICK_INTERVAL_MS, &mut surface);
        }

        let state = game.active_state().expect("state");
        assert_eq!(state.projectile_count(), 1);
        assert_eq!(surface.count_color(Color::Yellow), 1);
    }

    #[test]
    fn test_release_all_stops_movement() {
        let mut game = Game::new(Settings::default());
        let mut surface = RecordingSurface::new(1.0);
        game.key_down("ArrowUp");
        game.release_all();
        assert!(!game.input().is_held(Action::Up));

        let before = game.active_state().and_then(|s| s.player()).map(|p| p.body.pos);
        game.frame(0.0, &mut surface);
        let after = game.active_state().and_then(|s| s.player()).map(|p| p.body.pos);
        assert_eq!(before, after);
    }

    #[test]
    fn test_empty_stack_stops_loop() {
        let mut game = Game::new(Settings::default());
        let mut surface = RecordingSurface::new(1.0);
        assert!(game.pop_state().is_some());
        assert!(!game.frame(0.0, &mut surface));
        assert!(surface.commands.is_empty());
    }

    #[test]
    fn test_only_top_state_runs() {
        let mut game = Game::new(Settings::default());
        let mut surface = RecordingSurface::new(1.0);
        let paused_below = game.active_state().map(|s| s.time_ticks);

        let mut overlay = GameState::new(game.settings());
        overlay.actors.retain(|a| matches!(a, Actor::Player(_)));
        game.push_state(overlay);
        game.frame(0.0, &mut surface);

        assert_eq!(game.active_state().map(|s| s.time_ticks), Some(1));
        let below = game.pop_state().and_then(|_| game.active_state().map(|s| s.time_ticks));
        assert_eq!(below, paused_below);
    }
}
