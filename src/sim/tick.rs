//! Fixed-rate simulation tick
//!
//! Advances every actor once, in list order. Actors that despawn are
//! dropped in the same pass and actors spawned during the pass join the
//! end of the list, so nothing is skipped or updated twice.

use super::actor::{Lifecycle, UpdateContext};
use super::state::GameState;
use crate::platform::input::InputState;

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &InputState, now_ms: f64) {
    if state.actors.is_empty() {
        return;
    }

    let mut ctx = UpdateContext::new(
        input,
        state.game_area(),
        state.clamp_policy,
        now_ms,
        state.scale,
    );

    let before = state.actors.len();
    state
        .actors
        .retain_mut(|actor| actor.update(&mut ctx) == Lifecycle::Alive);
    let despawned = before - state.actors.len();

    let spawned = ctx.into_spawned();
    if despawned > 0 || !spawned.is_empty() {
        log::trace!(
            "tick {}: {} despawned, {} spawned",
            state.time_ticks,
            despawned,
            spawned.len()
        );
    }
    state.actors.extend(spawned);
    state.time_ticks += 1;
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::consts::TICK_INTERVAL_MS;
    use crate::platform::input::Action;
    use crate::settings::Settings;
    use crate::sim::actor::Actor;
    use crate::sim::boundary::{Boundary, ClampPolicy};
    use crate::sim::enemy::Enemy;
    use crate::sim::player::Player;
    use crate::sim::projectile::Projectile;

    /// Test state whose play area is exactly `area`
    fn state_with_area(area: Boundary) -> GameState {
        let mut state = GameState::empty(1.0, ClampPolicy::AllAxes);
        state.padding = 0.0;
        state.game_screen = area.max;
        assert_eq!(state.game_area(), Boundary::new(0.0, 0.0, area.max.x, area.max.y));
        state
    }

    #[test]
    fn test_empty_state_is_noop() {
        let mut state = GameState::empty(1.0, ClampPolicy::AllAxes);
        tick(&mut state, &InputState::new(), 0.0);
        assert!(state.actors.is_empty());
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_projectile_gone_after_six_ticks() {
        let mut state = state_with_area(Boundary::new(0.0, 0.0, 100.0, 100.0));
        state.actors.push(Actor::Projectile(Projectile::with_motion(
            Vec2::new(50.0, 50.0),
            10.0,
            Vec2::new(0.0, -1.0),
        )));

        let input = InputState::new();
        for i in 0..4 {
            tick(&mut state, &input, i as f64 * TICK_INTERVAL_MS);
        }
        assert_eq!(state.projectile_count(), 1);
        assert_eq!(state.actors[0].body().pos.y, 10.0);

        for i in 4..6 {
            tick(&mut state, &input, i as f64 * TICK_INTERVAL_MS);
        }
        assert_eq!(state.projectile_count(), 0);
    }

    #[test]
    fn test_removal_does_not_skip_neighbour() {
        let mut state = state_with_area(Boundary::new(0.0, 0.0, 100.0, 100.0));
        // First projectile despawns on this tick, the second must still move
        state.actors.push(Actor::Projectile(Projectile::with_motion(
            Vec2::new(50.0, 5.0),
            10.0,
            Vec2::new(0.0, -1.0),
        )));
        state.actors.push(Actor::Projectile(Projectile::with_motion(
            Vec2::new(20.0, 80.0),
            10.0,
            Vec2::new(0.0, -1.0),
        )));
        state.actors.push(Actor::Enemy(Enemy::new(
            Vec2::new(30.0, 30.0),
            1.0,
            Vec2::new(1.0, 0.0),
        )));

        tick(&mut state, &InputState::new(), 0.0);

        assert_eq!(state.actors.len(), 2);
        assert_eq!(state.actors[0].body().pos, Vec2::new(20.0, 70.0));
        assert_eq!(state.actors[1].body().pos, Vec2::new(31.0, 30.0));
    }

    #[test]
    fn test_consecutive_removals_in_one_tick() {
        let mut state = state_with_area(Boundary::new(0.0, 0.0, 100.0, 100.0));
        for x in [10.0, 20.0, 30.0] {
            state.actors.push(Actor::Projectile(Projectile::with_motion(
                Vec2::new(x, 3.0),
                10.0,
                Vec2::new(0.0, -1.0),
            )));
        }
        tick(&mut state, &InputState::new(), 0.0);
        assert!(state.actors.is_empty());
    }

    #[test]
    fn test_held_confirm_respects_cooldown() {
        let mut state = state_with_area(Boundary::new(0.0, 0.0, 400.0, 400.0));
        state.actors.push(Actor::Player(Player::new(
            Vec2::new(200.0, 300.0),
            4.0,
            0.5,
            50.0,
        )));

        let mut input = InputState::new();
        input.set(Action::Confirm, true);

        // 200 ms of 60 Hz ticks on a millisecond clock
        let mut fired = 0;
        for i in 0..=12u32 {
            let before = state.projectile_count();
            tick(&mut state, &input, (i * 1000 / 60) as f64);
            if state.projectile_count() > before {
                fired += 1;
            }
        }

        assert_eq!(fired, 200 / 50);
    }

    #[test]
    fn test_spawned_projectile_waits_for_next_tick() {
        let mut state = state_with_area(Boundary::new(0.0, 0.0, 400.0, 400.0));
        state.actors.push(Actor::Player(Player::new(
            Vec2::new(200.0, 300.0),
            4.0,
            0.5,
            50.0,
        )));
        let mut input = InputState::new();
        input.set(Action::Confirm, true);

        tick(&mut state, &input, 0.0);

        assert_eq!(state.actors.len(), 2);
        assert!(matches!(state.actors[0], Actor::Player(_)));
        // Muzzle position, not yet advanced
        assert_eq!(state.actors[1].body().pos, Vec2::new(212.5, 297.5));
    }

    #[test]
    fn test_default_game_runs_enemy_out() {
        let mut state = GameState::new(&Settings::default());
        let input = InputState::new();

        let mut ticks = 0u32;
        while state.enemies().count() > 0 {
            tick(&mut state, &input, ticks as f64 * TICK_INTERVAL_MS);
            ticks += 1;
            assert!(ticks < 10_000, "enemy never left the field");
        }

        // Player is untouched and still in the list
        assert_eq!(state.actors.len(), 1);
        assert!(state.player().is_some());
        assert_eq!(state.time_ticks, ticks as u64);
    }
}
