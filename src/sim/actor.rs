//! Actors: shared body, movement and per-tick dispatch
//!
//! Every moving thing on the field is one variant of [`Actor`]. The set is
//! closed, so there is no abstract base to instantiate by mistake.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::boundary::{Boundary, ClampPolicy, clamp_axis};
use super::enemy::Enemy;
use super::player::Player;
use super::projectile::Projectile;
use crate::normalize_direction;
use crate::platform::input::{Action, InputState};

/// Position, size and motion shared by all actors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Native (unscaled) width
    pub width: f32,
    /// Native (unscaled) height
    pub height: f32,
    pub pos: Vec2,
    /// Distance travelled per tick along a unit direction
    pub speed: f32,
    pub direction: Vec2,
}

impl Body {
    pub fn new(width: f32, height: f32, pos: Vec2, speed: f32, direction: Vec2) -> Self {
        Self {
            width,
            height,
            pos,
            speed,
            direction,
        }
    }

    /// Advance one step and clamp into `boundary`
    pub fn move_within(&mut self, boundary: &Boundary, policy: ClampPolicy) {
        let candidate = self.pos + self.direction * self.speed;

        let clamp_x = policy == ClampPolicy::AllAxes || self.direction.x != 0.0;
        let clamp_y = policy == ClampPolicy::AllAxes || self.direction.y != 0.0;

        if clamp_x {
            self.pos.x = clamp_axis(candidate.x, boundary.min.x, boundary.max.x);
        }
        if clamp_y {
            self.pos.y = clamp_axis(candidate.y, boundary.min.y, boundary.max.y);
        }
    }
}

/// Map held directional actions to a movement direction.
///
/// Opposing keys resolve by precedence: Right wins over Left and Down wins
/// over Up. Diagonals come out unit length.
pub fn compute_direction(input: &InputState) -> Vec2 {
    let x = if input.is_held(Action::Right) {
        1.0
    } else if input.is_held(Action::Left) {
        -1.0
    } else {
        0.0
    };

    let y = if input.is_held(Action::Down) {
        1.0
    } else if input.is_held(Action::Up) {
        -1.0
    } else {
        0.0
    };

    normalize_direction(Vec2::new(x, y))
}

/// Outcome of an actor's update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Alive,
    /// Remove from the actor list at the end of this pass
    Despawn,
}

/// Everything an actor may read or produce during one tick
pub struct UpdateContext<'a> {
    pub input: &'a InputState,
    pub boundary: Boundary,
    pub policy: ClampPolicy,
    /// Clock reading for this tick, in milliseconds
    pub now_ms: f64,
    pub scale: f32,
    spawned: Vec<Actor>,
}

impl<'a> UpdateContext<'a> {
    pub fn new(
        input: &'a InputState,
        boundary: Boundary,
        policy: ClampPolicy,
        now_ms: f64,
        scale: f32,
    ) -> Self {
        Self {
            input,
            boundary,
            policy,
            now_ms,
            scale,
            spawned: Vec::new(),
        }
    }

    /// Queue an actor to join the list after the current pass
    pub fn spawn(&mut self, actor: Actor) {
        self.spawned.push(actor);
    }

    pub fn spawned(&self) -> &[Actor] {
        &self.spawned
    }

    pub fn into_spawned(self) -> Vec<Actor> {
        self.spawned
    }
}

/// A live game entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Actor {
    Player(Player),
    Enemy(Enemy),
    Projectile(Projectile),
}

impl Actor {
    pub fn body(&self) -> &Body {
        match self {
            Actor::Player(player) => &player.body,
            Actor::Enemy(enemy) => &enemy.body,
            Actor::Projectile(projectile) => &projectile.body,
        }
    }

    pub fn update(&mut self, ctx: &mut UpdateContext<'_>) -> Lifecycle {
        match self {
            Actor::Player(player) => player.update(ctx),
            Actor::Enemy(enemy) => enemy.update(ctx),
            Actor::Projectile(projectile) => projectile.update(ctx),
        }
    }

    pub fn is_projectile(&self) -> bool {
        matches!(self, Actor::Projectile(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn body_at(x: f32, y: f32, speed: f32, direction: Vec2) -> Body {
        Body::new(25.0, 25.0, Vec2::new(x, y), speed, direction)
    }

    fn input_with(actions: &[Action]) -> InputState {
        let mut input = InputState::new();
        for action in actions {
            input.set(*action, true);
        }
        input
    }

    #[test]
    fn test_move_clamps_to_max() {
        let boundary = Boundary::new(0.0, 0.0, 102.0, 400.0);
        let mut body = body_at(100.0, 100.0, 4.0, Vec2::new(1.0, 0.0));
        body.move_within(&boundary, ClampPolicy::AllAxes);
        assert_eq!(body.pos, Vec2::new(102.0, 100.0));
    }

    #[test]
    fn test_move_clamps_to_min() {
        let boundary = Boundary::new(10.0, 10.0, 200.0, 200.0);
        let mut body = body_at(12.0, 50.0, 5.0, Vec2::new(-1.0, 0.0));
        body.move_within(&boundary, ClampPolicy::AllAxes);
        assert_eq!(body.pos.x, 10.0);
    }

    #[test]
    fn test_move_inside_accepts_candidate() {
        let boundary = Boundary::new(0.0, 0.0, 200.0, 200.0);
        let mut body = body_at(50.0, 50.0, 2.0, Vec2::new(0.0, 1.0));
        body.move_within(&boundary, ClampPolicy::AllAxes);
        assert_eq!(body.pos, Vec2::new(50.0, 52.0));
    }

    #[test]
    fn test_moving_axes_leaves_still_axis_out_of_bounds() {
        let boundary = Boundary::new(0.0, 0.0, 100.0, 100.0);
        // Outside on x, moving only on y
        let mut body = body_at(150.0, 50.0, 1.0, Vec2::new(0.0, 1.0));
        body.move_within(&boundary, ClampPolicy::MovingAxes);
        assert_eq!(body.pos, Vec2::new(150.0, 51.0));

        // Once it moves on x it gets pulled back in
        body.direction = Vec2::new(-1.0, 0.0);
        body.move_within(&boundary, ClampPolicy::MovingAxes);
        assert_eq!(body.pos.x, 100.0);
    }

    #[test]
    fn test_all_axes_pulls_still_axis_back() {
        let boundary = Boundary::new(0.0, 0.0, 100.0, 100.0);
        let mut body = body_at(150.0, 50.0, 1.0, Vec2::new(0.0, 1.0));
        body.move_within(&boundary, ClampPolicy::AllAxes);
        assert_eq!(body.pos, Vec2::new(100.0, 51.0));
    }

    #[test]
    fn test_compute_direction_axial() {
        assert_eq!(compute_direction(&input_with(&[])), Vec2::ZERO);
        assert_eq!(compute_direction(&input_with(&[Action::Left])), Vec2::new(-1.0, 0.0));
        assert_eq!(compute_direction(&input_with(&[Action::Up])), Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_compute_direction_precedence() {
        let both_horizontal = compute_direction(&input_with(&[Action::Left, Action::Right]));
        assert_eq!(both_horizontal, Vec2::new(1.0, 0.0));

        let both_vertical = compute_direction(&input_with(&[Action::Up, Action::Down]));
        assert_eq!(both_vertical, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_compute_direction_diagonal_is_unit() {
        let d = compute_direction(&input_with(&[Action::Up, Action::Right]));
        assert!((d.length() - 1.0).abs() < 1e-6);
        assert!(d.x > 0.0 && d.y < 0.0);
    }

    #[test]
    fn test_spawn_buffer() {
        let input = InputState::new();
        let boundary = Boundary::new(0.0, 0.0, 10.0, 10.0);
        let mut ctx = UpdateContext::new(&input, boundary, ClampPolicy::AllAxes, 0.0, 1.0);
        assert!(ctx.spawned().is_empty());
        ctx.spawn(Actor::Projectile(Projectile::new(Vec2::new(5.0, 5.0))));
        assert_eq!(ctx.spawned().len(), 1);
        assert!(ctx.into_spawned()[0].is_projectile());
    }

    fn any_input() -> impl Strategy<Value = InputState> {
        proptest::collection::vec(any::<bool>(), Action::ALL.len()).prop_map(|flags| {
            let mut input = InputState::new();
            for (action, held) in Action::ALL.iter().zip(flags) {
                input.set(*action, held);
            }
            input
        })
    }

    proptest! {
        #[test]
        fn prop_direction_is_never_nan(input in any_input()) {
            let d = compute_direction(&input);
            prop_assert!(!d.x.is_nan() && !d.y.is_nan());
            prop_assert!(d.x == 0.0 || d.x.abs() <= 1.0);
        }

        #[test]
        fn prop_two_axis_direction_is_unit(input in any_input()) {
            let d = compute_direction(&input);
            if d.x != 0.0 && d.y != 0.0 {
                prop_assert!((d.length() - 1.0).abs() < 1e-5);
            }
        }

        #[test]
        fn prop_moving_axis_stays_in_bounds(
            x in -500.0f32..500.0,
            y in -500.0f32..500.0,
            dx in prop_oneof![Just(-1.0f32), Just(1.0f32)],
            dy in prop_oneof![Just(-1.0f32), Just(0.0f32), Just(1.0f32)],
            speed in 0.0f32..50.0,
            min_x in -100.0f32..0.0,
            width in 0.0f32..300.0,
        ) {
            let boundary = Boundary::new(min_x, -100.0, min_x + width, 100.0);
            for policy in [ClampPolicy::AllAxes, ClampPolicy::MovingAxes] {
                let mut body = body_at(x, y, speed, Vec2::new(dx, dy));
                body.move_within(&boundary, policy);
                prop_assert!(body.pos.x >= boundary.min.x && body.pos.x <= boundary.max.x);
                if dy != 0.0 {
                    prop_assert!(body.pos.y >= boundary.min.y && body.pos.y <= boundary.max.y);
                }
            }
        }

        #[test]
        fn prop_zero_direction_never_moves(
            x in -500.0f32..500.0,
            y in -500.0f32..500.0,
            speed in 0.0f32..50.0,
        ) {
            let boundary = Boundary::new(0.0, 0.0, 100.0, 100.0);
            let mut body = body_at(x, y, speed, Vec2::ZERO);
            for _ in 0..5 {
                body.move_within(&boundary, ClampPolicy::MovingAxes);
            }
            prop_assert_eq!(body.pos, Vec2::new(x, y));
        }

        #[test]
        fn prop_zero_direction_idempotent_when_clamping_all(
            x in -500.0f32..500.0,
            y in -500.0f32..500.0,
            speed in 0.0f32..50.0,
        ) {
            let boundary = Boundary::new(0.0, 0.0, 100.0, 100.0);
            let mut body = body_at(x, y, speed, Vec2::ZERO);
            body.move_within(&boundary, ClampPolicy::AllAxes);
            let settled = body.pos;
            if boundary.contains(Vec2::new(x, y)) {
                prop_assert_eq!(settled, Vec2::new(x, y));
            }
            for _ in 0..5 {
                body.move_within(&boundary, ClampPolicy::AllAxes);
            }
            prop_assert_eq!(body.pos, settled);
        }
    }
}
