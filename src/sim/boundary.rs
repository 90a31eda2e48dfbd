//! Play area rectangle and clamping rules

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which axes a move clamps back into the boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClampPolicy {
    /// Both axes are clamped on every move, so an actor that somehow ended
    /// up outside is pulled back on the next move.
    #[default]
    AllAxes,
    /// Only axes with a nonzero direction are clamped. An actor already
    /// outside on a still axis stays there until it moves on that axis.
    MovingAxes,
}

impl ClampPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClampPolicy::AllAxes => "all-axes",
            ClampPolicy::MovingAxes => "moving-axes",
        }
    }
}

/// Inclusive rectangle actor positions are clamped to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    pub min: Vec2,
    pub max: Vec2,
}

impl Boundary {
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min: Vec2::new(min_x, min_y),
            max: Vec2::new(max_x, max_y),
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= self.min.x && pos.x <= self.max.x && pos.y >= self.min.y && pos.y <= self.max.y
    }

    /// True when `x` sits on or past the left/right edge
    pub fn touches_x(&self, x: f32) -> bool {
        x <= self.min.x || x >= self.max.x
    }

    /// True when `y` sits on or past the top/bottom edge
    pub fn touches_y(&self, y: f32) -> bool {
        y <= self.min.y || y >= self.max.y
    }
}

/// Snap `value` into `[min, max]`.
///
/// Unlike `f32::clamp` this never panics on an inverted range; the lower
/// bound is checked first.
#[inline]
pub fn clamp_axis(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
