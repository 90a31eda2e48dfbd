//! Keyboard input mapping
//!
//! Physical key codes (`KeyboardEvent.code`) are translated to logical
//! actions through a static binding table. The platform layer writes the
//! state on key events; everything else only reads it each tick.

use serde::{Deserialize, Serialize};

/// Logical game controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    /// Focus mode: slower movement, hitbox shown
    Slow,
    /// Shoot
    Confirm,
    /// Bomb
    Cancel,
    Pause,
    Menu,
}

impl Action {
    /// Every action, in index order
    pub const ALL: [Action; 9] = [
        Action::Up,
        Action::Down,
        Action::Left,
        Action::Right,
        Action::Slow,
        Action::Confirm,
        Action::Cancel,
        Action::Pause,
        Action::Menu,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
            Action::Slow => "slow",
            Action::Confirm => "confirm",
            Action::Cancel => "cancel",
            Action::Pause => "pause",
            Action::Menu => "menu",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// One entry of the key table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    /// Physical key identifier, as reported by `KeyboardEvent.code`
    pub code: &'static str,
    pub action: Action,
}

/// Fixed key table
pub const KEY_BINDINGS: [KeyBinding; 9] = [
    KeyBinding { code: "ArrowUp", action: Action::Up },
    KeyBinding { code: "ArrowDown", action: Action::Down },
    KeyBinding { code: "ArrowRight", action: Action::Right },
    KeyBinding { code: "ArrowLeft", action: Action::Left },
    KeyBinding { code: "ShiftLeft", action: Action::Slow },
    KeyBinding { code: "KeyZ", action: Action::Confirm },
    KeyBinding { code: "KeyX", action: Action::Cancel },
    KeyBinding { code: "Enter", action: Action::Pause },
    KeyBinding { code: "Escape", action: Action::Menu },
];

/// Look up the action bound to a physical key
pub fn binding_for(code: &str) -> Option<Action> {
    KEY_BINDINGS
        .iter()
        .find(|binding| binding.code == code)
        .map(|binding| binding.action)
}

/// Raw held/released state of every action
///
/// No debouncing or repeat suppression: a repeated key-down simply sets
/// the same flag again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    held: [bool; Action::ALL.len()],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key-down handler. Returns the bound action, `None` for unbound keys.
    pub fn press(&mut self, code: &str) -> Option<Action> {
        let action = binding_for(code)?;
        self.set(action, true);
        Some(action)
    }

    /// Key-up handler. Returns the bound action, `None` for unbound keys.
    pub fn release(&mut self, code: &str) -> Option<Action> {
        let action = binding_for(code)?;
        self.set(action, false);
        Some(action)
    }

    pub fn set(&mut self, action: Action, held: bool) {
        self.held[action.index()] = held;
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held[action.index()]
    }

    /// Release everything (focus lost, so key-ups will never arrive)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
