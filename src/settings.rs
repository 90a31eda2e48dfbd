//! Game settings
//!
//! Persisted as JSON: LocalStorage on the web, a file in the working
//! directory on native.

#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ShmupError;
use crate::sim::ClampPolicy;

/// Tunable game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window and play-area scale factor
    pub scale: f32,
    /// How moves are clamped into the play area
    pub clamp_policy: ClampPolicy,

    // === Player ===
    /// Unscaled player speed per tick
    pub player_speed: f32,
    /// Speed multiplier while Slow is held
    pub slow_factor: f32,
    /// Minimum time between two shots
    pub shooting_cooldown_ms: f64,

    // === HUD ===
    pub lives: u32,
    pub bombs: u32,
    /// Draw the hitbox dot while Slow is held
    pub show_hitbox: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scale: 1.0,
            clamp_policy: ClampPolicy::AllAxes,

            player_speed: PLAYER_SPEED,
            slow_factor: PLAYER_SLOW_FACTOR,
            shooting_cooldown_ms: SHOOTING_COOLDOWN_MS,

            lives: STARTING_LIVES,
            bombs: STARTING_BOMBS,
            show_hitbox: true,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ShmupError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, ShmupError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ShmupError> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(ShmupError::InvalidSettings(format!(
                "scale must be positive, got {}",
                self.scale
            )));
        }
        if !(self.player_speed.is_finite() && self.player_speed >= 0.0) {
            return Err(ShmupError::InvalidSettings(format!(
                "player_speed must be non-negative, got {}",
                self.player_speed
            )));
        }
        if !(self.slow_factor > 0.0 && self.slow_factor <= 1.0) {
            return Err(ShmupError::InvalidSettings(format!(
                "slow_factor must be in (0, 1], got {}",
                self.slow_factor
            )));
        }
        if !(self.shooting_cooldown_ms.is_finite() && self.shooting_cooldown_ms >= 0.0) {
            return Err(ShmupError::InvalidSettings(format!(
                "shooting_cooldown_ms must be non-negative, got {}",
                self.shooting_cooldown_ms
            )));
        }
        for (name, count) in [("lives", self.lives), ("bombs", self.bombs)] {
            if count > MAX_HUD_COUNT {
                return Err(ShmupError::InvalidSettings(format!(
                    "{} must be at most {}, got {}",
                    name, MAX_HUD_COUNT, count
                )));
            }
        }
        Ok(())
    }

    /// LocalStorage key / settings file name
    const STORAGE_KEY: &'static str = "canvas_shmup_settings";

    /// Load settings from LocalStorage (WASM only).
    ///
    /// Defaults are written back when nothing is stored yet.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        let Some(storage) = storage else {
            log::warn!("LocalStorage unavailable, using default settings");
            return Self::default();
        };

        match storage.get_item(Self::STORAGE_KEY) {
            Ok(Some(json)) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
                Err(e) => log::warn!("Ignoring stored settings: {}", e),
            },
            Ok(None) => {
                let settings = Self::default();
                if let Err(e) = settings.save() {
                    log::warn!("Could not store default settings: {}", e);
                }
                return settings;
            }
            Err(e) => log::warn!("Could not read settings: {:?}", e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) -> Result<(), ShmupError> {
        let storage = web_sys::window()
            .ok_or(ShmupError::MissingWindow)?
            .local_storage()?
            .ok_or_else(|| ShmupError::Js("LocalStorage unavailable".to_string()))?;
        storage.set_item(Self::STORAGE_KEY, &self.to_json()?)?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Settings file in the working directory (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn path() -> PathBuf {
        PathBuf::from(format!("{}.json", Self::STORAGE_KEY))
    }

    /// Read and validate a settings file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &Path) -> Result<Self, ShmupError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: &Path) -> Result<(), ShmupError> {
        std::fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Load settings from the working directory (native).
    ///
    /// A missing file is created with the defaults; an invalid one is left
    /// alone and the defaults are used.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let path = Self::path();
        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(ShmupError::SettingsIo(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                let settings = Self::default();
                if let Err(e) = settings.save_to(&path) {
                    log::warn!("Could not write default settings: {}", e);
                }
                settings
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) -> Result<(), ShmupError> {
        self.save_to(&Self::path())
    }
}
