//! Game configuration
//!
//! Built once at startup and passed by reference into the simulation.
//! Nothing here is reconfigured while a session is running.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// All tunables the simulation reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: f32,
    pub screen_height: f32,

    // === Speeds (pixels per tick) ===
    pub ball_speed: f32,
    pub player_speed: f32,
    pub bot_speed: f32,

    /// Fraction of the screen width the ball must cross before the bot reacts.
    /// Higher means a weaker bot.
    pub bot_activation_fraction: f32,

    // === Sizes ===
    /// Ball radius
    pub ball_size: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Distance from each side wall to its paddle's center
    pub paddle_margin: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            ball_speed: BALL_SPEED,
            player_speed: PLAYER_SPEED,
            bot_speed: BOT_SPEED,
            bot_activation_fraction: BOT_ACTIVATION_FRACTION,

            ball_size: BALL_SIZE,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_margin: PADDLE_MARGIN,
        }
    }
}

impl GameConfig {
    /// Ball x the bot must exceed (strictly) before it tracks the ball
    pub fn bot_activation_x(&self) -> f32 {
        self.screen_width * self.bot_activation_fraction + 1.0
    }

    /// Screen center, where the ball is served from
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }

    /// Fixed x of the player's (left) paddle
    pub fn player_x(&self) -> f32 {
        self.paddle_margin
    }

    /// Fixed x of the bot's (right) paddle
    pub fn opponent_x(&self) -> f32 {
        self.screen_width - self.paddle_margin
    }

    /// Reasons this configuration is degenerate, empty if it is fine.
    ///
    /// Simulation behavior under a degenerate configuration is undefined;
    /// callers only report these, nothing is clamped or rejected.
    pub fn degenerate_reasons(&self) -> Vec<String> {
        let mut reasons = Vec::new();
        if self.paddle_height > self.screen_height {
            reasons.push(format!(
                "paddle height {} exceeds screen height {}",
                self.paddle_height, self.screen_height
            ));
        }
        for (name, value) in [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("ball_speed", self.ball_speed),
            ("player_speed", self.player_speed),
            ("bot_speed", self.bot_speed),
            ("ball_size", self.ball_size),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
        ] {
            if value.is_nan() || value <= 0.0 {
                reasons.push(format!("{name} must be positive, got {value}"));
            }
        }
        reasons
    }

    /// Log a warning for every degenerate setting
    pub fn warn_if_degenerate(&self) {
        for reason in self.degenerate_reasons() {
            log::warn!("Degenerate config: {}", reason);
        }
    }

    /// Parse a (possibly partial) JSON config; missing keys take defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load from a JSON file, falling back to defaults if it is missing or malformed
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Malformed config {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read config {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Config saved to {}", path.as_ref().display());
        Ok(())
    }
}
