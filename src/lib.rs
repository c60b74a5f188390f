//! Classic Pong - two paddles, one ball, one scripted opponent
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddles, collisions, scoring)
//! - `config`: Startup configuration (screen size, speeds, bot threshold)
//! - `screen`: Menu / game / pause view state machine driven by key events

pub mod config;
pub mod screen;
pub mod sim;

pub use config::GameConfig;
pub use screen::{App, Key, Screen};
pub use sim::{GameEvent, GameState, SharedIntent, Side, Snapshot, tick};

/// Default game constants
pub mod consts {
    /// Fixed simulation rate (ticks per second). Physics is per tick, not per second.
    pub const TICK_RATE: u32 = 60;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Speeds in pixels per tick
    pub const BALL_SPEED: f32 = 8.0;
    pub const PLAYER_SPEED: f32 = 10.0;
    pub const BOT_SPEED: f32 = 10.0;

    /// Fraction of the screen width past which the bot starts tracking (1/2 + 1/5).
    /// One extra pixel is added on top, see `GameConfig::bot_activation_x`.
    pub const BOT_ACTIVATION_FRACTION: f32 = 0.7;

    /// Ball radius
    pub const BALL_SIZE: f32 = 10.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = SCREEN_HEIGHT / 6.0;
    /// Distance of each paddle's center from its own side wall
    pub const PADDLE_MARGIN: f32 = 20.0;
}
