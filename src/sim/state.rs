//! Game state and core simulation types
//!
//! One `GameState` is one game session. Resetting a game means building a new one.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::paddle::{OpponentPaddle, PlayerPaddle};
use crate::config::GameConfig;

/// A side of the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Player (left)
    Left,
    /// Bot (right)
    Right,
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// `side` won the point and the ball was re-served from the center
    Scored { side: Side },
    /// Ball was pushed out of the paddle on `side` and sent back
    PaddleHit { side: Side },
}

/// Complete state of one session (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the serve RNG was built from
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub ball: Ball,
    pub player: PlayerPaddle,
    pub opponent: OpponentPaddle,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a fresh session: paddles centered, ball at center heading up-right
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        log::info!("New game session (seed {})", seed);
        Self {
            seed,
            time_ticks: 0,
            ball: Ball::new(config),
            player: PlayerPaddle::new(config),
            opponent: OpponentPaddle::new(config),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Set the player's movement intents; they hold until changed
    pub fn set_player_intent(&mut self, up: bool, down: bool) {
        self.player.move_up = up;
        self.player.move_down = down;
    }

    /// (left, right) scores
    pub fn score(&self) -> (u32, u32) {
        (self.ball.score_left, self.ball.score_right)
    }

    /// Read-only copy of everything a renderer draws
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.time_ticks,
            ball: BallView {
                x: self.ball.pos.x,
                y: self.ball.pos.y,
                size: self.ball.size,
                score_left: self.ball.score_left,
                score_right: self.ball.score_right,
            },
            player: PaddleView {
                x: self.player.pos.x,
                y: self.player.pos.y,
                width: self.player.width,
                height: self.player.height,
            },
            opponent: PaddleView {
                x: self.opponent.pos.x,
                y: self.opponent.pos.y,
                width: self.opponent.width,
                height: self.opponent.height,
            },
        }
    }
}

/// Ball as seen by a renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub score_left: u32,
    pub score_right: u32,
}

/// Paddle as seen by a renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Per-frame drawing snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub ball: BallView,
    pub player: PaddleView,
    pub opponent: PaddleView,
}
