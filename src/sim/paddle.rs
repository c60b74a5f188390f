//! Player and bot paddles
//!
//! Both paddles are fixed in x and move only vertically, in whole
//! `*_speed` steps per tick. Positions are paddle centers.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::collision::PaddleFace;
use super::state::Side;
use crate::config::GameConfig;

/// The player's (left) paddle, steered by two held intents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerPaddle {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub move_up: bool,
    pub move_down: bool,
}

impl PlayerPaddle {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(config.player_x(), config.screen_height / 2.0),
            width: config.paddle_width,
            height: config.paddle_height,
            move_up: false,
            move_down: false,
        }
    }

    /// Step one tick. Up and down are checked independently, so both may apply.
    ///
    /// The bound checks happen before the step, so a paddle can overshoot an
    /// edge by less than one `player_speed` when the travel distance is not a
    /// multiple of it. With the default config it lands exactly on the edges.
    pub fn update(&mut self, config: &GameConfig) {
        if self.move_up && self.pos.y < config.screen_height - self.height / 2.0 {
            self.pos.y += config.player_speed;
        }

        if self.move_down && self.pos.y > self.height / 2.0 {
            self.pos.y -= config.player_speed;
        }
    }

    /// Collision face the ball hits when moving left
    pub fn face(&self, ball_size: f32) -> PaddleFace {
        PaddleFace::new(Side::Left, self.pos, self.width, self.height, ball_size)
    }
}

/// The bot's (right) paddle, driven by a fixed reactive policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpponentPaddle {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl OpponentPaddle {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(config.opponent_x(), config.screen_height / 2.0),
            width: config.paddle_width,
            height: config.paddle_height,
        }
    }

    /// Step one tick, reading the ball as it was left by the previous tick.
    ///
    /// Tracks the ball only while it is heading right and past the activation
    /// x; inside that zone it never misses. While the ball heads left it drifts
    /// back toward the vertical center. There is no clamp to the screen.
    pub fn update(&mut self, ball: &Ball, config: &GameConfig) {
        let tracking = ball.vel.x > 0.0 && ball.pos.x > config.bot_activation_x();

        if tracking && self.pos.y > ball.pos.y {
            self.pos.y -= config.bot_speed;
        } else if tracking && self.pos.y < ball.pos.y {
            self.pos.y += config.bot_speed;
        } else if ball.vel.x < 0.0 {
            // Sequential, not else-if: when the center is not a multiple of
            // bot_speed away this can oscillate around it.
            let center = config.screen_height / 2.0;
            if self.pos.y < center {
                self.pos.y += config.bot_speed;
            }
            if self.pos.y > center {
                self.pos.y -= config.bot_speed;
            }
        }
    }

    /// Collision face the ball hits when moving right
    pub fn face(&self, ball_size: f32) -> PaddleFace {
        PaddleFace::new(Side::Right, self.pos, self.width, self.height, ball_size)
    }
}
