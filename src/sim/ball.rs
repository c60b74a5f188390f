//! The ball: movement, wall bounces, scoring and paddle collisions

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::paddle::{OpponentPaddle, PlayerPaddle};
use super::state::{GameEvent, Side};
use crate::config::GameConfig;

/// The ball, which also keeps the score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Per-tick displacement. Each component is always +/- `ball_speed`.
    pub vel: Vec2,
    /// Radius
    pub size: f32,
    /// Points won by the player (ball left through the right wall)
    pub score_left: u32,
    /// Points won by the bot (ball left through the left wall)
    pub score_right: u32,
}

impl Ball {
    /// Ball at screen center moving up and to the right
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: config.center(),
            vel: Vec2::splat(config.ball_speed),
            size: config.ball_size,
            score_left: 0,
            score_right: 0,
        }
    }

    /// Advance one tick. The order of the steps matters:
    ///
    /// 1. bounce off top/bottom, tested on last tick's position
    /// 2. right wall exit: point to the left side, re-serve
    /// 3. left wall exit: point to the right side, re-serve
    /// 4. move by `vel`
    /// 5. left paddle collision
    /// 6. right paddle collision
    ///
    /// Walls and exits are checked before moving, so a ball can move past a
    /// wall for one tick before it is bounced or scored.
    pub fn update(
        &mut self,
        player: &PlayerPaddle,
        opponent: &OpponentPaddle,
        config: &GameConfig,
        rng: &mut impl Rng,
        events: &mut Vec<GameEvent>,
    ) {
        if self.pos.y >= config.screen_height - self.size || self.pos.y - self.size <= 0.0 {
            self.vel.y = -self.vel.y;
            events.push(GameEvent::WallBounce);
        }

        if self.pos.x >= config.screen_width {
            self.score_left += 1;
            self.serve(config, rng);
            log::debug!("Point left ({} - {})", self.score_left, self.score_right);
            events.push(GameEvent::Scored { side: Side::Left });
        }

        if self.pos.x <= 0.0 {
            self.score_right += 1;
            self.serve(config, rng);
            log::debug!("Point right ({} - {})", self.score_left, self.score_right);
            events.push(GameEvent::Scored { side: Side::Right });
        }

        self.pos += self.vel;

        // Vertical extent is only checked against the paddle's current
        // position; a ball fast enough to jump a whole paddle in one tick
        // would pass through.
        for face in [player.face(self.size), opponent.face(self.size)] {
            if face.hit(self.pos) {
                let crept = face.push_out(&mut self.pos);
                log::trace!("{:?} paddle hit, crept out {} px", face.side, crept);
                self.vel.x = -self.vel.x;
                events.push(GameEvent::PaddleHit { side: face.side });
            }
        }
    }

    /// Back to center with horizontal direction reversed; vertical direction
    /// flips on a coin toss
    fn serve(&mut self, config: &GameConfig, rng: &mut impl Rng) {
        self.pos = config.center();
        self.vel.x = -self.vel.x;
        if rng.random_bool(0.5) {
            self.vel.y = -self.vel.y;
        }
    }
}
