//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick displacement only (no elapsed-time scaling)
//! - Seeded RNG only
//! - Fixed update order: player, opponent, ball
//! - No rendering or platform dependencies

pub mod ball;
pub mod collision;
pub mod intent;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use collision::PaddleFace;
pub use intent::SharedIntent;
pub use paddle::{OpponentPaddle, PlayerPaddle};
pub use state::{BallView, GameEvent, GameState, PaddleView, Side, Snapshot};
pub use tick::tick;
