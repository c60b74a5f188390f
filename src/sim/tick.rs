//! Fixed-rate simulation tick
//!
//! Core game loop step that advances a session deterministically.

use super::state::{GameEvent, GameState};
use crate::config::GameConfig;

/// Advance the session by one tick and return what happened, in order.
///
/// Player first, then the bot (which therefore sees the ball where the
/// previous tick left it), then the ball (which collides against paddles
/// already moved this tick).
pub fn tick(state: &mut GameState, config: &GameConfig) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    state.player.update(config);
    state.opponent.update(&state.ball, config);

    let GameState {
        ball,
        player,
        opponent,
        rng,
        ..
    } = state;
    ball.update(player, opponent, config, rng, &mut events);

    events
}
