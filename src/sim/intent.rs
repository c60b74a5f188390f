//! Player intent shared with an input thread
//!
//! For a harness whose key handler runs on its own thread (the headless
//! runner's input script is one). The handler writes, the simulation thread
//! copies the flags into the session right before each tick, see
//! `App::apply_intent`.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::state::GameState;

#[derive(Debug, Default)]
struct Flags {
    up: AtomicBool,
    down: AtomicBool,
}

/// Cloneable handle to the player's up/down intent
#[derive(Debug, Clone, Default)]
pub struct SharedIntent {
    flags: Arc<Flags>,
}

impl SharedIntent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press_up(&self) {
        self.flags.up.store(true, Ordering::SeqCst);
    }

    pub fn press_down(&self) {
        self.flags.down.store(true, Ordering::SeqCst);
    }

    /// Any key release stops the paddle in both directions
    pub fn release(&self) {
        self.flags.up.store(false, Ordering::SeqCst);
        self.flags.down.store(false, Ordering::SeqCst);
    }

    /// Current (up, down)
    pub fn get(&self) -> (bool, bool) {
        (
            self.flags.up.load(Ordering::SeqCst),
            self.flags.down.load(Ordering::SeqCst),
        )
    }

    /// Copy the flags into the session's player paddle
    pub fn apply_to(&self, state: &mut GameState) {
        let (up, down) = self.get();
        state.set_player_intent(up, down);
    }
}
