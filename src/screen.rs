//! Menu / game / pause screens
//!
//! The screen owns the running session. Pausing moves the session into
//! `Paused` untouched; ticks are simply not delivered while paused.

use crate::config::GameConfig;
use crate::sim::{GameEvent, GameState, SharedIntent, tick};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Escape,
    Enter,
    W,
    S,
    Other,
}

/// Which screen is showing
#[derive(Debug, Clone)]
pub enum Screen {
    /// Title screen, waiting for Space
    Menu,
    /// A session in progress
    Playing(GameState),
    /// A session frozen mid-game
    Paused(GameState),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Menu => "Menu",
            Screen::Playing(_) => "Playing",
            Screen::Paused(_) => "Paused",
        }
    }

    /// The session being played or paused, if any
    pub fn game(&self) -> Option<&GameState> {
        match self {
            Screen::Menu => None,
            Screen::Playing(state) | Screen::Paused(state) => Some(state),
        }
    }
}

/// Screen state machine plus what it needs to start new sessions
#[derive(Debug, Clone)]
pub struct App {
    config: GameConfig,
    screen: Screen,
    /// Seed for the next fresh session
    next_seed: u64,
}

impl App {
    /// Start on the menu
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            screen: Screen::Menu,
            next_seed: seed,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    fn new_game(&mut self) -> GameState {
        let seed = self.next_seed;
        self.next_seed = self.next_seed.wrapping_add(1);
        GameState::new(&self.config, seed)
    }

    /// Handle a key going down
    pub fn key_press(&mut self, key: Key) {
        let before = self.screen.name();
        let screen = std::mem::replace(&mut self.screen, Screen::Menu);
        let next = match (screen, key) {
            (Screen::Menu, Key::Space) => Screen::Playing(self.new_game()),
            (Screen::Playing(mut state), Key::W) => {
                state.player.move_up = true;
                Screen::Playing(state)
            }
            (Screen::Playing(mut state), Key::S) => {
                state.player.move_down = true;
                Screen::Playing(state)
            }
            (Screen::Playing(state), Key::Escape) => Screen::Paused(state),
            (Screen::Paused(state), Key::Escape) => Screen::Playing(state),
            // Reset: the paused session is dropped, scores included
            (Screen::Paused(_), Key::Enter) => Screen::Playing(self.new_game()),
            (screen, _) => screen,
        };

        if next.name() != before {
            log::info!("{} -> {} ({:?})", before, next.name(), key);
        }
        self.screen = next;
    }

    /// Handle a key going up. Any key, not just W or S, stops the paddle.
    pub fn key_release(&mut self, _key: Key) {
        if let Screen::Playing(state) = &mut self.screen {
            state.set_player_intent(false, false);
        }
    }

    /// Take the player's intent from an input thread's handle (playing only)
    pub fn apply_intent(&mut self, intent: &SharedIntent) {
        if let Screen::Playing(state) = &mut self.screen {
            intent.apply_to(state);
        }
    }

    /// Deliver one tick. Only a playing session advances.
    pub fn update(&mut self) -> Vec<GameEvent> {
        match &mut self.screen {
            Screen::Playing(state) => tick(state, &self.config),
            Screen::Menu | Screen::Paused(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_app() -> App {
        let mut app = App::new(GameConfig::default(), 11);
        app.key_press(Key::Space);
        app
    }

    fn player_y(app: &App) -> f32 {
        app.screen().game().map(|g| g.player.pos.y).unwrap()
    }

    #[test]
    fn test_starts_on_menu() {
        let mut app = App::new(GameConfig::default(), 1);
        assert!(matches!(app.screen(), Screen::Menu));

        // Only Space leaves the menu, and the menu never ticks
        for key in [Key::Escape, Key::Enter, Key::W, Key::Other] {
            app.key_press(key);
            assert!(matches!(app.screen(), Screen::Menu));
        }
        assert!(app.update().is_empty());
    }

    #[test]
    fn test_space_starts_game() {
        let mut app = playing_app();
        assert!(matches!(app.screen(), Screen::Playing(_)));
        app.update();
        assert_eq!(app.screen().game().unwrap().time_ticks, 1);
    }

    #[test]
    fn test_w_and_s_move_player() {
        let mut app = playing_app();
        app.key_press(Key::W);
        app.update();
        assert_eq!(player_y(&app), 310.0);

        app.key_release(Key::W);
        app.key_press(Key::S);
        app.update();
        app.update();
        assert_eq!(player_y(&app), 290.0);
    }

    #[test]
    fn test_any_release_stops_paddle() {
        let mut app = playing_app();
        app.key_press(Key::W);
        app.key_release(Key::Other);
        app.update();
        assert_eq!(player_y(&app), 300.0);
    }

    #[test]
    fn test_pause_freezes_and_resumes() {
        let mut app = playing_app();
        for _ in 0..10 {
            app.update();
        }
        let frozen = app.screen().game().unwrap().snapshot();

        app.key_press(Key::Escape);
        assert!(matches!(app.screen(), Screen::Paused(_)));
        for _ in 0..10 {
            assert!(app.update().is_empty());
        }
        assert_eq!(app.screen().game().unwrap().snapshot(), frozen);

        app.key_press(Key::Escape);
        assert!(matches!(app.screen(), Screen::Playing(_)));
        app.update();
        assert_eq!(app.screen().game().unwrap().time_ticks, 11);
    }

    #[test]
    fn test_enter_resets_from_pause() {
        let mut app = playing_app();
        app.key_press(Key::W);
        for _ in 0..200 {
            app.update();
        }
        assert!(app.screen().game().unwrap().time_ticks > 0);

        // Enter does nothing while playing
        app.key_press(Key::Enter);
        assert!(matches!(app.screen(), Screen::Playing(_)));

        app.key_press(Key::Escape);
        app.key_press(Key::Enter);
        let game = app.screen().game().unwrap();
        assert!(matches!(app.screen(), Screen::Playing(_)));
        assert_eq!(game.time_ticks, 0);
        assert_eq!(game.score(), (0, 0));
        assert_eq!(game.player.pos.y, 300.0);
        assert!(!game.player.move_up);
        assert_eq!(game.seed, 12);
    }

    #[test]
    fn test_shared_intent_drives_playing_only() {
        let intent = SharedIntent::new();
        intent.press_up();

        let mut app = App::new(GameConfig::default(), 3);
        app.apply_intent(&intent);
        assert!(matches!(app.screen(), Screen::Menu));

        app.key_press(Key::Space);
        app.apply_intent(&intent);
        app.update();
        assert_eq!(player_y(&app), 310.0);

        // Paused sessions keep whatever intent they had
        app.key_press(Key::Escape);
        intent.release();
        app.apply_intent(&intent);
        assert!(app.screen().game().unwrap().player.move_up);

        app.key_press(Key::Escape);
        app.apply_intent(&intent);
        app.update();
        assert_eq!(player_y(&app), 310.0);
    }

    #[test]
    fn test_held_key_survives_pause() {
        let mut app = playing_app();
        app.key_press(Key::W);
        app.key_press(Key::Escape);
        app.key_release(Key::W);
        app.key_press(Key::Escape);
        app.update();
        // The release went to the pause screen, so the paddle keeps going
        assert_eq!(player_y(&app), 310.0);
    }
}
