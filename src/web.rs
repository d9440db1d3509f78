//! Browser bridge
//!
//! Exposes a session to the host page. The page keeps its own menus and canvas
//! drawing; it calls `frame` from `requestAnimationFrame`, reads
//! `snapshot_json` to draw, and forwards pointer moves to `set_player_target`.

use wasm_bindgen::prelude::*;

use crate::audio::{AudioManager, SoundEffect};
use crate::best_score::LocalStorageStore;
use crate::screens::{NavAction, Navigator};
use crate::session::{LoopHandle, Session, SessionStatus};
use crate::sim::SimRng;
use crate::tuning::Tuning;

/// Install the console logger and panic hook
#[wasm_bindgen(start)]
pub fn wasm_init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Already initialized by an earlier module instance
        return;
    }
    log::info!("Paddle Duel (web) ready");
}

/// Game handle owned by the page
#[wasm_bindgen]
pub struct PongGame {
    session: Session<LocalStorageStore, SimRng>,
    nav: Navigator,
    audio: AudioManager,
    handle: Option<LoopHandle>,
}

#[wasm_bindgen]
impl PongGame {
    /// Create a game; `tuning_json` may be empty for defaults
    #[wasm_bindgen(constructor)]
    pub fn new(tuning_json: &str) -> PongGame {
        let tuning = if tuning_json.trim().is_empty() {
            Tuning::default()
        } else {
            Tuning::from_json(tuning_json).unwrap_or_else(|e| {
                log::warn!("{}; using default tuning", e);
                Tuning::default()
            })
        };
        let seed = js_sys::Date::now() as u64;
        log::info!("New game with seed: {}", seed);
        PongGame {
            session: Session::new(tuning, LocalStorageStore, SimRng::new(seed)),
            nav: Navigator::new(),
            audio: AudioManager::new(),
            handle: None,
        }
    }

    /// Menu "Play"
    pub fn start(&mut self) {
        self.audio.resume();
        if self.nav.apply(NavAction::Play).changed {
            self.handle = self.session.start();
        }
    }

    /// Game over "Restart"
    pub fn restart(&mut self) {
        if self.nav.apply(NavAction::Restart).changed {
            self.handle = self.session.restart();
        }
    }

    /// "Menu" from the game or game over screen
    pub fn return_to_menu(&mut self) {
        if self.nav.apply(NavAction::BackToMenu).changed {
            self.handle = None;
            self.session.return_to_menu();
        }
    }

    pub fn show_rules(&mut self) {
        self.nav.apply(NavAction::ShowRules);
    }

    pub fn show_high_score(&mut self) {
        self.nav.apply(NavAction::ShowHighScore);
    }

    pub fn close(&mut self) {
        self.nav.apply(NavAction::Close);
    }

    /// Current screen name (snake_case)
    pub fn screen(&self) -> String {
        serde_json::to_string(&self.nav.screen())
            .map(|s| s.trim_matches('"').to_string())
            .unwrap_or_default()
    }

    /// Pointer position converted by the page to a paddle top edge
    pub fn set_player_target(&mut self, y: f32) {
        self.session.set_player_target(y);
    }

    /// Advance one tick and return its events as JSON.
    /// Check `running` before scheduling the next frame.
    pub fn frame(&mut self) -> String {
        let Some(handle) = self.handle else {
            return "[]".to_string();
        };
        let events = self.session.frame(handle);
        for event in &events {
            self.audio.play(SoundEffect::for_event(event));
        }
        if self.session.status() == SessionStatus::Over {
            self.handle = None;
            self.nav.apply(NavAction::GameEnded);
        }
        serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())
    }

    /// Whether the page should keep requesting frames
    pub fn running(&self) -> bool {
        self.handle.is_some() && self.session.is_running()
    }

    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.session.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn best_score(&self) -> u32 {
        self.session.best_score()
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.audio.set_muted(muted);
    }

    /// Sound effect volume (0.0 - 1.0)
    pub fn set_volume(&mut self, volume: f32) {
        self.audio.set_volume(volume);
    }
}
