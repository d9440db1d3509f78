//! Session lifecycle
//!
//! Owns the simulation state, the random source, and the best-score store.
//! The host drives ticks from its refresh callback through [`Session::frame`],
//! presenting the [`LoopHandle`] it was given at start. Stopping the loop
//! invalidates the handle, so a frame already queued by the host for an old
//! session is ignored.

use serde::Serialize;

use crate::best_score::BestScoreStore;
use crate::sim::{GameEvent, GameState, RandomSource, Side, TickOutcome, tick};
use crate::tuning::Tuning;

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// No session (menus)
    Idle,
    /// Tick loop active
    Running,
    /// A side reached the win score
    Over,
}

/// Token for the active tick loop
///
/// Each start hands out a new generation; only the current one may tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopHandle {
    generation: u64,
}

/// Read-only view for rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    pub player_y: f32,
    pub opponent_y: f32,
    pub ball_x: f32,
    pub ball_y: f32,
    pub player_score: u32,
    pub opponent_score: u32,
    pub best_score: u32,
    pub status: SessionStatus,
}

/// Game session controller
pub struct Session<S: BestScoreStore, R: RandomSource> {
    state: GameState,
    status: SessionStatus,
    store: S,
    rng: R,
    active: Option<LoopHandle>,
    next_generation: u64,
}

impl<S: BestScoreStore, R: RandomSource> Session<S, R> {
    /// Create an idle session
    ///
    /// Tuning that fails [`Tuning::validate`] is replaced by the defaults.
    pub fn new(tuning: Tuning, store: S, rng: R) -> Self {
        let tuning = match tuning.validate() {
            Ok(()) => tuning,
            Err(e) => {
                log::warn!("{}; using default tuning", e);
                Tuning::default()
            }
        };
        Self {
            state: GameState::new(tuning),
            status: SessionStatus::Idle,
            store,
            rng,
            active: None,
            next_generation: 1,
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable state access for hosts that script scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.state.tuning
    }

    /// Handle of the running loop, if any
    pub fn active_loop(&self) -> Option<LoopHandle> {
        self.active
    }

    /// Current best score from storage (high score screen)
    pub fn best_score(&self) -> u32 {
        self.store.load()
    }

    /// Start a session from the menu
    ///
    /// No-op (returns `None`) while a session is already running.
    pub fn start(&mut self) -> Option<LoopHandle> {
        if self.is_running() {
            log::debug!("Ignoring start while running");
            return None;
        }
        Some(self.begin())
    }

    /// Start over after a game over
    ///
    /// Same as [`Session::start`]; kept separate to mirror the host's buttons.
    pub fn restart(&mut self) -> Option<LoopHandle> {
        if self.is_running() {
            log::debug!("Ignoring restart while running");
            return None;
        }
        Some(self.begin())
    }

    fn begin(&mut self) -> LoopHandle {
        let best = self.store.load();
        self.state.reset(best, &mut self.rng);

        let handle = LoopHandle {
            generation: self.next_generation,
        };
        self.next_generation += 1;
        self.active = Some(handle);
        self.status = SessionStatus::Running;

        log::info!("Session started (best score {})", best);
        handle
    }

    /// Record the latest pointer target; ignored unless running
    pub fn set_player_target(&mut self, y: f32) {
        if self.is_running() {
            self.state.set_player_target(y);
        }
    }

    /// Run one tick for `handle` and return the events it raised
    ///
    /// Stale or cancelled handles do nothing.
    pub fn frame(&mut self, handle: LoopHandle) -> Vec<GameEvent> {
        if self.active != Some(handle) {
            log::debug!("Dropping tick for inactive loop {}", handle.generation);
            return Vec::new();
        }

        let outcome = tick(&mut self.state, &mut self.rng);
        if self.state.events.iter().any(|e| matches!(e, GameEvent::NewBest { .. })) {
            self.store.save(self.state.best_score);
        }
        if let TickOutcome::Won(winner) = outcome {
            self.finish(winner);
        }
        self.state.drain_events()
    }

    /// Cancel the loop and end the session
    ///
    /// Idempotent: only the first call after a running session emits
    /// `GameOver`; later calls just keep the handle cleared.
    pub fn stop(&mut self) {
        let winner = self.state.winner().unwrap_or(
            if self.state.scores.player >= self.state.scores.opponent {
                Side::Player
            } else {
                Side::Opponent
            },
        );
        self.finish(winner);
    }

    fn finish(&mut self, winner: Side) {
        self.active = None;
        if self.status != SessionStatus::Running {
            return;
        }
        self.status = SessionStatus::Over;

        let scores = self.state.scores;
        let best_score = self.state.best_score;
        self.state.events.push(GameEvent::GameOver {
            winner,
            player_score: scores.player,
            opponent_score: scores.opponent,
            best_score,
        });
        log::info!(
            "Game over: {:?} wins {} - {} (best {})",
            winner,
            scores.player,
            scores.opponent,
            best_score
        );
    }

    /// Leave to the menu, discarding the session
    pub fn return_to_menu(&mut self) {
        self.active = None;
        self.status = SessionStatus::Idle;
        self.state = GameState::new(self.state.tuning.clone());
        log::info!("Returned to menu");
    }

    /// Take events raised outside `frame` (e.g. by `stop`)
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }

    pub fn snapshot(&self) -> Snapshot {
        let state = &self.state;
        Snapshot {
            player_y: state.player.y,
            opponent_y: state.opponent.y,
            ball_x: state.ball.pos.x,
            ball_y: state.ball.pos.y,
            player_score: state.scores.player,
            opponent_score: state.scores.opponent,
            best_score: state.best_score,
            status: self.status,
        }
    }
}
