//! Paddle Duel - classic two-paddle Pong against a scripted opponent
//!
//! Core modules:
//! - `sim`: Tick-based simulation (physics, collisions, scoring, opponent)
//! - `session`: Session lifecycle and the cancellable tick loop
//! - `tuning`: Overridable game parameters
//! - `best_score`: Persisted best score
//! - `screens`: Menu navigation state machine
//! - `audio`: Sound effects for simulation events

pub mod audio;
pub mod best_score;
pub mod screens;
pub mod session;
pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use best_score::{BestScoreStore, MemoryStore};
pub use screens::{NavAction, Navigator, Screen};
pub use session::{LoopHandle, Session, SessionStatus, Snapshot};
pub use tuning::{Tuning, TuningError};

/// Game configuration defaults
///
/// All speeds are in pixels per tick; there is no delta-time scaling.
pub mod consts {
    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Gap between a paddle and its side wall
    pub const PADDLE_INSET: f32 = 20.0;

    /// Ball defaults (square bounding box)
    pub const BALL_SIZE: f32 = 16.0;
    /// Horizontal serve speed, direction picked at random
    pub const SERVE_SPEED: f32 = 5.0;
    /// Serve vertical speed is uniform in [-SPREAD/2, SPREAD/2)
    pub const SERVE_VERTICAL_SPREAD: f32 = 6.0;

    /// Vertical speed scale after a paddle hit
    pub const BASE_DEFLECT_SPEED: f32 = 6.0;
    /// Deflection angle at the paddle edge (45 degrees)
    pub const MAX_DEFLECT_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    /// Points needed to end a session
    pub const WIN_SCORE: u32 = 5;

    /// Opponent: chance per tick to skip moving entirely
    pub const OPPONENT_MISS_CHANCE: f32 = 0.08;
    /// Opponent: total jitter range around the tracking target
    pub const OPPONENT_LAG: f32 = 16.0;
    /// Opponent: step while tracking the ball
    pub const OPPONENT_TRACK_STEP: f32 = 5.0;
    /// Opponent: step while drifting back to center
    pub const OPPONENT_CENTER_STEP: f32 = 2.0;
}
