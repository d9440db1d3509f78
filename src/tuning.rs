//! Overridable game parameters
//!
//! Defaults come from [`crate::consts`]. A JSON file may override any subset
//! of fields; missing fields keep their default.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Reasons a tuning file was rejected
#[derive(Debug)]
pub enum TuningError {
    /// Not valid JSON for a `Tuning`
    Parse(serde_json::Error),
    /// File could not be read
    Io(std::io::Error),
    /// Parsed, but the values make no playable field
    Invalid(&'static str),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(e) => write!(f, "invalid tuning JSON: {}", e),
            TuningError::Io(e) => write!(f, "failed to read tuning file: {}", e),
            TuningError::Invalid(reason) => write!(f, "invalid tuning: {}", reason),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(e) => Some(e),
            TuningError::Io(e) => Some(e),
            TuningError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

impl From<std::io::Error> for TuningError {
    fn from(e: std::io::Error) -> Self {
        TuningError::Io(e)
    }
}

/// Field geometry and balance constants for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,

    // === Ball ===
    pub ball_size: f32,
    pub serve_speed: f32,
    pub serve_vertical_spread: f32,
    pub deflect_speed: f32,
    pub max_deflect_angle: f32,

    // === Rules ===
    pub win_score: u32,

    // === Opponent ===
    pub opponent_miss_chance: f32,
    pub opponent_lag: f32,
    pub opponent_track_step: f32,
    pub opponent_center_step: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_inset: PADDLE_INSET,

            ball_size: BALL_SIZE,
            serve_speed: SERVE_SPEED,
            serve_vertical_spread: SERVE_VERTICAL_SPREAD,
            deflect_speed: BASE_DEFLECT_SPEED,
            max_deflect_angle: MAX_DEFLECT_ANGLE,

            win_score: WIN_SCORE,

            opponent_miss_chance: OPPONENT_MISS_CHANCE,
            opponent_lag: OPPONENT_LAG,
            opponent_track_step: OPPONENT_TRACK_STEP,
            opponent_center_step: OPPONENT_CENTER_STEP,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Reject values that cannot produce a playable field
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.field_width <= 0.0 || self.field_height <= 0.0 {
            return Err(TuningError::Invalid("field dimensions must be positive"));
        }
        if self.paddle_width <= 0.0 || self.paddle_height <= 0.0 {
            return Err(TuningError::Invalid("paddle dimensions must be positive"));
        }
        if self.paddle_height > self.field_height {
            return Err(TuningError::Invalid("paddle is taller than the field"));
        }
        if self.ball_size <= 0.0 || self.ball_size > self.field_height {
            return Err(TuningError::Invalid("ball size must fit the field"));
        }
        if !(0.0..=1.0).contains(&self.opponent_miss_chance) {
            return Err(TuningError::Invalid("miss chance must be within [0, 1]"));
        }
        if self.serve_speed <= 0.0 {
            return Err(TuningError::Invalid("serve speed must be positive"));
        }
        if self.opponent_track_step <= 0.0 || self.opponent_center_step <= 0.0 {
            return Err(TuningError::Invalid("opponent steps must be positive"));
        }
        if self.win_score == 0 {
            return Err(TuningError::Invalid("win score must be at least 1"));
        }
        Ok(())
    }

    /// Left (player) paddle x
    pub fn player_x(&self) -> f32 {
        self.paddle_inset
    }

    /// Right (opponent) paddle x
    pub fn opponent_x(&self) -> f32 {
        self.field_width - self.paddle_width - self.paddle_inset
    }

    /// Largest legal paddle top edge
    pub fn max_paddle_y(&self) -> f32 {
        self.field_height - self.paddle_height
    }

    /// Clamp a paddle top edge into `[0, max_paddle_y]`
    #[inline]
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.max_paddle_y())
    }

    /// Paddle top edge that centers it vertically
    pub fn centered_paddle_y(&self) -> f32 {
        self.max_paddle_y() / 2.0
    }

    /// Ball top-left that centers it in the field
    pub fn centered_ball(&self) -> Vec2 {
        Vec2::new(
            (self.field_width - self.ball_size) / 2.0,
            (self.field_height - self.ball_size) / 2.0,
        )
    }
}
