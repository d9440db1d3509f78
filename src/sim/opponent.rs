//! Scripted opponent
//!
//! Imperfect on purpose: it sometimes freezes for a tick, tracks a jittered
//! target at bounded speed, and only tracks once the ball is coming at it
//! across the midline. Otherwise it drifts back toward center.

use super::rng::RandomSource;
use super::state::GameState;

/// What the opponent did this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OpponentMove {
    /// Lost its chance to move
    Frozen,
    /// Stepped toward a jittered ball target
    Tracking { target: f32 },
    /// Drifted toward the field center
    Centering,
}

/// Move the opponent paddle for one tick
///
/// Random draws, in order: the freeze check, then (when tracking) the jitter.
/// The caller clamps the paddle afterwards.
pub fn update_opponent(state: &mut GameState, rng: &mut impl RandomSource) -> OpponentMove {
    let tuning = &state.tuning;

    if rng.unit() <= tuning.opponent_miss_chance {
        return OpponentMove::Frozen;
    }

    let ball = &state.ball;
    let paddle = &mut state.opponent;

    if ball.vel.x > 0.0 && ball.pos.x > tuning.field_width / 2.0 {
        let jitter = (rng.unit() - 0.5) * tuning.opponent_lag;
        let target = ball.center_y() - paddle.height / 2.0 + jitter;
        let step = tuning.opponent_track_step;
        if paddle.y < target {
            paddle.y += step;
        } else if paddle.y > target {
            paddle.y -= step;
        }
        OpponentMove::Tracking { target }
    } else {
        let center = tuning.centered_paddle_y();
        let step = tuning.opponent_center_step;
        // An overshooting step up is undone by the step down,
        // so the paddle settles near center instead of oscillating
        if paddle.y < center {
            paddle.y += step;
        }
        if paddle.y > center {
            paddle.y -= step;
        }
        OpponentMove::Centering
    }
}
