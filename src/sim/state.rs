//! Simulation state and core types
//!
//! Everything a tick reads or writes lives in [`GameState`]; there are no
//! globals. The state is owned by the session and lent to the step.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::rng::RandomSource;
use crate::tuning::Tuning;

/// Which paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Human, left edge
    Player,
    /// Scripted, right edge
    Opponent,
}

impl Side {
    /// Horizontal sign pointing away from this side's paddle
    #[inline]
    pub fn away(self) -> f32 {
        match self {
            Side::Player => 1.0,
            Side::Opponent => -1.0,
        }
    }
}

/// Observable simulation events, consumed by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball was returned by a paddle
    PaddleHit { side: Side },
    /// A point was scored by `side`
    Score { side: Side },
    /// Player score exceeded the stored best
    NewBest { score: u32 },
    /// Session ended
    GameOver {
        winner: Side,
        player_score: u32,
        opponent_score: u32,
        best_score: u32,
    },
}

/// A paddle; `x` and size are fixed, only `y` (top edge) moves
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(x: f32, tuning: &Tuning) -> Self {
        Self {
            x,
            y: tuning.centered_paddle_y(),
            width: tuning.paddle_width,
            height: tuning.paddle_height,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }
}

/// The ball; `pos` is the top-left of its square bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl Ball {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.centered_ball(),
            vel: Vec2::ZERO,
            size: tuning.ball_size,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, self.size, self.size)
    }

    /// Vertical center of the ball
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size / 2.0
    }
}

/// Points for each side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub player: u32,
    pub opponent: u32,
}

impl Scores {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }

    /// Add one point for `side` and return its new total
    pub fn award(&mut self, side: Side) -> u32 {
        let score = match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        };
        *score += 1;
        *score
    }
}

/// Complete simulation state for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    pub scores: Scores,
    /// Best score seen so far, seeded from storage at session start
    pub best_score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events raised since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh state: zero scores, ball and paddles centered, ball at rest
    pub fn new(tuning: Tuning) -> Self {
        Self {
            player: Paddle::new(tuning.player_x(), &tuning),
            opponent: Paddle::new(tuning.opponent_x(), &tuning),
            ball: Ball::new(&tuning),
            scores: Scores::default(),
            best_score: 0,
            time_ticks: 0,
            events: Vec::new(),
            tuning,
        }
    }

    /// Set up a new session: zero scores, then serve
    pub fn reset(&mut self, best_score: u32, rng: &mut impl RandomSource) {
        self.scores = Scores::default();
        self.best_score = best_score;
        self.time_ticks = 0;
        self.events.clear();
        self.serve(rng);
    }

    /// Recenter ball and paddles and launch the ball in a random direction
    ///
    /// Draws two values: direction first, then vertical speed.
    pub fn serve(&mut self, rng: &mut impl RandomSource) {
        let tuning = &self.tuning;
        self.player.y = tuning.centered_paddle_y();
        self.opponent.y = tuning.centered_paddle_y();

        let vx = if rng.unit() > 0.5 {
            tuning.serve_speed
        } else {
            -tuning.serve_speed
        };
        let vy = (rng.unit() - 0.5) * tuning.serve_vertical_spread;

        self.ball.pos = tuning.centered_ball();
        self.ball.vel = Vec2::new(vx, vy);
    }

    /// Whether either side has reached the win score
    pub fn winner(&self) -> Option<Side> {
        let win = self.tuning.win_score;
        if self.scores.player >= win {
            Some(Side::Player)
        } else if self.scores.opponent >= win {
            Some(Side::Opponent)
        } else {
            None
        }
    }

    /// Move the player paddle toward a pointer target (clamped)
    ///
    /// Non-finite targets are ignored; `clamp` would pass NaN through.
    pub fn set_player_target(&mut self, y: f32) {
        if !y.is_finite() {
            return;
        }
        self.player.y = self.tuning.clamp_paddle_y(y);
    }

    /// Keep both paddles inside the field
    pub fn clamp_paddles(&mut self) {
        self.player.y = self.tuning.clamp_paddle_y(self.player.y);
        self.opponent.y = self.tuning.clamp_paddle_y(self.opponent.y);
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::FixedRandom;

    #[test]
    fn test_new_state_is_centered() {
        let state = GameState::new(Tuning::default());
        assert_eq!(state.player.x, 20.0);
        assert_eq!(state.opponent.x, 768.0);
        assert_eq!(state.player.y, 200.0);
        assert_eq!(state.opponent.y, 200.0);
        assert_eq!(state.ball.pos, Vec2::new(392.0, 242.0));
        assert_eq!(state.scores, Scores::default());
    }

    #[test]
    fn test_serve_direction_from_random() {
        let mut state = GameState::new(Tuning::default());

        // 0.5 is not > 0.5, so the ball heads toward the player
        state.serve(&mut FixedRandom(0.5));
        assert_eq!(state.ball.vel, Vec2::new(-5.0, 0.0));

        state.serve(&mut FixedRandom(0.75));
        assert_eq!(state.ball.vel, Vec2::new(5.0, 1.5));

        state.serve(&mut FixedRandom(0.0));
        assert_eq!(state.ball.vel, Vec2::new(-5.0, -3.0));
    }

    #[test]
    fn test_serve_recenters_paddles() {
        let mut state = GameState::new(Tuning::default());
        state.player.y = 0.0;
        state.opponent.y = 400.0;
        state.ball.pos = Vec2::new(-50.0, 10.0);
        state.serve(&mut FixedRandom(0.9));
        assert_eq!(state.player.y, 200.0);
        assert_eq!(state.opponent.y, 200.0);
        assert_eq!(state.ball.pos, Vec2::new(392.0, 242.0));
    }

    #[test]
    fn test_player_target_is_clamped() {
        let mut state = GameState::new(Tuning::default());
        state.set_player_target(-40.0);
        assert_eq!(state.player.y, 0.0);
        state.set_player_target(450.0);
        assert_eq!(state.player.y, 400.0);
    }

    #[test]
    fn test_non_finite_player_target_ignored() {
        let mut state = GameState::new(Tuning::default());
        state.set_player_target(120.0);
        state.set_player_target(f32::NAN);
        assert_eq!(state.player.y, 120.0);
        state.set_player_target(f32::INFINITY);
        assert_eq!(state.player.y, 120.0);
        state.set_player_target(f32::NEG_INFINITY);
        assert_eq!(state.player.y, 120.0);
    }

    #[test]
    fn test_winner() {
        let mut state = GameState::new(Tuning::default());
        assert_eq!(state.winner(), None);
        state.scores.opponent = 5;
        assert_eq!(state.winner(), Some(Side::Opponent));
        state.scores = Scores { player: 5, opponent: 2 };
        assert_eq!(state.winner(), Some(Side::Player));
    }

    #[test]
    fn test_event_json_shape() {
        let json = serde_json::to_string(&GameEvent::PaddleHit { side: Side::Opponent })
            .expect("event serializes");
        assert_eq!(json, r#"{"type":"paddle_hit","side":"opponent"}"#);
    }
}
