//! Fixed simulation tick
//!
//! One call advances the world one logical step. Velocities are per tick, so
//! a stalled host simply pauses the game; there is no catch-up.

use super::collision::{collides, deflect};
use super::opponent::update_opponent;
use super::rng::RandomSource;
use super::state::{GameEvent, GameState, Side};

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Play continues
    Continue,
    /// A side reached the win score; the ball was not re-served
    Won(Side),
}

/// Advance the game state by one tick
///
/// Order: integrate, wall bounce, paddle hit, scoring, opponent, clamp.
/// A state that already has a winner is left untouched.
pub fn tick(state: &mut GameState, rng: &mut impl RandomSource) -> TickOutcome {
    if let Some(winner) = state.winner() {
        return TickOutcome::Won(winner);
    }

    state.time_ticks += 1;

    // Integrate
    state.ball.pos += state.ball.vel;

    // Top/bottom walls; no positional correction
    let ball = &mut state.ball;
    if ball.pos.y <= 0.0 || ball.pos.y + ball.size >= state.tuning.field_height {
        ball.vel.y = -ball.vel.y;
        state.events.push(GameEvent::WallBounce);
    }

    // Paddles: player first, opponent only if the player missed
    let ball_box = state.ball.bounds();
    let hit = [Side::Player, Side::Opponent]
        .into_iter()
        .find(|&side| collides(&ball_box, &state.paddle(side).bounds()));
    if let Some(side) = hit {
        let tuning = &state.tuning;
        state.ball.vel = deflect(
            state.ball.vel,
            &ball_box,
            &state.paddle(side).bounds(),
            side.away(),
            tuning.deflect_speed,
            tuning.max_deflect_angle,
        );
        state.events.push(GameEvent::PaddleHit { side });
    }

    // Scoring
    let ball = &state.ball;
    let scorer = if ball.pos.x + ball.size < 0.0 {
        Some(Side::Opponent)
    } else if ball.pos.x > state.tuning.field_width {
        Some(Side::Player)
    } else {
        None
    };
    if let Some(side) = scorer {
        let score = state.scores.award(side);
        state.events.push(GameEvent::Score { side });
        log::debug!(
            "{:?} scored ({} - {})",
            side,
            state.scores.player,
            state.scores.opponent
        );

        if side == Side::Player && score > state.best_score {
            state.best_score = score;
            state.events.push(GameEvent::NewBest { score });
        }

        if let Some(winner) = state.winner() {
            return TickOutcome::Won(winner);
        }
        state.serve(rng);
    }

    update_opponent(state, rng);
    state.clamp_paddles();

    TickOutcome::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::{FixedRandom, SimRng};
    use crate::sim::state::Scores;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn state() -> GameState {
        GameState::new(Tuning::default())
    }

    #[test]
    fn test_free_flight_single_tick() {
        let mut state = state();
        state.ball.pos = Vec2::new(800.0 / 2.0 - 8.0, 500.0 / 2.0 - 8.0);
        state.ball.vel = Vec2::new(5.0, 0.0);

        let outcome = tick(&mut state, &mut FixedRandom(0.5));
        assert_eq!(outcome, TickOutcome::Continue);
        assert_eq!(state.ball.pos, Vec2::new(800.0 / 2.0 - 3.0, 500.0 / 2.0 - 8.0));
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_wall_bounce_negates_vy() {
        let mut state = state();
        state.ball.pos = Vec2::new(400.0, 2.0);
        state.ball.vel = Vec2::new(5.0, -3.0);

        tick(&mut state, &mut FixedRandom(0.5));
        // Penetrates for this tick, velocity already flipped
        assert_eq!(state.ball.pos.y, -1.0);
        assert_eq!(state.ball.vel.y, 3.0);
        assert_eq!(state.events, vec![GameEvent::WallBounce]);
    }

    #[test]
    fn test_bottom_wall_bounce() {
        let mut state = state();
        state.ball.pos = Vec2::new(400.0, 480.0);
        state.ball.vel = Vec2::new(-5.0, 4.0);

        tick(&mut state, &mut FixedRandom(0.5));
        assert_eq!(state.ball.vel.y, -4.0);
    }

    #[test]
    fn test_player_paddle_returns_ball() {
        let mut state = state();
        // Paddle spans x 20..32, y 200..300
        state.ball.pos = Vec2::new(35.0, 270.0);
        state.ball.vel = Vec2::new(-5.0, 1.0);

        tick(&mut state, &mut FixedRandom(0.5));
        assert!(state.events.contains(&GameEvent::PaddleHit { side: Side::Player }));
        assert_eq!(state.ball.vel.x, 5.0);
        // Below center hit deflects downward
        assert!(state.ball.vel.y > 0.0);
        assert!(state.ball.vel.y <= 6.0);
    }

    #[test]
    fn test_opponent_paddle_returns_ball() {
        let mut state = state();
        // Opponent spans x 768..780
        state.ball.pos = Vec2::new(750.0, 210.0);
        state.ball.vel = Vec2::new(5.0, 0.0);

        tick(&mut state, &mut FixedRandom(0.5));
        assert!(state.events.contains(&GameEvent::PaddleHit { side: Side::Opponent }));
        assert_eq!(state.ball.vel.x, -5.0);
        assert!(state.ball.vel.y < 0.0);
    }

    #[test]
    fn test_opponent_scores_and_reserves() {
        let mut state = state();
        state.ball.pos = Vec2::new(-12.0, 20.0);
        state.ball.vel = Vec2::new(-5.0, 0.0);

        tick(&mut state, &mut FixedRandom(0.5));
        assert_eq!(state.scores, Scores { player: 0, opponent: 1 });
        assert!(state.events.contains(&GameEvent::Score { side: Side::Opponent }));
        assert_eq!(state.ball.pos, state.tuning.centered_ball());
    }

    #[test]
    fn test_player_score_updates_best() {
        let mut state = state();
        state.best_score = 1;
        state.scores.player = 1;
        state.ball.pos = Vec2::new(799.0, 20.0);
        state.ball.vel = Vec2::new(5.0, 0.0);

        tick(&mut state, &mut FixedRandom(0.5));
        assert_eq!(state.scores.player, 2);
        assert_eq!(state.best_score, 2);
        assert!(state.events.contains(&GameEvent::NewBest { score: 2 }));
    }

    #[test]
    fn test_win_stops_without_serve() {
        let mut state = state();
        state.scores.opponent = 4;
        state.ball.pos = Vec2::new(-12.0, 20.0);
        state.ball.vel = Vec2::new(-5.0, 0.0);

        let outcome = tick(&mut state, &mut FixedRandom(0.5));
        assert_eq!(outcome, TickOutcome::Won(Side::Opponent));
        assert_eq!(state.ball.pos, Vec2::new(-17.0, 20.0));

        // Further ticks change nothing
        let frozen = (state.ball, state.scores, state.opponent.y);
        for _ in 0..5 {
            assert_eq!(tick(&mut state, &mut FixedRandom(0.5)), TickOutcome::Won(Side::Opponent));
        }
        assert_eq!((state.ball, state.scores, state.opponent.y), frozen);
    }

    #[test]
    fn test_deterministic_with_seed() {
        let mut a = state();
        let mut b = state();
        let mut rng_a = SimRng::new(99);
        let mut rng_b = SimRng::new(99);
        a.reset(0, &mut rng_a);
        b.reset(0, &mut rng_b);

        for i in 0..2000 {
            a.set_player_target((i % 400) as f32);
            b.set_player_target((i % 400) as f32);
            let oa = tick(&mut a, &mut rng_a);
            let ob = tick(&mut b, &mut rng_b);
            assert_eq!(oa, ob);
            assert_eq!(a.ball, b.ball);
            assert_eq!(a.opponent, b.opponent);
            assert_eq!(a.scores, b.scores);
        }
    }
}
