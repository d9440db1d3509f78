//! Property tests for collision, paddle bounds, and deflection

use glam::Vec2;
use proptest::prelude::*;

use paddle_duel::Tuning;
use paddle_duel::sim::{Aabb, FixedRandom, GameEvent, GameState, SimRng, Side, collides, tick};

fn aabb() -> impl Strategy<Value = Aabb> {
    (-100.0f32..900.0, -100.0f32..600.0, 1.0f32..120.0, 1.0f32..120.0)
        .prop_map(|(x, y, w, h)| Aabb::new(x, y, w, h))
}

/// Pointer positions, including the odd non-finite value a page can send
fn pointer_target() -> impl Strategy<Value = f32> {
    prop_oneof![
        8 => -300.0f32..800.0,
        1 => Just(f32::NAN),
        1 => Just(f32::INFINITY),
        1 => Just(f32::NEG_INFINITY),
    ]
}

proptest! {
    #[test]
    fn collides_is_symmetric(a in aabb(), b in aabb()) {
        prop_assert_eq!(collides(&a, &b), collides(&b, &a));
    }

    #[test]
    fn disjoint_boxes_never_collide(a in aabb(), gap in 0.0f32..50.0, vertical in any::<bool>()) {
        let b = if vertical {
            Aabb::new(a.min.x, a.max().y + gap, a.size.x, a.size.y)
        } else {
            Aabb::new(a.max().x + gap, a.min.y, a.size.x, a.size.y)
        };
        prop_assert!(!collides(&a, &b));
        prop_assert!(!collides(&b, &a));
    }

    #[test]
    fn paddles_stay_in_bounds(
        seed in any::<u64>(),
        targets in prop::collection::vec(pointer_target(), 1..400),
    ) {
        let mut state = GameState::new(Tuning::default());
        let mut rng = SimRng::new(seed);
        state.reset(0, &mut rng);
        let max_y = state.tuning.max_paddle_y();

        for target in targets {
            state.set_player_target(target);
            prop_assert!((0.0..=max_y).contains(&state.player.y));
            if state.winner().is_some() {
                break;
            }
            tick(&mut state, &mut rng);
            prop_assert!((0.0..=max_y).contains(&state.player.y));
            prop_assert!((0.0..=max_y).contains(&state.opponent.y));
        }
    }

    #[test]
    fn paddle_hits_bound_vy_and_point_away(
        paddle_y in 0.0f32..400.0,
        ball_y in -20.0f32..520.0,
        vx in 1.0f32..12.0,
        vy in -8.0f32..8.0,
        player_side in any::<bool>(),
    ) {
        let mut state = GameState::new(Tuning::default());
        let side = if player_side { Side::Player } else { Side::Opponent };
        // Place the ball so it reaches the paddle face this tick
        let (x, vel_x) = match side {
            Side::Player => {
                state.player.y = paddle_y;
                (state.player.x + state.player.width + 2.0, -vx)
            }
            Side::Opponent => {
                state.opponent.y = paddle_y;
                (state.opponent.x - state.ball.size - 2.0, vx)
            }
        };
        state.ball.pos = Vec2::new(x, ball_y);
        state.ball.vel = Vec2::new(vel_x, vy);

        tick(&mut state, &mut FixedRandom(0.05));
        if state.events.contains(&GameEvent::PaddleHit { side }) {
            prop_assert!(state.ball.vel.y.abs() <= 6.0 + 1e-4);
            prop_assert_eq!(state.ball.vel.x.signum(), side_away(side));
            prop_assert_eq!(state.ball.vel.x.abs(), vx);
        }
    }
}

fn side_away(side: Side) -> f32 {
    match side {
        Side::Player => 1.0,
        Side::Opponent => -1.0,
    }
}
