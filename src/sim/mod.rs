//! Tick-based simulation module
//!
//! All gameplay logic lives here:
//! - One tick = one logical step, velocities in pixels per tick
//! - Randomness only through an injected [`RandomSource`]
//! - No rendering, storage, or platform dependencies

pub mod collision;
pub mod opponent;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{Aabb, collides, contact_point, deflect};
pub use opponent::{OpponentMove, update_opponent};
pub use rng::{FixedRandom, RandomSource, SimRng};
pub use state::{Ball, GameEvent, GameState, Paddle, Scores, Side};
pub use tick::{TickOutcome, tick};
