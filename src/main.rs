//! Paddle Duel entry point
//!
//! The web build is driven from the page through `paddle_duel::web`. Natively
//! this runs one headless session with an autoplayed player paddle.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Paddle Duel (native) starting...");

    headless::run(std::env::args().nth(1));
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is `web::wasm_init`, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use paddle_duel::best_score::FileStore;
    use paddle_duel::sim::{GameEvent, RandomSource, SimRng};
    use paddle_duel::{Session, SessionStatus, Tuning};

    /// Best score file in the working directory
    const BEST_SCORE_FILE: &str = "paddle_duel_best.json";
    /// Give up after this many ticks (about 10 minutes at 60 Hz)
    const MAX_TICKS: u32 = 36_000;
    /// Autopilot aim error, in pixels either side of the ball
    const AIM_ERROR: f32 = 60.0;

    pub fn run(tuning_path: Option<String>) {
        let tuning = match tuning_path {
            Some(path) => Tuning::load(&path).unwrap_or_else(|e| {
                log::warn!("{}; using default tuning", e);
                Tuning::default()
            }),
            None => Tuning::default(),
        };

        let rng = SimRng::from_entropy();
        log::info!("Seed: {}", rng.seed());
        let mut aim_rng = SimRng::new(rng.seed().wrapping_add(1));

        let store = FileStore::new(BEST_SCORE_FILE);
        log::info!("Best score file: {}", store.path().display());
        let mut session = Session::new(tuning, store, rng);
        let Some(handle) = session.start() else {
            log::error!("Session refused to start");
            return;
        };

        // Aim offset changes on every paddle hit so rallies end eventually
        let mut aim_offset = 0.0;
        let mut ticks = 0;
        while session.is_running() && ticks < MAX_TICKS {
            let state = session.state();
            let target = state.ball.center_y() - state.player.height / 2.0 + aim_offset;
            session.set_player_target(target);

            for event in session.frame(handle) {
                match event {
                    GameEvent::PaddleHit { .. } => {
                        aim_offset = (aim_rng.unit() - 0.5) * 2.0 * AIM_ERROR;
                    }
                    GameEvent::Score { side } => {
                        let snap = session.snapshot();
                        log::info!(
                            "{:?} scores: {} - {}",
                            side,
                            snap.player_score,
                            snap.opponent_score
                        );
                    }
                    GameEvent::NewBest { score } => log::info!("New best score: {}", score),
                    GameEvent::WallBounce | GameEvent::GameOver { .. } => {}
                }
            }
            ticks += 1;
        }

        if session.status() == SessionStatus::Running {
            log::warn!("Tick cap reached, stopping session");
            session.stop();
            session.drain_events();
        }

        let snap = session.snapshot();
        println!(
            "Final score: {} - {} after {} ticks (best {})",
            snap.player_score,
            snap.opponent_score,
            ticks,
            session.best_score()
        );
    }
}
