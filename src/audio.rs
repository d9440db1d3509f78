//! Sound effects for simulation events
//!
//! Events map to effects everywhere; playback uses the Web Audio API and only
//! exists on wasm32. Tones are generated procedurally, no external files.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits a paddle
    PaddleHit,
    /// Ball hits the top or bottom wall
    WallHit,
    /// Someone scored
    Score,
    /// Session ended
    GameOver,
    /// New best score
    HighScore,
}

impl SoundEffect {
    /// Effect to play for an event
    pub fn for_event(event: &GameEvent) -> SoundEffect {
        match event {
            GameEvent::WallBounce => SoundEffect::WallHit,
            GameEvent::PaddleHit { .. } => SoundEffect::PaddleHit,
            GameEvent::Score { .. } => SoundEffect::Score,
            GameEvent::NewBest { .. } => SoundEffect::HighScore,
            GameEvent::GameOver { .. } => SoundEffect::GameOver,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web_audio::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web_audio {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::SoundEffect;

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        volume: f32,
        muted: bool,
    }

    impl Default for AudioManager {
        fn default() -> Self {
            Self::new()
        }
    }

    impl AudioManager {
        pub fn new() -> Self {
            // May fail outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                volume: 0.8,
                muted: false,
            }
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        /// Set volume (0.0 - 1.0)
        pub fn set_volume(&mut self, vol: f32) {
            self.volume = vol.clamp(0.0, 1.0);
        }

        pub fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
        }

        fn effective_volume(&self) -> f32 {
            if self.muted { 0.0 } else { self.volume }
        }

        /// Play a sound effect
        pub fn play(&self, effect: SoundEffect) {
            let vol = self.effective_volume();
            if vol <= 0.0 {
                return;
            }

            let Some(ctx) = &self.ctx else { return };

            // Browsers start the context suspended until a user gesture
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match effect {
                SoundEffect::PaddleHit => self.play_paddle_hit(ctx, vol),
                SoundEffect::WallHit => self.play_wall_hit(ctx, vol),
                SoundEffect::Score => self.play_score(ctx, vol),
                SoundEffect::GameOver => self.play_game_over(ctx, vol),
                SoundEffect::HighScore => self.play_high_score(ctx, vol),
            }
        }

        /// Schedule one enveloped note `delay` seconds from now
        ///
        /// The gain starts at `peak` and decays over `len`. The oscillator is
        /// returned so callers can bend its frequency.
        fn voice(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
            peak: f32,
            delay: f64,
            len: f64,
        ) -> Option<OscillatorNode> {
            let osc = ctx.create_oscillator().ok()?;
            let env: GainNode = ctx.create_gain().ok()?;
            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&env).ok()?;
            env.connect_with_audio_node(&ctx.destination()).ok()?;

            let at = ctx.current_time() + delay;
            let level = env.gain();
            level.set_value_at_time(peak, at).ok()?;
            level.exponential_ramp_to_value_at_time(0.01, at + len).ok()?;

            osc.start_with_when(at).ok()?;
            osc.stop_with_when(at + len + 0.02).ok()?;
            Some(osc)
        }

        /// Play `notes` back to back, `step` seconds apart
        fn phrase(&self, ctx: &AudioContext, notes: &[f32], osc_type: OscillatorType, peak: f32, step: f64) {
            for (i, &freq) in notes.iter().enumerate() {
                self.voice(ctx, freq, osc_type, peak, i as f64 * step, step * 1.2);
            }
        }

        /// Paddle hit - short square blip
        fn play_paddle_hit(&self, ctx: &AudioContext, vol: f32) {
            self.voice(ctx, 440.0, OscillatorType::Square, vol * 0.3, 0.0, 0.08);
        }

        /// Wall hit - lower ping
        fn play_wall_hit(&self, ctx: &AudioContext, vol: f32) {
            self.voice(ctx, 220.0, OscillatorType::Sine, vol * 0.3, 0.0, 0.08);
        }

        /// Score - falling tone
        fn play_score(&self, ctx: &AudioContext, vol: f32) {
            let Some(osc) = self.voice(ctx, 600.0, OscillatorType::Triangle, vol * 0.35, 0.0, 0.3)
            else {
                return;
            };
            let t = ctx.current_time();
            osc.frequency()
                .exponential_ramp_to_value_at_time(300.0, t + 0.25)
                .ok();
        }

        /// Game over - two low buzzes
        fn play_game_over(&self, ctx: &AudioContext, vol: f32) {
            self.phrase(ctx, &[196.0, 131.0], OscillatorType::Sawtooth, vol * 0.2, 0.3);
        }

        /// High score - rising arpeggio
        fn play_high_score(&self, ctx: &AudioContext, vol: f32) {
            self.phrase(ctx, &[523.0, 659.0, 784.0, 1047.0], OscillatorType::Triangle, vol * 0.25, 0.08);
        }
    }
}
