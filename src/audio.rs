//! Sound effects using the Web Audio API
//!
//! Procedurally generated blips - no external files needed.

use crate::sim::{GameEvent, Outcome};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
    /// Ball hits wall
    WallHit,
    /// Ball passes through a cell
    CellHit,
    /// Score threshold reached
    Win,
    /// Ball fell past the paddle
    Lose,
}

impl SoundEffect {
    /// Sound for a simulation event
    pub fn for_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::PaddleBounce { .. } => SoundEffect::PaddleHit,
            GameEvent::WallBounce => SoundEffect::WallHit,
            GameEvent::CellHit { .. } => SoundEffect::CellHit,
            GameEvent::SessionEnded(Outcome::Won) => SoundEffect::Win,
            GameEvent::SessionEnded(Outcome::Lost) => SoundEffect::Lose,
        }
    }
}

/// Collapse a frame's events into distinct sounds, in first-seen order
///
/// A single frame can hit hundreds of stacked cells; one blip is enough.
pub fn sounds_for(events: &[GameEvent]) -> Vec<SoundEffect> {
    let mut sounds: Vec<SoundEffect> = Vec::new();
    for event in events {
        let sound = SoundEffect::for_event(event);
        if !sounds.contains(&sound) {
            sounds.push(sound);
        }
    }
    sounds
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::SoundEffect;

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        volume: f32,
    }

    impl Default for AudioManager {
        fn default() -> Self {
            Self::new()
        }
    }

    impl AudioManager {
        pub fn new() -> Self {
            // Try to create audio context (may fail if not in secure context)
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                volume: 0.6,
            }
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        /// Play a sound effect
        pub fn play(&self, effect: SoundEffect) {
            if self.volume <= 0.0 {
                return;
            }
            let Some(ctx) = &self.ctx else { return };

            // Resume context if suspended (browsers require user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            let vol = self.volume;
            match effect {
                SoundEffect::PaddleHit => self.play_paddle_hit(ctx, vol),
                SoundEffect::WallHit => self.play_blip(ctx, vol * 0.3, 400.0, 0.08),
                SoundEffect::CellHit => self.play_blip(ctx, vol * 0.25, 660.0, 0.05),
                SoundEffect::Win => self.play_sequence(ctx, vol, &[400.0, 500.0, 600.0, 800.0]),
                SoundEffect::Lose => self.play_sequence(ctx, vol, &[400.0, 350.0, 300.0, 200.0]),
            }
        }

        /// Create an oscillator with gain envelope
        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Paddle hit - solid thump
        fn play_paddle_hit(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, 150.0, OscillatorType::Sine) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.6, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.1)
                .ok();
            osc.frequency().set_value_at_time(150.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(60.0, t + 0.1)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.15).ok();
        }

        /// Short decaying tone
        fn play_blip(&self, ctx: &AudioContext, vol: f32, freq: f32, length: f64) {
            let Some((osc, gain)) = self.create_osc(ctx, freq, OscillatorType::Triangle) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + length)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + length + 0.02).ok();
        }

        /// Notes played one after another (fanfare / game over)
        fn play_sequence(&self, ctx: &AudioContext, vol: f32, freqs: &[f32]) {
            for (i, freq) in freqs.iter().enumerate() {
                let delay = i as f64 * 0.15;
                if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Triangle) {
                    let t = ctx.current_time() + delay;
                    gain.gain().set_value_at_time(vol * 0.3, t).ok();
                    gain.gain()
                        .exponential_ramp_to_value_at_time(0.01, t + 0.3)
                        .ok();
                    osc.start_with_when(t).ok();
                    osc.stop_with_when(t + 0.35).ok();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_sounds() {
        assert_eq!(
            SoundEffect::for_event(&GameEvent::PaddleBounce { offset: 0.5 }),
            SoundEffect::PaddleHit
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::SessionEnded(Outcome::Lost)),
            SoundEffect::Lose
        );
    }

    #[test]
    fn test_sounds_deduplicated() {
        let events = [
            GameEvent::CellHit { column: 0, row: 0 },
            GameEvent::CellHit { column: 1, row: 0 },
            GameEvent::SessionEnded(Outcome::Won),
            GameEvent::WallBounce,
        ];
        assert_eq!(
            sounds_for(&events),
            vec![SoundEffect::CellHit, SoundEffect::Win, SoundEffect::WallHit]
        );
    }
}
