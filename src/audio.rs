//! Sound effects
//!
//! Procedurally generated tones, no external files needed. Each effect is a
//! schedule of oscillator tones; playback through Web Audio is wasm-only.

use rand::Rng;

use crate::brew::Rarity;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ingredient lands in the cauldron
    Splash,
    /// Mix button pressed
    Mix,
    /// Creature revealed (pitch rises with rarity)
    Reveal(Rarity),
    /// Creature collected
    Collect,
}

/// Oscillator waveform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
    Sawtooth,
}

/// One scheduled tone with an exponential fade-out
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub freq: f32,
    /// Seconds after the effect is triggered
    pub delay: f64,
    /// Seconds until silent
    pub duration: f64,
    pub waveform: Waveform,
    /// Peak gain before the effect volume is applied
    pub gain: f32,
}

impl Tone {
    const fn new(freq: f32, delay: f64, duration: f64, waveform: Waveform, gain: f32) -> Self {
        Self {
            freq,
            delay,
            duration,
            waveform,
            gain,
        }
    }
}

impl SoundEffect {
    /// Tones making up this effect. Only the splash uses `rng` (pitch jitter).
    pub fn tones(&self, rng: &mut impl Rng) -> Vec<Tone> {
        match self {
            SoundEffect::Splash => vec![
                Tone::new(
                    200.0 + rng.random_range(0.0..200.0),
                    0.0,
                    0.3,
                    Waveform::Sine,
                    0.08,
                ),
                Tone::new(600.0, 0.0, 0.1, Waveform::Triangle, 0.05),
            ],
            SoundEffect::Mix => (0..5)
                .map(|i| {
                    Tone::new(
                        300.0 + i as f32 * 100.0,
                        i as f64 * 0.15,
                        0.2,
                        Waveform::Sawtooth,
                        0.04,
                    )
                })
                .collect(),
            SoundEffect::Reveal(rarity) => {
                let base = reveal_base_freq(*rarity);
                (0..5)
                    .map(|i| {
                        Tone::new(
                            base + i as f32 * 80.0,
                            i as f64 * 0.1,
                            0.3,
                            Waveform::Sine,
                            0.08,
                        )
                    })
                    .collect()
            }
            SoundEffect::Collect => vec![
                Tone::new(800.0, 0.0, 0.15, Waveform::Sine, 0.1),
                Tone::new(1000.0, 0.1, 0.2, Waveform::Sine, 0.1),
            ],
        }
    }
}

/// Starting pitch of the reveal arpeggio
fn reveal_base_freq(rarity: Rarity) -> f32 {
    match rarity {
        Rarity::Common => 300.0,
        Rarity::Uncommon => 400.0,
        Rarity::Rare => 500.0,
        Rarity::Legendary => 600.0,
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{SoundEffect, Tone, Waveform};

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        volume: f32,
        rng: Pcg32,
    }

    impl AudioManager {
        pub fn new(volume: f32, seed: u64) -> Self {
            // Try to create audio context (may fail if not in secure context)
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                volume: volume.clamp(0.0, 1.0),
                rng: Pcg32::seed_from_u64(seed),
            }
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        /// Set effect volume (0.0 - 1.0)
        pub fn set_volume(&mut self, volume: f32) {
            self.volume = volume.clamp(0.0, 1.0);
        }

        /// Play a sound effect
        pub fn play(&mut self, effect: SoundEffect) {
            if self.volume <= 0.0 {
                return;
            }
            let Some(ctx) = &self.ctx else { return };

            // Resume context if suspended (browsers require user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            for tone in effect.tones(&mut self.rng) {
                play_tone(ctx, &tone, self.volume);
            }
        }
    }

    /// Create an oscillator with gain envelope
    fn create_osc(
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

    fn play_tone(ctx: &AudioContext, tone: &Tone, volume: f32) {
        let osc_type = match tone.waveform {
            Waveform::Sine => OscillatorType::Sine,
            Waveform::Triangle => OscillatorType::Triangle,
            Waveform::Sawtooth => OscillatorType::Sawtooth,
        };
        let Some((osc, gain)) = create_osc(ctx, tone.freq, osc_type) else {
            return;
        };
        let t = ctx.current_time() + tone.delay;

        gain.gain().set_value_at_time(tone.gain * volume, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.001, t + tone.duration)
            .ok();
        osc.start_with_when(t).ok();
        osc.stop_with_when(t + tone.duration).ok();
    }
}
