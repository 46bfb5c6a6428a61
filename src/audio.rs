//! Sound effects
//!
//! The pop sample is played fire-and-forget through an `<audio>` element per
//! pop, so overlapping pops don't cut each other off. If the sample cannot be
//! played a short synthesized pop goes through Web Audio instead. Every
//! failure is logged and otherwise ignored.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player popped a bubble
    Pop,
}

impl SoundEffect {
    /// Sound to play for a tick event, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::BubblePopped { .. } => Some(SoundEffect::Pop),
            GameEvent::BubbleSpawned { .. } | GameEvent::BubbleCulled { .. } => None,
        }
    }
}

/// Combined volume for sound effects (0.0 when muted)
pub fn effective_volume(master: f32, sfx: f32, muted: bool) -> f32 {
    if muted {
        0.0
    } else {
        (master * sfx).clamp(0.0, 1.0)
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{AudioContext, GainNode, HtmlAudioElement, OscillatorNode, OscillatorType};

    use super::{SoundEffect, effective_volume};
    use crate::consts::POP_SOUND;

    /// Audio manager for the game
    pub struct AudioManager {
        /// Only needed for the synthesized fallback
        ctx: Option<AudioContext>,
        master_volume: f32,
        sfx_volume: f32,
        muted: bool,
        /// Volume of the most recent sample, reused by the fallback
        fallback_volume: Rc<Cell<f32>>,
        /// Shared `catch` handler for every sample's play promise
        on_play_error: Closure<dyn FnMut(JsValue)>,
    }

    impl Default for AudioManager {
        fn default() -> Self {
            Self::new()
        }
    }

    impl AudioManager {
        pub fn new() -> Self {
            // May fail outside a secure context - the sample path still works
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - synthesized fallback disabled");
            }
            let fallback_volume = Rc::new(Cell::new(0.0));
            let on_play_error = {
                let ctx = ctx.clone();
                let vol = fallback_volume.clone();
                Closure::<dyn FnMut(JsValue)>::new(move |err: JsValue| {
                    log::warn!("Pop sample failed to play: {:?}", err);
                    if let Some(ctx) = &ctx {
                        synth_pop(ctx, vol.get());
                    }
                })
            };
            Self {
                ctx,
                master_volume: 0.8,
                sfx_volume: 1.0,
                muted: false,
                fallback_volume,
                on_play_error,
            }
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        /// Set master volume (0.0 - 1.0)
        pub fn set_master_volume(&mut self, vol: f32) {
            self.master_volume = vol.clamp(0.0, 1.0);
        }

        /// Set SFX volume (0.0 - 1.0)
        pub fn set_sfx_volume(&mut self, vol: f32) {
            self.sfx_volume = vol.clamp(0.0, 1.0);
        }

        pub fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
        }

        /// Play a sound effect
        pub fn play(&self, effect: SoundEffect) {
            let vol = effective_volume(self.master_volume, self.sfx_volume, self.muted);
            if vol <= 0.0 {
                return;
            }

            match effect {
                SoundEffect::Pop => {
                    if !self.play_sample(POP_SOUND, vol) {
                        self.play_synth_pop(vol);
                    }
                }
            }
        }

        /// Start a sample; returns false if the element could not be created.
        /// A rejected `play()` (autoplay policy, missing file) falls back to the
        /// synthesized pop.
        fn play_sample(&self, src: &str, vol: f32) -> bool {
            let el = match HtmlAudioElement::new_with_src(src) {
                Ok(el) => el,
                Err(e) => {
                    log::warn!("Failed to create audio element for {}: {:?}", src, e);
                    return false;
                }
            };
            el.set_volume(vol as f64);

            match el.play() {
                Ok(promise) => {
                    self.fallback_volume.set(vol);
                    let _ = promise.catch(&self.on_play_error);
                    true
                }
                Err(e) => {
                    log::warn!("Pop sample failed to play: {:?}", e);
                    false
                }
            }
        }

        fn play_synth_pop(&self, vol: f32) {
            if let Some(ctx) = &self.ctx {
                synth_pop(ctx, vol);
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

    /// Pop - quick upward blip
    fn synth_pop(ctx: &AudioContext, vol: f32) {
        // Resume context if suspended (browsers require user gesture)
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        let Some((osc, gain)) = create_osc(ctx, 500.0, OscillatorType::Sine) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.4, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.08)
            .ok();
        osc.frequency().set_value_at_time(500.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(1400.0, t + 0.05)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.1).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_only_pops_make_sound() {
        let pop = GameEvent::BubblePopped {
            pos: Vec2::ZERO,
            radius: 30.0,
        };
        let cull = GameEvent::BubbleCulled {
            pos: Vec2::ZERO,
            radius: 30.0,
        };
        let spawn = GameEvent::BubbleSpawned {
            pos: Vec2::ZERO,
            radius: 30.0,
        };
        assert_eq!(SoundEffect::for_event(&pop), Some(SoundEffect::Pop));
        assert_eq!(SoundEffect::for_event(&cull), None);
        assert_eq!(SoundEffect::for_event(&spawn), None);
    }

    #[test]
    fn test_effective_volume() {
        assert_eq!(effective_volume(0.8, 0.5, false), 0.4);
        assert_eq!(effective_volume(0.8, 0.5, true), 0.0);
        assert_eq!(effective_volume(2.0, 1.0, false), 1.0);
    }
}
