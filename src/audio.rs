//! Fire-and-forget sound effect sink.
//!
//! The simulation fires effect requests and never waits on playback;
//! sinks are free to drop them. The shipped implementations are a silent
//! stub for tests and a logging sink for headless runs - neither may
//! alter simulation outcomes.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Asteroid destroyed against the craft
    Explosion,
}

/// Accepts "play effect" requests. No return value, no completion
/// callback.
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Discards every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Headless sink: applies the volume and mute controls, then logs the
/// request instead of synthesizing it.
#[derive(Debug)]
pub struct ConsoleAudio {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for ConsoleAudio {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleAudio {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
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

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }
}

impl AudioSink for ConsoleAudio {
    fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        log::debug!("sfx {:?} at volume {:.2}", effect, vol);
    }
}
