//! Sound triggers
//!
//! The simulation only decides *when* a sound plays. Playback belongs to
//! whatever backend implements `AudioSink`.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Ball slipped through a ring's gap
    Escape,
}

impl SoundEffect {
    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::Escape => "escape",
        }
    }
}

/// Fire-and-forget sound trigger
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Discards every trigger
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Logs triggers and counts them (headless runs and tests)
#[derive(Debug, Default)]
pub struct LogAudio {
    pub played: Vec<SoundEffect>,
    muted: bool,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle mute; muted triggers are neither logged nor recorded
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        if self.muted {
            return;
        }
        log::debug!("play sound: {}", effect.name());
        self.played.push(effect);
    }
}
