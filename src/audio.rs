//! Sound effect triggers
//!
//! The core only decides *when* a sound should play. Playback belongs to an
//! [`AudioSink`] supplied by the host.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Fire key held during play
    Fire,
}

impl SoundEffect {
    /// Asset the host should load for this effect
    pub fn asset(self) -> &'static str {
        match self {
            SoundEffect::Fire => "pew2.wav",
        }
    }
}

/// Audio backend adapter
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}
