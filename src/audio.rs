//! Fire-and-forget sound effect playback
//!
//! Playback failures of any kind (no output device, missing asset file,
//! undecodable data) are logged and swallowed; they never reach game state
//! and never block the tick thread. Each effect plays on a detached sink,
//! so the call returns immediately.

use std::fs;
use std::io::Cursor;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball bounced off the paddle
    PaddleHit,
    /// A brick was destroyed
    BrickBreak,
}

impl SoundEffect {
    /// Asset file played for this effect
    pub fn asset_path(&self) -> &'static str {
        match self {
            SoundEffect::PaddleHit => "assets/sounds/paddle_hit.wav",
            SoundEffect::BrickBreak => "assets/sounds/brick_break.wav",
        }
    }
}

/// Audio manager for the game
///
/// The output stream handle is `None` when no audio device is available;
/// every `play` call is then a silent no-op.
pub struct AudioManager {
    output: Option<(OutputStream, OutputStreamHandle)>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        let output = match OutputStream::try_default() {
            Ok(pair) => Some(pair),
            Err(err) => {
                log::warn!("No audio output device ({err}) - sound disabled");
                None
            }
        };
        Self {
            output,
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

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect, best effort.
    ///
    /// The asset is loaded fresh on every call; a short effect decodes in
    /// well under a tick and the actual playback happens off-thread.
    pub fn play(&self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }

        let Some((_, handle)) = &self.output else {
            return;
        };

        let path = effect.asset_path();
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                log::warn!("Failed to load sound asset {path}: {err}");
                return;
            }
        };

        let source = match Decoder::new(Cursor::new(bytes)) {
            Ok(source) => source,
            Err(err) => {
                log::warn!("Failed to decode sound asset {path}: {err}");
                return;
            }
        };

        let sink = match Sink::try_new(handle) {
            Ok(sink) => sink,
            Err(err) => {
                log::warn!("Failed to open audio sink: {err}");
                return;
            }
        };

        sink.set_volume(vol);
        sink.append(source);
        // Detached sink keeps playing on the audio thread; the caller
        // never waits on it.
        sink.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_paths_are_distinct() {
        assert_ne!(
            SoundEffect::PaddleHit.asset_path(),
            SoundEffect::BrickBreak.asset_path()
        );
    }

    #[test]
    fn play_never_panics_without_assets_or_device() {
        // Whatever the test environment offers (usually: no audio device,
        // no asset files), playback failures must be swallowed.
        let manager = AudioManager::new();
        manager.play(SoundEffect::PaddleHit);
        manager.play(SoundEffect::BrickBreak);
    }

    #[test]
    fn muted_manager_is_silent() {
        let mut manager = AudioManager::new();
        manager.set_muted(true);
        assert_eq!(manager.effective_volume(), 0.0);
        manager.play(SoundEffect::BrickBreak);
    }

    #[test]
    fn volumes_are_clamped() {
        let mut manager = AudioManager::new();
        manager.set_master_volume(2.0);
        manager.set_sfx_volume(-1.0);
        assert_eq!(manager.effective_volume(), 0.0);
        manager.set_sfx_volume(0.5);
        assert_eq!(manager.effective_volume(), 0.5);
    }
}
