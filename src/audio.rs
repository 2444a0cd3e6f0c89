//! Sound effect playback
//!
//! Clips are decoded once at startup and replayed from memory.

use std::io::Cursor;

use anyhow::{Context, Result};
use rodio::source::Buffered;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Source};

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// A projectile left a ship
    Fire,
    /// A projectile struck a ship
    Hit,
}

impl From<GameEvent> for SoundEffect {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::ProjectileFired(_) => SoundEffect::Fire,
            GameEvent::ShipHit(_) => SoundEffect::Hit,
        }
    }
}

/// A decoded clip that can be played any number of times
#[derive(Clone)]
pub struct SoundClip {
    source: Buffered<Decoder<Cursor<Vec<u8>>>>,
}

impl SoundClip {
    /// Decode an encoded clip (WAV, Ogg Vorbis, FLAC or MP3)
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let decoder = Decoder::new(Cursor::new(bytes)).context("unsupported or corrupt audio data")?;
        Ok(Self {
            source: decoder.buffered(),
        })
    }

    pub fn channels(&self) -> u16 {
        self.source.channels()
    }

    pub fn sample_rate(&self) -> u32 {
        self.source.sample_rate()
    }
}

/// Audio manager for the game
pub struct AudioManager {
    // Must outlive `handle`
    _stream: OutputStream,
    handle: OutputStreamHandle,
    fire: SoundClip,
    hit: SoundClip,
    volume: f32,
}

impl AudioManager {
    /// Open the default output device
    pub fn new(fire: SoundClip, hit: SoundClip) -> Result<Self> {
        let (stream, handle) =
            OutputStream::try_default().context("no audio output device available")?;
        log::info!("Audio output ready");
        Ok(Self {
            _stream: stream,
            handle,
            fire,
            hit,
            volume: 0.8,
        })
    }

    /// Play a sound effect without waiting for it to finish
    pub fn play(&self, effect: SoundEffect) {
        let clip = match effect {
            SoundEffect::Fire => &self.fire,
            SoundEffect::Hit => &self.hit,
        };
        let source = clip.source.clone().amplify(self.volume).convert_samples::<f32>();
        if let Err(e) = self.handle.play_raw(source) {
            log::warn!("Failed to play {:?}: {}", effect, e);
        }
    }
}
