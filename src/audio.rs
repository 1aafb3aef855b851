//! Sound cue vocabulary and playback seam
//!
//! The simulation emits [`GameEvent`]s; the driver maps them onto cues and
//! hands them to whatever [`AudioSink`] the frontend provides. Playback is
//! fire-and-forget - nothing in the loop waits on audio.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball deflected off a paddle
    PaddleHit,
    /// Ball reflected off the top or bottom wall
    WallBounce,
    /// Fresh serve after a point
    Score,
}

/// Playback seam implemented by frontends
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

impl<T: AudioSink + ?Sized> AudioSink for Box<T> {
    fn play(&mut self, effect: SoundEffect) {
        (**self).play(effect);
    }
}

/// Sink that drops every cue
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Sink that traces cues to the log, used by the headless demo
#[derive(Debug)]
pub struct LogAudio {
    volume: f32,
}

impl LogAudio {
    pub fn new(volume: f32) -> Self {
        Self {
            volume: volume.clamp(0.0, 1.0),
        }
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        log::debug!("audio cue {:?} (volume {:.2})", effect, self.volume);
    }
}

/// Map a gameplay event to its sound cue.
///
/// The serve reset owns the score cue, so a series restart chirps exactly
/// like a scored point. There is no cue for a match win.
pub fn cue_for(event: &GameEvent) -> Option<SoundEffect> {
    match event {
        GameEvent::WallBounce => Some(SoundEffect::WallBounce),
        GameEvent::PaddleHit(_) => Some(SoundEffect::PaddleHit),
        GameEvent::BallReset => Some(SoundEffect::Score),
        GameEvent::PointScored(_) | GameEvent::MatchWon(_) => None,
    }
}
