use std::time::Duration;

use crate::{AudioBackend, PlaybackStatus, Result, SpecvisError};

/// Volume is tracked in hundredths of a percent so that repeated key steps
/// add and subtract exactly.
const VOLUME_UNITS_PER_PERCENT: f32 = 100.0;
/// Upper end of the engine's nominal volume range, in percent.
pub const MAX_VOLUME: f32 = 100.0;

/// One loaded sound and the controls applied to it.
///
/// The session owns the audio backend. Every state change goes through here so
/// the rest of the player never talks to the engine directly.
#[derive(Debug)]
pub struct PlaybackSession<B> {
    backend: B,
    volume_units: i64,
}

impl<B: AudioBackend> PlaybackSession<B> {
    /// Binds a session to `backend` without starting playback.
    pub fn new(backend: B, initial_volume: f32) -> Self {
        let mut session = Self {
            backend,
            volume_units: 0,
        };
        session.set_volume(initial_volume);
        session
    }

    /// Binds a session to `backend` and starts playing immediately.
    pub fn start(backend: B, initial_volume: f32) -> Self {
        let mut session = Self::new(backend, initial_volume);
        session.play();
        session
    }

    pub fn status(&self) -> PlaybackStatus {
        self.backend.status()
    }

    /// Starts or resumes playback. Does nothing while already playing.
    pub fn play(&mut self) {
        if self.status() == PlaybackStatus::Playing {
            return;
        }
        tracing::debug!(from = ?self.status(), "play");
        self.backend.play();
    }

    /// Pauses playback. Only meaningful while playing.
    pub fn pause(&mut self) {
        if self.status() != PlaybackStatus::Playing {
            return;
        }
        tracing::debug!("pause");
        self.backend.pause();
    }

    /// Pauses when playing, plays otherwise. Returns the resulting status.
    pub fn toggle(&mut self) -> PlaybackStatus {
        match self.status() {
            PlaybackStatus::Stopped | PlaybackStatus::Paused => self.play(),
            PlaybackStatus::Playing => self.pause(),
        }
        self.status()
    }

    /// Commanded volume in percent. May sit outside `0..=100`; only the gain
    /// handed to the engine is clamped.
    pub fn volume(&self) -> f32 {
        self.volume_units as f32 / VOLUME_UNITS_PER_PERCENT
    }

    pub fn set_volume(&mut self, percent: f32) {
        self.volume_units = to_units(percent);
        self.apply_volume();
    }

    /// Adds `delta` percent to the commanded volume.
    pub fn adjust_volume(&mut self, delta: f32) {
        self.volume_units = self.volume_units.saturating_add(to_units(delta));
        tracing::debug!(volume = self.volume(), "volume changed");
        self.apply_volume();
    }

    pub fn offset(&self) -> Duration {
        self.backend.offset()
    }

    pub fn offset_seconds(&self) -> f32 {
        self.offset().as_secs_f32()
    }

    pub fn duration(&self) -> Duration {
        self.backend.duration()
    }

    pub fn duration_seconds(&self) -> f32 {
        self.duration().as_secs_f32()
    }

    /// Moves the playing offset by `delta_seconds`. Targets before the start
    /// land on zero; the backend clamps targets past the end.
    pub fn seek_relative(&mut self, delta_seconds: f32) -> Result<()> {
        if !delta_seconds.is_finite() {
            return Err(SpecvisError::InvalidInput("seek delta must be finite"));
        }
        let target = (self.offset_seconds() + delta_seconds).max(0.0);
        self.seek_to(target)
    }

    /// Jumps to `tenth / 10` of the way through the asset.
    pub fn seek_to_fraction(&mut self, tenth: u8) -> Result<()> {
        if tenth > 9 {
            return Err(SpecvisError::InvalidInput("seek fraction must be within 0..=9"));
        }
        let target = self.duration_seconds() * (f32::from(tenth) / 10.0);
        self.seek_to(target)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    fn seek_to(&mut self, seconds: f32) -> Result<()> {
        tracing::debug!(seconds, "seek");
        let target = Duration::try_from_secs_f32(seconds)
            .map_err(|_| SpecvisError::InvalidInput("seek target is out of range"))?;
        self.backend.set_offset(target)
    }

    fn apply_volume(&mut self) {
        let gain = self.volume().clamp(0.0, MAX_VOLUME) / MAX_VOLUME;
        self.backend.set_volume(gain);
    }
}

fn to_units(percent: f32) -> i64 {
    (percent * VOLUME_UNITS_PER_PERCENT).round() as i64
}
