use std::time::Duration;

use super::{AudioBackend, PlaybackStatus};
use crate::Result;

/// Audio engine double driven by an explicit clock instead of a mixer thread.
#[derive(Debug, Clone)]
pub(crate) struct ManualBackend {
    duration: Duration,
    position: Duration,
    status: PlaybackStatus,
    gain: f32,
}

impl ManualBackend {
    pub(crate) fn new(duration_seconds: f32) -> Self {
        Self {
            duration: Duration::from_secs_f32(duration_seconds),
            position: Duration::ZERO,
            status: PlaybackStatus::Stopped,
            gain: 1.0,
        }
    }

    /// Lets `seconds` of wall time pass. Reaching the end stops playback and
    /// rewinds, like a real engine.
    pub(crate) fn advance(&mut self, seconds: f32) {
        if self.status != PlaybackStatus::Playing {
            return;
        }

        self.position += Duration::from_secs_f32(seconds);
        if self.position >= self.duration {
            self.position = Duration::ZERO;
            self.status = PlaybackStatus::Stopped;
        }
    }
}

impl AudioBackend for ManualBackend {
    fn play(&mut self) {
        self.status = PlaybackStatus::Playing;
    }

    fn pause(&mut self) {
        if self.status == PlaybackStatus::Playing {
            self.status = PlaybackStatus::Paused;
        }
    }

    fn status(&self) -> PlaybackStatus {
        self.status
    }

    fn volume(&self) -> f32 {
        self.gain
    }

    fn set_volume(&mut self, gain: f32) {
        self.gain = gain;
    }

    fn offset(&self) -> Duration {
        self.position
    }

    fn set_offset(&mut self, offset: Duration) -> Result<()> {
        if self.status == PlaybackStatus::Stopped {
            return Ok(());
        }
        self.position = offset.min(self.duration);
        Ok(())
    }

    fn duration(&self) -> Duration {
        self.duration
    }
}
