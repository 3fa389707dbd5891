use std::{fmt, sync::Arc, time::Duration};

use crate::{Result, SpecvisError};

#[cfg(test)]
pub(crate) mod manual;

/// Playback state reported by the audio engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    Stopped,
    Paused,
    Playing,
}

/// Fully decoded, immutable sample buffer.
///
/// Samples are interleaved `f32` frames. Cloning is cheap: the buffer is
/// shared, so the playback backend can hand copies to the mixer without
/// touching the original.
#[derive(Clone)]
pub struct AudioAsset {
    samples: Arc<[f32]>,
    channels: u16,
    sample_rate: u32,
}

impl AudioAsset {
    /// Wraps decoded interleaved samples.
    ///
    /// An empty buffer is accepted and yields a zero-length asset; a zero
    /// channel count or sample rate is rejected since neither can describe a
    /// playable stream.
    pub fn from_interleaved(samples: Vec<f32>, channels: u16, sample_rate: u32) -> Result<Self> {
        if channels == 0 {
            return Err(SpecvisError::InvalidAudio("stream reports zero channels"));
        }
        if sample_rate == 0 {
            return Err(SpecvisError::InvalidAudio("stream reports a zero sample rate"));
        }

        Ok(Self {
            samples: samples.into(),
            channels,
            sample_rate,
        })
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of complete frames (one sample per channel).
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.frames() as f64 / self.sample_rate as f64)
    }

    pub fn duration_seconds(&self) -> f32 {
        self.duration().as_secs_f32()
    }
}

impl fmt::Debug for AudioAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioAsset")
            .field("channels", &self.channels)
            .field("sample_rate", &self.sample_rate)
            .field("frames", &self.frames())
            .finish()
    }
}

/// Commands the player issues to the audio engine.
///
/// Implementations own one playable instance of an [`AudioAsset`]. All calls
/// are non-blocking from the caller's point of view; mixing happens on the
/// engine's own thread.
pub trait AudioBackend {
    /// Starts playback from the top, or resumes after a pause.
    fn play(&mut self);

    fn pause(&mut self);

    fn status(&self) -> PlaybackStatus;

    /// Linear gain where `1.0` is the nominal level.
    fn volume(&self) -> f32;

    fn set_volume(&mut self, gain: f32);

    /// Current playing offset; zero while stopped.
    fn offset(&self) -> Duration;

    /// Moves the playing offset. Targets past the end of the asset are
    /// clamped to its duration. Has no effect on a stopped sound, which
    /// always starts again from the top.
    fn set_offset(&mut self, offset: Duration) -> Result<()>;

    fn duration(&self) -> Duration;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn duration_counts_frames_not_samples() {
        let asset = AudioAsset::from_interleaved(vec![0.0; 2 * 44_100], 2, 44_100).unwrap();
        assert_eq!(asset.frames(), 44_100);
        assert_relative_eq!(asset.duration_seconds(), 1.0);
    }

    #[test]
    fn empty_assets_have_zero_duration() {
        let asset = AudioAsset::from_interleaved(Vec::new(), 1, 8_000).unwrap();
        assert_eq!(asset.duration(), Duration::ZERO);
    }

    #[test]
    fn rejects_degenerate_stream_parameters() {
        assert!(matches!(
            AudioAsset::from_interleaved(vec![0.0; 4], 0, 48_000),
            Err(SpecvisError::InvalidAudio(_))
        ));
        assert!(matches!(
            AudioAsset::from_interleaved(vec![0.0; 4], 2, 0),
            Err(SpecvisError::InvalidAudio(_))
        ));
    }
}
