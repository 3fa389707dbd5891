//! rodio-backed implementation of the playback engine.

use std::{fs::File, io::BufReader, path::Path, time::Duration};

use rodio::{buffer::SamplesBuffer, Decoder, OutputStream, OutputStreamBuilder, Sink, Source};
use specvis_core::{AudioAsset, AudioBackend, PlaybackStatus, Result, SpecvisError};

/// Decodes the whole file at `path` into memory.
pub fn load(path: &Path) -> Result<AudioAsset> {
    let file = File::open(path).map_err(|err| SpecvisError::load(path, err))?;
    let decoder = Decoder::new(BufReader::new(file)).map_err(|err| SpecvisError::load(path, err))?;

    let channels = decoder.channels();
    let sample_rate = decoder.sample_rate();
    let samples: Vec<f32> = decoder.collect();

    AudioAsset::from_interleaved(samples, channels, sample_rate)
        .map_err(|err| SpecvisError::load(path, err))
}

/// Plays one [`AudioAsset`] through a rodio [`Sink`].
///
/// The sink is empty while stopped. Starting playback appends a fresh copy of
/// the asset from the top; seeking a stopped sound has no effect.
pub struct RodioBackend {
    asset: AudioAsset,
    sink: Sink,
    _stream: Option<OutputStream>,
}

impl RodioBackend {
    /// Connects to the default output device.
    pub fn open(asset: AudioAsset) -> Result<Self> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|err| SpecvisError::Output(err.to_string()))?;
        stream.log_on_drop(false);

        let sink = Sink::connect_new(stream.mixer());
        let mut backend = Self::with_sink(asset, sink);
        backend._stream = Some(stream);
        Ok(backend)
    }

    /// Drives `sink`, whose output is pulled by whoever created it.
    pub fn with_sink(asset: AudioAsset, sink: Sink) -> Self {
        sink.pause();
        Self {
            asset,
            sink,
            _stream: None,
        }
    }

    fn source(&self) -> SamplesBuffer {
        SamplesBuffer::new(
            self.asset.channels(),
            self.asset.sample_rate(),
            self.asset.samples().to_vec(),
        )
    }
}

impl AudioBackend for RodioBackend {
    fn play(&mut self) {
        if self.sink.empty() {
            self.sink.append(self.source());
        }
        self.sink.play();
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn status(&self) -> PlaybackStatus {
        if self.sink.empty() {
            PlaybackStatus::Stopped
        } else if self.sink.is_paused() {
            PlaybackStatus::Paused
        } else {
            PlaybackStatus::Playing
        }
    }

    fn volume(&self) -> f32 {
        self.sink.volume()
    }

    fn set_volume(&mut self, gain: f32) {
        self.sink.set_volume(gain);
    }

    fn offset(&self) -> Duration {
        if self.sink.empty() {
            Duration::ZERO
        } else {
            self.sink.get_pos()
        }
    }

    fn set_offset(&mut self, offset: Duration) -> Result<()> {
        if self.sink.empty() {
            tracing::debug!(?offset, "ignoring seek on a stopped sound");
            return Ok(());
        }

        self.sink
            .try_seek(offset.min(self.asset.duration()))
            .map_err(|err| SpecvisError::Output(err.to_string()))
    }

    fn duration(&self) -> Duration {
        self.asset.duration()
    }
}
