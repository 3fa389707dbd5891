mod audio;
mod window;

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use specvis_core::AppConfig;
use tracing_subscriber::EnvFilter;

use crate::audio::RodioBackend;

fn main() -> ExitCode {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return usage_failure(err),
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(?err, "fatal error");
            eprintln!("specvis: error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> specvis_core::Result<()> {
    let config = cli.config();

    tracing::info!(file = ?cli.soundfile, "loading sound");
    let asset = audio::load(&cli.soundfile)?;
    tracing::info!(
        duration = asset.duration_seconds(),
        channels = asset.channels(),
        sample_rate = asset.sample_rate(),
        "sound loaded"
    );

    let backend = RodioBackend::open(asset)?;
    window::run(config, backend)
}

/// Bad invocations exit with status 1; `--help` and `--version` are not
/// failures.
fn usage_failure(err: clap::Error) -> ExitCode {
    let _ = err.print();
    if err.use_stderr() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(
    name = "specvis",
    author,
    version,
    about = "Audio player with a bar visualiser",
    long_about = None
)]
struct Cli {
    /// Sound file to play.
    soundfile: PathBuf,

    /// Number of bars in the visualiser.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    bars: Option<u32>,

    /// Frame-rate cap for the window.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    fps: Option<u32>,
}

impl Cli {
    fn config(&self) -> AppConfig {
        let mut config = AppConfig::default();
        if let Some(bars) = self.bars {
            config = config.with_bar_count(bars as usize);
        }
        if let Some(fps) = self.fps {
            config = config.with_frame_rate(fps);
        }
        config
    }
}
