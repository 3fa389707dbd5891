use std::path::PathBuf;

/// Result alias that carries the custom [`SpecvisError`] type.
pub type Result<T> = std::result::Result<T, SpecvisError>;

/// Common error type for the core crate.
#[derive(Debug, thiserror::Error)]
pub enum SpecvisError {
    /// The sound file could not be opened or decoded.
    #[error("could not load file: {path}: {reason}")]
    Load { path: PathBuf, reason: String },
    /// Decoding produced no usable audio (no channels or zero sample rate).
    #[error("invalid audio stream: {0}")]
    InvalidAudio(&'static str),
    /// The audio output device could not be opened or driven.
    #[error("audio output: {0}")]
    Output(String),
    /// A caller passed a value outside the accepted domain.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// Free-form message for failures without a dedicated variant.
    #[error("{0}")]
    Message(String),
}

impl SpecvisError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }

    /// Creates a load error for `path` with a displayable cause.
    pub fn load(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Load {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
