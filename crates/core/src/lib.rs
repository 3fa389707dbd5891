//! Core library for the Specvis audio player.
//!
//! The crate holds everything that does not need a sound card or a window:
//! the playback session and its engine seam, key bindings, the live viewport
//! and the bar/progress drawing model. The application crate plugs a real
//! audio engine and a real window into the [`AudioBackend`] and
//! [`RenderTarget`] traits.

pub mod audio;
pub mod config;
pub mod error;
pub mod input;
pub mod playback;
pub mod player;
pub mod render;
pub mod viewport;

pub use audio::{AudioAsset, AudioBackend, PlaybackStatus};
pub use config::{AppConfig, BarConfig, Color, ControlConfig, ProgressConfig, WindowConfig};
pub use error::{Result, SpecvisError};
pub use input::{InputEvent, Intent, Key, KeyBindings};
pub use playback::PlaybackSession;
pub use player::{LoopControl, Player};
pub use render::{progress_fraction, BarField, ProgressIndicator, RectShape, RenderTarget, Visualizer};
pub use viewport::Viewport;
