//! Keyboard and window events, and the intents they translate into.

use serde::{Deserialize, Serialize};

use crate::config::ControlConfig;

/// Keys the player reacts to. Anything else arrives as [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Escape,
    Space,
    Up,
    Down,
    Left,
    Right,
    H,
    J,
    K,
    L,
    /// Number row digit, `0..=9`.
    Digit(u8),
    Other,
}

/// Window-system event, reduced to what the player cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Closed,
    KeyPressed { key: Key },
    Resized { width: u32, height: u32 },
    Other,
}

/// State change requested by an input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    Quit,
    /// Volume delta in percent.
    AdjustVolume(f32),
    /// Relative seek in seconds.
    Seek(f32),
    /// Absolute seek to `n / 10` of the asset.
    SeekFraction(u8),
    TogglePlay,
    Resize { width: u32, height: u32 },
}

/// Maps events to intents using the configured step sizes.
#[derive(Debug, Clone, Default)]
pub struct KeyBindings {
    controls: ControlConfig,
}

impl KeyBindings {
    pub fn new(controls: ControlConfig) -> Self {
        Self { controls }
    }

    /// Intents produced by a single event. Unbound events produce none.
    pub fn intents(&self, event: &InputEvent) -> Vec<Intent> {
        let intent = match *event {
            InputEvent::Closed => Some(Intent::Quit),
            InputEvent::KeyPressed { key } => self.key_intent(key),
            InputEvent::Resized { width, height } => Some(Intent::Resize { width, height }),
            InputEvent::Other => None,
        };
        intent.into_iter().collect()
    }

    fn key_intent(&self, key: Key) -> Option<Intent> {
        let volume = self.controls.volume_step;
        let seek = self.controls.seek_step_seconds;

        match key {
            Key::Escape => Some(Intent::Quit),
            Key::Up | Key::K => Some(Intent::AdjustVolume(volume)),
            Key::Down | Key::J => Some(Intent::AdjustVolume(-volume)),
            Key::Left | Key::H => Some(Intent::Seek(-seek)),
            Key::Right | Key::L => Some(Intent::Seek(seek)),
            Key::Digit(digit) if digit <= 9 => Some(Intent::SeekFraction(digit)),
            Key::Space => Some(Intent::TogglePlay),
            Key::Digit(_) | Key::Other => None,
        }
    }
}
