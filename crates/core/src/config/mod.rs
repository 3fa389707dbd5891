use serde::{Deserialize, Serialize};

/// Top-level configuration structure for the application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub bars: BarConfig,
    pub progress: ProgressConfig,
    pub controls: ControlConfig,
}

impl AppConfig {
    /// Overrides the bar count, ignoring zero.
    pub fn with_bar_count(mut self, count: usize) -> Self {
        if count > 0 {
            self.bars.count = count;
        }
        self
    }

    /// Overrides the frame-rate cap, ignoring zero.
    pub fn with_frame_rate(mut self, fps: u32) -> Self {
        if fps > 0 {
            self.window.frame_rate = fps;
        }
        self
    }
}

/// Initial window geometry and presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub frame_rate: u32,
    pub background: Color,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Specvis - audio spectrum visualiser".to_string(),
            frame_rate: 60,
            background: Color::BLACK,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarConfig {
    pub count: usize,
    pub color: Color,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            count: 300,
            color: Color::RED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressConfig {
    /// Strip height as a fraction of the window height.
    pub height_ratio: f32,
    pub fill: Color,
    pub outline: Color,
    pub outline_thickness: f32,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            height_ratio: 0.01,
            fill: Color::WHITE,
            outline: Color::BLACK,
            outline_thickness: 0.0,
        }
    }
}

/// Step sizes used by the keyboard bindings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlConfig {
    /// Volume change per key press, in percent.
    pub volume_step: f32,
    pub seek_step_seconds: f32,
    /// Volume at startup, in percent.
    pub initial_volume: f32,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            volume_step: 0.05,
            seek_step_seconds: 1.0,
            initial_volume: 100.0,
        }
    }
}

/// 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_player() {
        let config = AppConfig::default();
        assert_eq!((config.window.width, config.window.height), (800, 600));
        assert_eq!(config.window.frame_rate, 60);
        assert_eq!(config.bars.count, 300);
        assert_eq!(config.controls.volume_step, 0.05);
        assert_eq!(config.controls.seek_step_seconds, 1.0);
    }

    #[test]
    fn zero_overrides_are_ignored() {
        let config = AppConfig::default().with_bar_count(0).with_frame_rate(0);
        assert_eq!(config.bars.count, 300);
        assert_eq!(config.window.frame_rate, 60);

        let config = AppConfig::default().with_bar_count(64).with_frame_rate(30);
        assert_eq!(config.bars.count, 64);
        assert_eq!(config.window.frame_rate, 30);
    }
}
