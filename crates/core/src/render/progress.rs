use super::{RectShape, RenderTarget};
use crate::config::ProgressConfig;

/// Fraction of the asset already played, clamped to `0..=1`.
///
/// A zero, negative or non-finite duration has no meaningful position and
/// reports no progress.
pub fn progress_fraction(offset_seconds: f32, duration_seconds: f32) -> f32 {
    if !(duration_seconds.is_finite() && duration_seconds > 0.0) || !offset_seconds.is_finite() {
        return 0.0;
    }
    (offset_seconds / duration_seconds).clamp(0.0, 1.0)
}

/// Thin strip along the bottom edge whose width tracks the playing offset.
#[derive(Debug, Clone)]
pub struct ProgressIndicator {
    config: ProgressConfig,
    shape: RectShape,
}

impl ProgressIndicator {
    pub fn new(config: ProgressConfig) -> Self {
        let mut shape = RectShape::filled(0.0, 0.0, 0.0, 0.0, config.fill);
        shape.outline = config.outline;
        shape.outline_thickness = config.outline_thickness;
        Self { config, shape }
    }

    pub fn shape(&self) -> &RectShape {
        &self.shape
    }

    pub fn update(&mut self, offset_seconds: f32, duration_seconds: f32, width: u32, height: u32) {
        let height = height as f32;
        self.shape.x = 0.0;
        self.shape.y = height;
        self.shape.width = progress_fraction(offset_seconds, duration_seconds) * width as f32;
        self.shape.height = -self.config.height_ratio * height;
    }

    pub fn draw(&self, target: &mut impl RenderTarget) {
        target.draw_rect(&self.shape);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Color;
    use approx::assert_relative_eq;

    fn indicator() -> ProgressIndicator {
        ProgressIndicator::new(ProgressConfig::default())
    }

    #[test]
    fn anchors_a_thin_strip_at_the_bottom() {
        let mut progress = indicator();
        progress.update(2.5, 10.0, 800, 600);

        let shape = progress.shape();
        assert_eq!((shape.x, shape.y), (0.0, 600.0));
        assert_relative_eq!(shape.width, 200.0);
        assert_relative_eq!(shape.height, -6.0, epsilon = 1e-5);
        assert_eq!(shape.fill, Color::WHITE);
        assert_eq!(shape.outline, Color::BLACK);
    }

    #[test]
    fn follows_window_resizes() {
        let mut progress = indicator();
        progress.update(10.0, 10.0, 1000, 400);
        assert_relative_eq!(progress.shape().width, 1000.0);
        assert_relative_eq!(progress.shape().height, -4.0, epsilon = 1e-5);
    }

    #[test]
    fn width_grows_monotonically_to_full() {
        let mut progress = indicator();
        let mut last = -1.0;
        for step in 0..=100 {
            let offset = step as f32 * 0.1;
            progress.update(offset, 10.0, 800, 600);
            let width = progress.shape().width;
            assert!(width >= last);
            last = width;
        }
        assert_relative_eq!(last, 800.0);
    }

    #[test]
    fn degenerate_durations_show_no_progress() {
        assert_eq!(progress_fraction(3.0, 0.0), 0.0);
        assert_eq!(progress_fraction(3.0, -1.0), 0.0);
        assert_eq!(progress_fraction(3.0, f32::NAN), 0.0);
        assert_eq!(progress_fraction(f32::NAN, 10.0), 0.0);
    }

    #[test]
    fn offsets_past_the_end_are_capped() {
        assert_eq!(progress_fraction(12.0, 10.0), 1.0);
        assert_eq!(progress_fraction(-1.0, 10.0), 0.0);
    }
}
