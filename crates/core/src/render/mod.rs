//! Drawing model for the visualiser.
//!
//! Everything here is expressed as axis-aligned rectangles in window pixels
//! with a top-left origin. The windowing layer supplies a [`RenderTarget`]
//! that turns them into actual draw calls.

mod bars;
mod progress;

pub use bars::BarField;
pub use progress::{progress_fraction, ProgressIndicator};

use crate::{
    config::{AppConfig, Color},
    Viewport,
};

/// Rectangle with fill and outline, as handed to the graphics backend.
///
/// Sizes may be negative: a negative height extends upwards from `y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectShape {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: Color,
    pub outline: Color,
    pub outline_thickness: f32,
}

impl RectShape {
    pub fn filled(x: f32, y: f32, width: f32, height: f32, fill: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill,
            outline: fill,
            outline_thickness: 0.0,
        }
    }

    /// Returns `(min_x, min_y, max_x, max_y)` with negative sizes folded in.
    pub fn normalized(&self) -> (f32, f32, f32, f32) {
        let (x0, x1) = ordered(self.x, self.x + self.width);
        let (y0, y1) = ordered(self.y, self.y + self.height);
        (x0, y0, x1, y1)
    }
}

fn ordered(a: f32, b: f32) -> (f32, f32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Drawing surface provided by the windowing layer.
pub trait RenderTarget {
    fn clear(&mut self, color: Color);

    fn draw_rect(&mut self, shape: &RectShape);
}

/// Bar field plus progress strip, drawn in that order each frame.
#[derive(Debug)]
pub struct Visualizer {
    background: Color,
    bars: BarField,
    progress: ProgressIndicator,
}

impl Visualizer {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            background: config.window.background,
            bars: BarField::new(config.bars.count, config.bars.color),
            progress: ProgressIndicator::new(config.progress.clone()),
        }
    }

    pub fn bars(&self) -> &BarField {
        &self.bars
    }

    pub fn progress(&self) -> &ProgressIndicator {
        &self.progress
    }

    /// Renders one frame for the given window size and playback position.
    pub fn draw(
        &mut self,
        viewport: &Viewport,
        offset_seconds: f32,
        duration_seconds: f32,
        target: &mut impl RenderTarget,
    ) {
        target.clear(self.background);

        self.bars.invalidate_if_resized(viewport.width, viewport.height);
        self.bars.draw(target);

        self.progress
            .update(offset_seconds, duration_seconds, viewport.width, viewport.height);
        self.progress.draw(target);
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    /// Render target that keeps every draw call for inspection.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingTarget {
        pub(crate) clears: Vec<Color>,
        pub(crate) rects: Vec<RectShape>,
    }

    impl RenderTarget for RecordingTarget {
        fn clear(&mut self, color: Color) {
            self.clears.push(color);
            self.rects.clear();
        }

        fn draw_rect(&mut self, shape: &RectShape) {
            self.rects.push(*shape);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::recording::RecordingTarget;
    use super::*;

    #[test]
    fn normalizes_upward_rectangles() {
        let rect = RectShape::filled(10.0, 600.0, 5.0, -100.0, Color::RED);
        assert_eq!(rect.normalized(), (10.0, 500.0, 15.0, 600.0));
    }

    #[test]
    fn draws_bars_then_progress_on_a_cleared_frame() {
        let config = AppConfig::default();
        let mut visualizer = Visualizer::new(&config);
        let mut target = RecordingTarget::default();

        visualizer.draw(&Viewport::new(800, 600), 5.0, 10.0, &mut target);

        assert_eq!(target.clears, vec![Color::BLACK]);
        assert_eq!(target.rects.len(), config.bars.count + 1);
        let strip = target.rects.last().unwrap();
        assert_eq!(strip.fill, Color::WHITE);
        assert_eq!(strip.width, 400.0);
    }
}
