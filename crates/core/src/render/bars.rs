use rand::{rngs::StdRng, Rng, SeedableRng};

use super::{RectShape, RenderTarget};
use crate::config::Color;

/// Decorative bar field. Heights are random and only change when the window
/// size does.
#[derive(Debug, Clone)]
pub struct BarField {
    count: usize,
    color: Color,
    generated_for: Option<(u32, u32)>,
    bars: Vec<RectShape>,
}

impl BarField {
    pub fn new(count: usize, color: Color) -> Self {
        Self {
            count,
            color,
            generated_for: None,
            bars: Vec::with_capacity(count),
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn bars(&self) -> &[RectShape] {
        &self.bars
    }

    /// Size the current bars were generated for, if any.
    pub fn generated_for(&self) -> Option<(u32, u32)> {
        self.generated_for
    }

    /// Regenerates the bars from a fresh entropy-seeded generator when the
    /// field is empty or was built for a different size. Returns whether a
    /// regeneration happened.
    pub fn invalidate_if_resized(&mut self, width: u32, height: u32) -> bool {
        if self.is_current(width, height) {
            return false;
        }

        let mut rng = StdRng::from_entropy();
        self.regenerate_with(&mut rng, width, height);
        true
    }

    /// Lays out all bars for `width` x `height`, drawing one height per bar
    /// from `rng` in left-to-right order.
    pub fn regenerate_with<R: Rng + ?Sized>(&mut self, rng: &mut R, width: u32, height: u32) {
        tracing::debug!(width, height, count = self.count, "regenerating bar field");

        let bar_width = if self.count == 0 {
            0.0
        } else {
            width as f32 / self.count as f32
        };
        let baseline = height as f32;
        let color = self.color;

        self.bars.clear();
        self.bars.extend((0..self.count).map(|index| {
            let level: f32 = rng.gen();
            RectShape::filled(
                index as f32 * bar_width,
                baseline,
                bar_width,
                -level * baseline,
                color,
            )
        }));
        self.generated_for = Some((width, height));
    }

    pub fn draw(&self, target: &mut impl RenderTarget) {
        for bar in &self.bars {
            target.draw_rect(bar);
        }
    }

    fn is_current(&self, width: u32, height: u32) -> bool {
        !self.bars.is_empty() && self.generated_for == Some((width, height))
    }
}
