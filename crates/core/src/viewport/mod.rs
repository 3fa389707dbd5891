use crate::config::WindowConfig;

/// Live window size in pixels, shared by input handling and rendering.
///
/// The drawing coordinate system always maps 1:1 onto this size with the
/// origin in the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn from_config(config: &WindowConfig) -> Self {
        Self::new(config.width, config.height)
    }

    /// Records a new window size. Returns `true` when it differs from the
    /// previous one.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        let changed = (self.width, self.height) != (width, height);
        self.width = width;
        self.height = height;
        changed
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_initial_window_size() {
        assert_eq!(Viewport::from_config(&WindowConfig::default()).size(), (800, 600));
    }

    #[test]
    fn resize_reports_changes_only() {
        let mut viewport = Viewport::new(800, 600);
        assert!(!viewport.resize(800, 600));
        assert!(viewport.resize(1000, 400));
        assert_eq!(viewport.size(), (1000, 400));
    }
}
