//! A surface that discards everything.

use cg_core::Rect;

use crate::surface::DrawSurface;

/// A [`DrawSurface`] with no output device.  Use for headless runs and tests
/// that only exercise the loop, not the rendering.
///
/// The border is still meaningful — collision detection tests against it —
/// so it is configurable.
pub struct NullSurface {
    border: Rect,
}

impl NullSurface {
    pub fn new(border: Rect) -> Self {
        Self { border }
    }
}

impl Default for NullSurface {
    /// An 80×25 border, the classic text-mode screen.
    fn default() -> Self {
        Self::new(Rect::new(0.0, 0.0, 80.0, 25.0))
    }
}

impl DrawSurface for NullSurface {
    fn game_border(&self) -> Rect {
        self.border
    }

    fn draw_line(&mut self, _left: i32, _top: i32, _text: &str) {}

    fn draw_rect(&mut self, _rect: Rect, _glyphs: &[char]) {}
}
