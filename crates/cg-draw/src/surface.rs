//! The `DrawSurface` trait — the render-surface collaborator contract.

use cg_core::{DrawLayer, FrameContext, Rect};

use crate::SurfaceResult;

/// The output surface the engine renders to.
///
/// Implementations own an output buffer/device; the engine owns the call
/// order.  Most hooks have no required semantics beyond "called once, in
/// order" and default to no-ops, so a minimal surface only implements
/// [`game_border`][Self::game_border] and the two write primitives.
///
/// # Clipping
///
/// `draw_line` and `draw_rect` must clip out-of-bounds writes silently —
/// entities routinely move partially (or fully) off the surface and drawing
/// must never fail because of it.
pub trait DrawSurface: Send {
    /// One-time initialization, called by `Engine::setup()` before the loop
    /// starts.  Failure is fatal and propagates out of setup unchanged.
    fn setup(&mut self) -> SurfaceResult<()> {
        Ok(())
    }

    /// Called once at the very start of each tick, before any stage runs.
    fn pre_frame(&mut self) {}

    /// Called once at the end of each tick, after the render stage.
    fn post_frame(&mut self) {}

    /// The world-bounds rectangle.  Fixed for the surface's lifetime; the
    /// collision stage tests entity rectangles against its perimeter.
    fn game_border(&self) -> Rect;

    /// Bracket the start of a full render pass.
    fn draw_start(&mut self, _ctx: &FrameContext) {}

    /// Bracket the end of a full render pass.
    fn draw_finish(&mut self, _ctx: &FrameContext) {}

    /// Bracket the start of one layer's pass.  Called for every layer every
    /// tick, even when no entity draws on it.
    fn layer_start(&mut self, _ctx: &FrameContext, _layer: DrawLayer) {}

    /// Bracket the end of one layer's pass.
    fn layer_end(&mut self, _ctx: &FrameContext, _layer: DrawLayer) {}

    /// Write a row of glyphs starting at cell `(left, top)`, clipping
    /// silently on all four sides.
    fn draw_line(&mut self, left: i32, top: i32, text: &str);

    /// Write a glyph block into the rectangle: `glyphs` is split into rows of
    /// `rect.w` cells, top to bottom, each row clipped like `draw_line`.
    fn draw_rect(&mut self, rect: Rect, glyphs: &[char]);

    /// Fill `rect` with a single glyph.
    fn fill(&mut self, rect: Rect, glyph: char) {
        let cells = (rect.w.max(0.0) as usize) * (rect.h.max(0.0) as usize);
        if cells == 0 {
            return;
        }
        self.draw_rect(rect, &vec![glyph; cells]);
    }
}
