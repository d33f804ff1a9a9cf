//! Draw-only rectangle prefab.

use cg_core::{DrawLayer, FrameContext, Rect};
use cg_draw::DrawSurface;
use cg_entity::{Drawable, Entity};

use crate::GameBody;

type DrawHook = Box<dyn FnMut(&mut GameBody, &FrameContext) + Send>;

/// A glyph rectangle that only draws: scenery, panels, decorations.
///
/// The optional hook runs right before the rectangle is drawn, so it can
/// animate tiles or position without the cost of a simulation capability.
pub struct DrawableRect {
    body:    GameBody,
    on_draw: Option<DrawHook>,
}

impl DrawableRect {
    pub fn new(rect: Rect, tiles: Vec<char>) -> Self {
        Self {
            body: GameBody {
                rect,
                tiles,
                layer: DrawLayer::default(),
                draws_while_paused: false,
                updates_while_paused: false,
            },
            on_draw: None,
        }
    }

    pub fn with_layer(mut self, layer: DrawLayer) -> Self {
        self.body.layer = layer;
        self
    }

    pub fn with_draws_while_paused(mut self, value: bool) -> Self {
        self.body.draws_while_paused = value;
        self
    }

    /// Hook run each draw, before the rectangle is emitted.
    pub fn on_draw(mut self, f: impl FnMut(&mut GameBody, &FrameContext) + Send + 'static) -> Self {
        self.on_draw = Some(Box::new(f));
        self
    }

    pub fn body(&self) -> &GameBody {
        &self.body
    }
}

impl Entity for DrawableRect {
    fn as_drawable(&mut self) -> Option<&mut dyn Drawable> {
        Some(self)
    }
}

impl Drawable for DrawableRect {
    fn layer(&self) -> DrawLayer {
        self.body.layer
    }

    fn draws_while_paused(&self) -> bool {
        self.body.draws_while_paused
    }

    fn draw(&mut self, ctx: &FrameContext, surface: &mut dyn DrawSurface) {
        if let Some(f) = &mut self.on_draw {
            f(&mut self.body, ctx);
        }
        surface.draw_rect(self.body.rect, &self.body.tiles);
    }
}
