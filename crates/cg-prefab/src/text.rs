//! HUD text prefab.

use cg_core::{DrawLayer, FrameContext, Vec2};
use cg_draw::DrawSurface;
use cg_entity::{Drawable, Entity};

/// The mutable state a [`UiText`] hook receives: position in cells and the
/// text itself.
#[derive(Clone, Debug)]
pub struct TextLine {
    pub pos:  Vec2,
    pub text: String,
}

type TextHook = Box<dyn FnMut(&mut TextLine, &FrameContext) + Send>;

/// One line of text on the HUD layer.
///
/// The optional hook runs during the draw, just before the line is emitted,
/// which is late enough to show this very frame's statistics (an FPS
/// read-out sees the numbers of the frame being drawn, not the previous
/// one).  Position is truncated to whole cells at draw time.
pub struct UiText {
    line:               TextLine,
    draws_while_paused: bool,
    on_draw:            Option<TextHook>,
}

impl UiText {
    pub fn new(pos: Vec2, text: impl Into<String>) -> Self {
        Self {
            line: TextLine { pos, text: text.into() },
            draws_while_paused: false,
            on_draw: None,
        }
    }

    pub fn with_draws_while_paused(mut self, value: bool) -> Self {
        self.draws_while_paused = value;
        self
    }

    /// Hook run each draw, before the line is emitted.
    pub fn on_draw(mut self, f: impl FnMut(&mut TextLine, &FrameContext) + Send + 'static) -> Self {
        self.on_draw = Some(Box::new(f));
        self
    }

    pub fn line(&self) -> &TextLine {
        &self.line
    }
}

impl Entity for UiText {
    fn as_drawable(&mut self) -> Option<&mut dyn Drawable> {
        Some(self)
    }
}

impl Drawable for UiText {
    fn layer(&self) -> DrawLayer {
        DrawLayer::Hud
    }

    fn draws_while_paused(&self) -> bool {
        self.draws_while_paused
    }

    fn draw(&mut self, ctx: &FrameContext, surface: &mut dyn DrawSurface) {
        if let Some(f) = &mut self.on_draw {
            f(&mut self.line, ctx);
        }
        surface.draw_line(self.line.pos.x as i32, self.line.pos.y as i32, &self.line.text);
    }
}
