//! The general-purpose prefab: a rectangle of glyphs with optional hooks for
//! every capability.

use cg_core::{DrawLayer, FrameContext, Rect};
use cg_draw::DrawSurface;
use cg_entity::{Collidable, Drawable, Entity, SharedEntity, Simulatable};

/// The mutable state every [`GameEntity`] hook receives.
#[derive(Clone, Debug)]
pub struct GameBody {
    pub rect: Rect,
    /// Glyphs filling the rectangle row by row.
    pub tiles: Vec<char>,
    pub layer: DrawLayer,
    pub draws_while_paused: bool,
    pub updates_while_paused: bool,
}

type UpdateHook = Box<dyn FnMut(&mut GameBody, &FrameContext) + Send>;
type BorderHook = Box<dyn FnMut(&mut GameBody) + Send>;
type PeerHook = Box<dyn FnMut(&mut GameBody, &[SharedEntity]) + Send>;

/// A glyph rectangle with all three capabilities, configured by closures.
///
/// Collision participation follows from the hooks: an entity without an
/// [`on_border_hit`][Self::on_border_hit] hook does not test the border, one
/// without [`on_peer_hit`][Self::on_peer_hit] does not test peers.  Hooks run
/// under the entity's own lock; see the crate docs of `cg-entity` for what a
/// hook may and may not lock.
pub struct GameEntity {
    body:          GameBody,
    on_update:     Option<UpdateHook>,
    on_border_hit: Option<BorderHook>,
    on_peer_hit:   Option<PeerHook>,
}

impl GameEntity {
    /// A foreground entity at `rect`, filled with `tiles`, no hooks.
    pub fn new(rect: Rect, tiles: Vec<char>) -> Self {
        Self {
            body: GameBody {
                rect,
                tiles,
                layer: DrawLayer::default(),
                draws_while_paused: false,
                updates_while_paused: false,
            },
            on_update: None,
            on_border_hit: None,
            on_peer_hit: None,
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

    pub fn with_updates_while_paused(mut self, value: bool) -> Self {
        self.body.updates_while_paused = value;
        self
    }

    /// Hook run every simulation step.
    pub fn on_update(mut self, f: impl FnMut(&mut GameBody, &FrameContext) + Send + 'static) -> Self {
        self.on_update = Some(Box::new(f));
        self
    }

    /// Hook run when the entity straddles the border.  Registering it opts
    /// the entity into border testing.
    pub fn on_border_hit(mut self, f: impl FnMut(&mut GameBody) + Send + 'static) -> Self {
        self.on_border_hit = Some(Box::new(f));
        self
    }

    /// Hook run with the entities overlapping this one.  Registering it opts
    /// the entity into peer testing.
    pub fn on_peer_hit(
        mut self,
        f: impl FnMut(&mut GameBody, &[SharedEntity]) + Send + 'static,
    ) -> Self {
        self.on_peer_hit = Some(Box::new(f));
        self
    }

    pub fn body(&self) -> &GameBody {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut GameBody {
        &mut self.body
    }
}

impl Entity for GameEntity {
    fn as_collidable(&mut self) -> Option<&mut dyn Collidable> {
        Some(self)
    }

    fn as_simulatable(&mut self) -> Option<&mut dyn Simulatable> {
        Some(self)
    }

    fn as_drawable(&mut self) -> Option<&mut dyn Drawable> {
        Some(self)
    }
}

impl Collidable for GameEntity {
    fn bounds(&self) -> Rect {
        self.body.rect
    }

    fn tests_border(&self) -> bool {
        self.on_border_hit.is_some()
    }

    fn tests_peers(&self) -> bool {
        self.on_peer_hit.is_some()
    }

    fn on_border_hit(&mut self) {
        if let Some(f) = &mut self.on_border_hit {
            f(&mut self.body);
        }
    }

    fn on_peer_hit(&mut self, hits: &[SharedEntity]) {
        if let Some(f) = &mut self.on_peer_hit {
            f(&mut self.body, hits);
        }
    }
}

impl Simulatable for GameEntity {
    fn updates_while_paused(&self) -> bool {
        self.body.updates_while_paused
    }

    fn update(&mut self, ctx: &FrameContext) {
        if let Some(f) = &mut self.on_update {
            f(&mut self.body, ctx);
        }
    }
}

impl Drawable for GameEntity {
    fn layer(&self) -> DrawLayer {
        self.body.layer
    }

    fn draws_while_paused(&self) -> bool {
        self.body.draws_while_paused
    }

    fn draw(&mut self, _ctx: &FrameContext, surface: &mut dyn DrawSurface) {
        surface.draw_rect(self.body.rect, &self.body.tiles);
    }
}
