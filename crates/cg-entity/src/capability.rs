//! The `Entity` trait and its three optional capabilities.

use std::sync::Arc;

use cg_core::{DrawLayer, FrameContext, Rect};
use cg_draw::DrawSurface;
use parking_lot::Mutex;

/// A registered entity: `Arc` for identity and sharing, `Mutex` so callbacks
/// get `&mut self` while the registry and host hold their own handles.
///
/// Registry identity is `Arc::ptr_eq` — two handles are the same entity iff
/// they point at the same allocation.
pub type SharedEntity = Arc<Mutex<dyn Entity>>;

/// Wrap a concrete entity into a [`SharedEntity`] handle.
pub fn shared<E: Entity>(entity: E) -> SharedEntity {
    Arc::new(Mutex::new(entity))
}

/// Base trait every registered object implements.
///
/// The `as_*` methods are capability queries: return `Some(self)` for each
/// capability the entity supports, `None` (the default) otherwise.  The
/// answers must not change over the entity's lifetime.
pub trait Entity: Send + 'static {
    fn as_collidable(&mut self) -> Option<&mut dyn Collidable> {
        None
    }

    fn as_simulatable(&mut self) -> Option<&mut dyn Simulatable> {
        None
    }

    fn as_drawable(&mut self) -> Option<&mut dyn Drawable> {
        None
    }
}

/// Participates in the collision stage.
///
/// Collision detection is *not* gated by pause — border and peer tests run
/// every tick.  Callbacks run synchronously on the tick thread and may
/// mutate entity state (bounds included); those mutations are visible to
/// later collision pairs and to the simulation/render stages of the same
/// tick.  Registry add/remove from inside a callback is allowed and becomes
/// visible next tick.
pub trait Collidable {
    /// Current axis-aligned bounding rectangle.
    fn bounds(&self) -> Rect;

    /// Test this entity against the world border's perimeter?
    fn tests_border(&self) -> bool {
        false
    }

    /// Test this entity against every other collidable?
    fn tests_peers(&self) -> bool {
        false
    }

    /// The bounds straddled at least one edge of the world border this tick.
    /// Invoked at most once per tick regardless of how many edges are
    /// straddled.
    fn on_border_hit(&mut self) {}

    /// The bounds intersect `hits` (every other collidable overlapping this
    /// one, self excluded).  Invoked once per tick with the full list, only
    /// when it is non-empty.
    fn on_peer_hit(&mut self, _hits: &[SharedEntity]) {}
}

/// Participates in the simulation stage.
pub trait Simulatable {
    /// Keep receiving [`update`][Self::update] while the engine is paused?
    fn updates_while_paused(&self) -> bool {
        false
    }

    /// Advance this entity by one tick.  Runs after collision detection, so
    /// same-tick hit reactions are already applied.
    fn update(&mut self, ctx: &FrameContext);
}

/// Participates in the render stage.
pub trait Drawable {
    /// The layer this entity renders on.  Read at draw time, once per layer
    /// pass.
    fn layer(&self) -> DrawLayer {
        DrawLayer::Foreground
    }

    /// Keep drawing while the engine is paused?
    fn draws_while_paused(&self) -> bool {
        false
    }

    /// Draw this entity.  Write only to `surface`; by convention this must
    /// not mutate engine state or other entities.
    fn draw(&mut self, ctx: &FrameContext, surface: &mut dyn DrawSurface);
}
