//! `FrameContext` — the per-tick value passed to every callback.

use std::time::Duration;

use crate::control::EngineHandle;
use crate::geom::Rect;

/// Immutable context for one tick, handed by reference to every lifecycle
/// listener and entity callback invoked during that tick.
///
/// Built once at the start of each tick and never mutated afterwards.  The
/// render surface itself is *not* carried here: drawables receive it as a
/// separate `&mut dyn DrawSurface` argument, since a shared context cannot
/// hand out the exclusive access drawing requires.  Read-only surface facts
/// the other stages need (the world border) are copied in instead.
#[derive(Clone, Debug)]
pub struct FrameContext {
    /// Duration of the previous completed tick, pacing sleep included.
    /// Zero on the very first tick.
    pub delta: Duration,

    /// Wall-clock time elapsed since `run()` started.
    pub game_time: Duration,

    /// The world-bounds rectangle reported by the render surface.  Fixed for
    /// the surface's lifetime; used by the border-crossing test and by
    /// entities that steer off the walls.
    pub border: Rect,

    /// Handle back to the engine for querying pause state and statistics or
    /// requesting a stop.
    pub engine: EngineHandle,
}

impl FrameContext {
    #[inline]
    pub fn new(delta: Duration, game_time: Duration, border: Rect, engine: EngineHandle) -> Self {
        Self { delta, game_time, border, engine }
    }
}
