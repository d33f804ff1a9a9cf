//! `cg-draw` — the render-surface contract and character-grid backends.
//!
//! The engine core never draws pixels or characters itself; it drives a
//! [`DrawSurface`] collaborator through a fixed per-tick protocol:
//!
//! ```text
//! setup()                          once, before the loop (may fail fatally)
//! per tick:
//!   pre_frame()
//!   draw_start(ctx)
//!     layer_start(ctx, Background) … entity draws … layer_end(ctx, Background)
//!     layer_start(ctx, Foreground) … entity draws … layer_end(ctx, Foreground)
//!     layer_start(ctx, Hud)        … entity draws … layer_end(ctx, Hud)
//!   draw_finish(ctx)
//!   post_frame()
//! ```
//!
//! Two backends ship here: [`GridSurface`] (in-memory char grid presented as
//! ANSI text to any writer) and [`NullSurface`] (discards everything; for
//! headless runs and tests).

pub mod error;
pub mod grid;
pub mod null;
pub mod surface;


pub use error::{SurfaceError, SurfaceResult};
pub use grid::GridSurface;
pub use null::NullSurface;
pub use surface::DrawSurface;
