//! `cg-engine` — the tick loop orchestrator for the rust_cg framework.
//!
//! # The tick
//!
//! ```text
//! while running:
//!   ① Pre-frame  — surface pre_frame hook; build FrameContext; fire
//!                  pre-frame listeners.
//!   ② Snapshot   — copy the registry and filter it into collidable,
//!                  simulatable, and drawable snapshots (insertion order).
//!   ③ Collision  — border perimeter-straddle test + O(n²) pairwise overlap
//!                  over the collidable snapshot; hit callbacks fire
//!                  synchronously.  Never gated by pause.
//!   ④ Simulate   — update() per simulatable, skipping paused entities
//!                  unless they opt in.
//!   ⑤ Render     — draw_start; three layer passes (Background, Foreground,
//!                  Hud) with per-layer brackets; draw_finish.
//!   ⑥ Post-frame — surface post_frame hook; fire post-frame listeners;
//!                  record statistics; sleep toward the target frame rate;
//!                  bump the frame counter.
//! ```
//!
//! Entities registered (or removed) during a tick become visible (or
//! disappear) at the next tick's snapshots — see `cg-entity`'s registry
//! contract.
//!
//! # Threading
//!
//! One dedicated tick thread runs the whole loop; stages never overlap.  The
//! registry and the [`EngineHandle`][cg_core::EngineHandle] are the only
//! cross-thread surfaces: hosts add/remove entities and read statistics (or
//! call `stop()`/`pause()`) from any thread while the loop runs.
//!
//! A callback that never returns stalls the loop; the engine applies no
//! per-callback timeout and no fault isolation — a panicking callback
//! unwinds out of [`Engine::run`].
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cg_draw::GridSurface;
//! use cg_engine::Engine;
//!
//! let mut engine = Engine::new(GridSurface::stdout(80, 24));
//! engine.on_setup(|handle, registry| {
//!     handle.set_target_fps(60);
//!     registry.add(cg_entity::shared(my_entity));
//! });
//! engine.setup()?;
//! engine.run()?;
//! ```

pub mod collision;
pub mod engine;
pub mod error;
pub mod pacer;
pub mod snapshot;


pub use engine::{Engine, FrameListener, LifecycleListener};
pub use error::{EngineError, EngineResult};
pub use snapshot::FrameSnapshots;
