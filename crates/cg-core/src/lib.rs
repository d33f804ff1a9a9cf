//! `cg-core` — foundational types for the `rust_cg` character-grid engine.
//!
//! This crate is a dependency of every other `cg-*` crate.  It intentionally
//! has no `cg-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`geom`]      | `Vec2`, `Rect`, intersection and perimeter tests      |
//! | [`layer`]     | `DrawLayer` enum and fixed render-pass order          |
//! | [`control`]   | `EngineHandle` — shared atomic control/statistics     |
//! | [`frame`]     | `FrameContext` — per-tick immutable callback context  |
//! | [`ring`]      | `RingBuffer<T>` — fixed-capacity overwrite buffer     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to public value types.      |

pub mod control;
pub mod frame;
pub mod geom;
pub mod layer;
pub mod ring;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use control::EngineHandle;
pub use frame::FrameContext;
pub use geom::{Rect, Vec2};
pub use layer::DrawLayer;
pub use ring::RingBuffer;
