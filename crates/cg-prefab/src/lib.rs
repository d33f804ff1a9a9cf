//! Ready-made entities, driven by closures instead of new trait impls.
//!
//! | Prefab           | Capabilities                        | Typical use          |
//! |------------------|-------------------------------------|----------------------|
//! | [`GameEntity`]   | collidable + simulatable + drawable | moving game objects  |
//! | [`DrawableRect`] | drawable                            | static scenery       |
//! | [`UiText`]       | drawable (HUD)                      | status lines, labels |
//!
//! Each prefab owns its mutable state in a plain struct ([`GameBody`],
//! [`TextLine`]) that the hooks receive alongside the frame context, so a
//! closure can move, resize, or retile the entity without any trait
//! boilerplate.  Per-entity state beyond that (a velocity, a timer) lives in
//! the closure's captures.
//!
//! ```no_run
//! use cg_core::{Rect, Vec2};
//! use cg_prefab::GameEntity;
//! use cg_entity::shared;
//!
//! let velocity = Vec2::new(3.0, 1.5);
//! let block = GameEntity::new(Rect::new(10.0, 5.0, 2.0, 2.0), vec!['#'; 4])
//!     .on_update(move |body, ctx| {
//!         body.rect = body.rect.translated(velocity.over(ctx.delta));
//!     })
//!     .on_border_hit(|body| {
//!         body.rect = body.rect.at(Vec2::new(10.0, 5.0));
//!     });
//! let handle = shared(block);
//! ```

mod entity;
mod rect;
mod text;

#[cfg(test)]
mod tests;

pub use entity::{GameBody, GameEntity};
pub use rect::DrawableRect;
pub use text::{TextLine, UiText};
