//! `cg-entity` — entity capabilities and the shared registry.
//!
//! # Capability model
//!
//! An entity is an opaque application-defined object implementing [`Entity`]
//! plus any subset of the three capability traits:
//!
//! | Capability       | Engine stage      | Entity exposes                     |
//! |------------------|-------------------|------------------------------------|
//! | [`Collidable`]   | collision (first) | bounds, border/peer flags, hit callbacks |
//! | [`Simulatable`]  | simulation        | update callback, runs-while-paused flag  |
//! | [`Drawable`]     | render (last)     | draw callback, layer, draws-while-paused |
//!
//! Composition, not inheritance: the engine asks each entity for its
//! capability views (`as_collidable()` and friends) and dispatches per tick
//! to whichever are present.  An entity's capability set is **fixed for its
//! lifetime** — the engine may cache capability membership per frame, so a
//! view must never appear or disappear after construction.  To change
//! behavior class, remove the entity and register a replacement.
//!
//! # Sharing model
//!
//! Entities are held as [`SharedEntity`] (`Arc<Mutex<dyn Entity>>`).  The
//! tick thread locks one entity at a time, for the duration of a single
//! callback.  Hosts keep clones of the `Arc` to mutate entities between
//! frames or from other threads.
//!
//! A callback already runs under its own entity's lock — locking your own
//! handle from inside your callback deadlocks.  Locking *other* entities
//! (e.g. peers from a hit list) is fine.

pub mod capability;
pub mod registry;


pub use capability::{Collidable, Drawable, Entity, Simulatable, SharedEntity, shared};
pub use registry::EntityRegistry;
