//! `EntityRegistry` — the thread-safe set of live entities.
//!
//! # Deferred visibility
//!
//! The engine snapshots the registry once at the start of each tick and
//! iterates the snapshots, never the registry itself.  Add/remove calls made
//! mid-tick — from entity callbacks, lifecycle listeners, or other threads —
//! therefore take effect at the *next* tick's snapshots.  This is the
//! contract, not an accident: it rules out iterator invalidation and
//! unbounded recursive growth within one tick (an entity that spawns an
//! entity whose callback spawns an entity, all in the same frame).
//!
//! Removal mid-tick likewise does not abort callbacks already scheduled for
//! the removed entity this frame; the snapshot's `Arc` keeps it alive until
//! the tick completes.
//!
//! # Locking
//!
//! One mutex guards the container.  Every operation acquires it for the
//! duration of a single call — batch adds and removes are atomic with
//! respect to a concurrent snapshot — and `snapshot()` holds it only long
//! enough to clone the handle vector, never across callback execution.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::capability::SharedEntity;

/// The mutable set of registered entities, unique by handle identity
/// (`Arc::ptr_eq`), iterated in insertion order.
#[derive(Default)]
pub struct EntityRegistry {
    entities: Mutex<Vec<SharedEntity>>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one entity.  Registering the same handle twice keeps both
    /// occurrences; avoid it unless you want double dispatch.
    pub fn add(&self, entity: SharedEntity) {
        self.entities.lock().push(entity);
    }

    /// Register a batch of entities atomically (a concurrent snapshot sees
    /// all of them or none).
    pub fn add_all(&self, entities: impl IntoIterator<Item = SharedEntity>) {
        let mut guard = self.entities.lock();
        let before = guard.len();
        guard.extend(entities);
        log::trace!("registry: +{} entities ({} total)", guard.len() - before, guard.len());
    }

    /// Unregister one entity by handle identity.  Unknown handles are
    /// ignored.
    pub fn remove(&self, entity: &SharedEntity) {
        self.entities.lock().retain(|e| !Arc::ptr_eq(e, entity));
    }

    /// Unregister a batch atomically.
    pub fn remove_all(&self, entities: &[SharedEntity]) {
        let mut guard = self.entities.lock();
        let before = guard.len();
        guard.retain(|e| !entities.iter().any(|r| Arc::ptr_eq(e, r)));
        log::trace!("registry: -{} entities ({} total)", before - guard.len(), guard.len());
    }

    pub fn contains(&self, entity: &SharedEntity) -> bool {
        self.entities.lock().iter().any(|e| Arc::ptr_eq(e, entity))
    }

    pub fn len(&self) -> usize {
        self.entities.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.lock().is_empty()
    }

    /// Point-in-time copy of all handles, in insertion order.  The engine
    /// takes one per tick; later registry mutation does not affect a
    /// snapshot already taken.
    pub fn snapshot(&self) -> Vec<SharedEntity> {
        self.entities.lock().clone()
    }
}
