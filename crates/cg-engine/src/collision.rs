//! Pairwise collision detection and border-crossing tests.
//!
//! Runs once per tick, before the simulation stage, paused or not.
//! Complexity is O(n²) over the collidable snapshot; at the target scale
//! (tens to low hundreds of collidables) the pairwise scan beats any spatial
//! index it would amortize.

use std::sync::Arc;

use cg_core::Rect;
use cg_entity::SharedEntity;

/// Flags and bounds read from one collidable under a short lock.
struct CollidableInfo {
    bounds: Rect,
    tests_border: bool,
    tests_peers: bool,
}

fn read_info(entity: &SharedEntity) -> Option<CollidableInfo> {
    let mut guard = entity.lock();
    let col = guard.as_collidable()?;
    Some(CollidableInfo {
        bounds: col.bounds(),
        tests_border: col.tests_border(),
        tests_peers: col.tests_peers(),
    })
}

/// Run border and peer detection over the collidable snapshot, invoking hit
/// callbacks synchronously in snapshot order.
///
/// Bounds are read live: a callback that moves its entity changes what later
/// pairs in the same pass see.  Entity locks are taken one at a time — a
/// callback runs under only its own entity's lock, so it may freely lock
/// peers from its hit list or mutate the registry (deferred to next tick).
pub fn run(collidables: &[SharedEntity], border: Rect) {
    for entity in collidables {
        let Some(info) = read_info(entity) else { continue };

        // ── Border test: perimeter straddle, not containment ──────────────
        //
        // Fires when the entity pokes across an edge line — partial exit,
        // not full exit.  One callback per tick even if several edges are
        // straddled at once.
        if info.tests_border && info.bounds.straddles_perimeter(&border) {
            let mut guard = entity.lock();
            if let Some(col) = guard.as_collidable() {
                col.on_border_hit();
            }
        }

        // ── Peer test: strict rectangle intersection, self excluded ───────
        if info.tests_peers {
            // Re-read our bounds: the border callback may have moved us.
            let Some(bounds) = read_info(entity).map(|i| i.bounds) else { continue };

            let mut hits: Vec<SharedEntity> = Vec::new();
            for other in collidables {
                if Arc::ptr_eq(entity, other) {
                    continue;
                }
                let Some(other_bounds) = read_info(other).map(|i| i.bounds) else { continue };
                if bounds.intersects(&other_bounds) {
                    hits.push(other.clone());
                }
            }

            if !hits.is_empty() {
                let mut guard = entity.lock();
                if let Some(col) = guard.as_collidable() {
                    col.on_peer_hit(&hits);
                }
            }
        }
    }
}
