//! Per-tick capability snapshots.

use cg_entity::{EntityRegistry, SharedEntity};

/// The three capability subsets for one tick, each in registry insertion
/// order.
///
/// Taken once at the start of the tick, after the pre-frame listeners run.
/// These are defensive copies: registry mutation later in the tick does not
/// alter them, and an entity removed mid-tick still receives the callbacks
/// it was snapshotted for.
///
/// Drawables are kept flat, not pre-partitioned by layer: the render stage
/// makes three ordered passes and reads each entity's layer live, so an
/// entity whose simulation step changed its layer this tick draws on the new
/// one.
pub struct FrameSnapshots {
    pub collidables: Vec<SharedEntity>,
    pub simulatables: Vec<SharedEntity>,
    pub drawables: Vec<SharedEntity>,
}

impl FrameSnapshots {
    /// Filter the registry into the three capability subsets.
    ///
    /// Locks each entity exactly once, briefly, to query its capabilities;
    /// no lock is held when this returns.
    pub fn take(registry: &EntityRegistry) -> Self {
        let all = registry.snapshot();

        let mut collidables = Vec::new();
        let mut simulatables = Vec::new();
        let mut drawables = Vec::new();

        for entity in &all {
            let mut guard = entity.lock();
            if guard.as_collidable().is_some() {
                collidables.push(entity.clone());
            }
            if guard.as_simulatable().is_some() {
                simulatables.push(entity.clone());
            }
            if guard.as_drawable().is_some() {
                drawables.push(entity.clone());
            }
        }

        Self { collidables, simulatables, drawables }
    }
}
