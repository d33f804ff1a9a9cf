//! The `Engine` struct — state machine and loop driver.

use std::sync::Arc;
use std::time::Instant;

use cg_core::{DrawLayer, EngineHandle, FrameContext};
use cg_draw::DrawSurface;
use cg_entity::{EntityRegistry, SharedEntity};

use crate::snapshot::FrameSnapshots;
use crate::{EngineError, EngineResult, collision, pacer};

/// Listener for the pre-setup and start lifecycle events.  Receives the
/// control handle (to configure pacing, pause, stop) and the registry (to
/// seed entities).
pub type LifecycleListener = Box<dyn FnMut(&EngineHandle, &EntityRegistry) + Send>;

/// Listener for the pre-frame and post-frame lifecycle events.
pub type FrameListener = Box<dyn FnMut(&FrameContext) + Send>;

/// The frame scheduler: owns the registry and the render surface, drives the
/// per-tick stage sequence, and exposes lifecycle events to host code.
///
/// # State machine
///
/// ```text
/// Uninitialized ──setup()──► Configured ──run()──► Running ⇄ Paused
///                                                     │
///                                                  stop() ──► returns from run()
/// ```
///
/// `run()` before `setup()` completes is a usage error
/// ([`EngineError::SetupIncomplete`]).  `stop()` is cooperative: the current
/// tick finishes, then the loop exits.  A stopped engine can be `run()`
/// again; statistics (frame counter included) carry over, never reset.
pub struct Engine {
    registry: Arc<EntityRegistry>,
    surface: Box<dyn DrawSurface>,
    handle: EngineHandle,
    on_setup: Vec<LifecycleListener>,
    on_start: Vec<LifecycleListener>,
    on_pre_frame: Vec<FrameListener>,
    on_post_frame: Vec<FrameListener>,
    configured: bool,
}

impl Engine {
    /// Create an engine around a render surface, with the default 30 fps
    /// target.
    pub fn new(surface: impl DrawSurface + 'static) -> Self {
        Self {
            registry: Arc::new(EntityRegistry::new()),
            surface: Box::new(surface),
            handle: EngineHandle::default(),
            on_setup: Vec::new(),
            on_start: Vec::new(),
            on_pre_frame: Vec::new(),
            on_post_frame: Vec::new(),
            configured: false,
        }
    }

    // ── Host access ───────────────────────────────────────────────────────

    /// Cloneable control/statistics handle, safe to read from any thread.
    pub fn handle(&self) -> EngineHandle {
        self.handle.clone()
    }

    /// Shared registry handle.  Clone it into callbacks or other threads to
    /// add/remove entities while the loop runs (visible next tick).
    pub fn registry(&self) -> Arc<EntityRegistry> {
        Arc::clone(&self.registry)
    }

    /// Register entities (convenience for `registry().add_all(..)`).
    pub fn add_entities(&self, entities: impl IntoIterator<Item = SharedEntity>) {
        self.registry.add_all(entities);
    }

    /// Unregister entities (convenience for `registry().remove_all(..)`).
    pub fn remove_entities(&self, entities: &[SharedEntity]) {
        self.registry.remove_all(entities);
    }

    pub fn stop(&self) {
        self.handle.stop();
    }

    pub fn pause(&self) {
        self.handle.pause();
    }

    pub fn resume(&self) {
        self.handle.resume();
    }

    // ── Lifecycle event registration ──────────────────────────────────────
    //
    // Listeners fire in registration order; no ordering exists between
    // independently registered listeners beyond that.

    /// Fires at the start of `setup()`, before the surface initializes.
    pub fn on_setup(&mut self, f: impl FnMut(&EngineHandle, &EntityRegistry) + Send + 'static) {
        self.on_setup.push(Box::new(f));
    }

    /// Fires once when `run()` starts, before the first tick.
    pub fn on_start(&mut self, f: impl FnMut(&EngineHandle, &EntityRegistry) + Send + 'static) {
        self.on_start.push(Box::new(f));
    }

    /// Fires every tick before the collision stage.
    pub fn on_pre_frame(&mut self, f: impl FnMut(&FrameContext) + Send + 'static) {
        self.on_pre_frame.push(Box::new(f));
    }

    /// Fires every tick after the render stage, before pacing.
    pub fn on_post_frame(&mut self, f: impl FnMut(&FrameContext) + Send + 'static) {
        self.on_post_frame.push(Box::new(f));
    }

    // ── State machine ─────────────────────────────────────────────────────

    /// Fire the pre-setup event and initialize the render surface.
    ///
    /// Surface initialization failure is fatal and propagates unchanged.
    pub fn setup(&mut self) -> EngineResult<()> {
        for f in &mut self.on_setup {
            f(&self.handle, &self.registry);
        }
        self.surface.setup()?;
        self.configured = true;
        log::info!("engine configured: target {} fps", self.handle.target_fps());
        Ok(())
    }

    /// Enter the tick loop.  Returns when [`stop`][Self::stop] is honored at
    /// a tick boundary.
    ///
    /// Callback faults are not isolated: a panic in any entity callback or
    /// listener unwinds out of this call.
    pub fn run(&mut self) -> EngineResult<()> {
        if !self.configured {
            return Err(EngineError::SetupIncomplete);
        }

        self.handle.mark_running();
        for f in &mut self.on_start {
            f(&self.handle, &self.registry);
        }
        log::info!("engine running: {} entities", self.registry.len());

        let run_start = Instant::now();
        while self.handle.is_running() {
            self.tick(run_start);
        }

        log::info!(
            "engine stopped: {} frames in {:.1}s",
            self.handle.total_frames(),
            self.handle.game_time().as_secs_f64(),
        );
        Ok(())
    }

    // ── One tick ──────────────────────────────────────────────────────────

    fn tick(&mut self, run_start: Instant) {
        let frame_start = Instant::now();

        // ① Pre-frame.
        self.surface.pre_frame();
        let ctx = FrameContext::new(
            self.handle.last_total_frame_time(),
            run_start.elapsed(),
            self.surface.game_border(),
            self.handle.clone(),
        );
        for f in &mut self.on_pre_frame {
            f(&ctx);
        }

        // ② Snapshot, ③ collision, ④ simulation.  Collision always precedes
        // simulation so update() sees same-tick hit reactions; it is never
        // gated by pause.
        let snapshots = FrameSnapshots::take(&self.registry);
        collision::run(&snapshots.collidables, ctx.border);
        run_simulation(&snapshots.simulatables, &ctx, self.handle.is_paused());

        // ⑤ Render.
        run_render(
            self.surface.as_mut(),
            &snapshots.drawables,
            &ctx,
            self.handle.is_paused(),
        );

        // ⑥ Post-frame, statistics, pacing.
        self.surface.post_frame();
        for f in &mut self.on_post_frame {
            f(&ctx);
        }

        let raw = frame_start.elapsed();
        pacer::pace(raw, self.handle.target_frame_time());
        let total = frame_start.elapsed();
        self.handle.record_frame(raw, total, run_start.elapsed());
    }
}

/// ④ Simulation stage: snapshot order, pause-aware per entity.
fn run_simulation(simulatables: &[SharedEntity], ctx: &FrameContext, paused: bool) {
    for entity in simulatables {
        let mut guard = entity.lock();
        let Some(sim) = guard.as_simulatable() else { continue };
        if paused && !sim.updates_while_paused() {
            continue;
        }
        sim.update(ctx);
    }
}

/// ⑤ Render stage: three ordered layer passes, each bracketed, the whole
/// pass bracketed by draw_start/draw_finish.  Layer brackets fire even for
/// layers no entity draws on.
fn run_render(
    surface: &mut dyn DrawSurface,
    drawables: &[SharedEntity],
    ctx: &FrameContext,
    paused: bool,
) {
    surface.draw_start(ctx);
    for layer in DrawLayer::ALL {
        surface.layer_start(ctx, layer);
        for entity in drawables {
            let mut guard = entity.lock();
            let Some(drawable) = guard.as_drawable() else { continue };
            if drawable.layer() != layer {
                continue;
            }
            if paused && !drawable.draws_while_paused() {
                continue;
            }
            drawable.draw(ctx, surface);
        }
        surface.layer_end(ctx, layer);
    }
    surface.draw_finish(ctx);
}
