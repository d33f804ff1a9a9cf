//! `EngineHandle` — the shared control and statistics block.
//!
//! # Design
//!
//! The engine's run/pause flags and frame statistics live behind an `Arc` of
//! atomics rather than as plain fields on the engine struct, for two reasons:
//!
//! 1. Host code commonly reads FPS/frame counters from outside the tick
//!    thread (UI, telemetry).  Atomic loads make those reads tear-free
//!    without taking any lock.
//! 2. `stop()` and `pause()` must be callable from lifecycle listeners and
//!    entity callbacks while the engine itself is mid-tick.  A cloned handle
//!    sidesteps the borrow of the engine struct.
//!
//! All accesses use `Ordering::Relaxed`: each field is an independent
//! monotonic statistic or flag, and no cross-field ordering is relied upon.
//! The stop flag is cooperative — it is checked once per tick boundary.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, Ordering};
use std::time::Duration;

/// Default target frame rate for a freshly constructed engine.
pub const DEFAULT_TARGET_FPS: u32 = 30;

#[derive(Default)]
struct ControlBlock {
    running: AtomicBool,
    paused: AtomicBool,
    /// Target frames per second.  0 = unbounded (never sleep).
    target_fps: AtomicU32,
    /// Completed ticks since construction.  Monotonic, never reset.
    total_frames: AtomicU64,
    /// Last frame's compute-only duration, in microseconds.
    raw_frame_micros: AtomicU64,
    /// Last frame's compute + pacing-sleep duration, in microseconds.
    total_frame_micros: AtomicU64,
    /// Wall-clock time since `run()` started, in microseconds.
    game_time_micros: AtomicU64,
}

/// Cloneable, thread-safe view of the engine's state and statistics.
///
/// Obtained from `Engine::handle()`; also embedded in every
/// [`FrameContext`][crate::FrameContext] so callbacks can query pause state,
/// read statistics, or request a stop.
#[derive(Clone)]
pub struct EngineHandle {
    inner: Arc<ControlBlock>,
}

impl EngineHandle {
    pub fn new(target_fps: u32) -> Self {
        let handle = Self { inner: Arc::new(ControlBlock::default()) };
        handle.set_target_fps(target_fps);
        handle
    }

    // ── Run / pause flags ─────────────────────────────────────────────────

    pub fn is_running(&self) -> bool {
        self.inner.running.load(Ordering::Relaxed)
    }

    pub fn is_paused(&self) -> bool {
        self.inner.paused.load(Ordering::Relaxed)
    }

    /// Request a cooperative stop.  The current tick completes first; the
    /// flag is honored at the next loop-condition check.
    pub fn stop(&self) {
        self.inner.running.store(false, Ordering::Relaxed);
    }

    /// Pause the simulation.  The loop keeps ticking — collision detection
    /// still runs every frame — but entities without an updates/draws-while-
    /// paused flag are skipped in the simulation and render stages.
    pub fn pause(&self) {
        self.inner.paused.store(true, Ordering::Relaxed);
    }

    pub fn resume(&self) {
        self.inner.paused.store(false, Ordering::Relaxed);
    }

    /// Mark the loop as running.  Called by the engine when `run()` starts.
    #[doc(hidden)]
    pub fn mark_running(&self) {
        self.inner.running.store(true, Ordering::Relaxed);
    }

    // ── Pacing configuration ──────────────────────────────────────────────

    /// Target frames per second.  0 means unbounded (the pacer never sleeps).
    pub fn target_fps(&self) -> u32 {
        self.inner.target_fps.load(Ordering::Relaxed)
    }

    /// Change the target frame rate.  May be called at any time, including
    /// from listeners and entity callbacks; takes effect from the next tick's
    /// pacing step.
    pub fn set_target_fps(&self, fps: u32) {
        self.inner.target_fps.store(fps, Ordering::Relaxed);
    }

    /// The frame duration the pacer aims for, or `None` when unbounded.
    pub fn target_frame_time(&self) -> Option<Duration> {
        match self.target_fps() {
            0 => None,
            fps => Some(Duration::from_secs_f64(1.0 / fps as f64)),
        }
    }

    // ── Statistics ────────────────────────────────────────────────────────

    /// Completed ticks since the engine was constructed.
    pub fn total_frames(&self) -> u64 {
        self.inner.total_frames.load(Ordering::Relaxed)
    }

    /// Last frame's compute-only duration (collision + simulation + render).
    pub fn last_raw_frame_time(&self) -> Duration {
        Duration::from_micros(self.inner.raw_frame_micros.load(Ordering::Relaxed))
    }

    /// Last frame's full duration including the pacing sleep.
    pub fn last_total_frame_time(&self) -> Duration {
        Duration::from_micros(self.inner.total_frame_micros.load(Ordering::Relaxed))
    }

    /// Wall-clock time elapsed since `run()` started.
    pub fn game_time(&self) -> Duration {
        Duration::from_micros(self.inner.game_time_micros.load(Ordering::Relaxed))
    }

    /// Instantaneous frames per second: `1000 / total_frame_ms`, or 0.0 when
    /// no frame has completed yet.
    pub fn current_fps(&self) -> f64 {
        let total_ms = self.last_total_frame_time().as_secs_f64() * 1_000.0;
        if total_ms == 0.0 { 0.0 } else { 1_000.0 / total_ms }
    }

    /// Record one completed tick.  Called by the engine at the end of each
    /// frame, after pacing; increments the frame counter exactly once.
    #[doc(hidden)]
    pub fn record_frame(&self, raw: Duration, total: Duration, game_time: Duration) {
        self.inner
            .raw_frame_micros
            .store(raw.as_micros() as u64, Ordering::Relaxed);
        self.inner
            .total_frame_micros
            .store(total.as_micros() as u64, Ordering::Relaxed);
        self.inner
            .game_time_micros
            .store(game_time.as_micros() as u64, Ordering::Relaxed);
        self.inner.total_frames.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for EngineHandle {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_FPS)
    }
}

impl std::fmt::Debug for EngineHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineHandle")
            .field("running", &self.is_running())
            .field("paused", &self.is_paused())
            .field("target_fps", &self.target_fps())
            .field("total_frames", &self.total_frames())
            .finish()
    }
}
