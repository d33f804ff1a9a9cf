use cg_draw::SurfaceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// `run()` was called before `setup()` completed.  A usage error: fatal,
    /// reported immediately, never retried.
    #[error("run() called before setup() completed")]
    SetupIncomplete,

    /// The render surface could not acquire its output device.
    #[error("render surface setup failed: {0}")]
    Surface(#[from] SurfaceError),
}

pub type EngineResult<T> = Result<T, EngineError>;
