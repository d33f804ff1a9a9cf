use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("surface output device unavailable: {0}")]
    Unavailable(String),

    #[error("surface dimensions {width}x{height} are invalid")]
    BadDimensions { width: usize, height: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SurfaceResult<T> = Result<T, SurfaceError>;
