use thiserror::Error;

use crate::GridPos;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search map {width}x{height} is too small, both sides must exceed 1")]
    MapTooSmall { width: usize, height: usize },

    #[error("position {pos} is outside the {width}x{height} map")]
    OutOfBounds {
        pos:    GridPos,
        width:  usize,
        height: usize,
    },

    #[error("obstruction map has {got} cells, the search map has {expected}")]
    SizeMismatch { expected: usize, got: usize },
}

pub type SearchResult<T> = Result<T, SearchError>;
