//! Incremental best-first path search over a character grid.
//!
//! | Item          | Purpose                                              |
//! |---------------|------------------------------------------------------|
//! | [`PathSearch`]| The solver: map, frontier, one expansion per step    |
//! | [`SearchNode`]| Per-cell state, readable between steps               |
//! | [`StepOutcome`]| `Searching` / `Found` / `Exhausted`                 |
//! | [`GridPos`]   | Cell coordinate                                      |
//!
//! The solver is deliberately incremental: call [`PathSearch::step`] a few
//! times per tick from a simulation callback to spread the cost over frames
//! (and to draw the frontier as it grows), or [`PathSearch::run`] to solve in
//! one go.
//!
//! ```
//! use cg_search::{GridPos, PathSearch, StepOutcome};
//!
//! let mut search = PathSearch::new(8, 8, GridPos::new(0, 0), GridPos::new(7, 7))?;
//! search.reset();
//! assert_eq!(search.run(), StepOutcome::Found);
//! let path = search.path().unwrap();
//! assert_eq!(path[0], GridPos::new(0, 0));
//! # Ok::<(), cg_search::SearchError>(())
//! ```

mod error;
mod search;

#[cfg(test)]
mod tests;

pub use error::{SearchError, SearchResult};
pub use search::{GridPos, NodeState, PathSearch, SearchNode, StepOutcome};
