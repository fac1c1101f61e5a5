use thiserror::Error;

use crate::maze::Node;

/// Failure modes of a path query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolveError {
    /// A supplied endpoint lies outside the grid.
    #[error("coordinate {0:?} is outside the grid")]
    InvalidCoordinate(Node),
    /// The search frontier emptied before reaching the goal.
    #[error("no path exists from {start:?} to {goal:?}")]
    PathNotFound { start: Node, goal: Node },
}
