use grid_util::point::Point;
use thiserror::Error;

/// Errors raised while building or editing a [PathingGrid](crate::pathing_grid::PathingGrid).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must have a width and height of at least 1")]
    EmptyGrid,

    #[error("grid of {width}x{height} cells is too large")]
    TooLarge { width: usize, height: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    JaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell character {ch:?} at line {line}, column {column}")]
    UnknownCell {
        ch: char,
        line: usize,
        column: usize,
    },

    #[error("{0} lies outside the grid")]
    OutOfBounds(Point),
}

/// Caller contract violations detected before a search starts. A missing path is not an
/// error; it is reported as `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("start {0} lies outside the grid")]
    StartOutOfBounds(Point),

    #[error("goal {0} lies outside the grid")]
    GoalOutOfBounds(Point),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("a start and an end point are required, {marked} marked")]
    MissingEndpoints { marked: usize },

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Search(#[from] SearchError),
}
