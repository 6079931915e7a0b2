//! # grid_astar
//!
//! Pathfinding with [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) on a grid with
//! blocked cells. Movement is 8-directional and every step, straight or diagonal, costs the
//! same. The default heuristic is the squared Euclidean distance and open nodes are never
//! re-parented, so the first path discovered to a cell is the one that is kept; both can be
//! changed through [SearchConfig]. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
//!
//! ```
//! use grid_astar::{find_path, PathingGrid, Point};
//!
//! let grid: PathingGrid = "...\n.#.\n...".parse().unwrap();
//! let path = find_path(&grid, Point::new(0, 0), Point::new(2, 2)).unwrap().unwrap();
//! assert_eq!(path.first(), Some(&Point::new(0, 0)));
//! assert_eq!(path.last(), Some(&Point::new(2, 2)));
//! ```
pub mod astar;
pub mod error;
pub mod heuristic;
pub mod node;
pub mod path;
pub mod pathing_grid;
pub mod session;
pub mod solver;

pub use error::{GridError, SearchError, SessionError};
pub use grid_util::point::Point;
pub use heuristic::Heuristic;
pub use pathing_grid::PathingGrid;
pub use session::EditorSession;
pub use solver::{AstarSolver, SearchConfig};

/// Cost of a single step in any of the 8 directions.
pub const STEP_COST: i64 = 1;

/// Neighbour offsets in expansion order: straight moves first, then diagonals.
pub const NEIGHBOUR_OFFSETS: [(i32, i32); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Finds a path from `start` to `goal` with the default [AstarSolver]. See
/// [AstarSolver::find_path].
pub fn find_path(
    grid: &PathingGrid,
    start: Point,
    goal: Point,
) -> Result<Option<Vec<Point>>, SearchError> {
    AstarSolver::new().find_path(grid, start, goal)
}
