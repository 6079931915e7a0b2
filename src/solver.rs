use crate::astar::astar_first_found;
use crate::error::SearchError;
use crate::heuristic::Heuristic;
use crate::pathing_grid::PathingGrid;
use crate::STEP_COST;
use grid_util::point::Point;
use log::info;

/// Tunables of [AstarSolver]. The default reproduces the plain algorithm: squared Euclidean
/// heuristic and no relaxation of open nodes. The component pre-check never changes the outcome,
/// it only avoids flood-filling the grid when the goal cannot be reached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub heuristic: Heuristic,
    /// Re-parent an open node when it is rediscovered through a cheaper path.
    pub relax_on_better_cost: bool,
    /// Answer unreachable queries from the grid's connected components without searching.
    pub use_components: bool,
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig {
            heuristic: Heuristic::SquaredEuclidean,
            relax_on_better_cost: false,
            use_components: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AstarSolver {
    pub config: SearchConfig,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            config: SearchConfig::default(),
        }
    }

    pub fn with_config(config: SearchConfig) -> AstarSolver {
        AstarSolver { config }
    }

    /// Computes a path from `start` to `goal`, both inclusive, moving to any of the 8
    /// neighbouring cells at a cost of [STEP_COST] per step. Returns `Ok(None)` if no path
    /// exists and an error if either endpoint lies outside the grid.
    ///
    /// Walkability of the endpoints is not checked: a blocked goal is never reached, while a
    /// blocked start is expanded like any other cell.
    pub fn find_path(
        &self,
        grid: &PathingGrid,
        start: Point,
        goal: Point,
    ) -> Result<Option<Vec<Point>>, SearchError> {
        Ok(self
            .find_path_with_cost(grid, start, goal)?
            .map(|(path, _cost)| path))
    }

    /// Like [find_path](Self::find_path), also returning the accumulated cost of the end node.
    pub fn find_path_with_cost(
        &self,
        grid: &PathingGrid,
        start: Point,
        goal: Point,
    ) -> Result<Option<(Vec<Point>, i64)>, SearchError> {
        if !grid.point_in_bounds(&start) {
            return Err(SearchError::StartOutOfBounds(start));
        }
        if !grid.point_in_bounds(&goal) {
            return Err(SearchError::GoalOutOfBounds(goal));
        }
        if self.config.use_components && grid.is_walkable_point(&start) {
            if grid.components_dirty {
                info!("Components are dirty, searching without reachability check");
            } else if grid.unreachable(&start, &goal) {
                info!("{} is not reachable from {}", goal, start);
                return Ok(None);
            }
        }
        info!("Computing path from {} to {}", start, goal);
        let heuristic = self.config.heuristic;
        Ok(astar_first_found(
            &start,
            |node| {
                grid.walkable_neighbours(node)
                    .into_iter()
                    .map(|p| (p, STEP_COST))
            },
            |point| heuristic.estimate(point, &goal),
            |point| *point == goal,
            self.config.relax_on_better_cost,
        ))
    }
}
