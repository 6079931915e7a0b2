//! Helpers for inspecting and reshaping paths returned by the solver.
use crate::pathing_grid::PathingGrid;
use grid_util::point::Point;
use itertools::Itertools;

fn step(from: &Point, to: &Point) -> (i32, i32) {
    (to.x - from.x, to.y - from.y)
}

fn is_unit_step(from: &Point, to: &Point) -> bool {
    let (dx, dy) = step(from, to);
    dx.abs() <= 1 && dy.abs() <= 1 && (dx, dy) != (0, 0)
}

/// Checks that every consecutive pair of points is one of the 8 neighbour moves apart.
pub fn is_continuous(path: &[Point]) -> bool {
    path.iter().tuple_windows().all(|(a, b)| is_unit_step(a, b))
}

/// Checks that the path is continuous and only visits walkable cells of the grid.
pub fn is_valid_on(grid: &PathingGrid, path: &[Point]) -> bool {
    is_continuous(path) && path.iter().all(|p| grid.is_walkable_point(p))
}

/// Number of steps along the path. Every step costs the same.
pub fn path_cost(path: &[Point]) -> usize {
    path.len().saturating_sub(1)
}

/// Reduces a continuous path to its endpoints and the points where its direction changes.
pub fn to_waypoints(path: &[Point]) -> Vec<Point> {
    let mut waypoints: Vec<Point> = path.first().into_iter().copied().collect();
    for (a, b, c) in path.iter().tuple_windows() {
        if step(a, b) != step(b, c) {
            waypoints.push(*b);
        }
    }
    if path.len() > 1 {
        waypoints.extend(path.last().copied());
    }
    waypoints
}

/// Turns waypoints into a path on the grid which can be followed step by step. Due to symmetry this
/// is typically one of many ways to follow the waypoints: diagonal steps are taken first.
pub fn waypoints_to_path(waypoints: &[Point]) -> Vec<Point> {
    let mut path: Vec<Point> = Vec::new();
    let Some(&first) = waypoints.first() else {
        return path;
    };
    let mut current = first;
    path.push(current);
    for next in &waypoints[1..] {
        while current != *next {
            current = Point::new(
                current.x + (next.x - current.x).signum(),
                current.y + (next.y - current.y).signum(),
            );
            path.push(current);
        }
    }
    path
}
