use crate::error::{GridError, SessionError};
use crate::pathing_grid::PathingGrid;
use crate::solver::AstarSolver;
use grid_util::point::Point;
use log::{debug, info};

/// Mutable state of an interactive grid editor: the grid being drawn on, the marked start and
/// end points and the most recently computed path. Every edit discards the stored path.
#[derive(Clone, Debug)]
pub struct EditorSession {
    grid: PathingGrid,
    endpoints: Vec<Point>,
    path: Option<Vec<Point>>,
    pub solver: AstarSolver,
}

impl EditorSession {
    /// Creates a session with an open `width` by `height` grid.
    pub fn new(width: usize, height: usize) -> Result<EditorSession, GridError> {
        Ok(EditorSession {
            grid: PathingGrid::new(width, height, false)?,
            endpoints: Vec::with_capacity(2),
            path: None,
            solver: AstarSolver::new(),
        })
    }

    pub fn grid(&self) -> &PathingGrid {
        &self.grid
    }

    pub fn endpoints(&self) -> &[Point] {
        &self.endpoints
    }

    pub fn start(&self) -> Option<Point> {
        self.endpoints.first().copied()
    }

    pub fn end(&self) -> Option<Point> {
        self.endpoints.get(1).copied()
    }

    /// The path found by the last successful [find_path](Self::find_path), if still current.
    pub fn path(&self) -> Option<&[Point]> {
        self.path.as_deref()
    }

    fn check_bounds(&self, point: Point) -> Result<(), GridError> {
        if self.grid.point_in_bounds(&point) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds(point))
        }
    }

    fn paint(&mut self, x: i32, y: i32, blocked: bool) -> Result<bool, GridError> {
        let point = Point::new(x, y);
        self.check_bounds(point)?;
        if self.endpoints.contains(&point) || self.grid.is_blocked(x, y) == blocked {
            return Ok(false);
        }
        self.grid.set(x, y, blocked)?;
        self.path = None;
        Ok(true)
    }

    /// Blocks a cell. Marked endpoints are left untouched. Returns whether the cell changed.
    pub fn paint_obstacle(&mut self, x: i32, y: i32) -> Result<bool, GridError> {
        self.paint(x, y, true)
    }

    /// Opens a cell. Marked endpoints are left untouched. Returns whether the cell changed.
    pub fn erase_obstacle(&mut self, x: i32, y: i32) -> Result<bool, GridError> {
        self.paint(x, y, false)
    }

    /// Marks a start or end point. The first two marks become start and end. Once both exist, a
    /// new mark becomes the start, the previous start becomes the end and the previous end is
    /// dropped.
    pub fn mark_endpoint(&mut self, x: i32, y: i32) -> Result<(), GridError> {
        let point = Point::new(x, y);
        self.check_bounds(point)?;
        if self.endpoints.len() == 2 {
            self.endpoints.pop();
            self.endpoints.insert(0, point);
        } else {
            self.endpoints.push(point);
        }
        debug!("Endpoints are now {:?}", self.endpoints);
        self.path = None;
        Ok(())
    }

    /// Runs the solver between the marked start and end points and stores the result.
    /// `Ok(None)` means both points are marked but no path connects them.
    pub fn find_path(&mut self) -> Result<Option<&[Point]>, SessionError> {
        let (start, end) = match self.endpoints[..] {
            [start, end] => (start, end),
            _ => {
                return Err(SessionError::MissingEndpoints {
                    marked: self.endpoints.len(),
                })
            }
        };
        self.grid.update();
        self.path = self.solver.find_path(&self.grid, start, end)?;
        match &self.path {
            Some(path) => info!("Found path of {} cells from {} to {}", path.len(), start, end),
            None => info!("No path from {} to {}", start, end),
        }
        Ok(self.path.as_deref())
    }

    /// Opens every cell and forgets the endpoints and the path.
    pub fn clear(&mut self) {
        self.grid.fill(false);
        self.endpoints.clear();
        self.path = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_two_endpoints() {
        let mut session = EditorSession::new(4, 4).unwrap();
        assert_eq!(
            session.find_path().unwrap_err(),
            SessionError::MissingEndpoints { marked: 0 }
        );
        session.mark_endpoint(0, 0).unwrap();
        assert_eq!(
            session.find_path().unwrap_err(),
            SessionError::MissingEndpoints { marked: 1 }
        );
        session.mark_endpoint(3, 3).unwrap();
        let path = session.find_path().unwrap().unwrap();
        assert_eq!(path.first(), Some(&Point::new(0, 0)));
        assert_eq!(path.last(), Some(&Point::new(3, 3)));
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn third_mark_rotates_endpoints() {
        let mut session = EditorSession::new(5, 5).unwrap();
        session.mark_endpoint(0, 0).unwrap();
        session.mark_endpoint(4, 4).unwrap();
        session.mark_endpoint(2, 0).unwrap();
        assert_eq!(session.start(), Some(Point::new(2, 0)));
        assert_eq!(session.end(), Some(Point::new(0, 0)));
        assert_eq!(session.endpoints().len(), 2);
    }

    #[test]
    fn painting_skips_endpoints() {
        let mut session = EditorSession::new(3, 3).unwrap();
        session.mark_endpoint(1, 1).unwrap();
        assert!(!session.paint_obstacle(1, 1).unwrap());
        assert!(session.grid().is_walkable(1, 1));
        assert!(session.paint_obstacle(0, 1).unwrap());
        assert!(!session.paint_obstacle(0, 1).unwrap());
        assert!(session.erase_obstacle(0, 1).unwrap());
        assert_eq!(
            session.paint_obstacle(3, 0).unwrap_err(),
            GridError::OutOfBounds(Point::new(3, 0))
        );
        assert_eq!(
            session.mark_endpoint(0, -1).unwrap_err(),
            GridError::OutOfBounds(Point::new(0, -1))
        );
    }

    #[test]
    fn walls_reroute_and_edits_discard_path() {
        let mut session = EditorSession::new(5, 5).unwrap();
        session.mark_endpoint(0, 0).unwrap();
        session.mark_endpoint(4, 0).unwrap();
        assert_eq!(session.find_path().unwrap().map(<[Point]>::len), Some(5));
        assert!(session.path().is_some());

        for y in 0..4 {
            session.paint_obstacle(2, y).unwrap();
        }
        assert!(session.path().is_none());
        let path = session.find_path().unwrap().unwrap().to_vec();
        assert!(path.contains(&Point::new(2, 4)));

        session.paint_obstacle(2, 4).unwrap();
        assert!(session.find_path().unwrap().is_none());
        assert!(session.path().is_none());
    }

    #[test]
    fn clear_resets_everything() {
        let mut session = EditorSession::new(3, 3).unwrap();
        session.paint_obstacle(1, 1).unwrap();
        session.mark_endpoint(0, 0).unwrap();
        session.mark_endpoint(2, 2).unwrap();
        session.find_path().unwrap();
        session.clear();
        assert!(session.endpoints().is_empty());
        assert!(session.path().is_none());
        assert!(session.grid().is_walkable(1, 1));
        assert!(!session.grid().components_dirty);
    }
}
