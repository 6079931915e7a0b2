use crate::error::GridError;
use crate::NEIGHBOUR_OFFSETS;
use core::fmt;
use core::str::FromStr;
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// [PathingGrid] holds the raw occupancy of a rectangular grid, where a cell is either blocked
/// ([true]) or open ([false]), and maintains information about 8-connected components of open
/// cells using a [UnionFind] structure. A search borrows the grid immutably, so it cannot change
/// while a path is being computed.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

/// Number of cells of a `width` by `height` grid. Both dimensions must be non-zero and fit in
/// the `i32` coordinates of [Point].
fn cell_count(width: usize, height: usize) -> Result<usize, GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::EmptyGrid);
    }
    let max = i32::MAX as usize;
    if width > max || height > max {
        return Err(GridError::TooLarge { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(GridError::TooLarge { width, height })
}

impl PathingGrid {
    /// Creates a `width` by `height` grid with every cell set to `blocked`.
    pub fn new(width: usize, height: usize, blocked: bool) -> Result<PathingGrid, GridError> {
        let len = cell_count(width, height)?;
        let mut grid = PathingGrid {
            width,
            height,
            cells: vec![blocked; len],
            components: UnionFind::new(len),
            components_dirty: false,
        };
        grid.generate_components();
        Ok(grid)
    }

    /// Builds a grid from rows of occupancy values, `rows[y][x]`. Every row must have the same
    /// length.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<PathingGrid, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let len = cell_count(width, height)?;
        let mut cells = Vec::with_capacity(len);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(GridError::JaggedRows {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }
        let mut grid = PathingGrid {
            width,
            height,
            cells,
            components: UnionFind::new(len),
            components_dirty: false,
        };
        grid.generate_components();
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    pub fn point_in_bounds(&self, point: &Point) -> bool {
        self.in_bounds(point.x, point.y)
    }

    /// Cells outside the grid count as blocked.
    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        !self.in_bounds(x, y) || self.cells[self.get_ix(x, y)]
    }

    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        !self.is_blocked(x, y)
    }

    pub fn is_walkable_point(&self, point: &Point) -> bool {
        self.is_walkable(point.x, point.y)
    }

    fn get_ix(&self, x: i32, y: i32) -> usize {
        y as usize * self.width + x as usize
    }

    fn get_ix_point(&self, point: &Point) -> usize {
        self.get_ix(point.x, point.y)
    }

    /// All 8 candidate positions around `point` in [NEIGHBOUR_OFFSETS] order, whether or not
    /// they are on the grid.
    pub fn neighbours(&self, point: &Point) -> SmallVec<[Point; 8]> {
        NEIGHBOUR_OFFSETS
            .iter()
            .map(|(dx, dy)| Point::new(point.x + dx, point.y + dy))
            .collect()
    }

    /// The neighbours of `point` that are inside the grid and not blocked.
    pub fn walkable_neighbours(&self, point: &Point) -> SmallVec<[Point; 8]> {
        self.neighbours(point)
            .into_iter()
            .filter(|p| self.is_walkable_point(p))
            .collect()
    }

    /// Updates a position on the grid. Joins newly connected components and flags the components
    /// as dirty if components are (potentially) broken apart into multiple.
    pub fn set(&mut self, x: i32, y: i32, blocked: bool) -> Result<(), GridError> {
        if !self.in_bounds(x, y) {
            return Err(GridError::OutOfBounds(Point::new(x, y)));
        }
        self.set_in_bounds(x, y, blocked);
        Ok(())
    }

    fn set_in_bounds(&mut self, x: i32, y: i32, blocked: bool) {
        debug_assert!(self.in_bounds(x, y));
        let ix = self.get_ix(x, y);
        if self.cells[ix] == blocked {
            return;
        }
        self.cells[ix] = blocked;
        if blocked {
            self.components_dirty = true;
        } else {
            for n in self.walkable_neighbours(&Point::new(x, y)) {
                let n_ix = self.get_ix_point(&n);
                self.components.union(ix, n_ix);
            }
        }
    }

    pub fn set_point(&mut self, point: Point, blocked: bool) -> Result<(), GridError> {
        self.set(point.x, point.y, blocked)
    }

    /// Sets every cell of the `width` by `height` rectangle with top-left corner `(x, y)`. Cells
    /// falling outside the grid are ignored.
    pub fn set_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32, blocked: bool) {
        // Dimensions fit in i32, see cell_count
        let x_range = x.max(0)..x.saturating_add(width).min(self.width as i32);
        let y_range = y.max(0)..y.saturating_add(height).min(self.height as i32);
        for cy in y_range {
            for cx in x_range.clone() {
                self.set_in_bounds(cx, cy, blocked);
            }
        }
    }

    /// Sets every cell of the grid to `blocked`.
    pub fn fill(&mut self, blocked: bool) {
        self.cells.iter_mut().for_each(|c| *c = blocked);
        self.generate_components();
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.get_ix_point(point))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.point_in_bounds(start) && self.point_in_bounds(goal) {
            let start_ix = self.get_ix_point(start);
            let goal_ix = self.get_ix_point(goal);
            !self.components.equiv(start_ix, goal_ix)
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up open grid neighbours to the same
    /// components. Only the forward half of the 8-neighbourhood is visited per cell, the
    /// backward half is covered by the cells before it.
    pub fn generate_components(&mut self) {
        info!(
            "Generating connected components for {}x{} grid",
            self.width, self.height
        );
        self.components = UnionFind::new(self.width * self.height);
        self.components_dirty = false;
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                if self.is_blocked(x, y) {
                    continue;
                }
                let parent_ix = self.get_ix(x, y);
                for (dx, dy) in [(1, 0), (0, 1), (1, 1), (1, -1)] {
                    if self.is_walkable(x + dx, y + dy) {
                        let ix = self.get_ix(x + dx, y + dy);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height as i32 {
            let row = (0..self.width as i32)
                .map(|x| if self.is_blocked(x, y) { '#' } else { '.' })
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

/// Parses ASCII maps with one line per row: `.` is open, `#`, `@` and `T` are blocked. Blank
/// lines are skipped but still counted in the line numbers of errors.
impl FromStr for PathingGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, text)| !text.is_empty())
            .map(|(line, text)| {
                text.chars()
                    .enumerate()
                    .map(|(column, ch)| match ch {
                        '.' => Ok(false),
                        '#' | '@' | 'T' => Ok(true),
                        _ => Err(GridError::UnknownCell { ch, line, column }),
                    })
                    .collect::<Result<Vec<bool>, GridError>>()
            })
            .collect::<Result<Vec<_>, GridError>>()?;
        PathingGrid::from_rows(rows)
    }
}
