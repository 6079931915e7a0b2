use grid_util::point::Point;

/// Estimate of the remaining cost from a position to the goal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Heuristic {
    /// `dx² + dy²` without the square root. Overestimates the remaining step count for distant
    /// cells, so the first path found is not guaranteed to be the shortest, but expansion is
    /// strongly pulled towards the goal.
    #[default]
    SquaredEuclidean,
    /// `max(|dx|, |dy|)`, the exact step count on an open 8-connected grid with unit steps.
    Chebyshev,
    /// Always zero, expanding in order of accumulated cost like Dijkstra's algorithm.
    Zero,
}

impl Heuristic {
    pub fn estimate(&self, from: &Point, to: &Point) -> i64 {
        let dx = (from.x - to.x) as i64;
        let dy = (from.y - to.y) as i64;
        match self {
            Heuristic::SquaredEuclidean => dx * dx + dy * dy,
            Heuristic::Chebyshev => dx.abs().max(dy.abs()),
            Heuristic::Zero => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimates() {
        let a = Point::new(1, 1);
        let b = Point::new(4, -1);
        assert_eq!(Heuristic::SquaredEuclidean.estimate(&a, &b), 13);
        assert_eq!(Heuristic::Chebyshev.estimate(&a, &b), 3);
        assert_eq!(Heuristic::Zero.estimate(&a, &b), 0);
        assert_eq!(Heuristic::default(), Heuristic::SquaredEuclidean);
    }

    #[test]
    fn zero_at_goal() {
        let p = Point::new(7, 3);
        for h in [Heuristic::SquaredEuclidean, Heuristic::Chebyshev, Heuristic::Zero] {
            assert_eq!(h.estimate(&p, &p), 0);
        }
    }
}
