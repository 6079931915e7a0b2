//! A* search over an arbitrary node type, driven by closures in the style of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html).
//!
//! Unlike the textbook algorithm, a node that is already open keeps the path it was first
//! discovered with unless `relax` is set: the first path to a position wins.
use crate::node::{SearchNode, SmallestCostHolder};
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::{debug, warn};
use num_traits::Zero;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

fn reverse_path<N, C>(nodes: &FxIndexMap<N, SearchNode<C>>, end: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path: Vec<N> = std::iter::successors(Some(end), |&i| {
        nodes.get_index(i).and_then(|(_, node)| node.parent)
    })
    .filter_map(|i| nodes.get_index(i).map(|(position, _)| position.clone()))
    .collect();
    path.reverse();
    path
}

/// Runs A* from `start` until `success` holds for a popped node, returning the path from start
/// to that node inclusive together with its cost. Returns [None] once the frontier is exhausted.
///
/// Nodes are keyed by value, so two nodes are the same entity exactly when they compare equal,
/// regardless of their costs. A successor that is already closed is discarded. A successor that
/// is already open is discarded as well, unless `relax` is set and the new path to it is cheaper,
/// in which case its parent and cost are replaced and it is pushed again.
pub fn astar_first_found<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
    relax: bool,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: Zero::zero(),
        cost: Zero::zero(),
        index: 0,
    });
    let mut nodes: FxIndexMap<N, SearchNode<C>> = FxIndexMap::default();
    nodes.insert(start.clone(), SearchNode::root());
    let mut expanded = 0usize;
    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        let successors = {
            let Some((node, state)) = nodes.get_index_mut(index) else {
                continue;
            };
            // With relaxation a node can sit in the heap several times; only the first pop counts.
            if state.closed {
                continue;
            }
            state.closed = true;
            expanded += 1;
            if success(node) {
                let path = reverse_path(&nodes, index);
                debug!(
                    "Path of {} nodes found after expanding {} of {} discovered nodes",
                    path.len(),
                    expanded,
                    nodes.len()
                );
                return Some((path, cost));
            }
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let node; // search record for successor
            let n; // index for successor
            match nodes.entry(successor) {
                Vacant(e) => {
                    let h = heuristic(e.key());
                    node = SearchNode::new(index, new_cost, h);
                    n = e.index();
                    e.insert(node);
                }
                Occupied(mut e) => {
                    let known = e.get();
                    if !relax || known.closed || known.g <= new_cost {
                        continue;
                    }
                    node = SearchNode::new(index, new_cost, known.h);
                    n = e.index();
                    e.insert(node);
                }
            }

            to_see.push(SmallestCostHolder {
                estimated_cost: node.f(),
                cost: new_cost,
                index: n,
            });
        }
    }
    warn!(
        "Frontier exhausted after expanding {} of {} discovered nodes, no path exists",
        expanded,
        nodes.len()
    );
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Nodes on a line, each connected to its successor with cost 1.
    #[test]
    fn walks_a_line() {
        let (path, cost) = astar_first_found(
            &0i32,
            |&n| if n < 5 { vec![(n + 1, 1i32)] } else { vec![] },
            |&n| 5 - n,
            |&n| n == 5,
            false,
        )
        .unwrap();
        assert_eq!(path, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(cost, 5);
    }

    #[test]
    fn start_is_goal() {
        let result = astar_first_found(&7u8, |_| vec![(8u8, 1u32)], |_| 0, |&n| n == 7, false);
        assert_eq!(result, Some((vec![7], 0)));
    }

    #[test]
    fn exhausted_frontier() {
        let result = astar_first_found(
            &0i32,
            |&n| if n < 3 { vec![(n + 1, 1i32)] } else { vec![] },
            |_| 0,
            |&n| n == 10,
            false,
        );
        assert!(result.is_none());
    }

    /// Graph where the goal's cheap parent is only discovered after an expensive one:
    ///
    /// 0 -> 1 (1), 0 -> 2 (2), 1 -> 3 (10), 2 -> 4 (1), 4 -> 3 (1), 3 -> 5 (1)
    ///
    /// Node 1 is expanded first and opens 3 with cost 11. Without relaxation the later, cheaper
    /// route through 2 and 4 is ignored.
    fn successors(n: &u32) -> Vec<(u32, u32)> {
        match n {
            0 => vec![(1, 1), (2, 2)],
            1 => vec![(3, 10)],
            2 => vec![(4, 1)],
            4 => vec![(3, 1)],
            3 => vec![(5, 1)],
            _ => vec![],
        }
    }

    #[test]
    fn first_discovery_wins_without_relaxation() {
        let (path, cost) = astar_first_found(&0, successors, |_| 0, |&n| n == 5, false).unwrap();
        assert_eq!(path, vec![0, 1, 3, 5]);
        assert_eq!(cost, 12);
    }

    #[test]
    fn relaxation_finds_cheaper_route() {
        let (path, cost) = astar_first_found(&0, successors, |_| 0, |&n| n == 5, true).unwrap();
        assert_eq!(path, vec![0, 2, 4, 3, 5]);
        assert_eq!(cost, 5);
    }
}
