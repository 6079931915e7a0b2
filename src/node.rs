use std::cmp::Ordering;

use num_traits::Zero;

/// Search record of a single position. The position itself is the key the node is stored under
/// in the engine's node map, which makes membership tests compare positions only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchNode<C> {
    /// Map index of the node this one was generated from, [None] for the start node.
    pub parent: Option<usize>,
    pub g: C,
    pub h: C,
    /// Set once the node has been popped from the frontier and expanded.
    pub closed: bool,
}

impl<C: Zero + Copy> SearchNode<C> {
    pub fn root() -> SearchNode<C> {
        SearchNode {
            parent: None,
            g: Zero::zero(),
            h: Zero::zero(),
            closed: false,
        }
    }

    pub fn new(parent: usize, g: C, h: C) -> SearchNode<C> {
        SearchNode {
            parent: Some(parent),
            g,
            h,
            closed: false,
        }
    }

    pub fn f(&self) -> C {
        self.g + self.h
    }
}

/// Entry of the open frontier. [std::collections::BinaryHeap] is a max-heap, so the ordering
/// is reversed on the estimated cost to pop the smallest `f` first.
pub(crate) struct SmallestCostHolder<K> {
    pub estimated_cost: K,
    pub cost: K,
    pub index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.cost.eq(&other.cost)
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // First orders per estimated cost, then creates subordering
        // based on cost, favoring exploration of the deepest nodes first
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => self.cost.cmp(&other.cost),
            s => s,
        }
    }
}
