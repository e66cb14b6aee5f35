//! Per-run search state shared by the solvers: priority queue entries, the cost map and the
//! predecessor map.
use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use num_traits::{Bounded, Zero};
use std::cmp::Ordering;

pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Maps a cell index to the index it was discovered from. Iteration order is discovery order.
pub type PredecessorMap = FxIndexMap<usize, usize>;

/// Entry of a min-priority queue built on [std::collections::BinaryHeap]. Entries are ordered
/// by priority first and by insertion sequence second, so that among equal priorities the
/// entry pushed first is popped first.
#[derive(Clone, Copy, Debug)]
pub struct SmallestCostHolder<K> {
    pub priority: K,
    pub cost: K,
    pub sequence: usize,
    pub index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.priority.eq(&other.priority) && self.sequence == other.sequence
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so both keys are reversed
        match other.priority.cmp(&self.priority) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

/// Hands out strictly increasing insertion sequence numbers.
#[derive(Clone, Debug, Default)]
pub struct SequenceCounter(usize);

impl SequenceCounter {
    pub fn next_sequence(&mut self) -> usize {
        let n = self.0;
        self.0 += 1;
        n
    }
}

/// Best known cost per cell index. Unknown cells hold [Bounded::max_value], which plays the
/// role of +infinity.
#[derive(Clone, Debug)]
pub struct CostMap<C> {
    costs: Vec<C>,
}

impl<C: Bounded + Zero + Copy + Ord> CostMap<C> {
    pub fn new(len: usize, origin: usize) -> CostMap<C> {
        let mut costs = vec![C::max_value(); len];
        costs[origin] = C::zero();
        CostMap { costs }
    }
    pub fn get(&self, ix: usize) -> C {
        self.costs[ix]
    }
    pub fn is_known(&self, ix: usize) -> bool {
        self.costs[ix] != C::max_value()
    }
    /// Records `cost` if it is strictly lower than the current one.
    pub fn improve(&mut self, ix: usize, cost: C) -> bool {
        if cost < self.costs[ix] {
            self.costs[ix] = cost;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    fn holder(priority: u32, sequence: usize) -> SmallestCostHolder<u32> {
        SmallestCostHolder {
            priority,
            cost: 0,
            sequence,
            index: sequence,
        }
    }

    #[test]
    fn pops_lowest_priority_then_earliest_sequence() {
        let mut heap = BinaryHeap::new();
        for (p, s) in [(5, 0), (3, 1), (5, 2), (3, 3), (1, 4)] {
            heap.push(holder(p, s));
        }
        let order = std::iter::from_fn(|| heap.pop())
            .map(|h| h.sequence)
            .collect::<Vec<_>>();
        assert_eq!(order, vec![4, 1, 3, 0, 2]);
    }

    #[test]
    fn cost_map_defaults_to_infinity() {
        let mut costs: CostMap<u32> = CostMap::new(4, 2);
        assert_eq!(costs.get(2), 0);
        assert!(!costs.is_known(0));
        assert!(costs.improve(0, 7));
        assert!(!costs.improve(0, 7));
        assert!(costs.improve(0, 3));
        assert_eq!(costs.get(0), 3);
    }

    #[test]
    fn sequence_counter_increases() {
        let mut counter = SequenceCounter::default();
        let first = counter.next_sequence();
        assert_eq!(first, 0);
        assert_eq!(counter.next_sequence(), 1);
    }
}
