use std::collections::BinaryHeap;
use std::ops::ControlFlow;

use fxhash::FxHashSet;
use grid_util::point::Point;
use log::info;
use smallvec::SmallVec;

use crate::frontier::{CostMap, PredecessorMap, SequenceCounter, SmallestCostHolder};
use crate::grid::Grid;
use crate::solver::{Endpoints, GridSolver};
use crate::{Result, EDGE_COST, N_SMALLVEC_SIZE};

/// A* with the Manhattan distance as heuristic. Frontier entries are keyed by f-score and
/// then by insertion sequence, so among equally promising cells the one discovered first is
/// expanded first and runs are reproducible.
///
/// A cell whose g-score strictly improves is pushed again without removing its old entry.
/// Entries of cells that were already expanded are skipped when popped.
#[derive(Clone, Copy, Debug, Default)]
pub struct AstarSolver;

impl GridSolver for AstarSolver {
    fn name(&self) -> &'static str {
        "A*"
    }

    /// Manhattan distance, admissible and consistent for unit cost 4-directional moves.
    fn heuristic(&self, p1: &Point, p2: &Point) -> u32 {
        p1.manhattan_distance(p2) as u32
    }

    fn search<F>(&self, grid: &mut Grid, start: Point, end: Point, mut on_step: F) -> Result<bool>
    where
        F: FnMut(&Grid) -> ControlFlow<()>,
    {
        let endpoints = Endpoints::new(grid, start, end)?;
        info!("A*: searching from {:?} to {:?}", start, end);
        let mut sequence = SequenceCounter::default();
        let mut g_score: CostMap<u32> = CostMap::new(grid.len(), endpoints.start);
        let mut predecessors = PredecessorMap::default();
        let mut closed = FxHashSet::default();
        let mut to_see = BinaryHeap::new();
        to_see.push(SmallestCostHolder {
            priority: self.heuristic(&start, &end),
            cost: 0,
            sequence: sequence.next_sequence(),
            index: endpoints.start,
        });
        while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
            // Entries left behind by a later improvement carry a higher cost than the one
            // recorded, entries of expanded cells are caught by the closed set.
            if cost > g_score.get(index) || !closed.insert(index) {
                continue;
            }
            if index == endpoints.end {
                return endpoints.finish(grid, &predecessors, self.name(), &mut on_step);
            }
            let neighbours =
                SmallVec::<[usize; N_SMALLVEC_SIZE]>::from_slice(grid.neighbours(index));
            for neighbour in neighbours {
                let tentative = cost + EDGE_COST;
                let known = g_score.is_known(neighbour);
                if !g_score.improve(neighbour, tentative) {
                    continue;
                }
                predecessors.insert(neighbour, index);
                if !known {
                    endpoints.discover(grid, neighbour);
                }
                to_see.push(SmallestCostHolder {
                    priority: tentative + self.heuristic(&grid.point(neighbour), &end),
                    cost: tentative,
                    sequence: sequence.next_sequence(),
                    index: neighbour,
                });
            }
            endpoints.settle(grid, index, &mut on_step)?;
        }
        endpoints.exhausted(grid, self.name())
    }
}
