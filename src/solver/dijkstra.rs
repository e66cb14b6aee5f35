use std::collections::BinaryHeap;
use std::ops::ControlFlow;

use grid_util::point::Point;
use log::info;
use smallvec::SmallVec;

use crate::frontier::{CostMap, PredecessorMap, SequenceCounter, SmallestCostHolder};
use crate::grid::Grid;
use crate::solver::{Endpoints, GridSolver};
use crate::{Result, EDGE_COST, N_SMALLVEC_SIZE};

/// Uniform cost search keyed on the accumulated path length. A cell is pushed again whenever a
/// strictly cheaper way to it is found; outdated entries are recognised by their cost.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn search<F>(&self, grid: &mut Grid, start: Point, end: Point, mut on_step: F) -> Result<bool>
    where
        F: FnMut(&Grid) -> ControlFlow<()>,
    {
        let endpoints = Endpoints::new(grid, start, end)?;
        info!("Dijkstra: searching from {:?} to {:?}", start, end);
        let mut sequence = SequenceCounter::default();
        let mut dist: CostMap<u32> = CostMap::new(grid.len(), endpoints.start);
        let mut predecessors = PredecessorMap::default();
        let mut to_see = BinaryHeap::new();
        to_see.push(SmallestCostHolder {
            priority: 0,
            cost: 0,
            sequence: sequence.next_sequence(),
            index: endpoints.start,
        });
        while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
            // We may have inserted a cell several times into the binary heap if we found
            // a better way to access it. Only the entry matching the best cost is processed.
            if cost > dist.get(index) {
                continue;
            }
            if index == endpoints.end {
                return endpoints.finish(grid, &predecessors, self.name(), &mut on_step);
            }
            let neighbours =
                SmallVec::<[usize; N_SMALLVEC_SIZE]>::from_slice(grid.neighbours(index));
            for neighbour in neighbours {
                let new_cost = cost + EDGE_COST;
                let known = dist.is_known(neighbour);
                if !dist.improve(neighbour, new_cost) {
                    continue;
                }
                predecessors.insert(neighbour, index);
                if !known {
                    endpoints.discover(grid, neighbour);
                }
                to_see.push(SmallestCostHolder {
                    priority: new_cost + self.heuristic(&grid.point(neighbour), &end),
                    cost: new_cost,
                    sequence: sequence.next_sequence(),
                    index: neighbour,
                });
            }
            endpoints.settle(grid, index, &mut on_step)?;
        }
        endpoints.exhausted(grid, self.name())
    }
}
