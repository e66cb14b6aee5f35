use std::collections::VecDeque;
use std::ops::ControlFlow;

use fxhash::FxHashSet;
use grid_util::point::Point;
use log::info;
use smallvec::SmallVec;

use crate::frontier::PredecessorMap;
use crate::grid::Grid;
use crate::solver::{Endpoints, GridSolver};
use crate::{Result, N_SMALLVEC_SIZE};

/// Breadth-first search. Cells are expanded in discovery order and enqueued at most once, which
/// yields shortest paths on a unit cost grid.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn search<F>(&self, grid: &mut Grid, start: Point, end: Point, mut on_step: F) -> Result<bool>
    where
        F: FnMut(&Grid) -> ControlFlow<()>,
    {
        let endpoints = Endpoints::new(grid, start, end)?;
        info!("BFS: searching from {:?} to {:?}", start, end);
        let mut predecessors = PredecessorMap::default();
        let mut discovered = FxHashSet::default();
        discovered.insert(endpoints.start);
        let mut queue = VecDeque::from([endpoints.start]);
        while let Some(index) = queue.pop_front() {
            if index == endpoints.end {
                return endpoints.finish(grid, &predecessors, self.name(), &mut on_step);
            }
            let neighbours =
                SmallVec::<[usize; N_SMALLVEC_SIZE]>::from_slice(grid.neighbours(index));
            for neighbour in neighbours {
                if discovered.insert(neighbour) {
                    predecessors.insert(neighbour, index);
                    endpoints.discover(grid, neighbour);
                    queue.push_back(neighbour);
                }
            }
            endpoints.settle(grid, index, &mut on_step)?;
        }
        endpoints.exhausted(grid, self.name())
    }
}
