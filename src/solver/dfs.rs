use std::ops::ControlFlow;

use fxhash::FxHashSet;
use grid_util::point::Point;
use log::info;
use smallvec::SmallVec;

use crate::frontier::PredecessorMap;
use crate::grid::Grid;
use crate::solver::{Endpoints, GridSolver};
use crate::{Result, N_SMALLVEC_SIZE};

/// Depth-first search on an explicit stack, expanding the most recently discovered cell first.
/// Every cell is pushed at most once. The path found is generally not a shortest one.
#[derive(Clone, Copy, Debug, Default)]
pub struct DfsSolver;

impl GridSolver for DfsSolver {
    fn name(&self) -> &'static str {
        "DFS"
    }

    fn search<F>(&self, grid: &mut Grid, start: Point, end: Point, mut on_step: F) -> Result<bool>
    where
        F: FnMut(&Grid) -> ControlFlow<()>,
    {
        let endpoints = Endpoints::new(grid, start, end)?;
        info!("DFS: searching from {:?} to {:?}", start, end);
        let mut predecessors = PredecessorMap::default();
        let mut discovered = FxHashSet::default();
        discovered.insert(endpoints.start);
        let mut stack = vec![endpoints.start];
        while let Some(index) = stack.pop() {
            if index == endpoints.end {
                return endpoints.finish(grid, &predecessors, self.name(), &mut on_step);
            }
            let neighbours =
                SmallVec::<[usize; N_SMALLVEC_SIZE]>::from_slice(grid.neighbours(index));
            for neighbour in neighbours {
                if discovered.insert(neighbour) {
                    predecessors.insert(neighbour, index);
                    endpoints.discover(grid, neighbour);
                    stack.push(neighbour);
                }
            }
            endpoints.settle(grid, index, &mut on_step)?;
        }
        endpoints.exhausted(grid, self.name())
    }
}
