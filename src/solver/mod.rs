use core::fmt;
use std::ops::ControlFlow;
use std::str::FromStr;

use grid_util::point::Point;
use log::{info, warn};

use crate::cell::CellState;
use crate::frontier::PredecessorMap;
use crate::grid::Grid;
use crate::path::reconstruct_path;
use crate::{Result, SearchError, UnknownAlgorithm};

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;

use astar::AstarSolver;
use bfs::BfsSolver;
use dfs::DfsSolver;
use dijkstra::DijkstraSolver;

/// A search over a [Grid] that reports its progress through a render callback.
///
/// `on_step` is invoked once per processed cell, after its neighbours have been expanded, and
/// once per cell marked during path reconstruction. It gets a shared view of the grid to draw
/// from. Returning [ControlFlow::Break] cancels the run: no further cells are touched and
/// [SearchError::Cancelled] is returned.
///
/// Returns `Ok(true)` if `end` was reached, in which case the path has been marked and `end`
/// is marked [CellState::End] again. `Ok(false)` means the frontier ran dry, there is no path.
pub trait GridSolver {
    fn name(&self) -> &'static str;

    /// Estimated remaining cost from `p1` to `p2`. Uninformed solvers use zero.
    fn heuristic(&self, _p1: &Point, _p2: &Point) -> u32 {
        0
    }

    fn search<F>(&self, grid: &mut Grid, start: Point, end: Point, on_step: F) -> Result<bool>
    where
        F: FnMut(&Grid) -> ControlFlow<()>;
}

/// Runs the render callback once, mapping a break into [SearchError::Cancelled].
pub(crate) fn step<F>(grid: &Grid, on_step: &mut F) -> Result<()>
where
    F: FnMut(&Grid) -> ControlFlow<()>,
{
    match on_step(grid) {
        ControlFlow::Continue(()) => Ok(()),
        ControlFlow::Break(()) => {
            info!("Search cancelled by render callback");
            Err(SearchError::Cancelled)
        }
    }
}

/// Validated start and end of a single run, as cell indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Endpoints {
    pub start: usize,
    pub end: usize,
}

impl Endpoints {
    /// Checks the preconditions shared by every solver before anything is mutated.
    pub fn new(grid: &Grid, start: Point, end: Point) -> Result<Endpoints> {
        let endpoints = Endpoints {
            start: endpoint_index(grid, start)?,
            end: endpoint_index(grid, end)?,
        };
        if grid.adjacency_dirty() {
            warn!("Adjacency is stale, refusing to search");
            return Err(SearchError::StaleAdjacency);
        }
        Ok(endpoints)
    }

    fn is_endpoint(&self, ix: usize) -> bool {
        ix == self.start || ix == self.end
    }

    /// Colours a newly discovered cell as frontier. The endpoints keep their own marking.
    pub fn discover(&self, grid: &mut Grid, ix: usize) {
        if !self.is_endpoint(ix) {
            grid.set_state_at(ix, CellState::Frontier);
        }
    }

    /// Colours a processed cell as visited and hands the frame to the render callback.
    pub fn settle<F>(&self, grid: &mut Grid, ix: usize, on_step: &mut F) -> Result<()>
    where
        F: FnMut(&Grid) -> ControlFlow<()>,
    {
        if !self.is_endpoint(ix) {
            grid.set_state_at(ix, CellState::Visited);
        }
        step(grid, on_step)
    }

    /// Draws the path to `end` and restores the end marking.
    pub fn finish<F>(
        &self,
        grid: &mut Grid,
        predecessors: &PredecessorMap,
        name: &str,
        on_step: &mut F,
    ) -> Result<bool>
    where
        F: FnMut(&Grid) -> ControlFlow<()>,
    {
        let marked = reconstruct_path(grid, predecessors, self.start, self.end, &mut *on_step)?;
        grid.set_state_at(self.end, CellState::End);
        info!(
            "{}: reached {:?} with {} steps",
            name,
            grid.point(self.end),
            if self.start == self.end { 0 } else { marked + 1 }
        );
        Ok(true)
    }

    pub fn exhausted(&self, grid: &Grid, name: &str) -> Result<bool> {
        warn!(
            "{}: frontier exhausted, {:?} is not reachable from {:?}",
            name,
            grid.point(self.end),
            grid.point(self.start)
        );
        Ok(false)
    }
}

fn endpoint_index(grid: &Grid, point: Point) -> Result<usize> {
    let ix = grid.index(point).ok_or_else(|| {
        warn!("Endpoint {:?} lies outside the grid", point);
        SearchError::OutOfBounds(point)
    })?;
    if grid.cell_at(ix).is_barrier() {
        warn!("Endpoint {:?} is a barrier", point);
        return Err(SearchError::BlockedEndpoint(point));
    }
    Ok(ix)
}

/// The four interchangeable solvers, as offered by the visualizer's toolbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    #[default]
    AStar,
    Dijkstra,
    BreadthFirst,
    DepthFirst,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::AStar,
        Algorithm::Dijkstra,
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::AStar => AstarSolver.name(),
            Algorithm::Dijkstra => DijkstraSolver.name(),
            Algorithm::BreadthFirst => BfsSolver.name(),
            Algorithm::DepthFirst => DfsSolver.name(),
        }
    }

    /// Selection by the number keys 1 to 4.
    pub fn from_key(key: u8) -> Option<Algorithm> {
        key.checked_sub(1)
            .and_then(|i| Algorithm::ALL.get(i as usize).copied())
    }

    /// Whether the solver is guaranteed to find a shortest path.
    pub fn is_optimal(self) -> bool {
        self != Algorithm::DepthFirst
    }

    pub fn run<F>(self, grid: &mut Grid, start: Point, end: Point, on_step: F) -> Result<bool>
    where
        F: FnMut(&Grid) -> ControlFlow<()>,
    {
        match self {
            Algorithm::AStar => AstarSolver.search(grid, start, end, on_step),
            Algorithm::Dijkstra => DijkstraSolver.search(grid, start, end, on_step),
            Algorithm::BreadthFirst => BfsSolver.search(grid, start, end, on_step),
            Algorithm::DepthFirst => DfsSolver.search(grid, start, end, on_step),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> core::result::Result<Algorithm, UnknownAlgorithm> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a*" | "astar" | "a_star" => Ok(Algorithm::AStar),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "bfs" | "breadth-first" => Ok(Algorithm::BreadthFirst),
            "dfs" | "depth-first" => Ok(Algorithm::DepthFirst),
            _ => Err(UnknownAlgorithm(s.to_owned())),
        }
    }
}
