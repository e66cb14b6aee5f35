use std::ops::ControlFlow;

use fxhash::FxHashSet;
use log::debug;

use crate::cell::CellState;
use crate::frontier::PredecessorMap;
use crate::grid::Grid;
use crate::solver::step;
use crate::Result;

/// Walks the predecessor map back from `end`, marking every cell on the way as
/// [CellState::Path] and invoking `on_step` after each mark so the path draws incrementally.
/// The walk ends at `start`, at the first cell without a predecessor, or at the first cell
/// seen twice if the map contains a cycle. Neither `end` nor `start` is marked.
///
/// Returns the number of cells marked, i.e. the number of cells strictly between start and
/// end on the path.
pub fn reconstruct_path<F>(
    grid: &mut Grid,
    predecessors: &PredecessorMap,
    start: usize,
    end: usize,
    mut on_step: F,
) -> Result<usize>
where
    F: FnMut(&Grid) -> ControlFlow<()>,
{
    let mut seen = FxHashSet::default();
    let chain = std::iter::successors(predecessors.get(&end).copied(), |ix| {
        predecessors.get(ix).copied()
    })
    .take_while(|&ix| ix != start && ix != end && seen.insert(ix))
    .collect::<Vec<usize>>();
    for &ix in &chain {
        grid.set_state_at(ix, CellState::Path);
        step(grid, &mut on_step)?;
    }
    debug!("Reconstructed path with {} intermediate cells", chain.len());
    Ok(chain.len())
}
