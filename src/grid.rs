use core::fmt;

use grid_util::point::Point;
use itertools::{iproduct, Itertools};
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::cell::{Cell, CellState};
use crate::N_SMALLVEC_SIZE;

/// Orthogonal offsets in the order neighbours are listed: down, up, right, left.
const NEUMANN_OFFSETS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// [Grid] owns a square, row-major matrix of [Cell]s. Cells are identified by their index,
/// which is stable for the lifetime of the grid; resizing means building a new grid.
///
/// Adjacency is cached per cell and computed on demand by [Grid::refresh_adjacency]. Any
/// change to whether a cell is a barrier flags the cache as dirty, which is checked by the
/// solvers before a run. Connected components are kept in a [UnionFind] for fast
/// reachability queries that do not touch cell states.
#[derive(Clone, Debug)]
pub struct Grid {
    dimension: usize,
    cell_size: u32,
    cells: Vec<Cell>,
    adjacency_dirty: bool,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Grid {
    /// Allocates `dimension`² empty cells. The size of a cell is the pixel budget divided by the
    /// dimension, rounded down.
    pub fn new(dimension: usize, pixel_budget: u32) -> Grid {
        let cell_size = pixel_budget / dimension.max(1) as u32;
        let cells = iproduct!(0..dimension, 0..dimension)
            .map(|(row, col)| Cell::new(row, col, cell_size))
            .collect::<Vec<_>>();
        Grid {
            dimension,
            cell_size,
            cells,
            adjacency_dirty: true,
            components: UnionFind::new(dimension * dimension),
            components_dirty: true,
        }
    }
    pub fn dimension(&self) -> usize {
        self.dimension
    }
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.dimension
            && (point.y as usize) < self.dimension
    }
    /// Row-major index of a point, [None] when out of bounds.
    pub fn index(&self, point: Point) -> Option<usize> {
        self.in_bounds(point)
            .then(|| point.y as usize * self.dimension + point.x as usize)
    }
    pub fn point(&self, ix: usize) -> Point {
        Point::new((ix % self.dimension) as i32, (ix / self.dimension) as i32)
    }
    pub fn cell(&self, point: Point) -> Option<&Cell> {
        self.index(point).map(|ix| &self.cells[ix])
    }
    pub fn cell_at(&self, ix: usize) -> &Cell {
        &self.cells[ix]
    }
    pub fn state(&self, point: Point) -> Option<CellState> {
        self.cell(point).map(Cell::state)
    }
    pub fn state_at(&self, ix: usize) -> CellState {
        self.cells[ix].state()
    }
    /// First cell, in row-major order, holding the given state.
    pub fn find(&self, state: CellState) -> Option<Point> {
        self.cells
            .iter()
            .find(|c| c.state() == state)
            .map(Cell::point)
    }
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state() == state).count()
    }
    pub fn adjacency_dirty(&self) -> bool {
        self.adjacency_dirty
    }

    /// Sets the state of a cell, flagging adjacency and components as dirty if the cell
    /// became or stopped being a barrier. Out of bounds points are ignored.
    ///
    /// This is a plain setter: keeping at most one start and one end is up to the caller.
    pub fn set_state(&mut self, point: Point, state: CellState) {
        if let Some(ix) = self.index(point) {
            self.set_state_at(ix, state);
        }
    }
    pub fn set_state_at(&mut self, ix: usize, state: CellState) {
        let cell = &mut self.cells[ix];
        if cell.is_barrier() != (state == CellState::Barrier) {
            self.adjacency_dirty = true;
            self.components_dirty = true;
        }
        cell.set_state(state);
    }
    pub fn mark_start(&mut self, point: Point) {
        self.set_state(point, CellState::Start);
    }
    pub fn mark_end(&mut self, point: Point) {
        self.set_state(point, CellState::End);
    }
    pub fn mark_barrier(&mut self, point: Point) {
        self.set_state(point, CellState::Barrier);
    }
    pub fn mark_frontier(&mut self, point: Point) {
        self.set_state(point, CellState::Frontier);
    }
    pub fn mark_visited(&mut self, point: Point) {
        self.set_state(point, CellState::Visited);
    }
    pub fn mark_path(&mut self, point: Point) {
        self.set_state(point, CellState::Path);
    }
    pub fn reset(&mut self, point: Point) {
        self.set_state(point, CellState::Empty);
    }

    /// Resets every frontier, visited and path mark left by a previous run. Start, end and
    /// barriers are kept.
    pub fn clear_search_marks(&mut self) {
        for cell in self.cells.iter_mut() {
            if cell.state().is_search_mark() {
                cell.set_state(CellState::Empty);
            }
        }
    }

    /// In-bounds orthogonal neighbours of a point, regardless of their state.
    pub fn neumann_neighbourhood(&self, point: Point) -> SmallVec<[usize; N_SMALLVEC_SIZE]> {
        NEUMANN_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| self.index(Point::new(point.x + dx, point.y + dy)))
            .collect()
    }
    /// Cached non-barrier neighbours of the cell at `ix`.
    pub fn neighbours(&self, ix: usize) -> &[usize] {
        self.cells[ix].neighbours()
    }

    /// Recomputes the neighbour list of every cell as its in-bounds orthogonal neighbours that
    /// are not barriers. Must be called before a search whenever barriers changed.
    pub fn refresh_adjacency(&mut self) {
        debug!("Refreshing adjacency of {0}x{0} grid", self.dimension);
        for ix in 0..self.cells.len() {
            let neighbours = self
                .neumann_neighbourhood(self.point(ix))
                .into_iter()
                .filter(|&n| !self.cells[n].is_barrier())
                .collect();
            self.cells[ix].neighbours = neighbours;
        }
        self.adjacency_dirty = false;
    }

    /// Refreshes adjacency and components, but only the parts that are marked as dirty.
    pub fn update(&mut self) {
        if self.adjacency_dirty {
            self.refresh_adjacency();
        }
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up non-barrier orthogonal neighbours to
    /// the same components.
    pub fn generate_components(&mut self) {
        debug!("Generating connected components");
        let n = self.dimension;
        self.components = UnionFind::new(n * n);
        self.components_dirty = false;
        for (row, col) in iproduct!(0..n, 0..n) {
            let ix = row * n + col;
            if self.cells[ix].is_barrier() {
                continue;
            }
            // Linking right and down is enough to cover every edge once.
            if col + 1 < n && !self.cells[ix + 1].is_barrier() {
                self.components.union(ix, ix + 1);
            }
            if row + 1 < n && !self.cells[ix + n].is_barrier() {
                self.components.union(ix, ix + n);
            }
        }
    }

    /// Checks if start and goal are on the same component. Components have to be up to date,
    /// see [Grid::update].
    pub fn reachable(&self, start: Point, goal: Point) -> bool {
        match (self.index(start), self.index(goal)) {
            (Some(s), Some(g)) => self.components.equiv(s, g),
            _ => false,
        }
    }
    pub fn unreachable(&self, start: Point, goal: Point) -> bool {
        !self.reachable(start, goal)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.dimension.max(1)) {
            writeln!(f, "{}", row.iter().map(|c| c.state().glyph()).join(""))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbour_points(grid: &Grid, p: Point) -> Vec<Point> {
        let ix = grid.index(p).unwrap();
        grid.neighbours(ix).iter().map(|&n| grid.point(n)).collect()
    }

    #[test]
    fn build_allocates_empty_cells() {
        let grid = Grid::new(20, 600);
        assert_eq!(grid.len(), 400);
        assert_eq!(grid.cell_size(), 30);
        assert_eq!(grid.count(CellState::Empty), 400);
        let cell = grid.cell(Point::new(4, 7)).unwrap();
        assert_eq!((cell.row, cell.col), (7, 4));
        assert_eq!((cell.x, cell.y), (120, 210));
        assert!(grid.adjacency_dirty());
    }

    #[test]
    fn index_roundtrip_and_bounds() {
        let grid = Grid::new(5, 50);
        assert_eq!(grid.index(Point::new(3, 2)), Some(13));
        assert_eq!(grid.point(13), Point::new(3, 2));
        assert_eq!(grid.index(Point::new(-1, 0)), None);
        assert_eq!(grid.index(Point::new(0, 5)), None);
    }

    #[test]
    fn adjacency_excludes_barriers_and_bounds() {
        //  ___
        // |.#.|
        // |...|
        // |...|
        //  ___
        let mut grid = Grid::new(3, 30);
        grid.mark_barrier(Point::new(1, 0));
        grid.refresh_adjacency();
        assert_eq!(neighbour_points(&grid, Point::new(0, 0)), vec![Point::new(0, 1)]);
        assert_eq!(
            neighbour_points(&grid, Point::new(1, 1)),
            vec![Point::new(1, 2), Point::new(2, 1), Point::new(0, 1)]
        );
        assert_eq!(neighbour_points(&grid, Point::new(1, 2)).len(), 3);
    }

    #[test]
    fn refresh_is_idempotent() {
        let mut grid = Grid::new(6, 60);
        grid.mark_barrier(Point::new(2, 2));
        grid.mark_barrier(Point::new(3, 1));
        grid.refresh_adjacency();
        let first = grid.cells().to_vec();
        grid.refresh_adjacency();
        assert_eq!(first, grid.cells());
    }

    #[test]
    fn only_barrier_changes_dirty_adjacency() {
        let mut grid = Grid::new(4, 40);
        grid.refresh_adjacency();
        grid.mark_frontier(Point::new(1, 1));
        grid.mark_visited(Point::new(1, 1));
        grid.mark_start(Point::new(0, 0));
        assert!(!grid.adjacency_dirty());
        grid.mark_barrier(Point::new(2, 2));
        assert!(grid.adjacency_dirty());
        grid.update();
        assert!(!grid.adjacency_dirty());
        grid.reset(Point::new(2, 2));
        assert!(grid.adjacency_dirty());
    }

    #[test]
    fn clear_search_marks_keeps_painted_cells() {
        let mut grid = Grid::new(4, 40);
        grid.mark_start(Point::new(0, 0));
        grid.mark_end(Point::new(3, 3));
        grid.mark_barrier(Point::new(1, 1));
        grid.mark_frontier(Point::new(2, 0));
        grid.mark_visited(Point::new(3, 0));
        grid.mark_path(Point::new(0, 3));
        grid.clear_search_marks();
        assert_eq!(grid.find(CellState::Start), Some(Point::new(0, 0)));
        assert_eq!(grid.find(CellState::End), Some(Point::new(3, 3)));
        assert_eq!(grid.count(CellState::Barrier), 1);
        assert_eq!(grid.count(CellState::Empty), 13);
    }

    /// Tests whether points are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        //  ___
        // |.#.|
        // |.#.|
        //  ___
        let mut grid = Grid::new(3, 30);
        grid.mark_barrier(Point::new(1, 0));
        grid.mark_barrier(Point::new(1, 1));
        grid.update();
        assert!(grid.reachable(Point::new(0, 0), Point::new(0, 2)));
        assert!(grid.reachable(Point::new(0, 0), Point::new(2, 0)));
        grid.mark_barrier(Point::new(1, 2));
        grid.update();
        assert!(grid.unreachable(Point::new(0, 0), Point::new(2, 0)));
        assert!(grid.unreachable(Point::new(0, 0), Point::new(1, 0)));
        assert!(grid.unreachable(Point::new(0, 0), Point::new(9, 9)));
    }

    /// Asserts that diagonal contact does not connect components on a 4-grid.
    #[test]
    fn diagonal_contact_is_not_reachable() {
        //  __
        // |.#|
        // |#.|
        //  __
        let mut grid = Grid::new(2, 20);
        grid.mark_barrier(Point::new(1, 0));
        grid.mark_barrier(Point::new(0, 1));
        grid.update();
        assert!(grid.unreachable(Point::new(0, 0), Point::new(1, 1)));
    }

    #[test]
    fn display_uses_glyphs() {
        let mut grid = Grid::new(3, 30);
        grid.mark_start(Point::new(0, 0));
        grid.mark_end(Point::new(2, 2));
        grid.mark_barrier(Point::new(1, 1));
        assert_eq!(grid.to_string(), "S..\n.#.\n..E\n");
    }
}
