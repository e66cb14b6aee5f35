use grid_util::point::Point;
use smallvec::SmallVec;

use crate::N_SMALLVEC_SIZE;

/// Logical and visual state of a single [Cell]. Only [CellState::Barrier] affects search, the
/// other states exist so that a presentation layer can draw the progress of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Empty,
    Start,
    End,
    Barrier,
    /// Discovered but not yet processed.
    Frontier,
    /// Processed, its neighbours have been expanded.
    Visited,
    Path,
}

impl CellState {
    pub const ALL: [CellState; 7] = [
        CellState::Empty,
        CellState::Start,
        CellState::End,
        CellState::Barrier,
        CellState::Frontier,
        CellState::Visited,
        CellState::Path,
    ];

    /// RGB fill colour used by the visualizer for this state.
    pub fn color(self) -> [u8; 3] {
        match self {
            CellState::Empty => [255, 255, 255],
            CellState::Start => [255, 165, 0],
            CellState::End => [128, 0, 128],
            CellState::Barrier => [0, 0, 0],
            CellState::Frontier => [0, 102, 255],
            CellState::Visited => [255, 0, 0],
            CellState::Path => [255, 255, 0],
        }
    }

    /// Single character used when printing a grid.
    pub fn glyph(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Start => 'S',
            CellState::End => 'E',
            CellState::Barrier => '#',
            CellState::Frontier => 'o',
            CellState::Visited => 'x',
            CellState::Path => '*',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<CellState> {
        CellState::ALL.into_iter().find(|s| s.glyph() == glyph)
    }

    /// Legend label shown next to the colour swatch.
    pub fn label(self) -> &'static str {
        match self {
            CellState::Empty => "Empty",
            CellState::Start => "Start",
            CellState::End => "End",
            CellState::Barrier => "Barrier",
            CellState::Frontier => "Open Set",
            CellState::Visited => "Closed Set",
            CellState::Path => "Path",
        }
    }

    /// States written by a search run, as opposed to states painted by the user.
    pub fn is_search_mark(self) -> bool {
        matches!(
            self,
            CellState::Frontier | CellState::Visited | CellState::Path
        )
    }
}

/// A single grid position. The pixel origin is derived from the row, column and cell size at
/// construction. The cached neighbour list is only meaningful after
/// [Grid::refresh_adjacency](crate::grid::Grid::refresh_adjacency).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub x: u32,
    pub y: u32,
    pub size: u32,
    state: CellState,
    pub(crate) neighbours: SmallVec<[usize; N_SMALLVEC_SIZE]>,
}

impl Cell {
    pub fn new(row: usize, col: usize, size: u32) -> Cell {
        Cell {
            row,
            col,
            x: col as u32 * size,
            y: row as u32 * size,
            size,
            state: CellState::Empty,
            neighbours: SmallVec::new(),
        }
    }
    /// Grid coordinate of this cell, with `x` the column and `y` the row.
    pub fn point(&self) -> Point {
        Point::new(self.col as i32, self.row as i32)
    }
    pub fn state(&self) -> CellState {
        self.state
    }
    pub(crate) fn set_state(&mut self, state: CellState) {
        self.state = state;
    }
    /// Indices of the non-barrier orthogonal neighbours as of the last adjacency refresh.
    pub fn neighbours(&self) -> &[usize] {
        &self.neighbours
    }
    pub fn is_barrier(&self) -> bool {
        self.state == CellState::Barrier
    }
    pub fn is_start(&self) -> bool {
        self.state == CellState::Start
    }
    pub fn is_end(&self) -> bool {
        self.state == CellState::End
    }
    pub fn color(&self) -> [u8; 3] {
        self.state.color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_origin_follows_row_and_column() {
        let cell = Cell::new(3, 5, 12);
        assert_eq!((cell.x, cell.y), (60, 36));
        assert_eq!(cell.point(), Point::new(5, 3));
        assert_eq!(cell.state(), CellState::Empty);
        assert!(cell.neighbours().is_empty());
    }

    #[test]
    fn glyphs_are_unique() {
        for state in CellState::ALL {
            assert_eq!(CellState::from_glyph(state.glyph()), Some(state));
        }
        assert_eq!(CellState::from_glyph('?'), None);
    }
}
