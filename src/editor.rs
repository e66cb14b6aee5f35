//! Editing session behind the visualizer: the grid being painted, the current paint mode and
//! algorithm, and the bookkeeping that keeps at most one start and one end on the grid.
use std::ops::ControlFlow;

use grid_util::point::Point;
use log::info;

use crate::config::GridConfig;
use crate::grid::Grid;
use crate::solver::Algorithm;
use crate::{ConfigError, Result, SearchError};

/// What a primary click or drag on the grid does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PaintMode {
    Start,
    End,
    #[default]
    Barrier,
    Erase,
}

#[derive(Clone, Debug)]
pub struct Editor {
    config: GridConfig,
    grid: Grid,
    start: Option<Point>,
    end: Option<Point>,
    pub mode: PaintMode,
    pub algorithm: Algorithm,
}

impl Editor {
    pub fn new(config: GridConfig) -> Editor {
        Editor {
            config,
            grid: Grid::new(config.dimension(), config.pixel_budget()),
            start: None,
            end: None,
            mode: PaintMode::default(),
            algorithm: Algorithm::default(),
        }
    }
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    pub fn config(&self) -> GridConfig {
        self.config
    }
    pub fn start(&self) -> Option<Point> {
        self.start
    }
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Maps a pixel position inside the grid area to the cell under it.
    pub fn cell_at_pixel(&self, x: u32, y: u32) -> Option<Point> {
        let size = self.grid.cell_size();
        if size == 0 {
            return None;
        }
        let point = Point::new((x / size) as i32, (y / size) as i32);
        self.grid.in_bounds(point).then_some(point)
    }

    /// Primary click on a cell, applying the current paint mode.
    pub fn click(&mut self, point: Point) {
        if !self.grid.in_bounds(point) {
            return;
        }
        match self.mode {
            PaintMode::Start => {
                if let Some(old) = self.start.replace(point) {
                    self.grid.reset(old);
                }
                self.forget(point, false);
                self.grid.mark_start(point);
            }
            PaintMode::End => {
                if let Some(old) = self.end.replace(point) {
                    self.grid.reset(old);
                }
                self.forget(point, true);
                self.grid.mark_end(point);
            }
            PaintMode::Barrier => self.paint_barrier(point),
            PaintMode::Erase => self.erase(point),
        }
    }

    /// Primary button dragged over a cell. Only barrier and erase strokes paint while dragging.
    pub fn drag(&mut self, point: Point) {
        match self.mode {
            PaintMode::Barrier => self.paint_barrier(point),
            PaintMode::Erase => self.erase(point),
            PaintMode::Start | PaintMode::End => {}
        }
    }

    /// Clears a cell, forgetting it if it was the start or the end. Also bound to the
    /// secondary button regardless of the paint mode.
    pub fn erase(&mut self, point: Point) {
        if !self.grid.in_bounds(point) {
            return;
        }
        if self.start == Some(point) {
            self.start = None;
        }
        if self.end == Some(point) {
            self.end = None;
        }
        self.grid.reset(point);
    }

    fn paint_barrier(&mut self, point: Point) {
        let Some(cell) = self.grid.cell(point) else {
            return;
        };
        if cell.is_start() || cell.is_end() {
            return;
        }
        self.grid.mark_barrier(point);
    }

    /// Drops the other endpoint when a new start or end lands on it.
    fn forget(&mut self, point: Point, placing_end: bool) {
        if placing_end && self.start == Some(point) {
            self.start = None;
        } else if !placing_end && self.end == Some(point) {
            self.end = None;
        }
    }

    /// Rebuilds the grid at the same size, dropping every mark.
    pub fn clear(&mut self) {
        self.grid = Grid::new(self.config.dimension(), self.config.pixel_budget());
        self.start = None;
        self.end = None;
    }

    /// Rebuilds the grid with a new number of cells per side. All painted state is lost.
    pub fn resize(&mut self, dimension: usize) -> core::result::Result<(), ConfigError> {
        self.reconfigure(self.config.with_dimension(dimension)?);
        Ok(())
    }

    /// Rebuilds the grid for a new configuration, e.g. after the window was resized.
    pub fn reconfigure(&mut self, config: GridConfig) {
        info!(
            "Rebuilding {0}x{0} grid with {1}px cells",
            config.dimension(),
            config.cell_size()
        );
        self.config = config;
        self.clear();
    }

    /// Runs the selected algorithm from the start to the end. Marks of a previous run are
    /// cleared and adjacency is refreshed first.
    pub fn run<F>(&mut self, on_step: F) -> Result<bool>
    where
        F: FnMut(&Grid) -> ControlFlow<()>,
    {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return Err(SearchError::MissingEndpoint);
        };
        self.grid.clear_search_marks();
        self.grid.update();
        let n = self.grid.dimension();
        info!("Running {} on {}x{} grid", self.algorithm, n, n);
        self.algorithm.run(&mut self.grid, start, end, on_step)
    }

    /// True if start and end are placed and connected, without running a search.
    pub fn path_exists(&mut self) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => {
                self.grid.update();
                self.grid.reachable(start, end)
            }
            _ => false,
        }
    }
}
