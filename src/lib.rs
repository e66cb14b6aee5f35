//! # grid_search_viz
//!
//! The search core of an interactive grid pathfinding visualizer. A square [Grid](grid::Grid) of
//! [Cell](cell::Cell)s is painted with a start, an end and barriers, after which one of four
//! solvers ([A*](https://en.wikipedia.org/wiki/A*_search_algorithm),
//! [Dijkstra](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm), breadth-first and
//! depth-first) explores it one cell at a time. Every processed cell is handed to a render
//! callback, which is also where a caller can cancel a running search.
//!
//! Movement is 4-directional with unit edge cost. The Manhattan distance is therefore an
//! admissible and consistent heuristic, so A*, Dijkstra and breadth-first search all produce
//! shortest paths; depth-first search does not.
//!
//! ```
//! use grid_search_viz::{grid::Grid, solver::Algorithm};
//! use grid_util::point::Point;
//! use std::ops::ControlFlow;
//!
//! let mut grid = Grid::new(5, 100);
//! let (start, end) = (Point::new(0, 0), Point::new(4, 4));
//! grid.mark_start(start);
//! grid.mark_end(end);
//! grid.refresh_adjacency();
//! let found = Algorithm::AStar
//!     .run(&mut grid, start, end, |_| ControlFlow::Continue(()))
//!     .unwrap();
//! assert!(found);
//! ```
pub mod cancel;
pub mod cell;
pub mod config;
pub mod editor;
pub mod error;
pub mod frontier;
pub mod grid;
pub mod path;
pub mod solver;

use std::time::Duration;

pub use error::{ConfigError, Result, SearchError, UnknownAlgorithm};

/// Smallest grid dimension the editor accepts.
pub const MIN_DIMENSION: usize = 20;
/// Largest grid dimension the editor accepts.
pub const MAX_DIMENSION: usize = 80;
pub const DEFAULT_DIMENSION: usize = 40;
/// How long a presentation layer should hold the "no path" result before accepting input again.
pub const NO_PATH_HOLD: Duration = Duration::from_secs(2);
/// Share of the smaller screen side used for the grid in fullscreen mode.
pub const FULLSCREEN_SCALE: f32 = 0.92;
/// Share of the smaller screen side used for the grid in windowed mode.
pub const WINDOWED_SCALE: f32 = 0.8;
/// Cost of moving to an orthogonal neighbour.
pub const EDGE_COST: u32 = 1;
/// Upper bound on orthogonal neighbours, used to size the inline adjacency storage.
pub const N_SMALLVEC_SIZE: usize = 4;
