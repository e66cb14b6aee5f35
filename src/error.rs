use grid_util::point::Point;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Point {0:?} lies outside the grid")]
    OutOfBounds(Point),
    #[error("Endpoint {0:?} is a barrier")]
    BlockedEndpoint(Point),
    #[error("Barriers changed since the last adjacency refresh")]
    StaleAdjacency,
    #[error("A start and an end must be placed before running a search")]
    MissingEndpoint,
    #[error("Search was cancelled by the render callback")]
    Cancelled,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "Grid dimension {0} is outside of {min}..={max}",
        min = crate::MIN_DIMENSION,
        max = crate::MAX_DIMENSION
    )]
    DimensionOutOfRange(usize),
    #[error("Pixel budget {budget} leaves no room for {dimension} cells per side")]
    PixelBudgetTooSmall { budget: u32, dimension: usize },
}

pub type Result<T> = core::result::Result<T, SearchError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown algorithm {0:?}, expected one of A*, Dijkstra, BFS or DFS")]
pub struct UnknownAlgorithm(pub String);
