use crate::{
    ConfigError, DEFAULT_DIMENSION, FULLSCREEN_SCALE, MAX_DIMENSION, MIN_DIMENSION, WINDOWED_SCALE,
};

/// Validated construction parameters of a [Grid](crate::grid::Grid): the number of cells per
/// side and the pixel budget the grid is drawn in. Window state is passed in explicitly
/// instead of being read from the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    dimension: usize,
    pixel_budget: u32,
}

impl GridConfig {
    pub fn new(dimension: usize, pixel_budget: u32) -> Result<GridConfig, ConfigError> {
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&dimension) {
            return Err(ConfigError::DimensionOutOfRange(dimension));
        }
        if (pixel_budget as usize) < dimension {
            return Err(ConfigError::PixelBudgetTooSmall {
                budget: pixel_budget,
                dimension,
            });
        }
        Ok(GridConfig {
            dimension,
            pixel_budget,
        })
    }

    /// Pixel budget for a screen of the given size: a fixed share of its smaller side.
    pub fn pixel_budget_for_screen(width: u32, height: u32, fullscreen: bool) -> u32 {
        let scale = if fullscreen {
            FULLSCREEN_SCALE
        } else {
            WINDOWED_SCALE
        };
        (width.min(height) as f32 * scale) as u32
    }

    /// Configuration with the default dimension, fitted to a screen.
    pub fn fit_screen(
        width: u32,
        height: u32,
        fullscreen: bool,
    ) -> Result<GridConfig, ConfigError> {
        GridConfig::new(
            DEFAULT_DIMENSION,
            GridConfig::pixel_budget_for_screen(width, height, fullscreen),
        )
    }

    /// Same pixel budget, different dimension.
    pub fn with_dimension(self, dimension: usize) -> Result<GridConfig, ConfigError> {
        GridConfig::new(dimension, self.pixel_budget)
    }

    /// Same dimension, different pixel budget, e.g. after toggling fullscreen.
    pub fn with_pixel_budget(self, pixel_budget: u32) -> Result<GridConfig, ConfigError> {
        GridConfig::new(self.dimension, pixel_budget)
    }

    /// Maps the position of the size slider, as a fraction of its width, to a dimension.
    /// The fraction is clamped to `0..=1` and the result truncated.
    pub fn dimension_for_slider(fraction: f32) -> usize {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        MIN_DIMENSION + (fraction * (MAX_DIMENSION - MIN_DIMENSION) as f32) as usize
    }

    /// Inverse of [GridConfig::dimension_for_slider], for placing the slider handle.
    pub fn slider_fraction(&self) -> f32 {
        (self.dimension - MIN_DIMENSION) as f32 / (MAX_DIMENSION - MIN_DIMENSION) as f32
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }
    pub fn pixel_budget(&self) -> u32 {
        self.pixel_budget
    }
    /// Side length of a single cell in pixels.
    pub fn cell_size(&self) -> u32 {
        self.pixel_budget / self.dimension as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_dimensions() {
        assert_eq!(
            GridConfig::new(19, 800),
            Err(ConfigError::DimensionOutOfRange(19))
        );
        assert_eq!(
            GridConfig::new(81, 800),
            Err(ConfigError::DimensionOutOfRange(81))
        );
        assert!(GridConfig::new(20, 800).is_ok());
        assert!(GridConfig::new(80, 800).is_ok());
        assert_eq!(
            GridConfig::new(40, 39),
            Err(ConfigError::PixelBudgetTooSmall {
                budget: 39,
                dimension: 40
            })
        );
    }

    #[test]
    fn cell_size_rounds_down() {
        let config = GridConfig::new(40, 810).unwrap();
        assert_eq!(config.cell_size(), 20);
    }

    #[test]
    fn slider_maps_onto_dimension_range() {
        assert_eq!(GridConfig::dimension_for_slider(0.0), MIN_DIMENSION);
        assert_eq!(GridConfig::dimension_for_slider(1.0), MAX_DIMENSION);
        assert_eq!(GridConfig::dimension_for_slider(0.5), 50);
        assert_eq!(GridConfig::dimension_for_slider(-3.0), MIN_DIMENSION);
        assert_eq!(GridConfig::dimension_for_slider(7.0), MAX_DIMENSION);
        let config = GridConfig::new(50, 800).unwrap();
        assert!((config.slider_fraction() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn screen_fitting() {
        assert_eq!(GridConfig::pixel_budget_for_screen(1920, 1000, false), 800);
        assert_eq!(GridConfig::pixel_budget_for_screen(1920, 1000, true), 920);
        let config = GridConfig::fit_screen(1920, 1000, false).unwrap();
        assert_eq!(config.dimension(), DEFAULT_DIMENSION);
        assert_eq!(config.cell_size(), 20);
        assert_eq!(config.with_pixel_budget(920).unwrap().cell_size(), 23);
        assert!(config.with_dimension(10).is_err());
    }
}
