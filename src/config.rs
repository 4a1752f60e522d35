//! Configuration consumed by the [`Shell`](crate::Shell).

use crate::error::{Error, Result};
use std::time::Duration;

/// Display and input settings of a running shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Whether touches toggle cells
    pub touch_enabled: bool,
    /// Whether the grid is drawn between cells
    pub draw_grid: bool,
    /// Whether neighbor counts are drawn in every cell
    pub draw_numbers: bool,
    /// Delay between two ticks
    pub period: Duration,
    /// Pixels per cell side
    pub cell_size: u32,
}

impl Config {
    pub const DEFAULT_PERIOD: Duration = Duration::from_millis(300);
    pub const DEFAULT_CELL_SIZE: u32 = 50;

    pub fn validate(&self) -> Result<()> {
        if self.period.is_zero() {
            return Err(Error::ZeroPeriod);
        }
        if self.cell_size == 0 {
            return Err(Error::ZeroCellSize);
        }
        if i32::try_from(self.cell_size).is_err() {
            return Err(Error::CellSizeTooLarge(self.cell_size));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            touch_enabled: true,
            draw_grid: true,
            draw_numbers: false,
            period: Self::DEFAULT_PERIOD,
            cell_size: Self::DEFAULT_CELL_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_period() {
        let config = Config {
            period: Duration::ZERO,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(Error::ZeroPeriod));
    }

    #[test]
    fn rejects_zero_cell_size() {
        let config = Config {
            cell_size: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(Error::ZeroCellSize));
    }

    #[test]
    fn rejects_cell_size_beyond_pixel_range() {
        let config = Config {
            cell_size: u32::MAX,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(Error::CellSizeTooLarge(u32::MAX)));

        let largest = Config {
            cell_size: i32::MAX as u32,
            ..Config::default()
        };
        assert_eq!(largest.validate(), Ok(()));
    }
}
