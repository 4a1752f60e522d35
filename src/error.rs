//! Error types for configuration and pattern loading.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("tick period must be greater than zero")]
    ZeroPeriod,

    #[error("cell size must be greater than zero")]
    ZeroCellSize,

    #[error("cell size {0} does not fit a pixel coordinate")]
    CellSizeTooLarge(u32),

    #[error("pattern line {line}: {message}")]
    Pattern { line: usize, message: String },
}
