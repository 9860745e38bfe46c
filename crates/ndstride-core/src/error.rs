//! Error types for ndstride

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NdError {
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    #[error("Rank mismatch: expected {expected} indices, got {got}")]
    RankMismatch { expected: usize, got: usize },

    #[error("Index out of range: index {index} for axis {axis} of size {size}")]
    IndexOutOfRange {
        axis: usize,
        index: isize,
        size: usize,
    },

    #[error("Invalid slice: {0}")]
    InvalidSlice(String),

    #[error("Invalid axis: {axis} for array with {ndim} dimensions")]
    InvalidAxis { axis: usize, ndim: usize },
}

pub type Result<T> = std::result::Result<T, NdError>;
