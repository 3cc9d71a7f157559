use thiserror::Error;

use crate::options::Kind;

/// Errors raised while building an [Interpolator](crate::Interpolator) or evaluating it.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InterpolationError {
    /// Interpolation kind is recognized but has no implementation.
    #[error("1D interpolation of kind `{0}` is not supported")]
    UnsupportedKind(Kind),

    /// Selected ordinate column does not exist.
    #[error("axis {axis} is out of bounds for ordinates with {columns} column(s)")]
    AxisOutOfBounds { axis: usize, columns: usize },

    /// Less than two usable samples remain after truncation.
    #[error("at least 2 samples are required, got {0}")]
    NotEnoughSamples(usize),

    /// Cubic spline queried on an interval whose abscissas are equal.
    #[error("wrong input at x index {klo} and {khi} for cubic spline: abscissas are equal")]
    DegenerateInterval { klo: usize, khi: usize },
}

pub type Result<T> = std::result::Result<T, InterpolationError>;
