//! Error Types for Belief Filter Invariant Violations
//!
//! ## Design Philosophy
//!
//! BeliefGrid's error system follows the same constraints as the rest of the
//! crate:
//!
//! 1. **Small Size**: Every variant carries at most two machine words of
//!    context, since errors are returned from hot filter loops.
//!
//! 2. **No Heap Allocation**: All error data is inline - no String, only
//!    `&'static str` for operation names. Deterministic memory usage.
//!
//! 3. **Copy Semantics**: Errors implement Copy for cheap returns.
//!
//! 4. **Actionable Information**: Each error identifies the violated
//!    invariant well enough that the caller knows which input to fix.
//!
//! ## Error Categories
//!
//! ### Mass Violations
//! - `ZeroMass`: a normalization step found no probability mass left. The
//!   belief was multiplied by weights inconsistent with every supported
//!   cell. Raised explicitly rather than letting a division produce NaN.
//!
//! ### Construction Violations
//! - `DimensionMismatch`: a caller-supplied slice disagrees with the
//!   environment dimensions.
//! - `EmptyDistribution`: a zero-cell environment or distribution.
//! - `LabelInventoryFull`: more distinct cell labels than the bounded
//!   inventory can track.
//!
//! ### Value Violations
//! - `InvalidValue`: NaN, infinity, or a non-positive variance where a
//!   positive one is required.
//!
//! Note that an unknown measurement symbol is NOT an error: the filters
//! degrade to a uniform miss weighting and emit a warning through the `log`
//! facade (see `HistogramFilter::sense`).

use thiserror_no_std::Error;

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;

/// Filter errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum FilterError {
    /// Probability mass summed to zero where a normalization was required
    #[error("distribution sums to zero after {op}")]
    ZeroMass {
        /// Operation that exhausted the mass ("sense", "blur", ...)
        op: &'static str,
    },

    /// Supplied data disagrees with the environment dimensions
    #[error("dimension mismatch: expected {expected} cells, got {actual}")]
    DimensionMismatch {
        /// Cell count the environment was constructed with
        expected: usize,
        /// Cell count the caller supplied
        actual: usize,
    },

    /// Environment or distribution has no cells
    #[error("distribution has no cells")]
    EmptyDistribution,

    /// Value makes no mathematical sense (NaN, infinity, non-positive variance)
    #[error("invalid value: not a valid number")]
    InvalidValue,

    /// Environment holds more distinct labels than the inventory capacity
    #[error("environment exceeds {capacity} distinct labels")]
    LabelInventoryFull {
        /// Fixed inventory capacity
        capacity: usize,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for FilterError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::ZeroMass { op } =>
                defmt::write!(fmt, "Zero mass after {}", op),
            Self::DimensionMismatch { expected, actual } =>
                defmt::write!(fmt, "Expected {} cells, got {}", expected, actual),
            Self::EmptyDistribution =>
                defmt::write!(fmt, "Empty distribution"),
            Self::InvalidValue =>
                defmt::write!(fmt, "Invalid value"),
            Self::LabelInventoryFull { capacity } =>
                defmt::write!(fmt, "More than {} distinct labels", capacity),
        }
    }
}
