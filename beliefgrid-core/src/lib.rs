//! Recursive Bayesian localization filters for BeliefGrid
//!
//! Tracks the position of a mobile agent as a belief distribution, updated by
//! alternating measurement (sense/update) and motion (shift/predict) steps.
//! Three filter families share one cycle contract:
//! - 1D histogram filter over a sequence of labeled cells
//! - 2D histogram filter ("localizer") over a labeled grid with diffusion
//! - 1D Gaussian filter with closed-form fusion
//!
//! Key constraints:
//! - no_std compatible, no heap allocation in any filter operation
//! - Fixed-size distributions via const generics
//! - Explicit errors instead of NaN propagation
//!
//! ```
//! use beliefgrid_core::{BayesEstimator, HistogramFilter, SensorModel, World};
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! enum Color { Green, Red }
//!
//! let world = World::new([Color::Green, Color::Red, Color::Red,
//!                         Color::Green, Color::Green]).unwrap();
//! let mut filter = HistogramFilter::uniform(world, SensorModel::default());
//!
//! filter.update(Color::Red).unwrap();
//! filter.predict(1).unwrap();
//! assert!((filter.belief().iter().sum::<f32>() - 1.0).abs() < 1e-5);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

// Macro for optional logging; textual scope reaches the modules declared below
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

pub mod constants;
pub mod errors;
pub mod gaussian;
pub mod histogram;
pub mod traits;
pub mod world;

// Public API
pub use errors::{FilterError, FilterResult};
pub use gaussian::{Gaussian, GaussianFilter};
pub use histogram::{HistogramFilter, Localizer, SensorModel};
pub use traits::BayesEstimator;
pub use world::{GridWorld, World};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
