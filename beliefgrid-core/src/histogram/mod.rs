//! Histogram Belief Filters for Discrete Localization
//!
//! ## Overview
//!
//! A histogram filter represents the agent's position belief as a discrete
//! probability distribution, one bin per environment cell. The belief is
//! refined by alternating two steps:
//!
//! ```text
//! sense (update):   belief[i] *= weight(world[i], z);  normalize
//! shift (predict):  belief    = belief (*) motion kernel   [circular]
//! ```
//!
//! The sense step is a Bayesian posterior reweighting: cells whose label
//! matches the measurement gain relative mass, all others lose it. The shift
//! step moves mass by the commanded motion and leaks a little into adjacent
//! cells to model imperfect actuation; with wraparound boundaries the
//! environment is a ring (1D) or torus (2D).
//!
//! ## Variants
//!
//! - [`HistogramFilter`]: 1D, owns its belief and mutates it in place.
//! - [`Localizer`]: 2D, a pure function over caller-owned distributions,
//!   with an additional post-shift diffusion ([`Localizer::blur`]).
//!
//! ## Sensor Model
//!
//! Both variants weight cells with a two-value likelihood: `prob_hit` on a
//! label match, `prob_miss` otherwise. The weights are relative, not
//! normalized probabilities - the 2D variant conventionally uses
//! `prob_miss = 1.0` with `prob_hit > 1.0`.

pub mod filter;
pub mod localizer;

// Re-export main types
pub use filter::HistogramFilter;
pub use localizer::Localizer;

use crate::{
    constants::{DEFAULT_PROB_HIT, DEFAULT_PROB_MISS, LOCALIZER_PROB_MISS},
    errors::{FilterError, FilterResult},
};

/// Two-value measurement likelihood: one weight on label match, one otherwise
///
/// Weights are relative; any positive scaling produces the same posterior
/// after normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorModel {
    /// Likelihood weight when the measurement matches the cell label
    pub prob_hit: f32,
    /// Likelihood weight otherwise
    pub prob_miss: f32,
}

impl SensorModel {
    /// Create a sensor model, validating both weights
    ///
    /// `prob_hit` must be finite and positive; `prob_miss` finite and
    /// non-negative. A zero `prob_miss` makes any measurement fatal for
    /// cells that disagree with it, so mass can reach zero - the filters
    /// surface that as [`FilterError::ZeroMass`] rather than NaN.
    pub fn new(prob_hit: f32, prob_miss: f32) -> FilterResult<Self> {
        if !prob_hit.is_finite() || prob_hit <= 0.0 {
            return Err(FilterError::InvalidValue);
        }
        if !prob_miss.is_finite() || prob_miss < 0.0 {
            return Err(FilterError::InvalidValue);
        }
        Ok(Self { prob_hit, prob_miss })
    }

    /// Sensor model for the 2D localizer: miss weight fixed at 1.0
    pub const fn localizer(prob_hit: f32) -> Self {
        Self { prob_hit, prob_miss: LOCALIZER_PROB_MISS }
    }
}

impl Default for SensorModel {
    fn default() -> Self {
        Self { prob_hit: DEFAULT_PROB_HIT, prob_miss: DEFAULT_PROB_MISS }
    }
}

/// Distribution helpers for histogram filters
///
/// Basic operations over fixed-size distributions without heap allocation.
/// All operations work on const-generic arrays; the 2D shape is row-major.
pub mod dist {
    use crate::{
        constants::ZERO_MASS_EPSILON,
        errors::{FilterError, FilterResult},
    };

    /// 1D distribution type
    pub type Dist<const N: usize> = [f32; N];

    /// 2D distribution type, row-major
    pub type Grid<const H: usize, const W: usize> = [[f32; W]; H];

    /// Total mass of a 1D distribution
    pub fn total<const N: usize>(dist: &Dist<N>) -> f32 {
        dist.iter().sum()
    }

    /// Total mass of a 2D distribution
    pub fn grid_total<const H: usize, const W: usize>(grid: &Grid<H, W>) -> f32 {
        grid.iter().map(|row| row.iter().sum::<f32>()).sum()
    }

    /// Rescale a 1D distribution to unit mass
    ///
    /// Must be called after any reweighting by non-uniform weights. Fails
    /// with `ZeroMass` when there is no mass left to rescale; `op` names the
    /// operation that exhausted it.
    pub fn normalize<const N: usize>(dist: &mut Dist<N>, op: &'static str) -> FilterResult<()> {
        let total = total(dist);
        if total <= ZERO_MASS_EPSILON {
            return Err(FilterError::ZeroMass { op });
        }
        for p in dist.iter_mut() {
            *p /= total;
        }
        Ok(())
    }

    /// Rescale a 2D distribution to unit mass
    ///
    /// Same contract as [`normalize`], applied over all cells.
    pub fn grid_normalize<const H: usize, const W: usize>(
        grid: &mut Grid<H, W>,
        op: &'static str,
    ) -> FilterResult<()> {
        let total = grid_total(grid);
        if total <= ZERO_MASS_EPSILON {
            return Err(FilterError::ZeroMass { op });
        }
        for row in grid.iter_mut() {
            for p in row.iter_mut() {
                *p /= total;
            }
        }
        Ok(())
    }

    /// Uniform 1D distribution: 1/N per cell
    pub fn uniform<const N: usize>() -> Dist<N> {
        [1.0 / N as f32; N]
    }

    /// Uniform 2D distribution: 1/(H*W) per cell
    pub fn grid_uniform<const H: usize, const W: usize>() -> Grid<H, W> {
        [[1.0 / (H * W) as f32; W]; H]
    }
}
