//! 1D Gaussian Filter
//!
//! ## Overview
//!
//! Tracks position as a single unimodal (mean, variance) belief - the
//! continuous counterpart of the histogram filters, with closed-form steps
//! instead of per-cell loops:
//!
//! ```text
//! update (measure):  mean' = (z.var*mean + var*z.mean) / (z.var + var)
//!                    var'  = 1 / (1/var + 1/z.var)        [certainty grows]
//! predict (move):    mean' = mean + u.mean
//!                    var'  = var + u.var                   [certainty shrinks]
//! ```
//!
//! The update is the product of two Gaussians (Bayesian fusion): the new
//! variance is always at most the smaller of the two inputs. The predict
//! step is convolution under translation: variances add.
//!
//! Both motions and measurements are themselves [`Gaussian`] values, so the
//! filter plugs into the same [`BayesEstimator`] cycle contract as the 1D
//! histogram filter.

use core::f32::consts::PI;

use crate::{
    errors::{FilterError, FilterResult},
    traits::BayesEstimator,
};

/// Unimodal belief: mean and variance of a normal distribution
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gaussian {
    /// Center of the distribution
    pub mean: f32,
    /// Spread of the distribution; non-negative
    pub var: f32,
}

impl Gaussian {
    /// Create a Gaussian, validating both parameters
    ///
    /// The mean must be finite and the variance finite and non-negative.
    /// Zero variance is permitted for exact motions; a filter belief must
    /// additionally be strictly positive (see [`GaussianFilter::new`]).
    pub fn new(mean: f32, var: f32) -> FilterResult<Self> {
        if !mean.is_finite() || !var.is_finite() || var < 0.0 {
            return Err(FilterError::InvalidValue);
        }
        Ok(Self { mean, var })
    }

    /// Probability density at `x`
    ///
    /// `1/sqrt(2*pi*var) * exp(-0.5*(x - mean)^2 / var)`. Requires strictly
    /// positive variance.
    pub fn density(&self, x: f32) -> f32 {
        let coefficient = 1.0 / libm::sqrtf(2.0 * PI * self.var);
        let offset = x - self.mean;
        coefficient * libm::expf(-0.5 * offset * offset / self.var)
    }
}

/// Recursive Gaussian estimator over a 1D continuous position
pub struct GaussianFilter {
    belief: Gaussian,
}

impl GaussianFilter {
    /// Create a filter from a prior belief
    ///
    /// The prior variance must be strictly positive: the update step
    /// divides by it, and a zero-variance belief could never widen again
    /// except through motion.
    pub fn new(prior: Gaussian) -> FilterResult<Self> {
        if prior.var <= 0.0 {
            return Err(FilterError::InvalidValue);
        }
        Ok(Self { belief: prior })
    }

    /// Current belief
    pub fn belief(&self) -> Gaussian {
        self.belief
    }

    /// Mean of the current belief
    pub fn mean(&self) -> f32 {
        self.belief.mean
    }

    /// Variance of the current belief
    pub fn var(&self) -> f32 {
        self.belief.var
    }

    /// Probability density of the current belief at `x`
    pub fn density(&self, x: f32) -> f32 {
        self.belief.density(x)
    }
}

impl BayesEstimator for GaussianFilter {
    type Motion = Gaussian;
    type Measurement = Gaussian;

    /// Fuse a measurement into the belief (product of Gaussians)
    ///
    /// The measurement variance must be strictly positive; the degenerate
    /// zero-variance case would collapse the belief permanently.
    fn update(&mut self, measurement: Gaussian) -> FilterResult<()> {
        if !measurement.mean.is_finite()
            || !measurement.var.is_finite()
            || measurement.var <= 0.0
        {
            return Err(FilterError::InvalidValue);
        }

        let prior = self.belief;
        self.belief.mean = (measurement.var * prior.mean + prior.var * measurement.mean)
            / (measurement.var + prior.var);
        self.belief.var = 1.0 / (1.0 / prior.var + 1.0 / measurement.var);
        Ok(())
    }

    /// Propagate the belief through a motion (convolution under translation)
    ///
    /// Zero motion variance is allowed: an exact motion translates the
    /// belief without widening it.
    fn predict(&mut self, motion: Gaussian) -> FilterResult<()> {
        if !motion.mean.is_finite() || !motion.var.is_finite() || motion.var < 0.0 {
            return Err(FilterError::InvalidValue);
        }

        self.belief.mean += motion.mean;
        self.belief.var += motion.var;
        Ok(())
    }
}
