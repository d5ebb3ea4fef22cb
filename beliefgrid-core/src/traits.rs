//! Core trait for recursive Bayesian estimators
//!
//! ## Overview
//!
//! Every filter in this crate is a two-step machine: a measurement step that
//! sharpens the belief and a motion step that spreads it. The
//! [`BayesEstimator`] trait names those steps with the Kalman vocabulary
//! (`update`/`predict`; the histogram filters call the same operations
//! `sense`/`shift`) and provides the cycle scheduler that drives a filter
//! through paired motion and measurement sequences.
//!
//! ## Cycle Scheduling Contract
//!
//! Given `motions` of length M and `measurements` of length K:
//!
//! ```text
//! M == K:  (update z1, predict u1), (update z2, predict u2), ...
//! M > K:   K paired steps as above, then predict u(K+1) ... predict uM
//! M < K:   M paired steps as above, then update z(M+1) ... update zK
//! ```
//!
//! Neither sequence is ever reordered; paired elements always run
//! measurement-first; surplus operations of whichever sequence is longer run
//! after the paired prefix, in input order. Equivalent to zipping with a
//! sentinel and skipping the missing half of each step.
//!
//! Any error from a step aborts the cycle and propagates; steps after the
//! failing one do not run.

use crate::errors::FilterResult;

/// Interface shared by the 1D histogram filter and the Gaussian filter
///
/// ## Design Rationale
///
/// The scheduling logic is easy to get wrong and identical across filter
/// families, so it lives here as a provided method over the two required
/// steps. Implementors only supply the math.
pub trait BayesEstimator {
    /// Motion command consumed by the predict step
    type Motion: Copy;

    /// Measurement consumed by the update step
    type Measurement: Copy;

    /// Measurement step: fold one measurement into the belief
    ///
    /// Bayesian posterior reweighting; uncertainty shrinks (or at worst is
    /// unchanged by an uninformative measurement).
    fn update(&mut self, measurement: Self::Measurement) -> FilterResult<()>;

    /// Motion step: propagate the belief through the motion model
    ///
    /// Uncertainty grows; total probability mass is conserved.
    fn predict(&mut self, motion: Self::Motion) -> FilterResult<()>;

    /// Drive the filter through motion and measurement sequences
    ///
    /// Applies the scheduling contract described in the module docs. The
    /// sequences may have different lengths; the surplus of the longer one
    /// is applied on its own, in order.
    fn cycle(
        &mut self,
        motions: &[Self::Motion],
        measurements: &[Self::Measurement],
    ) -> FilterResult<()> {
        let paired = motions.len().min(measurements.len());

        for (motion, measurement) in motions[..paired].iter().zip(&measurements[..paired]) {
            self.update(*measurement)?;
            self.predict(*motion)?;
        }
        for motion in &motions[paired..] {
            self.predict(*motion)?;
        }
        for measurement in &measurements[paired..] {
            self.update(*measurement)?;
        }

        Ok(())
    }
}
