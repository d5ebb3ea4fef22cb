//! 1D Histogram Filter
//!
//! ## Overview
//!
//! Tracks a position belief over a ring of `N` labeled cells. The filter
//! owns its distribution and mutates it in place; construction fixes the
//! environment, the sensor model, and the cell count for the filter's
//! lifetime.
//!
//! ## Motion Model
//!
//! A commanded motion of `m` cells lands exactly `m` cells away with
//! probability 0.8, one cell short with 0.1, and one cell long with 0.1:
//!
//! ```text
//! out[i] = 0.8*p[i-m] + 0.1*p[i-m+1] + 0.1*p[i-m-1]    (indices mod N)
//! ```
//!
//! The kernel sums to 1, so the shift step conserves total mass without
//! renormalizing. Negative motions walk the ring the other way.

use crate::{
    constants::{SHIFT_EXACT_WEIGHT, SHIFT_OVERSHOOT_WEIGHT, SHIFT_UNDERSHOOT_WEIGHT},
    errors::{FilterError, FilterResult},
    histogram::{dist, SensorModel},
    traits::BayesEstimator,
    world::World,
};

/// Discrete Bayes filter over a 1D ring of labeled cells
///
/// ## Type Parameters
/// - `L`: cell label type
/// - `N`: cell count, shared with the environment
#[derive(Debug)]
pub struct HistogramFilter<L, const N: usize> {
    /// Environment the sense step reads
    world: World<L, N>,
    /// Current position belief
    belief: dist::Dist<N>,
    /// Measurement likelihood weights
    sensor: SensorModel,
}

impl<L: Copy + PartialEq, const N: usize> HistogramFilter<L, N> {
    /// Create a filter with a uniform prior (1/N per cell)
    pub fn uniform(world: World<L, N>, sensor: SensorModel) -> Self {
        Self { world, belief: dist::uniform::<N>(), sensor }
    }

    /// Create a filter with a caller-supplied prior
    ///
    /// The prior must have exactly `N` entries, all finite and
    /// non-negative, with nonzero total mass; it is renormalized on the way
    /// in.
    pub fn with_prior(
        world: World<L, N>,
        sensor: SensorModel,
        prior: &[f32],
    ) -> FilterResult<Self> {
        let mut belief: dist::Dist<N> =
            prior
                .try_into()
                .map_err(|_| FilterError::DimensionMismatch {
                    expected: N,
                    actual: prior.len(),
                })?;
        if belief.iter().any(|p| !p.is_finite() || *p < 0.0) {
            return Err(FilterError::InvalidValue);
        }
        dist::normalize(&mut belief, "prior")?;
        Ok(Self { world, belief, sensor })
    }

    /// Fold one measurement into the belief
    ///
    /// Cells whose label matches the measurement are weighted by
    /// `prob_hit`, all others by `prob_miss`, then the belief is
    /// renormalized. A measurement absent from the environment's label
    /// inventory cannot distinguish any cell: the update degrades to a
    /// uniform `prob_miss` weighting (a no-op after normalization) and a
    /// warning is emitted.
    pub fn sense(&mut self, measurement: L) -> FilterResult<()> {
        if !self.world.contains(measurement) {
            log_warn!("measurement label absent from environment; update carries no information");
        }

        for (p, cell) in self.belief.iter_mut().zip(self.world.cells()) {
            let weight = if *cell == measurement {
                self.sensor.prob_hit
            } else {
                self.sensor.prob_miss
            };
            *p *= weight;
        }
        dist::normalize(&mut self.belief, "sense")
    }

    /// Propagate the belief through a commanded motion of `motion` cells
    ///
    /// Circular convolution with the [0.1, 0.8, 0.1] kernel; see the module
    /// docs. Mass is conserved exactly, so this step cannot fail.
    pub fn shift(&mut self, motion: isize) {
        let n = N as isize;
        let mut moved = [0.0f32; N];

        for (idx, out) in moved.iter_mut().enumerate() {
            let source = (idx as isize - motion).rem_euclid(n) as usize;
            let short = (source + 1) % N;
            let long = (source + N - 1) % N;
            *out = SHIFT_EXACT_WEIGHT * self.belief[source]
                + SHIFT_UNDERSHOOT_WEIGHT * self.belief[short]
                + SHIFT_OVERSHOOT_WEIGHT * self.belief[long];
        }
        self.belief = moved;
    }

    /// Current position belief
    pub fn belief(&self) -> &dist::Dist<N> {
        &self.belief
    }

    /// Environment the filter was constructed with
    pub fn world(&self) -> &World<L, N> {
        &self.world
    }

    /// Index of the most probable cell (lowest index on ties)
    pub fn most_likely(&self) -> usize {
        let mut best = 0;
        for (idx, p) in self.belief.iter().enumerate() {
            if *p > self.belief[best] {
                best = idx;
            }
        }
        best
    }
}

impl<L: Copy + PartialEq, const N: usize> BayesEstimator for HistogramFilter<L, N> {
    type Motion = isize;
    type Measurement = L;

    fn update(&mut self, measurement: L) -> FilterResult<()> {
        self.sense(measurement)
    }

    fn predict(&mut self, motion: isize) -> FilterResult<()> {
        self.shift(motion);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Color {
        Green,
        Red,
        Blue,
    }

    fn reference_world() -> World<Color, 5> {
        World::new([Color::Green, Color::Red, Color::Red, Color::Green, Color::Green]).unwrap()
    }

    fn assert_belief_close(belief: &[f32], expected: &[f32]) {
        for (got, want) in belief.iter().zip(expected) {
            assert!((got - want).abs() < 1e-4, "got {got}, want {want}");
        }
    }

    #[test]
    fn sense_concentrates_on_matching_cells() {
        let mut filter = HistogramFilter::uniform(reference_world(), SensorModel::default());

        filter.sense(Color::Red).unwrap();

        // 0.2*0.2 vs 0.2*0.6, normalized by 0.36: 1/9 and 3/9
        assert_belief_close(filter.belief(), &[0.1111, 0.3333, 0.3333, 0.1111, 0.1111]);
        assert!((dist::total(filter.belief()) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn shift_applies_motion_kernel() {
        let mut filter = HistogramFilter::uniform(reference_world(), SensorModel::default());
        filter.sense(Color::Red).unwrap();
        filter.shift(1);

        assert_belief_close(filter.belief(), &[0.1111, 0.1333, 0.3111, 0.3111, 0.1333]);
        assert!((dist::total(filter.belief()) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn zero_motion_is_not_identity_under_diffusion() {
        // The kernel still leaks 0.1 each way even for motion 0
        let world = World::new([Color::Green, Color::Red, Color::Green]).unwrap();
        let mut filter =
            HistogramFilter::with_prior(world, SensorModel::default(), &[1.0, 0.0, 0.0]).unwrap();

        filter.shift(0);
        assert_belief_close(filter.belief(), &[0.8, 0.1, 0.1]);
    }

    #[test]
    fn opposite_shifts_conserve_mass() {
        let mut filter = HistogramFilter::uniform(reference_world(), SensorModel::default());
        filter.sense(Color::Red).unwrap();

        filter.shift(2);
        filter.shift(-2);
        assert!((dist::total(filter.belief()) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn negative_shift_walks_the_ring_backwards() {
        let world = World::new([Color::Green, Color::Red, Color::Green, Color::Green]).unwrap();
        let mut filter =
            HistogramFilter::with_prior(world, SensorModel::default(), &[0.0, 1.0, 0.0, 0.0])
                .unwrap();

        filter.shift(-1);
        assert_belief_close(filter.belief(), &[0.8, 0.1, 0.0, 0.1]);
    }

    #[test]
    fn unknown_measurement_degrades_to_no_op() {
        let mut filter = HistogramFilter::uniform(reference_world(), SensorModel::default());
        filter.sense(Color::Red).unwrap();
        let before = *filter.belief();

        // Blue is not in the environment: uniform miss weighting cancels out
        filter.sense(Color::Blue).unwrap();
        assert_belief_close(filter.belief(), &before);
    }

    #[test]
    fn impossible_measurement_reports_zero_mass() {
        let world = World::new([Color::Green, Color::Red, Color::Green]).unwrap();
        let sensor = SensorModel::new(0.6, 0.0).unwrap();
        // All prior mass on a green cell, then measure red with zero miss weight
        let mut filter = HistogramFilter::with_prior(world, sensor, &[1.0, 0.0, 0.0]).unwrap();

        let err = filter.sense(Color::Red).unwrap_err();
        assert_eq!(err, FilterError::ZeroMass { op: "sense" });
    }

    #[test]
    fn prior_length_is_validated() {
        let err =
            HistogramFilter::with_prior(reference_world(), SensorModel::default(), &[0.5, 0.5])
                .unwrap_err();
        assert_eq!(err, FilterError::DimensionMismatch { expected: 5, actual: 2 });
    }

    #[test]
    fn prior_is_renormalized() {
        let filter =
            HistogramFilter::with_prior(reference_world(), SensorModel::default(), &[2.0; 5])
                .unwrap();
        assert_belief_close(filter.belief(), &[0.2; 5]);
    }

    #[test]
    fn most_likely_breaks_ties_low() {
        let mut filter = HistogramFilter::uniform(reference_world(), SensorModel::default());
        assert_eq!(filter.most_likely(), 0);
        assert_eq!(filter.world().len(), 5);

        filter.sense(Color::Red).unwrap();
        assert_eq!(filter.most_likely(), 1);
    }

    #[test]
    fn cycle_runs_through_the_trait() {
        let mut filter = HistogramFilter::uniform(reference_world(), SensorModel::default());

        filter
            .cycle(&[1, 1], &[Color::Red, Color::Red])
            .unwrap();

        assert!((dist::total(filter.belief()) - 1.0).abs() < 1e-5);
        // Two red sightings then two right-shifts: belief peaks past the red block
        assert_eq!(filter.most_likely(), 3);
    }
}
