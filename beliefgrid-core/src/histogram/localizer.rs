//! 2D Histogram Filter / Localizer
//!
//! ## Overview
//!
//! Localizes an agent on a toroidal grid of `H` x `W` labeled cells. Unlike
//! the 1D filter, the localizer does not own a belief: `sense`, `shift` and
//! `blur` are pure functions that borrow a caller-owned distribution and
//! return a fresh one, so successive calls compose without hidden state.
//!
//! ## Motion Model
//!
//! A commanded motion (dy, dx) is an exact circular translation - every
//! cell's mass moves to `((i+dy) mod H, (j+dx) mod W)`, no interpolation -
//! followed by a local diffusion:
//!
//! ```text
//!          b/12   b/6   b/12
//!          b/6   1 - b  b/6          b = blur_factor in [0, 1]
//!          b/12   b/6   b/12
//! ```
//!
//! The kernel wraps toroidally and sums to exactly 1; `b = 0` reduces it to
//! the identity. Uncertainty in both motion magnitudes is modeled by this
//! single isotropic post-shift blur, not by a per-axis convolution - that
//! approximation is part of the contract and is preserved as such.

use crate::{
    constants::{BLUR_CORNER_DIVISOR, BLUR_EDGE_DIVISOR},
    errors::{FilterError, FilterResult},
    histogram::{dist, SensorModel},
    world::GridWorld,
};

/// Discrete Bayes localizer over a 2D toroidal grid
///
/// ## Type Parameters
/// - `L`: cell label type
/// - `H`, `W`: grid dimensions, shared with the environment
#[derive(Debug)]
pub struct Localizer<L, const H: usize, const W: usize> {
    /// Environment the sense step reads
    grid: GridWorld<L, H, W>,
    /// Measurement likelihood weights (miss weight fixed at 1.0)
    sensor: SensorModel,
    /// Diffusion strength of the post-shift blur, in [0, 1]
    blur_factor: f32,
}

impl<L: Copy + PartialEq, const H: usize, const W: usize> Localizer<L, H, W> {
    /// Create a localizer
    ///
    /// `prob_hit` is the relative weight of a matching cell (typically
    /// > 1.0, against the fixed miss weight of 1.0). `blur_factor` must lie
    /// in [0, 1]; 0 disables diffusion entirely.
    pub fn new(grid: GridWorld<L, H, W>, prob_hit: f32, blur_factor: f32) -> FilterResult<Self> {
        if !prob_hit.is_finite() || prob_hit <= 0.0 {
            return Err(FilterError::InvalidValue);
        }
        if !blur_factor.is_finite() || !(0.0..=1.0).contains(&blur_factor) {
            return Err(FilterError::InvalidValue);
        }
        Ok(Self {
            grid,
            sensor: SensorModel::localizer(prob_hit),
            blur_factor,
        })
    }

    /// Uniform position belief: 1/(H*W) per cell
    pub fn initialize_dist(&self) -> dist::Grid<H, W> {
        dist::grid_uniform::<H, W>()
    }

    /// Fold one measurement into a belief, returning the posterior
    ///
    /// Matching cells are weighted by `prob_hit`, all others keep their
    /// mass, then the grid is renormalized. The input distribution is not
    /// mutated. A color absent from the grid's label inventory carries no
    /// information (uniform weighting); a warning is emitted.
    pub fn sense(&self, distribution: &dist::Grid<H, W>, color: L) -> FilterResult<dist::Grid<H, W>> {
        if !self.grid.contains(color) {
            log_warn!("measurement color absent from grid; update carries no information");
        }

        let mut posterior = *distribution;
        for (post_row, cell_row) in posterior.iter_mut().zip(self.grid.cells()) {
            for (p, cell) in post_row.iter_mut().zip(cell_row) {
                let weight = if *cell == color {
                    self.sensor.prob_hit
                } else {
                    self.sensor.prob_miss
                };
                *p *= weight;
            }
        }
        dist::grid_normalize(&mut posterior, "sense")?;
        Ok(posterior)
    }

    /// Propagate a belief through a commanded motion of (dy, dx) cells
    ///
    /// Exact toroidal translation followed by [`Self::blur`]. The input
    /// distribution is not mutated.
    pub fn shift(
        &self,
        distribution: &dist::Grid<H, W>,
        dy: isize,
        dx: isize,
    ) -> FilterResult<dist::Grid<H, W>> {
        let (height, width) = (H as isize, W as isize);
        let mut shifted = [[0.0f32; W]; H];

        for (i, row) in distribution.iter().enumerate() {
            let di = (i as isize + dy).rem_euclid(height) as usize;
            for (j, p) in row.iter().enumerate() {
                let dj = (j as isize + dx).rem_euclid(width) as usize;
                shifted[di][dj] = *p;
            }
        }
        self.blur(&shifted)
    }

    /// Diffuse a belief with the 3x3 kernel described in the module docs
    ///
    /// Toroidal wraparound, then renormalization. With `blur_factor == 0`
    /// this returns the normalized input unchanged.
    pub fn blur(&self, grid: &dist::Grid<H, W>) -> FilterResult<dist::Grid<H, W>> {
        let center = 1.0 - self.blur_factor;
        let edge = self.blur_factor / BLUR_EDGE_DIVISOR;
        let corner = self.blur_factor / BLUR_CORNER_DIVISOR;
        let kernel = [
            [corner, edge, corner],
            [edge, center, edge],
            [corner, edge, corner],
        ];

        let mut blurred = [[0.0f32; W]; H];
        for (i, row) in grid.iter().enumerate() {
            for (j, mass) in row.iter().enumerate() {
                for (ki, kernel_row) in kernel.iter().enumerate() {
                    // ki/kj are 0..3; the +H-1 / +W-1 recenters without underflow
                    let di = (i + H + ki - 1) % H;
                    for (kj, weight) in kernel_row.iter().enumerate() {
                        let dj = (j + W + kj - 1) % W;
                        blurred[di][dj] += weight * mass;
                    }
                }
            }
        }
        dist::grid_normalize(&mut blurred, "blur")?;
        Ok(blurred)
    }

    /// Environment the localizer was constructed with
    pub fn grid(&self) -> &GridWorld<L, H, W> {
        &self.grid
    }

    /// Diffusion strength of the post-shift blur
    pub fn blur_factor(&self) -> f32 {
        self.blur_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Color {
        Green,
        Red,
    }
    use Color::{Green, Red};

    fn small_grid() -> GridWorld<Color, 2, 3> {
        GridWorld::new([[Red, Green, Green], [Red, Red, Green]]).unwrap()
    }

    fn assert_grid_close<const H: usize, const W: usize>(
        got: &dist::Grid<H, W>,
        want: &dist::Grid<H, W>,
    ) {
        for (got_row, want_row) in got.iter().zip(want) {
            for (g, w) in got_row.iter().zip(want_row) {
                assert!((g - w).abs() < 1e-5, "got {g}, want {w}");
            }
        }
    }

    #[test]
    fn sense_weights_matching_cells() {
        let localizer = Localizer::new(small_grid(), 3.0, 0.0).unwrap();
        let prior = localizer.initialize_dist();

        let posterior = localizer.sense(&prior, Green).unwrap();

        // Three green cells at weight 3, three red at weight 1: total 2.0
        let miss = 1.0 / 12.0;
        assert_grid_close(&posterior, &[
            [miss, 0.25, 0.25],
            [miss, miss, 0.25],
        ]);
        // The input distribution is untouched
        assert_grid_close(&prior, &dist::grid_uniform::<2, 3>());
    }

    #[test]
    fn shift_translates_exactly_with_zero_blur() {
        let localizer = Localizer::new(small_grid(), 3.0, 0.0).unwrap();
        let mut belief = [[0.0f32; 3]; 2];
        belief[0][0] = 1.0;

        let moved = localizer.shift(&belief, 1, 2).unwrap();

        let mut expected = [[0.0f32; 3]; 2];
        expected[1][2] = 1.0;
        assert_grid_close(&moved, &expected);
    }

    #[test]
    fn shift_wraps_toroidally() {
        let localizer = Localizer::new(small_grid(), 3.0, 0.0).unwrap();
        let mut belief = [[0.0f32; 3]; 2];
        belief[1][2] = 1.0;

        // One more step in each direction wraps back to the origin
        let moved = localizer.shift(&belief, 1, 1).unwrap();

        let mut expected = [[0.0f32; 3]; 2];
        expected[0][0] = 1.0;
        assert_grid_close(&moved, &expected);

        // Negative motions walk the torus the other way
        let back = localizer.shift(&moved, -1, -1).unwrap();
        assert_grid_close(&back, &belief);
    }

    #[test]
    fn blur_zero_is_identity() {
        let localizer = Localizer::new(small_grid(), 3.0, 0.0).unwrap();
        let prior = localizer.initialize_dist();
        let belief = localizer.sense(&prior, Red).unwrap();

        let blurred = localizer.blur(&belief).unwrap();
        assert_grid_close(&blurred, &belief);
    }

    #[test]
    fn blur_spreads_point_mass_by_kernel_weights() {
        let grid = GridWorld::new([[Red; 5]; 5]).unwrap();
        let localizer = Localizer::new(grid, 3.0, 0.12).unwrap();

        let mut belief = [[0.0f32; 5]; 5];
        belief[2][2] = 1.0;

        let blurred = localizer.blur(&belief).unwrap();

        assert!((blurred[2][2] - 0.88).abs() < 1e-6);
        for (di, dj) in [(1, 2), (3, 2), (2, 1), (2, 3)] {
            assert!((blurred[di][dj] - 0.02).abs() < 1e-6);
        }
        for (di, dj) in [(1, 1), (1, 3), (3, 1), (3, 3)] {
            assert!((blurred[di][dj] - 0.01).abs() < 1e-6);
        }
        assert!((dist::grid_total(&blurred) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn blur_conserves_mass_on_the_torus_edge() {
        let grid = GridWorld::new([[Red; 3]; 3]).unwrap();
        let localizer = Localizer::new(grid, 3.0, 0.5).unwrap();

        // Corner cell: every kernel tap wraps somewhere
        let mut belief = [[0.0f32; 3]; 3];
        belief[0][0] = 1.0;

        let blurred = localizer.blur(&belief).unwrap();
        assert!((dist::grid_total(&blurred) - 1.0).abs() < 1e-5);
        assert!((blurred[0][0] - 0.5).abs() < 1e-6);
        assert!((blurred[2][0] - 0.5 / 6.0).abs() < 1e-6);
        assert!((blurred[2][2] - 0.5 / 12.0).abs() < 1e-6);
    }

    #[test]
    fn unknown_color_degrades_to_no_op() {
        let grid = GridWorld::new([[Red, Red], [Red, Red]]).unwrap();
        let localizer = Localizer::new(grid, 3.0, 0.0).unwrap();
        let prior = localizer.initialize_dist();

        let posterior = localizer.sense(&prior, Green).unwrap();
        assert_grid_close(&posterior, &prior);
    }

    #[test]
    fn zero_mass_input_is_rejected() {
        let localizer = Localizer::new(small_grid(), 3.0, 0.1).unwrap();
        let empty = [[0.0f32; 3]; 2];

        assert_eq!(
            localizer.sense(&empty, Red).unwrap_err(),
            FilterError::ZeroMass { op: "sense" },
        );
        assert_eq!(
            localizer.blur(&empty).unwrap_err(),
            FilterError::ZeroMass { op: "blur" },
        );
    }

    #[test]
    fn accessors_reflect_construction() {
        let localizer = Localizer::new(small_grid(), 3.0, 0.25).unwrap();
        assert_eq!(localizer.blur_factor(), 0.25);
        assert_eq!(localizer.grid().height(), 2);
        assert_eq!(localizer.grid().width(), 3);
    }

    #[test]
    fn construction_validates_parameters() {
        assert_eq!(
            Localizer::new(small_grid(), 0.0, 0.1).unwrap_err(),
            FilterError::InvalidValue,
        );
        assert_eq!(
            Localizer::new(small_grid(), 3.0, 1.5).unwrap_err(),
            FilterError::InvalidValue,
        );
        assert_eq!(
            Localizer::new(small_grid(), 3.0, -0.1).unwrap_err(),
            FilterError::InvalidValue,
        );
    }
}
