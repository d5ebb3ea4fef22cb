//! Constants for BeliefGrid Core
//!
//! Centralized, documented defaults for the sensor and motion models. All
//! numeric values used by the filters are defined here with their purpose
//! and source; line code never embeds magic numbers.
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. When adding new constants, include documentation with the rationale
//! 3. Constants here are defaults - filters take their actual parameters at
//!    construction time

// ===== SENSOR MODEL DEFAULTS =====

/// Default likelihood weight when a measurement matches the cell label.
///
/// Paired with [`DEFAULT_PROB_MISS`], this gives a matching cell three times
/// the posterior weight of a non-matching one.
///
/// Source: reference sensor model for the 1D histogram filter
pub const DEFAULT_PROB_HIT: f32 = 0.6;

/// Default likelihood weight when a measurement does not match the cell label.
///
/// Source: reference sensor model for the 1D histogram filter
pub const DEFAULT_PROB_MISS: f32 = 0.2;

/// Miss weight for the 2D localizer.
///
/// The 2D sensor model works with unnormalized relative weights: non-matching
/// cells keep their mass (weight 1.0) and matching cells are scaled up by a
/// caller-supplied `prob_hit`, typically > 1.0. Normalization restores unit
/// mass afterwards.
///
/// Source: reference sensor model for the 2D localizer
pub const LOCALIZER_PROB_MISS: f32 = 1.0;

// ===== MOTION MODEL (1D) =====

/// Probability that a commanded 1D motion lands exactly on target.
///
/// Source: reference motion kernel [0.1, 0.8, 0.1]
pub const SHIFT_EXACT_WEIGHT: f32 = 0.8;

/// Probability that a commanded 1D motion falls one cell short.
///
/// Source: reference motion kernel [0.1, 0.8, 0.1]
pub const SHIFT_UNDERSHOOT_WEIGHT: f32 = 0.1;

/// Probability that a commanded 1D motion overshoots by one cell.
///
/// Source: reference motion kernel [0.1, 0.8, 0.1]
pub const SHIFT_OVERSHOOT_WEIGHT: f32 = 0.1;

// ===== MOTION MODEL (2D) =====

/// Divisor mapping `blur_factor` to the weight of each edge-adjacent cell.
///
/// The 3x3 diffusion kernel places `blur_factor / 6` on each of the four
/// edge neighbors. Together with [`BLUR_CORNER_DIVISOR`] the kernel sums to
/// exactly 1 for any `blur_factor`.
pub const BLUR_EDGE_DIVISOR: f32 = 6.0;

/// Divisor mapping `blur_factor` to the weight of each corner cell.
///
/// The 3x3 diffusion kernel places `blur_factor / 12` on each of the four
/// corner neighbors.
pub const BLUR_CORNER_DIVISOR: f32 = 12.0;

// ===== NUMERICAL GUARDS =====

/// Threshold below which a total probability mass is treated as zero.
///
/// Products of f32 probabilities can underflow to denormals before reaching
/// exact zero; totals at or below this threshold trigger
/// [`crate::FilterError::ZeroMass`] instead of a division that would produce
/// NaN or Inf.
pub const ZERO_MASS_EPSILON: f32 = 1e-12;

// ===== CAPACITY LIMITS =====

/// Maximum number of distinct cell labels an environment may carry.
///
/// The label inventory is a fixed-capacity `heapless::Vec`; environments
/// with more distinct labels are rejected at construction.
pub const MAX_DISTINCT_LABELS: usize = 32;
