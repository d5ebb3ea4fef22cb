//! Environment Models for Histogram Localization
//!
//! ## Overview
//!
//! An environment is a fixed, read-only map of discrete cell labels - a 1D
//! sequence ([`World`]) or a 2D grid ([`GridWorld`]). The histogram filters
//! read it during the sense step only, to decide whether a cell agrees with
//! a measurement.
//!
//! Labels are any `Copy + PartialEq` type the caller chooses: an enum of
//! landmark colors, a `u8` tile id, a `char`. The environment resolves its
//! distinct label inventory once at construction, so measurement-membership
//! checks are a bounded lookup rather than a scan of the whole map on every
//! sense call.
//!
//! ## Dimensions
//!
//! Cell counts are const generics, shared with the filter's distribution
//! type, so an environment and its belief can never disagree on shape once
//! constructed. Data arriving as runtime slices goes through the fallible
//! constructors, which reject wrong lengths with
//! [`FilterError::DimensionMismatch`] and zero-cell shapes with
//! [`FilterError::EmptyDistribution`].

use heapless::Vec;

use crate::{
    constants::MAX_DISTINCT_LABELS,
    errors::{FilterError, FilterResult},
};

/// Builds the distinct-label inventory for an environment
fn collect_labels<L: Copy + PartialEq>(
    cells: impl Iterator<Item = L>,
) -> FilterResult<Vec<L, MAX_DISTINCT_LABELS>> {
    let mut labels: Vec<L, MAX_DISTINCT_LABELS> = Vec::new();
    for cell in cells {
        if !labels.contains(&cell) {
            labels
                .push(cell)
                .map_err(|_| FilterError::LabelInventoryFull {
                    capacity: MAX_DISTINCT_LABELS,
                })?;
        }
    }
    Ok(labels)
}

/// 1D environment: an ordered sequence of discrete cell labels
///
/// Immutable after construction. `N` is the cell count and must match the
/// filter's distribution length (shared const parameter).
#[derive(Debug, Clone)]
pub struct World<L, const N: usize> {
    cells: [L; N],
    labels: Vec<L, MAX_DISTINCT_LABELS>,
}

impl<L: Copy + PartialEq, const N: usize> World<L, N> {
    /// Create an environment from its cell labels
    ///
    /// Rejects zero-cell environments and label sets larger than the
    /// bounded inventory.
    pub fn new(cells: [L; N]) -> FilterResult<Self> {
        if N == 0 {
            return Err(FilterError::EmptyDistribution);
        }
        let labels = collect_labels(cells.iter().copied())?;
        Ok(Self { cells, labels })
    }

    /// Create an environment from a runtime slice
    ///
    /// The slice length must equal `N` exactly.
    pub fn from_slice(cells: &[L]) -> FilterResult<Self> {
        let cells: [L; N] =
            cells
                .try_into()
                .map_err(|_| FilterError::DimensionMismatch {
                    expected: N,
                    actual: cells.len(),
                })?;
        Self::new(cells)
    }

    /// Cell labels in order
    pub fn cells(&self) -> &[L; N] {
        &self.cells
    }

    /// Number of cells
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether the environment has no cells (never true after construction)
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Whether `label` appears anywhere in the environment
    pub fn contains(&self, label: L) -> bool {
        self.labels.contains(&label)
    }

    /// Distinct labels, in first-appearance order
    pub fn labels(&self) -> &[L] {
        &self.labels
    }
}

/// 2D environment: a rectangular grid of discrete cell labels
///
/// Immutable after construction. `H` x `W` must match the localizer's
/// distribution dimensions (shared const parameters).
#[derive(Debug, Clone)]
pub struct GridWorld<L, const H: usize, const W: usize> {
    cells: [[L; W]; H],
    labels: Vec<L, MAX_DISTINCT_LABELS>,
}

impl<L: Copy + PartialEq, const H: usize, const W: usize> GridWorld<L, H, W> {
    /// Create an environment from its grid of cell labels
    pub fn new(cells: [[L; W]; H]) -> FilterResult<Self> {
        if H == 0 || W == 0 {
            return Err(FilterError::EmptyDistribution);
        }
        let labels = collect_labels(cells.iter().flat_map(|row| row.iter().copied()))?;
        Ok(Self { cells, labels })
    }

    /// Create an environment from a runtime slice of rows
    ///
    /// The row count must equal `H` exactly; row width is already fixed by
    /// the type.
    pub fn from_rows(rows: &[[L; W]]) -> FilterResult<Self> {
        let cells: [[L; W]; H] =
            rows.try_into()
                .map_err(|_| FilterError::DimensionMismatch {
                    expected: H,
                    actual: rows.len(),
                })?;
        Self::new(cells)
    }

    /// Grid of cell labels, row-major
    pub fn cells(&self) -> &[[L; W]; H] {
        &self.cells
    }

    /// Grid height in cells
    pub const fn height(&self) -> usize {
        H
    }

    /// Grid width in cells
    pub const fn width(&self) -> usize {
        W
    }

    /// Whether `label` appears anywhere in the grid
    pub fn contains(&self, label: L) -> bool {
        self.labels.contains(&label)
    }

    /// Distinct labels, in first-appearance (row-major) order
    pub fn labels(&self) -> &[L] {
        &self.labels
    }
}
