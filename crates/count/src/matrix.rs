//! Transition count model: the count matrix plus its provenance.

use nalgebra::DMatrix;

use crate::count::CountingMode;
use crate::error::CountError;

/// A transition count matrix counted at a fixed lag time.
///
/// Entry `(i, j)` holds the (possibly overlap-corrected, hence fractional)
/// number of observed transitions from state `i` to state `j` over `lagtime`
/// steps. Row/column index `i` corresponds to the original cluster label
/// `state_symbols[i]`, so a model restricted to a subset of states keeps the
/// mapping back to the discretization.
#[derive(Debug, Clone)]
pub struct CountModel {
    counts: DMatrix<f64>,
    lagtime: usize,
    mode: CountingMode,
    state_symbols: Vec<usize>,
}

impl CountModel {
    /// Creates a count model from its parts, validating shape and content.
    ///
    /// # Errors
    ///
    /// Returns [`CountError::InvalidCounts`] if the matrix is not square,
    /// its dimension does not match `state_symbols`, or any entry is
    /// negative or non-finite. Returns [`CountError::ZeroLagtime`] for a
    /// zero lag.
    pub fn from_parts(
        counts: DMatrix<f64>,
        lagtime: usize,
        mode: CountingMode,
        state_symbols: Vec<usize>,
    ) -> Result<Self, CountError> {
        if lagtime == 0 {
            return Err(CountError::ZeroLagtime);
        }
        if counts.nrows() != counts.ncols() {
            return Err(CountError::InvalidCounts {
                reason: format!("matrix is {}x{}, expected square", counts.nrows(), counts.ncols()),
            });
        }
        if counts.nrows() != state_symbols.len() {
            return Err(CountError::InvalidCounts {
                reason: format!(
                    "matrix has {} states but {} symbols were given",
                    counts.nrows(),
                    state_symbols.len()
                ),
            });
        }
        for i in 0..counts.nrows() {
            for j in 0..counts.ncols() {
                let c = counts[(i, j)];
                if !c.is_finite() || c < 0.0 {
                    return Err(CountError::InvalidCounts {
                        reason: format!("counts[{i}][{j}] = {c} (must be finite and >= 0)"),
                    });
                }
            }
        }
        Ok(Self {
            counts,
            lagtime,
            mode,
            state_symbols,
        })
    }

    /// Crate-internal constructor that skips validation.
    pub(crate) fn new_unchecked(
        counts: DMatrix<f64>,
        lagtime: usize,
        mode: CountingMode,
        state_symbols: Vec<usize>,
    ) -> Self {
        Self {
            counts,
            lagtime,
            mode,
            state_symbols,
        }
    }

    /// Returns the count matrix.
    pub fn counts(&self) -> &DMatrix<f64> {
        &self.counts
    }

    /// Returns the lag time the counts were taken at.
    pub fn lagtime(&self) -> usize {
        self.lagtime
    }

    /// Returns the counting mode.
    pub fn mode(&self) -> CountingMode {
        self.mode
    }

    /// Returns the original state labels of the matrix rows/columns.
    pub fn state_symbols(&self) -> &[usize] {
        &self.state_symbols
    }

    /// Returns the number of states in the model.
    pub fn n_states(&self) -> usize {
        self.counts.nrows()
    }

    /// Returns the total count mass in the matrix.
    pub fn total_count(&self) -> f64 {
        self.counts.iter().sum()
    }

    /// Returns the per-state outgoing count sums.
    pub fn row_sums(&self) -> Vec<f64> {
        (0..self.n_states()).map(|i| self.counts.row(i).sum()).collect()
    }

    /// Restricts the model to a subset of states given by internal indices.
    ///
    /// Indices must be sorted ascending and in range; this is a
    /// crate-internal helper used by connectivity restriction.
    pub(crate) fn submodel(&self, indices: &[usize]) -> CountModel {
        let m = indices.len();
        let mut sub = DMatrix::zeros(m, m);
        for (a, &i) in indices.iter().enumerate() {
            for (b, &j) in indices.iter().enumerate() {
                sub[(a, b)] = self.counts[(i, j)];
            }
        }
        let symbols = indices.iter().map(|&i| self.state_symbols[i]).collect();
        CountModel::new_unchecked(sub, self.lagtime, self.mode, symbols)
    }
}
