//! Estimated Markov state model.

use nalgebra::DMatrix;
use tracing::warn;

use crate::error::MsmError;
use crate::spectrum;

/// A Markov state model: a row-stochastic transition matrix at a fixed lag
/// time, together with its stationary distribution.
///
/// Row `i` contains the probabilities of moving from state `i` to every
/// state within one lag step. Index `i` corresponds to the original cluster
/// label `state_symbols[i]`.
#[derive(Debug, Clone)]
pub struct MarkovStateModel {
    transition_matrix: DMatrix<f64>,
    stationary: Vec<f64>,
    lagtime: usize,
    reversible: bool,
    state_symbols: Vec<usize>,
}

impl MarkovStateModel {
    /// Crate-internal constructor used by the estimators, which guarantee
    /// the invariants themselves.
    pub(crate) fn from_parts(
        transition_matrix: DMatrix<f64>,
        stationary: Vec<f64>,
        lagtime: usize,
        reversible: bool,
        state_symbols: Vec<usize>,
    ) -> Self {
        Self {
            transition_matrix,
            stationary,
            lagtime,
            reversible,
            state_symbols,
        }
    }

    /// Builds a model directly from a transition matrix.
    ///
    /// Validates that the matrix is square and row-stochastic (all entries
    /// finite, in `[0, 1]`, rows summing to ~1.0) and computes the
    /// stationary distribution by power iteration.
    ///
    /// # Errors
    ///
    /// Returns [`MsmError::InvalidTransitionMatrix`] when validation fails,
    /// [`MsmError::EmptyCounts`] for a 0x0 matrix.
    pub fn from_transition_matrix(
        transition_matrix: DMatrix<f64>,
        lagtime: usize,
        reversible: bool,
    ) -> Result<Self, MsmError> {
        let n = transition_matrix.nrows();
        if n == 0 {
            return Err(MsmError::EmptyCounts);
        }
        if transition_matrix.ncols() != n {
            return Err(MsmError::InvalidTransitionMatrix {
                reason: format!(
                    "matrix is {}x{}, expected square",
                    transition_matrix.nrows(),
                    transition_matrix.ncols()
                ),
            });
        }
        for i in 0..n {
            let mut sum = 0.0;
            for j in 0..n {
                let p = transition_matrix[(i, j)];
                if !p.is_finite() {
                    return Err(MsmError::InvalidTransitionMatrix {
                        reason: format!("t[{i}][{j}] is not finite: {p}"),
                    });
                }
                if !(0.0..=1.0).contains(&p) {
                    return Err(MsmError::InvalidTransitionMatrix {
                        reason: format!("t[{i}][{j}] = {p} is outside [0, 1]"),
                    });
                }
                sum += p;
            }
            if (sum - 1.0).abs() > 1e-6 {
                return Err(MsmError::InvalidTransitionMatrix {
                    reason: format!("row {i} sums to {sum}, expected ~1.0"),
                });
            }
        }

        let stationary = stationary_distribution(&transition_matrix);
        let state_symbols = (0..n).collect();
        Ok(Self::from_parts(
            transition_matrix,
            stationary,
            lagtime,
            reversible,
            state_symbols,
        ))
    }

    /// Returns the row-stochastic transition matrix.
    pub fn transition_matrix(&self) -> &DMatrix<f64> {
        &self.transition_matrix
    }

    /// Returns the stationary distribution.
    pub fn stationary_distribution(&self) -> &[f64] {
        &self.stationary
    }

    /// Returns the lag time the model was estimated at.
    pub fn lagtime(&self) -> usize {
        self.lagtime
    }

    /// Returns whether the model was estimated under detailed balance.
    pub fn reversible(&self) -> bool {
        self.reversible
    }

    /// Returns the original state labels of the matrix rows/columns.
    pub fn state_symbols(&self) -> &[usize] {
        &self.state_symbols
    }

    /// Returns the number of states.
    pub fn n_states(&self) -> usize {
        self.transition_matrix.nrows()
    }

    /// Returns the leading `min(k, n_states - 1)` implied relaxation
    /// timescales, descending.
    ///
    /// The stationary eigenvalue is always excluded; the remaining
    /// eigenvalues are taken by magnitude and mapped through
    /// `-lagtime / ln(|λ|)`. A magnitude at or above 1 maps to infinity, a
    /// zero magnitude to 0.
    pub fn timescales(&self, k: usize) -> Vec<f64> {
        spectrum::implied_timescales(self, k)
    }

    /// Returns all eigenvalue magnitudes, descending (stationary first).
    pub fn eigenvalue_magnitudes(&self) -> Vec<f64> {
        spectrum::eigenvalue_magnitudes(self)
    }
}

/// Stationary distribution by power iteration on `π ← π T`.
pub(crate) fn stationary_distribution(t: &DMatrix<f64>) -> Vec<f64> {
    let n = t.nrows();
    let mut pi = vec![1.0 / n as f64; n];
    let mut next = vec![0.0; n];

    let mut converged = false;
    for _ in 0..10_000 {
        for j in 0..n {
            next[j] = (0..n).map(|i| pi[i] * t[(i, j)]).sum();
        }
        let norm: f64 = next.iter().sum();
        if norm > 0.0 {
            for v in next.iter_mut() {
                *v /= norm;
            }
        }
        let delta = pi
            .iter()
            .zip(next.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0_f64, f64::max);
        std::mem::swap(&mut pi, &mut next);
        if delta < 1e-14 {
            converged = true;
            break;
        }
    }
    if !converged {
        warn!(n_states = n, "stationary distribution power iteration did not fully converge");
    }
    pi
}
