//! Maximum-likelihood MSM estimation from transition counts.

use kronos_count::CountModel;
use nalgebra::DMatrix;
use tracing::{debug, warn};

use crate::config::MsmConfig;
use crate::error::MsmError;
use crate::model::{MarkovStateModel, stationary_distribution};

/// Estimates a Markov state model from a transition count model.
///
/// The count model is expected to be restricted to a strongly connected set
/// of states first (see `kronos_count::restrict_to_largest_connected`);
/// a state without outgoing counts is rejected.
///
/// With `config.reversible()` (the default) the estimate is constrained to
/// detailed balance via a fixed-point iteration on the symmetric flux
/// matrix; otherwise each row of the counts is normalized independently.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`MsmError::EmptyCounts`] | count model has no states |
/// | [`MsmError::DisconnectedState`] | a state has no outgoing counts |
/// | [`MsmError::InvalidParameter`] | `config.validate()` fails |
pub fn estimate_msm(counts: &CountModel, config: &MsmConfig) -> Result<MarkovStateModel, MsmError> {
    config.validate()?;
    estimate_from_matrix(
        counts.counts(),
        counts.lagtime(),
        counts.state_symbols(),
        config,
    )
}

/// Crate-internal entry point shared with the posterior sampler.
pub(crate) fn estimate_from_matrix(
    counts: &DMatrix<f64>,
    lagtime: usize,
    state_symbols: &[usize],
    config: &MsmConfig,
) -> Result<MarkovStateModel, MsmError> {
    let n = counts.nrows();
    if n == 0 {
        return Err(MsmError::EmptyCounts);
    }

    let row_sums: Vec<f64> = (0..n).map(|i| counts.row(i).sum()).collect();
    if let Some(state) = row_sums.iter().position(|&s| s <= 0.0) {
        return Err(MsmError::DisconnectedState { state });
    }

    let (transition_matrix, stationary) = if config.reversible() {
        reversible_mle(counts, &row_sums, config.max_iter(), config.tol())
    } else {
        let t = row_normalize(counts, &row_sums);
        let pi = stationary_distribution(&t);
        (t, pi)
    };

    debug!(
        lagtime,
        n_states = n,
        reversible = config.reversible(),
        "estimated transition matrix"
    );

    Ok(MarkovStateModel::from_parts(
        transition_matrix,
        stationary,
        lagtime,
        config.reversible(),
        state_symbols.to_vec(),
    ))
}

/// Independent row normalization: `t_ij = c_ij / c_i`.
fn row_normalize(counts: &DMatrix<f64>, row_sums: &[f64]) -> DMatrix<f64> {
    let n = counts.nrows();
    let mut t = DMatrix::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            t[(i, j)] = counts[(i, j)] / row_sums[i];
        }
    }
    t
}

/// Reversible maximum-likelihood estimate.
///
/// Fixed-point iteration on the unnormalized symmetric flux matrix `x`:
///
/// ```text
/// x_ij ← (c_ij + c_ji) / (c_i / x_i + c_j / x_j)
/// ```
///
/// where `x_i = Σ_j x_ij`. At the fixed point `π_i ∝ x_i` and
/// `t_ij = x_ij / x_i`, which maximizes the likelihood under the detailed
/// balance constraint `π_i t_ij = π_j t_ji`. Non-convergence within
/// `max_iter` is logged, not fatal; the last iterate is used.
fn reversible_mle(
    counts: &DMatrix<f64>,
    row_sums: &[f64],
    max_iter: usize,
    tol: f64,
) -> (DMatrix<f64>, Vec<f64>) {
    let n = counts.nrows();

    // Start from the symmetrized counts, normalized to unit total mass.
    let mut x = (counts + counts.transpose()).scale(0.5);
    let total: f64 = x.iter().sum();
    x.scale_mut(1.0 / total);

    let mut x_row: Vec<f64> = (0..n).map(|i| x.row(i).sum()).collect();
    let mut converged = false;
    let mut iterations = 0usize;

    for iter in 0..max_iter {
        let mut next = DMatrix::zeros(n, n);
        for i in 0..n {
            for j in 0..n {
                let c_sym = counts[(i, j)] + counts[(j, i)];
                if c_sym > 0.0 {
                    let denom = row_sums[i] / x_row[i] + row_sums[j] / x_row[j];
                    next[(i, j)] = c_sym / denom;
                }
            }
        }
        let total: f64 = next.iter().sum();
        next.scale_mut(1.0 / total);

        let delta = x
            .iter()
            .zip(next.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0_f64, f64::max);

        x = next;
        x_row = (0..n).map(|i| x.row(i).sum()).collect();
        iterations = iter + 1;

        if delta < tol {
            converged = true;
            break;
        }
    }

    if !converged {
        warn!(
            max_iter,
            tol, "reversible MLE fixed point did not converge, using last iterate"
        );
    } else {
        debug!(iterations, "reversible MLE converged");
    }

    let mut t = DMatrix::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            t[(i, j)] = x[(i, j)] / x_row[i];
        }
    }
    let pi_total: f64 = x_row.iter().sum();
    let pi = x_row.iter().map(|&v| v / pi_total).collect();
    (t, pi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use kronos_count::CountingMode;

    fn count_model(entries: &[f64], n: usize) -> CountModel {
        CountModel::from_parts(
            DMatrix::from_row_slice(n, n, entries),
            1,
            CountingMode::Sliding,
            (0..n).collect(),
        )
        .unwrap()
    }

    #[test]
    fn nonreversible_is_row_normalization() {
        let counts = count_model(&[6.0, 2.0, 1.0, 3.0], 2);
        let config = MsmConfig::new().with_reversible(false);
        let msm = estimate_msm(&counts, &config).unwrap();
        let t = msm.transition_matrix();

        assert_relative_eq!(t[(0, 0)], 0.75, epsilon = 1e-12);
        assert_relative_eq!(t[(0, 1)], 0.25, epsilon = 1e-12);
        assert_relative_eq!(t[(1, 0)], 0.25, epsilon = 1e-12);
        assert_relative_eq!(t[(1, 1)], 0.75, epsilon = 1e-12);
    }

    #[test]
    fn rows_sum_to_one_both_estimators() {
        let counts = count_model(
            &[
                50.0, 5.0, 2.0, //
                4.0, 80.0, 6.0, //
                3.0, 5.0, 40.0,
            ],
            3,
        );
        for reversible in [true, false] {
            let config = MsmConfig::new().with_reversible(reversible);
            let msm = estimate_msm(&counts, &config).unwrap();
            for i in 0..3 {
                let row_sum: f64 = msm.transition_matrix().row(i).sum();
                assert_relative_eq!(row_sum, 1.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn reversible_satisfies_detailed_balance() {
        let counts = count_model(
            &[
                50.0, 5.0, 2.0, //
                4.0, 80.0, 6.0, //
                3.0, 5.0, 40.0,
            ],
            3,
        );
        let msm = estimate_msm(&counts, &MsmConfig::new()).unwrap();
        let t = msm.transition_matrix();
        let pi = msm.stationary_distribution();
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(
                    pi[i] * t[(i, j)],
                    pi[j] * t[(j, i)],
                    epsilon = 1e-8,
                    max_relative = 1e-6
                );
            }
        }
    }

    #[test]
    fn reversible_matches_on_symmetric_counts() {
        // Already-symmetric counts: reversible and plain normalization agree.
        let counts = count_model(&[8.0, 2.0, 2.0, 8.0], 2);
        let rev = estimate_msm(&counts, &MsmConfig::new()).unwrap();
        let plain = estimate_msm(&counts, &MsmConfig::new().with_reversible(false)).unwrap();
        for i in 0..2 {
            for j in 0..2 {
                assert_relative_eq!(
                    rev.transition_matrix()[(i, j)],
                    plain.transition_matrix()[(i, j)],
                    epsilon = 1e-8
                );
            }
        }
    }

    #[test]
    fn stationary_matches_count_fractions_reversible_two_state() {
        // Two-state reversible MLE has a closed form: pi follows the
        // symmetrized count mass per state.
        let counts = count_model(&[90.0, 10.0, 10.0, 290.0], 2);
        let msm = estimate_msm(&counts, &MsmConfig::new()).unwrap();
        let pi = msm.stationary_distribution();
        assert_relative_eq!(pi[0], 100.0 / 400.0, epsilon = 1e-6);
        assert_relative_eq!(pi[1], 300.0 / 400.0, epsilon = 1e-6);
    }

    #[test]
    fn zero_row_is_rejected() {
        let counts = count_model(&[1.0, 1.0, 0.0, 0.0], 2);
        let result = estimate_msm(&counts, &MsmConfig::new());
        assert!(matches!(result, Err(MsmError::DisconnectedState { state: 1 })));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let counts = count_model(&[1.0, 1.0, 1.0, 1.0], 2);
        let config = MsmConfig::new().with_tol(-1.0);
        let result = estimate_msm(&counts, &config);
        assert!(matches!(result, Err(MsmError::InvalidParameter { name: "tol", .. })));
    }

    #[test]
    fn symbols_carry_through() {
        let model = CountModel::from_parts(
            DMatrix::from_row_slice(2, 2, &[5.0, 1.0, 1.0, 5.0]),
            2,
            CountingMode::Sliding,
            vec![3, 8],
        )
        .unwrap();
        let msm = estimate_msm(&model, &MsmConfig::new()).unwrap();
        assert_eq!(msm.state_symbols(), &[3, 8]);
        assert_eq!(msm.lagtime(), 2);
    }
}
