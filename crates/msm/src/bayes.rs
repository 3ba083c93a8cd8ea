//! Dirichlet posterior sampling and timescale uncertainty summaries.

use kronos_count::CountModel;
use nalgebra::DMatrix;
use rand::Rng;
use rand_distr::{Distribution, Gamma};
use tracing::debug;

use crate::config::MsmConfig;
use crate::error::MsmError;
use crate::estimate::estimate_from_matrix;
use crate::model::MarkovStateModel;

/// Per-rank summary of a posterior timescale distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct TimescaleSummary {
    mean: f64,
    lower: f64,
    upper: f64,
}

impl TimescaleSummary {
    /// Creates a new summary (crate-internal constructor).
    pub(crate) fn new(mean: f64, lower: f64, upper: f64) -> Self {
        Self { mean, lower, upper }
    }

    /// Returns the posterior sample mean.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Returns the lower confidence bound.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Returns the upper confidence bound.
    pub fn upper(&self) -> f64 {
        self.upper
    }
}

/// Draws posterior transition-matrix samples from a count model.
///
/// Each row `i` of a sample is drawn from `Dirichlet(c_i1 + α, …, c_in + α)`
/// (via normalized Gamma draws), converted back to a synthetic count matrix
/// at the original per-row totals, and re-estimated under `config`. The
/// prior pseudo-count `α` defaults to `1 / n_states` and keeps every sample
/// fully connected, so all samples resolve the same number of processes.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`MsmError::InvalidSampleCount`] | `n_samples < 2` |
/// | [`MsmError::EmptyCounts`] | count model has no states |
/// | [`MsmError::DisconnectedState`] | a state has no outgoing counts |
/// | [`MsmError::Sampling`] | a Gamma draw could not be set up |
pub fn sample_posterior(
    counts: &CountModel,
    config: &MsmConfig,
    n_samples: usize,
    rng: &mut impl Rng,
) -> Result<Vec<MarkovStateModel>, MsmError> {
    config.validate()?;
    if n_samples < 2 {
        return Err(MsmError::InvalidSampleCount { n_samples });
    }
    let n = counts.n_states();
    if n == 0 {
        return Err(MsmError::EmptyCounts);
    }

    let row_sums = counts.row_sums();
    if let Some(state) = row_sums.iter().position(|&s| s <= 0.0) {
        return Err(MsmError::DisconnectedState { state });
    }

    let alpha = config.resolved_alpha(n);
    let c = counts.counts();

    let mut samples = Vec::with_capacity(n_samples);
    for _ in 0..n_samples {
        let mut sampled = DMatrix::zeros(n, n);
        for i in 0..n {
            // Dirichlet draw via Gamma(c_ij + alpha, 1) normalization.
            let mut row = vec![0.0; n];
            let mut row_total = 0.0;
            for (j, value) in row.iter_mut().enumerate() {
                let shape = c[(i, j)] + alpha;
                let gamma = Gamma::new(shape, 1.0).map_err(|e| MsmError::Sampling {
                    reason: format!("Gamma(shape={shape}): {e}"),
                })?;
                *value = gamma.sample(rng);
                row_total += *value;
            }
            if row_total <= 0.0 {
                return Err(MsmError::Sampling {
                    reason: format!("degenerate Dirichlet draw for state {i}"),
                });
            }
            for j in 0..n {
                sampled[(i, j)] = row_sums[i] * row[j] / row_total;
            }
        }
        samples.push(estimate_from_matrix(
            &sampled,
            counts.lagtime(),
            counts.state_symbols(),
            config,
        )?);
    }

    debug!(
        n_samples,
        n_states = n,
        alpha,
        lagtime = counts.lagtime(),
        "sampled transition matrix posterior"
    );

    Ok(samples)
}

/// Summarizes posterior timescales per rank: mean and the central
/// `confidence` interval (default convention: 0.95, i.e. the 2.5 and 97.5
/// percentiles).
///
/// The number of summarized ranks is `min(k, r)` where `r` is the smallest
/// number of timescales any sample resolves.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`MsmError::EmptyEnsemble`] | `samples` is empty |
/// | [`MsmError::InvalidConfidence`] | `confidence` outside (0, 1) |
pub fn summarize_timescales(
    samples: &[MarkovStateModel],
    k: usize,
    confidence: f64,
) -> Result<Vec<TimescaleSummary>, MsmError> {
    if samples.is_empty() {
        return Err(MsmError::EmptyEnsemble);
    }
    if !confidence.is_finite() || confidence <= 0.0 || confidence >= 1.0 {
        return Err(MsmError::InvalidConfidence { confidence });
    }

    let per_sample: Vec<Vec<f64>> = samples.iter().map(|m| m.timescales(k)).collect();
    let n_ranks = per_sample.iter().map(|ts| ts.len()).min().unwrap_or(0);

    let p_lower = (1.0 - confidence) / 2.0;
    let p_upper = 1.0 - p_lower;

    let mut summaries = Vec::with_capacity(n_ranks);
    for rank in 0..n_ranks {
        let mut values: Vec<f64> = per_sample.iter().map(|ts| ts[rank]).collect();
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        summaries.push(TimescaleSummary::new(
            mean,
            interpolated_quantile(&values, p_lower),
            interpolated_quantile(&values, p_upper),
        ));
    }
    Ok(summaries)
}

/// Linear-interpolation quantile of pre-sorted data (R type-7 convention).
fn interpolated_quantile(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    let position = p * (n - 1) as f64;
    let below = position.floor() as usize;
    let above = (below + 1).min(n - 1);
    let fraction = position - below as f64;
    sorted[below] + fraction * (sorted[above] - sorted[below])
}
