//! The implied-timescale sweep over lag times.

use kronos_count::{CountError, count_transitions, restrict_to_largest_connected};
use kronos_msm::{MsmConfig, estimate_msm, sample_posterior, summarize_timescales};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use tracing::{info, warn};

use crate::config::SweepConfig;
use crate::error::SweepError;
use crate::result::{FailureReason, LagEntry, LagOutcome, SweepResult};

/// Computes implied relaxation timescales for every lag time in the
/// configuration.
///
/// For each lag time, independently: count transitions, restrict to the
/// largest connected set, estimate an MSM (maximum-likelihood point estimate
/// or a Dirichlet-posterior ensemble), and extract the leading
/// `min(n_timescales, n_connected_states - 1)` timescales.
///
/// Entries appear in input lag-time order regardless of the worker count.
/// A lag time that cannot produce timescales (too long for every
/// trajectory, or connectivity collapsed to a single state) is recorded as
/// a failed entry with a [`FailureReason`] and logged as a warning — it
/// does not abort the sweep.
///
/// Bayesian per-lag RNG streams are derived from a base seed plus the lag
/// index, so the result is identical at every `n_jobs`.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SweepError::EmptyTrajectorySet`] | `trajectories` is empty |
/// | [`SweepError::EmptyLagtimes`] (and the other validation variants) | `config.validate()` fails |
/// | [`SweepError::ThreadPool`] | the worker pool could not be built |
/// | [`SweepError::AllLagtimesFailed`] | every lag time failed |
#[tracing::instrument(skip(trajectories, config), fields(n_lagtimes = config.lagtimes().len(), n_jobs = config.n_jobs(), bayesian = config.bayesian()))]
pub fn implied_timescales(
    trajectories: &[Vec<usize>],
    config: &SweepConfig,
) -> Result<SweepResult, SweepError> {
    config.validate()?;
    if trajectories.is_empty() {
        return Err(SweepError::EmptyTrajectorySet);
    }

    // Drawn once up front so results do not depend on worker scheduling.
    let base_seed = config.seed().unwrap_or_else(rand::random);

    let worker = |(index, &lagtime): (usize, &usize)| -> LagEntry {
        let seed = base_seed.wrapping_add(index as u64);
        let entry = process_lagtime(trajectories, lagtime, config, seed);
        if let Some(reason) = entry.failure() {
            warn!(lagtime, %reason, "lag time produced no timescales");
        }
        entry
    };

    let entries: Vec<LagEntry> = if config.n_jobs() > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.n_jobs())
            .build()
            .map_err(|e| SweepError::ThreadPool {
                reason: e.to_string(),
            })?;
        // par_iter + collect keeps input order, whatever the completion order.
        pool.install(|| {
            config
                .lagtimes()
                .par_iter()
                .enumerate()
                .map(worker)
                .collect()
        })
    } else {
        config.lagtimes().iter().enumerate().map(worker).collect()
    };

    if entries.iter().all(|e| e.is_failed()) {
        let summary = entries
            .iter()
            .filter_map(|e| e.failure().map(|r| format!("lag {}: {}", e.lagtime(), r)))
            .collect::<Vec<_>>()
            .join("; ");
        return Err(SweepError::AllLagtimesFailed { summary });
    }

    info!(
        n_entries = entries.len(),
        n_failed = entries.iter().filter(|e| e.is_failed()).count(),
        "implied-timescale sweep finished"
    );

    Ok(SweepResult::new(entries, config.bayesian()))
}

/// Count → restrict → estimate → extract, for one lag time.
fn process_lagtime(
    trajectories: &[Vec<usize>],
    lagtime: usize,
    config: &SweepConfig,
    seed: u64,
) -> LagEntry {
    let counts = match count_transitions(trajectories, lagtime, config.counting_mode()) {
        Ok(counts) => counts,
        Err(CountError::NoTransitions { lagtime }) => {
            return LagEntry::new(lagtime, LagOutcome::Failed(FailureReason::NoTransitions { lagtime }));
        }
        // Empty set / zero lag are rejected by up-front validation; anything
        // else surfacing here is an estimation-level failure.
        Err(e) => {
            return LagEntry::new(
                lagtime,
                LagOutcome::Failed(FailureReason::Estimation {
                    message: e.to_string(),
                }),
            );
        }
    };

    let counts = restrict_to_largest_connected(&counts);
    if counts.n_states() < 2 {
        return LagEntry::new(
            lagtime,
            LagOutcome::Failed(FailureReason::ConnectivityCollapse {
                n_states: counts.n_states(),
            }),
        );
    }

    let mut msm_config = MsmConfig::new().with_reversible(config.reversible());
    if let Some(alpha) = config.dirichlet_alpha() {
        msm_config = msm_config.with_dirichlet_alpha(alpha);
    }

    let outcome = if config.bayesian() {
        let mut rng = StdRng::seed_from_u64(seed);
        sample_posterior(&counts, &msm_config, config.n_samples(), &mut rng)
            .and_then(|samples| {
                summarize_timescales(&samples, config.n_timescales(), config.confidence())
            })
            .map(LagOutcome::Interval)
    } else {
        estimate_msm(&counts, &msm_config)
            .map(|msm| LagOutcome::Point(msm.timescales(config.n_timescales())))
    };

    match outcome {
        Ok(outcome) => LagEntry::new(lagtime, outcome),
        Err(e) => LagEntry::new(
            lagtime,
            LagOutcome::Failed(FailureReason::Estimation {
                message: e.to_string(),
            }),
        ),
    }
}
