//! Transition counting at a fixed lag time.

use nalgebra::DMatrix;
use tracing::debug;

use crate::error::CountError;
use crate::matrix::CountModel;

/// How transition pairs are extracted from a trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountingMode {
    /// Count every window `(s[t], s[t + lag])` for `t = 0 .. len - lag`.
    Sliding,
    /// Sliding counts divided by the lag. Overlapping windows at lag τ reuse
    /// each frame τ times, so raw sliding counts overstate the effective
    /// sample size; the correction matters for posterior sampling.
    Effective,
}

/// Counts state-to-state transitions at the given lag time.
///
/// Trajectories shorter than `lagtime + 1` contribute no counts. The state
/// space is inferred from the largest label observed across all
/// trajectories, so absent intermediate labels yield empty rows/columns
/// (removed later by connectivity restriction).
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`CountError::EmptyTrajectorySet`] | `trajectories` is empty |
/// | [`CountError::ZeroLagtime`] | `lagtime == 0` |
/// | [`CountError::NoTransitions`] | every trajectory is too short for the lag |
pub fn count_transitions(
    trajectories: &[Vec<usize>],
    lagtime: usize,
    mode: CountingMode,
) -> Result<CountModel, CountError> {
    if trajectories.is_empty() {
        return Err(CountError::EmptyTrajectorySet);
    }
    if lagtime == 0 {
        return Err(CountError::ZeroLagtime);
    }

    let n_states = match trajectories.iter().flat_map(|t| t.iter()).max() {
        Some(&max_label) => max_label + 1,
        // All trajectories empty: nothing observable at any lag.
        None => return Err(CountError::NoTransitions { lagtime }),
    };

    let mut counts = DMatrix::zeros(n_states, n_states);
    let mut n_pairs = 0usize;
    for traj in trajectories {
        if traj.len() <= lagtime {
            continue;
        }
        for t in 0..traj.len() - lagtime {
            counts[(traj[t], traj[t + lagtime])] += 1.0;
            n_pairs += 1;
        }
    }

    if n_pairs == 0 {
        return Err(CountError::NoTransitions { lagtime });
    }

    if mode == CountingMode::Effective {
        counts.scale_mut(1.0 / lagtime as f64);
    }

    debug!(lagtime, n_states, n_pairs, ?mode, "counted transitions");

    Ok(CountModel::new_unchecked(
        counts,
        lagtime,
        mode,
        (0..n_states).collect(),
    ))
}
