//! Discrete trajectory simulation from an estimated model.

use rand::Rng;

use crate::error::MsmError;
use crate::model::MarkovStateModel;

/// Simulates a discrete state trajectory of `n_steps` states, starting from
/// `initial_state`.
///
/// Each step draws the successor by walking the cumulative distribution of
/// the current state's transition row. Note the model steps in units of its
/// lag time, so the returned sequence is spaced `model.lagtime()` frames
/// apart in original trajectory time.
///
/// # Errors
///
/// Returns [`MsmError::InvalidInitialState`] if `initial_state` is out of
/// range.
pub fn simulate_trajectory(
    model: &MarkovStateModel,
    n_steps: usize,
    initial_state: usize,
    rng: &mut impl Rng,
) -> Result<Vec<usize>, MsmError> {
    let n = model.n_states();
    if initial_state >= n {
        return Err(MsmError::InvalidInitialState {
            state: initial_state,
            n_states: n,
        });
    }

    let t = model.transition_matrix();
    let mut trajectory = Vec::with_capacity(n_steps);
    let mut current = initial_state;

    for _ in 0..n_steps {
        trajectory.push(current);
        let u: f64 = rng.random();
        let mut cumulative = 0.0;
        let mut next = n - 1; // rounding fallback
        for j in 0..n {
            cumulative += t[(current, j)];
            if cumulative >= u {
                next = j;
                break;
            }
        }
        current = next;
    }

    Ok(trajectory)
}
