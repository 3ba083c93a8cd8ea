//! Error types for the kronos-msm crate.

/// Error type for all fallible operations in the kronos-msm crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MsmError {
    /// Returned when a count model has no states.
    #[error("count model has no states")]
    EmptyCounts,

    /// Returned when a state has no outgoing counts, which makes a
    /// transition probability row undefined. Restricting to the largest
    /// connected set beforehand prevents this.
    #[error("state {state} has no outgoing counts (model not connected?)")]
    DisconnectedState {
        /// Internal index of the offending state.
        state: usize,
    },

    /// Returned when a transition matrix fails row-stochastic validation.
    #[error("invalid transition matrix: {reason}")]
    InvalidTransitionMatrix {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when an estimator parameter is out of range.
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The rejected value, formatted.
        value: String,
    },

    /// Returned when fewer than 2 posterior samples are requested.
    #[error("need at least 2 posterior samples, got {n_samples}")]
    InvalidSampleCount {
        /// Requested number of samples.
        n_samples: usize,
    },

    /// Returned when a confidence level is outside (0, 1).
    #[error("confidence level must be in (0, 1), got {confidence}")]
    InvalidConfidence {
        /// The rejected confidence level.
        confidence: f64,
    },

    /// Returned when summarizing an empty posterior ensemble.
    #[error("posterior ensemble is empty")]
    EmptyEnsemble,

    /// Returned when posterior sampling fails internally.
    #[error("posterior sampling failed: {reason}")]
    Sampling {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a simulation start state is out of range.
    #[error("initial state {state} out of range for {n_states} states")]
    InvalidInitialState {
        /// Requested start state.
        state: usize,
        /// Number of states in the model.
        n_states: usize,
    },
}
