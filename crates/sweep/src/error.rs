//! Error types for the kronos-sweep crate.

/// Error type for all fallible operations in the kronos-sweep crate.
///
/// These are the hard failures of a sweep: invalid inputs rejected before
/// any estimation starts, and the case where every lag time failed.
/// Per-lag-time failures are not errors; they are recorded in the sweep
/// result as [`crate::FailureReason`] entries.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SweepError {
    /// Returned when the trajectory set is empty.
    #[error("trajectory set is empty")]
    EmptyTrajectorySet,

    /// Returned when the lag time list is empty.
    #[error("lag time list is empty")]
    EmptyLagtimes,

    /// Returned when a lag time is zero.
    #[error("lag time at index {index} is zero (must be positive)")]
    ZeroLagtime {
        /// Position of the offending lag time in the input list.
        index: usize,
    },

    /// Returned when the requested timescale count is zero.
    #[error("requested timescale count must be positive")]
    InvalidTimescaleCount,

    /// Returned when the worker count is zero.
    #[error("worker count must be positive")]
    InvalidWorkerCount,

    /// Returned when fewer than 2 posterior samples are requested in
    /// Bayesian mode.
    #[error("need at least 2 posterior samples, got {n_samples}")]
    InvalidSampleCount {
        /// Requested number of samples.
        n_samples: usize,
    },

    /// Returned when the confidence level is outside (0, 1).
    #[error("confidence level must be in (0, 1), got {confidence}")]
    InvalidConfidence {
        /// The rejected confidence level.
        confidence: f64,
    },

    /// Returned when the Dirichlet prior pseudo-count is not positive.
    #[error("dirichlet_alpha must be finite and positive, got {alpha}")]
    InvalidDirichletAlpha {
        /// The rejected value.
        alpha: f64,
    },

    /// Returned when the worker pool could not be constructed.
    #[error("failed to build worker pool: {reason}")]
    ThreadPool {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when every lag time failed to produce timescales.
    #[error("every lag time failed: {summary}")]
    AllLagtimesFailed {
        /// Per-lag failure descriptions, joined.
        summary: String,
    },
}
