//! Error types for the kronos-count crate.

/// Error type for all fallible operations in the kronos-count crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CountError {
    /// Returned when the trajectory set is empty.
    #[error("trajectory set is empty")]
    EmptyTrajectorySet,

    /// Returned when the requested lag time is zero.
    #[error("lag time must be positive")]
    ZeroLagtime,

    /// Returned when no transition pair could be counted at the requested
    /// lag (every trajectory is shorter than `lagtime + 1`).
    #[error("no transitions countable at lag {lagtime}")]
    NoTransitions {
        /// The lag time that produced no counts.
        lagtime: usize,
    },

    /// Returned when a count matrix is constructed from invalid parts.
    #[error("invalid count matrix: {reason}")]
    InvalidCounts {
        /// Description of the problem.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_trajectory_set() {
        let e = CountError::EmptyTrajectorySet;
        assert_eq!(e.to_string(), "trajectory set is empty");
    }

    #[test]
    fn error_zero_lagtime() {
        let e = CountError::ZeroLagtime;
        assert_eq!(e.to_string(), "lag time must be positive");
    }

    #[test]
    fn error_no_transitions() {
        let e = CountError::NoTransitions { lagtime: 50 };
        assert_eq!(e.to_string(), "no transitions countable at lag 50");
    }

    #[test]
    fn error_invalid_counts() {
        let e = CountError::InvalidCounts {
            reason: "not square".to_string(),
        };
        assert_eq!(e.to_string(), "invalid count matrix: not square");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CountError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CountError>();
    }
}
