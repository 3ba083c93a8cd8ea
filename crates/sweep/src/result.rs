//! Output types of the implied-timescale sweep.

/// Why a single lag time produced no timescales.
///
/// These are the recoverable per-lag failures of the sweep; the lag's entry
/// stays in the result with zero timescales and one of these reasons.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FailureReason {
    /// No transition pair was countable at this lag (every trajectory is
    /// shorter than `lagtime + 1`).
    #[error("no transitions countable at lag {lagtime}")]
    NoTransitions {
        /// The lag time that produced no counts.
        lagtime: usize,
    },

    /// The largest connected set collapsed below 2 states, leaving no
    /// non-stationary process to resolve.
    #[error("largest connected set has {n_states} state(s), need at least 2")]
    ConnectivityCollapse {
        /// Number of surviving states.
        n_states: usize,
    },

    /// MSM estimation or posterior sampling failed.
    #[error("estimation failed: {message}")]
    Estimation {
        /// The underlying estimator error, formatted.
        message: String,
    },
}

/// Per-rank timescale values of one lag time.
#[derive(Debug, Clone, PartialEq)]
pub enum LagOutcome {
    /// Maximum-likelihood point estimates, descending.
    Point(Vec<f64>),
    /// Posterior summaries (mean and confidence bounds), descending by mean.
    Interval(Vec<kronos_msm::TimescaleSummary>),
    /// This lag produced no timescales.
    Failed(FailureReason),
}

/// The result of one lag time within a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct LagEntry {
    lagtime: usize,
    outcome: LagOutcome,
}

impl LagEntry {
    /// Creates a new entry (crate-internal constructor).
    pub(crate) fn new(lagtime: usize, outcome: LagOutcome) -> Self {
        Self { lagtime, outcome }
    }

    /// Returns the lag time this entry belongs to.
    pub fn lagtime(&self) -> usize {
        self.lagtime
    }

    /// Returns the outcome of this lag time.
    pub fn outcome(&self) -> &LagOutcome {
        &self.outcome
    }

    /// Returns the central timescale estimates, descending. Empty for a
    /// failed lag time.
    pub fn timescales(&self) -> Vec<f64> {
        match &self.outcome {
            LagOutcome::Point(ts) => ts.clone(),
            LagOutcome::Interval(summaries) => summaries.iter().map(|s| s.mean()).collect(),
            LagOutcome::Failed(_) => Vec::new(),
        }
    }

    /// Returns the lower confidence bounds (Bayesian sweeps only).
    pub fn lower_bounds(&self) -> Option<Vec<f64>> {
        match &self.outcome {
            LagOutcome::Interval(summaries) => {
                Some(summaries.iter().map(|s| s.lower()).collect())
            }
            _ => None,
        }
    }

    /// Returns the upper confidence bounds (Bayesian sweeps only).
    pub fn upper_bounds(&self) -> Option<Vec<f64>> {
        match &self.outcome {
            LagOutcome::Interval(summaries) => {
                Some(summaries.iter().map(|s| s.upper()).collect())
            }
            _ => None,
        }
    }

    /// Returns the failure reason, if this lag time failed.
    pub fn failure(&self) -> Option<&FailureReason> {
        match &self.outcome {
            LagOutcome::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// Returns whether this lag time failed.
    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, LagOutcome::Failed(_))
    }

    /// Returns the number of resolved timescales.
    pub fn n_timescales(&self) -> usize {
        match &self.outcome {
            LagOutcome::Point(ts) => ts.len(),
            LagOutcome::Interval(summaries) => summaries.len(),
            LagOutcome::Failed(_) => 0,
        }
    }
}

/// Aggregate result of an implied-timescale sweep: one entry per input lag
/// time, in input order.
///
/// The per-rank accessors return one value per lag time with `NaN` where a
/// lag resolved fewer ranks or failed, which is the shape a timescale
/// convergence plot consumes directly.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    entries: Vec<LagEntry>,
    bayesian: bool,
}

impl SweepResult {
    /// Creates a new sweep result (crate-internal constructor).
    pub(crate) fn new(entries: Vec<LagEntry>, bayesian: bool) -> Self {
        Self { entries, bayesian }
    }

    /// Returns the per-lag entries, in input lag order.
    pub fn entries(&self) -> &[LagEntry] {
        &self.entries
    }

    /// Returns the lag times, in input order.
    pub fn lagtimes(&self) -> Vec<usize> {
        self.entries.iter().map(|e| e.lagtime()).collect()
    }

    /// Returns whether the sweep used Bayesian estimation.
    pub fn bayesian(&self) -> bool {
        self.bayesian
    }

    /// Returns the number of lag times that failed.
    pub fn n_failed(&self) -> usize {
        self.entries.iter().filter(|e| e.is_failed()).count()
    }

    /// Returns the central estimate of rank `rank` across all lag times,
    /// `NaN` where unresolved.
    pub fn timescales_at_rank(&self, rank: usize) -> Vec<f64> {
        self.entries
            .iter()
            .map(|e| e.timescales().get(rank).copied().unwrap_or(f64::NAN))
            .collect()
    }

    /// Returns the lower bound of rank `rank` across all lag times, `NaN`
    /// where unresolved. `None` for non-Bayesian sweeps.
    pub fn lower_bounds_at_rank(&self, rank: usize) -> Option<Vec<f64>> {
        if !self.bayesian {
            return None;
        }
        Some(
            self.entries
                .iter()
                .map(|e| {
                    e.lower_bounds()
                        .and_then(|b| b.get(rank).copied())
                        .unwrap_or(f64::NAN)
                })
                .collect(),
        )
    }

    /// Returns the upper bound of rank `rank` across all lag times, `NaN`
    /// where unresolved. `None` for non-Bayesian sweeps.
    pub fn upper_bounds_at_rank(&self, rank: usize) -> Option<Vec<f64>> {
        if !self.bayesian {
            return None;
        }
        Some(
            self.entries
                .iter()
                .map(|e| {
                    e.upper_bounds()
                        .and_then(|b| b.get(rank).copied())
                        .unwrap_or(f64::NAN)
                })
                .collect(),
        )
    }
}
