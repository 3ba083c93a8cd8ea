//! Configuration for the implied-timescale sweep.

use kronos_count::CountingMode;

use crate::error::SweepError;

/// Configuration for an implied-timescale sweep.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use kronos_sweep::SweepConfig;
///
/// let config = SweepConfig::new(vec![1, 2, 5, 10, 20])
///     .with_n_timescales(4)
///     .with_bayesian(true)
///     .with_n_jobs(4)
///     .with_seed(42);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct SweepConfig {
    lagtimes: Vec<usize>,
    n_timescales: usize,
    bayesian: bool,
    n_samples: usize,
    confidence: f64,
    n_jobs: usize,
    counting_mode: CountingMode,
    reversible: bool,
    dirichlet_alpha: Option<f64>,
    seed: Option<u64>,
}

impl SweepConfig {
    /// Creates a new configuration for the given lag times.
    ///
    /// Defaults: `n_timescales = 4`, `bayesian = false`, `n_samples = 100`,
    /// `confidence = 0.95`, `n_jobs = 1` (sequential),
    /// `counting_mode = Sliding`, `reversible = true`, no explicit prior,
    /// no seed (one is drawn per sweep call).
    pub fn new(lagtimes: Vec<usize>) -> Self {
        Self {
            lagtimes,
            n_timescales: 4,
            bayesian: false,
            n_samples: 100,
            confidence: 0.95,
            n_jobs: 1,
            counting_mode: CountingMode::Sliding,
            reversible: true,
            dirichlet_alpha: None,
            seed: None,
        }
    }

    /// Sets the number of leading timescales to extract per lag time.
    pub fn with_n_timescales(mut self, n_timescales: usize) -> Self {
        self.n_timescales = n_timescales;
        self
    }

    /// Selects Bayesian (posterior-resampled) estimation with confidence
    /// intervals instead of maximum-likelihood point estimates.
    pub fn with_bayesian(mut self, bayesian: bool) -> Self {
        self.bayesian = bayesian;
        self
    }

    /// Sets the number of posterior samples drawn per lag time.
    pub fn with_n_samples(mut self, n_samples: usize) -> Self {
        self.n_samples = n_samples;
        self
    }

    /// Sets the confidence level for Bayesian intervals.
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    /// Sets how many lag times are processed concurrently.
    pub fn with_n_jobs(mut self, n_jobs: usize) -> Self {
        self.n_jobs = n_jobs;
        self
    }

    /// Sets the transition counting mode.
    pub fn with_counting_mode(mut self, counting_mode: CountingMode) -> Self {
        self.counting_mode = counting_mode;
        self
    }

    /// Selects reversible (detailed-balance constrained) estimation.
    pub fn with_reversible(mut self, reversible: bool) -> Self {
        self.reversible = reversible;
        self
    }

    /// Sets the Dirichlet prior pseudo-count for posterior sampling.
    pub fn with_dirichlet_alpha(mut self, alpha: f64) -> Self {
        self.dirichlet_alpha = Some(alpha);
        self
    }

    /// Sets the base random seed, making Bayesian sweeps reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    // --- Accessors ---

    /// Returns the lag times to sweep, in input order.
    pub fn lagtimes(&self) -> &[usize] {
        &self.lagtimes
    }

    /// Returns the number of leading timescales requested.
    pub fn n_timescales(&self) -> usize {
        self.n_timescales
    }

    /// Returns whether Bayesian estimation is selected.
    pub fn bayesian(&self) -> bool {
        self.bayesian
    }

    /// Returns the number of posterior samples per lag time.
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Returns the confidence level for Bayesian intervals.
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Returns the concurrency width.
    pub fn n_jobs(&self) -> usize {
        self.n_jobs
    }

    /// Returns the transition counting mode.
    pub fn counting_mode(&self) -> CountingMode {
        self.counting_mode
    }

    /// Returns whether estimation is reversible.
    pub fn reversible(&self) -> bool {
        self.reversible
    }

    /// Returns the Dirichlet prior pseudo-count, if set explicitly.
    pub fn dirichlet_alpha(&self) -> Option<f64> {
        self.dirichlet_alpha
    }

    /// Returns the base random seed, if set.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates this configuration.
    ///
    /// Checks that the lag list is non-empty with positive entries, the
    /// timescale count and worker count are positive, and — in Bayesian
    /// mode — the sample count is at least 2, the confidence level lies in
    /// (0, 1), and an explicit prior is finite and positive.
    pub fn validate(&self) -> Result<(), SweepError> {
        if self.lagtimes.is_empty() {
            return Err(SweepError::EmptyLagtimes);
        }
        if let Some(index) = self.lagtimes.iter().position(|&lag| lag == 0) {
            return Err(SweepError::ZeroLagtime { index });
        }
        if self.n_timescales == 0 {
            return Err(SweepError::InvalidTimescaleCount);
        }
        if self.n_jobs == 0 {
            return Err(SweepError::InvalidWorkerCount);
        }
        if self.bayesian {
            if self.n_samples < 2 {
                return Err(SweepError::InvalidSampleCount {
                    n_samples: self.n_samples,
                });
            }
            if !self.confidence.is_finite() || self.confidence <= 0.0 || self.confidence >= 1.0 {
                return Err(SweepError::InvalidConfidence {
                    confidence: self.confidence,
                });
            }
        }
        if let Some(alpha) = self.dirichlet_alpha
            && (!alpha.is_finite() || alpha <= 0.0)
        {
            return Err(SweepError::InvalidDirichletAlpha { alpha });
        }
        Ok(())
    }
}
