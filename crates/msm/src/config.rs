//! Configuration for MSM estimation.

use crate::error::MsmError;

/// Configuration for Markov state model estimation.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use kronos_msm::MsmConfig;
///
/// let config = MsmConfig::new()
///     .with_reversible(false)
///     .with_dirichlet_alpha(0.5);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct MsmConfig {
    reversible: bool,
    max_iter: usize,
    tol: f64,
    dirichlet_alpha: Option<f64>,
}

impl MsmConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `reversible = true`, `max_iter = 100_000`, `tol = 1e-10`,
    /// `dirichlet_alpha = None` (resolved to `1 / n_states` at sampling
    /// time).
    pub fn new() -> Self {
        Self {
            reversible: true,
            max_iter: 100_000,
            tol: 1e-10,
            dirichlet_alpha: None,
        }
    }

    /// Selects reversible (detailed-balance constrained) estimation.
    pub fn with_reversible(mut self, reversible: bool) -> Self {
        self.reversible = reversible;
        self
    }

    /// Sets the iteration cap for the reversible fixed-point solver.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Sets the convergence tolerance for the reversible fixed-point solver.
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Sets the Dirichlet prior pseudo-count for posterior sampling.
    pub fn with_dirichlet_alpha(mut self, alpha: f64) -> Self {
        self.dirichlet_alpha = Some(alpha);
        self
    }

    /// Returns whether estimation is reversible.
    pub fn reversible(&self) -> bool {
        self.reversible
    }

    /// Returns the iteration cap for the reversible solver.
    pub fn max_iter(&self) -> usize {
        self.max_iter
    }

    /// Returns the convergence tolerance for the reversible solver.
    pub fn tol(&self) -> f64 {
        self.tol
    }

    /// Returns the Dirichlet prior pseudo-count, if set explicitly.
    pub fn dirichlet_alpha(&self) -> Option<f64> {
        self.dirichlet_alpha
    }

    /// Resolves the Dirichlet prior for a model with `n_states` states.
    pub(crate) fn resolved_alpha(&self, n_states: usize) -> f64 {
        self.dirichlet_alpha
            .unwrap_or(1.0 / n_states.max(1) as f64)
    }

    /// Validates this configuration.
    ///
    /// Checks that `max_iter` is positive, `tol` is finite and positive, and
    /// an explicit `dirichlet_alpha` is finite and positive.
    pub fn validate(&self) -> Result<(), MsmError> {
        if self.max_iter == 0 {
            return Err(MsmError::InvalidParameter {
                name: "max_iter",
                value: "0".to_string(),
            });
        }
        if !self.tol.is_finite() || self.tol <= 0.0 {
            return Err(MsmError::InvalidParameter {
                name: "tol",
                value: self.tol.to_string(),
            });
        }
        if let Some(alpha) = self.dirichlet_alpha
            && (!alpha.is_finite() || alpha <= 0.0)
        {
            return Err(MsmError::InvalidParameter {
                name: "dirichlet_alpha",
                value: alpha.to_string(),
            });
        }
        Ok(())
    }
}

impl Default for MsmConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = MsmConfig::new();
        assert!(cfg.reversible());
        assert_eq!(cfg.max_iter(), 100_000);
        assert!((cfg.tol() - 1e-10).abs() < f64::EPSILON);
        assert_eq!(cfg.dirichlet_alpha(), None);
    }

    #[test]
    fn builder_chaining() {
        let cfg = MsmConfig::new()
            .with_reversible(false)
            .with_max_iter(50)
            .with_tol(1e-6)
            .with_dirichlet_alpha(0.25);
        assert!(!cfg.reversible());
        assert_eq!(cfg.max_iter(), 50);
        assert!((cfg.tol() - 1e-6).abs() < f64::EPSILON);
        assert_eq!(cfg.dirichlet_alpha(), Some(0.25));
    }

    #[test]
    fn resolved_alpha_defaults_to_inverse_state_count() {
        let cfg = MsmConfig::new();
        assert!((cfg.resolved_alpha(4) - 0.25).abs() < 1e-12);
        let cfg = cfg.with_dirichlet_alpha(2.0);
        assert!((cfg.resolved_alpha(4) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn validate_ok() {
        assert!(MsmConfig::new().validate().is_ok());
    }

    #[test]
    fn validate_bad_max_iter() {
        assert!(MsmConfig::new().with_max_iter(0).validate().is_err());
    }

    #[test]
    fn validate_bad_tol() {
        assert!(MsmConfig::new().with_tol(0.0).validate().is_err());
        assert!(MsmConfig::new().with_tol(-1.0).validate().is_err());
        assert!(MsmConfig::new().with_tol(f64::NAN).validate().is_err());
    }

    #[test]
    fn validate_bad_alpha() {
        assert!(MsmConfig::new().with_dirichlet_alpha(0.0).validate().is_err());
        assert!(MsmConfig::new().with_dirichlet_alpha(-0.5).validate().is_err());
        assert!(
            MsmConfig::new()
                .with_dirichlet_alpha(f64::INFINITY)
                .validate()
                .is_err()
        );
    }
}
