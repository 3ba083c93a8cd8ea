//! Implied-timescale sweep for Markov state model validation.
//!
//! Given discrete-state trajectories and a list of candidate lag times,
//! this crate fits one transition-counting + MSM estimation pipeline per
//! lag time and extracts the leading relaxation timescales — the standard
//! convergence diagnostic for choosing an MSM lag time. Estimation is
//! maximum-likelihood by default; Bayesian mode resamples the transition
//! matrix posterior and reports per-rank confidence intervals. Lag times
//! can be processed concurrently; results always come back in input order.
//!
//! # Pipeline (per lag time)
//!
//! ```text
//!  ┌──────────────┐   ┌─────────────┐   ┌──────────────┐   ┌────────────┐
//!  │  count at τ   │──▶│  largest     │──▶│  estimate     │──▶│ timescales │
//!  │  (kronos-     │   │  connected   │   │  MSM (kronos- │   │ -τ/ln|λ|   │
//!  │   count)      │   │  set         │   │   msm)        │   │            │
//!  └──────────────┘   └─────────────┘   └──────────────┘   └────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use kronos_sweep::{SweepConfig, implied_timescales};
//!
//! let traj: Vec<usize> = (0..600).map(|i| (i / 3) % 2).collect();
//! let config = SweepConfig::new(vec![1, 2, 5]).with_n_timescales(2);
//!
//! let result = implied_timescales(&[traj], &config).unwrap();
//! assert_eq!(result.entries().len(), 3);
//! // Two states resolve at most one relaxation process.
//! assert!(result.entries().iter().all(|e| e.n_timescales() <= 1));
//! ```

pub mod config;
pub mod error;
pub mod result;
mod sweep;

pub use config::SweepConfig;
pub use error::SweepError;
pub use result::{FailureReason, LagEntry, LagOutcome, SweepResult};
pub use sweep::implied_timescales;

// The estimator knobs a sweep forwards.
pub use kronos_count::CountingMode;
pub use kronos_msm::TimescaleSummary;
