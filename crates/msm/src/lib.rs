//! Markov state model estimation from transition counts.
//!
//! Given a connected transition count model (see `kronos-count`), this crate
//! estimates a row-stochastic transition matrix — either a maximum-likelihood
//! point estimate or a Dirichlet-posterior ensemble — and derives implied
//! relaxation timescales from its spectrum.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌───────────────────┐
//!  │  count model  │────▶│  estimate MSM  │────▶│  timescales        │
//!  │  (connected)  │     │  (ML/Bayesian) │     │  -τ / ln|λ|        │
//!  └──────────────┘     └────────────────┘     └───────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use kronos_count::{CountingMode, count_transitions, restrict_to_largest_connected};
//! use kronos_msm::{MsmConfig, estimate_msm};
//!
//! let traj: Vec<usize> = (0..600).map(|i| (i / 3) % 2).collect();
//! let counts = count_transitions(&[traj], 1, CountingMode::Sliding).unwrap();
//! let counts = restrict_to_largest_connected(&counts);
//!
//! let msm = estimate_msm(&counts, &MsmConfig::new()).unwrap();
//! let its = msm.timescales(4);
//! assert_eq!(its.len(), 1); // two states resolve one relaxation process
//! ```

pub mod bayes;
pub mod config;
pub mod error;
pub mod estimate;
pub mod model;
pub mod simulate;
mod spectrum;

pub use bayes::{TimescaleSummary, sample_posterior, summarize_timescales};
pub use config::MsmConfig;
pub use error::MsmError;
pub use estimate::estimate_msm;
pub use model::MarkovStateModel;
pub use simulate::simulate_trajectory;
