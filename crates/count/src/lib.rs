//! Transition counting for discrete-state trajectories.
//!
//! This crate turns discretized trajectories (sequences of cluster labels)
//! into transition count matrices at a chosen lag time, and restricts count
//! models to their largest strongly connected set of states.
//!
//! # Pipeline
//!
//! ```text
//!  ┌────────────────┐     ┌──────────────────┐     ┌───────────────────┐
//!  │  trajectories   │────▶│  count at lag τ  │────▶│  largest connected │
//!  │  (state labels) │     │  (sliding/eff.)  │     │  submodel          │
//!  └────────────────┘     └──────────────────┘     └───────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use kronos_count::{CountingMode, count_transitions, restrict_to_largest_connected};
//!
//! let trajs = vec![vec![0usize, 0, 1, 1, 0, 1, 0, 0]];
//! let counts = count_transitions(&trajs, 1, CountingMode::Sliding).unwrap();
//! let connected = restrict_to_largest_connected(&counts);
//!
//! assert_eq!(connected.n_states(), 2);
//! ```

pub mod connect;
pub mod count;
pub mod error;
pub mod matrix;

pub use connect::{largest_connected_set, restrict_to_largest_connected};
pub use count::{CountingMode, count_transitions};
pub use error::CountError;
pub use matrix::CountModel;
