//! Integration tests for SweepError variants.

use kronos_sweep::{SweepConfig, SweepError, implied_timescales};

fn trajs() -> Vec<Vec<usize>> {
    vec![(0..120).map(|i| (i / 3) % 2).collect()]
}

#[test]
fn error_empty_lagtime_list() {
    let result = implied_timescales(&trajs(), &SweepConfig::new(vec![]));
    assert!(matches!(result, Err(SweepError::EmptyLagtimes)));
}

#[test]
fn error_zero_lagtime() {
    let result = implied_timescales(&trajs(), &SweepConfig::new(vec![1, 0]));
    assert!(matches!(result, Err(SweepError::ZeroLagtime { index: 1 })));
}

#[test]
fn error_empty_trajectory_set() {
    let result = implied_timescales(&[], &SweepConfig::new(vec![1, 2]));
    assert!(matches!(result, Err(SweepError::EmptyTrajectorySet)));
}

#[test]
fn error_zero_timescale_count() {
    let config = SweepConfig::new(vec![1]).with_n_timescales(0);
    let result = implied_timescales(&trajs(), &config);
    assert!(matches!(result, Err(SweepError::InvalidTimescaleCount)));
}

#[test]
fn error_zero_workers() {
    let config = SweepConfig::new(vec![1]).with_n_jobs(0);
    let result = implied_timescales(&trajs(), &config);
    assert!(matches!(result, Err(SweepError::InvalidWorkerCount)));
}

#[test]
fn error_bayesian_too_few_samples() {
    let config = SweepConfig::new(vec![1]).with_bayesian(true).with_n_samples(1);
    let result = implied_timescales(&trajs(), &config);
    assert!(matches!(result, Err(SweepError::InvalidSampleCount { n_samples: 1 })));
}

#[test]
fn error_bayesian_bad_confidence() {
    let config = SweepConfig::new(vec![1]).with_bayesian(true).with_confidence(1.0);
    let result = implied_timescales(&trajs(), &config);
    assert!(matches!(result, Err(SweepError::InvalidConfidence { .. })));
}

#[test]
fn error_all_lagtimes_failed() {
    // Trajectory of length 5: nothing countable at lags 10 and 20.
    let short = vec![vec![0usize, 1, 0, 1, 0]];
    let result = implied_timescales(&short, &SweepConfig::new(vec![10, 20]));
    match result {
        Err(SweepError::AllLagtimesFailed { summary }) => {
            assert!(summary.contains("lag 10"), "summary: {summary}");
            assert!(summary.contains("lag 20"), "summary: {summary}");
        }
        other => panic!("expected AllLagtimesFailed, got {other:?}"),
    }
}

#[test]
fn validation_rejects_before_any_work() {
    // An oversized lag would fail per-lag; an empty lag list must fail
    // before reaching that path.
    let result = implied_timescales(&trajs(), &SweepConfig::new(vec![]));
    assert!(matches!(result, Err(SweepError::EmptyLagtimes)));
}
