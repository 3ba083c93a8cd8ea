//! Worker-count invariance: the sweep result must not depend on `n_jobs`.

use kronos_sweep::{SweepConfig, implied_timescales};

fn trajectory() -> Vec<usize> {
    let mut traj = Vec::new();
    for _ in 0..300 {
        traj.extend_from_slice(&[0usize, 0, 0, 0, 1, 1, 0, 0, 2, 2, 2, 2, 2, 1, 0]);
    }
    traj
}

#[test]
fn point_estimates_identical_across_worker_counts() {
    let trajs = vec![trajectory()];
    let lagtimes = vec![1usize, 2, 3, 5, 8, 13];

    let sequential = implied_timescales(
        &trajs,
        &SweepConfig::new(lagtimes.clone()).with_n_timescales(2),
    )
    .unwrap();

    for n_jobs in [2usize, 4, 8] {
        let parallel = implied_timescales(
            &trajs,
            &SweepConfig::new(lagtimes.clone())
                .with_n_timescales(2)
                .with_n_jobs(n_jobs),
        )
        .unwrap();

        assert_eq!(parallel.lagtimes(), sequential.lagtimes(), "n_jobs = {n_jobs}");
        for (p, s) in parallel.entries().iter().zip(sequential.entries()) {
            assert_eq!(p.timescales(), s.timescales(), "n_jobs = {n_jobs}");
        }
    }
}

#[test]
fn bayesian_sweeps_identical_across_worker_counts_with_seed() {
    let trajs = vec![trajectory()];
    let make_config = |n_jobs: usize| {
        SweepConfig::new(vec![1, 2, 4])
            .with_bayesian(true)
            .with_n_samples(25)
            .with_n_jobs(n_jobs)
            .with_seed(1337)
    };

    let sequential = implied_timescales(&trajs, &make_config(1)).unwrap();
    let parallel = implied_timescales(&trajs, &make_config(4)).unwrap();

    assert_eq!(sequential, parallel);
}

#[test]
fn more_workers_than_lagtimes_is_fine() {
    let trajs = vec![trajectory()];
    let config = SweepConfig::new(vec![1, 2]).with_n_jobs(16);
    let result = implied_timescales(&trajs, &config).unwrap();
    assert_eq!(result.entries().len(), 2);
}

#[test]
fn partial_failures_keep_their_slot_under_concurrency() {
    let mut short = trajectory();
    short.truncate(40);
    let trajs = vec![short];

    let config = SweepConfig::new(vec![2, 1000, 3]).with_n_jobs(3);
    let result = implied_timescales(&trajs, &config).unwrap();

    assert_eq!(result.lagtimes(), vec![2, 1000, 3]);
    assert!(!result.entries()[0].is_failed());
    assert!(result.entries()[1].is_failed());
    assert!(!result.entries()[2].is_failed());
}
