use bnet_mock_agents::agent::{ExecStatus, TaskExecutor};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::HashMap;
use std::time::{Duration, Instant};

const DECAY_PER_SEC: f64 = 0.005;

fn exec_times() -> HashMap<String, Duration> {
    HashMap::from([
        ("goto_fast".to_string(), Duration::from_secs(5)),
        ("goto_medium".to_string(), Duration::from_secs(10)),
        ("goto_slow".to_string(), Duration::from_secs(20)),
        ("charge".to_string(), Duration::from_secs(20)),
    ])
}

fn secs(s: u64) -> Duration {
    Duration::from_secs(s)
}

#[test]
fn test_unknown_task_completes_on_first_poll() {
    let t0 = Instant::now();
    let mut executor = TaskExecutor::new_at(exec_times(), DECAY_PER_SEC, t0);

    assert_eq!(
        executor.execute_at("unlisted_task", t0),
        ExecStatus::CompletedInProgress
    );
    // Zero configured duration: any elapsed time at all completes it.
    assert_eq!(
        executor.get_task_status_at("unlisted_task", t0 + Duration::from_millis(1)),
        ExecStatus::CompletedSuccess
    );
}

#[test]
fn test_busy_conflict_keeps_original_task() {
    let t0 = Instant::now();
    let mut executor = TaskExecutor::new_at(exec_times(), DECAY_PER_SEC, t0);

    assert_eq!(
        executor.execute_at("goto_fast", t0),
        ExecStatus::CompletedInProgress
    );
    assert_eq!(
        executor.execute_at("goto_slow", t0 + secs(1)),
        ExecStatus::CompletedError
    );

    // "goto_fast" is still the tracked task, "goto_slow" never started.
    assert_eq!(
        executor.get_task_status_at("goto_fast", t0 + secs(2)),
        ExecStatus::CompletedInProgress
    );
    assert_eq!(
        executor.get_task_status_at("goto_slow", t0 + secs(2)),
        ExecStatus::CompletedError
    );
}

#[test]
fn test_status_poll_mismatch_changes_nothing() {
    let t0 = Instant::now();
    let mut executor = TaskExecutor::new_at(exec_times(), DECAY_PER_SEC, t0);

    // Nothing running at all.
    assert_eq!(
        executor.get_task_status_at("goto_fast", t0),
        ExecStatus::CompletedError
    );

    executor.execute_at("goto_fast", t0);
    assert_eq!(
        executor.get_task_status_at("goto_medium", t0 + secs(1)),
        ExecStatus::CompletedError
    );
    // The mismatch did not clear or alter the tracked task.
    assert_eq!(
        executor.get_task_status_at("goto_fast", t0 + secs(1)),
        ExecStatus::CompletedInProgress
    );
}

#[test]
fn test_exactly_one_success_poll_after_expiry() {
    let t0 = Instant::now();
    let mut executor = TaskExecutor::new_at(exec_times(), DECAY_PER_SEC, t0);

    assert_eq!(
        executor.execute_at("goto_fast", t0),
        ExecStatus::CompletedInProgress
    );
    assert_eq!(
        executor.get_task_status_at("goto_fast", t0 + secs(2)),
        ExecStatus::CompletedInProgress
    );
    assert_eq!(
        executor.get_task_status_at("goto_fast", t0 + secs(6)),
        ExecStatus::CompletedSuccess
    );
    // The success poll cleared the task; nothing is tracked anymore.
    assert_eq!(
        executor.get_task_status_at("goto_fast", t0 + secs(6)),
        ExecStatus::CompletedError
    );
}

#[test]
fn test_elapsed_equal_to_duration_is_still_in_progress() {
    let t0 = Instant::now();
    let mut executor = TaskExecutor::new_at(exec_times(), DECAY_PER_SEC, t0);

    executor.execute_at("goto_fast", t0);
    assert_eq!(
        executor.get_task_status_at("goto_fast", t0 + secs(5)),
        ExecStatus::CompletedInProgress
    );
}

#[rstest]
#[case("goto_fast", 5)]
#[case("goto_medium", 10)]
#[case("goto_slow", 20)]
#[case("charge", 20)]
fn test_task_completes_after_configured_duration(#[case] task_id: &str, #[case] duration: u64) {
    let t0 = Instant::now();
    let mut executor = TaskExecutor::new_at(exec_times(), DECAY_PER_SEC, t0);

    executor.execute_at(task_id, t0);
    assert_eq!(
        executor.get_task_status_at(task_id, t0 + secs(duration)),
        ExecStatus::CompletedInProgress
    );
    assert_eq!(
        executor.get_task_status_at(task_id, t0 + secs(duration + 1)),
        ExecStatus::CompletedSuccess
    );
}

#[test]
fn test_executor_is_reusable_after_completion() {
    let t0 = Instant::now();
    let mut executor = TaskExecutor::new_at(exec_times(), DECAY_PER_SEC, t0);

    executor.execute_at("goto_fast", t0);
    executor.get_task_status_at("goto_fast", t0 + secs(6));

    assert_eq!(
        executor.execute_at("goto_medium", t0 + secs(7)),
        ExecStatus::CompletedInProgress
    );
    assert_eq!(
        executor.get_task_status_at("goto_medium", t0 + secs(8)),
        ExecStatus::CompletedInProgress
    );
}

#[test]
fn test_new_task_accepted_once_previous_expired_without_poll() {
    let t0 = Instant::now();
    let mut executor = TaskExecutor::new_at(exec_times(), DECAY_PER_SEC, t0);

    executor.execute_at("goto_fast", t0);
    // No status poll in between: execute itself detects the previous task
    // is done and accepts the new one.
    assert_eq!(
        executor.execute_at("goto_medium", t0 + secs(6)),
        ExecStatus::CompletedInProgress
    );
    assert_eq!(
        executor.get_task_status_at("goto_fast", t0 + secs(7)),
        ExecStatus::CompletedError
    );
}

#[test]
fn test_print_state_tracks_done_predicate() {
    let t0 = Instant::now();
    let mut executor = TaskExecutor::new_at(exec_times(), DECAY_PER_SEC, t0);

    assert_eq!(executor.print_state_at(t0), "Idle.");

    executor.execute_at("goto_fast", t0);
    assert_eq!(executor.print_state_at(t0 + secs(2)), "Executing goto_fast.");

    // Expired but not yet polled: the projection already reports idle.
    assert_eq!(executor.print_state_at(t0 + secs(6)), "Idle.");
}

#[test]
fn test_battery_full_at_reference_time() {
    let t0 = Instant::now();
    let executor = TaskExecutor::new_at(exec_times(), DECAY_PER_SEC, t0);

    assert_eq!(executor.battery_charge_at(t0), 1.0);
}

#[test]
fn test_battery_decays_linearly() {
    let t0 = Instant::now();
    let executor = TaskExecutor::new_at(exec_times(), DECAY_PER_SEC, t0);

    let charge = executor.battery_charge_at(t0 + secs(10));
    assert!((charge - 0.95).abs() < 1e-9, "charge was {charge}");
}

#[test]
fn test_battery_is_monotonically_non_increasing() {
    let t0 = Instant::now();
    let executor = TaskExecutor::new_at(exec_times(), DECAY_PER_SEC, t0);

    let mut previous = executor.battery_charge_at(t0);
    for s in [1, 10, 50, 100, 199, 200, 201, 500] {
        let charge = executor.battery_charge_at(t0 + secs(s));
        assert!(charge <= previous, "charge increased at t+{s}s");
        assert!((0.0..=1.0).contains(&charge));
        previous = charge;
    }
}

#[test]
fn test_battery_clamps_at_zero_after_decay_interval() {
    let t0 = Instant::now();
    let executor = TaskExecutor::new_at(exec_times(), DECAY_PER_SEC, t0);

    // 1.0 / 0.005 = 200s to empty; past that it must floor at zero.
    assert_eq!(executor.battery_charge_at(t0 + secs(250)), 0.0);
    assert_eq!(executor.battery_charge_at(t0 + secs(10_000)), 0.0);
}

#[test]
fn test_exec_status_wire_strings() {
    assert_eq!(ExecStatus::CompletedSuccess.to_string(), "COMPLETED_SUCCESS");
    assert_eq!(ExecStatus::CompletedFailure.to_string(), "COMPLETED_FAILURE");
    assert_eq!(ExecStatus::CompletedError.to_string(), "COMPLETED_ERROR");
    assert_eq!(
        ExecStatus::CompletedInProgress.to_string(),
        "COMPLETED_IN_PROGRESS"
    );
}

#[test]
fn test_exec_status_parses_only_known_values() {
    assert_eq!(
        "COMPLETED_SUCCESS".parse::<ExecStatus>().unwrap(),
        ExecStatus::CompletedSuccess
    );
    assert_eq!(
        "COMPLETED_IN_PROGRESS".parse::<ExecStatus>().unwrap(),
        ExecStatus::CompletedInProgress
    );
    assert!("COMPLETED_MAYBE".parse::<ExecStatus>().is_err());
    assert!("completed_success".parse::<ExecStatus>().is_err());
    assert!("".parse::<ExecStatus>().is_err());
}
