use crate::{agent::TaskExecutor, robot::ActionExecutor};
use axum::extract::{Path, State};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Shared state of the agent surface: one long-lived executor per process,
/// mutated only under the lock so the read-check-then-write transitions
/// stay atomic.
#[derive(Clone)]
pub struct AgentState {
    pub executor: Arc<Mutex<TaskExecutor>>,
}

#[derive(Clone)]
pub struct RobotState {
    pub executor: Arc<Mutex<ActionExecutor>>,
}

pub async fn execute(State(state): State<AgentState>, Path(task_id): Path<String>) -> String {
    debug!("Received execute request for task: {}", task_id);
    let mut executor = state.executor.lock().await;
    executor.execute(&task_id).to_string()
}

pub async fn get_status(State(state): State<AgentState>, Path(task_id): Path<String>) -> String {
    debug!("Received status request for task: {}", task_id);
    let mut executor = state.executor.lock().await;
    executor.get_task_status(&task_id).to_string()
}

pub async fn print_state(State(state): State<AgentState>) -> String {
    state.executor.lock().await.print_state()
}

pub async fn battery_charge(State(state): State<AgentState>) -> String {
    let charge = state.executor.lock().await.battery_charge();
    format!("{charge:.3}")
}

pub async fn action_command(State(state): State<RobotState>, Path(action): Path<String>) -> String {
    debug!("Received action command: {}", action);
    let mut executor = state.executor.lock().await;
    executor.action_command(&action).to_string()
}

pub async fn action_done(State(state): State<RobotState>) -> &'static str {
    state.executor.lock().await.finish_action();
    "ok"
}
