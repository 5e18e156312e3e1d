use crate::Error;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Status vocabulary of the mock robot surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStatus {
    Success,
    InProgress,
    Failure,
}

impl ActionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::InProgress => "in_progress",
            Self::Failure => "failure",
        }
    }
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(Self::Success),
            "in_progress" => Ok(Self::InProgress),
            "failure" => Ok(Self::Failure),
            other => Err(Error::UnknownStatus(other.to_string())),
        }
    }
}

/// Mock robot executor: runs at most one action at a time and completes only
/// on an explicit external finish signal, never by a timer.
#[derive(Debug, Default)]
pub struct ActionExecutor {
    action_in_exec: Option<String>,
    action_done: bool,
}

impl ActionExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single entry point for both starting and polling an action, keyed by
    /// action identity.
    ///
    /// A repeated command for the in-flight action polls it; a command for a
    /// different action while one is in flight fails without starting
    /// anything. Success is reported once, on the first poll after the
    /// finish signal, and resets the executor to idle.
    pub fn action_command(&mut self, action: &str) -> ActionStatus {
        match self.action_in_exec.as_deref() {
            Some(current) if current == action => {
                if self.action_done {
                    info!("Action \"{}\" completed", action);
                    self.action_in_exec = None;
                    self.action_done = false;
                    ActionStatus::Success
                } else {
                    debug!("Action \"{}\" still in progress", action);
                    ActionStatus::InProgress
                }
            }
            Some(current) => {
                warn!(
                    "Rejecting action \"{}\": action \"{}\" is still running",
                    action, current
                );
                ActionStatus::Failure
            }
            None => {
                info!("Starting action \"{}\"", action);
                self.action_in_exec = Some(action.to_string());
                self.action_done = false;
                ActionStatus::InProgress
            }
        }
    }

    /// Marks the in-flight action as finished.
    ///
    /// Deliberately unguarded: the flag is set even when nothing is in
    /// flight. The success transition in `action_command` clears it, so a
    /// stale flag never outlives an accepted action.
    pub fn finish_action(&mut self) {
        debug!("Finish signal received");
        self.action_done = true;
    }
}
