use crate::Error;
use std::fmt;
use std::str::FromStr;

/// Execution status vocabulary shared with the bnet controller.
///
/// The strings below are the wire contract: the controller parses response
/// bodies back into this set and treats anything else as an error. The mock
/// agent itself only ever emits `CompletedSuccess`, `CompletedError` and
/// `CompletedInProgress`; `CompletedFailure` is reserved for clients that
/// report work finishing unsuccessfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecStatus {
    CompletedSuccess,
    CompletedFailure,
    CompletedError,
    CompletedInProgress,
}

impl ExecStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CompletedSuccess => "COMPLETED_SUCCESS",
            Self::CompletedFailure => "COMPLETED_FAILURE",
            Self::CompletedError => "COMPLETED_ERROR",
            Self::CompletedInProgress => "COMPLETED_IN_PROGRESS",
        }
    }
}

impl fmt::Display for ExecStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExecStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "COMPLETED_SUCCESS" => Ok(Self::CompletedSuccess),
            "COMPLETED_FAILURE" => Ok(Self::CompletedFailure),
            "COMPLETED_ERROR" => Ok(Self::CompletedError),
            "COMPLETED_IN_PROGRESS" => Ok(Self::CompletedInProgress),
            other => Err(Error::UnknownStatus(other.to_string())),
        }
    }
}
