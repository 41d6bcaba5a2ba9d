//! Execution status domain types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Execution status vocabulary reported by the platform.
///
/// Statuses outside this set are not silently absorbed: parsing them fails with
/// [`UnknownStatus`], which callers surface as a fatal error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    Created,
    Queued,
    Started,
    Stopping,
    Error,
    Crashed,
    Stopped,
    Complete,
}

/// Three-way classification of an execution status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// Not yet terminal; poll again.
    Incomplete,
    /// Terminal failure.
    Failed,
    /// Terminal success.
    Success,
}

impl ExecutionStatus {
    /// Classify this status into the retry / fail / done buckets
    pub fn class(self) -> StatusClass {
        match self {
            Self::Created | Self::Queued | Self::Started | Self::Stopping => {
                StatusClass::Incomplete
            }
            Self::Error | Self::Crashed | Self::Stopped => StatusClass::Failed,
            Self::Complete => StatusClass::Success,
        }
    }

    /// The wire representation of this status
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Queued => "queued",
            Self::Started => "started",
            Self::Stopping => "stopping",
            Self::Error => "error",
            Self::Crashed => "crashed",
            Self::Stopped => "stopped",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a status string outside the known vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown execution status: {}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for ExecutionStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(Self::Created),
            "queued" => Ok(Self::Queued),
            "started" => Ok(Self::Started),
            "stopping" => Ok(Self::Stopping),
            "error" => Ok(Self::Error),
            "crashed" => Ok(Self::Crashed),
            "stopped" => Ok(Self::Stopped),
            "complete" => Ok(Self::Complete),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}
