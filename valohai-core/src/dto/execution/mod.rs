//! Execution DTOs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Caller-facing description of an execution to run.
///
/// `branch` takes precedence over `commit`: when a branch is given, the
/// repository is fetched and the latest commit on that branch replaces any
/// explicit commit.
#[derive(Debug, Clone, Default)]
pub struct ExecutionRequest {
    pub project_name: String,
    pub step: String,
    pub inputs: HashMap<String, serde_json::Value>,
    pub parameters: HashMap<String, serde_json::Value>,
    pub environment: String,
    pub commit: Option<String>,
    pub branch: Option<String>,
    pub tags: Vec<String>,
}

/// Payload POSTed to submit an execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitExecution {
    pub project: String,
    pub commit: String,
    pub step: String,
    pub inputs: HashMap<String, serde_json::Value>,
    pub parameters: HashMap<String, serde_json::Value>,
    pub environment: String,
}

/// Payload for the tag-set endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetTags {
    pub tags: Vec<String>,
}

/// Execution details returned by the API.
///
/// `status` is kept as the raw wire string so an out-of-vocabulary value can be
/// reported verbatim; parse it into
/// [`ExecutionStatus`](crate::domain::execution::ExecutionStatus) to classify.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionDetails {
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub urls: ExecutionUrls,
    #[serde(default)]
    pub outputs: Vec<ExecutionOutput>,
}

/// Links attached to an execution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutionUrls {
    #[serde(default)]
    pub display: Option<String>,
}

/// One output produced by an execution: a name and a signed download URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionOutput {
    pub name: String,
    pub url: String,
}
