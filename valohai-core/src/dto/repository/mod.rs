//! Repository DTOs

use serde::{Deserialize, Serialize};

/// Repository listing entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub id: i64,
    pub project: ProjectRef,
}

/// Embedded project reference on a repository entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRef {
    pub id: String,
}
