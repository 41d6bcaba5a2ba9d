//! Commit DTOs

use serde::{Deserialize, Serialize};

/// Commit listing entry.
///
/// `repository` is the numeric id of the repository the commit belongs to and
/// `ref` the branch it was fetched from. Listings are requested ordered by
/// `commit_time` descending, so the first matching entry is the latest commit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commit {
    pub repository: i64,
    pub r#ref: String,
    pub identifier: String,
    pub commit_time: chrono::DateTime<chrono::Utc>,
}
