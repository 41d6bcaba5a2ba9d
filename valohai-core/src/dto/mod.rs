//! Data Transfer Objects for the Valohai REST API
//!
//! This module contains the transient payloads exchanged with the platform.
//! None of these are owned state; each lives only as long as the HTTP response
//! it was parsed from.

pub mod commit;
pub mod execution;
pub mod project;
pub mod repository;

use serde::{Deserialize, Serialize};

/// Paginated listing envelope returned by the list endpoints.
///
/// The client requests a single page of up to 10000 entries and only ever
/// reads `results`; the cursor fields are kept for completeness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}
