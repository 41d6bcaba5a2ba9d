//! Project DTOs

use serde::{Deserialize, Serialize};

/// Project listing entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
}
