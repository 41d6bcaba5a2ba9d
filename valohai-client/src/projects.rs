//! Project-related API endpoints

use crate::ValohaiClient;
use crate::error::Result;
use reqwest::Method;
use tracing::info;
use valohai_core::dto::Paginated;
use valohai_core::dto::project::Project;

impl ValohaiClient {
    // =============================================================================
    // Project Lookup
    // =============================================================================

    /// Resolve a project id by exact name match
    ///
    /// Scans the project listing (a single page of up to 10000 entries) and
    /// returns the id of the first entry whose name equals `project_name`.
    ///
    /// # Arguments
    /// * `project_name` - The project name to look for
    ///
    /// # Returns
    /// The project id, or `None` when no project matches.
    pub async fn get_project_id(&self, project_name: &str) -> Result<Option<String>> {
        let url = format!("{}/api/v0/projects/", self.base_url);
        let response = self
            .request(Method::GET, &url)
            .query(&[("limit", "10000")])
            .send()
            .await?;

        let listing: Paginated<Project> = self.handle_response(response).await?;

        Ok(listing
            .results
            .into_iter()
            .find(|project| project.name == project_name)
            .map(|project| project.id))
    }

    /// Trigger a fetch of the project's repository
    ///
    /// Makes the platform refresh its commit list from the source repository.
    ///
    /// # Arguments
    /// * `project_id` - The project whose repository to fetch
    ///
    /// # Returns
    /// The raw fetch summary reported by the platform.
    pub async fn fetch_repository(&self, project_id: &str) -> Result<serde_json::Value> {
        let url = format!("{}/api/v0/projects/{}/fetch/", self.base_url, project_id);
        let response = self.request(Method::POST, &url).send().await?;

        let summary: serde_json::Value = self.handle_response(response).await?;
        info!("Fetched latest commits with response: {}", summary);

        Ok(summary)
    }
}
