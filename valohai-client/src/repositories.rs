//! Repository-related API endpoints

use crate::ValohaiClient;
use crate::error::Result;
use reqwest::Method;
use valohai_core::dto::Paginated;
use valohai_core::dto::repository::Repository;

impl ValohaiClient {
    // =============================================================================
    // Repository Lookup
    // =============================================================================

    /// Resolve the repository id associated with a project
    ///
    /// Scans the repository listing (a single page of up to 10000 entries) and
    /// returns the id of the first entry whose embedded project id equals
    /// `project_id`.
    ///
    /// # Arguments
    /// * `project_id` - The owning project id
    ///
    /// # Returns
    /// The repository id, or `None` when the project has no repository.
    pub async fn get_repository_id(&self, project_id: &str) -> Result<Option<i64>> {
        let url = format!("{}/api/v0/repositories/", self.base_url);
        let response = self
            .request(Method::GET, &url)
            .query(&[("limit", "10000")])
            .send()
            .await?;

        let listing: Paginated<Repository> = self.handle_response(response).await?;

        Ok(listing
            .results
            .into_iter()
            .find(|repository| repository.project.id == project_id)
            .map(|repository| repository.id))
    }
}
