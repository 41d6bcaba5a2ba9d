//! Commit-related API endpoints

use crate::ValohaiClient;
use crate::error::Result;
use reqwest::Method;
use valohai_core::dto::Paginated;
use valohai_core::dto::commit::Commit;

impl ValohaiClient {
    // =============================================================================
    // Commit Resolution
    // =============================================================================

    /// Resolve the latest commit identifier for a branch
    ///
    /// Lists commits newest first and returns the identifier of the first one
    /// that belongs to the project's repository and matches the branch ref.
    ///
    /// # Arguments
    /// * `project_id` - The project whose repository to search
    /// * `branch` - The branch ref to match
    ///
    /// # Returns
    /// The commit identifier, or `None` when the project has no repository or
    /// the branch has no known commits.
    pub async fn get_latest_commit(
        &self,
        project_id: &str,
        branch: &str,
    ) -> Result<Option<String>> {
        let Some(repository_id) = self.get_repository_id(project_id).await? else {
            return Ok(None);
        };

        let url = format!("{}/api/v0/commits/", self.base_url);
        let response = self
            .request(Method::GET, &url)
            .query(&[("limit", "10000"), ("ordering", "-commit_time")])
            .send()
            .await?;

        let listing: Paginated<Commit> = self.handle_response(response).await?;

        Ok(listing
            .results
            .into_iter()
            .find(|commit| commit.repository == repository_id && commit.r#ref == branch)
            .map(|commit| commit.identifier))
    }
}
