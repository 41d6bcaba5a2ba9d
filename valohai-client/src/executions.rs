//! Execution-related API endpoints

use std::time::Duration;

use crate::ValohaiClient;
use crate::error::{ClientError, Result};
use reqwest::Method;
use tokio::time;
use tracing::info;
use valohai_core::domain::execution::{ExecutionStatus, StatusClass};
use valohai_core::dto::execution::{
    ExecutionDetails, ExecutionRequest, SetTags, SubmitExecution,
};

/// Default time to wait between status checks while polling an execution
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

impl ValohaiClient {
    // =============================================================================
    // Execution Lifecycle
    // =============================================================================

    /// Get execution details by id
    ///
    /// # Arguments
    /// * `execution_id` - The execution id
    ///
    /// # Returns
    /// The execution details
    pub async fn get_execution_details(&self, execution_id: &str) -> Result<ExecutionDetails> {
        let url = format!("{}/api/v0/executions/{}/", self.base_url, execution_id);
        let response = self.request(Method::GET, &url).send().await?;

        self.handle_response(response).await
    }

    /// Set tags on an execution
    ///
    /// # Arguments
    /// * `execution_id` - The execution to tag
    /// * `tags` - Free-form labels for later filtering
    pub async fn add_execution_tags(&self, execution_id: &str, tags: Vec<String>) -> Result<()> {
        let url = format!("{}/api/v0/executions/{}/tags/", self.base_url, execution_id);
        let response = self
            .request(Method::POST, &url)
            .json(&SetTags { tags })
            .send()
            .await?;

        self.handle_empty_response(response).await
    }

    /// Submit an execution and wait for it to reach a terminal state
    ///
    /// Polls every [`DEFAULT_POLL_INTERVAL`]. See
    /// [`submit_execution_with_interval`](Self::submit_execution_with_interval)
    /// for the full behavior.
    ///
    /// # Example
    /// ```no_run
    /// # use valohai_client::ValohaiClient;
    /// # use valohai_core::dto::execution::ExecutionRequest;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = ValohaiClient::with_token("https://app.valohai.com", "api-token");
    /// let details = client.submit_execution(ExecutionRequest {
    ///     project_name: "churn-model".to_string(),
    ///     step: "train".to_string(),
    ///     environment: "cpu-small".to_string(),
    ///     commit: Some("abc123".to_string()),
    ///     ..Default::default()
    /// }).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn submit_execution(&self, request: ExecutionRequest) -> Result<ExecutionDetails> {
        self.submit_execution_with_interval(request, DEFAULT_POLL_INTERVAL)
            .await
    }

    /// Submit an execution and wait, polling at the given interval
    ///
    /// Resolves the project by name, resolves the latest branch commit when a
    /// branch is given (overriding any explicit commit), submits the execution,
    /// applies tags, then checks the status after each sleep until the
    /// execution reaches a terminal state.
    ///
    /// # Arguments
    /// * `request` - What to run and where
    /// * `poll_interval` - Time to sleep between status checks
    ///
    /// # Returns
    /// The execution details once the execution completed successfully.
    ///
    /// # Errors
    /// * [`ClientError::NotFound`] when the project, or the latest commit for
    ///   the requested branch, cannot be resolved
    /// * [`ClientError::InvalidRequest`] when neither commit nor branch is given
    /// * [`ClientError::ExecutionFailed`] when the execution ends in a failure status
    /// * [`ClientError::UnexpectedStatus`] when the platform reports a status
    ///   outside the known vocabulary
    pub async fn submit_execution_with_interval(
        &self,
        request: ExecutionRequest,
        poll_interval: Duration,
    ) -> Result<ExecutionDetails> {
        let project_id = self
            .get_project_id(&request.project_name)
            .await?
            .ok_or_else(|| {
                ClientError::NotFound(format!("project named {}", request.project_name))
            })?;

        let mut commit = request.commit;

        if let Some(branch) = &request.branch {
            self.fetch_repository(&project_id).await?;
            let latest = self
                .get_latest_commit(&project_id, branch)
                .await?
                .ok_or_else(|| {
                    ClientError::NotFound(format!(
                        "commit for branch {} of project {}",
                        branch, request.project_name
                    ))
                })?;
            info!("Using latest {} branch commit: {}", branch, latest);
            commit = Some(latest);
        }

        let commit = commit.ok_or_else(|| {
            ClientError::InvalidRequest(
                "execution needs either a commit or a branch".to_string(),
            )
        })?;

        let url = format!("{}/api/v0/executions/", self.base_url);
        let payload = SubmitExecution {
            project: project_id,
            commit,
            step: request.step,
            inputs: request.inputs,
            parameters: request.parameters,
            environment: request.environment,
        };
        let response = self
            .request(Method::POST, &url)
            .json(&payload)
            .send()
            .await?;
        let execution: ExecutionDetails = self.handle_response(response).await?;

        if let Some(display_url) = &execution.urls.display {
            info!("Started execution: {}", display_url);
        }

        if !request.tags.is_empty() {
            self.add_execution_tags(&execution.id, request.tags.clone())
                .await?;
            info!("Added execution tags: {:?}", request.tags);
        }

        self.wait_for_completion(&execution.id, poll_interval).await
    }

    /// Poll execution details until a terminal status is reached
    async fn wait_for_completion(
        &self,
        execution_id: &str,
        poll_interval: Duration,
    ) -> Result<ExecutionDetails> {
        loop {
            time::sleep(poll_interval).await;

            let details = self.get_execution_details(execution_id).await?;
            let status: ExecutionStatus = details
                .status
                .parse()
                .map_err(|_| ClientError::UnexpectedStatus(details.status.clone()))?;

            match status.class() {
                StatusClass::Incomplete => {
                    info!("Incomplete execution with status: {}", status);
                }
                StatusClass::Failed => {
                    return Err(ClientError::ExecutionFailed { status });
                }
                StatusClass::Success => {
                    info!("Execution completed successfully");
                    return Ok(details);
                }
            }
        }
    }
}
