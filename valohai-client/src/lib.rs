//! Valohai HTTP Client
//!
//! A simple, type-safe HTTP client for the Valohai platform REST API.
//!
//! Orchestrator tasks use this crate to submit executions, wait for them to reach a
//! terminal state, and pull their outputs. Scheduling, retries across task runs, and
//! credential storage stay with the caller.
//!
//! # Example
//!
//! ```no_run
//! use valohai_client::ValohaiClient;
//! use valohai_core::dto::execution::ExecutionRequest;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ValohaiClient::with_token("https://app.valohai.com", "api-token");
//!
//!     let details = client.submit_execution(ExecutionRequest {
//!         project_name: "churn-model".to_string(),
//!         step: "train".to_string(),
//!         environment: "cpu-small".to_string(),
//!         branch: Some("main".to_string()),
//!         ..Default::default()
//!     }).await?;
//!
//!     println!("Execution {} finished", details.id);
//!     Ok(())
//! }
//! ```

pub mod error;
mod commits;
mod executions;
mod outputs;
mod projects;
mod repositories;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use executions::DEFAULT_POLL_INTERVAL;
pub use outputs::download_execution_outputs;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;

/// HTTP client for the Valohai platform API
///
/// This client provides methods for the endpoints an execution run touches,
/// organized into logical groups:
/// - Project and repository lookups
/// - Commit resolution (branch to latest identifier)
/// - Execution lifecycle (submit, poll, tag)
#[derive(Debug, Clone)]
pub struct ValohaiClient {
    /// Base URL of the platform (e.g., "https://app.valohai.com")
    base_url: String,
    /// API token, sent as an `Authorization: Token` header when present
    token: Option<String>,
    /// HTTP client instance
    client: Client,
}

impl ValohaiClient {
    /// Create a new client without authentication
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the platform API (e.g., "https://app.valohai.com")
    ///
    /// # Example
    /// ```
    /// use valohai_client::ValohaiClient;
    ///
    /// let client = ValohaiClient::new("https://app.valohai.com");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            client: Client::new(),
        }
    }

    /// Create a new client that authenticates with an API token
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the platform API
    /// * `token` - The API token to send with every request
    pub fn with_token(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: Some(token.into()),
            client: Client::new(),
        }
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the platform API
    /// * `token` - Optional API token
    /// * `client` - A configured reqwest Client
    ///
    /// # Example
    /// ```
    /// use valohai_client::ValohaiClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = ValohaiClient::with_client("https://app.valohai.com", None, http_client);
    /// ```
    pub fn with_client(
        base_url: impl Into<String>,
        token: Option<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            client,
        }
    }

    /// Get the base URL of the platform
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Request & Response Handlers
    // =============================================================================

    /// Build a request, attaching the `Authorization: Token` header when configured
    pub(crate) fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        let request = self.client.request(method, url);
        match &self.token {
            Some(token) => request.header(AUTHORIZATION, format!("Token {}", token)),
            None => request,
        }
    }

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    pub(crate) async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response whose body the caller does not need
    ///
    /// This method checks the status code and returns an error if the request failed.
    pub(crate) async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(())
    }
}
