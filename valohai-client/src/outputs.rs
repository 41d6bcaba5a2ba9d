//! Execution output downloads

use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::info;
use valohai_core::dto::execution::ExecutionDetails;

use crate::error::{ClientError, Result};

/// Download the outputs of a finished execution into a directory
///
/// Each output whose name matches `pattern` (every output when no pattern is
/// given) is fetched from its signed URL and written to `path` under the
/// output's name. The pattern is anchored at the start of the name, so
/// `"model"` matches `model.pkl` but not `my_model.pkl`. Names that fail to
/// match are skipped and logged.
///
/// The execution details come from a prior task's result (e.g., the value
/// returned by a submit call stored by the orchestrator). The signed URLs
/// carry their own authentication, so no API client is needed here.
///
/// # Arguments
/// * `details` - Execution details holding the output list
/// * `path` - Directory where each output is saved
/// * `pattern` - Optional regex matched against output names
///
/// # Returns
/// The paths of the files written.
pub async fn download_execution_outputs(
    details: &ExecutionDetails,
    path: impl AsRef<Path>,
    pattern: Option<&str>,
) -> Result<Vec<PathBuf>> {
    // Anchored at the start of the name, never mid-name.
    let filter = pattern
        .map(|p| Regex::new(&format!(r"\A(?:{})", p)).map(|re| (p, re)))
        .transpose()
        .map_err(|e| ClientError::InvalidRequest(format!("invalid output pattern: {}", e)))?;

    let client = reqwest::Client::new();
    let mut downloaded = Vec::new();

    for output in &details.outputs {
        if let Some((pattern, matcher)) = &filter {
            if !matcher.is_match(&output.name) {
                info!(
                    "Ignore output name {} because failed to match pattern {}",
                    output.name, pattern
                );
                continue;
            }
        }

        let response = client.get(&output.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        let bytes = response.bytes().await?;
        let target = path.as_ref().join(&output.name);
        tokio::fs::write(&target, &bytes).await?;
        info!("Downloaded output: {}", output.name);

        downloaded.push(target);
    }

    Ok(downloaded)
}
