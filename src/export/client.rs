//! Extraction endpoint client
//!
//! Serializes the selection list, POSTs it once (no retries), and treats a
//! success body as the opaque spreadsheet artifact. Failure is reported, not
//! downloaded: non-success responses never reach the output file.

use std::path::Path;

use crate::domain::LabeledSelection;
use crate::error::{FieldmarkError, Result, SubmissionFailure};

use super::payload::to_payload;

pub struct ExportClient {
    client: reqwest::Client,
    endpoint: String,
}

impl ExportClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit the selections and return the spreadsheet artifact bytes
    pub async fn submit(
        &self,
        selections: &[LabeledSelection],
    ) -> std::result::Result<Vec<u8>, SubmissionFailure> {
        let payload = to_payload(selections);
        log::info!(
            "submitting {} selection(s) to {}",
            payload.len(),
            self.endpoint
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("extraction endpoint returned {status}");
            return Err(SubmissionFailure::Server {
                status: status.as_u16(),
                body,
            });
        }

        let artifact = response.bytes().await?;
        Ok(artifact.to_vec())
    }

    /// Submit and save the artifact under the given path (the download side
    /// effect). Nothing is written on failure.
    pub async fn submit_to_file(
        &self,
        selections: &[LabeledSelection],
        path: &Path,
    ) -> Result<()> {
        let artifact = self
            .submit(selections)
            .await
            .map_err(FieldmarkError::Submission)?;
        std::fs::write(path, &artifact)?;
        log::info!(
            "saved extraction artifact to {} ({} bytes)",
            path.display(),
            artifact.len()
        );
        Ok(())
    }
}
