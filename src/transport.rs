// SPDX-License-Identifier: MIT

//! Submission transport: delivers the wire document to the remote collector.
//!
//! The builder core is fire-and-forget at this boundary. It hands a finished
//! document to a [`SubmissionTransport`] and hears back through a completion
//! message; retries, timeouts, and endpoint policy all live behind the trait.

use anyhow::{Context, Result};

use crate::logic::submit::SubmissionDocument;

/// Collector endpoint field definitions are posted to.
pub const COLLECTOR_ENDPOINT: &str = "https://www.mocky.io/v2/566061f21200008e3aabd919";

/// Narrow seam between the form core and the network. Tests substitute a
/// recording implementation; production uses [`HttpCollector`].
pub trait SubmissionTransport: Send + Sync {
    /// Deliver one document. `Ok` means the collector accepted it; any
    /// network or non-2xx failure maps to `Err`.
    fn send(&self, document: &SubmissionDocument) -> Result<()>;
}

/// Blocking HTTP transport posting JSON to a collector endpoint.
pub struct HttpCollector {
    endpoint: String,
}

impl HttpCollector {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpCollector {
    fn default() -> Self {
        Self::new(COLLECTOR_ENDPOINT)
    }
}

impl SubmissionTransport for HttpCollector {
    fn send(&self, document: &SubmissionDocument) -> Result<()> {
        let body = serde_json::to_string(document)
            .context("Failed to serialize submission document")?;

        tracing::info!(endpoint = %self.endpoint, %body, "posting field definition");

        let response = ureq::post(&self.endpoint)
            .set("Content-Type", "application/json")
            .send_string(&body)
            .with_context(|| format!("Failed to POST field definition to {}", self.endpoint))?;

        tracing::debug!(status = response.status(), "collector accepted submission");
        Ok(())
    }
}
