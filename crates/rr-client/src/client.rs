use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use rr_common::types::{ReportRequest, ReportResponse};

use crate::config::AppConfig;

/// Transport-level failure reaching the report service. Service-reported
/// errors are not a `ClientError`: they come back as
/// [`ReportResponse::Failure`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Le service de rapport n'a pas répondu à temps")]
    Timeout,
    #[error("Le service de rapport est injoignable")]
    Network(#[source] reqwest::Error),
}

/// HTTP client for the report service.
pub struct ReportClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ReportClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            endpoint: config.report_endpoint.clone(),
        })
    }

    /// Issue one report request. The single suspension point of a form
    /// submission: it runs to completion, failure, or timeout.
    pub async fn generate(&self, request: &ReportRequest) -> Result<ReportResponse, ClientError> {
        debug!(
            host = %request.host,
            domains = request.domains_to_block.len(),
            "Requesting report"
        );

        let resp = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Report service unreachable");
                if e.is_timeout() {
                    ClientError::Timeout
                } else {
                    ClientError::Network(e)
                }
            })?;

        let http_ok = resp.status().is_success();
        // A non-JSON body (proxy error page, truncated response) still maps
        // onto the failure/degrade rules of the contract.
        let body = resp
            .json::<serde_json::Value>()
            .await
            .unwrap_or(serde_json::Value::Null);

        Ok(ReportResponse::from_service_body(http_ok, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_applies_configured_timeout() {
        let config = AppConfig {
            request_timeout_secs: 5,
            ..Default::default()
        };
        let client = ReportClient::new(&config).unwrap();
        assert_eq!(client.endpoint, config.report_endpoint);
    }
}
