use leptos::prelude::*;

use rr_common::types::ReportResponse;

/// Build and submit one report request. On success the parsed response is
/// parked in the one-shot store and the browser is redirected to
/// `/report?r=<token>`; the form never interprets the payload itself.
/// Service-reported and transport failures come back as `Err`, which the
/// form island shows inline — no navigation.
#[server]
pub async fn generate_report(
    host: String,
    login: String,
    password: String,
    opt_name: Option<String>,
    opt_interfaces: Option<String>,
    opt_load: Option<String>,
    opt_encryption: Option<String>,
    opt_blocked_resources: Option<String>,
    domains: String,
) -> Result<(), ServerFnError> {
    use std::sync::Arc;

    use rr_client::{ReportClient, ReportStore};
    use rr_common::domains::parse_domain_list;
    use rr_common::types::{ReportOptions, ReportRequest};

    let client: Arc<ReportClient> = expect_context();
    let store: Arc<ReportStore> = expect_context();

    let request = ReportRequest {
        host,
        login,
        password,
        options: ReportOptions {
            name: opt_name.is_some(),
            interfaces: opt_interfaces.is_some(),
            load: opt_load.is_some(),
            encryption: opt_encryption.is_some(),
            blocked_resources: opt_blocked_resources.is_some(),
        },
        domains_to_block: parse_domain_list(&domains),
    };

    match client.generate(&request).await {
        Ok(ReportResponse::Success(payload)) => {
            let token = store.put(ReportResponse::Success(payload));
            leptos_axum::redirect(&format!("/report?r={token}"));
            Ok(())
        }
        Ok(ReportResponse::Failure { message }) => {
            tracing::warn!(host = %request.host, "Report service refused request");
            Err(ServerFnError::new(message))
        }
        Err(e) => {
            tracing::warn!(host = %request.host, error = %e, "Report request failed");
            Err(ServerFnError::new(e.to_string()))
        }
    }
}

/// Claim the transition payload for a report token. `None` means the token
/// is unknown, expired or already consumed; the report page then redirects
/// to the form instead of fabricating a default report.
#[server]
pub async fn take_report(token: String) -> Result<Option<ReportResponse>, ServerFnError> {
    use std::sync::Arc;

    use rr_client::ReportStore;

    let store: Arc<ReportStore> = expect_context();
    Ok(store.take(&token))
}
