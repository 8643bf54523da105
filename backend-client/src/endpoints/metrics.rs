//! # Metrics Endpoints
//!
//! Anonymous provider telemetry. The route accepts both POST and PUT with
//! identical semantics on current backends; the method is caller-selectable
//! because older deployments only routed one of the two.

use shared::dto::metrics::MetricsProvidersRequest;

use super::execute;
use crate::client::BackendClient;
use crate::error::Result;

/// HTTP method to submit provider metrics with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MetricsMethod {
    #[default]
    Post,
    Put,
}

/// Submit a batch of provider metrics. Requires no authentication; the
/// response body is a bare JSON boolean.
pub async fn submit_provider_metrics(
    client: &BackendClient,
    request: &MetricsProvidersRequest,
    method: MetricsMethod,
) -> Result<bool> {
    let url = format!("{}/metrics/providers", client.backend_url());
    let request = match method {
        MetricsMethod::Post => client.http().post(url),
        MetricsMethod::Put => client.http().put(url),
    }
    .json(request);
    execute("submit_provider_metrics", request).await
}
