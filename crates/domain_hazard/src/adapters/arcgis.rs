//! Request plumbing shared by the ArcGIS adapters

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::error::{LookupError, UpstreamService};

const LOGGED_BODY_LIMIT: usize = 512;

/// Error object ArcGIS embeds in an otherwise successful (HTTP 200) response
#[derive(Debug, Default, Deserialize)]
struct EsriError {
    code: Option<u16>,
    message: Option<String>,
}

/// Sends one GET request and decodes its JSON body
///
/// The request URL is never logged or returned because it carries the token.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    client: &Client,
    service: UpstreamService,
    url: &str,
    params: &[(&str, String)],
) -> Result<T, LookupError> {
    debug!(service = %service, "Sending upstream request");

    let response = client
        .get(url)
        .query(params)
        .send()
        .await
        .map_err(|e| {
            let e = e.without_url();
            error!(service = %service, error = %e, "Upstream request failed");
            LookupError::upstream(service, e.to_string())
        })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!(
            service = %service,
            status = status.as_u16(),
            body = %truncate(&body),
            "Upstream returned non-success status"
        );
        return Err(LookupError::upstream_status(
            service,
            status.as_u16(),
            format!("HTTP {}", status),
        ));
    }

    let body: Value = response.json().await.map_err(|e| {
        let e = e.without_url();
        error!(service = %service, error = %e, "Upstream body is not JSON");
        LookupError::upstream(service, format!("Invalid JSON body: {}", e))
    })?;

    decode_body(service, body)
}

/// Decodes a successful response body, surfacing embedded ArcGIS errors
pub(crate) fn decode_body<T: DeserializeOwned>(
    service: UpstreamService,
    body: Value,
) -> Result<T, LookupError> {
    if let Some(err) = body.get("error").filter(|err| err.is_object()) {
        let err: EsriError = serde_json::from_value(err.clone()).unwrap_or_default();
        let message = err
            .message
            .unwrap_or_else(|| "Unspecified ArcGIS error".to_string());
        error!(service = %service, code = ?err.code, message = %message, "Upstream reported an error");
        return Err(LookupError::Upstream {
            service,
            status: err.code,
            message,
        });
    }

    serde_json::from_value(body).map_err(|e| {
        error!(service = %service, error = %e, "Upstream body has an unexpected shape");
        LookupError::upstream(service, format!("Unexpected response body: {}", e))
    })
}

fn truncate(body: &str) -> String {
    body.chars().take(LOGGED_BODY_LIMIT).collect()
}
