//! Live API connectivity check.
//!
//! One bounded GET against the provider's model-listing endpoint. A
//! missing credential is a distinct failure reason (no client can be
//! constructed); everything else - DNS, TLS, auth, rate limits - is
//! reported as a failure carrying the underlying error text.

use std::time::Duration;

use serde::Deserialize;

use crate::audit::CheckResult;

use super::credential::CREDENTIAL_VAR;

/// Check name shown in the report.
pub const NAME: &str = "API connectivity";

/// Default API base URL, overridable via `OPENAI_BASE_URL`.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Environment variable overriding the API base URL.
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";

/// Time budget for the whole request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct ModelList {
    #[serde(default)]
    data: Vec<Model>,
}

#[derive(Debug, Deserialize)]
struct Model {
    #[allow(dead_code)]
    id: String,
}

/// Run the connectivity check against the configured endpoint.
///
/// When `offline` is set the network call is skipped entirely and the
/// check records an advisory warning instead.
pub fn check(offline: bool) -> CheckResult {
    if offline {
        return CheckResult::warn(NAME, "skipped (--offline)");
    }

    let key = match std::env::var(CREDENTIAL_VAR) {
        Ok(key) if !key.is_empty() => key,
        _ => {
            return CheckResult::fail(
                NAME,
                format!("{} not set; cannot create API client", CREDENTIAL_VAR),
            )
        }
    };

    let base = std::env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    check_endpoint(&base, &key)
}

/// Probe the model-listing endpoint at an explicit base URL.
pub fn check_endpoint(base_url: &str, key: &str) -> CheckResult {
    let client = match reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
    {
        Ok(client) => client,
        Err(e) => return CheckResult::fail(NAME, format!("failed to build HTTP client: {}", e)),
    };

    let url = format!("{}/models", base_url.trim_end_matches('/'));
    tracing::debug!(%url, "probing model-listing endpoint");

    match client.get(&url).bearer_auth(key).send() {
        Ok(response) if response.status().is_success() => {
            match response.json::<ModelList>() {
                Ok(models) => CheckResult::pass(
                    NAME,
                    format!(
                        "API accessible and responding ({} models available)",
                        models.data.len()
                    ),
                ),
                // A 2xx with an undecodable body is still a reachable API.
                Err(_) => CheckResult::pass(NAME, "API accessible and responding"),
            }
        }
        Ok(response) => {
            CheckResult::fail(NAME, format!("connection failed: HTTP {}", response.status()))
        }
        Err(e) => CheckResult::fail(NAME, format!("connection failed: {}", e)),
    }
}
