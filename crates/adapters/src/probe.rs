// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP health probes.
//!
//! Best-effort, timeout-bounded requests against the launched agent's
//! two endpoints. A probe outcome is only ever reported; it never gates
//! control flow or the launcher's exit code.

use crate::env;
use serde_json::json;

/// Outcome of one health probe.
#[derive(Clone, Debug)]
pub struct ProbeReport {
    /// Which endpoint was probed ("ui" or "bridge").
    pub target: &'static str,
    pub url: String,
    /// Response body on any HTTP response, error text otherwise.
    pub outcome: Result<String, String>,
}

impl ProbeReport {
    /// A non-empty response body counts as healthy.
    pub fn is_healthy(&self) -> bool {
        matches!(&self.outcome, Ok(body) if !body.is_empty())
    }
}

/// `GET <url>` against the UI health endpoint.
pub async fn probe_ui(url: &str) -> ProbeReport {
    let outcome = match client() {
        Ok(client) => fetch_body(client.get(url).send().await).await,
        Err(e) => Err(e),
    };
    tracing::debug!(url, ok = outcome.is_ok(), "ui probe finished");
    ProbeReport {
        target: "ui",
        url: url.to_string(),
        outcome,
    }
}

/// `POST <url>` with a JSON ping against the agent bridge.
pub async fn probe_bridge(url: &str) -> ProbeReport {
    let outcome = match client() {
        Ok(client) => {
            let request = client.post(url).json(&json!({ "message": "ping" }));
            fetch_body(request.send().await).await
        }
        Err(e) => Err(e),
    };
    tracing::debug!(url, ok = outcome.is_ok(), "bridge probe finished");
    ProbeReport {
        target: "bridge",
        url: url.to_string(),
        outcome,
    }
}

fn client() -> Result<reqwest::Client, String> {
    reqwest::Client::builder()
        .timeout(env::probe_timeout())
        .build()
        .map_err(|e| format!("http client: {}", e))
}

async fn fetch_body(
    response: Result<reqwest::Response, reqwest::Error>,
) -> Result<String, String> {
    match response {
        Ok(resp) => resp.text().await.map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod tests;
