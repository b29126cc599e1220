// Copyright 2025 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;

use super::error::WalletRpcError;
use super::types::RpcRequest;
use crate::config::EndpointConfig;

/// Fixed round-trip timeout. Exceeding it surfaces as a connection failure.
const REQUEST_TIMEOUT: Duration = Duration::from_millis(2000);

/// Content type the wallet daemon expects for JSON-RPC payloads.
const JSON_RPC_CONTENT_TYPE: &str = "application/json-rpc";

pub(crate) struct HttpTransport {
    config: EndpointConfig,
}

impl HttpTransport {
    pub fn new(config: EndpointConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }

    /// Sends the envelope as an authenticated HTTP POST and returns the raw
    /// response body.
    ///
    /// A fresh client is built per call: no connection is reused between
    /// calls. Blocks the calling thread for up to [`REQUEST_TIMEOUT`].
    pub fn post_envelope(&self, envelope: &RpcRequest) -> Result<String, WalletRpcError> {
        let payload = envelope.to_payload();

        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(WalletRpcError::ConnectionFailure)?;

        let response = client
            .post(self.config.url.clone())
            .basic_auth(&self.config.username, Some(&self.config.password))
            .header(CONTENT_TYPE, JSON_RPC_CONTENT_TYPE)
            .body(payload)
            .send()
            .map_err(WalletRpcError::ConnectionFailure)?;

        let status = response.status();
        if let Err(source) = response.error_for_status_ref().map(|_| ()) {
            let body = response
                .text()
                .unwrap_or_else(|_| "failed to read response body".into());
            return Err(classify_status(status, body, source));
        }

        response
            .text()
            .map_err(|source| WalletRpcError::UnknownTransportFailure {
                status,
                body: "failed to read response body".into(),
                source,
            })
    }
}

/// An internal-server-error status means the daemon understood the request
/// but the remote method failed during execution; every other non-success
/// status is unclassified.
fn classify_status(status: StatusCode, body: String, source: reqwest::Error) -> WalletRpcError {
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        WalletRpcError::ServerExecutionFailure { status, body, source }
    } else {
        WalletRpcError::UnknownTransportFailure { status, body, source }
    }
}
