use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::de::Error as _;
use serde_json::Value;

use super::error::WalletRpcError;
use super::transport::HttpTransport;
use super::types::{RpcRequest, RpcResponse};
use crate::config::EndpointConfig;

/// Generic JSON-RPC client for a wallet daemon.
///
/// The single entry point is [`call`](RpcClient::call): it builds the
/// request envelope, performs one authenticated HTTP round trip, decodes the
/// response into the caller-specified result type, and returns either the
/// typed result or exactly one classified failure. No retries, no partial
/// success.
///
/// The only state held is the immutable [`EndpointConfig`], so one instance
/// is safe to share across threads; each call owns its connection end to
/// end.
pub struct RpcClient {
    transport: HttpTransport,
}

impl RpcClient {
    /// Creates a client bound to the given endpoint configuration.
    pub fn new(config: EndpointConfig) -> Self {
        Self {
            transport: HttpTransport::new(config),
        }
    }

    /// Returns the configured endpoint.
    pub fn config(&self) -> &EndpointConfig {
        self.transport.config()
    }

    /// Invokes `method` with positional `params` and decodes the result as
    /// `T`.
    ///
    /// A present, non-null `error` object in the decoded envelope is
    /// authoritative over `result` and maps to
    /// [`WalletRpcError::RpcError`]. An envelope carrying neither is not
    /// shaped as expected and maps to
    /// [`WalletRpcError::DeserializationFailure`].
    pub fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<T, WalletRpcError> {
        let envelope = RpcRequest::new(method, params)?;

        debug!(method = method; "RPC: Sending request");
        let body = self.transport.post_envelope(&envelope)?;

        let response: RpcResponse<T> = RpcResponse::decode(&body)?;
        if let Some(error) = response.error {
            warn!(method = method, code = error.code; "RPC: Daemon returned error");
            return Err(WalletRpcError::RpcError {
                code: error.code,
                message: error.message,
            });
        }

        response
            .result
            .ok_or_else(|| WalletRpcError::DeserializationFailure {
                body,
                source: serde_json::Error::custom("response carries neither result nor error"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn unreachable_config() -> EndpointConfig {
        EndpointConfig::new(
            Url::parse("http://127.0.0.1:1/").unwrap(),
            "rpcuser",
            "rpcpassword",
        )
    }

    #[test]
    fn empty_method_fails_before_any_io() {
        let client = RpcClient::new(unreachable_config());
        // The endpoint is unreachable; an InvalidMethod result proves the
        // call was rejected before the transport ran.
        let result = client.call::<u64>("", Vec::new());
        assert!(matches!(result, Err(WalletRpcError::InvalidMethod)));
    }

    #[test]
    fn client_exposes_its_endpoint() {
        let client = RpcClient::new(unreachable_config());
        assert_eq!(client.config().username, "rpcuser");
        assert_eq!(client.config().url.as_str(), "http://127.0.0.1:1/");
    }
}
