//! Error types for wallet daemon RPC operations.
//!
//! This module defines the [`WalletRpcError`] enum which encompasses all
//! possible failure modes when invoking a wallet daemon over JSON-RPC.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur during a wallet RPC call.
///
/// Every failure is classified at the point of detection and carries the
/// underlying cause, so callers can distinguish a broken network from a
/// daemon that rejected one specific call or returned malformed data.
/// Variants with an underlying fault expose it through
/// [`std::error::Error::source`].
#[derive(Debug, Error)]
pub enum WalletRpcError {
    /// The method name was empty. Rejected before any I/O is performed.
    #[error("Invalid method: name must not be empty")]
    InvalidMethod,

    /// The HTTP exchange could not be established or completed.
    ///
    /// Covers connection refused, DNS failures, protocol violations before
    /// a response is received, and requests that exceed the round-trip
    /// timeout.
    #[error("Connection failure: {0}")]
    ConnectionFailure(#[source] reqwest::Error),

    /// The daemon answered with an internal-server-error status.
    ///
    /// The request was understood but the remote method failed during
    /// execution.
    #[error("Server execution failure ({status}): {body}")]
    ServerExecutionFailure {
        /// The HTTP status code returned by the daemon.
        status: StatusCode,
        /// The response body, which may contain error details.
        body: String,
        #[source]
        source: reqwest::Error,
    },

    /// Any other non-success HTTP status, or a transport fault after the
    /// status line was received.
    #[error("Unknown transport failure ({status}): {body}")]
    UnknownTransportFailure {
        status: StatusCode,
        body: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body is not valid JSON or is not shaped as a response
    /// envelope. Carries the offending raw text for diagnosability.
    #[error("Deserialization failure: {source}")]
    DeserializationFailure {
        /// The raw response text that failed to decode.
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// The decoded envelope explicitly reports an application-level error
    /// from the remote method.
    #[error("RPC error {code}: {message}")]
    RpcError { code: i64, message: String },
}

// Convenience alias
pub type WalletRpcResult<T> = Result<T, WalletRpcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rpc_error_display_includes_code_and_message() {
        let err = WalletRpcError::RpcError {
            code: -6,
            message: "Insufficient funds".to_string(),
        };
        assert_eq!(err.to_string(), "RPC error -6: Insufficient funds");
    }

    #[test]
    fn deserialization_failure_exposes_cause() {
        let source = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = WalletRpcError::DeserializationFailure {
            body: "{oops".to_string(),
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn invalid_method_has_no_cause() {
        assert!(std::error::Error::source(&WalletRpcError::InvalidMethod).is_none());
    }
}
