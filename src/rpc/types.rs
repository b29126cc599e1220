// Copyright 2025 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::WalletRpcError;

/// Request id used for every call.
///
/// Each call owns its connection end to end, so no request/response
/// correlation happens at this layer and a constant id is sufficient.
pub const REQUEST_ID: u64 = 1;

/// Builds the positional argument vector for [`RpcRequest`] from
/// heterogeneous expressions.
///
/// ```
/// use walletd_rpc::rpc_params;
///
/// let params = rpc_params!["miner-7", 12.5, true];
/// assert_eq!(params.len(), 3);
/// ```
#[macro_export]
macro_rules! rpc_params {
    () => {
        ::std::vec::Vec::<::serde_json::Value>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$(::serde_json::json!($arg)),+]
    };
}

/// A JSON-RPC request envelope.
///
/// `params` ordering is preserved exactly as supplied; positional arguments
/// are semantically significant to the remote method.
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest {
    pub id: u64,
    pub method: String,
    pub params: Vec<Value>,
}

impl RpcRequest {
    /// Builds a request envelope, rejecting empty method names before any
    /// I/O is performed.
    pub fn new(method: &str, params: Vec<Value>) -> Result<Self, WalletRpcError> {
        if method.is_empty() {
            return Err(WalletRpcError::InvalidMethod);
        }
        Ok(Self {
            id: REQUEST_ID,
            method: method.to_string(),
            params,
        })
    }

    /// Serializes the envelope to its wire payload.
    pub fn to_payload(&self) -> String {
        serde_json::json!({
            "id": self.id,
            "method": self.method,
            "params": self.params,
        })
        .to_string()
    }
}

/// A JSON-RPC response envelope.
///
/// Exactly one of `result`/`error` is meaningful for a well-formed
/// response; a present, non-null `error` is authoritative regardless of
/// `result`.
#[derive(Debug, Serialize, Deserialize)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<RpcErrorObject>,
    pub id: u64,
}

/// The error object carried by a response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

impl<T: DeserializeOwned> RpcResponse<T> {
    /// Decodes raw response text into a typed envelope.
    ///
    /// Pure transformation, no I/O. On failure the offending raw text is
    /// attached alongside the parse error.
    pub fn decode(body: &str) -> Result<Self, WalletRpcError> {
        serde_json::from_str(body).map_err(|source| WalletRpcError::DeserializationFailure {
            body: body.to_string(),
            source,
        })
    }
}

/// Address validation result from `validateaddress`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateAddressResponse {
    pub isvalid: bool,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub ismine: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_preserves_method_and_param_order() {
        let params = rpc_params!["miner-7", 3, false];
        let request = RpcRequest::new("sendtoaddress", params.clone()).unwrap();

        assert_eq!(request.method, "sendtoaddress");
        assert_eq!(request.params, params);

        let wire: Value = serde_json::from_str(&request.to_payload()).unwrap();
        assert_eq!(wire["id"], json!(REQUEST_ID));
        assert_eq!(wire["method"], json!("sendtoaddress"));
        assert_eq!(wire["params"], json!(["miner-7", 3, false]));
    }

    #[test]
    fn empty_method_is_rejected() {
        let result = RpcRequest::new("", rpc_params![]);
        assert!(matches!(result, Err(WalletRpcError::InvalidMethod)));
    }

    #[test]
    fn rpc_params_macro_builds_empty_and_ordered_vectors() {
        assert!(rpc_params![].is_empty());
        assert_eq!(
            rpc_params!["a", 1, true],
            vec![json!("a"), json!(1), json!(true)]
        );
    }

    #[test]
    fn decodes_successful_envelope() {
        let response: RpcResponse<u64> =
            RpcResponse::decode(r#"{"id":1,"result":42,"error":null}"#).unwrap();
        assert_eq!(response.id, 1);
        assert_eq!(response.result, Some(42));
        assert!(response.error.is_none());
    }

    #[test]
    fn decodes_error_envelope() {
        let body = r#"{"id":1,"result":null,"error":{"code":-1,"message":"insufficient funds"}}"#;
        let response: RpcResponse<u64> = RpcResponse::decode(body).unwrap();
        assert!(response.result.is_none());
        let error = response.error.unwrap();
        assert_eq!(error.code, -1);
        assert_eq!(error.message, "insufficient funds");
    }

    #[test]
    fn truncated_body_fails_with_offending_text_attached() {
        let raw = r#"{"id":1,"result""#;
        let err = RpcResponse::<u64>::decode(raw).unwrap_err();
        match err {
            WalletRpcError::DeserializationFailure { body, .. } => assert_eq!(body, raw),
            other => panic!("expected DeserializationFailure, got {other:?}"),
        }
    }

    #[test]
    fn validate_address_tolerates_missing_optional_fields() {
        let response: ValidateAddressResponse =
            serde_json::from_str(r#"{"isvalid":false}"#).unwrap();
        assert!(!response.isvalid);
        assert!(response.address.is_none());
        assert!(response.ismine.is_none());
    }
}
