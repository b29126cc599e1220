//! JSON-RPC client module for wallet daemon communication.
//!
//! This module implements the transport layer a pool backend uses to invoke
//! remote procedures on a cryptocurrency wallet daemon over
//! JSON-RPC-over-HTTP with Basic authentication.
//!
//! # Architecture
//!
//! - [`RpcClient`] - generic single entry point: method name + positional
//!   params in, caller-specified result type out
//! - [`WalletClient`] - typed wallet-method wrappers (balance, addresses,
//!   payouts) built on top of it
//! - [`WalletRpcError`] - the classification every failure path collapses
//!   into, always carrying the underlying cause
//! - Envelope types ([`RpcRequest`], [`RpcResponse`], [`RpcErrorObject`])
//!   for the wire format
//!
//! Each call is synchronous and atomic: one fresh authenticated connection,
//! one bounded round trip, then either a fully decoded typed result or
//! exactly one classified failure. Retry and backoff policy belong to the
//! caller.
//!
//! # Error Handling
//!
//! The [`WalletRpcError`] variants keep the fault sources apart:
//!
//! - network broken → [`ConnectionFailure`](WalletRpcError::ConnectionFailure)
//! - daemon failed executing the call →
//!   [`ServerExecutionFailure`](WalletRpcError::ServerExecutionFailure)
//! - daemon returned malformed data →
//!   [`DeserializationFailure`](WalletRpcError::DeserializationFailure)
//! - remote method reported an application error →
//!   [`RpcError`](WalletRpcError::RpcError)

mod client;
mod error;
mod transport;
mod types;
mod wallet_client;

pub use client::RpcClient;
pub use error::{WalletRpcError, WalletRpcResult};
pub use types::{REQUEST_ID, RpcErrorObject, RpcRequest, RpcResponse, ValidateAddressResponse};
pub use wallet_client::WalletClient;
