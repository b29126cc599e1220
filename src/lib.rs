pub mod config;
pub mod log;
pub mod rpc;

pub use crate::config::EndpointConfig;
pub use crate::rpc::{RpcClient, WalletClient, WalletRpcError, WalletRpcResult};
