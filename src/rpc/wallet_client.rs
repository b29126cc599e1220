//! High-level typed client for wallet daemon operations.
//!
//! Wraps the generic [`RpcClient`] with the wallet methods a pool backend
//! needs: balance queries, address management, and payouts. Every call is a
//! single blocking round trip; failures surface with the transport layer's
//! classification unchanged.
//!
//! # Example
//!
//! ```rust,no_run
//! use url::Url;
//! use walletd_rpc::config::EndpointConfig;
//! use walletd_rpc::rpc::WalletClient;
//!
//! # fn main() -> Result<(), anyhow::Error> {
//! let config = EndpointConfig::new(
//!     Url::parse("http://127.0.0.1:8332/")?,
//!     "rpcuser",
//!     "rpcpassword",
//! );
//! let wallet = WalletClient::new(config);
//!
//! let balance = wallet.get_balance()?;
//! println!("spendable balance: {balance}");
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;

use log::{debug, info};

use super::client::RpcClient;
use super::error::WalletRpcError;
use super::types::ValidateAddressResponse;
use crate::config::EndpointConfig;
use crate::log::{mask_amount, mask_string};
use crate::rpc_params;

/// Typed wallet-method wrappers over the JSON-RPC transport.
pub struct WalletClient {
    rpc: RpcClient,
}

impl WalletClient {
    /// Creates a wallet client bound to the given endpoint configuration.
    pub fn new(config: EndpointConfig) -> Self {
        Self {
            rpc: RpcClient::new(config),
        }
    }

    /// Returns the daemon address as a string, for logging and display.
    pub fn get_address(&self) -> String {
        self.rpc.config().url.to_string()
    }

    /// Queries the wallet's spendable balance.
    pub fn get_balance(&self) -> Result<f64, WalletRpcError> {
        debug!("RPC: Requesting wallet balance");
        self.rpc.call("getbalance", rpc_params![])
    }

    /// Queries the daemon's current block height.
    pub fn get_block_count(&self) -> Result<u64, WalletRpcError> {
        debug!("RPC: Requesting block count");
        self.rpc.call("getblockcount", rpc_params![])
    }

    /// Requests a fresh receiving address from the wallet.
    pub fn get_new_address(&self) -> Result<String, WalletRpcError> {
        debug!("RPC: Requesting new address");
        self.rpc.call("getnewaddress", rpc_params![])
    }

    /// Asks the daemon whether `address` is well-formed and known.
    pub fn validate_address(
        &self,
        address: &str,
    ) -> Result<ValidateAddressResponse, WalletRpcError> {
        debug!(address = &*mask_string(address); "RPC: Validating address");
        self.rpc.call("validateaddress", rpc_params![address])
    }

    /// Pays `amount` to a single address and returns the transaction id.
    pub fn send_to_address(&self, address: &str, amount: f64) -> Result<String, WalletRpcError> {
        info!(
            target: "audit",
            address = &*mask_string(address),
            amount = &*mask_amount(amount);
            "RPC: Sending payout"
        );
        let txid: String = self.rpc.call("sendtoaddress", rpc_params![address, amount])?;
        info!(target: "audit", txid = &*txid; "RPC: Payout accepted");
        Ok(txid)
    }

    /// Pays every address in `outputs` in one transaction and returns the
    /// transaction id. This is the batched payout path used at the end of a
    /// pool round.
    pub fn send_many(&self, outputs: &BTreeMap<String, f64>) -> Result<String, WalletRpcError> {
        info!(
            target: "audit",
            recipients = outputs.len();
            "RPC: Sending batched payout"
        );
        let txid: String = self.rpc.call("sendmany", rpc_params!["", outputs])?;
        info!(target: "audit", txid = &*txid; "RPC: Batched payout accepted");
        Ok(txid)
    }
}
