//! Ethereum provider abstraction and Alloy implementations
//!
//! The SDK core produces call descriptors; this layer carries them to a
//! node. Signing stays external: submission goes through
//! `eth_sendTransaction` against node-managed accounts.

use alloy::network::Ethereum;
use alloy::primitives::{Address, Bytes, B256, U256};
use alloy::providers::{
    fillers::{BlobGasFiller, ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller},
    Identity, Provider, ProviderBuilder, RootProvider,
};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};

use crate::error::{Error, Result};

/// Provider configuration
#[derive(Debug, Clone)]
pub enum ProviderConfig {
    /// HTTP JSON-RPC endpoint
    Http(String),
    /// WebSocket endpoint
    WebSocket(String),
}

impl ProviderConfig {
    /// Get display name for this endpoint
    pub fn display(&self) -> String {
        match self {
            ProviderConfig::Http(url) => url.clone(),
            ProviderConfig::WebSocket(url) => url.clone(),
        }
    }
}

/// Abstract Ethereum provider trait
///
/// Defines the node operations the SDK needs, abstracting over the
/// specific Alloy transport.
#[async_trait::async_trait]
pub trait EthereumProvider: Send + Sync + 'static {
    /// Get the chain id the node reports
    async fn chain_id(&self) -> Result<u64>;

    /// Get account balance
    async fn get_balance(&self, address: Address) -> Result<U256>;

    /// Execute a read call (eth_call)
    async fn call(&self, request: TransactionRequest) -> Result<Bytes>;

    /// Submit a transaction (eth_sendTransaction; the node signs)
    async fn send_transaction(&self, request: TransactionRequest) -> Result<B256>;

    /// Get transaction receipt
    async fn get_receipt(&self, hash: B256) -> Result<Option<TransactionReceipt>>;

    /// Get available accounts (node-managed)
    async fn accounts(&self) -> Result<Vec<Address>>;

    /// Get endpoint display name
    fn endpoint_name(&self) -> String;
}

// Type aliases for the filled providers
type FilledProvider = FillProvider<
    JoinFill<
        Identity,
        JoinFill<GasFiller, JoinFill<BlobGasFiller, JoinFill<NonceFiller, ChainIdFiller>>>,
    >,
    RootProvider,
    Ethereum,
>;

/// Enum-based provider storing concrete types for each transport
pub enum AlloyProvider {
    Http {
        provider: FilledProvider,
        endpoint: String,
    },
    WebSocket {
        provider: FilledProvider,
        endpoint: String,
    },
}

/// Create a provider from configuration
pub async fn create_provider(config: ProviderConfig) -> Result<Box<dyn EthereumProvider>> {
    match config {
        ProviderConfig::Http(url) => {
            let rpc_url = url
                .parse()
                .map_err(|_| Error::Config(format!("invalid HTTP URL: {url}")))?;
            let provider = ProviderBuilder::new().connect_http(rpc_url);
            Ok(Box::new(AlloyProvider::Http {
                provider,
                endpoint: url,
            }))
        }
        ProviderConfig::WebSocket(url) => {
            let provider = ProviderBuilder::new().connect(&url).await?;
            Ok(Box::new(AlloyProvider::WebSocket {
                provider,
                endpoint: url,
            }))
        }
    }
}

// Macro to reduce duplication across transport arms
macro_rules! impl_provider_method {
    ($self:ident, $method:ident $(, $arg:expr)*) => {
        match $self {
            AlloyProvider::Http { provider, .. } => provider.$method($($arg),*).await,
            AlloyProvider::WebSocket { provider, .. } => provider.$method($($arg),*).await,
        }
    };
}

#[async_trait::async_trait]
impl EthereumProvider for AlloyProvider {
    async fn chain_id(&self) -> Result<u64> {
        Ok(impl_provider_method!(self, get_chain_id)?)
    }

    async fn get_balance(&self, address: Address) -> Result<U256> {
        Ok(impl_provider_method!(self, get_balance, address)?)
    }

    async fn call(&self, request: TransactionRequest) -> Result<Bytes> {
        match self {
            AlloyProvider::Http { provider, .. } => Ok(provider.call(request).await?),
            AlloyProvider::WebSocket { provider, .. } => Ok(provider.call(request).await?),
        }
    }

    async fn send_transaction(&self, request: TransactionRequest) -> Result<B256> {
        let pending = match self {
            AlloyProvider::Http { provider, .. } => provider.send_transaction(request).await?,
            AlloyProvider::WebSocket { provider, .. } => {
                provider.send_transaction(request).await?
            }
        };
        Ok(*pending.tx_hash())
    }

    async fn get_receipt(&self, hash: B256) -> Result<Option<TransactionReceipt>> {
        Ok(impl_provider_method!(self, get_transaction_receipt, hash)?)
    }

    async fn accounts(&self) -> Result<Vec<Address>> {
        Ok(impl_provider_method!(self, get_accounts)?)
    }

    fn endpoint_name(&self) -> String {
        match self {
            AlloyProvider::Http { endpoint, .. } => endpoint.clone(),
            AlloyProvider::WebSocket { endpoint, .. } => endpoint.clone(),
        }
    }
}
