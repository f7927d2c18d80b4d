//! SDK client facade
//!
//! Ties together the provider, the naming dispatcher, and the indexer
//! behind one handle. Wallet state is a plain active-account address;
//! signing is the node's job.

use std::str::FromStr;
use std::sync::Arc;

use alloy::primitives::{Address, B256, U256};
use alloy_dyn_abi::DynSolValue;

use crate::config::Config;
use crate::domain::call::{ContractHandle, PreparedCall};
use crate::domain::capabilities::Capabilities;
use crate::domain::transfer::{self, SendTokenRequest};
use crate::error::{Error, Result};
use crate::extensions::read_call;
use crate::infrastructure::ethereum::{create_provider, EthereumProvider, ProviderConfig};
use crate::infrastructure::indexer::IndexerClient;
use crate::infrastructure::naming::{EnsResolver, LensResolver, RecipientResolver};

/// SDK client bound to one chain endpoint
pub struct Client {
    provider: Arc<dyn EthereumProvider>,
    resolver: RecipientResolver,
    indexer: Option<IndexerClient>,
    chain_id: Option<u64>,
    account: Option<Address>,
}

impl Client {
    /// Connect to the chain configured under `chain_id`
    pub async fn from_config(config: &Config, chain_id: u64) -> Result<Self> {
        let chain = config
            .chain(chain_id)
            .ok_or(Error::NoActiveChain)?;

        let endpoint = if let Some(rpc) = &chain.rpc {
            ProviderConfig::Http(rpc.clone())
        } else if let Some(ws) = &chain.ws {
            ProviderConfig::WebSocket(ws.clone())
        } else {
            return Err(Error::Config(format!(
                "chain {chain_id} has no rpc or ws endpoint"
            )));
        };

        Self::connect(endpoint, Some(chain_id), config).await
    }

    /// Connect to an explicit endpoint
    pub async fn connect(
        endpoint: ProviderConfig,
        chain_id: Option<u64>,
        config: &Config,
    ) -> Result<Self> {
        let endpoint_name = endpoint.display();
        let provider: Arc<dyn EthereumProvider> = Arc::from(create_provider(endpoint).await?);
        tracing::info!(endpoint = %endpoint_name, ?chain_id, "connected");

        let ens_registry = parse_address(&config.naming.ens_registry)?;
        let lens_handles = parse_address(&config.naming.lens_handles)?;

        let resolver = RecipientResolver::new(
            Arc::new(EnsResolver::new(
                provider.clone(),
                ContractHandle::new(ens_registry, config.naming.ens_chain_id),
            )),
            Arc::new(LensResolver::new(
                provider.clone(),
                ContractHandle::new(lens_handles, config.naming.lens_chain_id),
            )),
        );

        let indexer = match &config.indexer.base_url {
            Some(base_url) => Some(IndexerClient::new(base_url)?),
            None => None,
        };

        Ok(Self {
            provider,
            resolver,
            indexer,
            chain_id,
            account: None,
        })
    }

    /// Set the active account (node-managed)
    pub fn with_account(mut self, account: Address) -> Self {
        self.account = Some(account);
        self
    }

    pub fn active_account(&self) -> Option<Address> {
        self.account
    }

    pub fn chain_id(&self) -> Option<u64> {
        self.chain_id
    }

    pub fn provider(&self) -> &dyn EthereumProvider {
        self.provider.as_ref()
    }

    /// Resolve a recipient identifier to an address
    pub async fn resolve_recipient(&self, identifier: &str) -> Result<Address> {
        self.resolver.resolve(identifier).await
    }

    /// Execute a read call and decode its outputs
    pub async fn read(&self, call: &PreparedCall) -> Result<Vec<DynSolValue>> {
        read_call(self.provider.as_ref(), call).await
    }

    /// Encode and submit a prepared call from the active account
    pub async fn send(&self, call: &PreparedCall) -> Result<B256> {
        let from = self.account.ok_or(Error::NoActiveAccount)?;
        let request = call.to_request(Some(from)).await?;
        self.provider.send_transaction(request).await
    }

    /// Send native or ERC-20 tokens to a human-readable recipient
    pub async fn send_token(&self, request: SendTokenRequest) -> Result<B256> {
        let chain_id = self.chain_id.ok_or(Error::NoActiveChain)?;
        let from = self.account.ok_or(Error::NoActiveAccount)?;
        transfer::send_token(
            self.provider.as_ref(),
            &self.resolver,
            chain_id,
            from,
            request,
        )
        .await
    }

    /// Native balance of an address
    pub async fn balance(&self, address: Address) -> Result<U256> {
        self.provider.get_balance(address).await
    }

    /// Probe a contract's capability set once
    pub async fn capabilities(&self, contract: Address) -> Result<Capabilities> {
        let chain_id = self.chain_id.ok_or(Error::NoActiveChain)?;
        let handle = ContractHandle::new(contract, chain_id);
        Ok(Capabilities::detect(self.provider.clone(), handle).await)
    }

    /// Paginated indexer API, if configured
    pub fn indexer(&self) -> Result<&IndexerClient> {
        self.indexer
            .as_ref()
            .ok_or_else(|| Error::Config("no indexer base_url configured".into()))
    }
}

fn parse_address(value: &str) -> Result<Address> {
    Address::from_str(value).map_err(|_| Error::Config(format!("invalid address: {value}")))
}
