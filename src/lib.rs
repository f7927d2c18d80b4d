//! preflight: an EVM transaction-preparation SDK
//!
//! Builds lazy, strongly-typed contract call descriptors, resolves
//! human-readable recipients through ENS and Lens concurrently, and
//! submits prepared transactions through a node the caller controls.
//! Signing, transport internals, and rendering live outside this crate.

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod extensions;
pub mod infrastructure;

pub use client::Client;
pub use domain::abi::{FunctionAbi, ParamMap, ParamSpec};
pub use domain::call::{CallParams, ContractHandle, ParamSource, PreparedCall};
pub use domain::capabilities::{drawer_tabs, Capabilities, DrawerTab, TokenContext};
pub use domain::transfer::SendTokenRequest;
pub use error::{Error, Result};
pub use infrastructure::ethereum::{EthereumProvider, ProviderConfig};
pub use infrastructure::indexer::{add_paging, IndexerClient, PagingParams};
pub use infrastructure::naming::{NameResolver, RecipientResolver};
