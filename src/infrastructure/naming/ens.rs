//! ENS resolution - the dot-suffixed global registry
//!
//! Two-step lookup against the on-chain registry: `resolver(node)` to
//! find the name's resolver contract, then `addr(node)` on it. A zero
//! address at either step means the name is unregistered.

use std::sync::Arc;

use alloy::primitives::{keccak256, Address, B256};
use alloy_dyn_abi::DynSolValue;

use crate::domain::abi::{decode_outputs, FunctionAbi, ParamMap, ParamSpec};
use crate::domain::call::{ContractHandle, ParamSource, PreparedCall};
use crate::error::Result;
use crate::infrastructure::ethereum::EthereumProvider;

use super::NameResolver;

/// Mainnet ENS registry
pub const DEFAULT_ENS_REGISTRY: &str = "0x00000000000C2E074eC69A0dFb2997BA6C7d2e1e";

pub struct EnsResolver {
    provider: Arc<dyn EthereumProvider>,
    registry: ContractHandle,
}

impl EnsResolver {
    pub fn new(provider: Arc<dyn EthereumProvider>, registry: ContractHandle) -> Self {
        Self { provider, registry }
    }

    fn resolver_abi() -> FunctionAbi {
        // selector 0x0178b8bf
        FunctionAbi::from_signature(
            "resolver",
            vec![ParamSpec::new("node", "bytes32")],
            vec!["address".into()],
        )
    }

    fn addr_abi() -> FunctionAbi {
        // selector 0x3b3b57de
        FunctionAbi::from_signature(
            "addr",
            vec![ParamSpec::new("node", "bytes32")],
            vec!["address".into()],
        )
    }

    async fn read_address(
        &self,
        target: ContractHandle,
        function: FunctionAbi,
        node: B256,
    ) -> Result<Option<Address>> {
        let mut params = ParamMap::new();
        params.insert(
            function.inputs[0].name.clone(),
            DynSolValue::FixedBytes(node, 32),
        );

        let call = PreparedCall::new(target, function, ParamSource::eager(params));
        let request = call.to_request(None).await?;
        let data = self.provider.call(request).await?;

        let outputs = decode_outputs(&call.function, &data)?;
        match outputs.first() {
            Some(DynSolValue::Address(address)) if *address != Address::ZERO => {
                Ok(Some(*address))
            }
            _ => Ok(None),
        }
    }
}

#[async_trait::async_trait]
impl NameResolver for EnsResolver {
    async fn resolve(&self, name: &str) -> Result<Option<Address>> {
        // ENS names carry a dot-separated suffix; bare local names
        // belong to the other namespace.
        if !name.contains('.') {
            return Ok(None);
        }

        let node = namehash(name);

        let Some(resolver) = self
            .read_address(self.registry, Self::resolver_abi(), node)
            .await?
        else {
            return Ok(None);
        };

        let resolver = ContractHandle::new(resolver, self.registry.chain_id);
        self.read_address(resolver, Self::addr_abi(), node).await
    }

    fn system(&self) -> &'static str {
        "ens"
    }
}

/// EIP-137 namehash.
///
/// Labels are lowercased before hashing; full UTS-46 normalization is
/// not applied.
pub fn namehash(name: &str) -> B256 {
    let mut node = B256::ZERO;
    if name.is_empty() {
        return node;
    }

    let lowered = name.to_ascii_lowercase();
    for label in lowered.split('.').rev() {
        let label_hash = keccak256(label.as_bytes());
        let mut buf = [0u8; 64];
        buf[..32].copy_from_slice(node.as_slice());
        buf[32..].copy_from_slice(label_hash.as_slice());
        node = keccak256(buf);
    }
    node
}
