//! Lens resolution - the dot-free local-name registry
//!
//! A Lens local name maps to a handle token; the handle's owner is the
//! resolved address. Local names never contain ".", which keeps this
//! namespace disjoint from ENS.

use std::sync::Arc;

use alloy::primitives::Address;
use alloy_dyn_abi::DynSolValue;

use crate::domain::abi::{decode_outputs, FunctionAbi, ParamMap, ParamSpec};
use crate::domain::call::{ContractHandle, ParamSource, PreparedCall};
use crate::error::Result;
use crate::infrastructure::ethereum::EthereumProvider;

use super::NameResolver;

/// LensHandles contract on Polygon
pub const DEFAULT_LENS_HANDLES: &str = "0xe7E7EaD361f3AaCD73A61A9bD6C10cA17F38E945";

pub struct LensResolver {
    provider: Arc<dyn EthereumProvider>,
    handles: ContractHandle,
}

impl LensResolver {
    pub fn new(provider: Arc<dyn EthereumProvider>, handles: ContractHandle) -> Self {
        Self { provider, handles }
    }

    fn token_id_abi() -> FunctionAbi {
        FunctionAbi::from_signature(
            "getTokenId",
            vec![ParamSpec::new("localName", "string")],
            vec!["uint256".into()],
        )
    }

    fn owner_of_abi() -> FunctionAbi {
        // selector 0x6352211e
        FunctionAbi::from_signature(
            "ownerOf",
            vec![ParamSpec::new("tokenId", "uint256")],
            vec!["address".into()],
        )
    }

    async fn read(&self, function: FunctionAbi, params: ParamMap) -> Result<Vec<DynSolValue>> {
        let call = PreparedCall::new(self.handles, function, ParamSource::eager(params));
        let request = call.to_request(None).await?;
        let data = self.provider.call(request).await?;
        Ok(decode_outputs(&call.function, &data)?)
    }
}

#[async_trait::async_trait]
impl NameResolver for LensResolver {
    async fn resolve(&self, name: &str) -> Result<Option<Address>> {
        if name.contains('.') {
            return Ok(None);
        }

        let mut params = ParamMap::new();
        params.insert(
            "localName".into(),
            DynSolValue::String(name.to_ascii_lowercase()),
        );

        let outputs = self.read(Self::token_id_abi(), params).await?;
        let token_id = match outputs.first() {
            Some(DynSolValue::Uint(id, _)) if !id.is_zero() => *id,
            _ => return Ok(None),
        };

        let mut params = ParamMap::new();
        params.insert("tokenId".into(), DynSolValue::Uint(token_id, 256));

        let outputs = self.read(Self::owner_of_abi(), params).await?;
        match outputs.first() {
            Some(DynSolValue::Address(owner)) if *owner != Address::ZERO => Ok(Some(*owner)),
            _ => Ok(None),
        }
    }

    fn system(&self) -> &'static str {
        "lens"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_of_selector() {
        assert_eq!(LensResolver::owner_of_abi().selector_hex(), "0x6352211e");
    }
}
