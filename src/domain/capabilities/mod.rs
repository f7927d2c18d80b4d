//! Contract capability detection and drawer tab composition
//!
//! Capabilities are computed once per contract from ERC-165 probes and
//! exposed as a set of named booleans. Components choose behavior with
//! explicit checks against the set, never virtual dispatch.

mod tabs;

use std::sync::Arc;

use alloy::primitives::B256;
use alloy_dyn_abi::DynSolValue;

use crate::domain::abi::{decode_outputs, selector_from_signature, FunctionAbi, ParamMap, ParamSpec};
use crate::domain::call::{ContractHandle, ParamSource, PreparedCall};
use crate::error::Result;
use crate::infrastructure::ethereum::EthereumProvider;

pub use tabs::{drawer_tabs, DrawerTab, TokenContext};

/// ERC-721 (EIP-165 published id)
pub const ERC721_INTERFACE_ID: [u8; 4] = [0x80, 0xac, 0x58, 0xcd];
/// ERC-1155 (EIP-165 published id)
pub const ERC1155_INTERFACE_ID: [u8; 4] = [0xd9, 0xb6, 0x7a, 0x26];

/// Named capability flags for a contract
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub erc20: bool,
    pub erc721: bool,
    pub erc1155: bool,
    pub mintable: bool,
    pub burnable: bool,
    pub claimable: bool,
    pub claim_conditions: bool,
    pub updatable_metadata: bool,
}

impl Capabilities {
    /// Probe a contract once and derive its capability set.
    ///
    /// Probe failures (non-165 contracts, reverts) read as "capability
    /// absent" - detection never fails outright.
    pub async fn detect(
        provider: Arc<dyn EthereumProvider>,
        contract: ContractHandle,
    ) -> Self {
        let erc721 = supports_interface(&*provider, contract, ERC721_INTERFACE_ID).await;
        let erc1155 = supports_interface(&*provider, contract, ERC1155_INTERFACE_ID).await;
        // ERC-20 predates ERC-165; presence of decimals() is the probe
        let erc20 = !erc721 && !erc1155 && has_decimals(&*provider, contract).await;

        let mintable =
            supports_interface(&*provider, contract, interface_id(&MINTABLE_SIGNATURES)).await;
        let burnable =
            supports_interface(&*provider, contract, interface_id(&BURNABLE_SIGNATURES)).await;
        let claimable =
            supports_interface(&*provider, contract, interface_id(&CLAIMABLE_SIGNATURES)).await;
        let claim_conditions = supports_interface(
            &*provider,
            contract,
            interface_id(&CLAIM_CONDITIONS_SIGNATURES),
        )
        .await;
        let updatable_metadata = supports_interface(
            &*provider,
            contract,
            interface_id(&UPDATABLE_METADATA_SIGNATURES),
        )
        .await;

        Self {
            erc20,
            erc721,
            erc1155,
            mintable,
            burnable,
            claimable,
            claim_conditions,
            updatable_metadata,
        }
    }
}

// Extension interfaces, identified the Solidity way: the XOR of the
// member function selectors.
const MINTABLE_SIGNATURES: [&str; 1] = ["mintTo(address,uint256,string,uint256)"];
const BURNABLE_SIGNATURES: [&str; 2] = ["burn(uint256,uint256)", "burnBatch(uint256[],uint256[])"];
const CLAIMABLE_SIGNATURES: [&str; 1] =
    ["claim(address,uint256,uint256,address,uint256,(bytes32[],uint256,uint256,address),bytes)"];
const CLAIM_CONDITIONS_SIGNATURES: [&str; 2] = [
    "getActiveClaimConditionId(uint256)",
    "getClaimConditionById(uint256,uint256)",
];
const UPDATABLE_METADATA_SIGNATURES: [&str; 1] = ["setTokenURI(uint256,string)"];

/// XOR of the selectors of an interface's functions (EIP-165)
fn interface_id(signatures: &[&str]) -> [u8; 4] {
    let mut id = [0u8; 4];
    for signature in signatures {
        let selector = selector_from_signature(signature);
        for (byte, sel) in id.iter_mut().zip(selector.iter()) {
            *byte ^= sel;
        }
    }
    id
}

async fn supports_interface(
    provider: &dyn EthereumProvider,
    contract: ContractHandle,
    id: [u8; 4],
) -> bool {
    let function = FunctionAbi::from_signature(
        "supportsInterface",
        vec![ParamSpec::new("interfaceId", "bytes4")],
        vec!["bool".into()],
    );

    let mut word = [0u8; 32];
    word[..4].copy_from_slice(&id);
    let mut params = ParamMap::new();
    params.insert(
        "interfaceId".into(),
        DynSolValue::FixedBytes(B256::from(word), 4),
    );

    match probe_bool(provider, contract, function, params).await {
        Ok(supported) => supported,
        Err(err) => {
            tracing::debug!(contract = %contract.address, %err, "supportsInterface probe failed");
            false
        }
    }
}

async fn probe_bool(
    provider: &dyn EthereumProvider,
    contract: ContractHandle,
    function: FunctionAbi,
    params: ParamMap,
) -> Result<bool> {
    let call = PreparedCall::new(contract, function, ParamSource::eager(params));
    let request = call.to_request(None).await?;
    let data = provider.call(request).await?;
    let outputs = decode_outputs(&call.function, &data)?;
    Ok(matches!(outputs.first(), Some(DynSolValue::Bool(true))))
}

async fn has_decimals(provider: &dyn EthereumProvider, contract: ContractHandle) -> bool {
    let function =
        FunctionAbi::from_signature("decimals", Vec::new(), vec!["uint8".into()]);
    let call = PreparedCall::new(contract, function, ParamSource::eager(ParamMap::new()));

    let request = match call.to_request(None).await {
        Ok(request) => request,
        Err(_) => return false,
    };
    match provider.call(request).await {
        Ok(data) => decode_outputs(&call.function, &data).is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_interface_ids() {
        // ERC-721: XOR of the nine standard functions
        let erc721 = interface_id(&[
            "balanceOf(address)",
            "ownerOf(uint256)",
            "approve(address,uint256)",
            "getApproved(uint256)",
            "setApprovalForAll(address,bool)",
            "isApprovedForAll(address,address)",
            "transferFrom(address,address,uint256)",
            "safeTransferFrom(address,address,uint256)",
            "safeTransferFrom(address,address,uint256,bytes)",
        ]);
        assert_eq!(erc721, ERC721_INTERFACE_ID);
    }

    #[test]
    fn test_interface_id_is_order_independent() {
        let a = interface_id(&["burn(uint256,uint256)", "burnBatch(uint256[],uint256[])"]);
        let b = interface_id(&["burnBatch(uint256[],uint256[])", "burn(uint256,uint256)"]);
        assert_eq!(a, b);
    }
}
