//! ERC-721 wrappers

use alloy::primitives::{Address, U256};
use alloy_dyn_abi::DynSolValue;

use crate::domain::abi::{FunctionAbi, ParamMap, ParamSpec};
use crate::domain::call::{CallParams, ContractHandle, ParamSource, PreparedCall};
use crate::error::{AbiError, Result};
use crate::infrastructure::ethereum::EthereumProvider;

use super::read_call;

/// Parameters for the "transferFrom" function
#[derive(Debug, Clone)]
pub struct TransferFromParams {
    pub from: Address,
    pub to: Address,
    pub token_id: U256,
}

fn transfer_from_abi() -> FunctionAbi {
    FunctionAbi::new(
        [0x23, 0xb8, 0x72, 0xdd],
        "transferFrom",
        vec![
            ParamSpec::new("from", "address"),
            ParamSpec::new("to", "address"),
            ParamSpec::new("tokenId", "uint256"),
        ],
        Vec::new(),
    )
}

fn transfer_from_map(params: TransferFromParams) -> ParamMap {
    let mut map = ParamMap::new();
    map.insert("from".into(), DynSolValue::Address(params.from));
    map.insert("to".into(), DynSolValue::Address(params.to));
    map.insert("tokenId".into(), DynSolValue::Uint(params.token_id, 256));
    map
}

/// Prepare a "transferFrom" call
pub fn transfer_from(
    contract: ContractHandle,
    params: impl Into<CallParams<TransferFromParams>>,
) -> PreparedCall {
    PreparedCall::new(
        contract,
        transfer_from_abi(),
        params.into().into_source(transfer_from_map),
    )
}

/// Parameters for the "burn" function
#[derive(Debug, Clone)]
pub struct BurnParams {
    pub token_id: U256,
}

fn burn_abi() -> FunctionAbi {
    FunctionAbi::new(
        [0x42, 0x96, 0x6c, 0x68],
        "burn",
        vec![ParamSpec::new("tokenId", "uint256")],
        Vec::new(),
    )
}

fn burn_map(params: BurnParams) -> ParamMap {
    let mut map = ParamMap::new();
    map.insert("tokenId".into(), DynSolValue::Uint(params.token_id, 256));
    map
}

/// Prepare a "burn" call
pub fn burn(
    contract: ContractHandle,
    params: impl Into<CallParams<BurnParams>>,
) -> PreparedCall {
    PreparedCall::new(contract, burn_abi(), params.into().into_source(burn_map))
}

/// Read a token's owner
pub async fn owner_of(
    provider: &dyn EthereumProvider,
    contract: ContractHandle,
    token_id: U256,
) -> Result<Address> {
    let function = FunctionAbi::new(
        [0x63, 0x52, 0x21, 0x1e],
        "ownerOf",
        vec![ParamSpec::new("tokenId", "uint256")],
        vec!["address".into()],
    );
    let mut map = ParamMap::new();
    map.insert("tokenId".into(), DynSolValue::Uint(token_id, 256));

    let call = PreparedCall::new(contract, function, ParamSource::eager(map));
    let outputs = read_call(provider, &call).await?;
    match outputs.first() {
        Some(DynSolValue::Address(owner)) => Ok(*owner),
        _ => Err(AbiError::Decode("ownerOf returned no address".into()).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::abi::selector_from_signature;

    #[test]
    fn test_selectors_match_signatures() {
        assert_eq!(
            transfer_from_abi().selector,
            selector_from_signature("transferFrom(address,address,uint256)")
        );
        assert_eq!(burn_abi().selector, selector_from_signature("burn(uint256)"));
    }

    #[tokio::test]
    async fn test_transfer_from_encodes_in_schema_order() {
        let call = transfer_from(
            ContractHandle::new(Address::repeat_byte(0xaa), 1),
            TransferFromParams {
                from: Address::repeat_byte(0x01),
                to: Address::repeat_byte(0x02),
                token_id: U256::from(7u64),
            },
        );

        let encoded = hex::encode(call.encode().await.unwrap());
        assert!(encoded.starts_with("23b872dd"));
        // from, then to, then tokenId
        assert!(encoded[8..72].ends_with(&"01".repeat(20)));
        assert!(encoded[72..136].ends_with(&"02".repeat(20)));
        assert!(encoded[136..200].ends_with("07"));
    }
}
