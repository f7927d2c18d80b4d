//! ERC-1155 wrappers

use alloy::primitives::{Address, Bytes, U256};
use alloy_dyn_abi::DynSolValue;

use crate::domain::abi::{FunctionAbi, ParamMap, ParamSpec};
use crate::domain::call::{CallParams, ContractHandle, ParamSource, PreparedCall};
use crate::error::{AbiError, Result};
use crate::infrastructure::ethereum::EthereumProvider;

use super::read_call;

/// Parameters for the "safeTransferFrom" function
#[derive(Debug, Clone)]
pub struct SafeTransferFromParams {
    pub from: Address,
    pub to: Address,
    pub token_id: U256,
    pub amount: U256,
    pub data: Bytes,
}

fn safe_transfer_from_abi() -> FunctionAbi {
    FunctionAbi::new(
        [0xf2, 0x42, 0x43, 0x2a],
        "safeTransferFrom",
        vec![
            ParamSpec::new("from", "address"),
            ParamSpec::new("to", "address"),
            ParamSpec::new("id", "uint256"),
            ParamSpec::new("amount", "uint256"),
            ParamSpec::new("data", "bytes"),
        ],
        Vec::new(),
    )
}

fn safe_transfer_from_map(params: SafeTransferFromParams) -> ParamMap {
    let mut map = ParamMap::new();
    map.insert("from".into(), DynSolValue::Address(params.from));
    map.insert("to".into(), DynSolValue::Address(params.to));
    map.insert("id".into(), DynSolValue::Uint(params.token_id, 256));
    map.insert("amount".into(), DynSolValue::Uint(params.amount, 256));
    map.insert("data".into(), DynSolValue::Bytes(params.data.to_vec()));
    map
}

/// Prepare a "safeTransferFrom" call
pub fn safe_transfer_from(
    contract: ContractHandle,
    params: impl Into<CallParams<SafeTransferFromParams>>,
) -> PreparedCall {
    PreparedCall::new(
        contract,
        safe_transfer_from_abi(),
        params.into().into_source(safe_transfer_from_map),
    )
}

/// Parameters for the "burn" function
#[derive(Debug, Clone)]
pub struct BurnParams {
    pub account: Address,
    pub token_id: U256,
    pub amount: U256,
}

fn burn_abi() -> FunctionAbi {
    FunctionAbi::new(
        [0xf5, 0x29, 0x8a, 0xca],
        "burn",
        vec![
            ParamSpec::new("account", "address"),
            ParamSpec::new("id", "uint256"),
            ParamSpec::new("value", "uint256"),
        ],
        Vec::new(),
    )
}

fn burn_map(params: BurnParams) -> ParamMap {
    let mut map = ParamMap::new();
    map.insert("account".into(), DynSolValue::Address(params.account));
    map.insert("id".into(), DynSolValue::Uint(params.token_id, 256));
    map.insert("value".into(), DynSolValue::Uint(params.amount, 256));
    map
}

/// Prepare a "burn" call
pub fn burn(
    contract: ContractHandle,
    params: impl Into<CallParams<BurnParams>>,
) -> PreparedCall {
    PreparedCall::new(contract, burn_abi(), params.into().into_source(burn_map))
}

/// Read an account's balance of one token id
pub async fn balance_of(
    provider: &dyn EthereumProvider,
    contract: ContractHandle,
    account: Address,
    token_id: U256,
) -> Result<U256> {
    let function = FunctionAbi::new(
        [0x00, 0xfd, 0xd5, 0x8e],
        "balanceOf",
        vec![
            ParamSpec::new("account", "address"),
            ParamSpec::new("id", "uint256"),
        ],
        vec!["uint256".into()],
    );
    let mut map = ParamMap::new();
    map.insert("account".into(), DynSolValue::Address(account));
    map.insert("id".into(), DynSolValue::Uint(token_id, 256));

    let call = PreparedCall::new(contract, function, ParamSource::eager(map));
    let outputs = read_call(provider, &call).await?;
    match outputs.first() {
        Some(DynSolValue::Uint(balance, _)) => Ok(*balance),
        _ => Err(AbiError::Decode("balanceOf returned no uint256".into()).into()),
    }
}
