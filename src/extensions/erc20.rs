//! ERC-20 wrappers

use alloy::primitives::{Address, Bytes, B256, U256};
use alloy_dyn_abi::DynSolValue;

use crate::domain::abi::{FunctionAbi, ParamMap, ParamSpec};
use crate::domain::call::{CallParams, ContractHandle, ParamSource, PreparedCall};
use crate::error::{AbiError, Result};
use crate::infrastructure::ethereum::EthereumProvider;

use super::read_call;

/// Parameters for the "transfer" function
#[derive(Debug, Clone)]
pub struct TransferParams {
    pub to: Address,
    pub amount: U256,
}

fn transfer_abi() -> FunctionAbi {
    FunctionAbi::new(
        [0xa9, 0x05, 0x9c, 0xbb],
        "transfer",
        vec![
            ParamSpec::new("to", "address"),
            ParamSpec::new("amount", "uint256"),
        ],
        vec!["bool".into()],
    )
}

fn transfer_map(params: TransferParams) -> ParamMap {
    let mut map = ParamMap::new();
    map.insert("to".into(), DynSolValue::Address(params.to));
    map.insert("amount".into(), DynSolValue::Uint(params.amount, 256));
    map
}

/// Prepare a "transfer" call
pub fn transfer(
    contract: ContractHandle,
    params: impl Into<CallParams<TransferParams>>,
) -> PreparedCall {
    PreparedCall::new(
        contract,
        transfer_abi(),
        params.into().into_source(transfer_map),
    )
}

/// Parameters for the "claim" function
#[derive(Debug, Clone)]
pub struct ClaimParams {
    pub receiver: Address,
    pub quantity: U256,
    pub currency: Address,
    pub price_per_token: U256,
    /// Allowlist proof: merkle path and per-wallet quantity cap
    pub proof: Vec<B256>,
    pub max_quantity_in_allowlist: U256,
    pub data: Bytes,
}

fn claim_abi() -> FunctionAbi {
    FunctionAbi::new(
        [0x5a, 0xb3, 0x1c, 0x1a],
        "claim",
        vec![
            ParamSpec::new("receiver", "address"),
            ParamSpec::new("quantity", "uint256"),
            ParamSpec::new("currency", "address"),
            ParamSpec::new("pricePerToken", "uint256"),
            ParamSpec::new("allowlistProof", "(bytes32[],uint256)"),
            ParamSpec::new("data", "bytes"),
        ],
        Vec::new(),
    )
}

fn claim_map(params: ClaimParams) -> ParamMap {
    let proof = DynSolValue::Array(
        params
            .proof
            .into_iter()
            .map(|leaf| DynSolValue::FixedBytes(leaf, 32))
            .collect(),
    );
    let allowlist_proof = DynSolValue::Tuple(vec![
        proof,
        DynSolValue::Uint(params.max_quantity_in_allowlist, 256),
    ]);

    let mut map = ParamMap::new();
    map.insert("receiver".into(), DynSolValue::Address(params.receiver));
    map.insert("quantity".into(), DynSolValue::Uint(params.quantity, 256));
    map.insert("currency".into(), DynSolValue::Address(params.currency));
    map.insert(
        "pricePerToken".into(),
        DynSolValue::Uint(params.price_per_token, 256),
    );
    map.insert("allowlistProof".into(), allowlist_proof);
    map.insert("data".into(), DynSolValue::Bytes(params.data.to_vec()));
    map
}

/// Prepare a "claim" call.
///
/// Drop claims usually pass an async producer so the live price and
/// proof are fetched at send time, not at build time.
pub fn claim(
    contract: ContractHandle,
    params: impl Into<CallParams<ClaimParams>>,
) -> PreparedCall {
    PreparedCall::new(contract, claim_abi(), params.into().into_source(claim_map))
}

/// Read an owner's token balance
pub async fn balance_of(
    provider: &dyn EthereumProvider,
    contract: ContractHandle,
    owner: Address,
) -> Result<U256> {
    let function = FunctionAbi::new(
        [0x70, 0xa0, 0x82, 0x31],
        "balanceOf",
        vec![ParamSpec::new("owner", "address")],
        vec!["uint256".into()],
    );
    let mut map = ParamMap::new();
    map.insert("owner".into(), DynSolValue::Address(owner));

    let call = PreparedCall::new(contract, function, ParamSource::eager(map));
    let outputs = read_call(provider, &call).await?;
    match outputs.first() {
        Some(DynSolValue::Uint(balance, _)) => Ok(*balance),
        _ => Err(AbiError::Decode("balanceOf returned no uint256".into()).into()),
    }
}

/// Read the token's decimals
pub async fn decimals(
    provider: &dyn EthereumProvider,
    contract: ContractHandle,
) -> Result<u8> {
    let function = FunctionAbi::new(
        [0x31, 0x3c, 0xe5, 0x67],
        "decimals",
        Vec::new(),
        vec!["uint8".into()],
    );
    let call = PreparedCall::new(
        contract,
        function,
        ParamSource::eager(ParamMap::new()),
    );
    let outputs = read_call(provider, &call).await?;
    match outputs.first() {
        // the decoded word is not masked to uint8 range; reject dirty
        // high bits instead of truncating
        Some(DynSolValue::Uint(value, _)) => u8::try_from(*value)
            .map_err(|_| AbiError::Decode("decimals out of uint8 range".into()).into()),
        _ => Err(AbiError::Decode("decimals returned no uint8".into()).into()),
    }
}
