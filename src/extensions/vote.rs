//! Governor (vote) wrappers

use alloy::primitives::{Address, U256};
use alloy_dyn_abi::DynSolValue;

use crate::domain::abi::{FunctionAbi, ParamMap, ParamSpec};
use crate::domain::call::{CallParams, ContractHandle, ParamSource, PreparedCall};
use crate::error::{AbiError, Result};
use crate::infrastructure::ethereum::EthereumProvider;

use super::read_call;

/// Governor proposal lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ProposalState {
    Pending = 0,
    Active = 1,
    Canceled = 2,
    Defeated = 3,
    Succeeded = 4,
    Queued = 5,
    Expired = 6,
    Executed = 7,
}

impl ProposalState {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Pending),
            1 => Some(Self::Active),
            2 => Some(Self::Canceled),
            3 => Some(Self::Defeated),
            4 => Some(Self::Succeeded),
            5 => Some(Self::Queued),
            6 => Some(Self::Expired),
            7 => Some(Self::Executed),
            _ => None,
        }
    }
}

/// Vote direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum VoteType {
    Against = 0,
    For = 1,
    Abstain = 2,
}

/// Parameters for the "castVoteWithReason" function
#[derive(Debug, Clone)]
pub struct CastVoteParams {
    pub proposal_id: U256,
    pub support: VoteType,
    pub reason: String,
}

fn cast_vote_abi() -> FunctionAbi {
    FunctionAbi::from_signature(
        "castVoteWithReason",
        vec![
            ParamSpec::new("proposalId", "uint256"),
            ParamSpec::new("support", "uint8"),
            ParamSpec::new("reason", "string"),
        ],
        vec!["uint256".into()],
    )
}

fn cast_vote_map(params: CastVoteParams) -> ParamMap {
    let mut map = ParamMap::new();
    map.insert(
        "proposalId".into(),
        DynSolValue::Uint(params.proposal_id, 256),
    );
    map.insert(
        "support".into(),
        DynSolValue::Uint(U256::from(params.support as u8), 8),
    );
    map.insert("reason".into(), DynSolValue::String(params.reason));
    map
}

/// Prepare a "castVoteWithReason" call
pub fn cast_vote(
    contract: ContractHandle,
    params: impl Into<CallParams<CastVoteParams>>,
) -> PreparedCall {
    PreparedCall::new(
        contract,
        cast_vote_abi(),
        params.into().into_source(cast_vote_map),
    )
}

/// Parameters for the "execute" function
#[derive(Debug, Clone)]
pub struct ExecuteParams {
    pub targets: Vec<Address>,
    pub values: Vec<U256>,
    pub calldatas: Vec<Vec<u8>>,
    pub description_hash: alloy::primitives::B256,
}

fn execute_abi() -> FunctionAbi {
    FunctionAbi::from_signature(
        "execute",
        vec![
            ParamSpec::new("targets", "address[]"),
            ParamSpec::new("values", "uint256[]"),
            ParamSpec::new("calldatas", "bytes[]"),
            ParamSpec::new("descriptionHash", "bytes32"),
        ],
        vec!["uint256".into()],
    )
}

fn execute_map(params: ExecuteParams) -> ParamMap {
    let mut map = ParamMap::new();
    map.insert(
        "targets".into(),
        DynSolValue::Array(params.targets.into_iter().map(DynSolValue::Address).collect()),
    );
    map.insert(
        "values".into(),
        DynSolValue::Array(
            params
                .values
                .into_iter()
                .map(|v| DynSolValue::Uint(v, 256))
                .collect(),
        ),
    );
    map.insert(
        "calldatas".into(),
        DynSolValue::Array(params.calldatas.into_iter().map(DynSolValue::Bytes).collect()),
    );
    map.insert(
        "descriptionHash".into(),
        DynSolValue::FixedBytes(params.description_hash, 32),
    );
    map
}

/// Prepare an "execute" call
pub fn execute(
    contract: ContractHandle,
    params: impl Into<CallParams<ExecuteParams>>,
) -> PreparedCall {
    PreparedCall::new(contract, execute_abi(), params.into().into_source(execute_map))
}

/// Read whether an account has voted on a proposal
pub async fn has_voted(
    provider: &dyn EthereumProvider,
    contract: ContractHandle,
    proposal_id: U256,
    account: Address,
) -> Result<bool> {
    let function = FunctionAbi::from_signature(
        "hasVoted",
        vec![
            ParamSpec::new("proposalId", "uint256"),
            ParamSpec::new("account", "address"),
        ],
        vec!["bool".into()],
    );
    let mut map = ParamMap::new();
    map.insert("proposalId".into(), DynSolValue::Uint(proposal_id, 256));
    map.insert("account".into(), DynSolValue::Address(account));

    let call = PreparedCall::new(contract, function, ParamSource::eager(map));
    let outputs = read_call(provider, &call).await?;
    match outputs.first() {
        Some(DynSolValue::Bool(voted)) => Ok(*voted),
        _ => Err(AbiError::Decode("hasVoted returned no bool".into()).into()),
    }
}

/// Read a proposal's lifecycle state
pub async fn state(
    provider: &dyn EthereumProvider,
    contract: ContractHandle,
    proposal_id: U256,
) -> Result<ProposalState> {
    let function = FunctionAbi::from_signature(
        "state",
        vec![ParamSpec::new("proposalId", "uint256")],
        vec!["uint8".into()],
    );
    let mut map = ParamMap::new();
    map.insert("proposalId".into(), DynSolValue::Uint(proposal_id, 256));

    let call = PreparedCall::new(contract, function, ParamSource::eager(map));
    let outputs = read_call(provider, &call).await?;
    match outputs.first() {
        Some(DynSolValue::Uint(value, _)) => u8::try_from(*value)
            .ok()
            .and_then(ProposalState::from_u8)
            .ok_or_else(|| AbiError::Decode("unknown proposal state".into()).into()),
        _ => Err(AbiError::Decode("state returned no uint8".into()).into()),
    }
}
