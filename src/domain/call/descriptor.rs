//! Prepared contract calls

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, U256};
use alloy::rpc::types::TransactionRequest;

use crate::domain::abi::{encode_call, order_params, FunctionAbi};
use crate::error::Result;

use super::ParamSource;

/// A contract on a specific chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractHandle {
    pub address: Address,
    pub chain_id: u64,
}

impl ContractHandle {
    pub fn new(address: Address, chain_id: u64) -> Self {
        Self { address, chain_id }
    }
}

/// A lazy, re-encodable contract call descriptor
///
/// Holds the target contract, the function schema, and a parameter
/// source. Nothing is encoded until [`PreparedCall::encode`] runs, so a
/// deferred producer can supply values just in time for each attempt.
#[derive(Debug, Clone)]
pub struct PreparedCall {
    pub contract: ContractHandle,
    pub function: FunctionAbi,
    params: ParamSource,
    /// Native value attached to the call
    pub value: U256,
}

impl PreparedCall {
    pub fn new(contract: ContractHandle, function: FunctionAbi, params: ParamSource) -> Self {
        Self {
            contract,
            function,
            params,
            value: U256::ZERO,
        }
    }

    pub fn with_value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }

    /// Encode calldata for this attempt.
    ///
    /// The parameter source is resolved now - a deferred producer is
    /// invoked exactly once per call to this method - and the resolved
    /// values are ordered by schema declaration order before encoding.
    pub async fn encode(&self) -> Result<Bytes> {
        let params = self.params.resolve().await?;
        let ordered = order_params(&self.function, &params)?;
        Ok(encode_call(&self.function, &ordered)?)
    }

    /// Build a transaction request ready for submission
    pub async fn to_request(&self, from: Option<Address>) -> Result<TransactionRequest> {
        let calldata = self.encode().await?;
        let mut request = TransactionRequest::default()
            .with_to(self.contract.address)
            .with_input(calldata)
            .with_chain_id(self.contract.chain_id);
        if self.value > U256::ZERO {
            request = request.with_value(self.value);
        }
        if let Some(from) = from {
            request = request.with_from(from);
        }
        Ok(request)
    }
}
