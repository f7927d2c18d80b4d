//! Function schemas - selector plus ordered parameter specs

use alloy::primitives::keccak256;
use alloy_dyn_abi::DynSolType;
use serde::{Deserialize, Serialize};

use crate::error::AbiError;

/// A function parameter specification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamSpec {
    /// Parameter name (may be empty)
    pub name: String,
    /// Solidity type (e.g., "address", "uint256", "(uint256,address)")
    pub kind: String,
}

impl ParamSpec {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }

    /// Parse the Solidity type string into a dyn-abi type
    pub fn sol_type(&self) -> Result<DynSolType, AbiError> {
        DynSolType::parse(&self.kind)
            .map_err(|e| AbiError::BadParamType(self.kind.clone(), e.to_string()))
    }
}

/// A described contract function: fixed selector and ordered schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionAbi {
    /// 4-byte function selector
    pub selector: [u8; 4],
    /// Function name
    pub name: String,
    /// Input parameters in declaration order
    pub inputs: Vec<ParamSpec>,
    /// Output types in declaration order
    pub outputs: Vec<String>,
}

impl FunctionAbi {
    pub fn new(
        selector: [u8; 4],
        name: impl Into<String>,
        inputs: Vec<ParamSpec>,
        outputs: Vec<String>,
    ) -> Self {
        Self {
            selector,
            name: name.into(),
            inputs,
            outputs,
        }
    }

    /// Build from a hex selector string (e.g., "0xa9059cbb")
    pub fn with_selector_hex(
        selector_hex: &str,
        name: impl Into<String>,
        inputs: Vec<ParamSpec>,
        outputs: Vec<String>,
    ) -> Result<Self, AbiError> {
        let normalized = selector_hex
            .strip_prefix("0x")
            .or_else(|| selector_hex.strip_prefix("0X"))
            .unwrap_or(selector_hex);

        let bytes =
            hex::decode(normalized).map_err(|_| AbiError::BadSelector(selector_hex.into()))?;
        let selector: [u8; 4] = bytes
            .try_into()
            .map_err(|_| AbiError::BadSelector(selector_hex.into()))?;

        Ok(Self::new(selector, name, inputs, outputs))
    }

    /// Build from the canonical signature, computing the selector
    pub fn from_signature(
        name: impl Into<String>,
        inputs: Vec<ParamSpec>,
        outputs: Vec<String>,
    ) -> Self {
        let name = name.into();
        let params: Vec<&str> = inputs.iter().map(|p| p.kind.as_str()).collect();
        let selector = selector_from_signature(&format!("{}({})", name, params.join(",")));
        Self::new(selector, name, inputs, outputs)
    }

    /// Get selector as hex string
    pub fn selector_hex(&self) -> String {
        format!("0x{}", hex::encode(self.selector))
    }

    /// Canonical signature string (e.g., "transfer(address,uint256)")
    pub fn signature(&self) -> String {
        let params: Vec<&str> = self.inputs.iter().map(|p| p.kind.as_str()).collect();
        format!("{}({})", self.name, params.join(","))
    }
}

/// Compute a 4-byte selector from a canonical signature
/// (first 4 bytes of keccak256(signature))
pub fn selector_from_signature(signature: &str) -> [u8; 4] {
    let normalized = signature.replace(' ', "");
    let hash = keccak256(normalized.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}
