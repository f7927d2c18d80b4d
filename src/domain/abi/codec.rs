//! Calldata assembly and return-data decoding

use std::collections::BTreeMap;

use alloy::primitives::Bytes;
use alloy_dyn_abi::{DynSolType, DynSolValue};

use crate::error::AbiError;

use super::FunctionAbi;

/// Parameter values keyed by parameter name
pub type ParamMap = BTreeMap<String, DynSolValue>;

/// Pull values out of a parameter map in schema declaration order
///
/// Every schema parameter must be present; extra keys are ignored.
pub fn order_params(function: &FunctionAbi, params: &ParamMap) -> Result<Vec<DynSolValue>, AbiError> {
    let mut ordered = Vec::with_capacity(function.inputs.len());
    for spec in &function.inputs {
        let value = params
            .get(&spec.name)
            .cloned()
            .ok_or_else(|| AbiError::MissingParam(spec.name.clone()))?;
        ordered.push(value);
    }
    Ok(ordered)
}

/// Encode calldata: selector followed by ABI-encoded parameters
///
/// Values must already be in schema order; each is type-checked against
/// its declared Solidity type before encoding.
pub fn encode_call(function: &FunctionAbi, values: &[DynSolValue]) -> Result<Bytes, AbiError> {
    if values.len() != function.inputs.len() {
        return Err(AbiError::MissingParam(
            function
                .inputs
                .get(values.len())
                .map(|p| p.name.clone())
                .unwrap_or_else(|| "<arity>".into()),
        ));
    }

    for (spec, value) in function.inputs.iter().zip(values.iter()) {
        let ty = spec.sol_type()?;
        if !ty.matches(value) {
            return Err(AbiError::TypeMismatch {
                name: spec.name.clone(),
                kind: spec.kind.clone(),
            });
        }
    }

    let mut calldata = function.selector.to_vec();
    if !values.is_empty() {
        // Wrap values in a tuple for proper parameter encoding
        let tuple = DynSolValue::Tuple(values.to_vec());
        calldata.extend_from_slice(&tuple.abi_encode_params());
    }

    Ok(Bytes::from(calldata))
}

/// Decode return data according to the function's output types
pub fn decode_outputs(function: &FunctionAbi, data: &[u8]) -> Result<Vec<DynSolValue>, AbiError> {
    if function.outputs.is_empty() {
        return Ok(Vec::new());
    }

    let mut types = Vec::with_capacity(function.outputs.len());
    for kind in &function.outputs {
        let ty = DynSolType::parse(kind)
            .map_err(|e| AbiError::BadParamType(kind.clone(), e.to_string()))?;
        types.push(ty);
    }

    let decoded = DynSolType::Tuple(types)
        .abi_decode_params(data)
        .map_err(|e| AbiError::Decode(e.to_string()))?;

    match decoded {
        DynSolValue::Tuple(values) => Ok(values),
        other => Ok(vec![other]),
    }
}
