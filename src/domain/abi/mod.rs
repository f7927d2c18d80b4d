//! ABI domain models and calldata codec
//!
//! Function schemas are declared in code (the typed extension wrappers
//! carry fixed selectors); encoding goes through alloy-dyn-abi.

mod codec;
mod schema;

pub use codec::{decode_outputs, encode_call, order_params, ParamMap};
pub use schema::{selector_from_signature, FunctionAbi, ParamSpec};
