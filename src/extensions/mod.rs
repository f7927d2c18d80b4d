//! Typed wrappers over described contract functions
//!
//! One module per standard, mirroring the generated wrapper layout the
//! dashboard consumes: write wrappers accept eager params or an async
//! producer and return a [`PreparedCall`]; read wrappers encode, call,
//! and decode.

pub mod erc1155;
pub mod erc20;
pub mod erc721;
pub mod vote;

use alloy_dyn_abi::DynSolValue;

use crate::domain::abi::decode_outputs;
use crate::domain::call::PreparedCall;
use crate::error::Result;
use crate::infrastructure::ethereum::EthereumProvider;

/// Encode a read call, execute it, decode the outputs
pub(crate) async fn read_call(
    provider: &dyn EthereumProvider,
    call: &PreparedCall,
) -> Result<Vec<DynSolValue>> {
    let request = call.to_request(None).await?;
    let data = provider.call(request).await?;
    Ok(decode_outputs(&call.function, &data)?)
}
