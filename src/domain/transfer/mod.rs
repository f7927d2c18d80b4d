//! Send-token flow: validate, resolve, prepare, submit
//!
//! Validation failures never reach the network; the recipient is
//! resolved only after the request passes local checks, and transport
//! failures propagate to the caller unchanged.

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, B256};
use alloy::rpc::types::TransactionRequest;

use crate::domain::call::ContractHandle;
use crate::domain::units::{parse_amount, parse_ether};
use crate::error::{Error, Result};
use crate::extensions::erc20;
use crate::infrastructure::ethereum::EthereumProvider;
use crate::infrastructure::naming::RecipientResolver;

/// A native or ERC-20 transfer request as entered by the user
#[derive(Debug, Clone)]
pub struct SendTokenRequest {
    /// `None` sends the chain's native token
    pub token_address: Option<Address>,
    /// Address, ENS name, or Lens local name
    pub recipient: String,
    /// Human decimal amount (e.g. "0.5")
    pub amount: String,
}

/// Execute a transfer from `from` on `chain_id`.
///
/// Fails fast on a malformed amount before any resolution attempt.
pub async fn send_token(
    provider: &dyn EthereumProvider,
    resolver: &RecipientResolver,
    chain_id: u64,
    from: Address,
    request: SendTokenRequest,
) -> Result<B256> {
    validate_amount(&request.amount)?;

    let to = resolver.resolve(&request.recipient).await?;
    tracing::debug!(recipient = %request.recipient, resolved = %to, "recipient resolved");

    let tx = match request.token_address {
        // native token transfer
        None => TransactionRequest::default()
            .with_from(from)
            .with_to(to)
            .with_value(parse_ether(&request.amount)?)
            .with_chain_id(chain_id),

        // erc20 token transfer
        Some(token) => {
            let contract = ContractHandle::new(token, chain_id);
            let decimals = erc20::decimals(provider, contract).await?;
            let amount = parse_amount(&request.amount, decimals)?;

            let call = erc20::transfer(
                contract,
                erc20::TransferParams { to, amount },
            );
            call.to_request(Some(from)).await?
        }
    };

    provider.send_transaction(tx).await
}

/// Shape-check the amount without knowing the token's decimals yet.
///
/// Rejects empty, signed, and non-numeric input so bad requests never
/// trigger a resolution round trip.
fn validate_amount(amount: &str) -> Result<()> {
    let trimmed = amount.trim();
    let body = match trimmed.split_once('.') {
        Some((int_part, frac_part)) => {
            if frac_part.contains('.') {
                return Err(Error::InvalidAmount(amount.into()));
            }
            format!("{int_part}{frac_part}")
        }
        None => trimmed.to_string(),
    };

    if body.is_empty() || !body.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidAmount(amount.into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount("1").is_ok());
        assert!(validate_amount("0.5").is_ok());
        assert!(validate_amount(" 2.25 ").is_ok());

        for bad in ["-1", "+1", "", ".", "1.2.3", "1e5", "abc", "0x10"] {
            assert!(
                matches!(validate_amount(bad), Err(Error::InvalidAmount(_))),
                "{bad:?}"
            );
        }
    }
}
