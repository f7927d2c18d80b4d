//! Capability detection against a mock contract

use std::collections::HashSet;
use std::sync::Arc;

use alloy::primitives::{Address, Bytes, B256, U256};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use alloy_dyn_abi::DynSolValue;

use preflight::domain::abi::selector_from_signature;
use preflight::domain::capabilities::{
    drawer_tabs, Capabilities, TokenContext, ERC1155_INTERFACE_ID,
};
use preflight::error::{Error, Result};
use preflight::{ContractHandle, EthereumProvider};

/// Mock contract that declares a fixed set of ERC-165 interface ids
struct MockContract {
    interfaces: HashSet<[u8; 4]>,
    has_decimals: bool,
}

#[async_trait::async_trait]
impl EthereumProvider for MockContract {
    async fn chain_id(&self) -> Result<u64> {
        Ok(1)
    }

    async fn get_balance(&self, _address: Address) -> Result<U256> {
        Ok(U256::ZERO)
    }

    async fn call(&self, request: TransactionRequest) -> Result<Bytes> {
        let input = request
            .input
            .input()
            .ok_or_else(|| Error::Config("call without calldata".into()))?;
        let selector: [u8; 4] = input[..4].try_into().unwrap();

        if selector == selector_from_signature("supportsInterface(bytes4)") {
            // the probed id sits in the first 4 bytes of the argument word
            let probed: [u8; 4] = input[4..8].try_into().unwrap();
            let supported = self.interfaces.contains(&probed);
            let encoded =
                DynSolValue::Tuple(vec![DynSolValue::Bool(supported)]).abi_encode_params();
            return Ok(Bytes::from(encoded));
        }
        if selector == selector_from_signature("decimals()") && self.has_decimals {
            let encoded = DynSolValue::Tuple(vec![DynSolValue::Uint(U256::from(18u64), 8)])
                .abi_encode_params();
            return Ok(Bytes::from(encoded));
        }

        Err(Error::Config("execution reverted".into()))
    }

    async fn send_transaction(&self, _request: TransactionRequest) -> Result<B256> {
        Err(Error::Config("mock contract is read-only".into()))
    }

    async fn get_receipt(&self, _hash: B256) -> Result<Option<TransactionReceipt>> {
        Ok(None)
    }

    async fn accounts(&self) -> Result<Vec<Address>> {
        Ok(Vec::new())
    }

    fn endpoint_name(&self) -> String {
        "mock".into()
    }
}

fn burnable_id() -> [u8; 4] {
    let a = selector_from_signature("burn(uint256,uint256)");
    let b = selector_from_signature("burnBatch(uint256[],uint256[])");
    [a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]]
}

#[tokio::test]
async fn test_detects_erc1155_with_burnable() {
    let provider = Arc::new(MockContract {
        interfaces: HashSet::from([ERC1155_INTERFACE_ID, burnable_id()]),
        has_decimals: false,
    });

    let caps = Capabilities::detect(
        provider,
        ContractHandle::new(Address::repeat_byte(0xaa), 1),
    )
    .await;

    assert!(caps.erc1155);
    assert!(caps.burnable);
    assert!(!caps.erc721);
    assert!(!caps.erc20);
    assert!(!caps.claimable);

    let tabs = drawer_tabs(
        &caps,
        &TokenContext {
            is_owner: true,
            is_minter: false,
        },
    );
    let titles: Vec<_> = tabs.iter().map(|t| t.title).collect();
    assert_eq!(titles, vec!["Transfer", "Airdrop", "Burn"]);
}

#[tokio::test]
async fn test_plain_erc20_detected_by_decimals() {
    let provider = Arc::new(MockContract {
        interfaces: HashSet::new(),
        has_decimals: true,
    });

    let caps = Capabilities::detect(
        provider,
        ContractHandle::new(Address::repeat_byte(0xbb), 1),
    )
    .await;

    assert!(caps.erc20);
    assert!(!caps.erc721);
    assert!(!caps.erc1155);
    assert!(drawer_tabs(&caps, &TokenContext::default()).is_empty());
}

#[tokio::test]
async fn test_probe_failures_read_as_absent() {
    // nothing declared and decimals() reverts
    let provider = Arc::new(MockContract {
        interfaces: HashSet::new(),
        has_decimals: false,
    });

    let caps = Capabilities::detect(
        provider,
        ContractHandle::new(Address::repeat_byte(0xcc), 1),
    )
    .await;

    assert_eq!(caps, Capabilities::default());
}
