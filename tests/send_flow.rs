//! Send-token flow scenarios against a mock provider
//!
//! Covers validation ordering (bad input never reaches resolution),
//! the native and ERC-20 paths, and naming-system fallback.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use alloy::primitives::{Address, Bytes, B256, U256};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use alloy_dyn_abi::DynSolValue;

use preflight::domain::transfer::{send_token, SendTokenRequest};
use preflight::error::{Error, Result};
use preflight::infrastructure::naming::{NameResolver, RecipientResolver};
use preflight::EthereumProvider;

/// Provider that answers reads from a selector-keyed table and records
/// every submitted transaction.
struct MockProvider {
    responses: HashMap<[u8; 4], Bytes>,
    sent: Mutex<Vec<TransactionRequest>>,
}

impl MockProvider {
    fn new() -> Self {
        Self {
            responses: HashMap::new(),
            sent: Mutex::new(Vec::new()),
        }
    }

    fn with_response(mut self, selector: [u8; 4], outputs: Vec<DynSolValue>) -> Self {
        let encoded = DynSolValue::Tuple(outputs).abi_encode_params();
        self.responses.insert(selector, Bytes::from(encoded));
        self
    }

    fn sent(&self) -> Vec<TransactionRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl EthereumProvider for MockProvider {
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
        self.responses
            .get(&selector)
            .cloned()
            .ok_or_else(|| Error::Config(format!("unexpected call 0x{}", hex::encode(selector))))
    }

    async fn send_transaction(&self, request: TransactionRequest) -> Result<B256> {
        self.sent.lock().unwrap().push(request);
        Ok(B256::repeat_byte(0x99))
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

/// Naming system stub that counts lookups
struct StubResolver {
    result: Option<Address>,
    calls: AtomicUsize,
}

impl StubResolver {
    fn returning(result: Option<Address>) -> Arc<Self> {
        Arc::new(Self {
            result,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait::async_trait]
impl NameResolver for StubResolver {
    async fn resolve(&self, _name: &str) -> Result<Option<Address>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.result)
    }

    fn system(&self) -> &'static str {
        "stub"
    }
}

const DECIMALS_SELECTOR: [u8; 4] = [0x31, 0x3c, 0xe5, 0x67];

fn resolver_pair(
    ens: Option<Address>,
    lens: Option<Address>,
) -> (Arc<StubResolver>, Arc<StubResolver>, RecipientResolver) {
    let ens = StubResolver::returning(ens);
    let lens = StubResolver::returning(lens);
    let dispatcher = RecipientResolver::new(ens.clone(), lens.clone());
    (ens, lens, dispatcher)
}

#[tokio::test]
async fn test_negative_amount_fails_before_any_resolution() {
    let provider = MockProvider::new();
    let (ens, lens, resolver) = resolver_pair(Some(Address::repeat_byte(0x01)), None);

    let result = send_token(
        &provider,
        &resolver,
        1,
        Address::repeat_byte(0xee),
        SendTokenRequest {
            token_address: None,
            recipient: "vitalik.eth".into(),
            amount: "-1".into(),
        },
    )
    .await;

    assert!(matches!(result, Err(Error::InvalidAmount(_))));
    assert_eq!(ens.calls.load(Ordering::SeqCst), 0);
    assert_eq!(lens.calls.load(Ordering::SeqCst), 0);
    assert!(provider.sent().is_empty());
}

#[tokio::test]
async fn test_native_transfer_builds_value_transaction() {
    let provider = MockProvider::new();
    let recipient = Address::repeat_byte(0x01);
    let (_, _, resolver) = resolver_pair(Some(recipient), None);

    let hash = send_token(
        &provider,
        &resolver,
        1,
        Address::repeat_byte(0xee),
        SendTokenRequest {
            token_address: None,
            recipient: "vitalik.eth".into(),
            amount: "0.5".into(),
        },
    )
    .await
    .unwrap();

    assert_eq!(hash, B256::repeat_byte(0x99));
    let sent = provider.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to.unwrap().to().copied(), Some(recipient));
    assert_eq!(
        sent[0].value,
        Some(U256::from(5u64) * U256::from(10u64).pow(U256::from(17u64)))
    );
    // native transfers carry no calldata
    assert!(sent[0].input.input().is_none());
}

#[tokio::test]
async fn test_erc20_transfer_uses_token_decimals() {
    let provider = MockProvider::new()
        .with_response(DECIMALS_SELECTOR, vec![DynSolValue::Uint(U256::from(6u64), 8)]);
    let recipient = Address::repeat_byte(0x02);
    // local name resolves via the second system only
    let (ens, lens, resolver) = resolver_pair(None, Some(recipient));
    let token = Address::repeat_byte(0xbb);

    send_token(
        &provider,
        &resolver,
        1,
        Address::repeat_byte(0xee),
        SendTokenRequest {
            token_address: Some(token),
            recipient: "captain_jack".into(),
            amount: "0.5".into(),
        },
    )
    .await
    .unwrap();

    // both systems were consulted even though only one resolved
    assert_eq!(ens.calls.load(Ordering::SeqCst), 1);
    assert_eq!(lens.calls.load(Ordering::SeqCst), 1);

    let sent = provider.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to.unwrap().to().copied(), Some(token));

    let input = sent[0].input.input().unwrap();
    let encoded = hex::encode(input);
    assert!(encoded.starts_with("a9059cbb"));
    // amount scaled by 10^6: 0.5 -> 500000 = 0x07a120
    assert!(encoded.ends_with("07a120"));
}

#[tokio::test]
async fn test_out_of_range_decimals_is_decode_error() {
    // a nonconforming token answers decimals() with a word above u8
    let provider = MockProvider::new().with_response(
        DECIMALS_SELECTOR,
        vec![DynSolValue::Uint(U256::from(300u64), 256)],
    );
    let (_, _, resolver) = resolver_pair(Some(Address::repeat_byte(0x02)), None);

    let result = send_token(
        &provider,
        &resolver,
        1,
        Address::repeat_byte(0xee),
        SendTokenRequest {
            token_address: Some(Address::repeat_byte(0xbb)),
            recipient: "vitalik.eth".into(),
            amount: "1".into(),
        },
    )
    .await;

    assert!(matches!(result, Err(Error::Abi(_))));
    assert!(provider.sent().is_empty());
}

#[tokio::test]
async fn test_unresolvable_recipient_is_address_not_found() {
    let provider = MockProvider::new();
    let (_, _, resolver) = resolver_pair(None, None);

    let result = send_token(
        &provider,
        &resolver,
        1,
        Address::repeat_byte(0xee),
        SendTokenRequest {
            token_address: None,
            recipient: "nobody_home".into(),
            amount: "1".into(),
        },
    )
    .await;

    assert!(matches!(result, Err(Error::AddressNotFound)));
    assert!(provider.sent().is_empty());
}
