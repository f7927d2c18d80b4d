//! Wire types for the indexer API

use serde::{Deserialize, Serialize};

/// An NFT as reported by the indexer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedNft {
    pub chain_id: u64,
    pub contract_address: String,
    pub token_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub balance: Option<String>,
}

/// One page of owned NFTs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftsPage {
    pub nfts: Vec<OwnedNft>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub total: Option<u64>,
}
