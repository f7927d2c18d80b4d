//! HTTP client for the indexer read API

use std::time::Duration;

use alloy::primitives::Address;
use reqwest::Client;

use crate::error::{Error, Result};

use super::paging::{add_paging, PagingParams};
use super::wire::NftsPage;

/// Client for the paginated indexer HTTP API.
///
/// No retries and no caching at this layer; callers layer their own
/// query caching on top.
pub struct IndexerClient {
    base_url: String,
    client: Client,
}

impl IndexerClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Fetch NFTs held by an owner, optionally filtered by chain
    pub async fn nfts_by_owner(
        &self,
        owner: Address,
        chain_ids: &[u64],
        paging: PagingParams,
    ) -> Result<NftsPage> {
        let mut query: Vec<(String, String)> = vec![("owner".into(), owner.to_string())];
        for chain_id in chain_ids {
            query.push(("chainIds".into(), chain_id.to_string()));
        }
        add_paging(&mut query, &paging);

        let url = format!("{}/nfts/by-owner", self.base_url);
        let response = self.client.get(&url).query(&query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Indexer {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}
