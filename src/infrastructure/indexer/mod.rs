//! Paginated indexer read API

mod client;
mod paging;
mod wire;

pub use client::IndexerClient;
pub use paging::{add_paging, PagingParams};
pub use wire::{NftsPage, OwnedNft};
