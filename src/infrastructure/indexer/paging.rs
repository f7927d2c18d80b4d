//! Paging query parameters

use serde::{Deserialize, Serialize};

/// Optional paging for the read API.
///
/// Absent (or zero) fields are omitted from the wire query; the server
/// applies its own defaults. No bounds are validated here.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PagingParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl PagingParams {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
        }
    }
}

/// Append paging parameters to a query collection.
///
/// Mutates and returns the collection it was given - callers must treat
/// the input as consumed.
pub fn add_paging<'a>(
    query: &'a mut Vec<(String, String)>,
    paging: &PagingParams,
) -> &'a mut Vec<(String, String)> {
    if let Some(page) = paging.page.filter(|p| *p != 0) {
        query.push(("page".into(), page.to_string()));
    }
    if let Some(page_size) = paging.page_size.filter(|p| *p != 0) {
        query.push(("pageSize".into(), page_size.to_string()));
    }
    query
}
