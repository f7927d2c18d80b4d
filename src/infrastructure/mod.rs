//! Infrastructure layer - external collaborators
//!
//! Alloy-based node providers, the two naming systems, and the
//! paginated indexer HTTP API.

pub mod ethereum;
pub mod indexer;
pub mod naming;
