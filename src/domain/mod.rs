//! Domain layer - chain-independent call preparation logic

pub mod abi;
pub mod call;
pub mod capabilities;
pub mod transfer;
pub mod units;
