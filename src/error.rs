//! Error types

use thiserror::Error;

pub type Result<T, E = self::Error> = std::result::Result<T, E>;

/// Top-level SDK error
#[derive(Error, Debug)]
pub enum Error {
    /// Amount input failed shape validation
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// An operation needed a chain but none is active
    #[error("no active chain")]
    NoActiveChain,

    /// An operation needed an account but none is active
    #[error("no active account")]
    NoActiveAccount,

    /// Neither naming system yielded an address
    #[error("failed to resolve address")]
    AddressNotFound,

    /// Identifier no naming system could own (empty, whitespace, control chars)
    #[error("invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    /// ABI schema or encoding failure
    #[error(transparent)]
    Abi(#[from] AbiError),

    /// JSON-RPC transport failure
    #[error(transparent)]
    Rpc(#[from] alloy::transports::TransportError),

    /// HTTP transport failure
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Indexer API returned a non-success status
    #[error("indexer error {status}: {body}")]
    Indexer { status: u16, body: String },

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),
}

/// ABI-level failures: bad schemas, missing or mistyped values
#[derive(Error, Debug)]
pub enum AbiError {
    #[error("unparseable solidity type {0:?}: {1}")]
    BadParamType(String, String),

    #[error("missing parameter: {0}")]
    MissingParam(String),

    #[error("parameter {name:?} does not match declared type {kind:?}")]
    TypeMismatch { name: String, kind: String },

    #[error("invalid selector: {0:?}")]
    BadSelector(String),

    #[error("decode failed: {0}")]
    Decode(String),
}
