//! Deferred contract call descriptors
//!
//! A [`PreparedCall`] is built per UI action, encoded once per send
//! attempt, then discarded. Parameter values come from either an eager
//! value bag or a deferred asynchronous producer resolved immediately
//! before encoding.

mod descriptor;
mod params;

pub use descriptor::{ContractHandle, PreparedCall};
pub use params::{CallParams, ParamProducer, ParamSource};
