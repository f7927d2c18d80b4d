//! Parameter sources - eager value bags and deferred producers

use std::sync::Arc;

use futures::future::BoxFuture;

use crate::domain::abi::ParamMap;
use crate::error::Result;

/// A zero-argument asynchronous producer of parameter values.
///
/// `Fn` rather than `FnOnce`: the same descriptor may be encoded for
/// several send attempts, and each attempt re-invokes the producer so
/// just-in-time values (live prices, fresh nonces) stay current.
pub type ParamProducer = Arc<dyn Fn() -> BoxFuture<'static, Result<ParamMap>> + Send + Sync>;

/// Where a call's parameter values come from.
#[derive(Clone)]
pub enum ParamSource {
    /// Concrete values supplied at build time
    Eager(ParamMap),
    /// Values produced asynchronously at encode time
    Producer(ParamProducer),
}

impl ParamSource {
    pub fn eager(params: ParamMap) -> Self {
        ParamSource::Eager(params)
    }

    pub fn deferred<F, Fut>(producer: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<ParamMap>> + Send + 'static,
    {
        ParamSource::Producer(Arc::new(move || Box::pin(producer())))
    }

    /// Resolve the parameter map now.
    ///
    /// Invokes the producer exactly once; results are never memoized
    /// across attempts. A producer failure propagates verbatim.
    pub async fn resolve(&self) -> Result<ParamMap> {
        match self {
            ParamSource::Eager(params) => Ok(params.clone()),
            ParamSource::Producer(producer) => producer().await,
        }
    }
}

impl std::fmt::Debug for ParamSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamSource::Eager(params) => f.debug_tuple("Eager").field(params).finish(),
            ParamSource::Producer(_) => f.write_str("Producer(..)"),
        }
    }
}

/// Typed wrapper input: concrete params or an async producer of them.
///
/// Mirrors the shape of the generated extension wrappers, which accept
/// either the parameter struct itself or a deferred producer of it.
#[derive(Clone)]
pub enum CallParams<T> {
    Params(T),
    AsyncParams(Arc<dyn Fn() -> BoxFuture<'static, Result<T>> + Send + Sync>),
}

impl<T: Send + 'static> CallParams<T> {
    pub fn eager(params: T) -> Self {
        CallParams::Params(params)
    }

    pub fn deferred<F, Fut>(producer: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<T>> + Send + 'static,
    {
        CallParams::AsyncParams(Arc::new(move || Box::pin(producer())))
    }

    /// Lower into an untyped [`ParamSource`] given the wrapper's
    /// struct-to-map conversion.
    pub(crate) fn into_source(self, to_map: fn(T) -> ParamMap) -> ParamSource {
        match self {
            CallParams::Params(params) => ParamSource::Eager(to_map(params)),
            CallParams::AsyncParams(producer) => {
                ParamSource::Producer(Arc::new(move || {
                    let producer = producer.clone();
                    Box::pin(async move { producer().await.map(to_map) })
                }))
            }
        }
    }
}

impl<T> From<T> for CallParams<T> {
    fn from(params: T) -> Self {
        CallParams::Params(params)
    }
}
