//! Name resolution - human-readable identifiers to chain addresses
//!
//! Two independent naming systems are consulted: the dot-suffixed
//! global ENS registry and the dot-free Lens local-name registry. The
//! namespaces are mutually exclusive by convention (Lens forbids "." in
//! local names), so the same identifier can never be legitimately owned
//! in both systems. The dispatcher relies on that invariant but does
//! not enforce it.

mod ens;
mod lens;

use std::sync::Arc;

use alloy::primitives::Address;

use crate::error::{Error, Result};

pub use ens::{EnsResolver, DEFAULT_ENS_REGISTRY};
pub use lens::{LensResolver, DEFAULT_LENS_HANDLES};

/// A naming system that maps identifiers to addresses
///
/// `Ok(None)` means "this system has no record"; `Err` means the lookup
/// itself failed. The dispatcher treats both the same way.
#[async_trait::async_trait]
pub trait NameResolver: Send + Sync {
    async fn resolve(&self, name: &str) -> Result<Option<Address>>;

    /// Short system label used in logs
    fn system(&self) -> &'static str;
}

/// Resolves recipient identifiers by racing both naming systems
pub struct RecipientResolver {
    primary: Arc<dyn NameResolver>,
    secondary: Arc<dyn NameResolver>,
}

impl RecipientResolver {
    /// `primary` wins ties; in the default wiring that is ENS.
    pub fn new(primary: Arc<dyn NameResolver>, secondary: Arc<dyn NameResolver>) -> Self {
        Self { primary, secondary }
    }

    /// Resolve an identifier to an address.
    ///
    /// A literal hex address short-circuits without any lookup. A
    /// malformed identifier fails with [`Error::InvalidIdentifier`]
    /// before any network call. Otherwise both systems are queried
    /// concurrently and joined once both settle - never short-circuited
    /// on the first success, so the priority ordering stays
    /// deterministic. Individual lookup failures are swallowed; only
    /// when neither system yields an address does the operation fail,
    /// with [`Error::AddressNotFound`].
    pub async fn resolve(&self, identifier: &str) -> Result<Address> {
        if let Ok(address) = identifier.parse::<Address>() {
            return Ok(address);
        }
        validate_identifier(identifier)?;

        let (primary, secondary) = futures::join!(
            swallow(self.primary.as_ref(), identifier),
            swallow(self.secondary.as_ref(), identifier),
        );

        primary.or(secondary).ok_or(Error::AddressNotFound)
    }
}

/// Map an individual naming-system failure to "no result"
async fn swallow(resolver: &dyn NameResolver, name: &str) -> Option<Address> {
    match resolver.resolve(name).await {
        Ok(address) => address,
        Err(err) => {
            tracing::debug!(system = resolver.system(), %err, "naming lookup failed");
            None
        }
    }
}

/// Reject identifiers no naming system could own
fn validate_identifier(identifier: &str) -> Result<()> {
    if identifier.is_empty()
        || identifier
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
    {
        return Err(Error::InvalidIdentifier(identifier.into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct FixedResolver {
        result: Option<Address>,
        fail: bool,
        calls: AtomicUsize,
    }

    impl FixedResolver {
        fn returning(result: Option<Address>) -> Arc<Self> {
            Arc::new(Self {
                result,
                fail: false,
                calls: AtomicUsize::new(0),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                result: None,
                fail: true,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait::async_trait]
    impl NameResolver for FixedResolver {
        async fn resolve(&self, _name: &str) -> Result<Option<Address>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(Error::AddressNotFound);
            }
            Ok(self.result)
        }

        fn system(&self) -> &'static str {
            "fixed"
        }
    }

    fn addr(byte: u8) -> Address {
        Address::repeat_byte(byte)
    }

    #[tokio::test]
    async fn test_primary_wins_when_both_resolve() {
        let resolver = RecipientResolver::new(
            FixedResolver::returning(Some(addr(0x01))),
            FixedResolver::returning(Some(addr(0x02))),
        );
        assert_eq!(resolver.resolve("vitalik.eth").await.unwrap(), addr(0x01));
    }

    #[tokio::test]
    async fn test_either_system_alone_suffices() {
        let primary_only = RecipientResolver::new(
            FixedResolver::returning(Some(addr(0x01))),
            FixedResolver::returning(None),
        );
        assert_eq!(primary_only.resolve("vitalik.eth").await.unwrap(), addr(0x01));

        let secondary_only = RecipientResolver::new(
            FixedResolver::returning(None),
            FixedResolver::returning(Some(addr(0x02))),
        );
        assert_eq!(
            secondary_only.resolve("captain_jack").await.unwrap(),
            addr(0x02)
        );
    }

    #[tokio::test]
    async fn test_failures_are_swallowed_not_propagated() {
        let resolver = RecipientResolver::new(
            FixedResolver::failing(),
            FixedResolver::returning(Some(addr(0x02))),
        );
        assert_eq!(resolver.resolve("captain_jack").await.unwrap(), addr(0x02));
    }

    #[tokio::test]
    async fn test_neither_resolves_is_address_not_found() {
        let resolver = RecipientResolver::new(
            FixedResolver::failing(),
            FixedResolver::returning(None),
        );
        let result = resolver.resolve("nobody_home").await;
        assert!(matches!(result, Err(Error::AddressNotFound)));
    }

    #[tokio::test]
    async fn test_literal_address_short_circuits() {
        let primary = FixedResolver::returning(Some(addr(0x01)));
        let resolver = RecipientResolver::new(primary.clone(), FixedResolver::returning(None));

        let literal = "0x2222222222222222222222222222222222222222";
        assert_eq!(resolver.resolve(literal).await.unwrap(), addr(0x22));
        assert_eq!(primary.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_malformed_identifier_rejected_before_lookup() {
        let primary = FixedResolver::returning(Some(addr(0x01)));
        let resolver = RecipientResolver::new(primary.clone(), FixedResolver::returning(None));

        for bad in ["", "two words", "tab\there", "nul\u{0}"] {
            let result = resolver.resolve(bad).await;
            assert!(matches!(result, Err(Error::InvalidIdentifier(_))), "{bad:?}");
        }
        assert_eq!(primary.calls.load(Ordering::SeqCst), 0);
    }
}
