//! Drawer tab composition from a capability set

use super::Capabilities;

/// Viewer context for one token of a contract
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenContext {
    /// Viewer owns the token (ERC-721 owner match or ERC-1155 balance > 0)
    pub is_owner: bool,
    /// Viewer holds the minter role
    pub is_minter: bool,
}

/// A contextual action tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawerTab {
    pub title: &'static str,
    pub disabled: bool,
}

impl DrawerTab {
    fn enabled(title: &'static str) -> Self {
        Self {
            title,
            disabled: false,
        }
    }

    fn gated(title: &'static str, allowed: bool) -> Self {
        Self {
            title,
            disabled: !allowed,
        }
    }
}

/// Derive the action tabs for a token from the contract's capabilities.
///
/// Pure composition: fixed ordering, explicit capability checks,
/// ownership-gated tabs present but disabled when the viewer lacks the
/// required role.
pub fn drawer_tabs(caps: &Capabilities, ctx: &TokenContext) -> Vec<DrawerTab> {
    let mut tabs = Vec::new();

    if caps.claim_conditions && caps.erc1155 {
        tabs.push(DrawerTab::enabled("Claim Conditions"));
    }
    if caps.claimable && caps.erc1155 {
        tabs.push(DrawerTab::enabled("Claim"));
    }
    if caps.erc721 || caps.erc1155 {
        tabs.push(DrawerTab::gated("Transfer", ctx.is_owner));
    }
    if caps.erc1155 {
        tabs.push(DrawerTab::gated("Airdrop", ctx.is_owner));
    }
    if caps.burnable {
        tabs.push(DrawerTab::gated("Burn", ctx.is_owner));
    }
    if caps.mintable && caps.erc1155 {
        tabs.push(DrawerTab::gated("Mint Supply", ctx.is_minter));
    }
    if caps.updatable_metadata {
        tabs.push(DrawerTab::gated("Update Metadata", ctx.is_minter));
    }

    tabs
}
