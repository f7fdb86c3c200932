use bio_core::{Identity, StorageKeySet, resolve};

use log::info;

/// The authentication collaborator, reduced to what profile storage needs.
pub trait IdentityProvider {
    /// The connected account, or `None` when no wallet is connected.
    fn active_identity(&self) -> Option<Identity>;

    /// Accounts the provider has seen, in its own order.
    fn known_identities(&self) -> Vec<Identity>;
}

/// A provider with a fixed, settable active identity.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentityProvider {
    active: Option<Identity>,
    known: Vec<Identity>,
}

impl StaticIdentityProvider {
    pub fn new(active: Option<Identity>) -> Self {
        let mut provider = Self::default();
        provider.set_active(active);
        provider
    }

    /// Switches the active identity, remembering it as known.
    pub fn set_active(&mut self, active: Option<Identity>) {
        if let Some(identity) = &active
            && !self.known.contains(identity)
        {
            self.known.push(identity.clone());
        }
        self.active = active;
    }
}

impl IdentityProvider for StaticIdentityProvider {
    fn active_identity(&self) -> Option<Identity> {
        self.active.clone()
    }

    fn known_identities(&self) -> Vec<Identity> {
        self.known.clone()
    }
}

/// An identity switch observed by [`IdentityBinding`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingChange {
    pub previous: Identity,
    pub current: Identity,
    pub keys: StorageKeySet,
}

/// Tracks the bound identity and its resolved storage keys.
#[derive(Debug, Clone)]
pub struct IdentityBinding {
    identity: Identity,
    keys: StorageKeySet,
}

impl IdentityBinding {
    /// Binds `active`; `None` binds the sentinel identity.
    pub fn new(active: Option<Identity>) -> Self {
        let identity = active.unwrap_or_default();
        let keys = resolve(&identity);
        Self { identity, keys }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn keys(&self) -> &StorageKeySet {
        &self.keys
    }

    /// Rebinds to `active` if it differs from the bound identity.
    ///
    /// Connect, disconnect and account switches all produce a change.
    pub fn observe(&mut self, active: Option<Identity>) -> Option<BindingChange> {
        let current = active.unwrap_or_default();
        if current == self.identity {
            return None;
        }

        let previous = std::mem::replace(&mut self.identity, current.clone());
        self.keys = resolve(&current);
        info!("Identity changed from {previous} to {current}");

        Some(BindingChange {
            previous,
            current,
            keys: self.keys.clone(),
        })
    }
}
