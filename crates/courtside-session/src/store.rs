//! Profile store hook: the read seam to the external document store.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, RwLock};

use courtside_profile::{PlayerProfile, UserId};

use crate::ProfileFetchError;

/// Reads player profiles from the external document store.
///
/// The publisher issues exactly one fetch per identity-change
/// notification and never writes — persistence belongs to whatever
/// service owns the store.
///
/// # Trait bounds
///
/// - `Send + Sync` → the store is shared with spawned fetch tasks.
/// - `'static` → it owns its data; it lives as long as the publisher.
pub trait ProfileStore: Send + Sync + 'static {
    /// Fetches the profile for the given identity id.
    ///
    /// # Returns
    /// - `Ok(Some(profile))` — a stored record exists
    /// - `Ok(None)` — no record for this id (a default will be
    ///   synthesized by the caller)
    /// - `Err(ProfileFetchError)` — the store was unreachable or the
    ///   document was malformed
    fn fetch_profile(
        &self,
        uid: &UserId,
    ) -> impl Future<Output = Result<Option<PlayerProfile>, ProfileFetchError>> + Send;
}

// ---------------------------------------------------------------------------
// MemoryProfileStore
// ---------------------------------------------------------------------------

/// An in-memory [`ProfileStore`] for development and tests.
///
/// Cloning is cheap and clones share the same map, so a test can keep a
/// handle to assert what the publisher did (or didn't) touch.
#[derive(Debug, Clone, Default)]
pub struct MemoryProfileStore {
    profiles: Arc<RwLock<HashMap<UserId, PlayerProfile>>>,
}

impl MemoryProfileStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a profile, builder-style.
    pub fn with_profile(self, profile: PlayerProfile) -> Self {
        self.insert(profile);
        self
    }

    /// Inserts or replaces a profile.
    pub fn insert(&self, profile: PlayerProfile) {
        self.profiles
            .write()
            .expect("profile map lock poisoned")
            .insert(profile.uid.clone(), profile);
    }

    /// Returns `true` if a record exists for the given id.
    pub fn contains(&self, uid: &UserId) -> bool {
        self.profiles
            .read()
            .expect("profile map lock poisoned")
            .contains_key(uid)
    }

    /// Returns the number of stored profiles.
    pub fn len(&self) -> usize {
        self.profiles
            .read()
            .expect("profile map lock poisoned")
            .len()
    }

    /// Returns `true` if the store holds no profiles.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProfileStore for MemoryProfileStore {
    fn fetch_profile(
        &self,
        uid: &UserId,
    ) -> impl Future<Output = Result<Option<PlayerProfile>, ProfileFetchError>> + Send
    {
        let found = self
            .profiles
            .read()
            .expect("profile map lock poisoned")
            .get(uid)
            .cloned();
        async move { Ok(found) }
    }
}

// =========================================================================
// Tests
// =========================================================================
