//! # Courtside
//!
//! Session-state publication for club and court-sport apps.
//!
//! Courtside watches an external identity provider, resolves the
//! signed-in player's profile from a document store, and publishes the
//! combined session state — identity, profile, loading flag, admin flag
//! — to any number of consumers. Apps implement two small traits
//! ([`IdentitySource`], [`ProfileStore`]) on top of their auth SDK and
//! store client; the publisher handles the rest.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use courtside::prelude::*;
//! use tokio::sync::mpsc;
//!
//! /// Adapter over your auth SDK's change listener.
//! struct Provider;
//!
//! impl IdentitySource for Provider {
//!     fn subscribe(&self) -> IdentityEvents {
//!         let (tx, rx) = mpsc::unbounded_channel();
//!         // Real adapters forward the SDK's callback into `tx`,
//!         // starting with the current identity.
//!         let _ = tx.send(Some(Identity::new("u1").with_display_name("Ana")));
//!         rx
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let handle = SessionBuilder::new()
//!         .spawn(&Provider, MemoryProfileStore::new());
//!
//!     let mut session = handle.subscribe();
//!     while session.changed().await.is_ok() {
//!         let state = session.borrow().clone();
//!         println!("signed in: {}", state.is_signed_in());
//!     }
//! }
//! ```

mod runtime;

pub use runtime::SessionBuilder;

pub use courtside_profile::{
    DEFAULT_DISPLAY_NAME, Identity, PlayerProfile, PlayerStats, UserId,
};
pub use courtside_session::{
    FETCH_FAILED_BODY, FETCH_FAILED_TITLE, IdentityEvents, IdentitySource,
    LogNotifier, MemoryProfileStore, Notice, Notifier, ProfileFetchError,
    ProfileStore, SessionConfig, SessionHandle, SessionState, SessionWatch,
    Severity, spawn_publisher,
};

/// Everything most apps need, in one import.
pub mod prelude {
    pub use crate::{
        DEFAULT_DISPLAY_NAME, Identity, IdentityEvents, IdentitySource,
        LogNotifier, MemoryProfileStore, Notice, Notifier,
        PlayerProfile, PlayerStats, ProfileFetchError, ProfileStore,
        SessionBuilder, SessionConfig, SessionHandle, SessionState,
        SessionWatch, Severity, UserId,
    };
}
