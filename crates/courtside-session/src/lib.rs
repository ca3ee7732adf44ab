//! Session-state publication for Courtside.
//!
//! This crate is the core of the stack. It watches the external identity
//! provider, resolves the signed-in player's profile, and publishes the
//! combined session state to any number of consumers:
//!
//! 1. **Seams** — [`IdentitySource`], [`ProfileStore`], and [`Notifier`]
//!    traits; the external world plugs in here.
//! 2. **State** — [`SessionState`], the published aggregate of identity,
//!    profile, loading flag, and admin flag.
//! 3. **Publisher** — [`spawn_publisher`] runs the actor that ties the
//!    two together; [`SessionHandle`] is how the app reads and tears it
//!    down.
//!
//! # How it fits in the stack
//!
//! ```text
//! App / UI bindings (above)  ← read state(), await subscribe() changes
//!     ↕
//! Session layer (this crate) ← derives and publishes session state
//!     ↕
//! Profile layer (below)      ← provides Identity, PlayerProfile types
//! ```

#![allow(async_fn_in_trait)]

mod error;
mod notify;
mod publisher;
mod source;
mod state;
mod store;

pub use error::ProfileFetchError;
pub use notify::{LogNotifier, Notice, Notifier, Severity};
pub use publisher::{
    FETCH_FAILED_BODY, FETCH_FAILED_TITLE, SessionHandle, SessionWatch,
    spawn_publisher,
};
pub use source::{IdentityEvents, IdentitySource};
pub use state::{SessionConfig, SessionState};
pub use store::{MemoryProfileStore, ProfileStore};
