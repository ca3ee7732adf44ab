//! Player identity and profile records for Courtside.
//!
//! This crate defines the data that the rest of the stack moves around:
//!
//! - **Identity** ([`UserId`], [`Identity`]) — who the signed-in principal
//!   is, as reported by the external identity provider.
//! - **Profile** ([`PlayerProfile`], [`PlayerStats`]) — the application's
//!   own record of a player, keyed by identity id, as stored in the
//!   profile document store.
//!
//! # Architecture
//!
//! The profile layer sits below everything else. It doesn't know about
//! async, subscriptions, or stores — it only knows what the records look
//! like and how they serialize.
//!
//! ```text
//! Session (publication) → Profile (records) ← Store documents (JSON)
//! ```

mod identity;
mod profile;

pub use identity::{Identity, UserId};
pub use profile::{DEFAULT_DISPLAY_NAME, PlayerProfile, PlayerStats};
