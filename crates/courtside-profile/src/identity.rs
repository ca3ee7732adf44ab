//! Identity types: who the external provider says is signed in.
//!
//! The identity provider owns these records — Courtside never creates or
//! mutates an identity, it only receives the current one (or none) from
//! the provider's change stream and holds a read-only copy.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A unique identifier for a signed-in principal.
///
/// This is a newtype wrapper around the provider's opaque uid string.
/// Wrapping it keeps signatures honest — a function taking a `UserId`
/// can't accidentally be handed an email or a display name, even though
/// all three are strings underneath.
///
/// `#[serde(transparent)]` makes it serialize as the bare string, so a
/// `UserId("u1")` is just `"u1"` in a store document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    /// Creates a `UserId` from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw uid string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The signed-in principal, as delivered by the identity provider.
///
/// Only the attributes Courtside consumes are modeled: the uid (always
/// present) plus the email and display name, both of which the provider
/// may omit. Everything else the provider knows (tokens, linked
/// accounts, verification state) stays on the provider's side of the
/// seam.
///
/// `#[serde(rename_all = "camelCase")]` matches the provider's payload
/// field names (`displayName`, not `display_name`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// The provider's unique id for this principal.
    pub uid: UserId,

    /// Email address, if the provider has one.
    pub email: Option<String>,

    /// Display name, if the principal set one.
    pub display_name: Option<String>,
}

impl Identity {
    /// Creates an identity with just a uid (no email, no display name).
    ///
    /// Mostly useful in tests and demos; real identities come from the
    /// provider's change stream.
    pub fn new(uid: impl Into<UserId>) -> Self {
        Self {
            uid: uid.into(),
            email: None,
            display_name: None,
        }
    }

    /// Sets the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}

// =========================================================================
// Tests
// =========================================================================
