//! Session state: the aggregate the publisher broadcasts to consumers.

use courtside_profile::{DEFAULT_DISPLAY_NAME, Identity, PlayerProfile};

// ---------------------------------------------------------------------------
// SessionConfig
// ---------------------------------------------------------------------------

/// Configuration for the session publisher.
///
/// Sensible defaults are provided; apps override only what they need.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Display name used when a signed-in identity has none and no
    /// stored profile exists.
    ///
    /// Default: [`DEFAULT_DISPLAY_NAME`] (`"Usuário"`).
    pub fallback_display_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            fallback_display_name: DEFAULT_DISPLAY_NAME.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// SessionState
// ---------------------------------------------------------------------------

/// The published session state.
///
/// Consumers read this aggregate instead of talking to the identity
/// provider or the profile store themselves.
///
/// Invariants the publisher maintains:
/// - `is_admin` equals `profile.is_admin` whenever `profile` is present,
///   and is false otherwise.
/// - `loading` is true exactly while a profile resolution is outstanding:
///   from publisher start until the first notification settles, and from
///   any later identity change until its fetch settles.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// The signed-in identity, or `None` when signed out.
    pub identity: Option<Identity>,

    /// The resolved player profile, or `None` when signed out (or not
    /// yet resolved).
    pub profile: Option<PlayerProfile>,

    /// True while a profile resolution is in flight.
    pub loading: bool,

    /// Whether the current profile carries admin privileges.
    pub is_admin: bool,
}

impl SessionState {
    /// The state published before any identity notification arrives.
    pub fn initial() -> Self {
        Self {
            identity: None,
            profile: None,
            loading: true,
            is_admin: false,
        }
    }

    /// The state published after a sign-out notification.
    pub fn signed_out() -> Self {
        Self {
            identity: None,
            profile: None,
            loading: false,
            is_admin: false,
        }
    }

    /// Returns `true` if an identity is currently signed in.
    pub fn is_signed_in(&self) -> bool {
        self.identity.is_some()
    }

    /// Replaces the profile, keeping `is_admin` in sync with it.
    pub(crate) fn set_profile(&mut self, profile: Option<PlayerProfile>) {
        self.is_admin =
            profile.as_ref().is_some_and(|p| p.is_admin);
        self.profile = profile;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::initial()
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use courtside_profile::Identity;

    use super::*;

    #[test]
    fn test_initial_state_is_loading_and_empty() {
        let state = SessionState::initial();
        assert!(state.identity.is_none());
        assert!(state.profile.is_none());
        assert!(state.loading);
        assert!(!state.is_admin);
    }

    #[test]
    fn test_signed_out_state_is_settled_and_empty() {
        let state = SessionState::signed_out();
        assert!(state.identity.is_none());
        assert!(state.profile.is_none());
        assert!(!state.loading);
        assert!(!state.is_admin);
    }

    #[test]
    fn test_set_profile_syncs_admin_flag() {
        let identity = Identity::new("u1");
        let mut profile =
            PlayerProfile::synthesized(&identity, DEFAULT_DISPLAY_NAME);
        profile.is_admin = true;

        let mut state = SessionState::initial();
        state.set_profile(Some(profile));
        assert!(state.is_admin);

        state.set_profile(None);
        assert!(!state.is_admin);
    }

    #[test]
    fn test_config_default_fallback_name() {
        assert_eq!(
            SessionConfig::default().fallback_display_name,
            "Usuário"
        );
    }
}
