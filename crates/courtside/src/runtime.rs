//! `SessionBuilder`: wires the seams into a running publisher.
//!
//! This is the entry point for most apps. It ties the layers together:
//! identity source → publisher → consumers.

use courtside_session::{
    IdentitySource, LogNotifier, Notifier, ProfileStore, SessionConfig,
    SessionHandle, spawn_publisher,
};

/// Builder for configuring and spawning a session publisher.
///
/// Defaults: [`SessionConfig::default`] and a [`LogNotifier`]. Swap the
/// notifier for a UI-backed one with [`notifier`](Self::notifier).
///
/// # Example
///
/// ```rust,ignore
/// let handle = SessionBuilder::new()
///     .fallback_display_name("Player")
///     .notifier(my_toast_sink)
///     .spawn(&my_provider, my_store);
/// ```
pub struct SessionBuilder<N: Notifier = LogNotifier> {
    config: SessionConfig,
    notifier: N,
}

impl SessionBuilder {
    /// Creates a builder with default config and the log notifier.
    pub fn new() -> Self {
        Self {
            config: SessionConfig::default(),
            notifier: LogNotifier,
        }
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Notifier> SessionBuilder<N> {
    /// Replaces the whole session configuration.
    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the display name used when synthesizing a profile for an
    /// identity that has none.
    pub fn fallback_display_name(
        mut self,
        name: impl Into<String>,
    ) -> Self {
        self.config.fallback_display_name = name.into();
        self
    }

    /// Replaces the notification sink.
    pub fn notifier<M: Notifier>(self, notifier: M) -> SessionBuilder<M> {
        SessionBuilder {
            config: self.config,
            notifier,
        }
    }

    /// Subscribes to the identity source and spawns the publisher.
    ///
    /// Returns the handle used to read session state and tear the
    /// publisher down.
    pub fn spawn(
        self,
        source: &impl IdentitySource,
        store: impl ProfileStore,
    ) -> SessionHandle {
        spawn_publisher(
            source.subscribe(),
            store,
            self.notifier,
            self.config,
        )
    }
}

// =========================================================================
// Tests
// =========================================================================
