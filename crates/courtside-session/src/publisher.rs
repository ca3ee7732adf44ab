//! The session publisher: an isolated Tokio task that owns session state.
//!
//! The publisher runs as an actor — no shared mutable state, just
//! channels in and out:
//!
//! ```text
//! identity events ──→ ┌───────────────┐ ──→ watch<SessionState>
//! fetch outcomes  ──→ │   publisher   │
//! commands        ──→ └───────────────┘ ──→ notices (on failure)
//! ```
//!
//! On every identity change it publishes the new identity immediately,
//! issues one profile fetch, and publishes the resolved state when the
//! fetch settles. Fetches run in their own spawned tasks so a slow store
//! never blocks the event loop.
//!
//! # Stale fetches
//!
//! Fetches are not cancelled when the identity changes again — they are
//! tagged with a generation number instead, and a resolution whose
//! generation is no longer current is discarded. An out-of-order
//! resolution therefore can never overwrite a newer identity's profile,
//! and a fetch that settles after teardown finds the actor's channel
//! closed and is dropped on the floor.

use std::sync::Arc;

use courtside_profile::{Identity, PlayerProfile};
use tokio::sync::{mpsc, watch};

use crate::{
    IdentityEvents, Notice, Notifier, ProfileFetchError, ProfileStore,
    SessionConfig, SessionState,
};

/// Title of the notice shown when a profile fetch fails.
pub const FETCH_FAILED_TITLE: &str = "Erro";

/// Body of the notice shown when a profile fetch fails.
pub const FETCH_FAILED_BODY: &str =
    "Não foi possível carregar seu perfil. Tente novamente mais tarde.";

/// Command channel size. Commands are rare (shutdown only), so a small
/// buffer is plenty.
const COMMAND_CHANNEL_SIZE: usize = 8;

/// Commands sent to the publisher actor through its channel.
enum PublisherCommand {
    /// Stop the actor. No further state updates after this.
    Shutdown,
}

/// The settled result of one spawned profile fetch.
struct FetchOutcome {
    /// Generation the fetch was issued under. Stale generations are
    /// discarded.
    generation: u64,
    /// The identity the fetch was issued for (needed for synthesis).
    identity: Identity,
    /// What the store said.
    result: Result<Option<PlayerProfile>, ProfileFetchError>,
}

/// A watch receiver over the published session state.
///
/// `borrow()` reads the latest state synchronously; `changed().await`
/// waits for the next publication. The channel closes when the
/// publisher stops.
pub type SessionWatch = watch::Receiver<SessionState>;

// ---------------------------------------------------------------------------
// SessionHandle
// ---------------------------------------------------------------------------

/// Handle to a running session publisher.
///
/// Cloneable; clones address the same publisher. The publisher stops
/// when [`shutdown`](Self::shutdown) is called or when every handle has
/// been dropped — watch receivers from [`subscribe`](Self::subscribe)
/// observe state but do not keep the publisher alive.
#[derive(Clone)]
pub struct SessionHandle {
    state_rx: SessionWatch,
    cmd_tx: mpsc::Sender<PublisherCommand>,
}

impl SessionHandle {
    /// Returns the latest published session state.
    ///
    /// Always answers synchronously; before the first identity
    /// notification this is [`SessionState::initial`] (loading = true).
    pub fn state(&self) -> SessionState {
        self.state_rx.borrow().clone()
    }

    /// Opens a new subscription to published state changes.
    pub fn subscribe(&self) -> SessionWatch {
        self.state_rx.clone()
    }

    /// Stops the publisher and waits until it has fully stopped.
    ///
    /// After this returns, no further state updates occur — a profile
    /// fetch still in flight resolves into a closed channel and its
    /// result is discarded.
    pub async fn shutdown(&self) {
        if self
            .cmd_tx
            .send(PublisherCommand::Shutdown)
            .await
            .is_ok()
        {
            // The actor drops its command receiver on exit; waiting for
            // the channel to close is waiting for the actor to be gone.
            self.cmd_tx.closed().await;
        }
    }
}

// ---------------------------------------------------------------------------
// spawn_publisher
// ---------------------------------------------------------------------------

/// Spawns a session publisher over the given identity event stream.
///
/// The publisher immediately publishes [`SessionState::initial`] and
/// then tracks the stream: one profile fetch per sign-in notification,
/// cleared state on sign-out, a [`Notice`] on fetch failure.
///
/// Returns the handle used to read state and tear the publisher down.
pub fn spawn_publisher<S, N>(
    events: IdentityEvents,
    store: S,
    notifier: N,
    config: SessionConfig,
) -> SessionHandle
where
    S: ProfileStore,
    N: Notifier,
{
    let (cmd_tx, cmd_rx) = mpsc::channel(COMMAND_CHANNEL_SIZE);
    let (state_tx, state_rx) = watch::channel(SessionState::initial());
    let (fetch_tx, fetch_rx) = mpsc::unbounded_channel();

    let actor = PublisherActor {
        events,
        events_closed: false,
        cmd_rx,
        fetch_tx,
        fetch_rx,
        state_tx,
        store: Arc::new(store),
        notifier,
        config,
        generation: 0,
        current: SessionState::initial(),
    };
    tokio::spawn(actor.run());

    SessionHandle { state_rx, cmd_tx }
}

// ---------------------------------------------------------------------------
// PublisherActor
// ---------------------------------------------------------------------------

struct PublisherActor<S: ProfileStore, N: Notifier> {
    /// Identity-change notifications from the provider.
    events: IdentityEvents,
    /// Set when the provider closed its stream; the actor keeps serving
    /// the last published state but stops polling the stream.
    events_closed: bool,
    /// Commands from handles. All senders dropped = owner gone = stop.
    cmd_rx: mpsc::Receiver<PublisherCommand>,
    /// Cloned into every spawned fetch task.
    fetch_tx: mpsc::UnboundedSender<FetchOutcome>,
    /// Settled fetches come back here.
    fetch_rx: mpsc::UnboundedReceiver<FetchOutcome>,
    /// Where state is published.
    state_tx: watch::Sender<SessionState>,
    store: Arc<S>,
    notifier: N,
    config: SessionConfig,
    /// Bumped on every identity-change notification. A fetch outcome
    /// with a stale generation is discarded.
    generation: u64,
    /// The actor's working copy of the published state.
    current: SessionState,
}

impl<S: ProfileStore, N: Notifier> PublisherActor<S, N> {
    async fn run(mut self) {
        tracing::debug!("session publisher started");

        loop {
            tokio::select! {
                cmd = self.cmd_rx.recv() => match cmd {
                    Some(PublisherCommand::Shutdown) | None => break,
                },
                event = self.events.recv(), if !self.events_closed => {
                    match event {
                        Some(identity) => self.on_identity_change(identity),
                        None => {
                            tracing::debug!("identity stream closed");
                            self.events_closed = true;
                        }
                    }
                }
                Some(outcome) = self.fetch_rx.recv() => {
                    self.on_fetch_settled(outcome);
                }
            }
        }

        tracing::debug!("session publisher stopped");
        // state_tx drops here — subscribers see the channel close, and
        // any late fetch outcome fails its send and is discarded.
    }

    /// Handles one identity-change notification.
    fn on_identity_change(&mut self, identity: Option<Identity>) {
        self.generation += 1;

        match identity {
            Some(identity) => {
                tracing::info!(
                    uid = %identity.uid,
                    "identity changed, resolving profile"
                );
                // Publish the identity right away; the previous profile
                // (if any) stays visible while the fetch is in flight.
                self.current.identity = Some(identity.clone());
                self.current.loading = true;
                self.publish();
                self.spawn_fetch(identity);
            }
            None => {
                tracing::info!("identity cleared, session signed out");
                self.current = SessionState::signed_out();
                self.publish();
            }
        }
    }

    /// Issues one profile fetch in its own task, tagged with the
    /// current generation.
    fn spawn_fetch(&self, identity: Identity) {
        let generation = self.generation;
        let store = Arc::clone(&self.store);
        let fetch_tx = self.fetch_tx.clone();

        tokio::spawn(async move {
            let result = store.fetch_profile(&identity.uid).await;
            // The publisher may be gone by the time the fetch settles;
            // a failed send just drops the outcome.
            let _ = fetch_tx.send(FetchOutcome {
                generation,
                identity,
                result,
            });
        });
    }

    /// Applies one settled fetch to the published state.
    fn on_fetch_settled(&mut self, outcome: FetchOutcome) {
        if outcome.generation != self.generation {
            tracing::debug!(
                uid = %outcome.identity.uid,
                "discarding stale profile fetch"
            );
            return;
        }

        match outcome.result {
            Ok(Some(profile)) => {
                tracing::info!(uid = %profile.uid, "profile loaded");
                self.current.set_profile(Some(profile));
            }
            Ok(None) => {
                tracing::info!(
                    uid = %outcome.identity.uid,
                    "no stored profile, synthesizing default"
                );
                let profile = PlayerProfile::synthesized(
                    &outcome.identity,
                    &self.config.fallback_display_name,
                );
                self.current.set_profile(Some(profile));
            }
            Err(e) => {
                tracing::warn!(
                    uid = %outcome.identity.uid,
                    error = %e,
                    "profile fetch failed"
                );
                self.notifier.notify(Notice::error(
                    FETCH_FAILED_TITLE,
                    FETCH_FAILED_BODY,
                ));
                // The previously published profile (if any) stays.
            }
        }

        self.current.loading = false;
        self.publish();
    }

    fn publish(&self) {
        self.state_tx.send_replace(self.current.clone());
    }
}

// =========================================================================
// Tests
// =========================================================================
