//! Scripted sign-in demo.
//!
//! Drives the session publisher with a fake identity feed: Ana (who has
//! a stored profile) signs in, signs out, then Bruno (who has none)
//! signs in and gets a synthesized default profile. Every published
//! state transition is logged.
//!
//! Run with `cargo run -p signin-demo`; set `RUST_LOG=debug` to also see
//! the publisher's internal transitions.

use std::time::Duration;

use courtside::prelude::*;
use tokio::sync::mpsc;
use tracing::info;

// ---------------------------------------------------------------------------
// Scripted identity feed
// ---------------------------------------------------------------------------

/// Identity source that replays a fixed script with a delay between
/// steps, standing in for a real auth SDK's change listener.
struct ScriptedFeed {
    script: Vec<Option<Identity>>,
    step: Duration,
}

impl IdentitySource for ScriptedFeed {
    fn subscribe(&self) -> IdentityEvents {
        let (tx, rx) = mpsc::unbounded_channel();
        let script = self.script.clone();
        let step = self.step;
        tokio::spawn(async move {
            for event in script {
                if tx.send(event).is_err() {
                    break;
                }
                tokio::time::sleep(step).await;
            }
        });
        rx
    }
}

// ---------------------------------------------------------------------------
// Demo
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let ana = Identity::new("ana-uid")
        .with_email("ana@example.com")
        .with_display_name("Ana");
    let bruno = Identity::new("bruno-uid").with_email("bruno@example.com");

    // Ana has a stored profile with some history; Bruno has none and
    // will get a synthesized default.
    let mut ana_profile =
        PlayerProfile::synthesized(&ana, DEFAULT_DISPLAY_NAME);
    ana_profile.is_admin = true;
    ana_profile.stats.matches = 42;
    ana_profile.stats.wins = 30;
    ana_profile.stats.losses = 12;
    ana_profile.stats.win_rate = 30.0 / 42.0;
    ana_profile.stats.aces = 7;

    let store = MemoryProfileStore::new().with_profile(ana_profile);
    let feed = ScriptedFeed {
        script: vec![Some(ana), None, Some(bruno)],
        step: Duration::from_millis(300),
    };

    let handle = SessionBuilder::new().spawn(&feed, store);

    let mut session = handle.subscribe();
    loop {
        if session.changed().await.is_err() {
            break;
        }
        let state = session.borrow().clone();
        describe(&state);

        // The script ends signed in as Bruno; stop once that settles.
        let done = !state.loading
            && state
                .identity
                .as_ref()
                .is_some_and(|i| i.uid.as_str() == "bruno-uid");
        if done {
            break;
        }
    }

    handle.shutdown().await;
    info!("demo finished");
}

fn describe(state: &SessionState) {
    if state.loading {
        match &state.identity {
            Some(identity) => {
                info!(uid = %identity.uid, "resolving profile");
            }
            None => info!("starting up"),
        }
    } else if let Some(profile) = &state.profile {
        info!(
            uid = %profile.uid,
            name = %profile.name,
            matches = profile.stats.matches,
            aces = profile.stats.aces,
            is_admin = state.is_admin,
            "session ready"
        );
    } else if state.is_signed_in() {
        info!("signed in, profile unavailable");
    } else {
        info!("signed out");
    }
}

// =========================================================================
// Tests
// =========================================================================
