//! Identity-change subscription hook.
//!
//! Courtside doesn't talk to an identity provider itself — that's your
//! auth SDK's job (Firebase, Auth0, Supabase, a custom JWT layer, ...).
//! Instead it defines the [`IdentitySource`] trait: one method that hands
//! back a stream of sign-in/sign-out transitions. You implement it on top
//! of whatever change-listener your provider exposes, and the publisher
//! consumes the stream.

use courtside_profile::Identity;
use tokio::sync::mpsc;

/// The stream of identity-change notifications a source hands out.
///
/// Each item is the new current identity: `Some` after a sign-in,
/// `None` after a sign-out. Dropping the receiver is the unsubscribe.
pub type IdentityEvents = mpsc::UnboundedReceiver<Option<Identity>>;

/// Produces the identity-change stream the publisher subscribes to.
///
/// # Contract
///
/// A source must emit the *current* identity immediately when
/// [`subscribe`](Self::subscribe) is called (sign-in state is knowable
/// at subscription time), then emit again on every subsequent
/// transition. A source that stays silent until the first transition
/// leaves the publisher in its loading state indefinitely.
///
/// # Example
///
/// ```rust
/// use courtside_profile::Identity;
/// use courtside_session::{IdentityEvents, IdentitySource};
/// use tokio::sync::mpsc;
///
/// /// Always reports the same signed-in player. Handy in development.
/// struct FixedIdentity(Identity);
///
/// impl IdentitySource for FixedIdentity {
///     fn subscribe(&self) -> IdentityEvents {
///         let (tx, rx) = mpsc::unbounded_channel();
///         let _ = tx.send(Some(self.0.clone()));
///         rx
///     }
/// }
/// ```
pub trait IdentitySource: Send + Sync + 'static {
    /// Opens a subscription to identity changes.
    ///
    /// The returned stream yields the current identity immediately,
    /// then every sign-in/sign-out transition. The stream ends when the
    /// provider side closes it; the publisher keeps serving its last
    /// published state after that.
    fn subscribe(&self) -> IdentityEvents;
}
