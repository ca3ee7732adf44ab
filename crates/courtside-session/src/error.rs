//! Error types for the session layer.

/// Errors that can occur while reading a profile from the external store.
///
/// This is the only error kind that crosses the store seam. The publisher
/// catches it at the fetch site and surfaces it to the user as a
/// [`Notice`](crate::Notice) — it never reaches consumers as an error,
/// and the published state is still finalized.
#[derive(Debug, thiserror::Error)]
pub enum ProfileFetchError {
    /// The store could not be reached (network down, timeout, backend
    /// outage).
    #[error("profile store unreachable: {0}")]
    Unavailable(String),

    /// The store answered but the document could not be decoded
    /// (missing required fields, wrong types, truncated payload).
    #[error("profile document malformed: {0}")]
    Decode(String),
}
