//! Profile records: the application's own view of a player.
//!
//! A profile lives in the external document store, keyed by the player's
//! identity id. Documents are camelCase JSON; the serde attributes here
//! pin the exact shape so a store document and a `PlayerProfile` always
//! agree.
//!
//! When a player signs in for the first time there is no stored profile
//! yet. [`PlayerProfile::synthesized`] builds an in-memory default from
//! the identity — it is published to the app but never written back to
//! the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Identity, UserId};

/// Display name used when an identity carries none.
pub const DEFAULT_DISPLAY_NAME: &str = "Usuário";

/// A player's lifetime statistics block.
///
/// All counters default to zero, and every field is optional on decode —
/// a store document missing part of the block (older app versions wrote
/// partial stats) still decodes, with the gaps zeroed.
#[derive(
    Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerStats {
    /// Matches played.
    pub matches: u32,
    /// Matches won.
    pub wins: u32,
    /// Matches lost.
    pub losses: u32,
    /// Fraction of matches won, 0.0–1.0.
    pub win_rate: f64,
    /// Tournaments entered.
    pub tournaments: u32,
    /// Tournament podium finishes.
    pub podiums: u32,
    /// Aces served.
    pub aces: u32,
    /// Current consecutive-win streak.
    pub winning_streak: u32,
    /// Result-stability score computed by the stats pipeline.
    pub consistency_score: f64,
}

/// The application-level record describing a player.
///
/// Keyed by the identity id (`uid`). Stored as a camelCase JSON document:
///
/// ```json
/// {
///   "uid": "u1",
///   "email": "ana@example.com",
///   "name": "Ana",
///   "createdAt": "2026-01-15T12:00:00Z",
///   "isAdmin": false,
///   "stats": { "matches": 10, "wins": 7, ... }
/// }
/// ```
///
/// `is_admin` and `stats` are defaulted on decode; `uid`, `email`,
/// `name`, and `created_at` are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    /// The identity id this profile belongs to.
    pub uid: UserId,

    /// Contact email. Empty when the identity provider had none.
    pub email: String,

    /// Display name shown throughout the app.
    pub name: String,

    /// When the profile record was created.
    pub created_at: DateTime<Utc>,

    /// Whether this player has admin privileges.
    #[serde(default)]
    pub is_admin: bool,

    /// Lifetime statistics.
    #[serde(default)]
    pub stats: PlayerStats,
}

impl PlayerProfile {
    /// Builds a default in-memory profile for an identity with no stored
    /// record.
    ///
    /// Email falls back to empty, the name falls back to the given label
    /// (see [`DEFAULT_DISPLAY_NAME`]), the admin flag is false, and all
    /// stats counters are zero. The synthesized profile is never
    /// persisted — a later session synthesizes it again until something
    /// else writes a real record.
    pub fn synthesized(identity: &Identity, fallback_name: &str) -> Self {
        Self {
            uid: identity.uid.clone(),
            email: identity.email.clone().unwrap_or_default(),
            name: identity
                .display_name
                .clone()
                .unwrap_or_else(|| fallback_name.to_string()),
            created_at: Utc::now(),
            is_admin: false,
            stats: PlayerStats::default(),
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    //! The store document shape is pinned here: field names, camelCase
    //! renames, and decode defaults. A mismatch means stored profiles
    //! stop round-tripping against the document store.

    use chrono::TimeZone;

    use super::*;

    fn sample_profile() -> PlayerProfile {
        PlayerProfile {
            uid: UserId::new("u1"),
            email: "ana@example.com".into(),
            name: "Ana".into(),
            created_at: Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap(),
            is_admin: true,
            stats: PlayerStats {
                matches: 10,
                wins: 7,
                losses: 3,
                win_rate: 0.7,
                tournaments: 2,
                podiums: 1,
                aces: 12,
                winning_streak: 4,
                consistency_score: 0.82,
            },
        }
    }

    // =====================================================================
    // PlayerStats
    // =====================================================================

    #[test]
    fn test_stats_default_is_all_zero() {
        let stats = PlayerStats::default();
        assert_eq!(stats.matches, 0);
        assert_eq!(stats.wins, 0);
        assert_eq!(stats.losses, 0);
        assert_eq!(stats.win_rate, 0.0);
        assert_eq!(stats.tournaments, 0);
        assert_eq!(stats.podiums, 0);
        assert_eq!(stats.aces, 0);
        assert_eq!(stats.winning_streak, 0);
        assert_eq!(stats.consistency_score, 0.0);
    }

    #[test]
    fn test_stats_serialize_as_camel_case() {
        let json: serde_json::Value =
            serde_json::to_value(sample_profile().stats).unwrap();

        assert_eq!(json["winRate"], 0.7);
        assert_eq!(json["winningStreak"], 4);
        assert_eq!(json["consistencyScore"], 0.82);
        assert_eq!(json["matches"], 10);
    }

    #[test]
    fn test_stats_decode_missing_fields_default_to_zero() {
        // Partial stats blocks from older documents still decode.
        let stats: PlayerStats =
            serde_json::from_str(r#"{ "matches": 5, "wins": 2 }"#).unwrap();

        assert_eq!(stats.matches, 5);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.losses, 0);
        assert_eq!(stats.win_rate, 0.0);
    }

    // =====================================================================
    // PlayerProfile document shape
    // =====================================================================

    #[test]
    fn test_profile_serializes_as_camel_case_document() {
        let json: serde_json::Value =
            serde_json::to_value(sample_profile()).unwrap();

        assert_eq!(json["uid"], "u1");
        assert_eq!(json["email"], "ana@example.com");
        assert_eq!(json["name"], "Ana");
        assert_eq!(json["createdAt"], "2026-01-15T12:00:00Z");
        assert_eq!(json["isAdmin"], true);
        assert!(json["stats"].is_object());
    }

    #[test]
    fn test_profile_round_trips_through_document_json() {
        let profile = sample_profile();
        let bytes = serde_json::to_vec(&profile).unwrap();
        let decoded: PlayerProfile =
            serde_json::from_slice(&bytes).unwrap();
        assert_eq!(profile, decoded);
    }

    #[test]
    fn test_profile_decode_defaults_admin_and_stats() {
        // Minimal document: no isAdmin, no stats block.
        let doc = r#"{
            "uid": "u2",
            "email": "",
            "name": "Bruno",
            "createdAt": "2025-06-01T00:00:00Z"
        }"#;
        let profile: PlayerProfile = serde_json::from_str(doc).unwrap();

        assert!(!profile.is_admin);
        assert_eq!(profile.stats, PlayerStats::default());
    }

    #[test]
    fn test_profile_decode_missing_uid_is_error() {
        let doc = r#"{ "email": "", "name": "x",
                       "createdAt": "2025-06-01T00:00:00Z" }"#;
        let result: Result<PlayerProfile, _> = serde_json::from_str(doc);
        assert!(result.is_err());
    }

    // =====================================================================
    // Synthesis
    // =====================================================================

    #[test]
    fn test_synthesized_uses_identity_fields() {
        let identity = Identity::new("u1")
            .with_email("a@x.com")
            .with_display_name("Ana");

        let profile =
            PlayerProfile::synthesized(&identity, DEFAULT_DISPLAY_NAME);

        assert_eq!(profile.uid, UserId::new("u1"));
        assert_eq!(profile.email, "a@x.com");
        assert_eq!(profile.name, "Ana");
        assert!(!profile.is_admin);
        assert_eq!(profile.stats, PlayerStats::default());
    }

    #[test]
    fn test_synthesized_falls_back_to_default_label_without_name() {
        let identity = Identity::new("u1").with_email("a@x.com");

        let profile =
            PlayerProfile::synthesized(&identity, DEFAULT_DISPLAY_NAME);

        assert_eq!(profile.name, "Usuário");
    }

    #[test]
    fn test_synthesized_without_email_is_empty_string() {
        let identity = Identity::new("u1");

        let profile =
            PlayerProfile::synthesized(&identity, DEFAULT_DISPLAY_NAME);

        assert_eq!(profile.email, "");
    }
}
