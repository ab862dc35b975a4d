//! Rating updates after a match
//!
//! Computes the partial update written back to `players/<id>` when a new
//! rating comes in. The display rating used by the leaderboard is the stored
//! `avg_rating` times 100, so the incoming integer rating is divided back.

use crate::records::PlayerRecord;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatingError {
    #[error("player ID and new rating are required")]
    MissingPlayerId,
    #[error("player not found: {0}")]
    PlayerNotFound(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchResult {
    Win,
    Loss,
}

/// Body of a rating update request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingUpdate {
    pub player_id: String,
    /// New display rating, i.e. `avg_rating * 100`
    pub new_rating: i64,
    /// Anything other than `"win"` or `"loss"` counts as no result
    #[serde(default, deserialize_with = "lenient_result")]
    pub match_result: Option<MatchResult>,
}

/// Fields to merge into the stored player record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingPatch {
    pub avg_rating: f64,
    pub matches_played: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wins: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub losses: Option<u64>,
    pub last_updated: String,
}

impl RatingPatch {
    /// Writes the patch into `record`
    pub fn apply_to(&self, record: &mut PlayerRecord) {
        record.avg_rating = Some(self.avg_rating);
        record.matches_played = self.matches_played;
        if let Some(wins) = self.wins {
            record.wins = wins;
        }
        if let Some(losses) = self.losses {
            record.losses = losses;
        }
        record.last_updated = Some(self.last_updated.clone());
    }
}

/// Builds the patch for `update` against the currently stored record
///
/// # Errors
/// - [`RatingError::MissingPlayerId`] if the update names no player
/// - [`RatingError::PlayerNotFound`] if `current` is `None`
pub fn apply_rating_update(
    current: Option<&PlayerRecord>,
    update: &RatingUpdate,
    now: DateTime<Utc>,
) -> Result<RatingPatch, RatingError> {
    if update.player_id.is_empty() {
        return Err(RatingError::MissingPlayerId);
    }
    let record = current.ok_or_else(|| RatingError::PlayerNotFound(update.player_id.clone()))?;

    let patch = RatingPatch {
        avg_rating: update.new_rating as f64 / 100.0,
        matches_played: record.matches_played.saturating_add(1),
        wins: (update.match_result == Some(MatchResult::Win))
            .then(|| record.wins.saturating_add(1)),
        losses: (update.match_result == Some(MatchResult::Loss))
            .then(|| record.losses.saturating_add(1)),
        last_updated: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    };

    tracing::debug!(
        player_id = %update.player_id,
        new_rating = update.new_rating,
        matches_played = patch.matches_played,
        "computed rating patch"
    );
    Ok(patch)
}

fn lenient_result<'de, D>(deserializer: D) -> Result<Option<MatchResult>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(match raw.as_deref() {
        Some("win") => Some(MatchResult::Win),
        Some("loss") => Some(MatchResult::Loss),
        _ => None,
    })
}
