//! Leaderboard ranking
//!
//! Ranks players by rating with a [`PriorityQueue`]. The heap is min-ordered,
//! so each player goes in under the key `(-rating, id)`: the highest rating
//! comes out first and the id makes ties deterministic. The rating is negated
//! back when the top entries are extracted. The extracted page is then
//! stable-sorted by the requested [`SortBy`] field, descending.
//!
//! # Example
//!
//! ```rust
//! use esports_core::leaderboard::{build_leaderboard, LeaderboardQuery, SortBy};
//! use esports_core::records::PlayerRecord;
//!
//! let players = vec![
//!     ("p1".to_string(), PlayerRecord { avg_rating: Some(15.0), ..Default::default() }),
//!     ("p2".to_string(), PlayerRecord { avg_rating: Some(19.5), ..Default::default() }),
//!     ("p3".to_string(), PlayerRecord::default()),
//! ];
//!
//! let board = build_leaderboard(players, &LeaderboardQuery::default());
//! assert_eq!(board.total_players, 2);
//! assert_eq!(board.leaderboard[0].id, "p2");
//! assert_eq!(board.leaderboard[0].rating, 1950);
//! ```

use crate::binary_heap::PriorityQueue;
use crate::records::PlayerRecord;
use crate::traits::Heap;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Number of entries returned when the caller does not ask for a limit
pub const DEFAULT_LIMIT: usize = 10;

/// Field the extracted page is ordered by, always descending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SortBy {
    #[default]
    Rating,
    Matches,
    Wins,
    Kills,
}

impl SortBy {
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Rating => "rating",
            SortBy::Matches => "matches",
            SortBy::Wins => "wins",
            SortBy::Kills => "kills",
        }
    }

    /// Parses a query value. Unknown values fall back to [`SortBy::Rating`].
    pub fn parse(value: &str) -> Self {
        match value {
            "rating" => SortBy::Rating,
            "matches" => SortBy::Matches,
            "wins" => SortBy::Wins,
            "kills" => SortBy::Kills,
            other => {
                tracing::warn!(sort_by = other, "unknown sort field, using rating");
                SortBy::Rating
            }
        }
    }

    fn key(self, player: &RankedPlayer) -> i64 {
        match self {
            SortBy::Rating => player.rating,
            SortBy::Matches => saturating_i64(player.matches_played),
            SortBy::Wins => saturating_i64(player.wins),
            SortBy::Kills => saturating_i64(player.kills),
        }
    }
}

impl From<String> for SortBy {
    fn from(value: String) -> Self {
        SortBy::parse(&value)
    }
}

/// Query parameters accepted by the leaderboard endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LeaderboardQuery {
    /// Maximum number of entries to return
    pub limit: usize,
    pub sort_by: SortBy,
}

impl Default for LeaderboardQuery {
    fn default() -> Self {
        LeaderboardQuery {
            limit: DEFAULT_LIMIT,
            sort_by: SortBy::default(),
        }
    }
}

/// One leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPlayer {
    pub id: String,
    pub username: String,
    pub email: String,
    /// `avg_rating * 100`, rounded
    pub rating: i64,
    pub matches_played: u64,
    pub wins: u64,
    pub losses: u64,
    pub kills: u64,
    pub deaths: u64,
    pub join_date: String,
    pub role: String,
    pub game: String,
}

impl RankedPlayer {
    fn from_record(id: String, rating: i64, record: &PlayerRecord) -> Self {
        RankedPlayer {
            id,
            username: record
                .username
                .clone()
                .unwrap_or_else(|| "Unknown Player".to_string()),
            email: record.email.clone().unwrap_or_default(),
            rating,
            matches_played: record.matches_played,
            wins: record.wins,
            losses: record.losses,
            kills: record.kills,
            deaths: record.deaths,
            join_date: record.join_date.clone().unwrap_or_default(),
            role: record.role.clone().unwrap_or_else(|| "player".to_string()),
            game: record.game.clone().unwrap_or_else(|| "Dota 2".to_string()),
        }
    }
}

/// A ranked page of players
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    pub leaderboard: Vec<RankedPlayer>,
    /// Number of players that had a rating, before the limit was applied
    pub total_players: usize,
    pub sort_by: SortBy,
    pub limit: usize,
}

/// Integer display rating for a record, or `None` if the player is unrated
///
/// A missing or zero `avg_rating` counts as unrated. Out-of-range ratings
/// saturate to `-i64::MAX..=i64::MAX` so the value can always be negated.
pub fn display_rating(record: &PlayerRecord) -> Option<i64> {
    match record.avg_rating {
        Some(r) if r != 0.0 && r.is_finite() => {
            Some(((r * 100.0).round() as i64).max(-i64::MAX))
        }
        _ => None,
    }
}

/// Ranks `players` and returns the top `query.limit` entries
///
/// `players` yields `(player_id, record)` pairs, for example the entries of a
/// map fetched from storage. Unrated players are skipped and do not count
/// towards `total_players`.
pub fn build_leaderboard<I, S, R>(players: I, query: &LeaderboardQuery) -> Leaderboard
where
    I: IntoIterator<Item = (S, R)>,
    S: AsRef<str>,
    R: Borrow<PlayerRecord>,
{
    let mut heap: PriorityQueue<R, (i64, String)> = PriorityQueue::new();
    for (id, record) in players {
        if let Some(rating) = display_rating(record.borrow()) {
            heap.insert((rating.saturating_neg(), id.as_ref().to_owned()), record);
        }
    }

    let total_players = heap.len();
    let take = total_players.min(query.limit);
    let mut leaderboard = Vec::with_capacity(take);
    while leaderboard.len() < take {
        let Some(((negated, id), record)) = heap.extract_min() else {
            break;
        };
        let rating = negated.saturating_neg();
        leaderboard.push(RankedPlayer::from_record(id, rating, record.borrow()));
    }

    // Stable, so equal fields keep their rating order
    let sort_by = query.sort_by;
    leaderboard.sort_by(|a, b| sort_by.key(b).cmp(&sort_by.key(a)));

    tracing::debug!(
        total_players,
        returned = leaderboard.len(),
        sort_by = sort_by.as_str(),
        "built leaderboard"
    );

    Leaderboard {
        leaderboard,
        total_players,
        sort_by,
        limit: query.limit,
    }
}

fn saturating_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
