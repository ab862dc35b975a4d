//! Storage record shapes
//!
//! These mirror the JSON stored under the `players`, `users`, `Team` and
//! `Match` paths of the realtime database. Every field is optional on the wire;
//! counters default to zero.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Payload checks for records about to be written
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("player payload missing or username empty")]
    MissingUsername,
    #[error("match payload missing or tournament_id empty")]
    MissingTournamentId,
    #[error("team payload missing or name empty")]
    MissingTeamName,
}

/// A player as stored under `players/<id>`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerRecord {
    pub username: Option<String>,
    pub email: Option<String>,
    /// Average rating on a 0-100 style scale, e.g. `18.5`
    pub avg_rating: Option<f64>,
    pub matches_played: u64,
    pub wins: u64,
    pub losses: u64,
    pub kills: u64,
    pub deaths: u64,
    pub join_date: Option<String>,
    pub role: Option<String>,
    pub game: Option<String>,
    pub last_updated: Option<String>,
}

impl PlayerRecord {
    pub fn validate(&self) -> Result<(), RecordError> {
        match self.username.as_deref() {
            Some(name) if !name.is_empty() => Ok(()),
            _ => Err(RecordError::MissingUsername),
        }
    }
}

/// An account as stored under `users/<uid>`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    pub email: Option<String>,
    pub role: Option<String>,
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
}

/// A team as stored under `Team/<key>`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamRecord {
    pub name: Option<String>,
    /// Player identifiers on the roster
    pub members: Vec<String>,
}

impl TeamRecord {
    pub fn validate(&self) -> Result<(), RecordError> {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => Ok(()),
            _ => Err(RecordError::MissingTeamName),
        }
    }
}

/// A match as stored under `Match/<key>`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchRecord {
    pub tournament_id: Option<String>,
    /// Player or team identifiers that took part
    pub participants: Vec<String>,
    pub winner: Option<String>,
}

impl MatchRecord {
    pub fn validate(&self) -> Result<(), RecordError> {
        match self.tournament_id.as_deref() {
            Some(id) if !id.is_empty() => Ok(()),
            _ => Err(RecordError::MissingTournamentId),
        }
    }
}
