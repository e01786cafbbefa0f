//! Typed records for the betting-pool data file.
//!
//! `data.json` is produced by an upstream collection script; this crate only
//! reads it. Everything here is immutable after deserialization and the file
//! is re-read whole on every build pass.

use serde::{Deserialize, Serialize};

/// One scoring event. The scorer side comes in two shapes depending on which
/// tracker produced the file: a single `player` (with an optional season
/// goals-to-date count), or a `scorers` list of `[name, emphasized]` pairs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub period: String,
    pub time: String,
    #[serde(flatten)]
    pub credit: GoalCredit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GoalCredit {
    Single {
        player: String,
        #[serde(rename = "goalsToDate", default, skip_serializing_if = "Option::is_none")]
        goals_to_date: Option<u32>,
    },
    Shared {
        scorers: Vec<(String, bool)>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: u64,
    /// Display names, rendered as `names[0] - names[1]`.
    pub names: [String; 2],
    /// Final score in the same order as `names`; absent for games in progress
    /// or not yet played.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scores: Option<[u32; 2]>,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

/// One calendar date with its games, chronological within the date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateEntry {
    pub date: String,
    /// Games-played counts per team, `[team, count]` pairs in display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub played: Option<Vec<(String, u32)>>,
    pub games: Vec<Game>,
}

// Aggregate standings rows. All tallies are computed upstream and displayed
// verbatim; this crate never recounts anything.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamWins {
    pub team: String,
    pub wins: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerPoints {
    pub player: String,
    pub points: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonTotals {
    pub person: String,
    pub wins: u32,
    pub points: u32,
    pub total: u32,
}

/// Object-shaped input used by the playoff-pool variant. The tracker variants
/// read a bare `Vec<DateEntry>` instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolData {
    pub games: Vec<DateEntry>,
    #[serde(default)]
    pub team_wins: Vec<TeamWins>,
    #[serde(default)]
    pub player_points: Vec<PlayerPoints>,
    #[serde(default)]
    pub people: Vec<PersonTotals>,
}
