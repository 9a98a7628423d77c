use super::player::Position;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One of the two ad-hoc sides of a match.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Side::A => f.write_str("A"),
            Side::B => f.write_str("B"),
        }
    }
}

/// Per-player counters inside a single match.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatLine {
    pub goals: u32,
    pub assists: u32,
}

/// Player display data captured when the match was recorded.
///
/// Historical views read from this, never from the live roster, so renaming
/// or removing a player cannot change how past matches render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub name: String,
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_ref: Option<String>,
}

/// A recorded match between two ad-hoc sides.
///
/// Side membership, per-player stats, and the roster snapshot are fixed at
/// creation; only the scores and notes may change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub side_a: Vec<String>,
    pub side_b: Vec<String>,
    pub score_a: u32,
    pub score_b: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub per_player_stats: BTreeMap<String, StatLine>,
    #[serde(default)]
    pub roster_snapshot: BTreeMap<String, RosterEntry>,
}

/// Result of comparing the two side scores. Equal scores are a draw; there
/// is no extra-time or shootout concept in pickup play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    SideA,
    SideB,
    Draw,
}

impl MatchRecord {
    pub fn outcome(&self) -> Outcome {
        if self.score_a > self.score_b {
            Outcome::SideA
        } else if self.score_b > self.score_a {
            Outcome::SideB
        } else {
            Outcome::Draw
        }
    }

    pub fn side(&self, side: Side) -> &[String] {
        match side {
            Side::A => &self.side_a,
            Side::B => &self.side_b,
        }
    }

    /// Everyone listed on either side.
    pub fn participants(&self) -> impl Iterator<Item = &String> {
        self.side_a.iter().chain(self.side_b.iter())
    }

    /// Stat line for a participant; zeros if it was never edited.
    pub fn stat_line(&self, player_id: &str) -> StatLine {
        self.per_player_stats.get(player_id).copied().unwrap_or_default()
    }
}
