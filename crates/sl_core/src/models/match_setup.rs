//! Match composition: turn a raw side selection from the shell into a
//! fully-populated, immutable `MatchRecord`.
//!
//! All numeric input is normalized through one permissive rule instead of
//! being rejected; the only hard rejections are an empty side and a player
//! selected on both sides.

use chrono::Utc;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::match_record::{MatchRecord, RosterEntry, Side, StatLine};
use super::player::Player;
use crate::error::ComposeError;

/// Coerce any JSON value into a non-negative count.
///
/// Numbers are truncated and clamped at zero, numeric strings are parsed,
/// everything else falls back to zero. Every score and stat field entering
/// the composer goes through this one rule.
fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_count(&value))
}

fn coerce_count(value: &serde_json::Value) -> u32 {
    match value {
        serde_json::Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                u.min(u32::MAX as u64) as u32
            } else {
                // negative or fractional; `as` saturates at the type bounds
                n.as_f64().map(|f| f as u32).unwrap_or(0)
            }
        }
        serde_json::Value::String(s) => {
            s.trim().parse::<f64>().map(|f| f as u32).unwrap_or(0)
        }
        _ => 0,
    }
}

/// Raw per-player stat edit as it arrives from the shell.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct StatInput {
    #[serde(default, deserialize_with = "lenient_count")]
    pub goals: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub assists: u32,
}

/// A proposed match: two side selections, raw scores, optional stat edits,
/// optional notes. Deserializes straight from the shell's form payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSetup {
    #[serde(default)]
    pub side_a: Vec<String>,
    #[serde(default)]
    pub side_b: Vec<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub score_a: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub score_b: u32,
    #[serde(default)]
    pub stats: BTreeMap<String, StatInput>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Fields a post-creation edit may change. Sides, per-player stats, and the
/// roster snapshot stay fixed once a match is recorded.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchUpdate {
    #[serde(default, deserialize_with = "lenient_count")]
    pub score_a: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub score_b: u32,
    #[serde(default)]
    pub notes: Option<String>,
}

impl MatchSetup {
    /// Validate the selection and build the match record.
    ///
    /// The entity store is not touched; inserting the returned record is the
    /// caller's job. The roster snapshot is captured here from the live
    /// `roster` entities, so this is the only place snapshot correctness
    /// lives.
    ///
    /// Selected ids unknown to the roster are dropped, duplicates within a
    /// side collapse to one entry; a side left empty after that is rejected.
    pub fn compose(&self, roster: &[Player]) -> Result<MatchRecord, ComposeError> {
        let side_a = normalize_side(&self.side_a, roster);
        let side_b = normalize_side(&self.side_b, roster);

        let overlap: Vec<String> =
            side_a.iter().filter(|id| side_b.contains(id)).cloned().collect();
        if !overlap.is_empty() {
            return Err(ComposeError::OverlappingSides { ids: overlap });
        }
        if side_a.is_empty() {
            return Err(ComposeError::EmptySide(Side::A));
        }
        if side_b.is_empty() {
            return Err(ComposeError::EmptySide(Side::B));
        }

        let mut per_player_stats = BTreeMap::new();
        let mut roster_snapshot = BTreeMap::new();
        for id in side_a.iter().chain(side_b.iter()) {
            let line = self
                .stats
                .get(id)
                .map(|s| StatLine { goals: s.goals, assists: s.assists })
                .unwrap_or_default();
            per_player_stats.insert(id.clone(), line);

            // normalize_side only keeps ids that resolve on the roster
            if let Some(player) = roster.iter().find(|p| &p.id == id) {
                roster_snapshot.insert(
                    id.clone(),
                    RosterEntry {
                        name: player.name.clone(),
                        position: player.position,
                        avatar_ref: player.avatar_ref.clone(),
                    },
                );
            }
        }

        Ok(MatchRecord {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            side_a,
            side_b,
            score_a: self.score_a,
            score_b: self.score_b,
            notes: self.notes.clone().filter(|n| !n.trim().is_empty()),
            per_player_stats,
            roster_snapshot,
        })
    }
}

/// Dedupe a selection and drop ids that are not on the current roster.
fn normalize_side(selection: &[String], roster: &[Player]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for id in selection {
        if out.iter().any(|seen| seen == id) {
            continue;
        }
        if roster.iter().any(|p| &p.id == id) {
            out.push(id.clone());
        }
    }
    out
}
