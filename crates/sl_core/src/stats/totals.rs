use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{MatchRecord, Outcome, Player};

/// Cumulative counters for one player, derived by folding every recorded
/// match.
///
/// Never persisted and never updated incrementally: each read recomputes
/// from the full match collection, so the numbers can never drift from the
/// source records.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerTotals {
    pub player_id: String,
    pub appearances: u32,
    pub wins: u32,
    pub losses: u32,
    pub goals: u32,
    pub assists: u32,
}

impl PlayerTotals {
    fn new(player_id: &str) -> Self {
        Self { player_id: player_id.to_string(), ..Self::default() }
    }
}

/// Fold the match collection into per-player totals.
///
/// Every roster player starts at zero. A draw increments neither wins nor
/// losses; appearances increment for every listed side member regardless of
/// outcome. Ids referenced by a match but absent from the current roster are
/// skipped: historical matches survive player deletion, at the cost of
/// undercounting.
pub fn aggregate(players: &[Player], matches: &[MatchRecord]) -> BTreeMap<String, PlayerTotals> {
    let mut totals: BTreeMap<String, PlayerTotals> =
        players.iter().map(|p| (p.id.clone(), PlayerTotals::new(&p.id))).collect();

    for record in matches {
        let outcome = record.outcome();
        for (members, winning_outcome) in
            [(&record.side_a, Outcome::SideA), (&record.side_b, Outcome::SideB)]
        {
            for id in members {
                let Some(entry) = totals.get_mut(id) else {
                    continue; // no longer on the roster
                };
                entry.appearances += 1;
                if outcome == winning_outcome {
                    entry.wins += 1;
                } else if outcome != Outcome::Draw {
                    entry.losses += 1;
                }
                let line = record.stat_line(id);
                entry.goals += line.goals;
                entry.assists += line.assists;
            }
        }
    }

    totals
}
