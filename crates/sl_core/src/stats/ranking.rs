use serde::Serialize;

use super::scoring;
use super::totals::{aggregate, PlayerTotals};
use crate::models::{MatchRecord, Player, WeightVector};

/// Display tier for the top three leaderboard rows. Purely cosmetic; it
/// carries no ranking semantics.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    fn for_position(position: usize) -> Option<Medal> {
        match position {
            1 => Some(Medal::Gold),
            2 => Some(Medal::Silver),
            3 => Some(Medal::Bronze),
            _ => None,
        }
    }
}

/// One computed leaderboard row.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPlayer {
    /// 1-based and contiguous even through ties.
    pub position: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medal: Option<Medal>,
    pub player: Player,
    pub totals: PlayerTotals,
    pub score: f64,
}

/// Compute the full leaderboard: aggregate, score, sort descending.
///
/// The sort is stable, so players with equal scores keep the relative order
/// they have in `players`; no secondary key is applied.
pub fn rank(
    players: &[Player],
    matches: &[MatchRecord],
    weights: &WeightVector,
) -> Vec<RankedPlayer> {
    let mut totals = aggregate(players, matches);

    let mut rows: Vec<RankedPlayer> = players
        .iter()
        .map(|player| {
            let totals = totals.remove(&player.id).unwrap_or_else(|| PlayerTotals {
                player_id: player.id.clone(),
                ..PlayerTotals::default()
            });
            let score = scoring::score(&totals, weights);
            RankedPlayer { position: 0, medal: None, player: player.clone(), totals, score }
        })
        .collect();

    rows.sort_by(|a, b| b.score.total_cmp(&a.score));

    for (index, row) in rows.iter_mut().enumerate() {
        row.position = index + 1;
        row.medal = Medal::for_position(index + 1);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MatchSetup, Position, StatInput};

    fn roster(ids: &[&str]) -> Vec<Player> {
        ids.iter()
            .map(|id| Player {
                id: id.to_string(),
                name: id.to_uppercase(),
                position: Position::MF,
                avatar_ref: None,
            })
            .collect()
    }

    /// The fixture from the group's spreadsheet era: P1+P2 beat P3 3-1,
    /// P1 scored twice, P2 one goal one assist, P3 got one back.
    fn fixture() -> (Vec<Player>, Vec<MatchRecord>) {
        let players = roster(&["p1", "p2", "p3"]);
        let mut setup = MatchSetup {
            side_a: vec!["p1".into(), "p2".into()],
            side_b: vec!["p3".into()],
            score_a: 3,
            score_b: 1,
            ..MatchSetup::default()
        };
        setup.stats.insert("p1".into(), StatInput { goals: 2, assists: 0 });
        setup.stats.insert("p2".into(), StatInput { goals: 1, assists: 1 });
        setup.stats.insert("p3".into(), StatInput { goals: 1, assists: 0 });
        let record = setup.compose(&players).unwrap();
        (players, vec![record])
    }

    #[test]
    fn leaderboard_orders_by_score_descending() {
        let (players, matches) = fixture();
        let board = rank(&players, &matches, &WeightVector::default());

        let ids: Vec<&str> = board.iter().map(|r| r.player.id.as_str()).collect();
        assert_eq!(ids, ["p1", "p2", "p3"]);
        assert_eq!(board[0].score, 7.0);
        assert_eq!(board[1].score, 6.5);
        assert_eq!(board[2].score, 1.0);
    }

    #[test]
    fn positions_are_one_based_and_contiguous_with_medals_on_top_three() {
        let (players, matches) = fixture();
        let board = rank(&players, &matches, &WeightVector::default());

        assert_eq!(board[0].position, 1);
        assert_eq!(board[0].medal, Some(Medal::Gold));
        assert_eq!(board[1].position, 2);
        assert_eq!(board[1].medal, Some(Medal::Silver));
        assert_eq!(board[2].position, 3);
        assert_eq!(board[2].medal, Some(Medal::Bronze));
    }

    #[test]
    fn fourth_place_gets_no_medal() {
        let players = roster(&["p1", "p2", "p3", "p4"]);
        let board = rank(&players, &[], &WeightVector::default());
        assert_eq!(board[3].position, 4);
        assert_eq!(board[3].medal, None);
    }

    #[test]
    fn ties_keep_roster_order_with_consecutive_positions() {
        // nobody has played: everyone scores 0.0
        let players = roster(&["zed", "ana", "mia"]);
        let board = rank(&players, &[], &WeightVector::default());

        let ids: Vec<&str> = board.iter().map(|r| r.player.id.as_str()).collect();
        assert_eq!(ids, ["zed", "ana", "mia"]);
        let positions: Vec<usize> = board.iter().map(|r| r.position).collect();
        assert_eq!(positions, [1, 2, 3]);
    }

    #[test]
    fn ranking_is_deterministic_across_calls() {
        let (players, matches) = fixture();
        let weights = WeightVector::default();

        let first = rank(&players, &matches, &weights);
        let second = rank(&players, &matches, &weights);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.player.id, b.player.id);
            assert_eq!(a.position, b.position);
            assert_eq!(a.score, b.score);
            assert_eq!(a.totals, b.totals);
        }
    }

    #[test]
    fn deleting_a_player_drops_them_from_the_board_without_touching_others() {
        let (players, matches) = fixture();
        let remaining: Vec<Player> =
            players.into_iter().filter(|p| p.id != "p3").collect();

        let board = rank(&remaining, &matches, &WeightVector::default());

        let ids: Vec<&str> = board.iter().map(|r| r.player.id.as_str()).collect();
        assert_eq!(ids, ["p1", "p2"]);
        assert_eq!(board[0].score, 7.0);
        assert_eq!(board[1].score, 6.5);
    }

    #[test]
    fn changing_a_weight_rescores_everyone_at_once() {
        let (players, matches) = fixture();
        let heavy_goals = WeightVector { goal: 10.0, ..WeightVector::default() };
        let board = rank(&players, &matches, &heavy_goals);

        // p1: 3 + 20, p2: 3 + 10 + 1.5, p3: -1 + 10
        assert_eq!(board[0].score, 23.0);
        assert_eq!(board[1].score, 14.5);
        assert_eq!(board[2].score, 9.0);
    }
}
