use super::totals::PlayerTotals;
use crate::models::WeightVector;

/// Map a player's cumulative totals to a single score under the current
/// weight vector.
///
/// Pure and linear in every component. No rounding is applied here;
/// presentation may round for display only.
pub fn score(totals: &PlayerTotals, weights: &WeightVector) -> f64 {
    totals.wins as f64 * weights.win
        + totals.losses as f64 * weights.loss
        + totals.goals as f64 * weights.goal
        + totals.assists as f64 * weights.assist
}
