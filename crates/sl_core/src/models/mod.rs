pub mod match_record;
pub mod match_setup;
pub mod player;
pub mod weights;

pub use match_record::{MatchRecord, Outcome, RosterEntry, Side, StatLine};
pub use match_setup::{MatchSetup, MatchUpdate, StatInput};
pub use player::{Player, Position};
pub use weights::WeightVector;
