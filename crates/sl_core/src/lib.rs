//! # sl_core - Roster, Match, and Ranking Core
//!
//! This library tracks an informal football group's roster and recorded
//! matches and derives a ranked leaderboard from them.
//!
//! ## Features
//! - Deterministic ranking (pure recomputation from the match collection)
//! - Configurable scoring weights, applied instantly to every player
//! - Permissive input normalization at the match-composition boundary
//! - Roster snapshots per match, so history survives renames and removals
//! - Lossless JSON export/import of the whole group state

pub mod error;
pub mod models;
pub mod save;
pub mod state;
pub mod stats;

// Re-export the core API surface
pub use error::{ComposeError, DocumentError};
pub use models::{
    MatchRecord, MatchSetup, MatchUpdate, Outcome, Player, Position, RosterEntry, Side, StatLine,
    WeightVector,
};
pub use save::{parse_document, write_document, ExportDocument};
pub use state::sync::{
    Collection, CollectionSnapshot, MemoryBackend, Record, SnapshotListener, StoreBackend,
};
pub use state::{get_state, get_state_mut, reset_state, set_state, GroupState, GROUP_STATE};
pub use stats::{aggregate, rank, score, Medal, PlayerTotals, RankedPlayer};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
