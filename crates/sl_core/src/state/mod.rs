//! Group State Manager
//!
//! This module provides a thread-safe global state manager for the group's
//! runtime state. `GroupState` holds the roster, the recorded matches, and
//! the scoring weights, and can be converted to/from `ExportDocument` for
//! persistence.
//!
//! Mutations are applied synchronously by a single logical owner; reads
//! (history, ranking) are pure and recompute from scratch on every call.

use chrono::Utc;
use once_cell::sync::Lazy;
use std::sync::{Arc, RwLock};

use crate::models::{MatchRecord, MatchUpdate, Player, Position, WeightVector};
use crate::save::ExportDocument;
use crate::stats::{rank, RankedPlayer};

pub mod sync;

/// Global group state singleton
pub static GROUP_STATE: Lazy<Arc<RwLock<GroupState>>> =
    Lazy::new(|| Arc::new(RwLock::new(GroupState::default())));

/// Runtime group state: the single source of truth every derived view reads.
#[derive(Debug, Clone, Default)]
pub struct GroupState {
    /// Current roster
    pub players: Vec<Player>,

    /// Recorded matches, in insertion order
    pub matches: Vec<MatchRecord>,

    /// Scoring weight vector
    pub weights: WeightVector,
}

impl GroupState {
    /// Create a new empty group state
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Player Management
    // ========================

    /// Add a player to the roster
    pub fn add_player(&mut self, player: Player) {
        log::info!("Added player {} ({})", player.name, player.id);
        self.players.push(player);
    }

    /// Remove a player by ID. Recorded matches are untouched; the player's
    /// contribution simply stops appearing in aggregations.
    pub fn remove_player(&mut self, player_id: &str) -> Option<Player> {
        if let Some(idx) = self.players.iter().position(|p| p.id == player_id) {
            let player = self.players.remove(idx);
            log::info!("Removed player {} ({})", player.name, player.id);
            Some(player)
        } else {
            None
        }
    }

    /// Get a player by ID
    pub fn get_player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    /// Get a mutable reference to a player by ID
    pub fn get_player_mut(&mut self, player_id: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == player_id)
    }

    /// Update name/position/avatar for an existing player. The id never
    /// changes.
    pub fn edit_player(
        &mut self,
        player_id: &str,
        name: impl Into<String>,
        position: Position,
        avatar_ref: Option<String>,
    ) -> bool {
        match self.get_player_mut(player_id) {
            Some(player) => {
                player.name = name.into();
                player.position = position;
                player.avatar_ref = avatar_ref;
                true
            }
            None => false,
        }
    }

    // ========================
    // Match Recording
    // ========================

    /// Record a composed match
    pub fn record_match(&mut self, record: MatchRecord) {
        log::info!(
            "Recorded match {} ({} vs {}, {}-{})",
            record.id,
            record.side_a.len(),
            record.side_b.len(),
            record.score_a,
            record.score_b
        );
        self.matches.push(record);
    }

    /// Edit a recorded match. Only scores and notes may change; sides,
    /// per-player stats, and the roster snapshot are immutable.
    pub fn update_match(&mut self, match_id: &str, update: &MatchUpdate) -> bool {
        match self.matches.iter_mut().find(|m| m.id == match_id) {
            Some(record) => {
                record.score_a = update.score_a;
                record.score_b = update.score_b;
                record.notes = update.notes.clone().filter(|n| !n.trim().is_empty());
                true
            }
            None => false,
        }
    }

    /// Delete a match by ID. Players are unaffected.
    pub fn delete_match(&mut self, match_id: &str) -> Option<MatchRecord> {
        if let Some(idx) = self.matches.iter().position(|m| m.id == match_id) {
            let record = self.matches.remove(idx);
            log::info!("Deleted match {}", record.id);
            Some(record)
        } else {
            None
        }
    }

    /// Get a match by ID
    pub fn get_match(&self, match_id: &str) -> Option<&MatchRecord> {
        self.matches.iter().find(|m| m.id == match_id)
    }

    /// Matches newest-first, for history views.
    pub fn match_history(&self) -> Vec<&MatchRecord> {
        let mut history: Vec<&MatchRecord> = self.matches.iter().collect();
        history.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        history
    }

    // ========================
    // Weights & Ranking
    // ========================

    /// Replace the scoring weights. Takes effect on the next ranking read;
    /// stored matches are never rewritten.
    pub fn set_weights(&mut self, weights: WeightVector) {
        self.weights = weights;
    }

    /// Compute the current leaderboard from scratch. Never cached, so it
    /// cannot drift from the matches on record.
    pub fn ranking(&self) -> Vec<RankedPlayer> {
        rank(&self.players, &self.matches, &self.weights)
    }

    // ========================
    // Reset / Documents
    // ========================

    /// Clear roster and matches and restore the default weights.
    pub fn reset(&mut self) {
        log::info!("Group state reset");
        *self = Self::default();
    }

    /// Convert runtime state to the export document, stamping the export
    /// time.
    pub fn to_document(&self) -> ExportDocument {
        ExportDocument {
            players: self.players.clone(),
            matches: self.matches.clone(),
            weights: self.weights,
            exported_at: Some(Utc::now()),
        }
    }

    /// Restore runtime state from an imported document
    pub fn from_document(doc: &ExportDocument) -> Self {
        Self {
            players: doc.players.clone(),
            matches: doc.matches.clone(),
            weights: doc.weights,
        }
    }

    /// Replace the whole state from an imported document. All-or-nothing:
    /// validation happened at parse time, so this cannot partially apply.
    pub fn import(&mut self, doc: &ExportDocument) {
        log::info!(
            "Imported document: {} players, {} matches",
            doc.players.len(),
            doc.matches.len()
        );
        *self = Self::from_document(doc);
    }
}

// ========================
// Global State Access Functions
// ========================

/// Get a read lock on the global group state
pub fn get_state() -> std::sync::RwLockReadGuard<'static, GroupState> {
    GROUP_STATE.read().expect("GROUP_STATE lock poisoned")
}

/// Get a write lock on the global group state
pub fn get_state_mut() -> std::sync::RwLockWriteGuard<'static, GroupState> {
    GROUP_STATE.write().expect("GROUP_STATE lock poisoned")
}

/// Reset the global state to default
pub fn reset_state() {
    *GROUP_STATE.write().expect("GROUP_STATE lock poisoned") = GroupState::new();
}

/// Replace the entire global state
pub fn set_state(new_state: GroupState) {
    *GROUP_STATE.write().expect("GROUP_STATE lock poisoned") = new_state;
}
