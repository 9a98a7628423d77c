//! Collaborator boundary for persistence and realtime backends.
//!
//! The core never merges partial updates: a backend pushes full-collection
//! snapshots and the working copy is replaced wholesale (last-writer-wins at
//! the collaborator boundary). Writes go the other way as fire-and-forget
//! appends and deletes; the recompute-from-scratch aggregation means no
//! core-level conflict resolution is needed.

use std::fmt;
use std::str::FromStr;

use super::GroupState;
use crate::models::{MatchRecord, Player, WeightVector};

/// Named collections the backend synchronizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Players,
    Matches,
    Weights,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Players => "players",
            Collection::Matches => "matches",
            Collection::Weights => "weights",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "players" => Ok(Collection::Players),
            "matches" => Ok(Collection::Matches),
            "weights" => Ok(Collection::Weights),
            _ => Err(format!("Unknown collection: {}", s)),
        }
    }
}

/// A full replacement for one collection, as pushed by the backend's
/// subscription stream.
#[derive(Debug, Clone)]
pub enum CollectionSnapshot {
    Players(Vec<Player>),
    Matches(Vec<MatchRecord>),
    Weights(WeightVector),
}

impl CollectionSnapshot {
    pub fn collection(&self) -> Collection {
        match self {
            CollectionSnapshot::Players(_) => Collection::Players,
            CollectionSnapshot::Matches(_) => Collection::Matches,
            CollectionSnapshot::Weights(_) => Collection::Weights,
        }
    }
}

/// A record to append to a backend collection.
#[derive(Debug, Clone)]
pub enum Record {
    Player(Player),
    Match(MatchRecord),
}

impl Record {
    pub fn collection(&self) -> Collection {
        match self {
            Record::Player(_) => Collection::Players,
            Record::Match(_) => Collection::Matches,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Record::Player(p) => &p.id,
            Record::Match(m) => &m.id,
        }
    }
}

/// Callback invoked with every full-collection snapshot the backend emits.
pub type SnapshotListener = Box<dyn FnMut(CollectionSnapshot) + Send>;

/// The contract the core requires from its persistence collaborator.
///
/// `subscribe` registers for push-based full snapshots of one collection;
/// `append` and `delete` are fire-and-forget writes; the core needs nothing
/// back beyond success/failure.
pub trait StoreBackend {
    fn subscribe(&mut self, collection: Collection, listener: SnapshotListener)
        -> anyhow::Result<()>;
    fn append(&mut self, record: &Record) -> anyhow::Result<()>;
    fn delete(&mut self, collection: Collection, id: &str) -> anyhow::Result<()>;
}

impl GroupState {
    /// Replace one collection's working copy with a pushed snapshot.
    pub fn apply_snapshot(&mut self, snapshot: CollectionSnapshot) {
        log::debug!("Applying {} snapshot", snapshot.collection());
        match snapshot {
            CollectionSnapshot::Players(players) => self.players = players,
            CollectionSnapshot::Matches(matches) => self.matches = matches,
            CollectionSnapshot::Weights(weights) => self.weights = weights,
        }
    }
}

/// In-memory backend for tests and single-process use. Every write is
/// immediately echoed to the matching subscribers, the way a remote store
/// confirms its own mutations.
#[derive(Default)]
pub struct MemoryBackend {
    players: Vec<Player>,
    matches: Vec<MatchRecord>,
    listeners: Vec<(Collection, SnapshotListener)>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    fn emit(&mut self, collection: Collection) {
        let snapshot = match collection {
            Collection::Players => CollectionSnapshot::Players(self.players.clone()),
            Collection::Matches => CollectionSnapshot::Matches(self.matches.clone()),
            Collection::Weights => return,
        };
        for (subscribed, listener) in &mut self.listeners {
            if *subscribed == collection {
                listener(snapshot.clone());
            }
        }
    }
}

impl StoreBackend for MemoryBackend {
    fn subscribe(
        &mut self,
        collection: Collection,
        listener: SnapshotListener,
    ) -> anyhow::Result<()> {
        self.listeners.push((collection, listener));
        // new subscribers immediately receive the current snapshot
        self.emit(collection);
        Ok(())
    }

    fn append(&mut self, record: &Record) -> anyhow::Result<()> {
        match record {
            Record::Player(p) => self.players.push(p.clone()),
            Record::Match(m) => self.matches.push(m.clone()),
        }
        self.emit(record.collection());
        Ok(())
    }

    fn delete(&mut self, collection: Collection, id: &str) -> anyhow::Result<()> {
        match collection {
            Collection::Players => self.players.retain(|p| p.id != id),
            Collection::Matches => self.matches.retain(|m| m.id != id),
            // weights are replaced, never deleted by id
            Collection::Weights => return Ok(()),
        }
        self.emit(collection);
        Ok(())
    }
}
