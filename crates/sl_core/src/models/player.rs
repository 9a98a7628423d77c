use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A member of the group roster.
///
/// Identity is the `id`, minted once at creation and immutable afterwards;
/// two players may share a display name. Edits touch name, position, and
/// avatar only, so recorded matches can keep referring to the same id across
/// renames.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_ref: Option<String>,
}

impl Player {
    /// Create a new roster member with a fresh id and no avatar.
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            position,
            avatar_ref: None,
        }
    }

    pub fn with_avatar(mut self, avatar_ref: impl Into<String>) -> Self {
        self.avatar_ref = Some(avatar_ref.into());
        self
    }
}

/// Where a player usually lines up. Informal groups only track the broad
/// role, not a full positional grid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    GK,
    DF,
    CDM,
    MF,
    FW,
}

impl Position {
    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, Position::GK)
    }

    /// Get position display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Position::GK => "Goalkeeper",
            Position::DF => "Defender",
            Position::CDM => "Holding Midfielder",
            Position::MF => "Midfielder",
            Position::FW => "Forward",
        }
    }

    /// Get position abbreviation for compact display
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Position::GK => "GK",
            Position::DF => "DEF",
            Position::CDM => "CDM",
            Position::MF => "MID",
            Position::FW => "FWD",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GK" | "GOALKEEPER" => Ok(Position::GK),
            "DF" | "DEF" | "DEFENDER" => Ok(Position::DF),
            "CDM" | "HOLDING MIDFIELDER" => Ok(Position::CDM),
            "MF" | "MID" | "MIDFIELDER" => Ok(Position::MF),
            "FW" | "FWD" | "FORWARD" => Ok(Position::FW),
            _ => Err(format!("Invalid position: {}", s)),
        }
    }
}
