use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::DocumentError;
use crate::models::{MatchRecord, Player, WeightVector};

/// The single snapshot document exchanged by export and import:
/// `{ players, matches, weights, exportedAt }`.
///
/// Export reproduces every model field losslessly; import accepts the
/// document wholesale or not at all.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub players: Vec<Player>,
    pub matches: Vec<MatchRecord>,
    /// Absent in old exports; falls back to the group defaults.
    #[serde(default)]
    pub weights: WeightVector,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<DateTime<Utc>>,
}

impl ExportDocument {
    /// Shape alone is not enough: duplicate player ids mean a corrupt
    /// document and would break every id-keyed lookup downstream.
    pub fn validate(&self) -> Result<(), DocumentError> {
        let mut ids = HashSet::new();
        for player in &self.players {
            if !ids.insert(player.id.as_str()) {
                return Err(DocumentError::Invalid);
            }
        }
        Ok(())
    }
}

/// Parse an import payload.
///
/// The only accepted shape is a document whose `players` and `matches` are
/// sequences of well-formed records; anything else is rejected with the
/// generic invalid-document signal and nothing is imported.
pub fn parse_document(input: &str) -> Result<ExportDocument, DocumentError> {
    let doc: ExportDocument = serde_json::from_str(input).map_err(|err| {
        log::warn!("Rejected import document: {err}");
        DocumentError::Invalid
    })?;
    doc.validate()?;
    Ok(doc)
}

/// Serialize a document for export.
pub fn write_document(doc: &ExportDocument) -> Result<String, DocumentError> {
    serde_json::to_string_pretty(doc).map_err(|err| DocumentError::Serialization(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MatchSetup, Position, StatInput};
    use proptest::prelude::*;

    fn sample_document() -> ExportDocument {
        let players = vec![
            Player::new("Ana", Position::FW),
            Player::new("Bia", Position::GK).with_avatar("https://cdn.example/bia.png"),
        ];
        let mut setup = MatchSetup {
            side_a: vec![players[0].id.clone()],
            side_b: vec![players[1].id.clone()],
            score_a: 2,
            score_b: 2,
            notes: Some("rainy day".into()),
            ..MatchSetup::default()
        };
        setup.stats.insert(players[0].id.clone(), StatInput { goals: 2, assists: 0 });
        let record = setup.compose(&players).unwrap();

        ExportDocument {
            players,
            matches: vec![record],
            weights: WeightVector { win: 2.0, loss: 0.0, goal: 1.0, assist: 1.0 },
            exported_at: Some(Utc::now()),
        }
    }

    #[test]
    fn export_then_import_is_lossless() {
        let doc = sample_document();
        let json = write_document(&doc).unwrap();
        let parsed = parse_document(&json).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn missing_collections_are_rejected() {
        for payload in [
            r#"{}"#,
            r#"{"players": []}"#,
            r#"{"matches": []}"#,
            r#"{"players": {}, "matches": []}"#,
            r#"{"players": [], "matches": 3}"#,
            r#"not json at all"#,
        ] {
            assert!(
                matches!(parse_document(payload), Err(DocumentError::Invalid)),
                "payload {payload:?} should be rejected"
            );
        }
    }

    #[test]
    fn absent_weights_fall_back_to_defaults() {
        let doc = parse_document(r#"{"players": [], "matches": []}"#).unwrap();
        assert_eq!(doc.weights, WeightVector::default());
        assert_eq!(doc.exported_at, None);
    }

    #[test]
    fn duplicate_player_ids_are_rejected() {
        let mut doc = sample_document();
        doc.players.push(doc.players[0].clone());
        let json = write_document(&doc).unwrap();
        assert!(matches!(parse_document(&json), Err(DocumentError::Invalid)));
    }

    proptest! {
        #[test]
        fn documents_round_trip_losslessly(
            names in proptest::collection::vec("[a-z]{1,8}", 2..6),
            score_a in 0u32..10,
            score_b in 0u32..10,
            goals in 0u32..5,
            assists in 0u32..5,
        ) {
            let players: Vec<Player> = names
                .iter()
                .map(|name| Player::new(name.clone(), Position::MF))
                .collect();

            let mut setup = MatchSetup {
                side_a: vec![players[0].id.clone()],
                side_b: vec![players[1].id.clone()],
                score_a,
                score_b,
                ..MatchSetup::default()
            };
            setup.stats.insert(players[0].id.clone(), StatInput { goals, assists });
            let record = setup.compose(&players).unwrap();

            let doc = ExportDocument {
                players,
                matches: vec![record],
                weights: WeightVector::default(),
                exported_at: Some(Utc::now()),
            };

            let json = write_document(&doc).unwrap();
            let parsed = parse_document(&json).unwrap();
            prop_assert_eq!(parsed, doc);
        }
    }
}
