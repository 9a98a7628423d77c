use thiserror::Error;

use crate::models::Side;

/// Rejections from the match composer. The entity store is never touched by
/// a rejected composition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComposeError {
    #[error("side {0} has no players")]
    EmptySide(Side),

    #[error("players selected on both sides: {ids:?}")]
    OverlappingSides { ids: Vec<String> },
}

/// Rejections from the import/export document layer. Imports abort without
/// partial state mutation.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("invalid document")]
    Invalid,

    #[error("serialization error: {0}")]
    Serialization(String),
}
