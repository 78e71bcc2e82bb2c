use std::path::PathBuf;

use thiserror::Error;

use crate::models::InternalId;

#[derive(Error, Debug)]
pub enum TangrsError {
    #[error("Can't read input {}: {source}", .path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing line {line} ({reason}): {content:?}")]
    ParseError {
        line: usize,
        content: String,
        reason: String,
    },

    #[error("Unknown condition: {0}")]
    UnknownCondition(String),

    #[error("Empty input. 0 lines supplied")]
    EmptyInput,

    /// Name and sequence maps of a collection disagree on this id.
    #[error("Collection has a name or a sequence but not both for id {0}")]
    KeySetMismatch(InternalId),

    #[error("Can't load condition config: {0}")]
    ConditionConfig(String),
}

impl TangrsError {
    pub(crate) fn parse(line: usize, content: &str, reason: &str) -> Self {
        TangrsError::ParseError {
            line,
            content: content.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TangrsError>;
