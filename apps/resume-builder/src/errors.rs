use thiserror::Error;

use crate::editor::EntryId;
use crate::models::{SectionKey, UnknownVariant};

/// A request an editor cannot act on. Validation failures are not errors;
/// they live in `SectionStatus`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("{section} has no entry #{}", .index + 1)]
    NoSuchEntry { section: SectionKey, index: usize },

    #[error("{section} has no entry with id {id}")]
    UnknownEntry { section: SectionKey, id: EntryId },

    #[error("unknown {section} field '{field}' (expected one of: {expected})")]
    UnknownField {
        section: SectionKey,
        field: String,
        expected: String,
    },

    #[error("invalid value for {section} field '{field}': {message}")]
    InvalidInput {
        section: SectionKey,
        field: &'static str,
        message: String,
    },

    #[error("{0} is a single record; it has no entries to add or remove")]
    NotAList(SectionKey),

    #[error("{0} entries are addressed by position")]
    MissingIndex(SectionKey),

    #[error("{0} is a single record; set its fields without a position")]
    UnexpectedIndex(SectionKey),
}

/// Failure to parse or carry out one line of the command loop.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("'{0}' is not a valid position (positions start at 1)")]
    InvalidPosition(String),

    #[error(transparent)]
    InvalidArgument(#[from] UnknownVariant),

    #[error(transparent)]
    Edit(#[from] EditError),

    #[error("input line is not valid UTF-8")]
    InvalidEncoding,

    #[error("failed to render preview: {0}")]
    Render(#[from] serde_json::Error),
}
