//! Error type for timetable extraction.

use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{op} {path:?}: {source}")]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid CSS selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("no table matches {locator}")]
    TableNotFound { locator: String },

    #[error("table matched by {locator} has no <tbody>")]
    MissingBody { locator: String },

    #[error("row {row} has {found} cells, expected at least {expected}")]
    ShortRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("serializing JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExtractError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| ExtractError::Io { op, path, source }
    }
}

pub type Result<T, E = ExtractError> = std::result::Result<T, E>;
