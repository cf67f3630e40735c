// src/timetable/types.rs

use serde::{Deserialize, Serialize};

/// Number of `td` cells a data row must carry.
pub const COLUMN_COUNT: usize = 11;

/// A single class/session entry on the timetable.
///
/// Every field is the cell's text as it appears on the page; nothing is
/// parsed into times or week ranges.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct SessionRecord {
    pub activity: String,
    pub module_title: String,
    pub session_title: String,
    #[serde(rename = "type")]
    pub session_type: String,
    pub weeks: String,
    pub day: String,
    pub start: String,
    pub end: String,
    pub staff: String,
    pub location: String,
    pub notes: String,
}

impl SessionRecord {
    /// Build a record from a row's cell texts, by position.
    ///
    /// Returns `None` when fewer than [`COLUMN_COUNT`] cells are given.
    /// Cells past the eleventh are ignored.
    pub fn from_cells<S: AsRef<str>>(cells: &[S]) -> Option<Self> {
        if cells.len() < COLUMN_COUNT {
            return None;
        }
        let cell = |i: usize| cells[i].as_ref().to_owned();
        Some(Self {
            activity: cell(0),
            module_title: cell(1),
            session_title: cell(2),
            session_type: cell(3),
            weeks: cell(4),
            day: cell(5),
            start: cell(6),
            end: cell(7),
            staff: cell(8),
            location: cell(9),
            notes: cell(10),
        })
    }
}
