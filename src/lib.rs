//! Convert a University of Nottingham HTML timetable into JSON session records.

pub mod error;
pub mod timetable;

use std::path::Path;
use tracing::info;

pub use error::{ExtractError, Result};
pub use timetable::{
    extract_file, extract_sessions, write_sessions, SessionRecord, TableLocator, DEFAULT_SELECTOR,
};

/// Read `input`, extract the table chosen by `locator`, write the records to
/// `output` as JSON, and return how many were written.
pub fn run<I, O>(input: I, output: O, locator: &TableLocator) -> Result<usize>
where
    I: AsRef<Path>,
    O: AsRef<Path>,
{
    let (input, output) = (input.as_ref(), output.as_ref());
    info!(input = %input.display(), locator = %locator, "extracting timetable");

    let records = extract_file(input, locator)?;
    write_sessions(output, &records)?;
    Ok(records.len())
}
