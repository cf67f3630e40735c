pub mod extract;
pub mod locate;
pub mod types;
pub mod write;

pub use extract::{extract_file, extract_sessions};
pub use locate::{TableLocator, DEFAULT_SELECTOR};
pub use types::{SessionRecord, COLUMN_COUNT};
pub use write::write_sessions;

use scraper::ElementRef;

/// Element text with whitespace runs (including `&nbsp;`) collapsed and trimmed.
pub(crate) fn normalized_text(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
