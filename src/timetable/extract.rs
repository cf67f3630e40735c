// src/timetable/extract.rs

use scraper::Html;
use std::{fs, path::Path};
use tracing::{debug, info, instrument};

use super::{
    locate::{parse_selector, TableLocator},
    normalized_text,
    types::{SessionRecord, COLUMN_COUNT},
};
use crate::error::{ExtractError, Result};

/// Read an HTML timetable from disk and extract its sessions.
pub fn extract_file<P: AsRef<Path>>(path: P, locator: &TableLocator) -> Result<Vec<SessionRecord>> {
    let path = path.as_ref();
    let html = fs::read_to_string(path).map_err(ExtractError::io("reading", path))?;
    debug!(path = %path.display(), bytes = html.len(), "read input");
    extract_sessions(&html, locator)
}

/// Extract one `SessionRecord` per data row of the located table's body.
///
/// Rows without any `td` (header rows built from `th`) are skipped. A row
/// with some cells but fewer than [`COLUMN_COUNT`] fails the whole
/// extraction instead of yielding a partial record.
#[instrument(level = "debug", skip(html), fields(html_len = html.len()))]
pub fn extract_sessions(html: &str, locator: &TableLocator) -> Result<Vec<SessionRecord>> {
    let doc = Html::parse_document(html);
    let table = locator.locate(&doc)?;

    let tbody = parse_selector("tbody")?;
    let tr = parse_selector("tr")?;
    let td = parse_selector("td")?;

    let body = table
        .select(&tbody)
        .next()
        .ok_or_else(|| ExtractError::MissingBody {
            locator: locator.to_string(),
        })?;

    let mut records = Vec::new();
    for (idx, row) in body.select(&tr).enumerate() {
        let row_no = idx + 1;
        let cells: Vec<String> = row.select(&td).map(normalized_text).collect();
        if cells.is_empty() {
            debug!(row = row_no, "skipping row without <td> cells");
            continue;
        }
        let record = SessionRecord::from_cells(&cells).ok_or(ExtractError::ShortRow {
            row: row_no,
            found: cells.len(),
            expected: COLUMN_COUNT,
        })?;
        records.push(record);
    }

    info!(locator = %locator, records = records.len(), "extracted sessions");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use tracing_subscriber::{fmt, EnvFilter};

    fn init_logging() {
        let _ = fmt()
            .with_env_filter(EnvFilter::new("debug"))
            .with_target(false)
            .try_init();
    }

    const LECTURE_ROW: &str = "<tr><td>Lecture</td><td>COMP101</td><td>Intro</td><td>LEC</td>\
        <td>1-12</td><td>Mon</td><td>09:00</td><td>10:00</td><td>Dr. Smith</td>\
        <td>Room A</td><td></td></tr>";

    /// Put `table` at the third element child of `body`.
    fn page(table: &str) -> String {
        format!(
            "<html><head><title>t</title></head><body>\
             <p>University of Nottingham</p><p>Monday</p>{}</body></html>",
            table
        )
    }

    #[test]
    fn test_single_lecture_row() {
        init_logging();
        let html = page(&format!("<table><tbody>{}</tbody></table>", LECTURE_ROW));
        let recs = extract_sessions(&html, &TableLocator::default()).unwrap();

        assert_eq!(
            recs,
            vec![SessionRecord {
                activity: "Lecture".into(),
                module_title: "COMP101".into(),
                session_title: "Intro".into(),
                session_type: "LEC".into(),
                weeks: "1-12".into(),
                day: "Mon".into(),
                start: "09:00".into(),
                end: "10:00".into(),
                staff: "Dr. Smith".into(),
                location: "Room A".into(),
                notes: "".into(),
            }]
        );
    }

    #[test]
    fn test_n_rows_in_order() {
        let rows: String = (0..5)
            .map(|i| {
                let cells: String = (0..COLUMN_COUNT)
                    .map(|c| format!("<td>r{}c{}</td>", i, c))
                    .collect();
                format!("<tr>{}</tr>", cells)
            })
            .collect();
        let html = page(&format!("<table>{}</table>", rows));
        let recs = extract_sessions(&html, &TableLocator::default()).unwrap();

        assert_eq!(recs.len(), 5);
        for (i, rec) in recs.iter().enumerate() {
            assert_eq!(rec.activity, format!("r{}c0", i));
            assert_eq!(rec.weeks, format!("r{}c4", i));
            assert_eq!(rec.notes, format!("r{}c10", i));
        }
    }

    #[test]
    fn test_header_rows_skipped() {
        let header = "<tr><th>Activity</th><th>Module</th><th>Title</th></tr>";
        let html = page(&format!(
            "<table><thead><tr><td>not body</td></tr></thead>\
             <tbody>{}{}</tbody></table>",
            header, LECTURE_ROW
        ));
        let recs = extract_sessions(&html, &TableLocator::default()).unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].activity, "Lecture");
    }

    #[test]
    fn test_short_row_fails() {
        let short = "<tr><td>Lecture</td><td>COMP101</td><td>Intro</td></tr>";
        let html = page(&format!("<table>{}{}</table>", LECTURE_ROW, short));
        let err = extract_sessions(&html, &TableLocator::default()).unwrap_err();
        match err {
            ExtractError::ShortRow {
                row,
                found,
                expected,
            } => {
                assert_eq!(row, 2);
                assert_eq!(found, 3);
                assert_eq!(expected, COLUMN_COUNT);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_table_fails() {
        let html = format!(
            "<html><body><p>only one</p><table>{}</table></body></html>",
            LECTURE_ROW
        );
        let err = extract_sessions(&html, &TableLocator::default()).unwrap_err();
        assert!(matches!(err, ExtractError::TableNotFound { .. }));
    }

    #[test]
    fn test_selected_non_table_without_body() {
        let html = page("<table></table>");
        let loc = TableLocator::Selector("body > p".into());
        let err = extract_sessions(&html, &loc).unwrap_err();
        assert!(matches!(err, ExtractError::MissingBody { .. }));
    }

    #[test]
    fn test_cell_whitespace_collapsed() {
        let row = "<tr><td>\n  Computer\n  Lab </td><td>COMP1005</td><td>Fundamentals&nbsp;of AI</td>\
            <td>PRA</td><td>1-5,&nbsp;7</td><td>Tue</td><td>14:00</td><td>16:00</td>\
            <td>Smith,<br>Jane</td><td>CS A32</td><td>&nbsp;</td></tr>";
        let html = page(&format!("<table>{}</table>", row));
        let rec = &extract_sessions(&html, &TableLocator::default()).unwrap()[0];
        assert_eq!(rec.activity, "Computer Lab");
        assert_eq!(rec.session_title, "Fundamentals of AI");
        assert_eq!(rec.weeks, "1-5, 7");
        assert_eq!(rec.staff, "Smith,Jane");
        assert_eq!(rec.notes, "");
    }

    #[test]
    fn test_extract_file_missing() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("absent.html");
        let err = extract_file(&path, &TableLocator::default()).unwrap_err();
        match err {
            ExtractError::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_extract_file_reads_disk() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("timetable.html");
        fs::write(&path, page(&format!("<table>{}</table>", LECTURE_ROW))).unwrap();
        let recs = extract_file(&path, &TableLocator::default()).unwrap();
        assert_eq!(recs.len(), 1);
    }
}
