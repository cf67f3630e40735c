use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::{info, warn};

use super::SessionRecord;
use crate::error::{ExtractError, Result};

/// Write `records` to `path` as a pretty-printed JSON array.
///
/// The JSON is written to `.<name>.tmp` beside `path` and renamed over it, so
/// a failed run never leaves a half-written output behind.
pub fn write_sessions<P: AsRef<Path>>(path: P, records: &[SessionRecord]) -> Result<()> {
    let path = path.as_ref();
    let tmp_path = tmp_path_for(path);

    let written = write_json(&tmp_path, records).and_then(|_| {
        fs::rename(&tmp_path, path).map_err(ExtractError::io("renaming into", path))
    });
    if let Err(e) = written {
        if let Err(rm) = fs::remove_file(&tmp_path) {
            warn!(path = %tmp_path.display(), error = %rm, "could not remove temp file");
        }
        return Err(e);
    }

    info!(path = %path.display(), records = records.len(), "wrote sessions");
    Ok(())
}

fn write_json(tmp_path: &Path, records: &[SessionRecord]) -> Result<()> {
    let file = File::create(tmp_path).map_err(ExtractError::io("creating", tmp_path))?;
    let mut w = BufWriter::new(file);

    // pretty-print with a trailing newline
    serde_json::to_writer_pretty(&mut w, records)?;
    w.write_all(b"\n")
        .and_then(|_| w.flush())
        .map_err(ExtractError::io("writing", tmp_path))?;
    Ok(())
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "timetable.json".to_owned());
    path.with_file_name(format!(".{}.tmp", name))
}
