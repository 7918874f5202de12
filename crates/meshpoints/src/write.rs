//! JSON output.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::PointList;
use crate::error::ExportResult;

/// Write a point list as pretty-printed JSON with 2-space indentation.
///
/// The JSON goes to a sibling `.<name>.<pid>.tmp` file which is then renamed over
/// `path`, so the destination either keeps its old contents or holds the
/// complete new list. The parent directory must already exist.
pub fn write_points(path: impl AsRef<Path>, points: &PointList) -> ExportResult<()> {
    let path = path.as_ref();
    let json = serde_json::to_vec_pretty(points)?;

    let tmp_path = temp_path(path);
    if let Err(e) = fs::write(&tmp_path, &json).and_then(|()| fs::rename(&tmp_path, path)) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    tracing::debug!("Wrote {} bytes to {}", json.len(), path.display());
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    if let Some(file_name) = path.file_name() {
        name.push(file_name);
    }
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}
