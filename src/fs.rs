//! File system utilities.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Writes content to a file atomically using a temp file and rename.
///
/// Another web-s process reading the file while it is regenerated sees
/// either the old or the new contents, never a partial write. Each writer
/// gets its own uniquely named temp file next to the target, so concurrent
/// writers never share one and the last rename wins. The temp file is
/// removed if anything fails before the rename.
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut temp = NamedTempFile::new_in(parent)?;
    temp.write_all(content.as_bytes())?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;

    Ok(())
}

/// Returns `true` if `path` names an existing regular file.
///
/// Any error while inspecting the path (missing file, permission denied,
/// broken symlink) reports `false`; callers treat that as "no file yet".
pub fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|meta| meta.is_file())
}
