// ArticleShelf - platform/fs.rs
//
// Filesystem helpers for writing output files.
//
// Output is written to a sibling temporary file and renamed into place, so
// an interrupted run never leaves a truncated JSON file behind.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Create the parent directory of `path` (and its ancestors) if missing.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Replace the contents of `path` with `bytes`.
///
/// Creates the parent directory when needed and overwrites any existing
/// file. The temporary file is removed if any step after its creation fails.
pub fn write_replacing(path: &Path, bytes: &[u8]) -> io::Result<()> {
    ensure_parent_dir(path)?;

    let tmp = temp_sibling(path);
    let result = write_file(&tmp, bytes).and_then(|()| std::fs::rename(&tmp, path));
    if let Err(e) = &result {
        tracing::debug!(tmp = %tmp.display(), error = %e, "Write failed; removing temp file");
        let _ = std::fs::remove_file(&tmp);
    }
    result
}

fn write_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

/// `dir/name.ext` -> `dir/.name.ext.tmp`
fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    path.with_file_name(format!(".{name}.tmp"))
}
