//! Executable counting inside PATH directories

use anyhow::Result;
use std::fs;
use std::path::Path;

#[cfg(unix)]
fn is_executable(meta: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.is_file() && meta.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(meta: &fs::Metadata) -> bool {
    // Execute permission checks are not meaningful on non-unix systems;
    // count every regular file.
    meta.is_file()
}

/// Count regular files with at least one executable bit set directly inside
/// `dir` (depth 1, no recursion). Symlinked children are resolved first;
/// broken symlinks and subdirectories are not counted. Fails if `dir` is
/// missing or unreadable.
pub fn count_executables(dir: impl AsRef<Path>) -> Result<usize> {
    let mut count = 0;
    for child in fs::read_dir(dir.as_ref())? {
        let child = child?;
        // fs::metadata follows symlinks; a broken link just stats to an error
        if let Ok(meta) = fs::metadata(child.path()) {
            if is_executable(&meta) {
                count += 1;
            }
        }
    }
    Ok(count)
}
