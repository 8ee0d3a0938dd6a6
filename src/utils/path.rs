//! Path utilities

use std::path::PathBuf;

/// Expand a leading tilde (~) to the home directory.
///
/// Returns the input unchanged when it has no tilde prefix or when no home
/// directory can be determined. Only user-supplied directories go through
/// this; entries parsed out of PATH are never rewritten.
pub fn expand_tilde(path: &str) -> String {
    if let Some(stripped) = path.strip_prefix('~') {
        if stripped.is_empty() || stripped.starts_with('/') {
            if let Some(home) = dirs::home_dir() {
                let joined: PathBuf = home.join(stripped.trim_start_matches('/'));
                return joined.to_string_lossy().into_owned();
            }
        }
    }
    path.to_string()
}
