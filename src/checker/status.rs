//! Entry classification against the filesystem

use std::fs;
use std::path::Path;

use crate::model::EntryStatus;

/// Classify a single entry: `Ok` if it exists and is a directory (symlinks
/// followed), `NotADirectory` if it exists as something else, `Missing` if
/// it does not exist or cannot be stat'ed.
pub fn classify(entry: impl AsRef<Path>) -> EntryStatus {
    match fs::metadata(entry.as_ref()) {
        Ok(meta) if meta.is_dir() => EntryStatus::Ok,
        Ok(_) => EntryStatus::NotADirectory,
        Err(_) => EntryStatus::Missing,
    }
}

/// Classify every entry in order. Duplicates are not collapsed, so the
/// caller can report a classification per original slot.
pub fn classify_all(entries: &[String]) -> Vec<(String, EntryStatus)> {
    entries
        .iter()
        .map(|e| (e.clone(), classify(e)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_classify_directory() {
        let dir = tempdir().unwrap();
        assert_eq!(classify(dir.path()), EntryStatus::Ok);
    }

    #[test]
    fn test_classify_regular_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("not-a-dir");
        File::create(&file).unwrap();
        assert_eq!(classify(&file), EntryStatus::NotADirectory);
    }

    #[test]
    fn test_classify_missing() {
        assert_eq!(classify("/no/such/directory"), EntryStatus::Missing);
        assert_eq!(classify(""), EntryStatus::Missing);
    }

    #[cfg(unix)]
    #[test]
    fn test_classify_follows_symlinks() {
        let dir = tempdir().unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(dir.path(), &link).unwrap();
        assert_eq!(classify(&link), EntryStatus::Ok);

        let broken = dir.path().join("broken");
        std::os::unix::fs::symlink(dir.path().join("gone"), &broken).unwrap();
        assert_eq!(classify(&broken), EntryStatus::Missing);
    }

    #[test]
    fn test_classify_all_preserves_order_and_duplicates() {
        let dir = tempdir().unwrap();
        let good = dir.path().to_string_lossy().to_string();
        let entries = vec![good.clone(), "/no/such/directory".into(), good.clone()];

        let classified = classify_all(&entries);

        assert_eq!(classified.len(), 3);
        assert_eq!(classified[0], (good.clone(), EntryStatus::Ok));
        assert_eq!(
            classified[1],
            ("/no/such/directory".to_string(), EntryStatus::Missing)
        );
        assert_eq!(classified[2], (good, EntryStatus::Ok));
    }
}
