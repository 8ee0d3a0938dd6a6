//! Core data structures for PATH entries

/// Classification of a single PATH entry after a filesystem check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryStatus {
    /// Exists and is a directory (symlinks followed)
    Ok,
    /// Exists but is not a directory
    NotADirectory,
    /// Does not exist or cannot be stat'ed
    Missing,
}

impl std::fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryStatus::Ok => write!(f, "ok"),
            EntryStatus::NotADirectory => write!(f, "not-a-directory"),
            EntryStatus::Missing => write!(f, "missing"),
        }
    }
}

impl std::str::FromStr for EntryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ok" => Ok(EntryStatus::Ok),
            "not-a-directory" => Ok(EntryStatus::NotADirectory),
            "missing" => Ok(EntryStatus::Missing),
            _ => Err(format!("Unknown entry status: {}", s)),
        }
    }
}

/// The PATH delimiter on POSIX-style systems
pub const DELIMITER: char = ':';

/// An ordered list of PATH entries, duplicates and empty segments permitted.
///
/// Entries are kept as the exact strings produced by splitting the raw
/// variable on the delimiter: no trimming, no normalization, no symlink
/// resolution. `join` on an unmodified list reproduces the raw string
/// byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathList {
    entries: Vec<String>,
}

impl PathList {
    /// Split a raw PATH string into an ordered list of entries.
    ///
    /// Delimiter-split semantics exactly: a leading, trailing or doubled
    /// delimiter yields an empty entry, and an empty input yields a list
    /// with one empty entry.
    pub fn parse(raw: &str) -> Self {
        Self {
            entries: raw.split(DELIMITER).map(str::to_string).collect(),
        }
    }

    /// Join the entries back into a single delimiter-separated string
    pub fn join(&self) -> String {
        self.entries.join(&DELIMITER.to_string())
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact string membership, no normalization
    pub fn contains(&self, candidate: &str) -> bool {
        self.entries.iter().any(|e| e == candidate)
    }

    /// Return a new list keeping only the first occurrence of each entry,
    /// preserving the relative order of survivors. Idempotent.
    pub fn dedup(&self) -> Self {
        let mut seen: std::collections::HashSet<&str> = std::collections::HashSet::new();
        let mut unique = Vec::new();
        for entry in &self.entries {
            if seen.insert(entry.as_str()) {
                unique.push(entry.clone());
            }
        }
        Self { entries: unique }
    }

    /// Append `candidate` as the last entry, or return the list unchanged
    /// if it is already present anywhere
    pub fn append(&self, candidate: &str) -> Self {
        if self.contains(candidate) {
            return self.clone();
        }
        let mut entries = self.entries.clone();
        entries.push(candidate.to_string());
        Self { entries }
    }

    /// Prepend `candidate` as the first entry, or return the list unchanged
    /// if it is already present anywhere
    pub fn prepend(&self, candidate: &str) -> Self {
        if self.contains(candidate) {
            return self.clone();
        }
        let mut entries = self.entries.clone();
        entries.insert(0, candidate.to_string());
        Self { entries }
    }
}

impl From<Vec<String>> for PathList {
    fn from(entries: Vec<String>) -> Self {
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(entries: &[&str]) -> PathList {
        PathList::from(entries.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn test_status_display() {
        assert_eq!(format!("{}", EntryStatus::Ok), "ok");
        assert_eq!(format!("{}", EntryStatus::NotADirectory), "not-a-directory");
        assert_eq!(format!("{}", EntryStatus::Missing), "missing");
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("ok".parse::<EntryStatus>().unwrap(), EntryStatus::Ok);
        assert_eq!(
            "missing".parse::<EntryStatus>().unwrap(),
            EntryStatus::Missing
        );
        assert!("bogus".parse::<EntryStatus>().is_err());
    }

    #[test]
    fn test_parse_plain() {
        let parsed = PathList::parse("/usr/bin:/bin");
        assert_eq!(parsed.entries(), &["/usr/bin", "/bin"]);
    }

    #[test]
    fn test_parse_preserves_empty_segments() {
        let parsed = PathList::parse(":/usr/bin::/bin:");
        assert_eq!(parsed.entries(), &["", "/usr/bin", "", "/bin", ""]);
    }

    #[test]
    fn test_parse_empty_string() {
        let parsed = PathList::parse("");
        assert_eq!(parsed.entries(), &[""]);
    }

    #[test]
    fn test_parse_join_round_trip() {
        for raw in ["/usr/bin:/bin", ":/usr/bin::/bin:", "", ":", "::", "/only"] {
            assert_eq!(PathList::parse(raw).join(), raw);
        }
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let deduped = list(&["/a", "/b", "/a", "/c", "/b"]).dedup();
        assert_eq!(deduped.entries(), &["/a", "/b", "/c"]);
    }

    #[test]
    fn test_dedup_idempotent() {
        let original = list(&["/a", "/b", "/a", "", "", "/b"]);
        let once = original.dedup();
        assert_eq!(once.dedup(), once);
    }

    #[test]
    fn test_dedup_no_normalization() {
        // Trailing slash makes a different entry
        let deduped = list(&["/usr/bin", "/usr/bin/"]).dedup();
        assert_eq!(deduped.len(), 2);
    }

    #[test]
    fn test_append_new_entry() {
        let appended = list(&["/a", "/b"]).append("/c");
        assert_eq!(appended.entries(), &["/a", "/b", "/c"]);
    }

    #[test]
    fn test_append_existing_is_noop() {
        let original = list(&["/a", "/b"]);
        assert_eq!(original.append("/a"), original);
        assert_eq!(original.append("/b"), original);
    }

    #[test]
    fn test_prepend_new_entry() {
        let prepended = list(&["/a", "/b"]).prepend("/c");
        assert_eq!(prepended.entries(), &["/c", "/a", "/b"]);
    }

    #[test]
    fn test_prepend_existing_is_noop() {
        let original = list(&["/a", "/b"]);
        assert_eq!(original.prepend("/b"), original);
    }

    #[test]
    fn test_join_no_trailing_delimiter() {
        assert_eq!(list(&["/a", "/b"]).join(), "/a:/b");
        assert_eq!(list(&["/a"]).join(), "/a");
    }
}
