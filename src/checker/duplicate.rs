//! Duplicate entry detection

use std::collections::HashMap;

/// Report entries occurring more than once: `(entry, total occurrences)`
/// in order of first occurrence. Exact string equality, no normalization.
pub fn find_duplicates(entries: &[String]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for entry in entries {
        *counts.entry(entry.as_str()).or_default() += 1;
    }

    let mut reported: Vec<(String, usize)> = Vec::new();
    for entry in entries {
        if let Some(&n) = counts.get(entry.as_str()) {
            if n > 1 && !reported.iter().any(|(e, _)| e == entry) {
                reported.push((entry.clone(), n));
            }
        }
    }
    reported
}
