use std::collections::HashSet;

/// Tracks which canonical trial identifiers have already been admitted
/// to the fused output. Cross-source deduplication is first-writer-wins:
/// the first source processed for a run keeps the record, later
/// duplicates are discarded outright.
///
/// One tracker per pipeline run, passed explicitly into the assembler,
/// so runs stay re-entrant and testable in isolation.
#[derive(Debug, Default)]
pub struct IdentityTracker {
    seen: HashSet<String>,
}

impl IdentityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true and records the id the first time it is seen, false
    /// on every subsequent call with the same id.
    pub fn admit(&mut self, id: &str) -> bool {
        if self.seen.contains(id) {
            false
        } else {
            self.seen.insert(id.to_string());
            true
        }
    }

    pub fn admitted(&self) -> usize {
        self.seen.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_admission_wins() {
        let mut tracker = IdentityTracker::new();

        assert!(tracker.admit("NCT001"));

        // Same id should return false on every later call
        assert!(!tracker.admit("NCT001"));
        assert!(!tracker.admit("NCT001"));

        // Different id should return true
        assert!(tracker.admit("NCT002"));
        assert!(!tracker.admit("NCT002"));

        assert_eq!(tracker.admitted(), 2);
    }

    #[test]
    fn test_fresh_tracker_is_empty() {
        let tracker = IdentityTracker::new();
        assert_eq!(tracker.admitted(), 0);
    }
}
