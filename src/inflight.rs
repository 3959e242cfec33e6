//! In-Flight Actions
//!
//! Per-key busy flags and last outcomes for row actions that may overlap,
//! such as notifying several drives at once.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct Tracker<K: Eq + Hash> {
    running: HashSet<K>,
    outcomes: HashMap<K, String>,
}

impl<K: Eq + Hash> Default for Tracker<K> {
    fn default() -> Self {
        Self {
            running: HashSet::new(),
            outcomes: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> Tracker<K> {
    /// Mark `key` busy and forget its previous outcome.
    /// Returns false when it is already running.
    pub fn start(&mut self, key: K) -> bool {
        if !self.running.insert(key.clone()) {
            return false;
        }
        self.outcomes.remove(&key);
        true
    }

    pub fn finish(&mut self, key: &K) {
        self.running.remove(key);
    }

    /// Finish `key` and keep a message for its row
    pub fn record(&mut self, key: K, message: String) {
        self.running.remove(&key);
        self.outcomes.insert(key, message);
    }

    pub fn is_running(&self, key: &K) -> bool {
        self.running.contains(key)
    }

    pub fn outcome(&self, key: &K) -> Option<&str> {
        self.outcomes.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_are_independent() {
        let mut notify = Tracker::<String>::default();
        assert!(notify.start("drive-x".into()));
        assert!(notify.is_running(&"drive-x".into()));
        assert!(!notify.is_running(&"drive-y".into()));

        // a second row can start while the first is in flight
        assert!(notify.start("drive-y".into()));
        notify.record("drive-x".into(), "Sent 12 emails".into());
        assert!(!notify.is_running(&"drive-x".into()));
        assert!(notify.is_running(&"drive-y".into()));
        assert_eq!(notify.outcome(&"drive-x".into()), Some("Sent 12 emails"));
        assert_eq!(notify.outcome(&"drive-y".into()), None);
    }

    #[test]
    fn test_double_start_rejected() {
        let mut notify = Tracker::<String>::default();
        assert!(notify.start("drive-x".into()));
        assert!(!notify.start("drive-x".into()));
        notify.finish(&"drive-x".into());
        assert!(notify.start("drive-x".into()));
    }

    #[test]
    fn test_restart_clears_old_outcome() {
        let mut notify = Tracker::<String>::default();
        notify.start("drive-x".into());
        notify.record("drive-x".into(), "Notification failed.".into());
        assert!(notify.start("drive-x".into()));
        assert_eq!(notify.outcome(&"drive-x".into()), None);
    }
}
