//! Recent selection history
//!
//! A bounded, deduplicated, most-recent-first list of labels. Every mutation
//! is written through to the injected [`KeyValueStore`] before returning.
//! Storage problems never reach the caller: a broken payload loads as an
//! empty history and failed writes are logged and skipped.

use crate::storage::{KeyValueStore, StorageError};

/// Maximum number of remembered selections
pub const HISTORY_CAPACITY: usize = 5;

/// Key the history payload is stored under
pub const DEFAULT_HISTORY_KEY: &str = "recentSearches";

pub struct HistoryStore {
    storage: Box<dyn KeyValueStore>,
    key: String,
    entries: Vec<String>,
}

impl HistoryStore {
    /// Load the persisted history stored under `key`.
    ///
    /// Returns an empty history if the payload is missing, unreadable or not
    /// a list of strings. Oversized payloads are cut to the first
    /// [`HISTORY_CAPACITY`] unique entries.
    pub fn load(storage: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let entries = match storage.load(&key) {
            Ok(Some(payload)) => parse_payload(&payload),
            Ok(None) => {
                log::debug!("No recent history stored under {}, starting fresh", key);
                Vec::new()
            }
            Err(e) => {
                log::warn!("Failed to read recent history: {}", e);
                Vec::new()
            }
        };

        log::info!("Loaded {} recent history entries", entries.len());
        Self {
            storage,
            key,
            entries,
        }
    }

    /// Most recent first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Move `label` to the front, evicting the oldest entry past capacity
    pub fn record(&mut self, label: &str) {
        self.entries.retain(|entry| entry != label);
        self.entries.insert(0, label.to_string());
        self.entries.truncate(HISTORY_CAPACITY);
        self.persist();
    }

    /// Remove `label`. Returns false when it was not present.
    pub fn remove(&mut self, label: &str) -> bool {
        let Some(position) = self.entries.iter().position(|entry| entry == label) else {
            return false;
        };
        self.entries.remove(position);
        self.persist();
        true
    }

    /// Forget everything and delete the persisted key
    pub fn clear(&mut self) {
        self.entries.clear();
        if let Err(e) = self.storage.delete(&self.key) {
            log::warn!("Failed to delete recent history: {}", e);
        }
    }

    fn persist(&mut self) {
        if let Err(e) = self.write() {
            log::warn!("Failed to persist recent history: {}", e);
        }
    }

    fn write(&mut self) -> Result<(), StorageError> {
        let payload = serde_json::to_string(&self.entries)?;
        self.storage.store(&self.key, &payload)?;
        log::debug!(
            "Saved {} recent history entries under {}",
            self.entries.len(),
            self.key
        );
        Ok(())
    }
}

impl std::fmt::Debug for HistoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryStore")
            .field("storage", &"<storage>")
            .field("key", &self.key)
            .field("entries", &self.entries)
            .finish()
    }
}

/// Decode a persisted payload, recovering from anything unexpected
fn parse_payload(payload: &str) -> Vec<String> {
    let stored: Vec<String> = match serde_json::from_str(payload) {
        Ok(stored) => stored,
        Err(e) => {
            log::warn!("Ignoring malformed recent history payload: {}", e);
            return Vec::new();
        }
    };

    let mut entries: Vec<String> = Vec::with_capacity(HISTORY_CAPACITY);
    for label in stored {
        if entries.len() == HISTORY_CAPACITY {
            break;
        }
        if !entries.contains(&label) {
            entries.push(label);
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    /// Store that fails every operation
    struct UnavailableStore;

    impl KeyValueStore for UnavailableStore {
        fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("quota exceeded".to_string()))
        }

        fn store(&mut self, _key: &str, _payload: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("quota exceeded".to_string()))
        }

        fn delete(&mut self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("quota exceeded".to_string()))
        }
    }

    fn empty_history() -> (HistoryStore, MemoryStore) {
        let handle = MemoryStore::new();
        let history = HistoryStore::load(Box::new(handle.clone()), DEFAULT_HISTORY_KEY);
        (history, handle)
    }

    fn persisted(handle: &MemoryStore) -> Vec<String> {
        handle
            .get(DEFAULT_HISTORY_KEY)
            .map(|payload| serde_json::from_str(&payload).unwrap())
            .unwrap_or_default()
    }

    #[test]
    fn test_record_moves_to_front() {
        let (mut history, handle) = empty_history();

        history.record("Illam");
        assert_eq!(history.entries(), ["Illam"]);

        history.record("Everest");
        assert_eq!(history.entries(), ["Everest", "Illam"]);

        history.record("Illam");
        assert_eq!(history.entries(), ["Illam", "Everest"]);
        assert_eq!(persisted(&handle), vec!["Illam", "Everest"]);
    }

    #[test]
    fn test_record_evicts_oldest() {
        let handle = MemoryStore::with_entry(DEFAULT_HISTORY_KEY, r#"["a","b","c","d","e"]"#);
        let mut history = HistoryStore::load(Box::new(handle.clone()), DEFAULT_HISTORY_KEY);

        history.record("f");
        assert_eq!(history.entries(), ["f", "a", "b", "c", "d"]);
        assert_eq!(persisted(&handle), vec!["f", "a", "b", "c", "d"]);
    }

    #[test]
    fn test_record_existing_keeps_length() {
        let handle = MemoryStore::with_entry(DEFAULT_HISTORY_KEY, r#"["a","b","c","d","e"]"#);
        let mut history = HistoryStore::load(Box::new(handle), DEFAULT_HISTORY_KEY);

        history.record("d");
        assert_eq!(history.entries(), ["d", "a", "b", "c", "e"]);
    }

    #[test]
    fn test_record_sequence_keeps_invariants() {
        let (mut history, handle) = empty_history();
        let labels = ["a", "b", "a", "c", "d", "e", "f", "b", "g", "g", "a"];

        for label in labels {
            history.record(label);
            assert!(history.len() <= HISTORY_CAPACITY);
            assert_eq!(history.entries()[0], label);

            let mut unique = history.entries().to_vec();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), history.len());
            assert_eq!(persisted(&handle), history.entries());
        }
    }

    #[test]
    fn test_remove_then_record() {
        let handle = MemoryStore::with_entry(DEFAULT_HISTORY_KEY, r#"["a","b","c"]"#);
        let mut history = HistoryStore::load(Box::new(handle.clone()), DEFAULT_HISTORY_KEY);

        assert!(history.remove("b"));
        assert_eq!(persisted(&handle), vec!["a", "c"]);

        history.record("b");
        assert_eq!(history.entries(), ["b", "a", "c"]);
    }

    #[test]
    fn test_remove_missing_label() {
        let (mut history, handle) = empty_history();
        history.record("Lumbini");
        assert!(!history.remove("Pokhara"));
        assert_eq!(persisted(&handle), vec!["Lumbini"]);
    }

    #[test]
    fn test_clear_deletes_key() {
        let (mut history, handle) = empty_history();
        history.record("Lumbini");
        history.clear();

        assert!(history.is_empty());
        assert!(handle.get(DEFAULT_HISTORY_KEY).is_none());
    }

    #[test]
    fn test_load_malformed_payload() {
        let handle = MemoryStore::with_entry(DEFAULT_HISTORY_KEY, "not json at all {");
        let history = HistoryStore::load(Box::new(handle), DEFAULT_HISTORY_KEY);
        assert!(history.is_empty());
    }

    #[test]
    fn test_load_wrong_shape() {
        for payload in [r#"{"recent": ["a"]}"#, r#"[1, 2, 3]"#, r#""Illam""#, "null"] {
            let handle = MemoryStore::with_entry(DEFAULT_HISTORY_KEY, payload);
            let history = HistoryStore::load(Box::new(handle), DEFAULT_HISTORY_KEY);
            assert!(history.is_empty(), "payload {}", payload);
        }
    }

    #[test]
    fn test_load_truncates_oversized_payload() {
        let handle = MemoryStore::with_entry(
            DEFAULT_HISTORY_KEY,
            r#"["a","b","c","d","e","f","g"]"#,
        );
        let history = HistoryStore::load(Box::new(handle), DEFAULT_HISTORY_KEY);
        assert_eq!(history.entries(), ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_load_drops_duplicates() {
        let handle = MemoryStore::with_entry(DEFAULT_HISTORY_KEY, r#"["a","a","b","a","c"]"#);
        let history = HistoryStore::load(Box::new(handle), DEFAULT_HISTORY_KEY);
        assert_eq!(history.entries(), ["a", "b", "c"]);
    }

    #[test]
    fn test_unavailable_storage_degrades() {
        let mut history = HistoryStore::load(Box::new(UnavailableStore), DEFAULT_HISTORY_KEY);
        assert!(history.is_empty());

        // Writes fail silently, the in-memory list keeps working
        history.record("Illam");
        assert_eq!(history.entries(), ["Illam"]);
        assert!(history.remove("Illam"));
        history.clear();
        assert!(history.is_empty());
    }
}
