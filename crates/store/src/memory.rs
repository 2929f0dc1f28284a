use std::sync::Mutex;

use shelfy_core::catalog::Catalog;
use shelfy_core::snapshot::{decode_catalog, encode_catalog, SnapshotError, SnapshotStore};

/// Keeps every saved snapshot in memory, newest last. Ephemeral sessions run
/// on this, and tests use the history to assert when persistence happened.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    snapshots: Mutex<Vec<String>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(catalog: &Catalog) -> Result<Self, SnapshotError> {
        let store = Self::new();
        store.save(catalog)?;
        Ok(store)
    }

    pub fn save_count(&self) -> usize {
        self.lock().len()
    }

    /// The most recent snapshot as its serialized form.
    pub fn latest(&self) -> Option<String> {
        self.lock().last().cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.snapshots.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn load(&self) -> Result<Option<Catalog>, SnapshotError> {
        match self.lock().last() {
            Some(raw) => Ok(Some(decode_catalog(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, catalog: &Catalog) -> Result<(), SnapshotError> {
        let encoded = encode_catalog(catalog)?;
        self.lock().push(encoded);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use shelfy_core::Product;

    use super::*;

    #[test]
    fn fresh_store_has_no_snapshot() {
        let store = InMemorySnapshotStore::new();

        assert!(store.load().expect("load").is_none());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn load_returns_the_latest_save() {
        let store = InMemorySnapshotStore::new();

        let mut catalog = Catalog::starter();
        store.save(&catalog).expect("first save");
        catalog.push(Product::new("Mobile Phone", 12000, "Electronics", 3));
        store.save(&catalog).expect("second save");

        let loaded = store.load().expect("load").expect("snapshot present");
        assert_eq!(loaded, catalog);
        assert_eq!(store.save_count(), 2);
    }

    #[test]
    fn seeded_store_starts_with_one_snapshot() {
        let catalog = Catalog::starter();
        let store = InMemorySnapshotStore::seeded(&catalog).expect("seed");

        assert_eq!(store.save_count(), 1);
        assert_eq!(store.load().expect("load"), Some(catalog));
    }
}
