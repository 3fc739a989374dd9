//! Best-effort persistence of the last selection
//!
//! [`KeyValueStore`] is the raw medium (browser `localStorage`, an in-memory
//! map in tests). [`PreferenceStore`] layers the two fixed keys on top and
//! never lets a storage failure escape: writes are logged and dropped, reads
//! degrade to "nothing stored".

use crate::config::StorageConfig;
use crate::error::StoreResult;
use crate::selection::Selection;

/// Origin-scoped string key/value medium
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

/// What [`PreferenceStore::load`] found. Absent fields fall back to defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoredPreference {
    pub brand: Option<String>,
    pub mode: Option<String>,
}

impl StoredPreference {
    /// Fill absent fields from `defaults`
    pub fn resolve(self, defaults: &Selection) -> Selection {
        Selection::new(
            self.brand.unwrap_or_else(|| defaults.brand().to_string()),
            self.mode.unwrap_or_else(|| defaults.mode().to_string()),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.brand.is_none() && self.mode.is_none()
    }
}

/// Selection persistence under two fixed keys
#[derive(Debug)]
pub struct PreferenceStore<S> {
    backend: S,
    keys: StorageConfig,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(backend: S, keys: StorageConfig) -> Self {
        Self { backend, keys }
    }

    /// Persist both halves of the selection. Failures are logged as warnings
    /// and otherwise ignored; returns whether both writes succeeded.
    ///
    /// A failed mode write puts the previous brand back, so storage never
    /// holds a pair that was not selected together.
    pub fn save(&mut self, brand: &str, mode: &str) -> bool {
        let previous_brand = match self.backend.get(&self.keys.brand_key) {
            Ok(previous) => previous,
            Err(err) => {
                tracing::warn!(brand, mode, error = %err, "could not persist theme selection");
                return false;
            }
        };

        if let Err(err) = self.backend.set(&self.keys.brand_key, brand) {
            tracing::warn!(brand, mode, error = %err, "could not persist theme selection");
            return false;
        }

        match self.backend.set(&self.keys.mode_key, mode) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(brand, mode, error = %err, "could not persist theme selection");
                self.restore_brand(previous_brand.as_deref());
                false
            }
        }
    }

    fn restore_brand(&mut self, previous: Option<&str>) {
        let key = &self.keys.brand_key;
        let restored = match previous {
            Some(value) => self.backend.set(key, value),
            None => self.backend.remove(key),
        };
        if let Err(err) = restored {
            tracing::warn!(error = %err, "could not roll back stored brand");
        }
    }

    /// Read both keys. Any read failure yields an empty preference. Empty
    /// stored strings count as absent.
    pub fn load(&self) -> StoredPreference {
        let read = |key: &str| -> StoreResult<Option<String>> {
            Ok(self.backend.get(key)?.filter(|value| !value.is_empty()))
        };

        match (read(&self.keys.brand_key), read(&self.keys.mode_key)) {
            (Ok(brand), Ok(mode)) => StoredPreference { brand, mode },
            (Err(err), _) | (_, Err(err)) => {
                tracing::warn!(error = %err, "could not read stored theme selection");
                StoredPreference::default()
            }
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryStore;

    fn store(backend: MemoryStore) -> PreferenceStore<MemoryStore> {
        PreferenceStore::new(backend, StorageConfig::default())
    }

    #[test]
    fn save_then_load() {
        let mut prefs = store(MemoryStore::new());
        assert!(prefs.save("Brand-B", "Darkmode"));
        assert_eq!(
            prefs.load(),
            StoredPreference {
                brand: Some("Brand-B".into()),
                mode: Some("Darkmode".into()),
            }
        );
    }

    #[test]
    fn write_failure_is_swallowed() {
        let mut prefs = store(MemoryStore::new().failing_writes());
        assert!(!prefs.save("Brand-B", "Darkmode"));
        assert!(prefs.backend().is_empty());
    }

    #[test]
    fn read_failure_yields_nothing() {
        let prefs = store(
            MemoryStore::new()
                .with_entry("brand", "Brand-B")
                .failing_reads(),
        );
        assert!(prefs.load().is_empty());
    }

    #[test]
    fn empty_values_count_as_absent() {
        let prefs = store(
            MemoryStore::new()
                .with_entry("brand", "")
                .with_entry("mode", "Darkmode"),
        );
        let defaults = Selection::new("Brand-A", "Lightmode");
        assert_eq!(
            prefs.load().resolve(&defaults),
            Selection::new("Brand-A", "Darkmode")
        );
    }

    #[test]
    fn failed_mode_write_restores_previous_brand() {
        let mut prefs = store(MemoryStore::new().failing_writes_for("mode"));
        prefs.backend_mut().set("brand", "Brand-A").unwrap();

        assert!(!prefs.save("Brand-B", "Darkmode"));

        assert_eq!(prefs.backend().entry("brand"), Some("Brand-A"));
        assert_eq!(prefs.backend().entry("mode"), None);
    }

    #[test]
    fn failed_mode_write_removes_fresh_brand() {
        let mut prefs = store(MemoryStore::new().failing_writes_for("mode"));

        assert!(!prefs.save("Brand-B", "Darkmode"));

        assert!(prefs.load().is_empty());
    }

    #[test]
    fn writes_resume_after_recovery() {
        let mut prefs = store(MemoryStore::new().failing_writes());
        assert!(!prefs.save("Brand-A", "Darkmode"));

        prefs.backend_mut().set_fail_writes(false);
        assert!(prefs.save("Brand-A", "Darkmode"));
        assert_eq!(prefs.backend().entry("mode"), Some("Darkmode"));
    }
}
