//! Table Cache
//!
//! Parsed tables are shared for the lifetime of the cache. The process-wide
//! instance returned by [`global`] is what the formatter uses by default.

use crate::{LanguageTable, Result, TableSource};
use once_cell::sync::{Lazy, OnceCell};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use timeago_log::{debug, error, trace};

static GLOBAL: Lazy<TableCache> = Lazy::new(TableCache::new);

/// The process-wide table cache.
pub fn global() -> &'static TableCache {
    &GLOBAL
}

type Slot = Arc<OnceCell<Arc<LanguageTable>>>;

/// Thread-safe cache of parsed language tables, keyed by source key.
///
/// Each key has its own slot. Concurrent misses on one key wait for a single
/// load; other keys are never blocked by it. Failed loads are not stored.
///
/// A [`TableSource`] may use the cache from inside `load`, but not for the
/// key it is loading.
#[derive(Debug, Default)]
pub struct TableCache {
    tables: RwLock<HashMap<String, Slot>>,
}

impl TableCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached table for `language`, loading it from `source` on first use.
    pub fn get_or_load(
        &self,
        source: &dyn TableSource,
        language: &str,
    ) -> Result<Arc<LanguageTable>> {
        let key = source.key(language);
        let slot = self.slot(&key);

        if let Some(table) = slot.get() {
            trace!(target: "timeago::cache", "hit {}", key);
            return Ok(Arc::clone(table));
        }

        let loaded = slot.get_or_try_init(|| {
            debug!(target: "timeago::cache", "loading language table {}", key);
            source.load(language).map(Arc::new)
        });

        match loaded {
            Ok(table) => Ok(Arc::clone(table)),
            Err(e) => {
                error!(target: "timeago::cache", "failed to load {}: {}", key, e);
                let mut tables = self.tables.write();
                if tables.get(&key).is_some_and(|s| s.get().is_none()) {
                    tables.remove(&key);
                }
                Err(e)
            }
        }
    }

    fn slot(&self, key: &str) -> Slot {
        if let Some(slot) = self.tables.read().get(key) {
            return Arc::clone(slot);
        }
        Arc::clone(self.tables.write().entry(key.to_string()).or_default())
    }

    /// Cached table under `key`, if any.
    pub fn get(&self, key: &str) -> Option<Arc<LanguageTable>> {
        self.tables.read().get(key).and_then(|slot| slot.get().cloned())
    }

    /// Check if a key is cached.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of cached tables.
    pub fn len(&self) -> usize {
        self.tables
            .read()
            .values()
            .filter(|slot| slot.get().is_some())
            .count()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached table.
    pub fn clear(&self) {
        self.tables.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EmbeddedSource, I18nError};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Embedded source that counts loads.
    #[derive(Default)]
    struct CountingSource {
        loads: AtomicUsize,
    }

    impl TableSource for CountingSource {
        fn key(&self, language: &str) -> String {
            format!("counting:{}", language)
        }

        fn load(&self, language: &str) -> Result<LanguageTable> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            EmbeddedSource.load(language)
        }
    }

    #[test]
    fn test_second_lookup_is_cached() {
        let cache = TableCache::new();
        let source = CountingSource::default();

        let first = cache.get_or_load(&source, "en").unwrap();
        let second = cache.get_or_load(&source, "en").unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
        assert_eq!(source.loads.load(Ordering::SeqCst), 1);
        assert!(cache.contains("counting:en"));
    }

    #[test]
    fn test_failed_load_is_not_cached() {
        let cache = TableCache::new();
        let source = CountingSource::default();

        let err = cache.get_or_load(&source, "zz").unwrap_err();
        assert!(matches!(err, I18nError::TableNotFound { .. }));
        assert!(cache.is_empty());

        assert!(cache.get_or_load(&source, "zz").is_err());
        assert_eq!(source.loads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_clear() {
        let cache = TableCache::new();
        let source = CountingSource::default();

        cache.get_or_load(&source, "en").unwrap();
        cache.get_or_load(&source, "ru").unwrap();
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());

        cache.get_or_load(&source, "en").unwrap();
        assert_eq!(source.loads.load(Ordering::SeqCst), 3);
    }

    /// Source whose tables are built from another language in the same cache.
    struct DerivedSource<'a> {
        cache: &'a TableCache,
        base: &'static str,
    }

    impl TableSource for DerivedSource<'_> {
        fn key(&self, language: &str) -> String {
            format!("derived:{}", language)
        }

        fn load(&self, _language: &str) -> Result<LanguageTable> {
            let base = self.cache.get_or_load(&EmbeddedSource, self.base)?;
            Ok((*base).clone())
        }
    }

    #[test]
    fn test_source_can_use_cache_for_other_keys() {
        let cache = TableCache::new();
        let source = DerivedSource {
            cache: &cache,
            base: "uk",
        };

        let table = cache.get_or_load(&source, "uk-x").unwrap();
        assert_eq!(table.language(), "uk");
        assert!(cache.contains("embedded:uk"));
        assert!(cache.contains("derived:uk-x"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_concurrent_loads_happen_once() {
        let cache = Arc::new(TableCache::new());
        let source = Arc::new(CountingSource::default());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let source = Arc::clone(&source);
                std::thread::spawn(move || cache.get_or_load(source.as_ref(), "ru").unwrap())
            })
            .collect();

        let tables: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(source.loads.load(Ordering::SeqCst), 1);
        assert!(tables.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    }
}
