//! Process-lifetime memoization of the plugin-tree catalog.

use std::sync::{Arc, Mutex, PoisonError};

use super::CapabilityRecord;

/// Owned lazy cache for the plugin-tree catalog.
///
/// The plugin tree only changes when plugins are (un)installed, so it is
/// computed once per process and held until [`CatalogCache::invalidate`].
/// The check-then-compute sequence is guarded by a mutex, so a shared cache
/// is safe; the flat agents directory is deliberately not cached because it
/// is user-edited between invocations.
#[derive(Debug, Default)]
pub struct CatalogCache {
    records: Mutex<Option<Arc<Vec<CapabilityRecord>>>>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached catalog, computing it on first access.
    pub fn get_or_compute<F>(&self, compute: F) -> Arc<Vec<CapabilityRecord>>
    where
        F: FnOnce() -> Vec<CapabilityRecord>,
    {
        let mut slot = self
            .records
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(records) = slot.as_ref() {
            return Arc::clone(records);
        }
        let records = Arc::new(compute());
        *slot = Some(Arc::clone(&records));
        records
    }

    /// Drop the cached catalog so the next access recomputes it.
    pub fn invalidate(&self) {
        let mut slot = self
            .records
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *slot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> CapabilityRecord {
        CapabilityRecord {
            name: name.to_string(),
            description: "desc".to_string(),
            category: "lang".to_string(),
        }
    }

    #[test]
    fn computes_exactly_once() {
        let cache = CatalogCache::new();
        let mut calls = 0;

        let first = cache.get_or_compute(|| {
            calls += 1;
            vec![record("a")]
        });
        let second = cache.get_or_compute(|| {
            calls += 1;
            vec![record("b")]
        });

        assert_eq!(calls, 1);
        assert_eq!(first[0].name, "a");
        assert_eq!(second[0].name, "a");
    }

    #[test]
    fn invalidate_forces_recompute() {
        let cache = CatalogCache::new();

        let first = cache.get_or_compute(|| vec![record("before")]);
        assert_eq!(first[0].name, "before");

        cache.invalidate();

        let second = cache.get_or_compute(|| vec![record("after")]);
        assert_eq!(second[0].name, "after");
    }

    #[test]
    fn empty_result_is_cached_too() {
        let cache = CatalogCache::new();
        let mut calls = 0;

        cache.get_or_compute(|| {
            calls += 1;
            Vec::new()
        });
        let cached = cache.get_or_compute(|| {
            calls += 1;
            vec![record("x")]
        });

        assert_eq!(calls, 1);
        assert!(cached.is_empty());
    }
}
