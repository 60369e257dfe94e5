//! Request-scoped memo of resolved navigation.
//!
//! Uses moka's concurrent cache implementation.

use moka::sync::Cache;

use crate::navigation::NavigationResult;

/// Everything a [`NavigationResult`] depends on within one request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavigationKey {
    pub menu_id: String,
    pub active_id: String,
    pub restrict_to_parent: bool,
}

impl NavigationKey {
    pub fn new(
        menu_id: impl Into<String>,
        active_id: impl Into<String>,
        restrict_to_parent: bool,
    ) -> Self {
        Self {
            menu_id: menu_id.into(),
            active_id: active_id.into(),
            restrict_to_parent,
        }
    }
}

/// Thread-safe cache of navigation results, bounded by capacity.
///
/// Entries are never invalidated individually; [`NavigationCache::clear`]
/// drops everything at the end of a request.
#[derive(Clone)]
pub struct NavigationCache {
    results: Cache<NavigationKey, NavigationResult>,
}

impl NavigationCache {
    /// Allocate a new [`NavigationCache`].
    pub fn new(capacity: u64) -> Self {
        Self {
            results: Cache::new(capacity),
        }
    }

    pub fn set(
        &self,
        key: NavigationKey,
        value: NavigationResult,
    ) {
        self.results.insert(key, value);
    }

    pub fn get(
        &self,
        key: &NavigationKey,
    ) -> Option<NavigationResult> {
        self.results.get(key)
    }

    /// Drop every cached result.
    pub fn clear(&self) {
        self.results.invalidate_all();
    }
}
