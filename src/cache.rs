//! Resolved-address cache keyed by canonical postal code.

use std::sync::Arc;

use dashmap::DashMap;

use crate::schema::Address;

/// Storage for resolved addresses. Entries never expire; only [`clear`](AddressCache::clear)
/// removes them.
pub trait AddressCache: Send + Sync {
    fn get(&self, code: &str) -> Option<Address>;
    fn set(&self, code: &str, address: Address);
    fn clear(&self);
}

/// Process-local cache backed by a sharded concurrent map.
///
/// Clones share the same store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCache {
    store: Arc<DashMap<String, Address>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl AddressCache for InMemoryCache {
    fn get(&self, code: &str) -> Option<Address> {
        self.store.get(code).map(|entry| entry.value().clone())
    }

    fn set(&self, code: &str, address: Address) {
        self.store.insert(code.to_string(), address);
    }

    fn clear(&self) {
        self.store.clear();
    }
}
