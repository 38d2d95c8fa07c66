//! Per-type resolution cache with at-most-one durable outcome.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::warn;

use crate::adapter::AdapterDescriptor;
use crate::error::ResolutionError;

/// The durable outcome of one host-shape resolution.
pub type Resolution = Arc<Result<AdapterDescriptor, ResolutionError>>;

/// Caches host-shape resolutions per wrapper type.
///
/// Resolution runs at most once per key in the durable sense: concurrent
/// first-use races may redundantly invoke the resolver, but the first
/// outcome stored wins and every caller converges on it. A
/// [`ResolutionError`] is cached as permanently failed - it is never
/// retried on subsequent packets.
#[derive(Debug, Default)]
pub struct ResolutionCache {
    entries: Mutex<HashMap<&'static str, Resolution>>,
}

impl ResolutionCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached outcome for `key`, if resolution has happened.
    #[must_use]
    pub fn get(&self, key: &'static str) -> Option<Resolution> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Returns the outcome for `key`, running `resolver` if no durable
    /// outcome exists yet.
    ///
    /// The resolver runs outside the lock, so parallel first uses may each
    /// compute; whichever result is inserted first becomes the durable
    /// outcome for everyone.
    pub fn resolve_with<F>(&self, key: &'static str, resolver: F) -> Resolution
    where
        F: FnOnce() -> Result<AdapterDescriptor, ResolutionError>,
    {
        if let Some(existing) = self.get(key) {
            return existing;
        }

        let computed = Arc::new(resolver());

        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let stored = entries.entry(key).or_insert_with(|| {
            if let Err(err) = computed.as_ref() {
                warn!(key, error = %err, "host shape resolution failed permanently");
            }
            Arc::clone(&computed)
        });
        Arc::clone(stored)
    }

    /// Number of types with a durable outcome.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if nothing has been resolved yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
