use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::domain::covers::{CoverArtifact, CoverRequest, generate_cover};

/// Number of distinct covers kept before the cache is flushed.
pub const DEFAULT_COVER_CACHE_CAPACITY: usize = 256;

/// Memoizes generated covers. Output is byte-identical to calling
/// [`generate_cover`] directly.
#[derive(Clone)]
pub struct CoverService {
    cache: Arc<Mutex<HashMap<CoverRequest, Arc<CoverArtifact>>>>,
    capacity: usize,
}

impl Default for CoverService {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_COVER_CACHE_CAPACITY)
    }
}

impl CoverService {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: Arc::new(Mutex::new(HashMap::new())),
            capacity,
        }
    }

    pub fn cover(&self, request: &CoverRequest) -> Arc<CoverArtifact> {
        if let Some(hit) = self.lock().get(request) {
            return Arc::clone(hit);
        }

        // Generated outside the lock.
        let artifact = Arc::new(generate_cover(request));

        if self.capacity == 0 {
            return artifact;
        }

        let mut cache = self.lock();
        if cache.len() >= self.capacity {
            debug!(entries = cache.len(), "flushing cover cache");
            cache.clear();
        }
        cache.insert(request.clone(), Arc::clone(&artifact));
        artifact
    }

    pub fn cached_len(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<CoverRequest, Arc<CoverArtifact>>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
