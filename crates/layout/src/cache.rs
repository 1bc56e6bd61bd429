use crate::engine::SlideLayout;
use slidefit_types::SlideContentModel;
use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

// --- Cache Keys ---

/// Content hash of a slide. Equal models always produce equal keys.
#[derive(Hash, PartialEq, Eq, Clone, Copy, Debug)]
pub struct ContentHash(u64);

impl ContentHash {
    pub fn of(model: &SlideContentModel) -> Self {
        let mut hasher = DefaultHasher::new();
        model.hash(&mut hasher);
        Self(hasher.finish())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub entries: usize,
}

// --- The Manager ---

/// Entries kept by [`LayoutCache::new`].
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

type Entries = HashMap<ContentHash, (SlideContentModel, Arc<SlideLayout>)>;

/// Memoizes slide layouts by content hash.
///
/// Layout is a pure function of the model and the engine configuration, so
/// a cache must only ever be used with a single engine. The stored model is
/// compared on lookup to rule out hash collisions.
///
/// The cache lives as long as its pipeline and never evicts. Once
/// `capacity` entries are stored, further layouts are computed and returned
/// but not remembered; `clear()` makes room again.
pub struct LayoutCache {
    entries: RwLock<Entries>,
    capacity: usize,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            capacity,
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, model: &SlideContentModel) -> Option<Arc<SlideLayout>> {
        let key = ContentHash::of(model);
        let found = self.entries.read().ok().and_then(|entries| {
            entries
                .get(&key)
                .filter(|(stored, _)| stored == model)
                .map(|(_, layout)| Arc::clone(layout))
        });
        match found {
            Some(_) => self.hits.fetch_add(1, Ordering::Relaxed),
            None => self.misses.fetch_add(1, Ordering::Relaxed),
        };
        found
    }

    pub fn insert(&self, model: &SlideContentModel, layout: SlideLayout) -> Arc<SlideLayout> {
        let layout = Arc::new(layout);
        if let Ok(mut entries) = self.entries.write() {
            let key = ContentHash::of(model);
            if entries.len() < self.capacity || entries.contains_key(&key) {
                entries.insert(key, (model.clone(), Arc::clone(&layout)));
            }
        }
        layout
    }

    /// Returns the cached layout or computes, stores and returns it.
    /// Errors are not cached.
    pub fn get_or_compute<E, F>(
        &self,
        model: &SlideContentModel,
        compute: F,
    ) -> Result<Arc<SlideLayout>, E>
    where
        F: FnOnce() -> Result<SlideLayout, E>,
    {
        if let Some(layout) = self.get(model) {
            return Ok(layout);
        }
        Ok(self.insert(model, compute()?))
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }

    pub fn clear(&self) {
        if let Ok(mut c) = self.entries.write() { c.clear(); }
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}
