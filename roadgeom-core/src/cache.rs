//! Bounded FIFO caching of road segments.

use std::collections::VecDeque;
use std::hash::Hash;

use hashbrown::HashMap;

use crate::loading::RoadLoader;
use crate::model::RoadSegment;
use crate::{Error, FeatureId};

/// Fixed-capacity cache with insertion-order eviction and a load-on-miss
/// strategy captured at construction.
///
/// Eviction is strictly FIFO: when full, the earliest-inserted key goes
/// first, and accessing a resident key does not refresh its eviction order.
/// The policy suits the sequential access pattern of a single path search;
/// it is deliberately not LRU. A failed load leaves the cache unchanged, so
/// the next request for the same key retries.
pub struct FifoCache<K, V, F> {
    values: HashMap<K, V>,
    order: VecDeque<K>,
    capacity: usize,
    load: F,
}

impl<K, V, F> FifoCache<K, V, F>
where
    K: Copy + Eq + Hash,
    V: Default,
    F: FnMut(K, &mut V) -> Result<(), Error>,
{
    /// # Panics
    ///
    /// Panics on zero capacity.
    pub fn new(capacity: usize, load: F) -> Self {
        assert!(capacity > 0, "cache capacity must be positive");
        Self {
            values: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            capacity,
            load,
        }
    }

    /// Resident value for `key`, loading it on miss. At most one load is
    /// performed per resident key.
    pub fn get(&mut self, key: K) -> Result<&V, Error> {
        if self.values.contains_key(&key) {
            return Ok(&self.values[&key]);
        }

        let mut value = V::default();
        (self.load)(key, &mut value)?;

        if self.values.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.values.remove(&oldest);
            }
        }
        self.order.push_back(key);
        Ok(self.values.entry(key).or_insert(value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, key: K) -> bool {
        self.values.contains_key(&key)
    }
}

type BoxedRoadLoadFn = Box<dyn FnMut(FeatureId, &mut RoadSegment) -> Result<(), Error>>;

/// Binds one [`RoadLoader`] to a FIFO cache keyed by feature id: the surface
/// a path search reads roads through.
///
/// Single-owner by design: `get_road` takes `&mut self`, performs any load
/// inline and returns a borrow of the resident segment, which therefore
/// cannot be retained across another call.
pub struct RoadCache {
    roads: FifoCache<FeatureId, RoadSegment, BoxedRoadLoadFn>,
}

impl RoadCache {
    /// # Panics
    ///
    /// Panics on zero capacity.
    pub fn new(loader: Box<dyn RoadLoader>, capacity: usize) -> Self {
        let load: BoxedRoadLoadFn =
            Box::new(move |feature_id, segment| loader.load_road(feature_id, segment));
        Self {
            roads: FifoCache::new(capacity, load),
        }
    }

    /// Road segment for a feature id. A hit returns the resident segment
    /// unchanged; a miss loads synchronously through the bound loader. A
    /// failed load caches nothing and propagates.
    pub fn get_road(&mut self, feature_id: FeatureId) -> Result<&RoadSegment, Error> {
        self.roads.get(feature_id)
    }

    pub fn resident_roads(&self) -> usize {
        self.roads.len()
    }
}
