use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

use crate::{algorithm::StationTimes, graph::StationIndex};

/// memoizes one-to-all travel times by origin station. entries are only
/// ever inserted whole, so a poisoned lock still guards consistent data
/// and is recovered from.
#[derive(Debug, Default)]
pub struct TravelTimeCache(RwLock<HashMap<StationIndex, Arc<StationTimes>>>);

impl TravelTimeCache {
    pub fn get(&self, origin: &StationIndex) -> Option<Arc<StationTimes>> {
        let lookup = self.0.read().unwrap_or_else(PoisonError::into_inner);
        lookup.get(origin).cloned()
    }

    /// returns the cached times for this origin, computing them with `f` on a
    /// miss. `f` runs outside of the lock, so concurrent misses for the same
    /// origin may both compute; the first insert wins.
    pub fn get_or_insert_with<F>(&self, origin: StationIndex, f: F) -> Arc<StationTimes>
    where
        F: FnOnce() -> StationTimes,
    {
        if let Some(times) = self.get(&origin) {
            return times;
        }
        log::debug!("travel time cache miss for station index {origin}");
        let times = Arc::new(f());
        let mut lookup = self.0.write().unwrap_or_else(PoisonError::into_inner);
        lookup.entry(origin).or_insert(times).clone()
    }

    pub fn len(&self) -> usize {
        self.0.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
