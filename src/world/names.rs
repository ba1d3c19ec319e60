use crate::entities::guid::ObjectGuid;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Cached character identity used by name queries for offline actors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterInfo {
    pub name: String,
    pub race: u8,
    pub sex: u8,
    pub class: u8,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NameCacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl NameCacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64) / (total as f64)
        }
    }
}

/// Character cache with LRU eviction.
pub struct NameCache {
    cache: LruCache<ObjectGuid, CharacterInfo>,
    stats: NameCacheStats,
}

impl NameCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap();
        Self {
            cache: LruCache::new(capacity),
            stats: NameCacheStats::default(),
        }
    }

    pub fn put(&mut self, guid: ObjectGuid, info: CharacterInfo) {
        self.cache.put(guid, info);
    }

    pub fn get(&mut self, guid: ObjectGuid) -> Option<&CharacterInfo> {
        match self.cache.get(&guid) {
            Some(info) => {
                self.stats.hits += 1;
                Some(info)
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn stats(&self) -> NameCacheStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: &str) -> CharacterInfo {
        CharacterInfo {
            name: name.to_string(),
            race: 1,
            sex: 0,
            class: 2,
        }
    }

    #[test]
    fn hit_and_miss_accounting() {
        let mut cache = NameCache::new(4);
        let guid = ObjectGuid::player(1);
        assert!(cache.get(guid).is_none());
        cache.put(guid, info("Aldric"));
        assert_eq!(cache.get(guid).map(|i| i.name.as_str()), Some("Aldric"));
        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert!(stats.hit_rate() > 0.49 && stats.hit_rate() < 0.51);
    }

    #[test]
    fn evicts_least_recently_used() {
        let mut cache = NameCache::new(2);
        let a = ObjectGuid::player(1);
        let b = ObjectGuid::player(2);
        let c = ObjectGuid::player(3);
        cache.put(a, info("A"));
        cache.put(b, info("B"));
        assert!(cache.get(a).is_some());
        cache.put(c, info("C"));
        assert!(cache.get(b).is_none());
        assert!(cache.get(a).is_some());
        assert!(cache.get(c).is_some());
        assert_eq!(cache.len(), 2);
    }
}
