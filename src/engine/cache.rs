use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: usize,
    pub misses: usize,
}

#[derive(Debug)]
struct CacheInner<K, V> {
    map: HashMap<K, Arc<V>>,
    order: VecDeque<K>, // 挿入順
}

// 追記のみのメモ化テーブル
// limitを超えた場合のみ古いものから破棄する
#[derive(Debug)]
pub struct MemoCache<K, V> {
    inner: RwLock<CacheInner<K, V>>,
    limit: Option<usize>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl<K: Eq + Hash + Clone, V> MemoCache<K, V> {
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            inner: RwLock::new(CacheInner {
                map: HashMap::new(),
                order: VecDeque::new(),
            }),
            limit,
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        let v = inner.map.get(key).cloned();
        if v.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        v
    }

    // 既に登録済みの場合は先に登録された値を返却
    // 破棄した件数も返却
    pub fn insert(&self, key: K, value: Arc<V>) -> (Arc<V>, usize) {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        if let Some(v) = inner.map.get(&key) {
            return (v.clone(), 0);
        }
        inner.map.insert(key.clone(), value.clone());
        inner.order.push_back(key);

        let mut n_evicted = 0;
        if let Some(limit) = self.limit {
            while inner.map.len() > limit {
                match inner.order.pop_front() {
                    Some(k) => {
                        inner.map.remove(&k);
                        n_evicted += 1;
                    }
                    None => break,
                }
            }
        }
        (value, n_evicted)
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        inner.map.clear();
        inner.order.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_get() {
        let cache: MemoCache<u32, String> = MemoCache::new(None);
        assert!(cache.get(&1).is_none());
        cache.insert(1, Arc::new("a".to_string()));
        assert_eq!(cache.get(&1).unwrap().as_str(), "a");
        assert_eq!(
            cache.stats(),
            CacheStats {
                entries: 1,
                hits: 1,
                misses: 1
            }
        );
    }

    #[test]
    fn test_double_insert() {
        let cache: MemoCache<u32, String> = MemoCache::new(None);
        let (v1, _) = cache.insert(1, Arc::new("a".to_string()));
        let (v2, _) = cache.insert(1, Arc::new("b".to_string()));
        assert!(Arc::ptr_eq(&v1, &v2));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_evict_oldest() {
        let cache: MemoCache<u32, u32> = MemoCache::new(Some(2));
        cache.insert(1, Arc::new(10));
        cache.insert(2, Arc::new(20));
        let (_, n) = cache.insert(3, Arc::new(30));
        assert_eq!(n, 1);
        assert_eq!(cache.len(), 2);
        assert!(cache.get(&1).is_none());
        assert_eq!(*cache.get(&2).unwrap(), 20);
        assert_eq!(*cache.get(&3).unwrap(), 30);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats(), CacheStats::default());
    }
}
