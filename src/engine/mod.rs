// 分解エンジン本体 (設定とメモ化テーブルを保持するコンテキスト)
mod cache;
mod config;

use std::hash::Hash;
use std::sync::{Arc, OnceLock};

use serde::Serialize;

pub use cache::{CacheStats, MemoCache};
pub use config::EngineConfig;

use crate::debug;
use crate::hand::Partitions;
use crate::model::{Tile, Value, VariantSet};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EngineStats {
    pub partition: CacheStats,
    pub useful: CacheStats,
    pub compose: CacheStats,
}

#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    pub(crate) partition_cache: MemoCache<Vec<Value>, Partitions>,
    pub(crate) useful_cache: MemoCache<Vec<Value>, Partitions>,
    pub(crate) compose_cache: MemoCache<Vec<Tile>, VariantSet>,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let limit = config.max_cache_entries;
        Self {
            config,
            partition_cache: MemoCache::new(limit),
            useful_cache: MemoCache::new(limit),
            compose_cache: MemoCache::new(limit),
        }
    }

    // プロセス全体で共有するエンジン (デフォルト設定)
    pub fn global() -> &'static Engine {
        static ENGINE: OnceLock<Engine> = OnceLock::new();
        ENGINE.get_or_init(Engine::default)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            partition: self.partition_cache.stats(),
            useful: self.useful_cache.stats(),
            compose: self.compose_cache.stats(),
        }
    }

    pub fn clear_caches(&self) {
        self.partition_cache.clear();
        self.useful_cache.clear();
        self.compose_cache.clear();
    }

    // キャッシュが有効ならcacheを経由してfの結果を返却
    // 計算中はロックを保持しないので同じキーを二重に計算することはありうる
    pub(crate) fn memoize<K, V, F>(
        &self,
        name: &str,
        cache: &MemoCache<K, V>,
        key: K,
        f: F,
    ) -> Result<Arc<V>, crate::Error>
    where
        K: Eq + Hash + Clone + std::fmt::Debug,
        F: FnOnce(&K) -> Result<V, crate::Error>,
    {
        if !self.config.cache_enabled {
            return f(&key).map(Arc::new);
        }
        if let Some(v) = cache.get(&key) {
            return Ok(v);
        }

        debug!("{} cache miss: {:?}", name, key);
        let v = Arc::new(f(&key)?);
        let (v, n_evicted) = cache.insert(key, v);
        if n_evicted > 0 {
            debug!("{} cache evicted {} entries", name, n_evicted);
        }
        Ok(v)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
