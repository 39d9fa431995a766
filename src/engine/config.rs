use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    // falseの場合は有用な分解への絞り込みを行わない (検証用)
    pub prune_useful: bool,
    pub cache_enabled: bool,
    // キャッシュ毎の上限 超過時は古いものから破棄
    pub max_cache_entries: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            prune_useful: true,
            cache_enabled: true,
            max_cache_entries: None,
        }
    }
}

impl EngineConfig {
    pub fn from_json(s: &str) -> Result<Self, Error> {
        serde_json::from_str(s).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&s)
    }
}

#[test]
fn test_config_from_json() {
    let c = EngineConfig::from_json("{}").unwrap();
    assert_eq!(c, EngineConfig::default());

    let c = EngineConfig::from_json(r#"{"prune_useful": false, "max_cache_entries": 100}"#)
        .unwrap();
    assert!(!c.prune_useful);
    assert!(c.cache_enabled);
    assert_eq!(c.max_cache_entries, Some(100));

    assert!(matches!(
        EngineConfig::from_json(r#"{"cache": false}"#),
        Err(Error::Config(_))
    ));
    assert!(EngineConfig::load("no/such/config.json").is_err());
}
