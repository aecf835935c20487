use crate::engine::put::PutConfig;
use crate::engine::put::config::{FAMILY_TAG, TABLE_NAME_TAG, ZOOKEEPER_QUORUM_TAG};
use crate::engine::errors::ConfigError;
use std::collections::BTreeMap;

/// Factory for function configuration maps, prefilled with the required keys.
pub struct PutConfigFactory {
    entries: BTreeMap<String, String>,
}

impl PutConfigFactory {
    pub fn new() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(TABLE_NAME_TAG.to_string(), "metrics".to_string());
        entries.insert(ZOOKEEPER_QUORUM_TAG.to_string(), "zk1".to_string());
        entries.insert(FAMILY_TAG.to_string(), "m".to_string());
        Self { entries }
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn without(mut self, key: &str) -> Self {
        self.entries.remove(key);
        self
    }

    pub fn create_map(self) -> BTreeMap<String, String> {
        self.entries
    }

    pub fn try_create(self) -> Result<PutConfig, ConfigError> {
        PutConfig::new(self.entries)
    }

    pub fn create(self) -> PutConfig {
        self.try_create().expect("factory config should validate")
    }
}
