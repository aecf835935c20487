use std::collections::BTreeMap;
use tracing::{error, warn};

use crate::engine::errors::ConfigError;
use crate::shared::config::ClientConfig;

pub const FAMILY_TAG: &str = "family";
pub const TABLE_NAME_TAG: &str = "table_name";
pub const ZOOKEEPER_QUORUM_TAG: &str = "hbase.zookeeper.quorum";
pub const AUTOFLUSH_TAG: &str = "hbase.client.autoflush";
pub const WRITE_BUFFER_SIZE_MB_TAG: &str = "hbase.client.write_buffer_size_mb";

const REQUIRED_TAGS: [&str; 3] = [FAMILY_TAG, TABLE_NAME_TAG, ZOOKEEPER_QUORUM_TAG];

/// Checks that the three mandatory keys are present. Values are not inspected.
pub fn validate(entries: &BTreeMap<String, String>) -> Result<(), ConfigError> {
    for tag in REQUIRED_TAGS {
        if !entries.contains_key(tag) {
            error!(
                target: "multicol_put::config",
                "Error while doing HBase operation with config {:?} ; Config is missing for: {}",
                entries,
                tag
            );
            return Err(ConfigError::MissingField(tag));
        }
    }
    Ok(())
}

/// A function's configuration map after validation. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutConfig {
    entries: BTreeMap<String, String>,
}

impl PutConfig {
    pub fn new(entries: BTreeMap<String, String>) -> Result<Self, ConfigError> {
        validate(&entries)?;
        Ok(Self { entries })
    }

    pub fn family(&self) -> &str {
        self.get(FAMILY_TAG).unwrap_or_default()
    }

    pub fn table_name(&self) -> &str {
        self.get(TABLE_NAME_TAG).unwrap_or_default()
    }

    pub fn zookeeper_quorum(&self) -> &str {
        self.get(ZOOKEEPER_QUORUM_TAG).unwrap_or_default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Resolves the buffering options, falling back to `defaults` for anything
    /// unset or unparseable.
    pub fn buffer_policy(&self, defaults: BufferPolicy) -> BufferPolicy {
        let autoflush = match self.get(AUTOFLUSH_TAG) {
            None => defaults.autoflush,
            Some(raw) if raw.eq_ignore_ascii_case("true") => true,
            Some(raw) if raw.eq_ignore_ascii_case("false") => false,
            Some(raw) => {
                warn!(
                    target: "multicol_put::config",
                    value = raw,
                    "Ignoring malformed {}; using default {}",
                    AUTOFLUSH_TAG,
                    defaults.autoflush
                );
                defaults.autoflush
            }
        };

        let write_buffer_size = match self.get(WRITE_BUFFER_SIZE_MB_TAG) {
            None => defaults.write_buffer_size,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(mb) => mb.saturating_mul(BufferPolicy::MIB),
                Err(_) => {
                    warn!(
                        target: "multicol_put::config",
                        value = raw,
                        "Ignoring malformed {}; using default {} bytes",
                        WRITE_BUFFER_SIZE_MB_TAG,
                        defaults.write_buffer_size
                    );
                    defaults.write_buffer_size
                }
            },
        };

        BufferPolicy {
            autoflush,
            write_buffer_size,
        }
    }
}

/// How puts travel to the table: one at a time, or batched up to a byte budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferPolicy {
    pub autoflush: bool,
    /// Buffered bytes that trigger a flush when `autoflush` is off.
    pub write_buffer_size: usize,
}

impl BufferPolicy {
    pub const MIB: usize = 1024 * 1024;

    pub fn from_settings(client: &ClientConfig) -> Self {
        Self {
            autoflush: client.autoflush,
            write_buffer_size: client.write_buffer_size_mb.saturating_mul(Self::MIB),
        }
    }
}

impl Default for BufferPolicy {
    fn default() -> Self {
        Self {
            autoflush: true,
            write_buffer_size: 2 * Self::MIB,
        }
    }
}
