//! Persisted configuration
//!
//! The config is stored as a postcard blob prefixed with a magic number and
//! a format version, so stale or foreign data is refused instead of being
//! misread.

use serde::{Deserialize, Serialize};

use super::types::FaceConfig;

/// Magic number to identify a stored face config
pub const CONFIG_MAGIC: u32 = 0x5042_4643; // "PBFC"

/// Current stored config version
pub const CONFIG_VERSION: u8 = 1;

/// Upper bound of the stored size, for sizing storage buffers
pub const MAX_STORED_CONFIG_SIZE: usize = 16;

/// Configuration persistence errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Serialization failed (buffer too small)
    Serialize,
    /// Deserialization failed
    Deserialize,
    /// Data is not a face config
    BadMagic,
    /// Config version mismatch
    VersionMismatch,
}

#[derive(Serialize, Deserialize)]
struct StoredConfig {
    magic: u32,
    version: u8,
    config: FaceConfig,
}

impl FaceConfig {
    /// Serialize into `buf`, returning the used part
    pub fn store<'b>(&self, buf: &'b mut [u8]) -> Result<&'b mut [u8], ConfigError> {
        let stored = StoredConfig {
            magic: CONFIG_MAGIC,
            version: CONFIG_VERSION,
            config: *self,
        };
        postcard::to_slice(&stored, buf).map_err(|_| ConfigError::Serialize)
    }

    /// Deserialize from bytes written by [`FaceConfig::store`]
    pub fn load(bytes: &[u8]) -> Result<Self, ConfigError> {
        let stored: StoredConfig =
            postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;

        if stored.magic != CONFIG_MAGIC {
            warn!("Stored config has bad magic: {=u32:x}", stored.magic);
            return Err(ConfigError::BadMagic);
        }
        if stored.version != CONFIG_VERSION {
            warn!(
                "Config version mismatch: found {}, expected {}",
                stored.version,
                CONFIG_VERSION
            );
            return Err(ConfigError::VersionMismatch);
        }

        debug!("Loaded face config: {}", stored.config);
        Ok(stored.config)
    }
}
