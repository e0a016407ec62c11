//! Configuration for gtpwire
//!
//! Centralized configuration with sensible defaults.

/// Settings for the stream-reading side of a session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Framing Configuration
    // -------------------------------------------------------------------------
    /// Bytes requested from the transport per read call
    pub read_chunk_size: usize,

    /// Largest response record accepted before giving up on the peer
    pub max_record_size: usize,

    // -------------------------------------------------------------------------
    // Session Configuration
    // -------------------------------------------------------------------------
    /// Stamp ascending ids onto commands sent without one
    pub auto_ids: bool,

    /// First id handed out when `auto_ids` is on
    pub first_id: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            read_chunk_size: 4096,
            max_record_size: 1024 * 1024, // 1 MB
            auto_ids: false,
            first_id: 1,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the read chunk size (in bytes, at least 1)
    pub fn read_chunk_size(mut self, size: usize) -> Self {
        self.config.read_chunk_size = size.max(1);
        self
    }

    /// Set the maximum response record size (in bytes)
    pub fn max_record_size(mut self, size: usize) -> Self {
        self.config.max_record_size = size;
        self
    }

    /// Enable or disable automatic command ids
    pub fn auto_ids(mut self, enabled: bool) -> Self {
        self.config.auto_ids = enabled;
        self
    }

    /// Set the first automatic id. Zero means "omit id" on the wire, so it is bumped to 1.
    pub fn first_id(mut self, id: u32) -> Self {
        self.config.first_id = id.max(1);
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
