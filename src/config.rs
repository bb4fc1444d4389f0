//! Factory configuration
//!
//! [`GuardConfig`] is a plain value handed to [`Guards::new`](crate::Guards::new)
//! or [`Guards::install`](crate::Guards::install). There is no file or
//! environment lookup.
//!
//! # Example
//!
//! ```rust
//! use fluent_guard::GuardConfig;
//!
//! let config = GuardConfig::default()
//!     .with_pool_capacity(64)
//!     .with_pre_warm(true);
//!
//! assert!(config.object_pooling);
//! assert_eq!(config.pool_capacity, 64);
//! ```

/// Idle validators kept per parameter type unless configured otherwise.
pub const DEFAULT_POOL_CAPACITY: usize = 20;

/// Settings for a [`Guards`](crate::Guards) factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GuardConfig {
    /// Reuse validators through per-type pools.
    pub object_pooling: bool,
    /// Most idle validators kept per parameter type.
    pub pool_capacity: usize,
    /// Fill each pool to capacity when it is created.
    pub pre_warm: bool,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            object_pooling: true,
            pool_capacity: DEFAULT_POOL_CAPACITY,
            pre_warm: false,
        }
    }
}

impl GuardConfig {
    /// Turn pooling on or off.
    #[must_use]
    pub fn with_object_pooling(mut self, enabled: bool) -> Self {
        self.object_pooling = enabled;
        self
    }

    /// Set the idle capacity of each pool.
    #[must_use]
    pub fn with_pool_capacity(mut self, capacity: usize) -> Self {
        self.pool_capacity = capacity;
        self
    }

    /// Fill pools to capacity on creation.
    #[must_use]
    pub fn with_pre_warm(mut self, pre_warm: bool) -> Self {
        self.pre_warm = pre_warm;
        self
    }
}

/// Errors from configuring the process-wide factory.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// [`Guards::install`](crate::Guards::install) ran after the global
    /// factory was already built.
    #[error("the global guard factory is already initialized")]
    AlreadyInitialized,
}
