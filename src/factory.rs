//! Entry points
//!
//! [`Validate::that`] builds a fresh [`Validator`] for any value, borrowed or
//! owned. [`Guards`] adds per-type pooling for owned values with a default,
//! handing out [`Lease`]s that return to their pool on drop.
//!
//! # Example
//!
//! ```rust
//! use fluent_guard::{GuardConfig, Guards, Validate};
//!
//! fn set_retries(retries: u32) -> Result<(), fluent_guard::GuardError> {
//!     Validate::that("retries", retries)
//!         .is_less_than_or_equal_to(10)
//!         .otherwise_throw_exception()
//! }
//! assert!(set_retries(3).is_ok());
//! assert!(set_retries(11).is_err());
//!
//! let guards = Guards::new(GuardConfig::default().with_pool_capacity(4));
//! let mut lease = guards.that("port", 8080u16);
//! assert!(lease.is_positive().otherwise_throw_exception().is_ok());
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use crate::config::{ConfigError, GuardConfig};
use crate::pool::{Lease, PoolRegistry, ValidatorPool};
use crate::validator::Validator;

static GLOBAL: OnceLock<Guards> = OnceLock::new();

/// Shortcuts for starting a guard chain.
#[derive(Debug, Clone, Copy)]
pub struct Validate;

impl Validate {
    /// A fresh validator for `value`, reported as `name`.
    pub fn that<T>(name: impl Into<String>, value: T) -> Validator<T> {
        Validator::new(name, value)
    }

    /// A validator drawn from the process-wide factory, see [`Guards::global`].
    pub fn pooled<T>(name: &str, value: T) -> Lease<T>
    where
        T: Default + Send + 'static,
    {
        Guards::global().that(name, value)
    }
}

/// A validator factory with per-type pools.
#[derive(Debug)]
pub struct Guards {
    config: GuardConfig,
    pooling: AtomicBool,
    pools: PoolRegistry,
}

impl Default for Guards {
    fn default() -> Self {
        Self::new(GuardConfig::default())
    }
}

impl Guards {
    /// Create a factory with the given settings.
    pub fn new(config: GuardConfig) -> Self {
        Self {
            pooling: AtomicBool::new(config.object_pooling),
            config,
            pools: PoolRegistry::default(),
        }
    }

    /// The process-wide factory, built with [`GuardConfig::default`] unless
    /// [`Guards::install`] ran first.
    pub fn global() -> &'static Guards {
        GLOBAL.get_or_init(Guards::default)
    }

    /// Build the process-wide factory from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::AlreadyInitialized`] if the global factory
    /// already exists, whether from an earlier `install` or from
    /// [`Guards::global`].
    pub fn install(config: GuardConfig) -> Result<&'static Guards, ConfigError> {
        let mut installed = false;
        let guards = GLOBAL.get_or_init(|| {
            installed = true;
            Guards::new(config)
        });

        if !installed {
            return Err(ConfigError::AlreadyInitialized);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            object_pooling = config.object_pooling,
            pool_capacity = config.pool_capacity,
            pre_warm = config.pre_warm,
            "installed global guard factory"
        );

        Ok(guards)
    }

    /// Current settings, including any runtime pooling toggle.
    pub fn config(&self) -> GuardConfig {
        self.config.with_object_pooling(self.object_pooling())
    }

    /// Returns true if `that` draws from pools.
    pub fn object_pooling(&self) -> bool {
        self.pooling.load(Ordering::Acquire)
    }

    /// Turn pooling on or off for later [`Guards::that`] calls.
    ///
    /// Outstanding leases still return to the pool they came from.
    pub fn set_object_pooling(&self, enabled: bool) {
        self.pooling.store(enabled, Ordering::Release);
    }

    /// The pool for parameter type `T`, created on first use.
    pub fn pool<T>(&self) -> Arc<ValidatorPool<T>>
    where
        T: Default + Send + 'static,
    {
        self.pools
            .pool_for::<T>(self.config.pool_capacity, self.config.pre_warm)
    }

    /// A validator for `value`, reported as `name`.
    ///
    /// With pooling on the instance comes from the pool for `T`; otherwise it
    /// is built fresh and dropped with the lease.
    pub fn that<T>(&self, name: &str, value: T) -> Lease<T>
    where
        T: Default + Send + 'static,
    {
        if !self.object_pooling() {
            return Lease::unpooled(Box::new(Validator::new(name, value)));
        }

        let pool = self.pool::<T>();
        let mut validator = pool.allocate();
        validator.rebind(name, value);
        Lease::pooled(validator, pool)
    }
}
