//! Validator pooling
//!
//! A [`ValidatorPool`] keeps idle validators for one parameter type so hot
//! call sites can reuse them (and their name buffers) instead of building a
//! new one per call. [`Lease`] is the handle given to callers; dropping it
//! resets the validator and returns it to its pool.
//!
//! # Example
//!
//! ```rust
//! use fluent_guard::pool::ValidatorPool;
//!
//! let pool = ValidatorPool::<u32>::new(4);
//!
//! let validator = pool.allocate();
//! assert_eq!(validator.name(), "");
//! pool.free(validator);
//!
//! assert_eq!(pool.idle_count(), 1);
//! assert_eq!(pool.created_count(), 1);
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use crate::validator::Validator;

/// Idle validators for parameter type `T`.
///
/// `capacity` bounds how many idle instances are kept, and is the pre-warm
/// count. It does not bound how many are handed out: an empty pool builds a
/// new instance.
pub struct ValidatorPool<T> {
    idle: Mutex<Vec<Box<Validator<T>>>>,
    factory: Box<dyn Fn() -> Validator<T> + Send + Sync>,
    capacity: usize,
    created: AtomicUsize,
}

impl<T: Default + 'static> ValidatorPool<T> {
    /// Create an empty pool that keeps up to `capacity` idle validators.
    pub fn new(capacity: usize) -> Self {
        Self::with_factory(capacity, Validator::vacant)
    }

    /// Create an empty pool that builds new instances with `factory`.
    ///
    /// Instances are reset before reuse regardless of how they were built.
    pub fn with_factory<F>(capacity: usize, factory: F) -> Self
    where
        F: Fn() -> Validator<T> + Send + Sync + 'static,
    {
        Self {
            idle: Mutex::new(Vec::with_capacity(capacity)),
            factory: Box::new(factory),
            capacity,
            created: AtomicUsize::new(0),
        }
    }
}

impl<T: Default> ValidatorPool<T> {
    /// Fill the idle list up to capacity.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_pre_warm(self) -> Self {
        {
            let mut idle = self.lock();
            while idle.len() < self.capacity {
                let mut validator = Box::new((self.factory)());
                validator.reset();
                self.created.fetch_add(1, Ordering::Relaxed);
                idle.push(validator);
            }
        }
        self
    }

    /// Take an idle validator, or build one if none is idle.
    ///
    /// The returned validator is in the reset state: empty name, default
    /// value, no pending failure, [`Mode::And`](crate::Mode::And).
    pub fn allocate(&self) -> Box<Validator<T>> {
        if let Some(validator) = self.lock().pop() {
            return validator;
        }

        let created = self.created.fetch_add(1, Ordering::Relaxed) + 1;
        #[cfg(feature = "tracing")]
        if created > self.capacity {
            tracing::debug!(
                parameter_type = std::any::type_name::<T>(),
                created,
                capacity = self.capacity,
                "validator pool grew past capacity"
            );
        }
        #[cfg(not(feature = "tracing"))]
        let _ = created;

        let mut validator = Box::new((self.factory)());
        validator.reset();
        validator
    }

    /// Reset `validator` and keep it for reuse, unless the idle list is full.
    pub fn free(&self, mut validator: Box<Validator<T>>) {
        validator.reset();

        let mut idle = self.lock();
        if idle.len() < self.capacity {
            idle.push(validator);
            return;
        }
        drop(idle);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            parameter_type = std::any::type_name::<T>(),
            "validator pool full, dropping instance"
        );
    }
}

impl<T> ValidatorPool<T> {
    /// Most idle validators kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Validators currently idle.
    pub fn idle_count(&self) -> usize {
        self.lock().len()
    }

    /// Validators built by this pool so far.
    pub fn created_count(&self) -> usize {
        self.created.load(Ordering::Relaxed)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Box<Validator<T>>>> {
        // a panic mid-push leaves the list valid, so recover from poisoning
        self.idle.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> fmt::Debug for ValidatorPool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorPool")
            .field("parameter_type", &std::any::type_name::<T>())
            .field("capacity", &self.capacity)
            .field("idle", &self.idle_count())
            .field("created", &self.created_count())
            .finish_non_exhaustive()
    }
}

/// A validator on loan, returned to its pool on drop.
///
/// Derefs to [`Validator`], so checks chain directly on it.
#[must_use = "a guard reports nothing until a check ends in an `otherwise_*` call"]
pub struct Lease<T: Default> {
    // `None` only once `drop` has taken it
    validator: Option<Box<Validator<T>>>,
    pool: Option<Arc<ValidatorPool<T>>>,
}

impl<T: Default> Lease<T> {
    pub(crate) fn pooled(validator: Box<Validator<T>>, pool: Arc<ValidatorPool<T>>) -> Self {
        Self {
            validator: Some(validator),
            pool: Some(pool),
        }
    }

    pub(crate) fn unpooled(validator: Box<Validator<T>>) -> Self {
        Self {
            validator: Some(validator),
            pool: None,
        }
    }

    /// Returns true if the validator goes back to a pool on drop.
    pub fn is_pooled(&self) -> bool {
        self.pool.is_some()
    }
}

impl<T: Default> Deref for Lease<T> {
    type Target = Validator<T>;

    fn deref(&self) -> &Validator<T> {
        match &self.validator {
            Some(validator) => validator,
            None => unreachable!("lease used after drop"),
        }
    }
}

impl<T: Default> DerefMut for Lease<T> {
    fn deref_mut(&mut self) -> &mut Validator<T> {
        match &mut self.validator {
            Some(validator) => validator,
            None => unreachable!("lease used after drop"),
        }
    }
}

impl<T: Default> Drop for Lease<T> {
    fn drop(&mut self) {
        if let (Some(validator), Some(pool)) = (self.validator.take(), self.pool.take()) {
            pool.free(validator);
        }
    }
}

impl<T: Default + fmt::Debug> fmt::Debug for Lease<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lease")
            .field("validator", &**self)
            .field("pooled", &self.is_pooled())
            .finish()
    }
}

/// One pool per parameter type, created on first use.
#[derive(Default)]
pub(crate) struct PoolRegistry {
    pools: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl PoolRegistry {
    pub(crate) fn pool_for<T>(&self, capacity: usize, pre_warm: bool) -> Arc<ValidatorPool<T>>
    where
        T: Default + Send + 'static,
    {
        let key = TypeId::of::<T>();

        let existing = self
            .pools
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned();
        if let Some(pool) = existing.and_then(|p| p.downcast::<ValidatorPool<T>>().ok()) {
            return pool;
        }

        let make = || {
            let pool = ValidatorPool::new(capacity);
            if pre_warm {
                pool.with_pre_warm()
            } else {
                pool
            }
        };

        let entry = {
            let mut pools = self.pools.write().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(pools.entry(key).or_insert_with(|| {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    parameter_type = std::any::type_name::<T>(),
                    capacity,
                    pre_warm,
                    "created validator pool"
                );
                Arc::new(make())
            }))
        };

        // entries are keyed by the TypeId of T, so this only misses if the map
        // was tampered with; fall back to an unshared pool
        entry
            .downcast::<ValidatorPool<T>>()
            .unwrap_or_else(|_| Arc::new(make()))
    }

    pub(crate) fn len(&self) -> usize {
        self.pools.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl fmt::Debug for PoolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoolRegistry").field("pools", &self.len()).finish()
    }
}
