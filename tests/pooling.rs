//! Integration tests for validator pooling

use std::sync::{Arc, Barrier};
use std::thread;

use fluent_guard::{assert_guard_kind, assert_guard_passes};
use fluent_guard::{ErrorKind, GuardConfig, Guards, Mode, ValidatorPool};

#[test]
fn test_lease_returns_reset_instance() {
    let guards = Guards::new(GuardConfig::default().with_pool_capacity(1));

    {
        let mut lease = guards.that("limit", 50i64);
        let _ = lease.is_less_than(10).or();
        assert!(lease.is_failing());
        assert_eq!(lease.mode(), Mode::Or);
    }

    let pool = guards.pool::<i64>();
    assert_eq!(pool.idle_count(), 1);

    let validator = pool.allocate();
    assert_eq!(validator.name(), "");
    assert_eq!(*validator.value(), 0);
    assert_eq!(validator.mode(), Mode::And);
    assert!(validator.pending().is_none());
    pool.free(validator);
}

#[test]
fn test_hot_path_reuses_one_instance() {
    let guards = Guards::default();

    for n in 0..1000u32 {
        let mut lease = guards.that("n", n);
        assert_guard_passes!(lease
            .is_greater_than_or_equal_to(0)
            .otherwise_throw_exception());
    }

    assert_eq!(guards.pool::<u32>().created_count(), 1);
}

#[test]
fn test_lease_error_names_new_parameter() {
    let guards = Guards::default();
    drop(guards.that("first", String::from("x")));

    let mut lease = guards.that("second", String::new());
    let err = lease.is_not_null_or_empty().otherwise_throw_exception().unwrap_err();
    assert_eq!(err.parameter(), "second");
}

#[test]
fn test_pools_are_per_type() {
    let guards = Guards::default();
    drop(guards.that("a", 1u8));
    drop(guards.that("b", 1u16));

    assert_eq!(guards.pool::<u8>().idle_count(), 1);
    assert_eq!(guards.pool::<u16>().idle_count(), 1);
    assert_eq!(guards.pool::<u32>().idle_count(), 0);
}

#[test]
fn test_disabling_pooling_bypasses_pool() {
    let guards = Guards::default();
    guards.set_object_pooling(false);

    for _ in 0..5 {
        let mut lease = guards.that("flag", true);
        assert!(!lease.is_pooled());
        assert_guard_passes!(lease.is_true().otherwise_throw_exception());
    }

    assert_eq!(guards.pool::<bool>().created_count(), 0);

    guards.set_object_pooling(true);
    assert!(guards.that("flag", true).is_pooled());
}

#[test]
fn test_concurrent_leases_are_exclusive() {
    const THREADS: usize = 8;

    let guards = Arc::new(Guards::new(GuardConfig::default().with_pool_capacity(4)));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|worker| {
            let guards = Arc::clone(&guards);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for round in 0..250usize {
                    let name = format!("worker{worker}");
                    let mut lease = guards.that(&name, round);
                    assert_eq!(lease.name(), name);
                    assert_eq!(*lease.value(), round);
                    assert_guard_kind!(
                        lease.is_greater_than(round).otherwise_throw_exception(),
                        ErrorKind::Range
                    );
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let pool = guards.pool::<usize>();
    assert!(pool.idle_count() <= 4);
    assert!(pool.created_count() >= pool.idle_count());
}

#[test]
fn test_standalone_pool_with_factory() {
    let pool = ValidatorPool::with_factory(2, || fluent_guard::Validator::new("unused", 9u8))
        .with_pre_warm();
    assert_eq!(pool.idle_count(), 2);

    let validator = pool.allocate();
    assert_eq!(validator.name(), "");
    assert_eq!(*validator.value(), 0);
}
