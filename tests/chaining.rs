//! Integration tests for guard chains
//!
//! Realistic guard clauses at the top of functions, exercising the AND/OR
//! rules and the terminal calls through the public API only.

use std::time::Duration;

use fluent_guard::prelude::*;
use fluent_guard::{assert_guard_fails, assert_guard_kind, assert_guard_passes};

#[derive(Debug, PartialEq)]
enum ServiceError {
    InvalidRequest(String),
    Unavailable,
}

fn create_user(username: &str, age: u8, email: Option<&str>) -> Result<(), GuardError> {
    Validate::that("username", username)
        .is_not_null_or_whitespace()
        .otherwise_throw_exception()?;

    Validate::that("age", age)
        .is_greater_than_or_equal_to(13)
        .and()
        .is_less_than(130)
        .otherwise_throw_exception()?;

    Validate::that("email", email)
        .is_null()
        .or()
        .contains("@")
        .otherwise_throw_exception()?;

    Ok(())
}

fn schedule(delay: Duration, retries: Option<i32>) -> Result<(), ServiceError> {
    Validate::that("delay", delay)
        .is_less_than_or_equal_to(Duration::from_secs(300))
        .otherwise_throw_with(|e| ServiceError::InvalidRequest(e.to_string()))?;

    Validate::that("retries", retries)
        .is_not_negative()
        .otherwise_throw(ServiceError::Unavailable)
}

#[test]
fn test_valid_request_passes() {
    assert_eq!(create_user("alice", 30, Some("alice@example.com")), Ok(()));
    assert_eq!(create_user("bob", 13, None), Ok(()));
}

#[test]
fn test_first_failing_guard_is_reported() {
    let err = create_user("  ", 5, Some("nope")).unwrap_err();
    assert_eq!(err.parameter(), "username");
    assert_eq!(err.kind(), ErrorKind::Argument);
}

#[test]
fn test_and_chain_reports_first_failure() {
    let err = create_user("carol", 12, None).unwrap_err();
    assert_eq!(err.to_string(), "argument `age` must be greater than or equal to 13");
}

#[test]
fn test_or_chain_reports_first_branch_when_all_fail() {
    let err = create_user("dave", 40, Some("dave.example.com")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Argument);
    assert_eq!(err.message(), "must be null");
}

#[test]
fn test_custom_errors() {
    assert_eq!(schedule(Duration::from_secs(1), Some(3)), Ok(()));
    assert_eq!(schedule(Duration::from_secs(1), None), Ok(()));
    assert_eq!(
        schedule(Duration::from_secs(1), Some(-1)),
        Err(ServiceError::Unavailable)
    );
    assert_eq!(
        schedule(Duration::from_secs(301), Some(1)),
        Err(ServiceError::InvalidRequest(
            "argument `delay` must be less than or equal to 300s".to_owned()
        ))
    );
}

#[test]
fn test_combination_rules() {
    assert_guard_kind!(
        Validate::that("n", 5)
            .is_greater_than(10)
            .and()
            .is_less_than(3)
            .otherwise_throw_exception(),
        ErrorKind::Range
    );

    assert_guard_passes!(Validate::that("n", 5)
        .is_less_than(3)
        .or()
        .is_greater_than(4)
        .otherwise_throw_exception());

    let err = Validate::that("n", 5)
        .is_less_than(3)
        .or()
        .is_greater_than(10)
        .otherwise_throw_exception()
        .unwrap_err();
    assert_eq!(err.message(), "must be less than 3");
}

#[test]
fn test_no_terminal_call_raises_nothing() {
    let mut v = Validate::that("n", 5);
    let _ = v.is_greater_than(10).and().is_less_than(3);
    assert!(v.is_failing());
    drop(v);
}

#[test]
fn test_validator_is_reusable_after_terminal_call() {
    let mut v = Validate::that("n", 5);
    assert_guard_fails!(v.is_negative().otherwise_throw_exception());
    assert_eq!(v.mode(), Mode::And);
    assert_guard_passes!(v.is_positive().otherwise_throw_exception());
}

#[test]
fn test_nullable_values() {
    assert_guard_passes!(Validate::that("maybe", None::<i32>)
        .is_equal_to(None)
        .otherwise_throw_exception());
    assert_guard_kind!(
        Validate::that("maybe", None::<i32>)
            .is_not_null()
            .and()
            .is_positive()
            .otherwise_throw_exception(),
        ErrorKind::Null
    );
    assert_guard_passes!(Validate::that("maybe", None::<f64>)
        .is_not_positive()
        .and()
        .is_not_negative()
        .otherwise_throw_exception());
}

#[test]
fn test_booleans_and_predicates() {
    assert_guard_passes!(Validate::that("enabled", true)
        .is_true()
        .and()
        .satisfies(|b: &bool| *b, "be set")
        .otherwise_throw_exception());

    assert_guard_kind!(
        Validate::that("words", String::from("one two"))
            .satisfies(|s: &String| s.split_whitespace().count() > 2, "have three words")
            .otherwise_throw_exception(),
        ErrorKind::Argument
    );
}

#[test]
#[should_panic(expected = "argument `port` must be positive")]
fn test_otherwise_panic() {
    Validate::that("port", 0u16).is_positive().otherwise_panic();
}
