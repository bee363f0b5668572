#![cfg(feature = "serde")]
//! Integration tests for serde support.

use outcome::result::{self, Partitioned};
use rstest::rstest;

// =============================================================================
// Partitioned
// =============================================================================

#[rstest]
fn test_partitioned_json_roundtrip() {
    let split = result::partition(vec![Ok(1), Err("late".to_string()), Ok(2)]);
    let json = serde_json::to_string(&split).unwrap();
    let restored: Partitioned<i32, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(split, restored);
}

#[rstest]
fn test_partitioned_json_shape() {
    let split = result::partition(vec![Ok::<i32, String>(1)]);
    let json = serde_json::to_value(&split).unwrap();
    assert_eq!(json, serde_json::json!({ "ok": [1], "error": [] }));
}

// =============================================================================
// RetryPolicy
// =============================================================================

#[cfg(feature = "retry")]
#[rstest]
fn test_retry_policy_json_roundtrip() {
    use outcome::retry::RetryPolicy;
    use std::time::Duration;

    let policy = RetryPolicy::new(3, Duration::from_millis(250));
    let json = serde_json::to_string(&policy).unwrap();
    let restored: RetryPolicy = serde_json::from_str(&json).unwrap();
    assert_eq!(policy, restored);
}

// =============================================================================
// FaultKind
// =============================================================================

#[cfg(feature = "capture")]
#[rstest]
fn test_fault_kind_serializes() {
    use outcome::capture::FaultKind;

    assert_eq!(serde_json::to_string(&FaultKind::Panic).unwrap(), "\"Panic\"");
    assert_eq!(
        serde_json::to_string(&FaultKind::Raised("app::Error")).unwrap(),
        "{\"Raised\":\"app::Error\"}"
    );
}
