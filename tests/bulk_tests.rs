//! Tests for the bulk Result operations: `collect_ok`, `collect_error`
//! and `partition`.
//!
//! All three preserve the relative order of the input within each bucket.

use outcome::result::{self, Partitioned};
use proptest::prelude::*;
use rstest::rstest;

fn mixed() -> Vec<Result<i32, &'static str>> {
    vec![Ok(1), Err("x"), Ok(2)]
}

// =============================================================================
// collect_ok / collect_error
// =============================================================================

#[rstest]
fn collect_ok_keeps_successes_in_order() {
    assert_eq!(result::collect_ok(mixed()), vec![1, 2]);
}

#[rstest]
fn collect_error_keeps_errors_in_order() {
    assert_eq!(result::collect_error(mixed()), vec!["x"]);
}

#[rstest]
fn collect_on_empty_input() {
    let empty: Vec<Result<i32, &str>> = Vec::new();
    assert!(result::collect_ok(empty.clone()).is_empty());
    assert!(result::collect_error(empty).is_empty());
}

#[rstest]
fn collect_accepts_any_iterator() {
    let parsed = ["1", "two", "3"].iter().map(|text| text.parse::<i32>());
    assert_eq!(result::collect_ok(parsed), vec![1, 3]);
}

// =============================================================================
// partition
// =============================================================================

#[rstest]
fn partition_splits_mixed_results() {
    let split = result::partition(mixed());
    assert_eq!(
        split,
        Partitioned {
            ok: vec![1, 2],
            error: vec!["x"],
        }
    );
    assert!(!split.is_all_ok());
}

#[rstest]
fn partition_always_has_both_buckets() {
    let split = result::partition(vec![Ok::<i32, &str>(1)]);
    assert_eq!(split.ok, vec![1]);
    assert!(split.error.is_empty());
    assert!(split.is_all_ok());
}

#[rstest]
fn partition_of_nothing_is_empty() {
    let split = result::partition(Vec::<Result<i32, String>>::new());
    assert_eq!(split, Partitioned::default());
}

#[rstest]
fn partitioned_collects_and_extends() {
    let mut split: Partitioned<i32, &str> = mixed().into_iter().collect();
    split.extend(vec![Err("y"), Ok(3)]);

    let (ok, error) = split.into_parts();
    assert_eq!(ok, vec![1, 2, 3]);
    assert_eq!(error, vec!["x", "y"]);
}

// =============================================================================
// Property-based tests
// =============================================================================

proptest! {
    #[test]
    fn prop_partition_agrees_with_collect(
        results in prop::collection::vec(prop::result::maybe_ok(any::<i32>(), any::<u8>()), 0..32)
    ) {
        let split = result::partition(results.clone());
        prop_assert_eq!(split.ok.len() + split.error.len(), results.len());
        prop_assert_eq!(split.ok, result::collect_ok(results.clone()));
        prop_assert_eq!(split.error, result::collect_error(results));
    }
}
