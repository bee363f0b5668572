//! Combinators for `Option<V>`.
//!
//! Absence is the `None` tag, never a sentinel value, so `Some(None)` is a
//! legitimate present value of an `Option<Option<T>>`. A mapping function
//! `V -> V2` therefore cannot smuggle absence into [`map`]; steps that may
//! produce nothing go through [`flat_map`].
//!
//! # Examples
//!
//! ```rust
//! use outcome::option;
//!
//! let port = option::or_else(None::<u16>, 8080);
//! assert_eq!(option::get(port), 8080);
//!
//! let even = option::filter(Some(3), |n| n % 2 == 0);
//! assert_eq!(option::ok_or_else(even, "odd"), Err("odd"));
//! ```

use crate::error::ContractViolation;

/// Returns `true` if `option` holds a value.
#[inline]
pub const fn is_some<V>(option: &Option<V>) -> bool {
    matches!(option, Some(_))
}

/// Returns `true` if `option` is absent.
#[inline]
pub const fn is_none<V>(option: &Option<V>) -> bool {
    matches!(option, None)
}

/// Keeps a present `option`, otherwise substitutes `value`.
#[inline]
pub fn or_else<V>(option: Option<V>, value: V) -> Option<V> {
    match option {
        Some(present) => Some(present),
        None => Some(value),
    }
}

/// Keeps a present `option`, otherwise substitutes `supplier()`.
///
/// `supplier` runs only when `option` is absent.
///
/// # Examples
///
/// ```rust
/// use outcome::option;
///
/// assert_eq!(option::or_else_with(None, || 1), Some(1));
/// assert_eq!(option::or_else_with(Some(5), || unreachable!()), Some(5));
/// ```
#[inline]
pub fn or_else_with<V, F>(option: Option<V>, supplier: F) -> Option<V>
where
    F: FnOnce() -> V,
{
    match option {
        Some(present) => Some(present),
        None => Some(supplier()),
    }
}

/// Returns the present value.
///
/// This is the one operation in this module that is unsafe at the call
/// site: prefer [`or_else`] or [`ok_or_else`] whenever absence is possible.
///
/// # Panics
///
/// Panics with `"cannot get value of an absent option"` if `option` is
/// `None`.
///
/// # Examples
///
/// ```rust,should_panic
/// use outcome::option;
///
/// option::get(None::<i32>);
/// ```
#[inline]
#[track_caller]
pub fn get<V>(option: Option<V>) -> V {
    match option {
        Some(value) => value,
        None => ContractViolation::AbsentOption.abort(),
    }
}

/// Applies `function` to a present value; absence passes through and
/// `function` is not invoked.
#[inline]
pub fn map<V, V2, F>(option: Option<V>, function: F) -> Option<V2>
where
    F: FnOnce(V) -> V2,
{
    match option {
        Some(value) => Some(function(value)),
        None => None,
    }
}

/// Returns `function(value)` for a present value, which may itself be
/// absent; absence passes through.
#[inline]
pub fn flat_map<V, V2, F>(option: Option<V>, function: F) -> Option<V2>
where
    F: FnOnce(V) -> Option<V2>,
{
    match option {
        Some(value) => function(value),
        None => None,
    }
}

/// Keeps a present value only if `predicate` holds for it.
#[inline]
pub fn filter<V, P>(option: Option<V>, predicate: P) -> Option<V>
where
    P: FnOnce(&V) -> bool,
{
    match option {
        Some(value) if predicate(&value) => Some(value),
        _ => None,
    }
}

/// Runs `function` on a present value for its side effect and returns
/// `option` unchanged.
#[inline]
pub fn foreach<V, F>(option: Option<V>, function: F) -> Option<V>
where
    F: FnOnce(&V),
{
    if let Some(value) = &option {
        function(value);
    }
    option
}

/// Converts a present value to `Ok(value)` and absence to `Err(error)`.
#[inline]
pub fn ok_or_else<V, E>(option: Option<V>, error: E) -> Result<V, E> {
    match option {
        Some(value) => Ok(value),
        None => Err(error),
    }
}

/// Converts a present value to `Ok(value)` and absence to
/// `Err(supplier())`.
///
/// # Examples
///
/// ```rust
/// use outcome::option;
///
/// assert_eq!(option::ok_or_else_with(None::<i32>, || "oh_no"), Err("oh_no"));
/// ```
#[inline]
pub fn ok_or_else_with<V, E, F>(option: Option<V>, supplier: F) -> Result<V, E>
where
    F: FnOnce() -> E,
{
    match option {
        Some(value) => Ok(value),
        None => Err(supplier()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(Some(1), true)]
    #[case(None, false)]
    fn test_is_some_and_is_none_are_complements(
        #[case] value: Option<i32>,
        #[case] expected_some: bool,
    ) {
        assert_eq!(is_some(&value), expected_some);
        assert_eq!(is_none(&value), !expected_some);
    }

    #[rstest]
    fn test_nested_absence_is_a_present_value() {
        let nested: Option<Option<i32>> = Some(None);
        assert!(is_some(&nested));
        assert_eq!(get(nested), None);
    }

    #[rstest]
    fn test_map_to_unit_stays_present() {
        assert_eq!(map(Some(3), |_| ()), Some(()));
    }

    #[rstest]
    fn test_or_else_with_not_called_when_present() {
        let calls = Cell::new(0);
        let result = or_else_with(Some(5), || {
            calls.set(calls.get() + 1);
            0
        });
        assert_eq!(result, Some(5));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    #[case(Some(4), Some(4))]
    #[case(Some(3), None)]
    #[case(None, None)]
    fn test_filter_even(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(filter(input, |n| n % 2 == 0), expected);
    }

    #[rstest]
    #[should_panic(expected = "cannot get value of an absent option")]
    fn test_get_absent_panics() {
        get(None::<String>);
    }
}
