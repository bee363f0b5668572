//! Combinators for `Result<V, E>`.
//!
//! Every function here consumes its input and returns a new value; an
//! `Err` short-circuits past mapping functions with its payload intact.
//!
//! Alternatives that may be either a precomputed value or a function are
//! split into two entry points: the plain name takes a value
//! ([`fallback`], [`unwrap_or`]) and the `_with` / `_or_else` variant takes
//! a function ([`fallback_with`], [`unwrap_or_else`]).
//!
//! # Examples
//!
//! ```rust
//! use outcome::result;
//!
//! let parsed: Result<i32, String> = "21".parse::<i32>().map_err(|e| e.to_string());
//! let doubled = result::flat_map(parsed, |n| n.checked_mul(2).ok_or_else(|| "overflow".to_string()));
//! assert_eq!(doubled, Ok(42));
//!
//! let outcomes = vec![Ok(1), Err("x"), Ok(2)];
//! let split = result::partition(outcomes);
//! assert_eq!(split.ok, vec![1, 2]);
//! assert_eq!(split.error, vec!["x"]);
//! ```

use crate::error::ContractViolation;

// =============================================================================
// Normalization
// =============================================================================

/// Lifts a value into `Result<Self::Value, E>`.
///
/// An existing `Result<V, E>` is returned unchanged; any other supported
/// value is wrapped in `Ok`. This lets a caller accept either a bare value
/// or an explicit `Result` and handle both as a `Result`.
///
/// # Examples
///
/// ```rust
/// use outcome::result::Normalize;
///
/// let bare: Result<i32, String> = 5_i32.normalize();
/// assert_eq!(bare, Ok(5));
///
/// let explicit: Result<i32, String> = Err::<i32, String>("no".to_string()).normalize();
/// assert_eq!(explicit, Err("no".to_string()));
/// ```
pub trait Normalize<E> {
    /// The success type after normalization.
    type Value;

    /// Converts `self` into a `Result`.
    fn normalize(self) -> Result<Self::Value, E>;
}

impl<T, E> Normalize<E> for Result<T, E> {
    type Value = T;

    #[inline]
    fn normalize(self) -> Self {
        self
    }
}

macro_rules! impl_normalize_for_value {
    ($($value_type:ty),* $(,)?) => {
        $(
            impl<E> Normalize<E> for $value_type {
                type Value = Self;

                #[inline]
                fn normalize(self) -> Result<Self, E> {
                    Ok(self)
                }
            }
        )*
    };
}

impl_normalize_for_value!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
);

impl<E> Normalize<E> for &str {
    type Value = Self;

    #[inline]
    fn normalize(self) -> Result<Self, E> {
        Ok(self)
    }
}

macro_rules! impl_normalize_for_generic {
    ($($container:ident<$($parameter:ident),+>),* $(,)?) => {
        $(
            impl<E, $($parameter),+> Normalize<E> for $container<$($parameter),+> {
                type Value = Self;

                #[inline]
                fn normalize(self) -> Result<Self, E> {
                    Ok(self)
                }
            }
        )*
    };
}

impl_normalize_for_generic!(Vec<T>, Option<T>, Box<T>);

macro_rules! impl_normalize_for_tuple {
    ($(($($element:ident),+)),* $(,)?) => {
        $(
            impl<E, $($element),+> Normalize<E> for ($($element,)+) {
                type Value = Self;

                #[inline]
                fn normalize(self) -> Result<Self, E> {
                    Ok(self)
                }
            }
        )*
    };
}

impl_normalize_for_tuple!((A), (A, B), (A, B, C), (A, B, C, D));

/// Lifts `value` into a `Result`, passing existing results through untouched.
///
/// # Examples
///
/// ```rust
/// use outcome::result;
///
/// assert_eq!(result::normalize::<_, String>(10), Ok(10));
/// assert_eq!(result::normalize::<_, &str>(Err::<i32, &str>("bad")), Err("bad"));
/// ```
#[inline]
pub fn normalize<N, E>(value: N) -> Result<N::Value, E>
where
    N: Normalize<E>,
{
    value.normalize()
}

// =============================================================================
// Inspection
// =============================================================================

/// Returns `true` if `result` is `Ok`.
#[inline]
pub const fn is_ok<V, E>(result: &Result<V, E>) -> bool {
    matches!(result, Ok(_))
}

/// Returns `true` if `result` is `Err`.
#[inline]
pub const fn is_error<V, E>(result: &Result<V, E>) -> bool {
    matches!(result, Err(_))
}

// =============================================================================
// Extraction
// =============================================================================

/// Returns the success value.
///
/// # Panics
///
/// Panics with [`ContractViolation::UnwrappedError`] carrying the error
/// payload if `result` is `Err`. Use [`unwrap_or`], [`unwrap_or_else`] or
/// [`fallback`] when failure is an expected path.
///
/// # Examples
///
/// ```rust
/// use outcome::result;
///
/// assert_eq!(result::unwrap(Ok::<i32, String>(3)), 3);
/// ```
///
/// ```rust,should_panic
/// use outcome::result;
///
/// result::unwrap(Err::<i32, &str>("disk full"));
/// ```
#[inline]
#[track_caller]
pub fn unwrap<V, E>(result: Result<V, E>) -> V
where
    E: std::fmt::Debug,
{
    match result {
        Ok(value) => value,
        Err(error) => ContractViolation::unwrapped_error(&error).abort(),
    }
}

/// Returns the success value, or `fallback` if `result` is `Err`.
#[inline]
pub fn unwrap_or<V, E>(result: Result<V, E>, fallback: V) -> V {
    match result {
        Ok(value) => value,
        Err(_) => fallback,
    }
}

/// Returns the success value, or `fallback(error)` if `result` is `Err`.
///
/// # Examples
///
/// ```rust
/// use outcome::result;
///
/// let length = result::unwrap_or_else(Err::<usize, &str>("abc"), str::len);
/// assert_eq!(length, 3);
/// ```
#[inline]
pub fn unwrap_or_else<V, E, F>(result: Result<V, E>, fallback: F) -> V
where
    F: FnOnce(E) -> V,
{
    match result {
        Ok(value) => value,
        Err(error) => fallback(error),
    }
}

/// Converts `Ok(v)` to `Some(v)` and discards the error of an `Err`.
#[inline]
pub fn unwrap_to_option<V, E>(result: Result<V, E>) -> Option<V> {
    match result {
        Ok(value) => Some(value),
        Err(_) => None,
    }
}

// =============================================================================
// Combinators
// =============================================================================

/// Applies `function` to the success value; an `Err` passes through.
///
/// `function` is never invoked for an `Err`.
#[inline]
pub fn map<V, V2, E, F>(result: Result<V, E>, function: F) -> Result<V2, E>
where
    F: FnOnce(V) -> V2,
{
    match result {
        Ok(value) => Ok(function(value)),
        Err(error) => Err(error),
    }
}

/// Returns `function(value)` for `Ok(value)` without re-wrapping; an `Err`
/// passes through.
#[inline]
pub fn flat_map<V, V2, E, F>(result: Result<V, E>, function: F) -> Result<V2, E>
where
    F: FnOnce(V) -> Result<V2, E>,
{
    match result {
        Ok(value) => function(value),
        Err(error) => Err(error),
    }
}

/// Runs `function` on the success value for its side effect and returns
/// `result` unchanged.
///
/// # Examples
///
/// ```rust
/// use outcome::result;
///
/// let mut seen = Vec::new();
/// let kept = result::foreach(Ok::<i32, ()>(7), |value| seen.push(*value));
/// assert_eq!(kept, Ok(7));
/// assert_eq!(seen, vec![7]);
/// ```
#[inline]
pub fn foreach<V, E, F>(result: Result<V, E>, function: F) -> Result<V, E>
where
    F: FnOnce(&V),
{
    if let Ok(value) = &result {
        function(value);
    }
    result
}

/// Replaces an `Err` with the precomputed `alternative`; `Ok` is kept.
#[inline]
pub fn fallback<V, E, E2>(result: Result<V, E>, alternative: Result<V, E2>) -> Result<V, E2> {
    match result {
        Ok(value) => Ok(value),
        Err(_) => alternative,
    }
}

/// Recovers from an `Err` with `recovery(error)`; `Ok` is kept and
/// `recovery` is not invoked.
///
/// # Examples
///
/// ```rust
/// use outcome::result;
///
/// let cached = result::fallback_with(Err::<i32, &str>("miss"), |_| Ok::<i32, &str>(0));
/// assert_eq!(cached, Ok(0));
/// ```
#[inline]
pub fn fallback_with<V, E, E2, F>(result: Result<V, E>, recovery: F) -> Result<V, E2>
where
    F: FnOnce(E) -> Result<V, E2>,
{
    match result {
        Ok(value) => Ok(value),
        Err(error) => recovery(error),
    }
}

// =============================================================================
// Bulk Operations
// =============================================================================

/// Success values and error values of a sequence of results, each in the
/// order they appeared.
///
/// Both buckets are always present; either may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partitioned<V, E> {
    /// Unwrapped `Ok` payloads.
    pub ok: Vec<V>,
    /// Unwrapped `Err` payloads.
    pub error: Vec<E>,
}

impl<V, E> Partitioned<V, E> {
    /// Creates empty buckets.
    pub const fn new() -> Self {
        Self {
            ok: Vec::new(),
            error: Vec::new(),
        }
    }

    /// Returns `true` if no result was an error.
    pub fn is_all_ok(&self) -> bool {
        self.error.is_empty()
    }

    /// Returns the buckets as an `(ok, error)` pair.
    pub fn into_parts(self) -> (Vec<V>, Vec<E>) {
        (self.ok, self.error)
    }
}

impl<V, E> Default for Partitioned<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> Extend<Result<V, E>> for Partitioned<V, E> {
    fn extend<I: IntoIterator<Item = Result<V, E>>>(&mut self, results: I) {
        for result in results {
            match result {
                Ok(value) => self.ok.push(value),
                Err(error) => self.error.push(error),
            }
        }
    }
}

impl<V, E> FromIterator<Result<V, E>> for Partitioned<V, E> {
    fn from_iter<I: IntoIterator<Item = Result<V, E>>>(results: I) -> Self {
        let mut partitioned = Self::new();
        partitioned.extend(results);
        partitioned
    }
}

/// Collects the success values in their original order.
pub fn collect_ok<V, E, I>(results: I) -> Vec<V>
where
    I: IntoIterator<Item = Result<V, E>>,
{
    results.into_iter().filter_map(Result::ok).collect()
}

/// Collects the error values in their original order.
pub fn collect_error<V, E, I>(results: I) -> Vec<E>
where
    I: IntoIterator<Item = Result<V, E>>,
{
    results.into_iter().filter_map(Result::err).collect()
}

/// Splits results into success and error buckets in a single pass.
///
/// # Examples
///
/// ```rust
/// use outcome::result::{self, Partitioned};
///
/// let split = result::partition(vec![Ok::<i32, &str>(1)]);
/// assert_eq!(split, Partitioned { ok: vec![1], error: vec![] });
/// ```
pub fn partition<V, E, I>(results: I) -> Partitioned<V, E>
where
    I: IntoIterator<Item = Result<V, E>>,
{
    results.into_iter().collect()
}
