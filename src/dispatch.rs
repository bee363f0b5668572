//! Container-agnostic entry points.
//!
//! [`map`], [`flat_map`] and [`foreach`] accept either an `Option` or a
//! `Result` and apply that container's rules, so call sites that hold
//! "some container" can compose without knowing which one.

use crate::typeclass::{Foreach, Functor, Monad};

/// Maps the success/present value of either container.
///
/// # Examples
///
/// ```rust
/// assert_eq!(outcome::map(Some(2), |n| n * 10), Some(20));
/// assert_eq!(outcome::map(Ok::<i32, &str>(2), |n| n * 10), Ok(20));
/// assert_eq!(outcome::map(Err::<i32, &str>("e"), |n| n * 10), Err("e"));
/// ```
#[inline]
pub fn map<C, B, F>(container: C, function: F) -> C::WithType<B>
where
    C: Functor,
    F: FnOnce(C::Inner) -> B,
{
    container.fmap(function)
}

/// Chains a container-producing step onto either container.
///
/// # Examples
///
/// ```rust
/// let halved = outcome::flat_map(Some(4), |n| if n % 2 == 0 { Some(n / 2) } else { None });
/// assert_eq!(halved, Some(2));
/// ```
#[inline]
pub fn flat_map<C, B, F>(container: C, function: F) -> C::WithType<B>
where
    C: Monad,
    F: FnOnce(C::Inner) -> C::WithType<B>,
{
    container.flat_map(function)
}

/// Runs a side effect on the success/present value of either container and
/// returns the container unchanged.
#[inline]
pub fn foreach<C, F>(container: C, function: F) -> C
where
    C: Foreach,
    F: FnOnce(&C::Inner),
{
    container.foreach(function)
}
