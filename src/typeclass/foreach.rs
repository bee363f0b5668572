//! Side effects on the success or present value.

use super::higher::TypeConstructor;

/// A container that can run a side effect on its value and hand itself back
/// unchanged.
///
/// The effect runs only for `Some`/`Ok`; the container is returned as-is in
/// every case, so `foreach` can sit in the middle of a pipeline (logging,
/// counters) without changing it.
///
/// # Examples
///
/// ```rust
/// use outcome::typeclass::Foreach;
///
/// let mut total = 0;
/// let value: Result<i32, &str> = Ok(4).foreach(|n| total += n);
/// assert_eq!(value, Ok(4));
/// assert_eq!(total, 4);
/// ```
pub trait Foreach: TypeConstructor + Sized {
    /// Runs `function` on a reference to the value, then returns `self`.
    fn foreach<F>(self, function: F) -> Self
    where
        F: FnOnce(&Self::Inner);
}

impl<A> Foreach for Option<A> {
    #[inline]
    fn foreach<F>(self, function: F) -> Self
    where
        F: FnOnce(&A),
    {
        crate::option::foreach(self, function)
    }
}

impl<T, E> Foreach for Result<T, E> {
    #[inline]
    fn foreach<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        crate::result::foreach(self, function)
    }
}
