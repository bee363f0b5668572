//! Monad type class - sequencing dependent steps.
//!
//! `flat_map` runs the next step with the previous value and returns its
//! container as-is, without re-wrapping. `None`/`Err` short-circuit.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use outcome::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Option<i32> {
//!     text.parse().ok().filter(|n: &i32| *n > 0)
//! }
//!
//! let result = Some("42").flat_map(parse_positive);
//! assert_eq!(result, Some(42));
//! ```

use super::applicative::Applicative;

/// A container whose steps can depend on the value of the previous step.
pub trait Monad: Applicative {
    /// Applies a container-producing function and returns its result directly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::typeclass::Monad;
    ///
    /// let x: Result<i32, String> = Ok(5);
    /// let y = x.flat_map(|n| if n > 10 { Ok(n) } else { Err("small".to_string()) });
    /// assert_eq!(y, Err("small".to_string()));
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`flat_map`](Self::flat_map).
    ///
    /// `Option` and `Result` have an inherent `and_then` that takes
    /// precedence in method syntax, so call this one through the trait.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::typeclass::Monad;
    ///
    /// assert_eq!(Monad::and_then(Some(5), |n| Some(n * 2)), Some(10));
    /// ```
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        crate::option::flat_map(self, function)
    }
}

impl<T, E> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        crate::result::flat_map(self, function)
    }
}
