//! Applicative type class - explicit construction.
//!
//! `pure` is the explicit constructor of the success/present case: `Some`
//! for `Option`, `Ok` for `Result`.
//!
//! # Laws
//!
//! ```text
//! pure(x).fmap(f) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use outcome::typeclass::Applicative;
//!
//! let x: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(x, Some(42));
//! ```

use super::functor::Functor;

/// A container that can lift bare values.
pub trait Applicative: Functor {
    /// Lifts a value into the success or present case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::typeclass::Applicative;
    ///
    /// let ok: Result<&str, String> = <Result<(), String>>::pure("ready");
    /// assert_eq!(ok, Ok("ready"));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }
}

impl<T, E> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn result_pure_is_ok() {
        let value: Result<i32, String> = <Result<(), String>>::pure(1);
        assert_eq!(value, Ok(1));
    }

    #[rstest]
    fn option_pure_then_fmap() {
        let value = <Option<i32>>::pure(4).fmap(|n| n + 1);
        assert_eq!(value, Some(5));
    }
}
