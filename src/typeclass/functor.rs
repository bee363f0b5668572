//! Functor type class - mapping over the success or present value.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use outcome::typeclass::Functor;
//!
//! let some_value: Option<i32> = Some(5);
//! assert_eq!(some_value.fmap(|n| n.to_string()), Some("5".to_string()));
//!
//! let failed: Result<i32, &str> = Err("nope");
//! assert_eq!(failed.fmap(|n| n + 1), Err("nope"));
//! ```

use super::higher::TypeConstructor;

/// A container whose success or present value can be transformed while the
/// container's shape is preserved.
///
/// `Err` and `None` short-circuit: the function is never invoked and the
/// error payload is carried over unchanged.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::typeclass::Functor;
    ///
    /// let x: Result<i32, String> = Ok(5);
    /// assert_eq!(x.fmap(|n| n * 2), Ok(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;
}

/// Mapping through a reference, leaving the original container usable.
///
/// Kept apart from [`Functor`] because a borrowed `Result` can only produce
/// an owned `Err` by cloning the error, so the `Result` impl needs
/// `E: Clone` while `fmap` does not.
pub trait FunctorRef: Functor {
    /// Applies a function to a reference to the value inside the container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::typeclass::FunctorRef;
    ///
    /// let name: Option<String> = Some("ledger".to_string());
    /// assert_eq!(name.fmap_ref(String::len), Some(6));
    /// assert_eq!(name, Some("ledger".to_string()));
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        crate::option::map(self, function)
    }
}

impl<A> FunctorRef for Option<A> {
    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        crate::option::map(self.as_ref(), function)
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        crate::result::map(self, function)
    }
}

impl<T, E: Clone> FunctorRef for Result<T, E> {
    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Result<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Ok(value) => Ok(function(value)),
            Err(error) => Err(error.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn option_fmap_some() {
        assert_eq!(Some(21).fmap(|x| x * 2), Some(42));
    }

    #[rstest]
    fn option_fmap_none() {
        assert_eq!(None::<i32>.fmap(|x| x * 2), None);
    }

    #[rstest]
    fn result_fmap_ok_changes_type() {
        let value: Result<i32, String> = Ok(3);
        assert_eq!(value.fmap(|n| n.to_string()), Ok("3".to_string()));
    }

    #[rstest]
    fn option_fmap_ref_keeps_original() {
        let words = Some(vec!["a", "b"]);
        assert_eq!(words.fmap_ref(Vec::len), Some(2));
        assert_eq!(words, Some(vec!["a", "b"]));
    }

    #[rstest]
    #[case(Ok(4), Ok(8))]
    #[case(Err("timeout".to_string()), Err("timeout".to_string()))]
    fn result_fmap_ref_clones_error(
        #[case] value: Result<i32, String>,
        #[case] expected: Result<i32, String>,
    ) {
        let original = value.clone();
        assert_eq!(value.fmap_ref(|n| n * 2), expected);
        assert_eq!(value, original);
    }

    #[rstest]
    fn result_fmap_ref_skips_function_on_err() {
        let calls = Cell::new(0);
        let value: Result<i32, &str> = Err("e");
        let mapped = value.fmap_ref(|n| {
            calls.set(calls.get() + 1);
            *n
        });
        assert_eq!(mapped, Err("e"));
        assert_eq!(calls.get(), 0);
    }
}
