//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Option<_>` and `Result<_, E>` as type
//! constructors directly. [`TypeConstructor`] names the type a container is
//! currently applied to (`Inner`) and the same container applied to another
//! type (`WithType<B>`), which is what lets [`map`](crate::map) and
//! [`flat_map`](crate::flat_map) return "the same kind of container" for
//! either input.
//!
//! # Example
//!
//! ```rust
//! use outcome::typeclass::TypeConstructor;
//!
//! fn relabel<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none_string: Option<String> = relabel(Some(42));
//! assert_eq!(none_string, None);
//! ```

/// A container type applied to some inner type.
///
/// # Associated Types
///
/// - `Inner`: the success or present value type.
/// - `WithType<B>`: the same container holding `B` instead. For
///   `Result<T, E>` the error type `E` is preserved.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The type of the value this container holds on success or presence.
    type Inner;

    /// The same container applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

