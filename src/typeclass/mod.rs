//! Type class traits shared by `Option` and `Result`.
//!
//! These traits are the uniform combinator surface: code that does not
//! statically care which container it holds can be written once against
//! them, and the crate-level [`map`](crate::map),
//! [`flat_map`](crate::flat_map) and [`foreach`](crate::foreach) functions
//! are thin entry points over them.
//!
//! - [`TypeConstructor`]: higher-kinded type emulation through GATs
//! - [`Functor`]: mapping over the success/present value
//! - [`FunctorRef`]: mapping through a reference
//! - [`Applicative`]: explicit construction (`pure`)
//! - [`Monad`]: sequencing dependent steps (`flat_map`)
//! - [`Foreach`]: side effects that return the container unchanged
//!
//! # Examples
//!
//! ```rust
//! use outcome::typeclass::Functor;
//!
//! fn increment<C: Functor<Inner = i32>>(container: C) -> C::WithType<i32> {
//!     container.fmap(|n| n + 1)
//! }
//!
//! assert_eq!(increment(Some(1)), Some(2));
//! assert_eq!(increment(Err::<i32, &str>("e")), Err("e"));
//! ```

mod applicative;
mod foreach;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use foreach::Foreach;
pub use functor::{Functor, FunctorRef};
pub use higher::TypeConstructor;
pub use monad::Monad;

static_assertions::assert_impl_all!(Option<i32>: Functor, Applicative, Monad, Foreach);
static_assertions::assert_impl_all!(Option<i32>: FunctorRef);
static_assertions::assert_impl_all!(Result<i32, String>: Functor, Applicative, Monad, Foreach);
static_assertions::assert_impl_all!(Result<i32, String>: FunctorRef);
static_assertions::assert_not_impl_any!(Result<i32, std::io::Error>: FunctorRef);
