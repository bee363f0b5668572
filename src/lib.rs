//! # outcome
//!
//! Combinators for `Result` and `Option` that keep fallible and
//! optional-producing steps composable without panics as control flow.
//!
//! ## Overview
//!
//! - **Result combinators** ([`result`]): `map`, `flat_map`, `foreach`,
//!   `fallback`, `unwrap` variants, `normalize`, and bulk operations
//!   (`collect_ok`, `collect_error`, `partition`)
//! - **Option combinators** ([`option`]): `or_else`, `get`, `map`,
//!   `flat_map`, `filter`, `foreach`, `ok_or_else`
//! - **Uniform dispatch**: [`map`], [`flat_map`] and [`foreach`] accept
//!   either container through the [`typeclass`] traits
//! - **Retry** ([`retry`]): bounded re-invocation of a fallible computation
//! - **Fault capture** ([`capture`]): `try_result` turns panics into `Err`
//!
//! ## Feature Flags
//!
//! - `typeclass`: `Functor`, `Applicative`, `Monad`, `Foreach` and the
//!   uniform dispatch functions
//! - `retry`: the bounded retry loop
//! - `capture`: `try_result` and fault classification
//! - `serde`: `Serialize`/`Deserialize` for the crate's data types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use outcome::prelude::*;
//!
//! let parsed: Result<i32, String> = Ok(20);
//! let doubled = result::map(parsed, |n| n * 2);
//! assert_eq!(doubled, Ok(40));
//!
//! let missing: Option<i32> = None;
//! assert_eq!(option::ok_or_else(missing, "missing"), Err("missing"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the combinator modules and commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use outcome::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::ContractViolation;
    pub use crate::option;
    pub use crate::result::{self, Normalize, Partitioned};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "retry")]
    pub use crate::retry::{RetryAttempt, RetryPolicy, retry, retry_default};

    #[cfg(feature = "capture")]
    pub use crate::capture::{
        Fault, FaultKind, Full, Kind, Message, ReportMode, raise, try_result, try_result_as,
        try_result_flatten, try_result_flatten_as, try_result_kind, try_result_kind_flatten,
        try_result_message, try_result_message_flatten,
    };
}

pub mod error;
pub mod option;
pub mod result;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "typeclass")]
mod dispatch;

#[cfg(feature = "typeclass")]
pub use dispatch::{flat_map, foreach, map};

#[cfg(feature = "retry")]
pub mod retry;

#[cfg(feature = "capture")]
pub mod capture;
