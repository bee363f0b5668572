//! Converting panics into `Err` values.
//!
//! [`try_result`] runs a computation behind a panic-recovery boundary. A
//! normal return of any type becomes `Ok(value)`. A panic never
//! propagates past the boundary: it is classified into a [`Fault`] and
//! reduced to the payload of the chosen [`ReportMode`].
//!
//! A computation that already returns a `Result` goes through the
//! `_flatten` variants instead. Its own `Err` passes through untouched,
//! and a captured fault is converted into the same error type with `From`.
//!
//! | Function | Mode | `Err` payload |
//! |---|---|---|
//! | [`try_result`] | [`Full`] | [`Fault`] |
//! | [`try_result_message`] | [`Message`] | `String` |
//! | [`try_result_kind`] | [`Kind`] | [`FaultKind`] |
//! | [`try_result_flatten`] | [`Full`] | `E: From<Fault>` |
//! | [`try_result_message_flatten`] | [`Message`] | `E: From<String>` |
//! | [`try_result_kind_flatten`] | [`Kind`] | `E: From<FaultKind>` |
//!
//! # Examples
//!
//! ```rust
//! use outcome::capture::{FaultKind, try_result, try_result_kind, try_result_message};
//!
//! assert_eq!(try_result(|| 5_i32 + 5).ok(), Some(10));
//!
//! let message = try_result_message(|| -> i32 { panic!("bad input") });
//! assert_eq!(message, Err("bad input".to_string()));
//!
//! let kind = try_result_kind(|| -> i32 { panic!("bad input") });
//! assert_eq!(kind, Err(FaultKind::Panic));
//! ```
//!
//! The panic hook still runs before the panic is intercepted, so the
//! default hook prints the panic message to stderr.

mod fault;
mod mode;

pub use fault::{Fault, FaultKind, OPAQUE_MESSAGE, raise};
pub use mode::{Full, Kind, Message, ReportMode};

use std::panic::{AssertUnwindSafe, catch_unwind};

/// Runs `computation`, reporting a panic with the payload of mode `M`.
///
/// # Errors
///
/// Returns `Err(M::report(fault))` if `computation` panics.
///
/// # Examples
///
/// ```rust
/// use outcome::capture::{Message, try_result_as};
///
/// #[derive(Debug, PartialEq)]
/// struct Account {
///     id: u64,
/// }
///
/// assert_eq!(try_result_as::<Message, _, _>(|| Account { id: 7 }), Ok(Account { id: 7 }));
/// ```
pub fn try_result_as<M, V, F>(computation: F) -> Result<V, M::Payload>
where
    M: ReportMode,
    F: FnOnce() -> V,
{
    catch_unwind(AssertUnwindSafe(computation)).map_err(|payload| {
        let fault = Fault::from_panic(payload);
        tracing::debug!(kind = %fault.kind(), reason = fault.message(), "captured fault");
        M::report(fault)
    })
}

/// Runs a `Result`-returning `computation`, converting a panic into its
/// error type through the payload of mode `M`.
///
/// # Errors
///
/// Returns the computation's own `Err` unchanged, or
/// `Err(E::from(M::report(fault)))` if it panics.
///
/// # Examples
///
/// ```rust
/// use outcome::capture::{Message, try_result_flatten_as};
///
/// let parsed: Result<i32, String> =
///     try_result_flatten_as::<Message, _, _, _>(|| "12".parse::<i32>().map_err(|e| e.to_string()));
/// assert_eq!(parsed, Ok(12));
/// ```
pub fn try_result_flatten_as<M, V, E, F>(computation: F) -> Result<V, E>
where
    M: ReportMode,
    E: From<M::Payload>,
    F: FnOnce() -> Result<V, E>,
{
    match try_result_as::<M, _, _>(computation) {
        Ok(result) => result,
        Err(payload) => Err(E::from(payload)),
    }
}

/// Runs `computation`, reporting a panic as the full [`Fault`].
///
/// # Errors
///
/// Returns `Err(fault)` if `computation` panics.
pub fn try_result<V, F>(computation: F) -> Result<V, Fault>
where
    F: FnOnce() -> V,
{
    try_result_as::<Full, V, F>(computation)
}

/// Runs `computation`, reporting a panic as its message.
///
/// # Errors
///
/// Returns `Err(message)` if `computation` panics.
pub fn try_result_message<V, F>(computation: F) -> Result<V, String>
where
    F: FnOnce() -> V,
{
    try_result_as::<Message, V, F>(computation)
}

/// Runs `computation`, reporting a panic as its [`FaultKind`].
///
/// # Errors
///
/// Returns `Err(kind)` if `computation` panics.
pub fn try_result_kind<V, F>(computation: F) -> Result<V, FaultKind>
where
    F: FnOnce() -> V,
{
    try_result_as::<Kind, V, F>(computation)
}

/// Runs a `Result`-returning `computation`, converting a panic's
/// [`Fault`] into its error type.
///
/// # Errors
///
/// Returns the computation's own `Err` unchanged, or `Err(E::from(fault))`
/// if it panics.
///
/// # Examples
///
/// ```rust
/// use outcome::capture::{Fault, try_result_flatten};
/// use std::num::ParseIntError;
///
/// #[derive(Debug)]
/// enum LoadError {
///     Parse(ParseIntError),
///     Crashed(Fault),
/// }
///
/// impl From<Fault> for LoadError {
///     fn from(fault: Fault) -> Self {
///         Self::Crashed(fault)
///     }
/// }
///
/// let loaded = try_result_flatten(|| "x".parse::<i32>().map_err(LoadError::Parse));
/// assert!(matches!(loaded, Err(LoadError::Parse(_))));
///
/// let crashed = try_result_flatten(|| -> Result<i32, LoadError> { panic!("corrupt") });
/// assert!(matches!(crashed, Err(LoadError::Crashed(_))));
/// ```
pub fn try_result_flatten<V, E, F>(computation: F) -> Result<V, E>
where
    E: From<Fault>,
    F: FnOnce() -> Result<V, E>,
{
    try_result_flatten_as::<Full, V, E, F>(computation)
}

/// Runs a `Result`-returning `computation`, converting a panic's message
/// into its error type.
///
/// # Errors
///
/// Returns the computation's own `Err` unchanged, or
/// `Err(E::from(message))` if it panics.
pub fn try_result_message_flatten<V, E, F>(computation: F) -> Result<V, E>
where
    E: From<String>,
    F: FnOnce() -> Result<V, E>,
{
    try_result_flatten_as::<Message, V, E, F>(computation)
}

/// Runs a `Result`-returning `computation`, converting a panic's
/// [`FaultKind`] into its error type.
///
/// # Errors
///
/// Returns the computation's own `Err` unchanged, or `Err(E::from(kind))`
/// if it panics.
pub fn try_result_kind_flatten<V, E, F>(computation: F) -> Result<V, E>
where
    E: From<FaultKind>,
    F: FnOnce() -> Result<V, E>,
{
    try_result_flatten_as::<Kind, V, E, F>(computation)
}
