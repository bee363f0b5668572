//! Diagnostics for fatal contract violations.
//!
//! A modeled failure is an `Err(e)` value and never aborts. The few
//! operations that turn a container into a bare value without a fallback
//! ([`result::unwrap`](crate::result::unwrap) and
//! [`option::get`](crate::option::get)) instead panic, and the panic
//! message is the `Display` of a [`ContractViolation`] naming the broken
//! contract.

use thiserror::Error;

/// A programming-contract violation that aborts the current operation.
///
/// # Examples
///
/// ```rust
/// use outcome::error::ContractViolation;
///
/// assert_eq!(
///     ContractViolation::AbsentOption.to_string(),
///     "cannot get value of an absent option"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    /// A `Result` was unwrapped without a fallback while holding an error.
    #[error("called `unwrap` on an error result: {cause}")]
    UnwrappedError {
        /// The `Debug` rendering of the error payload.
        cause: String,
    },
    /// An absent `Option` was asked for its value.
    #[error("cannot get value of an absent option")]
    AbsentOption,
}

impl ContractViolation {
    /// Builds an [`UnwrappedError`](Self::UnwrappedError) from an error payload.
    pub fn unwrapped_error<E: std::fmt::Debug>(error: &E) -> Self {
        Self::UnwrappedError {
            cause: format!("{error:?}"),
        }
    }

    /// Aborts the current operation with this violation as the panic message.
    #[cold]
    #[track_caller]
    pub fn abort(self) -> ! {
        panic!("{self}")
    }
}
