//! Classified panic payloads.

use std::any::{Any, type_name};
use std::error::Error as StdError;
use std::fmt;
use std::panic;

use thiserror::Error;

type BoxedError = Box<dyn StdError + Send + Sync + 'static>;

/// Message used for panic payloads that are neither strings nor raised errors.
pub const OPAQUE_MESSAGE: &str = "opaque panic payload";

/// The category of a captured fault.
///
/// # Examples
///
/// ```rust
/// use outcome::capture::FaultKind;
///
/// assert_eq!(FaultKind::Panic.to_string(), "panic");
/// assert_eq!(FaultKind::Raised("std::num::ParseIntError").to_string(), "std::num::ParseIntError");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FaultKind {
    /// A `panic!` with a string message.
    Panic,
    /// An error raised with [`raise`]; holds the error's type name.
    Raised(&'static str),
    /// Any other panic payload.
    Opaque,
}

impl FaultKind {
    /// Returns the identifier of this kind.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Panic => "panic",
            Self::Raised(name) => *name,
            Self::Opaque => "opaque",
        }
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// A panic intercepted by [`try_result`](super::try_result).
///
/// Raised errors are kept as the [`source`](StdError::source) of the fault.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct Fault {
    kind: FaultKind,
    message: String,
    #[source]
    source: Option<BoxedError>,
}

static_assertions::assert_impl_all!(Fault: Send, Sync, StdError);

impl Fault {
    /// Classifies a payload returned by `std::panic::catch_unwind`.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Raised>() {
            Ok(raised) => {
                let Raised { kind, error } = *raised;
                return Self {
                    kind: FaultKind::Raised(kind),
                    message: error.to_string(),
                    source: Some(error),
                };
            }
            Err(payload) => payload,
        };

        let message = if let Some(message) = payload.downcast_ref::<&str>() {
            Some((*message).to_string())
        } else {
            payload.downcast_ref::<String>().cloned()
        };

        match message {
            Some(message) => Self {
                kind: FaultKind::Panic,
                message,
                source: None,
            },
            None => Self {
                kind: FaultKind::Opaque,
                message: OPAQUE_MESSAGE.to_string(),
                source: None,
            },
        }
    }

    /// The category of this fault.
    pub const fn kind(&self) -> FaultKind {
        self.kind
    }

    /// The fault's textual message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the fault, keeping only its message.
    pub fn into_message(self) -> String {
        self.message
    }

    /// Returns the raised error if it is of type `E`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::capture::{raise, try_result};
    /// use std::num::ParseIntError;
    ///
    /// let fault = try_result(|| -> i32 {
    ///     match "x".parse::<i32>() {
    ///         Ok(n) => n,
    ///         Err(error) => raise(error),
    ///     }
    /// })
    /// .unwrap_err();
    /// assert!(fault.raised::<ParseIntError>().is_some());
    /// ```
    pub fn raised<E: StdError + 'static>(&self) -> Option<&E> {
        self.source.as_deref()?.downcast_ref::<E>()
    }
}

/// Panic payload produced by [`raise`].
struct Raised {
    kind: &'static str,
    error: BoxedError,
}

/// Aborts the current computation with a typed error.
///
/// Inside [`try_result`](super::try_result) the error is captured as a
/// [`Fault`] of kind [`FaultKind::Raised`] carrying the error's type name;
/// outside it this is an ordinary panic.
#[track_caller]
pub fn raise<E>(error: E) -> !
where
    E: StdError + Send + Sync + 'static,
{
    panic::panic_any(Raised {
        kind: type_name::<E>(),
        error: Box::new(error),
    })
}
