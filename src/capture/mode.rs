//! Reporting modes: how much of a fault survives into `Err`.

use super::fault::{Fault, FaultKind};

/// Selects the error payload [`try_result_as`](super::try_result_as)
/// produces for a captured fault.
pub trait ReportMode {
    /// The error type of the resulting `Result`.
    type Payload;

    /// Reduces a fault to this mode's payload.
    fn report(fault: Fault) -> Self::Payload;
}

/// Keeps the entire [`Fault`]. This is the default mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Full;

/// Keeps only the fault's message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Message;

/// Keeps only the fault's [`FaultKind`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Kind;

impl ReportMode for Full {
    type Payload = Fault;

    #[inline]
    fn report(fault: Fault) -> Fault {
        fault
    }
}

impl ReportMode for Message {
    type Payload = String;

    #[inline]
    fn report(fault: Fault) -> String {
        fault.into_message()
    }
}

impl ReportMode for Kind {
    type Payload = FaultKind;

    #[inline]
    fn report(fault: Fault) -> FaultKind {
        fault.kind()
    }
}
