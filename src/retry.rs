//! Bounded retry of fallible computations.
//!
//! A computation is invoked once unconditionally and then up to
//! `max_retries` more times while it keeps failing, sleeping a fixed delay
//! on the calling thread between attempts. The error payload is never
//! inspected: every failure is retried until the budget runs out, and the
//! last failure is returned.
//!
//! # Examples
//!
//! ```rust
//! use outcome::retry::{RetryPolicy, retry};
//! use std::time::Duration;
//!
//! let mut failures_left = 2;
//! let result = retry(5, Duration::ZERO, || {
//!     if failures_left > 0 {
//!         failures_left -= 1;
//!         Err("transient")
//!     } else {
//!         Ok("connected")
//!     }
//! });
//! assert_eq!(result, Ok("connected"));
//!
//! let policy = RetryPolicy::default().with_max_retries(1);
//! assert_eq!(policy.run(|| Err::<(), _>("down")), Err("down"));
//! ```

use std::thread;
use std::time::Duration;

/// Number of retries used when none is specified.
pub const DEFAULT_MAX_RETRIES: usize = 5;

/// How many times to retry and how long to pause in between.
///
/// The default is [`DEFAULT_MAX_RETRIES`] retries with no delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RetryPolicy {
    max_retries: usize,
    delay: Duration,
}

static_assertions::assert_impl_all!(RetryPolicy: Send, Sync, Copy, Default);

/// A failed attempt, as reported to the observer of
/// [`RetryPolicy::run_observed`].
#[derive(Debug)]
pub struct RetryAttempt<'a, E> {
    /// 1-based number of the attempt that failed.
    pub attempt: usize,
    /// Retries still available after this attempt.
    pub remaining: usize,
    /// The failure produced by this attempt.
    pub error: &'a E,
}

impl<E> RetryAttempt<'_, E> {
    /// Returns `true` if no retry follows this attempt.
    pub const fn is_final(&self) -> bool {
        self.remaining == 0
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RETRIES, Duration::ZERO)
    }
}

impl RetryPolicy {
    /// Creates a policy with `max_retries` retries after the first attempt.
    pub const fn new(max_retries: usize, delay: Duration) -> Self {
        Self { max_retries, delay }
    }

    /// A policy that runs the computation exactly once.
    pub const fn no_retry() -> Self {
        Self::new(0, Duration::ZERO)
    }

    /// Returns a copy with a different retry budget.
    #[must_use]
    pub const fn with_max_retries(self, max_retries: usize) -> Self {
        Self {
            max_retries,
            ..self
        }
    }

    /// Returns a copy with a different inter-attempt delay.
    #[must_use]
    pub const fn with_delay(self, delay: Duration) -> Self {
        Self { delay, ..self }
    }

    /// Retries available after the first attempt.
    pub const fn max_retries(&self) -> usize {
        self.max_retries
    }

    /// Pause between attempts.
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Upper bound on the number of times a computation is invoked.
    pub const fn max_attempts(&self) -> usize {
        self.max_retries.saturating_add(1)
    }

    /// Runs `computation` until it succeeds or the budget is spent.
    ///
    /// # Errors
    ///
    /// Returns the error of the final attempt when every attempt failed.
    pub fn run<V, E, F>(&self, computation: F) -> Result<V, E>
    where
        F: FnMut() -> Result<V, E>,
    {
        self.run_observed(computation, |_| {})
    }

    /// Like [`run`](Self::run), calling `observer` after every failed
    /// attempt, including the final one.
    ///
    /// # Errors
    ///
    /// Returns the error of the final attempt when every attempt failed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::retry::RetryPolicy;
    ///
    /// let mut seen = Vec::new();
    /// let result = RetryPolicy::default()
    ///     .with_max_retries(2)
    ///     .run_observed(|| Err::<(), u8>(7), |failed| seen.push((failed.attempt, failed.remaining)));
    /// assert_eq!(result, Err(7));
    /// assert_eq!(seen, vec![(1, 2), (2, 1), (3, 0)]);
    /// ```
    pub fn run_observed<V, E, F, O>(&self, mut computation: F, mut observer: O) -> Result<V, E>
    where
        F: FnMut() -> Result<V, E>,
        O: FnMut(&RetryAttempt<'_, E>),
    {
        let mut remaining = self.max_retries;
        let mut attempt = 1;

        loop {
            match computation() {
                Ok(value) => {
                    if attempt > 1 {
                        tracing::debug!(attempt, "computation succeeded after retrying");
                    }
                    return Ok(value);
                }
                Err(error) => {
                    observer(&RetryAttempt {
                        attempt,
                        remaining,
                        error: &error,
                    });

                    if remaining == 0 {
                        tracing::warn!(attempts = attempt, "retry budget exhausted");
                        return Err(error);
                    }

                    tracing::debug!(attempt, remaining, delay = ?self.delay, "attempt failed, retrying");

                    if !self.delay.is_zero() {
                        thread::sleep(self.delay);
                    }
                    remaining -= 1;
                    attempt += 1;
                }
            }
        }
    }
}

/// Runs `computation`, retrying up to `max_retries` times with `delay`
/// between attempts.
///
/// The computation is invoked at most `max_retries + 1` times.
///
/// # Errors
///
/// Returns the error of the final attempt when every attempt failed.
pub fn retry<V, E, F>(max_retries: usize, delay: Duration, computation: F) -> Result<V, E>
where
    F: FnMut() -> Result<V, E>,
{
    RetryPolicy::new(max_retries, delay).run(computation)
}

/// Runs `computation` under the default policy: 5 retries, no delay.
///
/// # Errors
///
/// Returns the error of the final attempt when every attempt failed.
pub fn retry_default<V, E, F>(computation: F) -> Result<V, E>
where
    F: FnMut() -> Result<V, E>,
{
    RetryPolicy::default().run(computation)
}
