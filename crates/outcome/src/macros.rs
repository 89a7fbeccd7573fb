//! Convenient constructor and control-flow macros
//!
//! These keep chained outcome code terse without hiding anything: every
//! macro expands to a plain constructor call or a `match`.

/// Create a `Success` outcome.
///
/// # Examples
///
/// ```rust
/// use outcome::{Outcome, OutcomeError, success};
///
/// let ok: Outcome<i32, OutcomeError> = success!(5);
/// assert!(ok.is_success());
/// ```
#[macro_export]
macro_rules! success {
    ($value:expr) => {
        $crate::Outcome::success($value)
    };
}

/// Create a `Failure` outcome carrying an illegal-state [`OutcomeError`]
/// built from a formatted message.
///
/// # Examples
///
/// ```rust
/// use outcome::{ErrorKind, Outcome, failure};
///
/// let queue = "jobs";
/// let failed: Outcome<i32, _> = failure!("queue '{}' drained", queue);
/// assert_eq!(failed.error().map(|e| e.kind()), Some(ErrorKind::IllegalState));
/// ```
///
/// [`OutcomeError`]: crate::OutcomeError
#[macro_export]
macro_rules! failure {
    ($msg:literal) => {
        $crate::Outcome::failure($crate::OutcomeError::illegal_state($msg))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::Outcome::failure($crate::OutcomeError::illegal_state(format!($fmt, $($arg)*)))
    };
}

/// Unwrap a `Success` or early-return the `Failure` from the enclosing
/// function — the `?` analogue for functions returning an `Outcome`.
///
/// The error is passed through `Into`, so the enclosing function's error
/// type may widen.
///
/// # Examples
///
/// ```rust
/// use outcome::{Outcome, OutcomeError, try_outcome};
///
/// fn double(input: Outcome<i32, OutcomeError>) -> Outcome<i32, OutcomeError> {
///     let value = try_outcome!(input);
///     Outcome::success(value * 2)
/// }
///
/// assert_eq!(double(Outcome::success(5)), Outcome::success(10));
/// assert!(double(Outcome::failure_message("boom")).is_failure());
/// ```
#[macro_export]
macro_rules! try_outcome {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Success(value) => value,
            $crate::Outcome::Failure(error) => {
                return $crate::Outcome::Failure(::core::convert::Into::into(error));
            }
        }
    };
}
