//! Conversions between `Outcome`, `Result` and `Option`

use crate::core::error::OutcomeError;
use crate::core::outcome::Outcome;

impl<V, E> From<Result<V, E>> for Outcome<V, E> {
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<V, E> From<Outcome<V, E>> for Result<V, E> {
    fn from(outcome: Outcome<V, E>) -> Self {
        outcome.into_result()
    }
}

/// Extension trait for moving a `std::result::Result` into the `Outcome`
/// channel.
pub trait ResultExt<V, E> {
    /// Convert `Ok` into `Success` and `Err` into `Failure`.
    fn into_outcome(self) -> Outcome<V, E>;
}

impl<V, E> ResultExt<V, E> for Result<V, E> {
    fn into_outcome(self) -> Outcome<V, E> {
        self.into()
    }
}

/// Extension trait for moving an `Option` into the `Outcome` channel.
pub trait OptionExt<V> {
    /// `Some` into `Success`; `None` into the default null-value `Failure`.
    fn into_outcome(self) -> Outcome<V, OutcomeError>;

    /// `Some` into `Success`; `None` into a `Failure` holding the given
    /// error.
    fn outcome_or<E>(self, error: E) -> Outcome<V, E>;
}

impl<V> OptionExt<V> for Option<V> {
    fn into_outcome(self) -> Outcome<V, OutcomeError> {
        Outcome::of_nullable(self)
    }

    fn outcome_or<E>(self, error: E) -> Outcome<V, E> {
        match self {
            Some(value) => Outcome::Success(value),
            None => Outcome::Failure(error),
        }
    }
}
