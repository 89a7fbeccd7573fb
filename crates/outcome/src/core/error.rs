//! Default error payload for message- and capture-based constructors

use std::any::Any;
use std::borrow::Cow;

use thiserror::Error;

/// Classification of an [`OutcomeError`].
///
/// The kind is what callers should branch on; the message is for humans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// A computation was asked to run in a state it cannot handle. The
    /// default kind for plain-message failures.
    #[error("illegal state")]
    IllegalState,
    /// A required value was absent.
    #[error("null value")]
    NullValue,
    /// A panic captured at the [`attempt`](crate::Outcome::attempt) boundary.
    #[error("panic")]
    Panic,
    /// Anything that fits none of the above.
    #[error("error")]
    Other,
}

impl ErrorKind {
    /// Stable machine-readable code for programmatic handling.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::IllegalState => "ILLEGAL_STATE",
            Self::NullValue => "NULL_VALUE",
            Self::Panic => "PANIC",
            Self::Other => "OTHER",
        }
    }

    /// Whether this error was captured from a panic.
    pub const fn is_panic(&self) -> bool {
        matches!(self, Self::Panic)
    }
}

/// The default error carried by [`Outcome`](crate::Outcome) when no
/// domain-specific error type is in play.
///
/// Structured the usual way: a [`ErrorKind`] for branching plus a
/// human-readable message. `Cow<'static, str>` keeps literal messages
/// allocation-free. Equality and hashing are structural over both fields so
/// they compose into `Outcome`'s own equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{kind}: {message}")]
pub struct OutcomeError {
    kind: ErrorKind,
    message: Cow<'static, str>,
}

impl OutcomeError {
    /// Create an error with the given kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Create an [`ErrorKind::IllegalState`] error from a message.
    pub fn illegal_state(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::IllegalState, message)
    }

    /// Create the [`ErrorKind::NullValue`] error.
    pub fn null_value() -> Self {
        Self::new(ErrorKind::NullValue, "required value was absent")
    }

    /// Create an [`ErrorKind::Other`] error from a message.
    pub fn other(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Other, message)
    }

    /// Create an [`ErrorKind::Panic`] error from a caught panic payload.
    ///
    /// String payloads (the overwhelmingly common case, from `panic!` and
    /// `unwrap`) are preserved verbatim; anything else gets a placeholder
    /// message since the payload is an opaque `Any`.
    pub fn panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(message) = payload.downcast_ref::<&'static str>() {
            Cow::Borrowed(*message)
        } else if let Some(message) = payload.downcast_ref::<String>() {
            Cow::Owned(message.clone())
        } else {
            Cow::Borrowed("non-string panic payload")
        };

        Self {
            kind: ErrorKind::Panic,
            message,
        }
    }

    /// Get the error kind.
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&'static str> for OutcomeError {
    fn from(message: &'static str) -> Self {
        Self::illegal_state(message)
    }
}

impl From<String> for OutcomeError {
    fn from(message: String) -> Self {
        Self::illegal_state(message)
    }
}
