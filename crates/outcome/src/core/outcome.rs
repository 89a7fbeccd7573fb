//! The [`Outcome`] sum type and its combinators

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::core::error::OutcomeError;

/// A value that is either a [`Success`](Outcome::Success) holding a result
/// value, or a [`Failure`](Outcome::Failure) holding an error.
///
/// `Outcome` models recoverable error handling as an explicit value instead
/// of an unwinding panic. The tag is the enum discriminant itself: exactly
/// one payload exists at any time, the compiler enforces it, and no
/// operation ever mutates an `Outcome` in place — combinators consume the
/// receiver and produce a new value.
///
/// Equality and hashing are structural: two `Success`es compare equal iff
/// their values do, two `Failure`s iff their errors do, and the variants
/// never compare equal to each other.
///
/// # Quick Start
///
/// ```rust
/// use outcome::Outcome;
///
/// let doubled = Outcome::<i32, String>::success(5)
///     .map(|v| v * 2)
///     .and_then(|v| Outcome::success(v + 1));
///
/// assert_eq!(doubled, Outcome::success(11));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "this `Outcome` may be a `Failure`, which should be handled"]
pub enum Outcome<V, E> {
    /// The variant carrying a valid result value.
    Success(V),
    /// The variant carrying the error that prevented a value.
    Failure(E),
}

impl<V, E> Outcome<V, E> {
    // ── Construction ───────────────────────────────────────────────────────

    /// Create a `Success` holding the given value.
    pub const fn success(value: V) -> Self {
        Self::Success(value)
    }

    /// Create a `Failure` holding the given error.
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Alias for [`success`](Self::success).
    ///
    /// The source design distinguished a strict, null-rejecting `of` from a
    /// lenient `success`; with no null in the type system the two collapse.
    /// `of` is kept so call sites porting optional-heavy code read naturally.
    pub const fn of(value: V) -> Self {
        Self::Success(value)
    }

    /// Run a fallible computation and fold its `Result` into the `Outcome`
    /// channel.
    ///
    /// This is the capture boundary for computations that report errors
    /// explicitly; for computations that panic, see
    /// [`attempt`](Outcome::attempt).
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let parsed = Outcome::call(|| "42".parse::<i32>());
    /// assert_eq!(parsed.value(), Some(&42));
    ///
    /// let failed = Outcome::call(|| "abc".parse::<i32>());
    /// assert!(failed.is_failure());
    /// ```
    pub fn call<F>(f: F) -> Self
    where
        F: FnOnce() -> Result<V, E>,
    {
        match f() {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }

    // ── Inspection ─────────────────────────────────────────────────────────

    /// Returns `true` if this is a `Success`.
    ///
    /// Derived from the variant tag, never from payload contents: a
    /// `Success` holding `Option::None` is still a success.
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrow the success value, if any.
    pub const fn value(&self) -> Option<&V> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrow the error, if any.
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Consume the outcome, returning the success value.
    ///
    /// # Panics
    ///
    /// Panics with the stored error's `Display` rendering if this is a
    /// `Failure`. This is the single sanctioned re-entry from the `Outcome`
    /// channel back into panic control flow; every other accessor is total.
    /// Prefer [`into_result`](Self::into_result) and `?` where the caller
    /// can propagate instead.
    pub fn get(self) -> V
    where
        E: fmt::Display,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => panic!("called `Outcome::get()` on a `Failure`: {error}"),
        }
    }

    /// Consume the outcome, returning the success value or `None`.
    ///
    /// Bridges into optional-chaining code that does not care why a
    /// computation failed; the error is discarded.
    pub fn to_option(self) -> Option<V> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Consume the outcome, returning the error or `None`.
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Consume the outcome, returning the equivalent `std::result::Result`.
    pub fn into_result(self) -> Result<V, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Return the success value, or the given default on `Failure`.
    ///
    /// The default is taken as an already-constructed value and returned
    /// unchanged; use [`get_or_else_with`](Self::get_or_else_with) when
    /// constructing it is expensive.
    pub fn get_or_else(self, default: V) -> V {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Return the success value, or compute a default on `Failure`.
    ///
    /// The supplier is not invoked on `Success`.
    pub fn get_or_else_with<F>(self, default: F) -> V
    where
        F: FnOnce() -> V,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default(),
        }
    }

    // ── Transformation ─────────────────────────────────────────────────────

    /// Map the success value, leaving a `Failure` untouched.
    ///
    /// The mapper is never invoked on `Failure`. The mapper must not panic;
    /// an arbitrary panic cannot be folded into an arbitrary `E`, so a
    /// panicking mapper unwinds through to the caller. See
    /// [`map_catch`](Outcome::map_catch) for the capturing flavor over
    /// [`OutcomeError`].
    pub fn map<U, F>(self, mapper: F) -> Outcome<U, E>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(mapper(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Map the error, leaving a `Success` untouched.
    ///
    /// The mapper is never invoked on `Success`.
    pub fn map_error<F, G>(self, mapper: G) -> Outcome<V, F>
    where
        G: FnOnce(E) -> F,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(mapper(error)),
        }
    }

    /// Chain an outcome-producing computation onto a `Success` (bind).
    ///
    /// Returns the produced outcome directly — flattening, not nesting. A
    /// `Failure` short-circuits without invoking `op`.
    pub fn and_then<U, F>(self, op: F) -> Outcome<U, E>
    where
        F: FnOnce(V) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => op(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Return `other` on `Success` (discarding the value), or self on
    /// `Failure`.
    ///
    /// `other` is an already-constructed value; if constructing it has side
    /// effects that must not run on `Failure`, use
    /// [`and_with`](Self::and_with).
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Success(_) => other,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Lazy form of [`and`](Self::and): the supplier only runs on `Success`.
    pub fn and_with<U, F>(self, other: F) -> Outcome<U, E>
    where
        F: FnOnce() -> Outcome<U, E>,
    {
        match self {
            Self::Success(_) => other(),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    // ── Iteration ──────────────────────────────────────────────────────────

    /// Iterate over the zero-or-one success values by reference.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.value(),
        }
    }
}

impl<V> Outcome<V, OutcomeError> {
    /// Create a `Failure` from a plain message, wrapped in the default
    /// illegal-state error kind.
    ///
    /// ```rust
    /// use outcome::{ErrorKind, Outcome};
    ///
    /// let failed: Outcome<i32, _> = Outcome::failure_message("queue drained");
    /// assert_eq!(failed.error().map(|e| e.kind()), Some(ErrorKind::IllegalState));
    /// ```
    pub fn failure_message(message: impl Into<std::borrow::Cow<'static, str>>) -> Self {
        Self::Failure(OutcomeError::illegal_state(message))
    }

    /// Convert an optional value into the `Outcome` channel.
    ///
    /// `Some(v)` becomes `Success(v)`; `None` becomes a `Failure` carrying a
    /// null-value error. This is the one place absence converts into the
    /// failure channel rather than propagating as an option.
    pub fn of_nullable(value: Option<V>) -> Self {
        match value {
            Some(value) => Self::Success(value),
            None => Self::Failure(OutcomeError::null_value()),
        }
    }

    /// Run a computation, capturing a panic into the `Outcome` channel.
    ///
    /// A completed call wraps the return value in `Success`; a panic is
    /// caught and wrapped in a `Failure` holding [`ErrorKind::Panic`]
    /// (payload message preserved when it is a string). Together with
    /// [`get`](Outcome::get) on the way out, this is the only crossing
    /// between panic control flow and the `Outcome` channel.
    ///
    /// [`ErrorKind::Panic`]: crate::ErrorKind::Panic
    pub fn attempt<F>(f: F) -> Self
    where
        F: FnOnce() -> V,
    {
        match catch_unwind(AssertUnwindSafe(f)) {
            Ok(value) => Self::Success(value),
            Err(payload) => {
                let error = OutcomeError::panic(payload);
                tracing::debug!(code = error.kind().code(), "captured panic: {error}");
                Self::Failure(error)
            }
        }
    }

    /// Failure-safe [`map`](Outcome::map): a panicking mapper becomes a
    /// `Failure` instead of unwinding.
    pub fn map_catch<U, F>(self, mapper: F) -> Outcome<U, OutcomeError>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Self::Success(value) => Outcome::attempt(move || mapper(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Failure-safe [`and_then`](Outcome::and_then): a panicking operation
    /// becomes a `Failure` instead of unwinding.
    pub fn and_then_catch<U, F>(self, op: F) -> Outcome<U, OutcomeError>
    where
        F: FnOnce(V) -> Outcome<U, OutcomeError>,
    {
        match self {
            Self::Success(value) => match Outcome::attempt(move || op(value)) {
                Outcome::Success(inner) => inner,
                Outcome::Failure(error) => Outcome::Failure(error),
            },
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

impl<V: fmt::Display, E: fmt::Display> fmt::Display for Outcome<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "[Success: value={value}]"),
            Self::Failure(error) => write!(f, "[Failure: error={error}]"),
        }
    }
}

/// By-value iterator over the zero-or-one success values of an [`Outcome`].
#[derive(Debug, Clone)]
pub struct IntoIter<V> {
    inner: Option<V>,
}

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}

/// Borrowing iterator over the zero-or-one success values of an [`Outcome`].
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    inner: Option<&'a V>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V, E> IntoIterator for Outcome<V, E> {
    type Item = V;
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> IntoIter<V> {
        IntoIter {
            inner: self.to_option(),
        }
    }
}

impl<'a, V, E> IntoIterator for &'a Outcome<V, E> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}
