//! # Outcome
//!
//! A Success/Failure sum type with monadic combinators, for modelling
//! recoverable errors as values instead of unwinding panics.
//!
//! ## Quick Start
//!
//! ```rust
//! use outcome::prelude::*;
//!
//! fn parse_port(input: &str) -> Outcome<u16, OutcomeError> {
//!     Outcome::call(|| input.trim().parse::<u16>())
//!         .map_error(|e| OutcomeError::other(e.to_string()))
//! }
//!
//! assert_eq!(parse_port(" 8080 "), Outcome::success(8080));
//! assert!(parse_port("eighty").is_failure());
//!
//! let fallback = parse_port("eighty").get_or_else(80);
//! assert_eq!(fallback, 80);
//! ```
//!
//! ## Design
//!
//! - **One tagged type**: `Outcome<V, E>` is an enum, so "exactly one of
//!   value/error is populated" is a compile-time fact — no runtime casts, no
//!   inferring the variant from payload nullness.
//! - **Closed combinators**: `map`, `map_error`, `and_then` and `and` stay
//!   inside the `Outcome` channel. A `Failure` flows through a whole chain
//!   without any downstream closure running.
//! - **Explicit boundaries**: only [`Outcome::attempt`] / [`Outcome::call`]
//!   capture on the way in, and only [`Outcome::get`] re-raises on the way
//!   out. Every other accessor is total.

pub mod core;
pub mod macros;

/// Main outcome type
pub use crate::core::Outcome;

/// Default error payload with kind + message
pub use crate::core::{ErrorKind, OutcomeError};

/// Extension traits for `Result` / `Option` interop
pub use crate::core::{OptionExt, ResultExt};

/// Iterators over an outcome's zero-or-one success values
pub use crate::core::{IntoIter, Iter};

/// Convenient prelude with everything you need
pub mod prelude {
    pub use crate::Outcome::{Failure, Success};
    pub use crate::{ErrorKind, OptionExt, Outcome, OutcomeError, ResultExt};
    pub use crate::{failure, success, try_outcome};
}
