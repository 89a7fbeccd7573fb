//! Core outcome types and conversions
//!
//! - [`outcome`](crate::core::outcome) - The [`Outcome`] sum type and its combinators
//! - [`error`](crate::core::error) - [`OutcomeError`] default error payload
//! - [`convert`](crate::core::convert) - Bridges to `Result` / `Option` and extension traits

pub mod convert;
pub mod error;
pub mod outcome;

// Re-export core types
pub use convert::{OptionExt, ResultExt};
pub use error::{ErrorKind, OutcomeError};
pub use outcome::{IntoIter, Iter, Outcome};
