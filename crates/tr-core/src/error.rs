//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]` where core validation can fail inside them.

use thiserror::Error;

/// The base error type for `tr-core` and a common variant for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `tr-core`.
pub type CoreResult<T> = Result<T, CoreError>;
