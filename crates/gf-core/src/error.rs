//! Pipeline-wide error type.
//!
//! Sub-crates define their own error enums and either convert `FlowError`
//! into them via `#[from]` or keep a `Config`-style variant of their own.
//! Both patterns appear downstream; prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `gf-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `gf-*` crates.
pub type FlowResult<T> = Result<T, FlowError>;
