//! Core error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! via `From` impls or wrap it as one variant.  Both patterns are used;
//! prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `evac-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("coordinate out of range: ({lat}, {lng})")]
    InvalidCoordinate { lat: f64, lng: f64 },

    #[error("hazard radius must be positive, got {0} km")]
    InvalidRadius(f64),

    #[error("feed parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Shorthand result type for all `evac-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
