//! Error types for caller-side checks and configuration loading
//!
//! The transform builders never fail; degenerate inputs surface as NaN/Inf
//! entries. These errors are produced only when a caller opts into checking
//! an output or loads a camera from configuration.

use thiserror::Error;

/// Errors reported by output checks and configuration loading
#[derive(Error, Debug)]
pub enum TransformError {
    /// A matrix or point contains NaN or infinite components
    #[error("non-finite components in {what}")]
    NonFinite {
        /// What was being checked (e.g. "view matrix")
        what: &'static str,
    },

    /// Camera configuration could not be decoded
    #[cfg(feature = "serde")]
    #[error("invalid camera configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias for fallible operations in this crate
pub type TransformResult<T> = Result<T, TransformError>;
