//! CLI error types.

use swing_core::types::SwingPricingError;
use thiserror::Error;

/// Errors surfaced by the CLI layer.
#[derive(Debug, Error)]
pub enum CliError {
    /// An argument failed the caller-side range checks.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The pricing kernel rejected the inputs.
    #[error("Pricing failed: {0}")]
    Pricing(#[from] SwingPricingError),

    /// Result serialisation failed.
    #[error("Serialisation failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
