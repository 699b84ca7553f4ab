//! Error types for structured error handling.
//!
//! The kernel is total over its valid numeric domain: zero shares outstanding
//! and zero gross NAV are valid inputs with documented fallback outputs, not
//! errors. Validation rejects only values the arithmetic cannot give meaning
//! to: negative or non-finite decimals, and unparseable method names.

use thiserror::Error;

/// Swing pricing calculation error.
///
/// # Variants
/// - `InvalidInput`: Negative or non-finite fund, flow, or cost parameter
/// - `InvalidPolicy`: Negative or non-finite threshold or swing factor cap
/// - `UnknownMethod`: Unrecognised swing method name
///
/// # Examples
/// ```
/// use swing_core::types::SwingPricingError;
///
/// let err = SwingPricingError::InvalidInput("gross NAV must be finite".to_string());
/// assert_eq!(
///     format!("{}", err),
///     "Invalid input: gross NAV must be finite"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwingPricingError {
    /// Invalid fund, flow, or cost parameter.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid swing policy parameter.
    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),

    /// Unrecognised swing method name.
    #[error("Unknown swing method: {0}")]
    UnknownMethod(String),
}
