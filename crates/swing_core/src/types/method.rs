//! Swing methodology selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::SwingPricingError;

/// Swing pricing methodology.
///
/// Determines when the NAV adjustment is applied:
/// - `FullSwing`: the NAV is adjusted on every valuation with nonzero net flow.
/// - `PartialSwing`: the NAV is adjusted only when net flow exceeds a
///   configured threshold percentage of shares outstanding.
///
/// # Examples
/// ```
/// use swing_core::types::SwingMethod;
///
/// let method: SwingMethod = "partial-swing".parse().unwrap();
/// assert_eq!(method, SwingMethod::PartialSwing);
/// assert_eq!(method.name(), "partial-swing");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwingMethod {
    /// Adjust the NAV whenever there is any net flow.
    FullSwing,

    /// Adjust the NAV only when net flow exceeds the policy threshold.
    PartialSwing,
}

impl SwingMethod {
    /// Returns the canonical kebab-case name of the method.
    pub fn name(&self) -> &'static str {
        match self {
            SwingMethod::FullSwing => "full-swing",
            SwingMethod::PartialSwing => "partial-swing",
        }
    }

    /// Returns true if this method applies the swing unconditionally.
    #[inline]
    pub fn is_full(&self) -> bool {
        matches!(self, SwingMethod::FullSwing)
    }
}

impl Default for SwingMethod {
    /// Partial swing is the common industry configuration.
    fn default() -> Self {
        SwingMethod::PartialSwing
    }
}

impl fmt::Display for SwingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SwingMethod {
    type Err = SwingPricingError;

    /// Parses a method name, accepting kebab-case, snake_case, and short forms
    /// ("full", "partial") case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full-swing" | "full_swing" | "full" => Ok(SwingMethod::FullSwing),
            "partial-swing" | "partial_swing" | "partial" => Ok(SwingMethod::PartialSwing),
            other => Err(SwingPricingError::UnknownMethod(other.to_string())),
        }
    }
}
