//! Swing policy configuration.

use serde::{Deserialize, Serialize};

use crate::types::{SwingMethod, SwingPricingError};

/// Swing pricing policy.
///
/// Controls when the swing is applied and how large the applied factor may be.
///
/// # Default Values
///
/// | Parameter | Default | Description |
/// |-----------|---------|-------------|
/// | `method` | `PartialSwing` | Swing methodology |
/// | `threshold_percent` | 1.0 | Net flow trigger, % of shares outstanding |
/// | `max_swing_factor_percent` | 2.0 | Cap on the applied swing factor, % of NAV |
///
/// The 2% default cap mirrors the common regulatory upper limit on swing
/// factors; the 1% threshold is the common partial-swing trigger.
///
/// # Examples
/// ```
/// use swing_core::pricing::SwingPolicy;
/// use swing_core::types::SwingMethod;
///
/// let policy = SwingPolicy::new(SwingMethod::FullSwing).with_max_swing_factor_percent(1.5);
/// assert!(policy.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwingPolicy {
    /// Swing methodology.
    pub method: SwingMethod,

    /// Net flow threshold as a percentage of shares outstanding.
    ///
    /// Only consulted for `PartialSwing`; the trigger is a strict inequality,
    /// so net flow exactly at the threshold does not swing.
    pub threshold_percent: f64,

    /// Upper limit on the applied swing factor as a percentage of gross NAV.
    pub max_swing_factor_percent: f64,
}

impl SwingPolicy {
    /// Creates a policy for the given method with default threshold and cap.
    pub fn new(method: SwingMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Sets the partial-swing threshold percentage.
    pub fn with_threshold_percent(mut self, threshold_percent: f64) -> Self {
        self.threshold_percent = threshold_percent;
        self
    }

    /// Sets the swing factor cap percentage.
    pub fn with_max_swing_factor_percent(mut self, max_swing_factor_percent: f64) -> Self {
        self.max_swing_factor_percent = max_swing_factor_percent;
        self
    }

    /// Validates the policy parameters.
    pub fn validate(&self) -> Result<(), SwingPricingError> {
        if !self.threshold_percent.is_finite() || self.threshold_percent < 0.0 {
            return Err(SwingPricingError::InvalidPolicy(format!(
                "threshold must be a finite percentage >= 0, got {}",
                self.threshold_percent
            )));
        }
        if !self.max_swing_factor_percent.is_finite() || self.max_swing_factor_percent < 0.0 {
            return Err(SwingPricingError::InvalidPolicy(format!(
                "max swing factor must be a finite percentage >= 0, got {}",
                self.max_swing_factor_percent
            )));
        }
        Ok(())
    }
}

impl Default for SwingPolicy {
    fn default() -> Self {
        Self {
            method: SwingMethod::default(),
            threshold_percent: 1.0,
            max_swing_factor_percent: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = SwingPolicy::default();
        assert_eq!(policy.method, SwingMethod::PartialSwing);
        assert!((policy.threshold_percent - 1.0).abs() < 1e-10);
        assert!((policy.max_swing_factor_percent - 2.0).abs() < 1e-10);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_policy_builder_pattern() {
        let policy = SwingPolicy::new(SwingMethod::FullSwing)
            .with_threshold_percent(0.5)
            .with_max_swing_factor_percent(1.5);

        assert_eq!(policy.method, SwingMethod::FullSwing);
        assert!((policy.threshold_percent - 0.5).abs() < 1e-10);
        assert!((policy.max_swing_factor_percent - 1.5).abs() < 1e-10);
    }

    #[test]
    fn test_policy_validation_negative_threshold() {
        let policy = SwingPolicy::default().with_threshold_percent(-0.1);
        assert!(matches!(
            policy.validate(),
            Err(SwingPricingError::InvalidPolicy(_))
        ));
    }

    #[test]
    fn test_policy_validation_nan_cap() {
        let policy = SwingPolicy::default().with_max_swing_factor_percent(f64::NAN);
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_policy_validation_zero_cap_valid() {
        // A zero cap is a legitimate "never adjust" policy.
        let policy = SwingPolicy::default().with_max_swing_factor_percent(0.0);
        assert!(policy.validate().is_ok());
    }
}
