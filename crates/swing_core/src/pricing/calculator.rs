//! Swing pricing calculator implementation.
//!
//! A single deterministic arithmetic pass from fund, flow, cost, and policy
//! parameters to a [`SwingPricingResult`]. The calculator holds no state beyond
//! its policy and never mutates its inputs.

use super::inputs::{DailyFlows, FundState, TransactionCosts};
use super::policy::SwingPolicy;
use super::result::SwingPricingResult;
use crate::types::{SwingMethod, SwingPricingError};

/// Swing pricing calculator.
///
/// Computes the swung NAV per share and dilution diagnostics for one valuation.
///
/// # Fallback Policy
///
/// The calculation is total over its validated domain. The two potential
/// division-by-zero conditions are defined to degrade, not to fail:
///
/// - `shares_outstanding == 0` → `net_flow_percentage = 0`, so a partial swing
///   never triggers regardless of raw flow;
/// - `nav_per_share_gross == 0` → `raw_swing_factor_percent = 0` and
///   `dilution_impact_percent = 0`.
///
/// # Examples
///
/// ```rust
/// use swing_core::pricing::{
///     DailyFlows, FundState, SwingPolicy, SwingPricingCalculator, TransactionCosts,
/// };
///
/// let calculator = SwingPricingCalculator::new(SwingPolicy::default());
/// let result = calculator
///     .compute(
///         &FundState::default(),
///         &DailyFlows::default(),
///         &TransactionCosts::default(),
///     )
///     .unwrap();
/// assert!((result.nav_per_share_swung - 100.10).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwingPricingCalculator {
    policy: SwingPolicy,
}

impl SwingPricingCalculator {
    /// Creates a new calculator with the given swing policy.
    pub fn new(policy: SwingPolicy) -> Self {
        Self { policy }
    }

    /// Returns a reference to the policy.
    pub fn policy(&self) -> &SwingPolicy {
        &self.policy
    }

    /// Computes the swung NAV and diagnostics for one valuation.
    ///
    /// # Arguments
    ///
    /// * `fund` - Gross NAV per share and shares outstanding
    /// * `flows` - The day's subscription and redemption units
    /// * `costs` - Estimated transaction cost components per unit of flow
    ///
    /// # Returns
    ///
    /// The complete [`SwingPricingResult`] record. Identical inputs always
    /// yield an identical record.
    ///
    /// # Errors
    ///
    /// Returns `SwingPricingError` if:
    /// - A fund or cost decimal is negative or non-finite
    /// - The policy threshold or cap is negative or non-finite
    pub fn compute(
        &self,
        fund: &FundState,
        flows: &DailyFlows,
        costs: &TransactionCosts,
    ) -> Result<SwingPricingResult, SwingPricingError> {
        self.policy.validate()?;
        fund.validate()?;
        costs.validate()?;

        let total_fund_assets = fund.total_assets();
        let net_flow_units = flows.net_units();

        // Fallback: an empty fund has no meaningful flow percentage.
        let net_flow_percentage = if fund.shares_outstanding > 0 {
            (net_flow_units.unsigned_abs() as f64 / fund.shares_outstanding as f64) * 100.0
        } else {
            0.0
        };

        let apply_swing = match self.policy.method {
            SwingMethod::FullSwing => true,
            // Strict inequality: flow exactly at the threshold does not swing.
            SwingMethod::PartialSwing => net_flow_percentage > self.policy.threshold_percent,
        };

        // The raw per-share adjustment is the straight sum of the per-unit cost
        // components; inflow and outflow costs are not weighted separately.
        let total_transaction_cost_per_unit = costs.total_per_unit();
        let nav_adjustment_per_share_raw = total_transaction_cost_per_unit;

        // Fallback: a zero-NAV fund has no meaningful factor percentage.
        let raw_swing_factor_percent = if fund.nav_per_share_gross > 0.0 {
            (nav_adjustment_per_share_raw / fund.nav_per_share_gross) * 100.0
        } else {
            0.0
        };

        let capped_swing_factor_percent =
            raw_swing_factor_percent.min(self.policy.max_swing_factor_percent);

        // The swing direction penalises the transacting side: net subscribers
        // buy at a higher NAV, net redeemers sell at a lower one.
        let nav_per_share_swung = if apply_swing && net_flow_units != 0 {
            if net_flow_units > 0 {
                fund.nav_per_share_gross * (1.0 + capped_swing_factor_percent / 100.0)
            } else {
                fund.nav_per_share_gross * (1.0 - capped_swing_factor_percent / 100.0)
            }
        } else {
            fund.nav_per_share_gross
        };

        let dilution_impact_per_share = (nav_per_share_swung - fund.nav_per_share_gross).abs();
        let dilution_impact_percent = if fund.nav_per_share_gross > 0.0 {
            (dilution_impact_per_share / fund.nav_per_share_gross) * 100.0
        } else {
            0.0
        };

        Ok(SwingPricingResult {
            nav_per_share_gross: fund.nav_per_share_gross,
            total_fund_assets,
            net_flow_units,
            net_flow_percentage,
            total_transaction_cost_per_unit,
            nav_adjustment_per_share_raw,
            raw_swing_factor_percent,
            applied_swing_factor_percent: if apply_swing {
                capped_swing_factor_percent
            } else {
                0.0
            },
            apply_swing,
            nav_per_share_swung,
            dilution_impact_per_share,
            dilution_impact_percent,
        })
    }
}

impl Default for SwingPricingCalculator {
    fn default() -> Self {
        Self::new(SwingPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_calculator_holds_policy() {
        let policy = SwingPolicy::new(SwingMethod::FullSwing).with_max_swing_factor_percent(1.5);
        let calculator = SwingPricingCalculator::new(policy);
        assert_eq!(calculator.policy().method, SwingMethod::FullSwing);
        assert_relative_eq!(calculator.policy().max_swing_factor_percent, 1.5);
    }

    #[test]
    fn test_partial_swing_strict_threshold_boundary() {
        // 10_000 / 1_000_000 = exactly 1.0%; strict inequality must not fire.
        let calculator = SwingPricingCalculator::new(
            SwingPolicy::new(SwingMethod::PartialSwing).with_threshold_percent(1.0),
        );
        let result = calculator
            .compute(
                &FundState::new(100.0, 1_000_000),
                &DailyFlows::new(10_000, 0),
                &TransactionCosts::default(),
            )
            .unwrap();

        assert!(!result.apply_swing);
        assert_relative_eq!(result.net_flow_percentage, 1.0);
        assert_relative_eq!(result.nav_per_share_swung, 100.0);
        assert_relative_eq!(result.applied_swing_factor_percent, 0.0);
    }

    #[test]
    fn test_partial_swing_fires_above_threshold() {
        let calculator = SwingPricingCalculator::new(
            SwingPolicy::new(SwingMethod::PartialSwing).with_threshold_percent(1.0),
        );
        let result = calculator
            .compute(
                &FundState::new(100.0, 1_000_000),
                &DailyFlows::new(10_001, 0),
                &TransactionCosts::default(),
            )
            .unwrap();

        assert!(result.apply_swing);
        assert!(result.nav_per_share_swung > 100.0);
    }

    #[test]
    fn test_full_swing_applies_regardless_of_flow_size() {
        let calculator = SwingPricingCalculator::new(SwingPolicy::new(SwingMethod::FullSwing));
        let result = calculator
            .compute(
                &FundState::new(100.0, 1_000_000),
                &DailyFlows::new(1, 0),
                &TransactionCosts::default(),
            )
            .unwrap();

        assert!(result.apply_swing);
        assert!(result.nav_per_share_swung > 100.0);
    }

    #[test]
    fn test_zero_net_flow_leaves_nav_unchanged() {
        // apply_swing stays true under full swing, but the NAV does not move.
        let calculator = SwingPricingCalculator::new(SwingPolicy::new(SwingMethod::FullSwing));
        let result = calculator
            .compute(
                &FundState::new(100.0, 1_000_000),
                &DailyFlows::new(25_000, 25_000),
                &TransactionCosts::default(),
            )
            .unwrap();

        assert!(result.apply_swing);
        assert_eq!(result.net_flow_units, 0);
        assert_relative_eq!(result.nav_per_share_swung, 100.0);
        assert_relative_eq!(result.dilution_impact_per_share, 0.0);
        assert_relative_eq!(result.dilution_impact_percent, 0.0);
    }

    #[test]
    fn test_zero_shares_outstanding_fallback() {
        let calculator = SwingPricingCalculator::new(
            SwingPolicy::new(SwingMethod::PartialSwing).with_threshold_percent(0.5),
        );
        let result = calculator
            .compute(
                &FundState::new(100.0, 0),
                &DailyFlows::new(1_000_000, 0),
                &TransactionCosts::default(),
            )
            .unwrap();

        assert_relative_eq!(result.net_flow_percentage, 0.0);
        assert!(!result.apply_swing);
        assert_relative_eq!(result.nav_per_share_swung, 100.0);
    }

    #[test]
    fn test_zero_gross_nav_fallback() {
        let calculator = SwingPricingCalculator::new(SwingPolicy::new(SwingMethod::FullSwing));
        let result = calculator
            .compute(
                &FundState::new(0.0, 1_000_000),
                &DailyFlows::new(50_000, 10_000),
                &TransactionCosts::default(),
            )
            .unwrap();

        assert_relative_eq!(result.raw_swing_factor_percent, 0.0);
        assert_relative_eq!(result.nav_per_share_swung, 0.0);
        assert_relative_eq!(result.dilution_impact_percent, 0.0);
    }

    #[test]
    fn test_swing_factor_capped() {
        let calculator = SwingPricingCalculator::new(
            SwingPolicy::new(SwingMethod::FullSwing).with_max_swing_factor_percent(2.0),
        );
        let result = calculator
            .compute(
                &FundState::new(100.0, 1_000_000),
                &DailyFlows::new(50_000, 10_000),
                &TransactionCosts::new(3.0, 1.0, 1.0),
            )
            .unwrap();

        assert_relative_eq!(result.raw_swing_factor_percent, 5.0);
        assert_relative_eq!(result.applied_swing_factor_percent, 2.0);
        assert_relative_eq!(result.nav_per_share_swung, 102.0);
    }

    #[test]
    fn test_net_redemption_swings_down() {
        let calculator = SwingPricingCalculator::new(SwingPolicy::new(SwingMethod::FullSwing));
        let result = calculator
            .compute(
                &FundState::new(100.0, 1_000_000),
                &DailyFlows::new(10_000, 50_000),
                &TransactionCosts::default(),
            )
            .unwrap();

        assert_eq!(result.net_flow_units, -40_000);
        assert_relative_eq!(result.nav_per_share_swung, 99.90, epsilon = 1e-9);
        assert_relative_eq!(result.dilution_impact_per_share, 0.10, epsilon = 1e-9);
    }

    #[test]
    fn test_applied_factor_reported_zero_when_not_applied() {
        let calculator = SwingPricingCalculator::new(
            SwingPolicy::new(SwingMethod::PartialSwing).with_threshold_percent(10.0),
        );
        let result = calculator
            .compute(
                &FundState::new(100.0, 1_000_000),
                &DailyFlows::new(50_000, 10_000),
                &TransactionCosts::default(),
            )
            .unwrap();

        assert!(!result.apply_swing);
        // The raw factor is still reported for diagnostics.
        assert_relative_eq!(result.raw_swing_factor_percent, 0.10, epsilon = 1e-12);
        assert_relative_eq!(result.applied_swing_factor_percent, 0.0);
    }

    #[test]
    fn test_rejects_invalid_inputs() {
        let calculator = SwingPricingCalculator::default();
        let err = calculator
            .compute(
                &FundState::new(-1.0, 1_000),
                &DailyFlows::default(),
                &TransactionCosts::default(),
            )
            .unwrap_err();
        assert!(matches!(err, SwingPricingError::InvalidInput(_)));

        let err = calculator
            .compute(
                &FundState::default(),
                &DailyFlows::default(),
                &TransactionCosts::new(0.05, f64::NAN, 0.03),
            )
            .unwrap_err();
        assert!(matches!(err, SwingPricingError::InvalidInput(_)));
    }

    #[test]
    fn test_rejects_invalid_policy() {
        let calculator = SwingPricingCalculator::new(
            SwingPolicy::default().with_max_swing_factor_percent(-2.0),
        );
        let err = calculator
            .compute(
                &FundState::default(),
                &DailyFlows::default(),
                &TransactionCosts::default(),
            )
            .unwrap_err();
        assert!(matches!(err, SwingPricingError::InvalidPolicy(_)));
    }

    #[test]
    fn test_referential_transparency() {
        let calculator = SwingPricingCalculator::default();
        let fund = FundState::new(87.31, 3_456_789);
        let flows = DailyFlows::new(123_456, 98_765);
        let costs = TransactionCosts::new(0.013, 0.007, 0.041);

        let first = calculator.compute(&fund, &flows, &costs).unwrap();
        let second = calculator.compute(&fund, &flows, &costs).unwrap();
        assert_eq!(first, second);
    }
}
