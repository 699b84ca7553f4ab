//! Result record for the swing pricing calculation.

use serde::{Deserialize, Serialize};

/// Swing pricing calculation result.
///
/// Every field is derived in a single pass from the inputs; the record has no
/// independent identity or lifecycle. All percentage fields are expressed in
/// percent (4.0 means 4%), and the dilution fields are magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwingPricingResult {
    /// Gross NAV per share, echoed from the inputs.
    pub nav_per_share_gross: f64,

    /// Total fund assets before adjustment (gross NAV x shares outstanding).
    pub total_fund_assets: f64,

    /// Net flow in units; positive means net inflow.
    pub net_flow_units: i64,

    /// Absolute net flow as a percentage of shares outstanding.
    ///
    /// Zero when shares outstanding is zero (documented fallback).
    pub net_flow_percentage: f64,

    /// Sum of the per-unit cost components.
    pub total_transaction_cost_per_unit: f64,

    /// Raw NAV adjustment per share (equal to the total per-unit cost).
    pub nav_adjustment_per_share_raw: f64,

    /// Raw swing factor as a percentage of gross NAV, before the cap.
    ///
    /// Zero when gross NAV is zero (documented fallback).
    pub raw_swing_factor_percent: f64,

    /// Swing factor actually applied, capped at the policy maximum.
    ///
    /// Reported as zero when the swing was not applied.
    pub applied_swing_factor_percent: f64,

    /// Whether the swing decision fired for this valuation.
    pub apply_swing: bool,

    /// NAV per share after the swing adjustment.
    pub nav_per_share_swung: f64,

    /// Magnitude of the per-share NAV change attributable to the swing.
    pub dilution_impact_per_share: f64,

    /// Dilution impact magnitude as a percentage of gross NAV.
    pub dilution_impact_percent: f64,
}

impl SwingPricingResult {
    /// Signed per-share NAV change (positive when swung up).
    #[inline]
    pub fn nav_delta_per_share(&self) -> f64 {
        self.nav_per_share_swung - self.nav_per_share_gross
    }

    /// Returns true if the swing decision fired and actually moved the NAV.
    ///
    /// `apply_swing` can be true with zero net flow under full swing; in that
    /// case the NAV is unchanged and this returns false.
    #[inline]
    pub fn is_adjusted(&self) -> bool {
        self.apply_swing && self.net_flow_units != 0 && self.applied_swing_factor_percent > 0.0
    }
}
