//! Input parameter structs for the swing pricing kernel.
//!
//! Parameters are grouped the way the calculation consumes them: the fund
//! snapshot, the day's dealing activity, and the estimated transaction cost
//! components. Integer quantities use unsigned types so negative share or unit
//! counts are unrepresentable; decimal fields are validated to be finite and
//! non-negative before the calculation runs.

use serde::{Deserialize, Serialize};

use crate::types::SwingPricingError;

/// Checks that a decimal parameter is finite and non-negative.
fn validate_non_negative(value: f64, name: &str) -> Result<(), SwingPricingError> {
    if !value.is_finite() {
        return Err(SwingPricingError::InvalidInput(format!(
            "{} must be finite, got {}",
            name, value
        )));
    }
    if value < 0.0 {
        return Err(SwingPricingError::InvalidInput(format!(
            "{} must be >= 0, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Fund snapshot at the valuation point.
///
/// # Examples
/// ```
/// use swing_core::pricing::FundState;
///
/// let fund = FundState::new(100.0, 1_000_000);
/// assert!((fund.total_assets() - 100_000_000.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FundState {
    /// NAV per share before any swing adjustment.
    pub nav_per_share_gross: f64,

    /// Total number of shares currently issued by the fund.
    pub shares_outstanding: u64,
}

impl FundState {
    /// Creates a new fund snapshot.
    pub fn new(nav_per_share_gross: f64, shares_outstanding: u64) -> Self {
        Self {
            nav_per_share_gross,
            shares_outstanding,
        }
    }

    /// Total fund assets before any swing adjustment.
    #[inline]
    pub fn total_assets(&self) -> f64 {
        self.nav_per_share_gross * self.shares_outstanding as f64
    }

    /// Validates the fund parameters.
    ///
    /// Zero gross NAV and zero shares outstanding are accepted: the kernel
    /// defines zero-fallback outputs for both rather than treating them as
    /// errors.
    pub fn validate(&self) -> Result<(), SwingPricingError> {
        validate_non_negative(self.nav_per_share_gross, "gross NAV per share")
    }
}

impl Default for FundState {
    fn default() -> Self {
        Self {
            nav_per_share_gross: 100.00,
            shares_outstanding: 1_000_000,
        }
    }
}

/// Daily dealing activity in units.
///
/// # Examples
/// ```
/// use swing_core::pricing::DailyFlows;
///
/// let flows = DailyFlows::new(50_000, 10_000);
/// assert_eq!(flows.net_units(), 40_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyFlows {
    /// Total units subscribed by investors for the day.
    pub subscriptions: u64,

    /// Total units redeemed by investors for the day.
    pub redemptions: u64,
}

impl DailyFlows {
    /// Creates a new daily flow record.
    pub fn new(subscriptions: u64, redemptions: u64) -> Self {
        Self {
            subscriptions,
            redemptions,
        }
    }

    /// Net flow in units; positive means net inflow.
    #[inline]
    pub fn net_units(&self) -> i64 {
        self.subscriptions as i64 - self.redemptions as i64
    }

    /// Returns true if subscriptions and redemptions exactly offset.
    #[inline]
    pub fn is_flat(&self) -> bool {
        self.subscriptions == self.redemptions
    }
}

impl Default for DailyFlows {
    fn default() -> Self {
        Self {
            subscriptions: 50_000,
            redemptions: 10_000,
        }
    }
}

/// Estimated transaction cost components per unit of flow.
///
/// Costs are incurred when the fund trades underlying securities to meet
/// investor flows: explicit costs (brokerage, market charges, taxes) and
/// implicit costs (bid-ask spread, market impact).
///
/// # Examples
/// ```
/// use swing_core::pricing::TransactionCosts;
///
/// let costs = TransactionCosts::new(0.050, 0.020, 0.030);
/// assert!((costs.total_per_unit() - 0.100).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransactionCosts {
    /// Explicit cost per unit traded (brokerage, market charges, taxes).
    pub explicit_per_unit: f64,

    /// Implicit cost per unit from the bid-ask spread.
    pub bid_ask_per_unit: f64,

    /// Implicit cost per unit from market impact of the trading itself.
    pub market_impact_per_unit: f64,
}

impl TransactionCosts {
    /// Creates a new cost estimate.
    pub fn new(explicit_per_unit: f64, bid_ask_per_unit: f64, market_impact_per_unit: f64) -> Self {
        Self {
            explicit_per_unit,
            bid_ask_per_unit,
            market_impact_per_unit,
        }
    }

    /// Total estimated transaction cost per unit of net flow.
    ///
    /// The model treats this sum directly as the raw NAV adjustment per share;
    /// inflow and outflow costs are not weighted separately.
    #[inline]
    pub fn total_per_unit(&self) -> f64 {
        self.explicit_per_unit + self.bid_ask_per_unit + self.market_impact_per_unit
    }

    /// Validates the cost parameters.
    pub fn validate(&self) -> Result<(), SwingPricingError> {
        validate_non_negative(self.explicit_per_unit, "explicit cost per unit")?;
        validate_non_negative(self.bid_ask_per_unit, "bid-ask cost per unit")?;
        validate_non_negative(self.market_impact_per_unit, "market impact cost per unit")?;
        Ok(())
    }
}

impl Default for TransactionCosts {
    fn default() -> Self {
        Self {
            explicit_per_unit: 0.050,
            bid_ask_per_unit: 0.020,
            market_impact_per_unit: 0.030,
        }
    }
}
