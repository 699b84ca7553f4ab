//! Swing pricing calculation.
//!
//! This module provides:
//! - Input parameter structs: `FundState`, `DailyFlows`, `TransactionCosts` (`inputs`)
//! - Policy configuration: `SwingPolicy` (`policy`)
//! - The calculator: `SwingPricingCalculator` (`calculator`)
//! - The result record: `SwingPricingResult` (`result`)
//!
//! The calculator is the only component with decision logic (threshold
//! comparison, cost aggregation, capped adjustment, directional sign).
//! Everything upstream of it is expected to collect and range-validate inputs;
//! everything downstream renders the returned record.

pub mod calculator;
pub mod inputs;
pub mod policy;
pub mod result;

pub use calculator::SwingPricingCalculator;
pub use inputs::{DailyFlows, FundState, TransactionCosts};
pub use policy::SwingPolicy;
pub use result::SwingPricingResult;
