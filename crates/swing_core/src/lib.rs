//! # swing_core: Swing Pricing Kernel
//!
//! ## Role
//!
//! swing_core is the calculation layer of the swing pricing stack, providing:
//! - Swing methodology types: `SwingMethod` (`types::method`)
//! - Error types: `SwingPricingError` (`types::error`)
//! - Input parameter structs: `FundState`, `DailyFlows`, `TransactionCosts` (`pricing::inputs`)
//! - Policy configuration: `SwingPolicy` (`pricing::policy`)
//! - The pricing kernel itself: `SwingPricingCalculator` (`pricing::calculator`)
//! - The derived result record: `SwingPricingResult` (`pricing::result`)
//!
//! ## Purity Principle
//!
//! The kernel is a single deterministic arithmetic pass: identical inputs always
//! produce an identical result record. It holds no shared state, performs no I/O,
//! and never mutates its inputs, so it is safe to call from any number of
//! independent call sites without coordination.
//!
//! Division-by-zero conditions (zero shares outstanding, zero gross NAV) are
//! defined to degrade to zero-valued percentage outputs rather than signalling
//! an error; see `pricing::calculator` for the documented fallback policy.
//!
//! ## Usage Example
//!
//! ```rust
//! use swing_core::pricing::{
//!     DailyFlows, FundState, SwingPolicy, SwingPricingCalculator, TransactionCosts,
//! };
//! use swing_core::types::SwingMethod;
//!
//! let policy = SwingPolicy::new(SwingMethod::PartialSwing)
//!     .with_threshold_percent(1.0)
//!     .with_max_swing_factor_percent(2.0);
//!
//! let calculator = SwingPricingCalculator::new(policy);
//! let result = calculator
//!     .compute(
//!         &FundState::new(100.0, 1_000_000),
//!         &DailyFlows::new(50_000, 10_000),
//!         &TransactionCosts::new(0.050, 0.020, 0.030),
//!     )
//!     .unwrap();
//!
//! assert!(result.apply_swing);
//! assert!((result.nav_per_share_swung - 100.10).abs() < 1e-9);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod pricing;
pub mod types;

// Re-export commonly used items for convenience
pub use pricing::{
    DailyFlows, FundState, SwingPolicy, SwingPricingCalculator, SwingPricingResult,
    TransactionCosts,
};
pub use types::{SwingMethod, SwingPricingError};
