//! Shared types for the swing pricing kernel.
//!
//! This module provides:
//! - `SwingMethod`: the swing methodology selector (`method`)
//! - `SwingPricingError`: structured errors for input and policy validation (`error`)

pub mod error;
pub mod method;

pub use error::SwingPricingError;
pub use method::SwingMethod;
