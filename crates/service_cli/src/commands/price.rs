//! Price command implementation
//!
//! Collects one valuation's parameters, range-validates them, invokes the
//! swing pricing kernel, and renders the result record.

use clap::Args;
use tracing::info;

use swing_core::pricing::{
    DailyFlows, FundState, SwingPolicy, SwingPricingCalculator, SwingPricingResult,
    TransactionCosts,
};
use swing_core::types::SwingMethod;

use crate::{CliError, Result};

/// Arguments for the price command.
///
/// Defaults mirror the reference scenario: a 100.00 NAV fund of one million
/// shares with a 40,000-unit net inflow and 0.100 total cost per unit.
#[derive(Args)]
pub struct PriceArgs {
    /// Gross NAV per share (before swing)
    #[arg(long, default_value_t = 100.00)]
    pub nav: f64,

    /// Total shares outstanding
    #[arg(long, default_value_t = 1_000_000)]
    pub shares: u64,

    /// Subscription units (inflows)
    #[arg(long, default_value_t = 50_000)]
    pub subscriptions: u64,

    /// Redemption units (outflows)
    #[arg(long, default_value_t = 10_000)]
    pub redemptions: u64,

    /// Explicit cost per unit (brokerage, market charges, taxes)
    #[arg(long, default_value_t = 0.050)]
    pub explicit_cost: f64,

    /// Implicit cost per unit (bid-ask spread)
    #[arg(long, default_value_t = 0.020)]
    pub bid_ask_cost: f64,

    /// Implicit cost per unit (market impact)
    #[arg(long, default_value_t = 0.030)]
    pub market_impact_cost: f64,

    /// Swing method (full-swing, partial-swing)
    #[arg(short, long, default_value = "partial-swing")]
    pub method: String,

    /// Partial swing threshold (% of shares outstanding)
    #[arg(long, default_value_t = 1.0)]
    pub threshold: f64,

    /// Maximum swing factor limit (% of NAV)
    #[arg(long, default_value_t = 2.0)]
    pub cap: f64,

    /// Output format (json, table)
    #[arg(short, long, default_value = "table")]
    pub format: String,
}

/// Caller-side range checks, stricter than the kernel's own validation.
///
/// The kernel accepts zero NAV and zero shares as documented fallback cases;
/// the CLI treats them as operator mistakes, the way the original input form
/// constrained its fields.
fn validate_ranges(args: &PriceArgs) -> Result<()> {
    if args.nav < 0.01 {
        return Err(CliError::InvalidArgument(format!(
            "--nav must be >= 0.01, got {}",
            args.nav
        )));
    }
    if args.shares < 1 {
        return Err(CliError::InvalidArgument(
            "--shares must be >= 1".to_string(),
        ));
    }
    for (value, name) in [
        (args.explicit_cost, "--explicit-cost"),
        (args.bid_ask_cost, "--bid-ask-cost"),
        (args.market_impact_cost, "--market-impact-cost"),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(CliError::InvalidArgument(format!(
                "{} must be >= 0, got {}",
                name, value
            )));
        }
    }
    for (value, name) in [(args.threshold, "--threshold"), (args.cap, "--cap")] {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(CliError::InvalidArgument(format!(
                "{} must be within [0, 100], got {}",
                name, value
            )));
        }
    }
    Ok(())
}

/// Run the price command
pub fn run(args: &PriceArgs) -> Result<()> {
    validate_ranges(args)?;

    let method: SwingMethod = args.method.parse()?;
    let policy = SwingPolicy::new(method)
        .with_threshold_percent(args.threshold)
        .with_max_swing_factor_percent(args.cap);

    info!("Starting swing pricing...");
    info!("  Method: {}", method);
    info!("  Threshold: {:.1}%", args.threshold);
    info!("  Swing factor cap: {:.1}%", args.cap);

    let calculator = SwingPricingCalculator::new(policy);
    let result = calculator.compute(
        &FundState::new(args.nav, args.shares),
        &DailyFlows::new(args.subscriptions, args.redemptions),
        &TransactionCosts::new(args.explicit_cost, args.bid_ask_cost, args.market_impact_cost),
    )?;

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        "table" => {
            render_table(&result);
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, table",
                other
            )));
        }
    }

    info!("Pricing complete");
    Ok(())
}

/// Renders the result record as an aligned two-column table.
fn render_table(result: &SwingPricingResult) {
    let rows: Vec<(&str, String)> = vec![
        ("Gross NAV per share", format!("{:.2}", result.nav_per_share_gross)),
        ("Total fund assets (gross)", format!("{:.2}", result.total_fund_assets)),
        ("Net flow (units)", format!("{}", result.net_flow_units)),
        ("Net flow (% of shares)", format!("{:.2}%", result.net_flow_percentage)),
        (
            "Total cost per unit of flow",
            format!("{:.3}", result.total_transaction_cost_per_unit),
        ),
        (
            "Raw swing factor (% of NAV)",
            format!("{:.2}%", result.raw_swing_factor_percent),
        ),
        (
            "Swing applied?",
            if result.apply_swing { "yes" } else { "no" }.to_string(),
        ),
        (
            "Applied swing factor (% of NAV)",
            format!("{:.2}%", result.applied_swing_factor_percent),
        ),
        ("Swung NAV per share", format!("{:.2}", result.nav_per_share_swung)),
        (
            "Dilution impact per share",
            format!("{:.4}", result.dilution_impact_per_share),
        ),
        (
            "Dilution impact (% of NAV)",
            format!("{:.4}%", result.dilution_impact_percent),
        ),
    ];

    println!("\n┌{:─<33}┬{:─<22}┐", "", "");
    for (label, value) in rows {
        println!("│ {:<31} │ {:>20} │", label, value);
    }
    println!("└{:─<33}┴{:─<22}┘", "", "");
}
