//! Demo command implementation
//!
//! Runs the canonical illustrative scenarios so the swing behaviour can be
//! explored without typing parameters: threshold trigger, flat dealing day,
//! capped factor, and net redemption.

use tracing::info;

use swing_core::pricing::{
    DailyFlows, FundState, SwingPolicy, SwingPricingCalculator, TransactionCosts,
};
use swing_core::types::SwingMethod;

use crate::Result;

struct Scenario {
    label: &'static str,
    policy: SwingPolicy,
    fund: FundState,
    flows: DailyFlows,
    costs: TransactionCosts,
}

fn scenarios() -> Vec<Scenario> {
    let partial = SwingPolicy::new(SwingMethod::PartialSwing)
        .with_threshold_percent(1.0)
        .with_max_swing_factor_percent(2.0);
    let full = SwingPolicy::new(SwingMethod::FullSwing).with_max_swing_factor_percent(2.0);

    vec![
        Scenario {
            label: "partial swing, 4% net inflow above 1% threshold",
            policy: partial,
            fund: FundState::new(100.00, 1_000_000),
            flows: DailyFlows::new(50_000, 10_000),
            costs: TransactionCosts::new(0.050, 0.020, 0.030),
        },
        Scenario {
            label: "full swing, flat dealing day",
            policy: full,
            fund: FundState::new(100.00, 1_000_000),
            flows: DailyFlows::new(0, 0),
            costs: TransactionCosts::new(0.050, 0.020, 0.030),
        },
        Scenario {
            label: "full swing, 5% raw factor capped at 2%",
            policy: full,
            fund: FundState::new(100.00, 1_000_000),
            flows: DailyFlows::new(50_000, 10_000),
            costs: TransactionCosts::new(2.0, 1.5, 1.5),
        },
        Scenario {
            label: "full swing, net redemption swings NAV down",
            policy: full,
            fund: FundState::new(100.00, 1_000_000),
            flows: DailyFlows::new(10_000, 50_000),
            costs: TransactionCosts::new(0.050, 0.020, 0.030),
        },
    ]
}

/// Run the demo command
pub fn run() -> Result<()> {
    info!("Running swing pricing demo scenarios...");

    println!("\n┌{:─<49}┬{:─<8}┬{:─<10}┬{:─<11}┐", "", "", "", "");
    println!(
        "│ {:<47} │ {:>6} │ {:>8} │ {:>9} │",
        "Scenario", "Swing?", "Factor %", "Swung NAV"
    );
    println!("├{:─<49}┼{:─<8}┼{:─<10}┼{:─<11}┤", "", "", "", "");

    for scenario in scenarios() {
        let calculator = SwingPricingCalculator::new(scenario.policy);
        let result = calculator.compute(&scenario.fund, &scenario.flows, &scenario.costs)?;

        println!(
            "│ {:<47} │ {:>6} │ {:>8.2} │ {:>9.2} │",
            scenario.label,
            if result.apply_swing { "yes" } else { "no" },
            result.applied_swing_factor_percent,
            result.nav_per_share_swung,
        );
    }

    println!("└{:─<49}┴{:─<8}┴{:─<10}┴{:─<11}┘", "", "", "", "");

    info!("Demo complete");
    Ok(())
}
