use std::time::Instant;

use clap::Args;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use fincalc_core::bounds;
use fincalc_core::simple_interest::compute_simple_interest;
use fincalc_core::types::with_metadata;

/// Arguments for simple interest
#[derive(Args)]
pub struct SimpleInterestArgs {
    /// Principal amount
    #[arg(long)]
    pub principal: Decimal,

    /// Annual interest rate in percent
    #[arg(long)]
    pub rate: Decimal,

    /// Time period in years (fractions allowed)
    #[arg(long)]
    pub years: Decimal,
}

#[derive(Debug, Serialize, Deserialize)]
struct SimpleInterestResult {
    total_interest: Decimal,
    total_amount: Decimal,
}

#[derive(Debug, Serialize, Deserialize)]
struct SimpleInterestAssumptions {
    principal: Decimal,
    annual_rate_percent: Decimal,
    years: Decimal,
}

pub fn run_simple_interest(args: SimpleInterestArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let principal = super::clamp_with_warning(
        "principal",
        args.principal,
        &bounds::SIMPLE_PRINCIPAL_BOUNDS,
        &mut warnings,
    );
    let rate =
        super::clamp_with_warning("rate", args.rate, &bounds::SIMPLE_RATE_BOUNDS, &mut warnings);
    let years =
        super::clamp_with_warning("years", args.years, &bounds::SIMPLE_TIME_BOUNDS, &mut warnings);

    let result = compute_simple_interest(principal, rate, years);

    let assumptions = SimpleInterestAssumptions {
        principal,
        annual_rate_percent: rate,
        years,
    };

    let envelope = with_metadata(
        "interest = principal * rate * years / 100, no compounding",
        &assumptions,
        warnings,
        start.elapsed().as_micros() as u64,
        SimpleInterestResult {
            total_interest: result.total_interest,
            total_amount: result.total_amount,
        },
    );
    Ok(serde_json::to_value(envelope)?)
}
