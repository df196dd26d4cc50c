use std::time::Instant;

use clap::Args;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use fincalc_core::bounds;
use fincalc_core::export;
use fincalc_core::sip::{compute_sip, SipYearRow};
use fincalc_core::types::with_metadata;

/// Arguments for SIP projection
#[derive(Args)]
pub struct SipArgs {
    /// Contribution invested at the start of every month
    #[arg(long)]
    pub amount: Decimal,

    /// Expected annual return in percent (12 = 12%)
    #[arg(long)]
    pub rate: Decimal,

    /// Investment horizon in whole years
    #[arg(long)]
    pub tenure_years: u32,

    /// Include the year-by-year growth series in the output
    #[arg(long)]
    pub series: bool,

    /// Write the yearly series to a CSV file
    #[arg(long, value_name = "FILE")]
    pub export: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SipResult {
    invested_amount: Decimal,
    estimated_returns: Decimal,
    total_value: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    yearly_series: Option<Vec<SipYearRow>>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SipAssumptions {
    monthly_contribution: Decimal,
    annual_return_percent: Decimal,
    tenure_years: u32,
}

pub fn run_sip(args: SipArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let amount = super::clamp_with_warning(
        "amount",
        args.amount,
        &bounds::SIP_AMOUNT_BOUNDS,
        &mut warnings,
    );
    let rate = super::clamp_with_warning("rate", args.rate, &bounds::SIP_RATE_BOUNDS, &mut warnings);
    let tenure_years = super::clamp_years(
        "tenure_years",
        args.tenure_years,
        &bounds::SIP_TENURE_BOUNDS,
        &mut warnings,
    );

    let projection = compute_sip(amount, rate, tenure_years);

    if let Some(ref path) = args.export {
        let rows = export::sip_series_rows(&projection.yearly_series);
        if rows.is_empty() {
            warnings.push("series is empty, no CSV written".into());
        } else {
            super::write_csv(path, &export::SIP_SERIES_HEADERS, &rows)?;
        }
    }

    let assumptions = SipAssumptions {
        monthly_contribution: amount,
        annual_return_percent: rate,
        tenure_years,
    };

    let result = SipResult {
        invested_amount: projection.summary.invested_amount,
        estimated_returns: projection.summary.estimated_returns,
        total_value: projection.summary.total_value,
        yearly_series: args.series.then_some(projection.yearly_series),
    };

    let envelope = with_metadata(
        "Annuity-due future value at rate/12; contributions at the start of each month",
        &assumptions,
        warnings,
        start.elapsed().as_micros() as u64,
        result,
    );
    Ok(serde_json::to_value(envelope)?)
}
