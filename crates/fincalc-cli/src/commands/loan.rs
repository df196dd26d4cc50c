use std::time::Instant;

use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use fincalc_core::bounds;
use fincalc_core::export;
use fincalc_core::loan::schedule::{compute_loan, AmortizationRow, LoanTerms, RepaymentMode};
use fincalc_core::types::with_metadata;

/// Arguments for a single-loan amortization
#[derive(Args)]
pub struct LoanArgs {
    /// Loan principal
    #[arg(long)]
    pub principal: Decimal,

    /// Nominal annual interest rate in percent (8.5 = 8.5%)
    #[arg(long)]
    pub rate: Decimal,

    /// Loan tenure in whole years
    #[arg(long)]
    pub tenure_years: u32,

    /// Repayment mode
    #[arg(long, value_enum, default_value = "equal-installment")]
    pub mode: RepaymentModeArg,

    /// Reference date anchoring the schedule's month labels (YYYY-MM-DD);
    /// defaults to today
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Include the full month-by-month schedule in the output
    #[arg(long)]
    pub schedule: bool,

    /// Write the schedule to a CSV file
    #[arg(long, value_name = "FILE")]
    pub export: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RepaymentModeArg {
    /// Fixed total payment every month (standard EMI)
    EqualInstallment,
    /// Fixed principal component; total payment declines
    EqualPrincipal,
}

impl From<RepaymentModeArg> for RepaymentMode {
    fn from(mode: RepaymentModeArg) -> Self {
        match mode {
            RepaymentModeArg::EqualInstallment => RepaymentMode::EqualInstallment,
            RepaymentModeArg::EqualPrincipal => RepaymentMode::EqualPrincipal,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct LoanResult {
    first_payment: Decimal,
    total_interest: Decimal,
    total_payment: Decimal,
    months: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    schedule: Option<Vec<AmortizationRow>>,
}

#[derive(Debug, Serialize, Deserialize)]
struct LoanAssumptions {
    principal: Decimal,
    annual_rate_percent: Decimal,
    tenure_years: u32,
    mode: RepaymentMode,
    start_date: NaiveDate,
}

pub fn run_loan(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let principal = super::clamp_with_warning(
        "principal",
        args.principal,
        &bounds::LOAN_AMOUNT_BOUNDS,
        &mut warnings,
    );
    let rate = super::clamp_with_warning("rate", args.rate, &bounds::LOAN_RATE_BOUNDS, &mut warnings);
    let tenure_years = super::clamp_years(
        "tenure_years",
        args.tenure_years,
        &bounds::LOAN_TENURE_BOUNDS,
        &mut warnings,
    );

    let terms = LoanTerms {
        principal,
        annual_rate_percent: rate,
        tenure_years,
        mode: args.mode.into(),
    };
    let start_date = super::resolve_start_date(args.start_date);
    let metrics = compute_loan(&terms, start_date);

    if let Some(ref path) = args.export {
        let rows = export::loan_schedule_rows(&metrics);
        if rows.is_empty() {
            warnings.push("schedule is empty, no CSV written".into());
        } else {
            super::write_csv(path, &export::LOAN_SCHEDULE_HEADERS, &rows)?;
        }
    }

    let assumptions = LoanAssumptions {
        principal: terms.principal,
        annual_rate_percent: terms.annual_rate_percent,
        tenure_years: terms.tenure_years,
        mode: terms.mode,
        start_date,
    };

    let result = LoanResult {
        first_payment: metrics.first_payment,
        total_interest: metrics.total_interest,
        total_payment: metrics.total_payment,
        months: metrics.schedule.len(),
        schedule: args.schedule.then_some(metrics.schedule),
    };

    let envelope = with_metadata(
        "Monthly amortization of a reducing balance at rate/12; the final period absorbs rounding drift so the loan retires to zero",
        &assumptions,
        warnings,
        start.elapsed().as_micros() as u64,
        result,
    );
    Ok(serde_json::to_value(envelope)?)
}
