use std::time::Instant;

use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use fincalc_core::bounds;
use fincalc_core::export;
use fincalc_core::loan::comparison::{LoanComparison, SCHEDULE_PAGE_ROWS};
use fincalc_core::loan::schedule::{compute_loan, AmortizationRow, LoanTerms, RepaymentMode};
use fincalc_core::types::with_metadata;

use crate::input;

/// Arguments for side-by-side loan comparison
#[derive(Args)]
pub struct CompareArgs {
    /// Path to a JSON or YAML file holding an array of loan terms (at most 3)
    #[arg(long)]
    pub input: Option<String>,

    /// Scenario id to make active (defaults to the first loan)
    #[arg(long)]
    pub active: Option<u32>,

    /// Zero-based page of the active loan's schedule
    #[arg(long, default_value_t = 0)]
    pub page: usize,

    /// Include the visible page of the active loan's schedule
    #[arg(long)]
    pub schedule: bool,

    /// Reference start date for period labels (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Write the active loan's full schedule to this CSV file
    #[arg(long)]
    pub export: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ScenarioSummary {
    id: u32,
    principal: Decimal,
    annual_rate_percent: Decimal,
    tenure_years: u32,
    mode: RepaymentMode,
    first_payment: Decimal,
    total_interest: Decimal,
    total_payment: Decimal,
}

#[derive(Debug, Serialize, Deserialize)]
struct CompareResult {
    scenarios: Vec<ScenarioSummary>,
    active_id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    schedule_page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    schedule_rows: Option<Vec<AmortizationRow>>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CompareAssumptions {
    start_date: NaiveDate,
    loans: usize,
    schedule_page_rows: usize,
}

pub fn run_compare(args: CompareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let terms: Vec<LoanTerms> = if let Some(ref path) = args.input {
        if path.ends_with(".yaml") || path.ends_with(".yml") {
            input::file::read_yaml(path)?
        } else {
            input::file::read_json(path)?
        }
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err(
            "--input <file.{json,yaml}> or a piped JSON array of loans required for comparison"
                .into(),
        );
    };

    let terms: Vec<LoanTerms> = terms
        .into_iter()
        .enumerate()
        .map(|(index, entry)| clamp_terms(index, entry, &mut warnings))
        .collect();

    let mut comparison = LoanComparison::from_terms(terms)?;
    if let Some(id) = args.active {
        if !comparison.select(id) {
            warnings.push(format!("unknown scenario id {id}, keeping the first loan active"));
        }
    }
    comparison.set_schedule_page(args.page);

    let start_date = super::resolve_start_date(args.start_date);

    let scenarios: Vec<ScenarioSummary> = comparison
        .scenarios()
        .iter()
        .map(|scenario| {
            let metrics = compute_loan(&scenario.terms, start_date);
            ScenarioSummary {
                id: scenario.id,
                principal: scenario.terms.principal,
                annual_rate_percent: scenario.terms.annual_rate_percent,
                tenure_years: scenario.terms.tenure_years,
                mode: scenario.terms.mode,
                first_payment: metrics.first_payment,
                total_interest: metrics.total_interest,
                total_payment: metrics.total_payment,
            }
        })
        .collect();

    let active_metrics = comparison.active_metrics(start_date);

    if let Some(ref path) = args.export {
        let rows = export::loan_schedule_rows(&active_metrics);
        if rows.is_empty() {
            warnings.push("active schedule is empty, no CSV written".to_string());
        } else {
            super::write_csv(path, &export::LOAN_SCHEDULE_HEADERS, &rows)?;
        }
    }

    let schedule_rows = args
        .schedule
        .then(|| comparison.visible_rows(&active_metrics.schedule).to_vec());

    let result = CompareResult {
        scenarios,
        active_id: comparison.active_id(),
        schedule_page: args.schedule.then_some(comparison.schedule_page()),
        schedule_rows,
    };

    let assumptions = CompareAssumptions {
        start_date,
        loans: comparison.len(),
        schedule_page_rows: SCHEDULE_PAGE_ROWS,
    };

    let envelope = with_metadata(
        "Per-loan monthly amortization at rate/12; summaries rounded to whole currency units",
        &assumptions,
        warnings,
        start.elapsed().as_micros() as u64,
        result,
    );
    Ok(serde_json::to_value(envelope)?)
}

/// Scenario files go through the same committed-value bounds as flags.
fn clamp_terms(index: usize, terms: LoanTerms, warnings: &mut Vec<String>) -> LoanTerms {
    LoanTerms {
        principal: super::clamp_with_warning(
            &format!("loans[{index}].principal"),
            terms.principal,
            &bounds::LOAN_AMOUNT_BOUNDS,
            warnings,
        ),
        annual_rate_percent: super::clamp_with_warning(
            &format!("loans[{index}].rate"),
            terms.annual_rate_percent,
            &bounds::LOAN_RATE_BOUNDS,
            warnings,
        ),
        tenure_years: super::clamp_years(
            &format!("loans[{index}].tenure_years"),
            terms.tenure_years,
            &bounds::LOAN_TENURE_BOUNDS,
            warnings,
        ),
        mode: terms.mode,
    }
}
