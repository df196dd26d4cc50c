//! CSV export row shaping.
//!
//! The exported column sets and cell precision are a stable contract
//! consumed by spreadsheet users. Front-ends write the bytes; the shape is
//! defined here so no surface can restate it differently.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::loan::schedule::LoanMetrics;
use crate::sip::SipYearRow;

/// Column set for an exported amortization schedule.
pub const LOAN_SCHEDULE_HEADERS: [&str; 6] = [
    "Month",
    "Date",
    "Principal Paid",
    "Interest Paid",
    "Total Payment",
    "Remaining Balance",
];

/// Column set for an exported SIP growth series.
pub const SIP_SERIES_HEADERS: [&str; 4] =
    ["Year", "Invested Amount", "Estimated Returns", "Total Value"];

/// One record per scheduled month, in order, money cells with exactly two
/// decimals. An empty schedule yields no records, so the surrounding export
/// becomes a no-op.
pub fn loan_schedule_rows(metrics: &LoanMetrics) -> Vec<[String; 6]> {
    metrics
        .schedule
        .iter()
        .map(|row| {
            [
                row.period_index.to_string(),
                row.period_label.clone(),
                money_2dp(row.principal_paid),
                money_2dp(row.interest_paid),
                money_2dp(row.total_payment),
                money_2dp(row.remaining_balance),
            ]
        })
        .collect()
}

/// One record per projection year, in increasing year order, money cells
/// rounded to whole units.
pub fn sip_series_rows(series: &[SipYearRow]) -> Vec<[String; 4]> {
    series
        .iter()
        .map(|row| {
            [
                row.year.to_string(),
                money_whole(row.invested_amount),
                money_whole(row.estimated_returns),
                money_whole(row.total_value),
            ]
        })
        .collect()
}

fn money_2dp(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

fn money_whole(value: Decimal) -> String {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_string()
}
