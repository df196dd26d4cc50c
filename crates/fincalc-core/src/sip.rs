//! SIP projection engine.
//!
//! Projects a systematic investment plan: a fixed contribution at the start
//! of every month, compounding monthly at one twelfth of the annual rate.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::annuity::annuity_due_fv;
use crate::types::{round_currency, Money, RatePercent};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Cumulative position at the end of one year. Amounts are unrounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipYearRow {
    /// 1-based year number.
    pub year: u32,
    pub invested_amount: Money,
    pub estimated_returns: Money,
    pub total_value: Money,
}

/// Projection at the full horizon, rounded to whole currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipSummary {
    pub invested_amount: Money,
    pub estimated_returns: Money,
    pub total_value: Money,
}

/// Summary plus the year-by-year growth series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipProjection {
    pub summary: SipSummary,
    pub yearly_series: Vec<SipYearRow>,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Project a monthly SIP over `tenure_years`.
///
/// A non-positive contribution or a zero tenure degrades to a zero-return
/// accumulation (invested capital only, never negative). A rate of exactly
/// zero is an ordinary input handled by the r = 0 limit of the annuity
/// formula, not a degenerate case. Positions beyond the representable
/// range degrade to zero.
pub fn compute_sip(
    monthly_contribution: Money,
    annual_return_percent: RatePercent,
    tenure_years: u32,
) -> SipProjection {
    let monthly_rate = annual_return_percent / dec!(100) / dec!(12);

    let mut yearly_series = Vec::with_capacity(tenure_years as usize);
    for year in 1..=tenure_years {
        let (invested, total) =
            accumulate(monthly_contribution, monthly_rate, year.saturating_mul(12));
        yearly_series.push(SipYearRow {
            year,
            invested_amount: invested,
            estimated_returns: total - invested,
            total_value: total,
        });
    }

    let months = tenure_years.saturating_mul(12);
    let (invested, total) = accumulate(monthly_contribution, monthly_rate, months);
    let summary = SipSummary {
        invested_amount: round_currency(invested),
        estimated_returns: round_currency(total - invested),
        total_value: round_currency(total),
    };

    SipProjection {
        summary,
        yearly_series,
    }
}

/// (invested, total value) after `months` start-of-month contributions.
fn accumulate(contribution: Money, monthly_rate: Decimal, months: u32) -> (Money, Money) {
    // An unrepresentable invested amount degrades the whole position to zero
    let invested = match contribution.checked_mul(Decimal::from(months)) {
        Some(invested) => invested.max(Decimal::ZERO),
        None => return (Decimal::ZERO, Decimal::ZERO),
    };
    if contribution <= Decimal::ZERO || months == 0 {
        return (invested, invested);
    }
    match annuity_due_fv(contribution, monthly_rate, months) {
        // A long-only contribution stream is never worth less than nothing
        Some(total) => (invested, total.max(Decimal::ZERO)),
        // Overflow of the compound factor degrades to invested capital
        None => (invested, invested),
    }
}
