//! Loan amortization engine.
//!
//! Builds the full month-by-month repayment schedule for a loan in either
//! equal-installment (EMI) or equal-principal mode, plus rounded headline
//! metrics. Degenerate inputs produce an empty schedule and zero metrics
//! rather than an error, so a half-edited loan can always be recomputed.

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::annuity::monthly_installment;
use crate::types::{round_currency, Money, RatePercent};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// How the loan is repaid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepaymentMode {
    /// Fixed total payment every month (standard EMI).
    #[default]
    EqualInstallment,
    /// Fixed principal component every month; total payment declines.
    EqualPrincipal,
}

/// The terms of a single loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: Money,
    /// Nominal annual rate in percent (8.5 = 8.5%), compounded monthly.
    pub annual_rate_percent: RatePercent,
    /// Whole years; the schedule spans tenure_years * 12 months.
    pub tenure_years: u32,
    #[serde(default)]
    pub mode: RepaymentMode,
}

/// One month of the repayment schedule. Amounts are unrounded; display
/// layers pick their own precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// 1-based month number.
    pub period_index: u32,
    /// Calendar label ("Sep 2026") derived from the start date.
    pub period_label: String,
    pub principal_paid: Money,
    pub interest_paid: Money,
    pub total_payment: Money,
    pub remaining_balance: Money,
}

/// Schedule plus headline metrics for one loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanMetrics {
    pub schedule: Vec<AmortizationRow>,
    /// First month's total payment, rounded to the nearest currency unit.
    pub first_payment: Money,
    /// Lifetime interest, rounded to the nearest currency unit.
    pub total_interest: Money,
    /// Principal plus lifetime interest, rounded to the nearest currency unit.
    pub total_payment: Money,
}

impl LoanMetrics {
    fn empty() -> Self {
        Self {
            schedule: Vec::new(),
            first_payment: Decimal::ZERO,
            total_interest: Decimal::ZERO,
            total_payment: Decimal::ZERO,
        }
    }
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Build the amortization schedule for `terms`.
///
/// `start_date` anchors the calendar labels: month k is labelled with
/// `start_date + k months`, so the same date always reproduces the same
/// output. A non-positive principal or rate, a zero tenure, or arithmetic
/// overflow all yield an empty schedule with zero metrics.
pub fn compute_loan(terms: &LoanTerms, start_date: NaiveDate) -> LoanMetrics {
    let months = terms.tenure_years.saturating_mul(12);
    if terms.principal <= Decimal::ZERO || terms.annual_rate_percent <= Decimal::ZERO || months == 0
    {
        return LoanMetrics::empty();
    }

    let monthly_rate = terms.annual_rate_percent / dec!(100) / dec!(12);

    let rows = match terms.mode {
        RepaymentMode::EqualInstallment => {
            equal_installment_rows(terms.principal, monthly_rate, months, start_date)
        }
        RepaymentMode::EqualPrincipal => {
            equal_principal_rows(terms.principal, monthly_rate, months, start_date)
        }
    };

    let schedule = match rows {
        Some(rows) => rows,
        None => return LoanMetrics::empty(),
    };

    // The rows can each fit while their sum does not, so the summary is
    // accumulated with checked arithmetic too.
    let totals = schedule
        .iter()
        .try_fold(Decimal::ZERO, |acc, row| acc.checked_add(row.interest_paid))
        .and_then(|interest| {
            terms.principal.checked_add(interest).map(|lifetime| (interest, lifetime))
        });
    let (interest_total, lifetime_total) = match totals {
        Some(totals) => totals,
        None => return LoanMetrics::empty(),
    };

    let first_payment = schedule
        .first()
        .map(|row| round_currency(row.total_payment))
        .unwrap_or(Decimal::ZERO);

    LoanMetrics {
        first_payment,
        total_interest: round_currency(interest_total),
        total_payment: round_currency(lifetime_total),
        schedule,
    }
}

// ---------------------------------------------------------------------------
// Schedule builders
// ---------------------------------------------------------------------------

fn equal_installment_rows(
    principal: Money,
    monthly_rate: Decimal,
    months: u32,
    start_date: NaiveDate,
) -> Option<Vec<AmortizationRow>> {
    let installment = monthly_installment(principal, monthly_rate, months)?;

    let mut schedule = Vec::with_capacity(months as usize);
    let mut balance = principal;

    for month in 1..=months {
        let interest = balance.checked_mul(monthly_rate)?;
        let (principal_paid, total_payment) = if month == months {
            // Final month clears the balance exactly, absorbing the
            // rounding drift accumulated by the fixed installment.
            (balance, balance.checked_add(interest)?)
        } else {
            (installment.checked_sub(interest)?, installment)
        };

        balance = if month == months {
            Decimal::ZERO
        } else {
            balance.checked_sub(principal_paid)?
        };

        schedule.push(AmortizationRow {
            period_index: month,
            period_label: period_label(start_date, month),
            principal_paid,
            interest_paid: interest,
            total_payment,
            remaining_balance: balance,
        });
    }

    Some(schedule)
}

fn equal_principal_rows(
    principal: Money,
    monthly_rate: Decimal,
    months: u32,
    start_date: NaiveDate,
) -> Option<Vec<AmortizationRow>> {
    let principal_share = principal.checked_div(Decimal::from(months))?;

    let mut schedule = Vec::with_capacity(months as usize);
    let mut balance = principal;

    for month in 1..=months {
        let interest = balance.checked_mul(monthly_rate)?;
        // Final month takes whatever is left so the division residue
        // cannot strand a stray balance.
        let principal_paid = if month == months { balance } else { principal_share };

        balance = if month == months {
            Decimal::ZERO
        } else {
            balance.checked_sub(principal_paid)?
        };

        schedule.push(AmortizationRow {
            period_index: month,
            period_label: period_label(start_date, month),
            principal_paid,
            interest_paid: interest,
            total_payment: principal_paid.checked_add(interest)?,
            remaining_balance: balance,
        });
    }

    Some(schedule)
}

fn period_label(start_date: NaiveDate, offset_months: u32) -> String {
    start_date
        .checked_add_months(Months::new(offset_months))
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_default()
}
