//! Simple (non-compounding) interest.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{round_currency, Money, RatePercent, Years};

/// Interest and final amount, rounded to whole currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleInterest {
    pub total_interest: Money,
    pub total_amount: Money,
}

/// interest = principal * rate * years / 100, no compounding.
/// Any non-positive input yields zeros, as does a product beyond the
/// representable range.
pub fn compute_simple_interest(
    principal: Money,
    annual_rate_percent: RatePercent,
    years: Years,
) -> SimpleInterest {
    if principal <= Decimal::ZERO || annual_rate_percent <= Decimal::ZERO || years <= Decimal::ZERO
    {
        return SimpleInterest {
            total_interest: Decimal::ZERO,
            total_amount: Decimal::ZERO,
        };
    }

    let totals = principal
        .checked_mul(annual_rate_percent)
        .and_then(|product| product.checked_mul(years))
        .and_then(|product| product.checked_div(dec!(100)))
        .and_then(|interest| principal.checked_add(interest).map(|amount| (interest, amount)));

    match totals {
        Some((interest, amount)) => SimpleInterest {
            total_interest: round_currency(interest),
            total_amount: round_currency(amount),
        },
        None => SimpleInterest {
            total_interest: Decimal::ZERO,
            total_amount: Decimal::ZERO,
        },
    }
}
