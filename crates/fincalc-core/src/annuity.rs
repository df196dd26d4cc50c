use rust_decimal::Decimal;

use crate::types::Money;

/// Compute (1 + r)^n via iterative multiplication (avoids Decimal::powd drift).
/// Returns None if the base or the factor overflows Decimal's range.
pub fn compound_factor(rate: Decimal, periods: u32) -> Option<Decimal> {
    let base = Decimal::ONE.checked_add(rate)?;
    let mut result = Decimal::ONE;
    for _ in 0..periods {
        result = result.checked_mul(base)?;
    }
    Some(result)
}

/// Fixed payment that amortises `principal` over `months` periods at
/// `monthly_rate` per period: P * r * (1+r)^n / ((1+r)^n - 1).
///
/// A zero rate degenerates to straight-line principal repayment. Returns
/// None when the compound factor overflows or the denominator vanishes.
pub fn monthly_installment(principal: Money, monthly_rate: Decimal, months: u32) -> Option<Money> {
    if months == 0 {
        return None;
    }
    if monthly_rate.is_zero() {
        return principal.checked_div(Decimal::from(months));
    }

    let factor = compound_factor(monthly_rate, months)?;
    let denominator = factor.checked_sub(Decimal::ONE)?;
    if denominator.is_zero() {
        return None;
    }

    principal
        .checked_mul(monthly_rate)?
        .checked_mul(factor)?
        .checked_div(denominator)
}

/// Future value of an annuity-due: `contribution` invested at the start of
/// each of `months` periods, compounding at `monthly_rate` per period:
/// c * ((1+r)^n - 1) / r * (1+r). The r = 0 limit is c * n.
pub fn annuity_due_fv(contribution: Money, monthly_rate: Decimal, months: u32) -> Option<Money> {
    if monthly_rate.is_zero() {
        return contribution.checked_mul(Decimal::from(months));
    }

    let factor = compound_factor(monthly_rate, months)?;
    contribution
        .checked_mul(factor.checked_sub(Decimal::ONE)?)?
        .checked_div(monthly_rate)?
        .checked_mul(Decimal::ONE.checked_add(monthly_rate)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_compound_factor_exact() {
        assert_eq!(compound_factor(dec!(0.01), 0), Some(dec!(1)));
        assert_eq!(compound_factor(dec!(0.01), 1), Some(dec!(1.01)));
        assert_eq!(compound_factor(dec!(0.01), 2), Some(dec!(1.0201)));
        assert_eq!(compound_factor(dec!(0.10), 3), Some(dec!(1.331)));
    }

    #[test]
    fn test_compound_factor_overflow() {
        // 2^n blows past Decimal's 96-bit mantissa well before 200 periods
        assert_eq!(compound_factor(dec!(1), 200), None);
        // A rate at the ceiling cannot even form the base
        assert_eq!(compound_factor(Decimal::MAX, 2), None);
    }

    #[test]
    fn test_monthly_installment_zero_rate_straight_line() {
        assert_eq!(
            monthly_installment(dec!(1200), Decimal::ZERO, 12),
            Some(dec!(100))
        );
    }

    #[test]
    fn test_monthly_installment_standard() {
        // 100,000 at 1% per month over 12 months: EMI ~ 8884.88
        let emi = monthly_installment(dec!(100000), dec!(0.01), 12).unwrap();
        assert!((emi - dec!(8884.88)).abs() < dec!(0.01));
    }

    #[test]
    fn test_monthly_installment_zero_months() {
        assert_eq!(monthly_installment(dec!(1000), dec!(0.01), 0), None);
    }

    #[test]
    fn test_annuity_due_fv_small_case() {
        // 100 at the start of each of 2 months at 1%:
        // ((1.0201 - 1) / 0.01) * 1.01 * 100 = 203.01
        assert_eq!(annuity_due_fv(dec!(100), dec!(0.01), 2), Some(dec!(203.01)));
    }

    #[test]
    fn test_annuity_due_fv_zero_rate() {
        assert_eq!(
            annuity_due_fv(dec!(500), Decimal::ZERO, 24),
            Some(dec!(12000))
        );
    }
}
