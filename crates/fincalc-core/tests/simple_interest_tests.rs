use fincalc_core::simple_interest::compute_simple_interest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Simple interest tests
// ===========================================================================

#[test]
fn test_interest_scales_linearly_with_time() {
    let one_year = compute_simple_interest(dec!(50_000), dec!(8), dec!(1));
    let four_years = compute_simple_interest(dec!(50_000), dec!(8), dec!(4));

    assert_eq!(one_year.total_interest, dec!(4_000));
    assert_eq!(four_years.total_interest, dec!(16_000));
    assert_eq!(four_years.total_interest, one_year.total_interest * dec!(4));
}

#[test]
fn test_amount_is_principal_plus_interest() {
    let result = compute_simple_interest(dec!(250_000), dec!(9.25), dec!(6));
    // 250,000 * 9.25 * 6 / 100 = 138,750
    assert_eq!(result.total_interest, dec!(138_750));
    assert_eq!(result.total_amount, dec!(250_000) + result.total_interest);
}

#[test]
fn test_sub_year_period() {
    // 6 months at 10% on 1,00,000: 5,000
    let result = compute_simple_interest(dec!(100_000), dec!(10), dec!(0.5));
    assert_eq!(result.total_interest, dec!(5_000));
    assert_eq!(result.total_amount, dec!(105_000));
}

#[test]
fn test_degenerate_inputs_are_not_errors() {
    for (principal, rate, years) in [
        (Decimal::ZERO, dec!(10), dec!(5)),
        (dec!(100_000), Decimal::ZERO, dec!(5)),
        (dec!(100_000), dec!(10), Decimal::ZERO),
        (dec!(-1), dec!(-2), dec!(-3)),
    ] {
        let result = compute_simple_interest(principal, rate, years);
        assert_eq!(result.total_interest, Decimal::ZERO);
        assert_eq!(result.total_amount, Decimal::ZERO);
    }
}

#[test]
fn test_deterministic() {
    let first = compute_simple_interest(dec!(123_456.78), dec!(7.75), dec!(11));
    let second = compute_simple_interest(dec!(123_456.78), dec!(7.75), dec!(11));
    assert_eq!(first, second);
}
