use fincalc_core::sip::compute_sip;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// SIP projection tests
// ===========================================================================

#[test]
fn test_standard_projection_headline() {
    // 10,000 per month at 12% over 15 years
    let projection = compute_sip(dec!(10_000), dec!(12), 15);
    let summary = &projection.summary;

    assert_eq!(summary.invested_amount, dec!(1_800_000));
    // Annuity-due FV: 10,000 * ((1.01^180 - 1) / 0.01) * 1.01 ~ 5,045,760
    assert_eq!(summary.total_value, dec!(5_045_760));
    assert_eq!(summary.estimated_returns, dec!(3_245_760));
}

#[test]
fn test_summary_fields_are_whole_units() {
    let projection = compute_sip(dec!(7_500), dec!(11.5), 9);
    let summary = &projection.summary;
    assert!(summary.invested_amount.fract().is_zero());
    assert!(summary.estimated_returns.fract().is_zero());
    assert!(summary.total_value.fract().is_zero());
    assert_eq!(
        summary.total_value,
        summary.invested_amount + summary.estimated_returns
    );
}

#[test]
fn test_closed_form_matches_month_iteration() {
    let contribution = dec!(10_000);
    let monthly_rate = dec!(12) / dec!(100) / dec!(12);
    let projection = compute_sip(contribution, dec!(12), 15);

    // Start-of-month contribution, then a month of growth
    let mut balance = Decimal::ZERO;
    for _ in 0..180 {
        balance = (balance + contribution) * (Decimal::ONE + monthly_rate);
    }

    let last = projection.yearly_series.last().unwrap();
    assert!((last.total_value - balance).abs() < dec!(0.01));
}

#[test]
fn test_yearly_series_is_cumulative_and_increasing() {
    let projection = compute_sip(dec!(10_000), dec!(12), 15);
    assert_eq!(projection.yearly_series.len(), 15);

    let mut previous_total = Decimal::ZERO;
    for (i, row) in projection.yearly_series.iter().enumerate() {
        let year = i as u32 + 1;
        assert_eq!(row.year, year);
        // Invested capital is exact: contribution * months elapsed
        assert_eq!(row.invested_amount, dec!(10_000) * Decimal::from(year * 12));
        assert!(row.total_value > previous_total);
        assert!(row.estimated_returns >= Decimal::ZERO);
        previous_total = row.total_value;
    }
}

#[test]
fn test_last_series_row_agrees_with_summary() {
    let projection = compute_sip(dec!(10_000), dec!(12), 15);
    let last = projection.yearly_series.last().unwrap();

    assert_eq!(
        projection.summary.total_value,
        last.total_value.round_dp_with_strategy(
            0,
            rust_decimal::RoundingStrategy::MidpointAwayFromZero
        )
    );
    assert_eq!(last.invested_amount, projection.summary.invested_amount);
}

#[test]
fn test_longer_horizon_compounds_harder() {
    let ten = compute_sip(dec!(10_000), dec!(12), 10);
    let fifteen = compute_sip(dec!(10_000), dec!(12), 15);

    // Returns grow faster than invested capital
    let ten_ratio = ten.summary.estimated_returns / ten.summary.invested_amount;
    let fifteen_ratio = fifteen.summary.estimated_returns / fifteen.summary.invested_amount;
    assert!(fifteen_ratio > ten_ratio);
}

#[test]
fn test_zero_rate_is_not_a_guard_case() {
    let projection = compute_sip(dec!(2_000), Decimal::ZERO, 3);
    assert_eq!(projection.summary.invested_amount, dec!(72_000));
    assert_eq!(projection.summary.total_value, dec!(72_000));
    assert_eq!(projection.summary.estimated_returns, Decimal::ZERO);
}

#[test]
fn test_guard_outputs_keep_series_shape() {
    let projection = compute_sip(Decimal::ZERO, dec!(12), 4);
    assert_eq!(projection.yearly_series.len(), 4);
    for row in &projection.yearly_series {
        assert_eq!(row.invested_amount, Decimal::ZERO);
        assert_eq!(row.estimated_returns, Decimal::ZERO);
        assert_eq!(row.total_value, Decimal::ZERO);
    }
}

#[test]
fn test_deterministic() {
    let first = compute_sip(dec!(10_000), dec!(12), 15);
    let second = compute_sip(dec!(10_000), dec!(12), 15);
    assert_eq!(first, second);
}
