use chrono::NaiveDate;
use fincalc_core::loan::comparison::{LoanComparison, TermsUpdate};
use fincalc_core::loan::schedule::{compute_loan, LoanTerms, RepaymentMode};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Equal-installment (EMI) schedule tests
// ===========================================================================

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

fn home_loan() -> LoanTerms {
    // 10 lakh at 8.5% over 20 years
    LoanTerms {
        principal: dec!(1_000_000),
        annual_rate_percent: dec!(8.5),
        tenure_years: 20,
        mode: RepaymentMode::EqualInstallment,
    }
}

#[test]
fn test_emi_home_loan_headline_metrics() {
    let metrics = compute_loan(&home_loan(), start());

    // EMI on 1,000,000 at 8.5%/12 over 240 months is ~8678.23
    assert_eq!(metrics.first_payment, dec!(8678));
    assert_eq!(metrics.schedule.len(), 240);

    // total_payment = principal + total_interest for a whole-unit principal
    assert_eq!(
        metrics.total_payment,
        dec!(1_000_000) + metrics.total_interest
    );
    assert!(metrics.total_interest > dec!(1_000_000));
}

#[test]
fn test_emi_one_year_loan() {
    let terms = LoanTerms {
        principal: dec!(100_000),
        annual_rate_percent: dec!(12),
        tenure_years: 1,
        mode: RepaymentMode::EqualInstallment,
    };
    let metrics = compute_loan(&terms, start());

    // Textbook EMI: 100,000 at 1%/month over 12 months ~ 8884.88
    assert_eq!(metrics.first_payment, dec!(8885));
    assert_eq!(metrics.schedule.len(), 12);
}

#[test]
fn test_emi_schedule_retires_to_exactly_zero() {
    let metrics = compute_loan(&home_loan(), start());
    let last = metrics.schedule.last().unwrap();

    assert_eq!(last.remaining_balance, Decimal::ZERO);
    assert_eq!(last.period_index, 240);
    // The final payment differs from the fixed installment by the absorbed
    // drift, but only by a small amount
    let first = &metrics.schedule[0];
    assert!((last.total_payment - first.total_payment).abs() < dec!(1));
}

#[test]
fn test_emi_principal_conservation() {
    let metrics = compute_loan(&home_loan(), start());
    let principal_sum: Decimal = metrics.schedule.iter().map(|r| r.principal_paid).sum();
    // Exact up to the last couple of Decimal's 28 significant digits
    assert!((principal_sum - dec!(1_000_000)).abs() < dec!(0.000001));
}

#[test]
fn test_emi_balances_strictly_decreasing() {
    let metrics = compute_loan(&home_loan(), start());
    let mut previous = dec!(1_000_000);
    for row in &metrics.schedule {
        assert!(row.remaining_balance < previous);
        assert!(row.remaining_balance >= Decimal::ZERO);
        previous = row.remaining_balance;
    }
}

#[test]
fn test_emi_interest_principal_split_sums_to_installment() {
    let metrics = compute_loan(&home_loan(), start());
    for row in &metrics.schedule {
        assert_eq!(row.total_payment, row.principal_paid + row.interest_paid);
    }
}

#[test]
fn test_emi_higher_rate_costs_more_interest() {
    let cheaper = compute_loan(&home_loan(), start());
    let pricier = compute_loan(
        &LoanTerms {
            annual_rate_percent: dec!(9.5),
            ..home_loan()
        },
        start(),
    );
    assert!(pricier.total_interest > cheaper.total_interest);
    assert!(pricier.first_payment > cheaper.first_payment);
}

#[test]
fn test_emi_deterministic_for_same_start_date() {
    let first = compute_loan(&home_loan(), start());
    let second = compute_loan(&home_loan(), start());
    assert_eq!(first, second);
}

#[test]
fn test_emi_month_labels_span_the_tenure() {
    let metrics = compute_loan(&home_loan(), start());
    assert_eq!(metrics.schedule[0].period_label, "Feb 2025");
    assert_eq!(metrics.schedule[239].period_label, "Jan 2045");
}

// ===========================================================================
// Equal-principal schedule tests
// ===========================================================================

#[test]
fn test_equal_principal_constant_principal_component() {
    let terms = LoanTerms {
        principal: dec!(1_200_000),
        annual_rate_percent: dec!(12),
        tenure_years: 10,
        mode: RepaymentMode::EqualPrincipal,
    };
    let metrics = compute_loan(&terms, start());

    assert_eq!(metrics.schedule.len(), 120);
    // 1,200,000 / 120 divides evenly
    for row in &metrics.schedule {
        assert_eq!(row.principal_paid, dec!(10_000));
    }

    // First payment: 10,000 principal + 12,000 interest on the full balance
    assert_eq!(metrics.first_payment, dec!(22_000));
    assert_eq!(metrics.schedule.last().unwrap().remaining_balance, Decimal::ZERO);
}

#[test]
fn test_equal_principal_payments_decline() {
    let terms = LoanTerms {
        principal: dec!(1_200_000),
        annual_rate_percent: dec!(12),
        tenure_years: 10,
        mode: RepaymentMode::EqualPrincipal,
    };
    let metrics = compute_loan(&terms, start());

    let mut previous = metrics.schedule[0].total_payment;
    for row in &metrics.schedule[1..] {
        assert!(row.total_payment < previous);
        previous = row.total_payment;
    }
}

#[test]
fn test_equal_principal_absorbs_division_residue() {
    // 1,000,000 / 120 = 8333.33... does not divide evenly
    let terms = LoanTerms {
        principal: dec!(1_000_000),
        annual_rate_percent: dec!(12),
        tenure_years: 10,
        mode: RepaymentMode::EqualPrincipal,
    };
    let metrics = compute_loan(&terms, start());
    let last = metrics.schedule.last().unwrap();

    assert_eq!(last.remaining_balance, Decimal::ZERO);
    // The final principal differs from the even share only by the residue
    let share = metrics.schedule[0].principal_paid;
    assert!((last.principal_paid - share).abs() < dec!(0.01));

    let principal_sum: Decimal = metrics.schedule.iter().map(|r| r.principal_paid).sum();
    assert!((principal_sum - dec!(1_000_000)).abs() < dec!(0.000001));
}

#[test]
fn test_equal_principal_costs_less_total_interest_than_emi() {
    let emi = compute_loan(&home_loan(), start());
    let equal_principal = compute_loan(
        &LoanTerms {
            mode: RepaymentMode::EqualPrincipal,
            ..home_loan()
        },
        start(),
    );
    assert!(equal_principal.total_interest < emi.total_interest);
}

// ===========================================================================
// Comparison tests
// ===========================================================================

#[test]
fn test_comparison_add_remove_roundtrip() {
    let mut comparison = LoanComparison::new(home_loan());
    let second = comparison
        .add(LoanTerms {
            annual_rate_percent: dec!(9),
            ..home_loan()
        })
        .unwrap();
    let third = comparison
        .add(LoanTerms {
            tenure_years: 15,
            ..home_loan()
        })
        .unwrap();

    // A fourth loan does not fit
    assert_eq!(comparison.add(home_loan()), None);
    assert_eq!(comparison.len(), 3);

    assert!(comparison.remove(second));
    assert!(comparison.remove(third));
    // The last scenario can never be removed
    let only = comparison.scenarios()[0].id;
    assert!(!comparison.remove(only));
    assert_eq!(comparison.len(), 1);
}

#[test]
fn test_comparison_active_metrics_follow_updates() {
    let start_date = start();
    let mut comparison = LoanComparison::new(home_loan());
    let before = comparison.active_metrics(start_date);

    let id = comparison.active_id();
    assert!(comparison.update(id, TermsUpdate::TenureYears(10)));
    let after = comparison.active_metrics(start_date);

    assert_eq!(after.schedule.len(), 120);
    assert!(after.total_interest < before.total_interest);
    assert!(after.first_payment > before.first_payment);
}

#[test]
fn test_comparison_schedule_paging_resets_on_edit() {
    let mut comparison = LoanComparison::new(home_loan());
    comparison.set_schedule_page(7);
    let id = comparison.active_id();
    comparison.update(id, TermsUpdate::Principal(dec!(2_500_000)));
    assert_eq!(comparison.schedule_page(), 0);
}
