#![cfg(feature = "mortgage")]

use pagetools_core::mortgage::schedule::{total_interest, total_principal};
use pagetools_core::mortgage::{analyze_mortgage, calculate, LoanForm, LoanParameters};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Payment calculation
// ===========================================================================

fn standard_loan() -> LoanParameters {
    LoanParameters {
        principal: dec!(200_000),
        down_payment: dec!(0),
        annual_interest_rate: dec!(5),
        years: 30,
        extra_payment: dec!(0),
    }
}

#[test]
fn test_standard_thirty_year_scenario() {
    let r = calculate(&standard_loan());

    assert_eq!(r.total_periods, 360);
    assert!((r.monthly_rate - dec!(0.0041667)).abs() < dec!(0.0000001));
    assert!((r.monthly_payment - dec!(1073.64)).abs() < dec!(0.005));
    // 1073.6432... * 360
    assert!((r.total_payment - dec!(386_511.57)).abs() < dec!(0.01));
    assert!((r.total_interest - dec!(186_511.57)).abs() < dec!(0.01));
}

#[test]
fn test_zero_interest_forced_to_zero_payment() {
    let r = calculate(&LoanParameters {
        principal: dec!(100_000),
        down_payment: dec!(0),
        annual_interest_rate: dec!(0),
        years: 1,
        extra_payment: dec!(0),
    });
    assert_eq!(r.monthly_payment, Decimal::ZERO);
    assert!(r.payment_defaulted);
    assert_eq!(r.schedule.len(), 12);
}

#[test]
fn test_calculate_is_idempotent() {
    let params = LoanParameters {
        extra_payment: dec!(75),
        down_payment: dec!(20_000),
        ..standard_loan()
    };
    let first = calculate(&params);
    let second = calculate(&params);
    let third = calculate(&params);
    assert_eq!(first, second);
    assert_eq!(second, third);
}

#[test]
fn test_very_long_term_does_not_overflow() {
    let r = calculate(&LoanParameters {
        annual_interest_rate: dec!(24),
        years: 600,
        ..standard_loan()
    });
    // (1.02)^7200 is far beyond Decimal range: payment approaches loan * r
    assert!((r.monthly_payment - dec!(4000)).abs() < dec!(0.01));
    assert!(!r.payment_defaulted);
}

// ===========================================================================
// Schedule
// ===========================================================================

#[test]
fn test_schedule_principal_sums_to_loan() {
    for (principal, rate, years) in [
        (dec!(200_000), dec!(5), 30),
        (dec!(350_000), dec!(3.25), 15),
        (dec!(12_500), dec!(9.9), 3),
        (dec!(1_000_000), dec!(0.5), 40),
    ] {
        let params = LoanParameters {
            principal,
            down_payment: dec!(0),
            annual_interest_rate: rate,
            years,
            extra_payment: dec!(0),
        };
        let r = calculate(&params);
        let paid = total_principal(&r.schedule);
        assert!(
            (paid - r.loan_amount).abs() < dec!(0.01),
            "principal {} paid {} for loan {}",
            principal,
            paid,
            r.loan_amount
        );
    }
}

#[test]
fn test_schedule_interest_matches_total_interest() {
    let r = calculate(&standard_loan());
    let interest = total_interest(&r.schedule);
    assert!((interest - r.total_interest).abs() < dec!(0.01));
}

#[test]
fn test_schedule_balance_reaches_zero_and_never_negative() {
    let r = calculate(&standard_loan());
    assert!(r.schedule.iter().all(|p| p.balance >= Decimal::ZERO));
    let last = r.schedule.last().unwrap();
    assert_eq!(last.period, 360);
    assert!(last.balance < dec!(0.01));
}

#[test]
fn test_extra_payment_tail_clamps_balance() {
    let r = calculate(&LoanParameters {
        extra_payment: dec!(500),
        ..standard_loan()
    });
    // Overpaying retires the loan early; the rest of the schedule sits at zero
    let first_zero = r
        .schedule
        .iter()
        .position(|p| p.balance.is_zero())
        .unwrap();
    assert!(first_zero < 359);
    assert!(r.schedule[first_zero..].iter().all(|p| p.balance.is_zero()));
    // Level payment still charged for every period
    assert_eq!(r.schedule.len(), 360);
}

// ===========================================================================
// Form coercion and envelope
// ===========================================================================

#[test]
fn test_unparsable_form_fields_default_to_zero() {
    let form = LoanForm {
        principal: "lots".into(),
        interest: "".into(),
        years: "ten".into(),
        extra_payment: "NaN".into(),
        down_payment: " ".into(),
    };
    let params = form.coerce();
    assert_eq!(params.principal, Decimal::ZERO);
    assert_eq!(params.years, 0);

    let r = calculate(&params);
    assert_eq!(r.monthly_payment, Decimal::ZERO);
    assert_eq!(r.total_payment, Decimal::ZERO);
    assert_eq!(r.total_interest, Decimal::ZERO);
    assert!(r.schedule.is_empty());
}

#[test]
fn test_analyze_envelope_metadata() {
    let out = analyze_mortgage(&standard_loan()).unwrap();
    assert!(out.warnings.is_empty());
    assert_eq!(out.metadata.precision, "rust_decimal_128bit");
    assert_eq!(out.assumptions["years"], serde_json::json!(30));
}

#[test]
fn test_analyze_warns_on_defaulted_payment() {
    let out = analyze_mortgage(&LoanParameters {
        years: 0,
        ..standard_loan()
    })
    .unwrap();
    assert_eq!(out.warnings.len(), 1);
    assert!(out.warnings[0].contains("monthly payment reported as 0"));
}
