//! Loan parameters and the level-payment calculation.
//!
//! Malformed inputs never fail: unparsable form values read as zero and an
//! undefined payment (zero rate, zero term) is reported as zero.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::schedule::{amortize, AmortizationPeriod};
use crate::coerce;
use crate::error::PageToolsError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::PageToolsResult;

const MONTHS_PER_YEAR: u32 = 12;

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// Typed loan parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Purchase price / amount before the down payment.
    pub principal: Money,
    /// Up-front payment. Expected to be at most the principal, not enforced.
    #[serde(default)]
    pub down_payment: Money,
    /// Annual interest rate as a percentage (5 = 5%).
    pub annual_interest_rate: Decimal,
    /// Term in whole years.
    pub years: u32,
    /// Flat amount added to every monthly payment.
    #[serde(default)]
    pub extra_payment: Money,
}

impl LoanParameters {
    /// Principal less down payment, or zero when that leaves Decimal range.
    pub fn loan_amount(&self) -> Money {
        self.principal
            .checked_sub(self.down_payment)
            .unwrap_or(Decimal::ZERO)
    }

    pub fn monthly_rate(&self) -> Rate {
        self.annual_interest_rate / dec!(100) / Decimal::from(MONTHS_PER_YEAR)
    }

    pub fn total_periods(&self) -> u32 {
        self.years.saturating_mul(MONTHS_PER_YEAR)
    }

    /// Strict checks for callers that want errors instead of the zero
    /// fallback. `calculate` itself never calls this.
    pub fn validate(&self) -> PageToolsResult<()> {
        let non_negative = [
            ("principal", self.principal),
            ("down_payment", self.down_payment),
            ("annual_interest_rate", self.annual_interest_rate),
            ("extra_payment", self.extra_payment),
        ];
        for (field, value) in non_negative {
            if value < Decimal::ZERO {
                return Err(PageToolsError::InvalidInput {
                    field: field.into(),
                    reason: "Must be non-negative".into(),
                });
            }
        }
        if self.years == 0 {
            return Err(PageToolsError::InvalidInput {
                field: "years".into(),
                reason: "Term must be at least one year".into(),
            });
        }
        if self.annual_interest_rate.is_zero() {
            return Err(PageToolsError::InvalidInput {
                field: "annual_interest_rate".into(),
                reason: "Level-payment formula is undefined at a zero rate".into(),
            });
        }
        Ok(())
    }
}

/// Raw values as read from the page controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanForm {
    #[serde(default)]
    pub principal: String,
    #[serde(default)]
    pub interest: String,
    #[serde(default)]
    pub years: String,
    #[serde(default)]
    pub extra_payment: String,
    #[serde(default)]
    pub down_payment: String,
}

impl LoanForm {
    /// Convert every field leniently; anything unparsable becomes zero and a
    /// negative term becomes zero.
    pub fn coerce(&self) -> LoanParameters {
        let years = coerce::integer_or_zero(&self.years).max(0);
        LoanParameters {
            principal: coerce::decimal_or_zero(&self.principal),
            down_payment: coerce::decimal_or_zero(&self.down_payment),
            annual_interest_rate: coerce::decimal_or_zero(&self.interest),
            years: u32::try_from(years).unwrap_or(u32::MAX),
            extra_payment: coerce::decimal_or_zero(&self.extra_payment),
        }
    }
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageResult {
    pub loan_amount: Money,
    pub monthly_rate: Rate,
    pub total_periods: u32,
    /// Level payment including the extra flat payment.
    pub monthly_payment: Money,
    pub total_payment: Money,
    pub total_interest: Money,
    /// True when the payment formula was undefined and zero was substituted.
    pub payment_defaulted: bool,
    pub schedule: Vec<AmortizationPeriod>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute payment, totals and schedule. Identical parameters always give
/// identical results.
pub fn calculate(params: &LoanParameters) -> MortgageResult {
    let loan_amount = params.loan_amount();
    let monthly_rate = params.monthly_rate();
    let total_periods = params.total_periods();

    let (monthly_payment, payment_defaulted) =
        match level_payment(loan_amount, monthly_rate, total_periods) {
            Some(pmt) => match pmt.checked_add(params.extra_payment) {
                Some(total) => (total, false),
                None => (Decimal::ZERO, true),
            },
            None => (Decimal::ZERO, true),
        };

    if payment_defaulted {
        tracing::warn!(
            %loan_amount,
            %monthly_rate,
            total_periods,
            "payment formula undefined; monthly payment set to zero"
        );
    }

    let total_payment = monthly_payment
        .checked_mul(Decimal::from(total_periods))
        .unwrap_or(Decimal::ZERO);
    let total_interest = total_payment.saturating_sub(loan_amount);
    let schedule = amortize(loan_amount, monthly_payment, monthly_rate, total_periods);

    tracing::debug!(
        %monthly_payment,
        %total_payment,
        periods = schedule.len(),
        "mortgage calculated"
    );

    MortgageResult {
        loan_amount,
        monthly_rate,
        total_periods,
        monthly_payment,
        total_payment,
        total_interest,
        payment_defaulted,
        schedule,
    }
}

/// Calculate and wrap in the standard output envelope with warnings.
pub fn analyze_mortgage(
    params: &LoanParameters,
) -> PageToolsResult<ComputationOutput<MortgageResult>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if params.down_payment > params.principal {
        tracing::warn!(
            principal = %params.principal,
            down_payment = %params.down_payment,
            "down payment exceeds principal"
        );
        warnings.push(format!(
            "Down payment {} exceeds principal {}; loan amount is negative",
            params.down_payment, params.principal
        ));
    }

    let result = calculate(params);

    if result.payment_defaulted {
        warnings.push(
            "Payment formula undefined for these inputs (zero rate or zero term); \
             monthly payment reported as 0"
                .into(),
        );
    }
    if !params.extra_payment.is_zero() {
        warnings.push(
            "Extra payment is added to the level payment and not amortized \
             separately against principal"
                .into(),
        );
    }

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fixed-rate level-payment amortization",
        params,
        warnings,
        elapsed,
        result,
    ))
}

/// `loan * r / (1 - (1 + r)^-n)`, or `None` when undefined.
fn level_payment(loan: Money, rate: Rate, periods: u32) -> Option<Money> {
    let discount = match Decimal::ONE.checked_add(rate)?.checked_powu(u64::from(periods)) {
        Some(growth) => Decimal::ONE.checked_div(growth)?,
        // (1 + r)^n beyond Decimal range: its reciprocal is effectively zero
        None => Decimal::ZERO,
    };
    let denominator = Decimal::ONE - discount;
    loan.checked_mul(rate)?.checked_div(denominator)
}
