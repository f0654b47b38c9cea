//! Per-period amortization schedule.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Money, Rate};

// 40 years of months
const MAX_PREALLOCATED: u32 = 480;

/// One month of the schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationPeriod {
    /// 1-based period number.
    pub period: u32,
    pub interest: Money,
    pub principal: Money,
    /// Balance after this period's payment, never negative.
    pub balance: Money,
}

/// Split each payment into interest on the running balance and principal.
///
/// The balance is clamped at zero after every period, so an overpaying tail
/// (e.g. from an extra payment) keeps reporting principal portions while the
/// balance stays at zero. Arithmetic saturates at the Decimal bounds, so an
/// unpaid balance grows to at most `Decimal::MAX`.
pub fn amortize(
    loan_amount: Money,
    monthly_payment: Money,
    monthly_rate: Rate,
    total_periods: u32,
) -> Vec<AmortizationPeriod> {
    let mut schedule = Vec::with_capacity(total_periods.min(MAX_PREALLOCATED) as usize);
    let mut balance = loan_amount;

    for period in 1..=total_periods {
        let interest = balance.saturating_mul(monthly_rate);
        let principal = monthly_payment.saturating_sub(interest);
        balance = balance.saturating_sub(principal).max(Decimal::ZERO);
        schedule.push(AmortizationPeriod {
            period,
            interest,
            principal,
            balance,
        });
    }

    schedule
}

/// Sum of the principal portions across the schedule.
pub fn total_principal(schedule: &[AmortizationPeriod]) -> Money {
    schedule
        .iter()
        .fold(Decimal::ZERO, |acc, p| acc.saturating_add(p.principal))
}

/// Sum of the interest portions across the schedule.
pub fn total_interest(schedule: &[AmortizationPeriod]) -> Money {
    schedule
        .iter()
        .fold(Decimal::ZERO, |acc, p| acc.saturating_add(p.interest))
}
