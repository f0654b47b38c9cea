//! Display formatting for the calculator's summary block.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::loan::MortgageResult;
use crate::types::{Money, CURRENCY_SYMBOL};

/// Currency strings shown under the calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MortgageSummary {
    pub monthly_payment: String,
    pub total_payment: String,
    pub total_interest: String,
}

impl MortgageSummary {
    pub fn from_result(result: &MortgageResult) -> Self {
        Self {
            monthly_payment: format_currency(result.monthly_payment),
            total_payment: format_currency(result.total_payment),
            total_interest: format_currency(result.total_interest),
        }
    }

    /// Markup written into the result element.
    pub fn to_html(&self) -> String {
        format!(
            "<strong>Monthly Payment:</strong> {}<br>\n\
             <strong>Total Payment:</strong> {}<br>\n\
             <strong>Total Interest:</strong> {}",
            self.monthly_payment, self.total_payment, self.total_interest
        )
    }

    pub fn lines(&self) -> [String; 3] {
        [
            format!("Monthly Payment: {}", self.monthly_payment),
            format!("Total Payment: {}", self.total_payment),
            format!("Total Interest: {}", self.total_interest),
        ]
    }
}

/// `£` followed by the amount to two decimal places, halves rounded away
/// from zero. No grouping separators.
pub fn format_currency(amount: Money) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let rounded = if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    };
    format!("{CURRENCY_SYMBOL}{rounded:.2}")
}
