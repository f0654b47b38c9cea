//! Fixed-rate mortgage calculator: level payment, totals and the
//! per-period amortization schedule.

pub mod loan;
pub mod schedule;
pub mod summary;
pub mod term;

pub use loan::{analyze_mortgage, calculate, LoanForm, LoanParameters, MortgageResult};
pub use schedule::{amortize, AmortizationPeriod};
pub use summary::{format_currency, MortgageSummary};
pub use term::TermControl;
