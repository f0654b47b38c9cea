use clap::Args;
use serde_json::Value;

use pagetools_core::charts::mortgage_charts;
use pagetools_core::mortgage::{self, LoanForm, LoanParameters, MortgageSummary};

use crate::input;

/// Arguments for the mortgage calculator. Numeric flags are read the way the
/// page reads its controls: anything unparsable counts as zero.
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct MortgageArgs {
    /// Purchase price before the down payment
    #[arg(long)]
    pub principal: Option<String>,

    /// Annual interest rate in percent (e.g. 5 for 5%)
    #[arg(long)]
    pub interest: Option<String>,

    /// Term in years
    #[arg(long)]
    pub years: Option<String>,

    /// Flat extra amount added to each monthly payment
    #[arg(long)]
    pub extra: Option<String>,

    /// Up-front down payment
    #[arg(long)]
    pub down_payment: Option<String>,

    /// Include the per-period amortization schedule
    #[arg(long)]
    pub schedule: bool,

    /// Include the pie and stacked-bar chart configurations
    #[arg(long)]
    pub charts: bool,

    /// Reject negative amounts, a zero term or a zero rate instead of
    /// reporting a zero payment
    #[arg(long)]
    pub strict: bool,

    /// Path to JSON/YAML input file with loan parameters (overrides flags)
    #[arg(long)]
    pub input: Option<String>,
}

impl MortgageArgs {
    fn has_flags(&self) -> bool {
        self.principal.is_some()
            || self.interest.is_some()
            || self.years.is_some()
            || self.extra.is_some()
            || self.down_payment.is_some()
    }

    fn to_form(&self) -> LoanForm {
        LoanForm {
            principal: self.principal.clone().unwrap_or_default(),
            interest: self.interest.clone().unwrap_or_default(),
            years: self.years.clone().unwrap_or_default(),
            extra_payment: self.extra.clone().unwrap_or_default(),
            down_payment: self.down_payment.clone().unwrap_or_default(),
        }
    }
}

pub fn run_mortgage(args: MortgageArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let params: LoanParameters = if let Some(ref path) = args.input {
        input::file::read_document(path)?
    } else if args.has_flags() {
        args.to_form().coerce()
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err(
            "--principal/--interest/--years, --input <file.json> or stdin required for mortgage"
                .into(),
        );
    };

    if args.strict {
        params.validate()?;
    }

    let result = mortgage::analyze_mortgage(&params)?;
    let summary = MortgageSummary::from_result(&result.result);
    let charts = args.charts.then(|| mortgage_charts(&result.result));

    let mut value = serde_json::to_value(&result)?;
    if let Some(Value::Object(res)) = value.get_mut("result") {
        if !args.schedule {
            res.remove("schedule");
        }
        res.insert("summary".into(), serde_json::to_value(&summary)?);
    }
    if let (Some(charts), Value::Object(envelope)) = (charts, &mut value) {
        envelope.insert("charts".into(), serde_json::to_value(charts)?);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> MortgageArgs {
        MortgageArgs {
            principal: Some("200000".into()),
            interest: Some("5".into()),
            years: Some("30".into()),
            extra: None,
            down_payment: None,
            schedule: false,
            charts: false,
            strict: false,
            input: None,
        }
    }

    #[test]
    fn test_flags_produce_summary_without_schedule() {
        let value = run_mortgage(args()).unwrap();
        let result = &value["result"];
        assert_eq!(result["summary"]["monthly_payment"], "£1073.64");
        assert!(result.get("schedule").is_none());
        assert!(value.get("charts").is_none());
    }

    #[test]
    fn test_schedule_and_charts_included_on_request() {
        let value = run_mortgage(MortgageArgs {
            schedule: true,
            charts: true,
            ..args()
        })
        .unwrap();
        assert_eq!(value["result"]["schedule"].as_array().unwrap().len(), 360);
        assert_eq!(value["charts"]["pie"]["type"], "pie");
        assert_eq!(value["charts"]["amortization"]["type"], "bar");
    }

    #[test]
    fn test_garbage_flags_coerce_to_zero() {
        let value = run_mortgage(MortgageArgs {
            interest: Some("n/a".into()),
            ..args()
        })
        .unwrap();
        assert_eq!(value["result"]["summary"]["monthly_payment"], "£0.00");
        assert_eq!(value["result"]["payment_defaulted"], true);
    }

    #[test]
    fn test_strict_mode_rejects_zero_rate() {
        let err = run_mortgage(MortgageArgs {
            interest: Some("0".into()),
            strict: true,
            ..args()
        })
        .unwrap_err();
        assert!(err.to_string().contains("annual_interest_rate"));
    }
}
