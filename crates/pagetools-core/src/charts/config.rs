//! Chart configurations in the charting library's JSON shape.

use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::mortgage::{AmortizationPeriod, MortgageResult};
use crate::types::Money;

pub const PRINCIPAL_COLOR: &str = "#4facfe";
pub const INTEREST_COLOR: &str = "#00f2fe";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Bar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
    Left,
    Right,
}

/// Axis label: category names for the pie, period numbers for the bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartLabel {
    Index(u32),
    Text(String),
}

/// One color for the whole dataset, or one per data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Colors {
    Single(String),
    PerPoint(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    pub background_color: Colors,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<ChartLabel>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub position: LegendPosition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub stacked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub responsive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
    pub plugins: Plugins,
}

impl ChartOptions {
    fn responsive_bottom_legend() -> Self {
        Self {
            responsive: true,
            scales: None,
            plugins: Plugins {
                legend: Legend {
                    position: LegendPosition::Bottom,
                },
            },
        }
    }
}

/// Everything the charting library needs to draw one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

/// Both mortgage charts for one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageCharts {
    pub pie: ChartConfig,
    pub amortization: ChartConfig,
}

fn to_plot(value: Money) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// Two slices: the loan amount and the total interest.
pub fn pie_chart(loan_amount: Money, total_interest: Money) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Pie,
        data: ChartData {
            labels: vec![
                ChartLabel::Text("Principal".into()),
                ChartLabel::Text("Interest".into()),
            ],
            datasets: vec![Dataset {
                label: None,
                data: vec![to_plot(loan_amount), to_plot(total_interest)],
                background_color: Colors::PerPoint(vec![
                    PRINCIPAL_COLOR.into(),
                    INTEREST_COLOR.into(),
                ]),
            }],
        },
        options: ChartOptions::responsive_bottom_legend(),
    }
}

/// Stacked bars per period: principal portion under interest portion.
pub fn amortization_chart(schedule: &[AmortizationPeriod]) -> ChartConfig {
    let labels = schedule.iter().map(|p| ChartLabel::Index(p.period)).collect();
    let principal = schedule.iter().map(|p| to_plot(p.principal)).collect();
    let interest = schedule.iter().map(|p| to_plot(p.interest)).collect();

    let mut options = ChartOptions::responsive_bottom_legend();
    options.scales = Some(Scales {
        x: Axis { stacked: true },
        y: Axis { stacked: true },
    });

    ChartConfig {
        kind: ChartKind::Bar,
        data: ChartData {
            labels,
            datasets: vec![
                Dataset {
                    label: Some("Principal".into()),
                    data: principal,
                    background_color: Colors::Single(PRINCIPAL_COLOR.into()),
                },
                Dataset {
                    label: Some("Interest".into()),
                    data: interest,
                    background_color: Colors::Single(INTEREST_COLOR.into()),
                },
            ],
        },
        options,
    }
}

pub fn mortgage_charts(result: &MortgageResult) -> MortgageCharts {
    MortgageCharts {
        pie: pie_chart(result.loan_amount, result.total_interest),
        amortization: amortization_chart(&result.schedule),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mortgage::{calculate, LoanParameters};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn small_loan() -> MortgageResult {
        calculate(&LoanParameters {
            principal: dec!(12_000),
            down_payment: dec!(0),
            annual_interest_rate: dec!(6),
            years: 1,
            extra_payment: dec!(0),
        })
    }

    #[test]
    fn test_pie_json_shape() {
        let cfg = pie_chart(dec!(1000), dec!(250.5));
        let v = serde_json::to_value(&cfg).unwrap();
        assert_eq!(
            v,
            json!({
                "type": "pie",
                "data": {
                    "labels": ["Principal", "Interest"],
                    "datasets": [{
                        "data": [1000.0, 250.5],
                        "backgroundColor": ["#4facfe", "#00f2fe"]
                    }]
                },
                "options": {
                    "responsive": true,
                    "plugins": { "legend": { "position": "bottom" } }
                }
            })
        );
    }

    #[test]
    fn test_bar_is_stacked_per_period() {
        let result = small_loan();
        let cfg = amortization_chart(&result.schedule);
        assert_eq!(cfg.kind, ChartKind::Bar);
        assert_eq!(cfg.data.labels.len(), 12);
        assert_eq!(cfg.data.labels[0], ChartLabel::Index(1));
        assert_eq!(cfg.data.datasets.len(), 2);
        assert_eq!(cfg.data.datasets[0].label.as_deref(), Some("Principal"));
        assert_eq!(cfg.data.datasets[1].label.as_deref(), Some("Interest"));
        let scales = cfg.options.scales.as_ref().unwrap();
        assert!(scales.x.stacked && scales.y.stacked);

        let v = serde_json::to_value(&cfg).unwrap();
        assert_eq!(v["options"]["scales"]["y"]["stacked"], json!(true));
        assert_eq!(v["data"]["datasets"][1]["backgroundColor"], json!("#00f2fe"));
    }

    #[test]
    fn test_bar_stacks_sum_to_payment() {
        let result = small_loan();
        let cfg = amortization_chart(&result.schedule);
        let payment = result.monthly_payment.to_f64().unwrap();
        for i in 0..12 {
            let stacked = cfg.data.datasets[0].data[i] + cfg.data.datasets[1].data[i];
            assert!((stacked - payment).abs() < 1e-6);
        }
    }

    #[test]
    fn test_mortgage_charts_pie_uses_totals() {
        let result = small_loan();
        let charts = mortgage_charts(&result);
        let pie = &charts.pie.data.datasets[0].data;
        assert!((pie[0] - 12_000.0).abs() < 1e-9);
        assert!((pie[1] - result.total_interest.to_f64().unwrap()).abs() < 1e-6);
    }
}
