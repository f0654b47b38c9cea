//! Enlarge / minimize toggle for a chart container.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PageToolsError;

pub const PIE_CANVAS: &str = "pieChart";
pub const AMORTIZATION_CANVAS: &str = "amortizationChart";

/// Class added to the container while enlarged.
pub const LARGE_CLASS: &str = "large";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartId {
    Pie,
    Amortization,
}

impl ChartId {
    pub fn canvas(&self) -> &'static str {
        match self {
            ChartId::Pie => PIE_CANVAS,
            ChartId::Amortization => AMORTIZATION_CANVAS,
        }
    }

    /// Parent element that receives the size class.
    pub fn container(&self) -> String {
        format!("{}Container", self.canvas())
    }

    pub fn toggle_button(&self) -> String {
        format!("{}Toggle", self.canvas())
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canvas())
    }
}

impl FromStr for ChartId {
    type Err = PageToolsError;

    /// Accepts the canvas id or the short name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            PIE_CANVAS | "pie" => Ok(ChartId::Pie),
            AMORTIZATION_CANVAS | "amortization" => Ok(ChartId::Amortization),
            other => Err(PageToolsError::UnknownElement(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartView {
    #[default]
    Normal,
    Large,
}

impl ChartView {
    pub fn toggle(&mut self) -> ChartView {
        *self = match self {
            ChartView::Normal => ChartView::Large,
            ChartView::Large => ChartView::Normal,
        };
        *self
    }

    /// Label for the button that would perform the next toggle.
    pub fn button_label(&self) -> &'static str {
        match self {
            ChartView::Normal => "Enlarge",
            ChartView::Large => "Minimize",
        }
    }

    pub fn is_large(&self) -> bool {
        matches!(self, ChartView::Large)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let mut v = ChartView::default();
        assert_eq!(v.button_label(), "Enlarge");
        assert_eq!(v.toggle(), ChartView::Large);
        assert_eq!(v.button_label(), "Minimize");
        assert!(v.is_large());
        assert_eq!(v.toggle(), ChartView::Normal);
        assert!(!v.is_large());
    }

    #[test]
    fn test_chart_id_parsing() {
        assert_eq!("pieChart".parse::<ChartId>().unwrap(), ChartId::Pie);
        assert_eq!("amortization".parse::<ChartId>().unwrap(), ChartId::Amortization);
        assert_eq!(ChartId::Pie.container(), "pieChartContainer");
        assert_eq!(ChartId::Amortization.toggle_button(), "amortizationChartToggle");
        assert!(matches!(
            "barChart".parse::<ChartId>(),
            Err(PageToolsError::UnknownElement(_))
        ));
    }
}
