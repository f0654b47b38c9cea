//! Declarative chart descriptions for the mortgage results and the canvas
//! slots that own the rendered instances.

pub mod config;
pub mod slot;
pub mod view;

pub use config::{amortization_chart, mortgage_charts, pie_chart, ChartConfig, MortgageCharts};
pub use slot::{ChartBackend, ChartHandle, ChartSlot, RecordingBackend};
pub use view::{ChartId, ChartView, LARGE_CLASS};
