use serde::{Deserialize, Serialize};

use crate::charts::ChartId;
use crate::mortgage::LoanForm;

/// Everything the page can ask the widgets to do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PageEvent {
    /// Text field content changed.
    TextInput { text: String },
    /// Password length slider moved.
    LengthInput { value: String },
    GeneratePassword {
        length: String,
        #[serde(default)]
        include_numbers: bool,
        #[serde(default)]
        include_symbols: bool,
    },
    CopyPassword,
    /// Loan term step buttons.
    AdjustYears { delta: i64 },
    /// Loan term slider moved.
    YearsInput { value: String },
    CalculateMortgage {
        #[serde(default)]
        form: LoanForm,
    },
    ToggleChart { chart: ChartId },
    /// Clock advanced with no user input.
    Tick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventKind {
    TextInput,
    LengthInput,
    GeneratePassword,
    CopyPassword,
    AdjustYears,
    YearsInput,
    CalculateMortgage,
    ToggleChart,
    Tick,
}

impl PageEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            PageEvent::TextInput { .. } => EventKind::TextInput,
            PageEvent::LengthInput { .. } => EventKind::LengthInput,
            PageEvent::GeneratePassword { .. } => EventKind::GeneratePassword,
            PageEvent::CopyPassword => EventKind::CopyPassword,
            PageEvent::AdjustYears { .. } => EventKind::AdjustYears,
            PageEvent::YearsInput { .. } => EventKind::YearsInput,
            PageEvent::CalculateMortgage { .. } => EventKind::CalculateMortgage,
            PageEvent::ToggleChart { .. } => EventKind::ToggleChart,
            PageEvent::Tick => EventKind::Tick,
        }
    }
}
