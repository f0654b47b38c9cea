//! Element ids and the updates written to them.

use serde::{Deserialize, Serialize};

use crate::charts::ChartConfig;

pub const TEXT_INPUT: &str = "textInput";
pub const WORD_COUNT: &str = "wordCount";
pub const CHAR_COUNT: &str = "charCount";
pub const LENGTH_SLIDER: &str = "length";
pub const LENGTH_VALUE: &str = "lengthValue";
pub const PASSWORD_OUTPUT: &str = "passwordOutput";
pub const COPY_BUTTON: &str = "copyBtn";
pub const YEARS_VALUE: &str = "yearsValue";
pub const MORTGAGE_RESULT: &str = "mortgageResult";

/// A single write to the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DomUpdate {
    SetText { element: String, text: String },
    SetValue { element: String, value: String },
    SetHtml { element: String, html: String },
    SetClass { element: String, class: String, enabled: bool },
    RenderChart { canvas: String, config: Box<ChartConfig> },
}

impl DomUpdate {
    pub fn text(element: &str, text: impl Into<String>) -> Self {
        DomUpdate::SetText {
            element: element.to_string(),
            text: text.into(),
        }
    }

    pub fn value(element: &str, value: impl Into<String>) -> Self {
        DomUpdate::SetValue {
            element: element.to_string(),
            value: value.into(),
        }
    }

    pub fn html(element: &str, html: impl Into<String>) -> Self {
        DomUpdate::SetHtml {
            element: element.to_string(),
            html: html.into(),
        }
    }

    pub fn class(element: &str, class: &str, enabled: bool) -> Self {
        DomUpdate::SetClass {
            element: element.to_string(),
            class: class.to_string(),
            enabled,
        }
    }

    pub fn chart(canvas: &str, config: ChartConfig) -> Self {
        DomUpdate::RenderChart {
            canvas: canvas.to_string(),
            config: Box::new(config),
        }
    }

    pub fn element(&self) -> &str {
        match self {
            DomUpdate::SetText { element, .. }
            | DomUpdate::SetValue { element, .. }
            | DomUpdate::SetHtml { element, .. }
            | DomUpdate::SetClass { element, .. } => element,
            DomUpdate::RenderChart { canvas, .. } => canvas,
        }
    }
}
