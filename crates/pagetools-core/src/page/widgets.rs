//! The three page widgets and the events each one handles.

use rand::rngs::StdRng;
use std::time::Instant;

use super::dom::{self, DomUpdate};
use super::event::{EventKind, PageEvent};
use crate::charts::{mortgage_charts, ChartBackend, ChartId, ChartSlot, ChartView, LARGE_CLASS};
use crate::coerce;
use crate::mortgage::{calculate, LoanForm, MortgageResult, MortgageSummary, TermControl};
use crate::password::clipboard::COPY_LABEL;
use crate::password::{generate_with_rng, Clipboard, CopyFeedback, PasswordSpec};
use crate::text_metrics::count_text;

// ---------------------------------------------------------------------------
// Word counter
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct WordCounter;

impl WordCounter {
    pub const EVENTS: &'static [EventKind] = &[EventKind::TextInput];

    pub fn handle(&mut self, event: &PageEvent, out: &mut Vec<DomUpdate>) {
        if let PageEvent::TextInput { text } = event {
            let metrics = count_text(text);
            out.push(DomUpdate::text(dom::WORD_COUNT, metrics.word_count.to_string()));
            out.push(DomUpdate::text(dom::CHAR_COUNT, metrics.char_count.to_string()));
        }
    }
}

// ---------------------------------------------------------------------------
// Password generator
// ---------------------------------------------------------------------------

pub struct PasswordGenerator<C> {
    clipboard: C,
    rng: StdRng,
    output: String,
    copy: CopyFeedback,
    shown_label: &'static str,
}

impl<C: Clipboard> PasswordGenerator<C> {
    pub const EVENTS: &'static [EventKind] = &[
        EventKind::LengthInput,
        EventKind::GeneratePassword,
        EventKind::CopyPassword,
        EventKind::Tick,
    ];

    pub fn new(clipboard: C, rng: StdRng) -> Self {
        Self {
            clipboard,
            rng,
            output: String::new(),
            copy: CopyFeedback::new(),
            shown_label: COPY_LABEL,
        }
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn handle(&mut self, event: &PageEvent, now: Instant, out: &mut Vec<DomUpdate>) {
        match event {
            PageEvent::LengthInput { value } => {
                out.push(DomUpdate::text(dom::LENGTH_VALUE, value.clone()));
            }
            PageEvent::GeneratePassword {
                length,
                include_numbers,
                include_symbols,
            } => {
                let spec = PasswordSpec::new(
                    coerce::integer_or_zero(length),
                    *include_numbers,
                    *include_symbols,
                );
                self.output = generate_with_rng(&spec, &mut self.rng);
                out.push(DomUpdate::value(dom::PASSWORD_OUTPUT, self.output.clone()));
            }
            PageEvent::CopyPassword => {
                self.clipboard.write_text(&self.output);
                self.copy.press(now);
                self.refresh_label(now, out);
            }
            PageEvent::Tick => self.refresh_label(now, out),
            _ => {}
        }
    }

    /// Emit the copy label only when it differs from what is on screen.
    fn refresh_label(&mut self, now: Instant, out: &mut Vec<DomUpdate>) {
        let label = self.copy.label(now);
        if label != self.shown_label {
            self.shown_label = label;
            out.push(DomUpdate::text(dom::COPY_BUTTON, label));
        }
    }
}

// ---------------------------------------------------------------------------
// Mortgage calculator
// ---------------------------------------------------------------------------

pub struct MortgageCalculator<B> {
    backend: B,
    term: TermControl,
    pie: ChartSlot,
    amortization: ChartSlot,
    pie_view: ChartView,
    amortization_view: ChartView,
    last: Option<MortgageResult>,
}

impl<B: ChartBackend> MortgageCalculator<B> {
    pub const EVENTS: &'static [EventKind] = &[
        EventKind::AdjustYears,
        EventKind::YearsInput,
        EventKind::CalculateMortgage,
        EventKind::ToggleChart,
    ];

    pub fn new(backend: B, term: TermControl) -> Self {
        Self {
            backend,
            term,
            pie: ChartSlot::new(ChartId::Pie.canvas()),
            amortization: ChartSlot::new(ChartId::Amortization.canvas()),
            pie_view: ChartView::default(),
            amortization_view: ChartView::default(),
            last: None,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn term(&self) -> &TermControl {
        &self.term
    }

    pub fn last_result(&self) -> Option<&MortgageResult> {
        self.last.as_ref()
    }

    pub fn view(&self, chart: ChartId) -> ChartView {
        match chart {
            ChartId::Pie => self.pie_view,
            ChartId::Amortization => self.amortization_view,
        }
    }

    pub fn years_display(&self) -> DomUpdate {
        DomUpdate::text(dom::YEARS_VALUE, self.term.display())
    }

    pub fn handle(&mut self, event: &PageEvent, out: &mut Vec<DomUpdate>) {
        match event {
            PageEvent::AdjustYears { delta } => {
                self.term.adjust(*delta);
                out.push(self.years_display());
            }
            PageEvent::YearsInput { value } => {
                let years = coerce::integer_or_zero(value).max(0);
                self.term.set(u32::try_from(years).unwrap_or(u32::MAX));
                out.push(self.years_display());
            }
            PageEvent::CalculateMortgage { form } => self.recalculate(form, out),
            PageEvent::ToggleChart { chart } => {
                let view = match chart {
                    ChartId::Pie => &mut self.pie_view,
                    ChartId::Amortization => &mut self.amortization_view,
                };
                let state = view.toggle();
                out.push(DomUpdate::class(&chart.container(), LARGE_CLASS, state.is_large()));
                out.push(DomUpdate::text(&chart.toggle_button(), state.button_label()));
            }
            _ => {}
        }
    }

    /// A blank term field reads the term slider instead.
    fn recalculate(&mut self, form: &LoanForm, out: &mut Vec<DomUpdate>) {
        let mut form = form.clone();
        if form.years.trim().is_empty() {
            form.years = self.term.display();
        }

        let result = calculate(&form.coerce());
        let summary = MortgageSummary::from_result(&result);
        out.push(DomUpdate::html(dom::MORTGAGE_RESULT, summary.to_html()));

        let charts = mortgage_charts(&result);
        self.pie.render(&mut self.backend, &charts.pie);
        self.amortization.render(&mut self.backend, &charts.amortization);
        out.push(DomUpdate::chart(self.pie.canvas(), charts.pie));
        out.push(DomUpdate::chart(self.amortization.canvas(), charts.amortization));

        self.last = Some(result);
    }
}
