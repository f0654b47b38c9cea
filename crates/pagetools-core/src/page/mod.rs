//! Page wiring: one startup phase builds the widgets and fixes which widget
//! handles which event; afterwards every event runs to completion and
//! returns the element updates it caused.

pub mod dom;
pub mod event;
pub mod widgets;

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeMap;
use std::time::Instant;

use crate::charts::ChartBackend;
use crate::mortgage::TermControl;
use crate::password::Clipboard;

pub use dom::DomUpdate;
pub use event::{EventKind, PageEvent};
pub use widgets::{MortgageCalculator, PasswordGenerator, WordCounter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    WordCounter,
    PasswordGenerator,
    MortgageCalculator,
}

/// Startup options.
#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    /// Seed for the password generator; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    pub term: TermControl,
}

pub struct Page<C, B> {
    word_counter: WordCounter,
    password: PasswordGenerator<C>,
    mortgage: MortgageCalculator<B>,
    routes: BTreeMap<EventKind, Vec<Route>>,
}

impl<C: Clipboard, B: ChartBackend> Page<C, B> {
    /// Build every widget and register its events. Returns the page and the
    /// updates that initialise the displays.
    pub fn init(clipboard: C, backend: B, options: PageOptions) -> (Self, Vec<DomUpdate>) {
        let rng = match options.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };

        let mut routes: BTreeMap<EventKind, Vec<Route>> = BTreeMap::new();
        let registrations = [
            (Route::WordCounter, WordCounter::EVENTS),
            (Route::PasswordGenerator, PasswordGenerator::<C>::EVENTS),
            (Route::MortgageCalculator, MortgageCalculator::<B>::EVENTS),
        ];
        for (route, events) in registrations {
            for kind in events {
                routes.entry(*kind).or_default().push(route);
            }
        }

        let page = Self {
            word_counter: WordCounter,
            password: PasswordGenerator::new(clipboard, rng),
            mortgage: MortgageCalculator::new(backend, options.term),
            routes,
        };
        tracing::debug!(events = page.routes.len(), "page initialised");

        let initial = vec![page.mortgage.years_display()];
        (page, initial)
    }

    /// Run the handlers registered for this event.
    pub fn dispatch(&mut self, event: &PageEvent, now: Instant) -> Vec<DomUpdate> {
        let mut out = Vec::new();
        let Some(routes) = self.routes.get(&event.kind()) else {
            return out;
        };

        for route in routes {
            match route {
                Route::WordCounter => self.word_counter.handle(event, &mut out),
                Route::PasswordGenerator => self.password.handle(event, now, &mut out),
                Route::MortgageCalculator => self.mortgage.handle(event, &mut out),
            }
        }

        tracing::trace!(kind = ?event.kind(), updates = out.len(), "event dispatched");
        out
    }

    pub fn is_registered(&self, kind: EventKind) -> bool {
        self.routes.contains_key(&kind)
    }

    pub fn password(&self) -> &PasswordGenerator<C> {
        &self.password
    }

    pub fn mortgage(&self) -> &MortgageCalculator<B> {
        &self.mortgage
    }
}
