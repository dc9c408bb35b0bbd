//! Candidate Middleware
//!
//! Pulls a fresh catalog from the host whenever the palette opens, so each
//! query cycle works on current candidates and never on stale results.

use crate::actions::{Action, Event, PaletteAction};
use crate::candidate::CandidateSource;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::PaletteState;

pub struct CandidateMiddleware {
    source: Box<dyn CandidateSource>,
}

impl CandidateMiddleware {
    pub fn new(source: Box<dyn CandidateSource>) -> Self {
        Self { source }
    }
}

impl Middleware for CandidateMiddleware {
    fn handle(&mut self, action: &Action, state: &PaletteState, dispatcher: &Dispatcher) -> bool {
        if let Action::Palette(PaletteAction::Open) = action {
            if !state.open {
                let catalog = self.source.catalog();
                log::debug!(
                    "CandidateMiddleware: loaded {} candidates, {} featured",
                    catalog.candidates.len(),
                    catalog.featured.len()
                );
                dispatcher.dispatch(Action::event(Event::CatalogLoaded(catalog)));
            }
        }

        true
    }
}
