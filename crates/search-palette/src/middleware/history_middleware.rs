//! History Middleware
//!
//! Owns the [`HistoryStore`] and performs every history side effect:
//! - Recording the chosen label when a row is selected, then reporting
//!   `Event::Selected` so the host is told only after the write
//! - Removing a single entry or clearing all of them on user request
//!
//! After each change the persisted entries are dispatched as
//! `Event::HistoryChanged`, which keeps the state's mirror in sync.

use crate::actions::{Action, Event, HistoryAction, PaletteAction};
use crate::dispatcher::Dispatcher;
use crate::history::HistoryStore;
use crate::middleware::Middleware;
use crate::state::{PaletteState, Phase};

pub struct HistoryMiddleware {
    history: HistoryStore,
}

impl HistoryMiddleware {
    pub fn new(history: HistoryStore) -> Self {
        Self { history }
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    fn select(&mut self, label: String, dispatcher: &Dispatcher) {
        log::info!("Selected: {}", label);
        self.history.record(&label);
        self.report_change(dispatcher);
        dispatcher.dispatch(Action::event(Event::Selected(label)));
    }

    fn report_change(&self, dispatcher: &Dispatcher) {
        dispatcher.dispatch(Action::event(Event::HistoryChanged(
            self.history.entries().to_vec(),
        )));
    }
}

impl Middleware for HistoryMiddleware {
    fn handle(&mut self, action: &Action, state: &PaletteState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Palette(PaletteAction::Confirm) if state.open => {
                if let Some(entry) = state.selected_entry() {
                    self.select(entry.label.to_string(), dispatcher);
                }
                true
            }

            Action::Palette(PaletteAction::SelectEntry(index)) if state.open => {
                if let Some(entry) = state.entry_at(*index) {
                    self.select(entry.label.to_string(), dispatcher);
                }
                true
            }

            Action::History(history_action) => {
                if state.phase() != Phase::Idle {
                    log::debug!(
                        "HistoryMiddleware: ignoring {:?} outside of idle phase",
                        history_action
                    );
                    return false;
                }

                match history_action {
                    HistoryAction::Remove(label) => {
                        if self.history.remove(label) {
                            log::info!("Removed {} from recent history", label);
                            self.report_change(dispatcher);
                        }
                    }
                    HistoryAction::Clear => {
                        log::info!("Clearing recent history");
                        self.history.clear();
                        self.report_change(dispatcher);
                    }
                }
                true
            }

            _ => true,
        }
    }
}
