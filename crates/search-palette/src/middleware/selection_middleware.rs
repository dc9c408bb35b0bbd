//! Selection Middleware
//!
//! Hands `Event::Selected` to the host's callback. The event is only
//! dispatched after the history store recorded the label, so the host is
//! notified once per selection and after the write.

use crate::actions::{Action, Event};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::PaletteState;

/// Callback invoked with the selected label
pub type OnSelect = Box<dyn FnMut(&str)>;

pub struct SelectionMiddleware {
    on_select: OnSelect,
}

impl SelectionMiddleware {
    pub fn new(on_select: OnSelect) -> Self {
        Self { on_select }
    }
}

impl Middleware for SelectionMiddleware {
    fn handle(&mut self, action: &Action, _state: &PaletteState, _dispatcher: &Dispatcher) -> bool {
        if let Action::Event(Event::Selected(label)) = action {
            (self.on_select)(label);
        }
        true
    }
}
