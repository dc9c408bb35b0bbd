//! LoggingMiddleware - logs all actions for debugging

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::PaletteState;

/// Logs every action that passes through the store
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, state: &PaletteState, _dispatcher: &Dispatcher) -> bool {
        // Skip None to reduce noise
        if !matches!(action, Action::None) {
            log::debug!("Action: {:?} (phase {:?})", action, state.phase());
        }
        true
    }
}
