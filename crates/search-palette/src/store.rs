use crate::actions::{Action, Event};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducer::reduce;
use crate::state::PaletteState;
use std::sync::mpsc::{self, Receiver};

/// Store - holds palette state and runs the middleware/reducer loop
pub struct Store {
    state: PaletteState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    pending: Receiver<Action>,
}

impl Store {
    pub fn new(initial_state: PaletteState) -> Self {
        let (action_tx, pending) = mpsc::channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            pending,
        }
    }

    /// Add middleware to the store
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &PaletteState {
        &self.state
    }

    /// Get the dispatcher
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Process an action through middleware chain and reducer
    pub fn dispatch(&mut self, action: Action) {
        let was_open = self.state.open;
        let mut should_reduce = true;

        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        // If no middleware consumed the action, send to reducer
        if should_reduce {
            self.state = reduce(std::mem::take(&mut self.state), &action);
        }

        // Report open/close transitions so middleware can react to them
        if was_open != self.state.open {
            let event = if self.state.open {
                Event::Opened
            } else {
                Event::Closed
            };
            self.dispatcher.dispatch(Action::event(event));
        }

        // Process any actions dispatched by middleware
        let pending_actions: Vec<Action> = self.pending.try_iter().collect();
        for action in pending_actions {
            self.dispatch(action);
        }
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("middleware", &format!("{} middleware", self.middleware.len()))
            .finish()
    }
}
