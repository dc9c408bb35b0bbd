//! Surface Middleware
//!
//! Applies host page effects on open/close transitions: scroll lock and
//! input focus while open, scroll unlock once closed.

use crate::actions::{Action, Event};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::PaletteState;
use crate::surface::HostSurface;

pub struct SurfaceMiddleware {
    surface: Box<dyn HostSurface>,
}

impl SurfaceMiddleware {
    pub fn new(surface: Box<dyn HostSurface>) -> Self {
        Self { surface }
    }
}

impl Middleware for SurfaceMiddleware {
    fn handle(&mut self, action: &Action, _state: &PaletteState, _dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Event(Event::Opened) => {
                self.surface.set_scroll_locked(true);
                self.surface.focus_input();
            }
            Action::Event(Event::Closed) => {
                self.surface.set_scroll_locked(false);
            }
            _ => {}
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{RecordingSurface, SurfaceCall};
    use std::sync::mpsc;

    #[test]
    fn test_lock_focus_unlock() {
        let surface = RecordingSurface::new();
        let mut middleware = SurfaceMiddleware::new(Box::new(surface.clone()));
        let (tx, _rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let state = PaletteState::default();

        middleware.handle(&Action::event(Event::Opened), &state, &dispatcher);
        assert!(surface.is_scroll_locked());

        middleware.handle(&Action::event(Event::Closed), &state, &dispatcher);
        assert_eq!(
            surface.calls(),
            vec![
                SurfaceCall::ScrollLocked(true),
                SurfaceCall::FocusInput,
                SurfaceCall::ScrollLocked(false),
            ]
        );
    }
}
