//! Host page capabilities the palette drives while it is open

use std::cell::RefCell;
use std::rc::Rc;

/// Page-level effects owned by the host
pub trait HostSurface {
    /// Lock or unlock scrolling of the page behind the palette
    fn set_scroll_locked(&mut self, locked: bool);

    /// Move input focus into the palette's text field
    fn focus_input(&mut self);
}

/// Surface that ignores every request
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl HostSurface for NullSurface {
    fn set_scroll_locked(&mut self, _locked: bool) {}

    fn focus_input(&mut self) {}
}

/// A request made to a [`RecordingSurface`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceCall {
    ScrollLocked(bool),
    FocusInput,
}

/// Surface that records every request; clones share the log
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    calls: Rc<RefCell<Vec<SurfaceCall>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.calls.borrow().clone()
    }

    /// Current lock state according to the last request
    pub fn is_scroll_locked(&self) -> bool {
        self.calls
            .borrow()
            .iter()
            .rev()
            .find_map(|call| match call {
                SurfaceCall::ScrollLocked(locked) => Some(*locked),
                SurfaceCall::FocusInput => None,
            })
            .unwrap_or(false)
    }
}

impl HostSurface for RecordingSurface {
    fn set_scroll_locked(&mut self, locked: bool) {
        self.calls.borrow_mut().push(SurfaceCall::ScrollLocked(locked));
    }

    fn focus_input(&mut self) {
        self.calls.borrow_mut().push(SurfaceCall::FocusInput);
    }
}
