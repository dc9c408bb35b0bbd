use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::PaletteState;

pub mod candidate_middleware;
pub mod history_middleware;
pub mod logging_middleware;
pub mod selection_middleware;
pub mod surface_middleware;

pub use candidate_middleware::CandidateMiddleware;
pub use history_middleware::HistoryMiddleware;
pub use logging_middleware::LoggingMiddleware;
pub use selection_middleware::SelectionMiddleware;
pub use surface_middleware::SurfaceMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware runs on the host's event loop, synchronously with the
/// dispatch that triggered it.
pub trait Middleware {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current palette state (read-only snapshot, before reduce)
    /// - `dispatcher`: Use to dispatch actions that should re-enter middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &PaletteState, dispatcher: &Dispatcher) -> bool;
}
