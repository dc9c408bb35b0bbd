//! Navigation actions - move the highlighted row of the active list

/// Both directions wrap around at the ends of the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Navigate to next row (down arrow)
    Next,
    /// Navigate to previous row (up arrow)
    Previous,
}
