//! Palette actions

/// Actions that open, close or select
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteAction {
    /// Activate the control (trigger click or hotkey)
    Open,
    /// Dismiss the control
    Close(CloseReason),
    /// Clear the query if there is one, otherwise close
    ClearOrClose,
    /// Select the highlighted row (Enter)
    Confirm,
    /// Select the row at this index of the active list (pointer click)
    SelectEntry(usize),
}

/// Why the palette is being closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Escape,
    /// Pointer interaction outside the palette
    OutsideClick,
    /// Close button or host request
    Explicit,
}
