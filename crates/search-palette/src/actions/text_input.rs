//! Text input actions - edits to the query

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputAction {
    /// Character typed into the input field
    Char(char),
    /// Backspace pressed - remove last character
    Backspace,
    /// Clear entire line (Ctrl+U)
    ClearLine,
    /// Replace the whole text (paste, debounced input)
    Replace(String),
}

impl TextInputAction {
    /// Apply this edit to `text`
    pub fn apply(&self, text: &mut String) {
        match self {
            TextInputAction::Char(c) => text.push(*c),
            TextInputAction::Backspace => {
                text.pop();
            }
            TextInputAction::ClearLine => text.clear(),
            TextInputAction::Replace(value) => value.clone_into(text),
        }
    }
}
