use crate::ui::mvi::UiState;

/// State owned by a single cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellState {
    /// Empty, or exactly one accepted character.
    pub value: String,
    /// True while a freshly typed character is shown unmasked.
    pub revealed: bool,
    pub focused: bool,
    /// Existing character is highlighted and the next keystroke replaces it.
    pub selected: bool,
}

impl UiState for CellState {}

impl CellState {
    pub fn with_value(value: String) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}
