use crate::ui::mvi::UiState;

/// Aggregate of every cell's last reported value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldState {
    /// One slot per cell; never resized after construction.
    pub code: Vec<String>,
}

impl UiState for FieldState {}

impl FieldState {
    pub fn empty(length: usize) -> Self {
        Self {
            code: vec![String::new(); length],
        }
    }

    /// Slots concatenated in order.
    pub fn pin(&self) -> String {
        self.code.concat()
    }

    pub fn is_complete(&self) -> bool {
        self.code.iter().all(|slot| !slot.is_empty())
    }
}
