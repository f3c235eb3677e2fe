use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CellIntent {
    /// Adopt an already validated value.
    SetValue { value: String },
    Clear,
    /// Show the raw character until the next `Conceal`.
    Reveal,
    /// Secret delay elapsed. Empty cells are left alone.
    Conceal,
    Focus { select: bool },
    Blur,
}

impl Intent for CellIntent {}
