use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FieldIntent {
    /// A cell reported its value.
    Write { index: usize, value: String },
    /// Every slot back to empty.
    Reset,
}

impl Intent for FieldIntent {}
