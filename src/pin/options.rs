use std::time::Duration;

use crate::pin::cell::{CellOptions, DEFAULT_MASK_CHAR};
use crate::pin::length::PinLength;
use crate::pin::validate::CharRule;

/// Everything needed to build a [`crate::pin::PinField`].
#[derive(Debug, Clone)]
pub struct PinFieldOptions {
    pub length: PinLength,
    pub rule: CharRule,
    /// Characters past `length` are dropped, missing ones stay empty.
    pub initial_value: Option<String>,
    pub secret: bool,
    pub secret_delay: Option<Duration>,
    pub disabled: bool,
    /// Focus the first cell when mounted.
    pub auto_focus: bool,
    pub auto_select: bool,
    pub mask_char: char,
    pub placeholder: Option<char>,
    pub label: Option<String>,
}

impl Default for PinFieldOptions {
    fn default() -> Self {
        Self {
            length: PinLength::default(),
            rule: CharRule::default(),
            initial_value: None,
            secret: false,
            secret_delay: None,
            disabled: false,
            auto_focus: true,
            auto_select: true,
            mask_char: DEFAULT_MASK_CHAR,
            placeholder: None,
            label: None,
        }
    }
}

impl PinFieldOptions {
    pub(crate) fn cell_options(&self, index: usize) -> CellOptions {
        CellOptions {
            rule: self.rule.clone(),
            secret: self.secret,
            secret_delay: self.secret_delay,
            disabled: self.disabled,
            auto_select: self.auto_select,
            accepts_paste: index == 0,
            placeholder: self.placeholder,
            mask_char: self.mask_char,
        }
    }

    /// Initial character for each slot.
    pub(crate) fn initial_chars(&self) -> Vec<Option<char>> {
        let mut chars = self
            .initial_value
            .as_deref()
            .unwrap_or_default()
            .chars()
            .take(self.length.get());
        (0..self.length.get()).map(|_| chars.next()).collect()
    }
}
