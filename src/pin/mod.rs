//! Segmented PIN/OTP entry widget.
//!
//! ```text
//! keystroke ──→ Cell (validate, reveal timer) ──→ Notify (next tick)
//!                                                    │
//!              on_change / on_complete ←── PinField ←┘
//! ```
//!
//! Paste is captured by cell 0 only and handed to [`PinField::paste`],
//! which writes one character into every cell.

pub mod cell;
pub mod field;
pub mod length;
pub mod options;
pub mod validate;
pub mod view;

pub use cell::{Cell, CellEvent, CellKey, CellOptions, Glyph};
pub use field::{PinCallback, PinField, PinKey};
pub use length::{PinLength, PinLengthError};
pub use options::PinFieldOptions;
pub use validate::{CharRule, InputMode, Validator, DEFAULT_CRITERIA};

/// Deferred work owned by the widget's scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PinTask {
    /// Deliver a cell's new value to the field.
    Notify {
        index: usize,
        value: String,
        is_pasting: bool,
        /// Paste batch this write belongs to, if it came from [`PinField::paste`].
        batch: Option<u64>,
    },
    /// Secret delay elapsed for a cell.
    Conceal { index: usize },
}
