//! A single character slot of the PIN widget.
//!
//! # Architecture
//!
//! - `state.rs` - value, reveal, focus and selection flags
//! - `intent.rs` - transitions requested by the cell itself
//! - `reducer.rs` - pure state transitions
//!
//! [`Cell`] wraps the state with the side effects: validation, the
//! reveal/conceal timer and the deferred change notification owed to the
//! owning [`crate::pin::PinField`].

mod intent;
mod reducer;
mod state;

pub use intent::CellIntent;
pub use reducer::CellReducer;
pub use state::CellState;

use std::time::Duration;

use crate::pin::validate::CharRule;
use crate::pin::PinTask;
use crate::scheduler::{Scheduler, TimerId};
use crate::ui::mvi::Reducer;

/// Default glyph shown in place of a masked character.
pub const DEFAULT_MASK_CHAR: char = '•';

/// Per-cell configuration, mostly mirrored from the owning widget.
#[derive(Debug, Clone)]
pub struct CellOptions {
    pub rule: CharRule,
    pub secret: bool,
    /// Reveal window for freshly typed characters. `None` or zero masks at once.
    pub secret_delay: Option<Duration>,
    pub disabled: bool,
    pub auto_select: bool,
    /// Only the designated cell forwards pasted text to the owner.
    pub accepts_paste: bool,
    pub placeholder: Option<char>,
    pub mask_char: char,
}

impl Default for CellOptions {
    fn default() -> Self {
        Self {
            rule: CharRule::default(),
            secret: false,
            secret_delay: None,
            disabled: false,
            auto_select: true,
            accepts_paste: false,
            placeholder: None,
            mask_char: DEFAULT_MASK_CHAR,
        }
    }
}

/// Keystrokes a cell understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKey {
    Char(char),
    Backspace,
}

/// Signals a cell raises synchronously for its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellEvent {
    /// Backspace on an already empty cell.
    Backspace { index: usize },
    /// Full clipboard text captured by the paste cell.
    Paste { text: String },
}

/// What the cell shows right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Empty { placeholder: Option<char> },
    Plain(char),
    Masked(char),
}

#[derive(Debug)]
pub struct Cell {
    index: usize,
    options: CellOptions,
    state: CellState,
    mounted: bool,
    conceal_timer: Option<TimerId>,
    pending_notify: Vec<TimerId>,
}

impl Cell {
    /// Create a cell. The initial character is validated silently: no
    /// reveal window and no notification.
    pub fn new(index: usize, options: CellOptions, initial: Option<char>) -> Self {
        let value = initial
            .map(|ch| options.rule.apply(&ch.to_string()))
            .unwrap_or_default();
        Self {
            index,
            options,
            state: CellState::with_value(value),
            mounted: true,
            conceal_timer: None,
            pending_notify: Vec::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn state(&self) -> &CellState {
        &self.state
    }

    pub fn value(&self) -> &str {
        &self.state.value
    }

    pub fn has_focus(&self) -> bool {
        self.state.focused
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_disabled(&self) -> bool {
        self.options.disabled
    }

    pub fn options(&self) -> &CellOptions {
        &self.options
    }

    /// Number of change notifications scheduled but not yet delivered.
    pub fn pending_notifications(&self) -> usize {
        self.pending_notify.len()
    }

    pub fn glyph(&self) -> Glyph {
        match self.state.value.chars().next() {
            None => Glyph::Empty {
                placeholder: self.options.placeholder,
            },
            Some(_) if self.options.secret && !self.state.revealed => {
                Glyph::Masked(self.options.mask_char)
            }
            Some(ch) => Glyph::Plain(ch),
        }
    }

    fn dispatch(&mut self, intent: CellIntent) {
        self.state = CellReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    /// Empty the cell without notifying the owner. Pending timers are
    /// dropped so a stale notification cannot resurrect the old value.
    pub fn clear(&mut self, scheduler: &mut Scheduler<PinTask>) {
        if !self.mounted {
            return;
        }
        self.cancel_timers(scheduler);
        self.dispatch(CellIntent::Clear);
    }

    /// Give this cell input focus. Returns `false` if it cannot take focus.
    pub fn focus(&mut self) -> bool {
        if !self.mounted || self.options.disabled {
            return false;
        }
        self.dispatch(CellIntent::Focus {
            select: self.options.auto_select,
        });
        true
    }

    pub fn blur(&mut self) {
        if self.state.focused {
            self.dispatch(CellIntent::Blur);
        }
    }

    /// Validate `raw` and adopt the result if it changed (or unconditionally
    /// while pasting). The owner hears about it on the next scheduler turn.
    pub fn update(&mut self, raw: &str, is_pasting: bool, scheduler: &mut Scheduler<PinTask>) {
        self.write(raw, is_pasting, None, scheduler);
    }

    /// Pasting write tagged with the owner's paste `batch`.
    pub fn update_in_batch(
        &mut self,
        raw: &str,
        batch: u64,
        scheduler: &mut Scheduler<PinTask>,
    ) {
        self.write(raw, true, Some(batch), scheduler);
    }

    fn write(
        &mut self,
        raw: &str,
        is_pasting: bool,
        batch: Option<u64>,
        scheduler: &mut Scheduler<PinTask>,
    ) {
        if !self.mounted {
            return;
        }
        let value = self.validate_value(raw, scheduler);
        if value == self.state.value && !is_pasting {
            return;
        }
        if value.is_empty() && !raw.is_empty() {
            tracing::debug!(index = self.index, "rejected keystroke");
        }

        self.dispatch(CellIntent::SetValue {
            value: value.clone(),
        });
        let id = scheduler.schedule(
            Duration::ZERO,
            PinTask::Notify {
                index: self.index,
                value,
                is_pasting,
                batch,
            },
        );
        self.pending_notify.push(id);
    }

    fn validate_value(&mut self, raw: &str, scheduler: &mut Scheduler<PinTask>) -> String {
        if let Some(delay) = self.options.secret_delay.filter(|d| !d.is_zero()) {
            self.restart_reveal(delay, scheduler);
        }
        self.options.rule.apply(raw)
    }

    fn restart_reveal(&mut self, delay: Duration, scheduler: &mut Scheduler<PinTask>) {
        if let Some(previous) = self.conceal_timer.take() {
            scheduler.cancel(previous);
        }
        self.dispatch(CellIntent::Reveal);
        let id = scheduler.schedule(delay, PinTask::Conceal { index: self.index });
        self.conceal_timer = Some(id);
    }

    /// Handle a keystroke while focused.
    pub fn on_key(
        &mut self,
        key: CellKey,
        scheduler: &mut Scheduler<PinTask>,
    ) -> Option<CellEvent> {
        if !self.mounted || self.options.disabled {
            return None;
        }
        match key {
            CellKey::Char(ch) => {
                // One character per cell: a filled cell only accepts input
                // while its content is selected.
                if !self.state.is_empty() && !self.state.selected {
                    return None;
                }
                self.update(&ch.to_string(), false, scheduler);
                None
            }
            CellKey::Backspace => {
                if self.state.is_empty() {
                    return Some(CellEvent::Backspace { index: self.index });
                }
                self.update("", false, scheduler);
                None
            }
        }
    }

    /// Offer pasted text to this cell.
    pub fn capture_paste(&self, text: &str) -> Option<CellEvent> {
        if !self.mounted || self.options.disabled || !self.options.accepts_paste {
            return None;
        }
        Some(CellEvent::Paste {
            text: text.to_string(),
        })
    }

    /// The conceal timer fired.
    pub fn on_conceal(&mut self, id: TimerId) {
        if self.conceal_timer == Some(id) {
            self.conceal_timer = None;
            self.dispatch(CellIntent::Conceal);
        }
    }

    /// A change notification was delivered.
    pub fn on_notified(&mut self, id: TimerId) {
        self.pending_notify.retain(|pending| *pending != id);
    }

    /// Detach from the tree. Every later operation is a no-op.
    pub fn unmount(&mut self, scheduler: &mut Scheduler<PinTask>) {
        if !self.mounted {
            return;
        }
        self.cancel_timers(scheduler);
        self.dispatch(CellIntent::Blur);
        self.mounted = false;
    }

    fn cancel_timers(&mut self, scheduler: &mut Scheduler<PinTask>) {
        if let Some(id) = self.conceal_timer.take() {
            scheduler.cancel(id);
        }
        for id in self.pending_notify.drain(..) {
            scheduler.cancel(id);
        }
    }
}
