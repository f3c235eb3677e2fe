//! The container: a row of cells acting as one code-entry field.
//!
//! Owns the cells, the shared [`Scheduler`] and the aggregate code.
//! Cells never see the aggregate; the field only talks to cells through
//! their operations (`clear`, `focus`, `update`).

mod intent;
mod reducer;
mod state;

pub use intent::FieldIntent;
pub use reducer::FieldReducer;
pub use state::FieldState;

use std::collections::HashMap;
use std::time::Duration;

use crate::pin::cell::{Cell, CellEvent, CellKey};
use crate::pin::options::PinFieldOptions;
use crate::pin::PinTask;
use crate::scheduler::{Scheduler, TimerId};
use crate::ui::mvi::Reducer;

/// Receives `(pin, current_index)`.
pub type PinCallback = Box<dyn FnMut(&str, usize) + Send>;

/// Input routed to the field by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinKey {
    Char(char),
    Backspace,
    /// Move focus one cell left.
    Prev,
    /// Move focus one cell right.
    Next,
}

pub struct PinField {
    cells: Vec<Cell>,
    state: FieldState,
    scheduler: Scheduler<PinTask>,
    on_change: Option<PinCallback>,
    on_complete: Option<PinCallback>,
    /// Notifications still expected per paste batch.
    paste_batches: HashMap<u64, usize>,
    next_batch: u64,
    auto_focus: bool,
    disabled: bool,
    label: Option<String>,
}

impl std::fmt::Debug for PinField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinField")
            .field("cells", &self.cells)
            .field("state", &self.state)
            .field("paste_batches", &self.paste_batches)
            .finish_non_exhaustive()
    }
}

impl PinField {
    pub fn new(options: PinFieldOptions) -> Self {
        let cells: Vec<Cell> = options
            .initial_chars()
            .into_iter()
            .enumerate()
            .map(|(index, initial)| Cell::new(index, options.cell_options(index), initial))
            .collect();
        let state = FieldState {
            code: cells.iter().map(|cell| cell.value().to_string()).collect(),
        };
        Self {
            cells,
            state,
            scheduler: Scheduler::new(),
            on_change: None,
            on_complete: None,
            paste_batches: HashMap::new(),
            next_batch: 0,
            auto_focus: options.auto_focus,
            disabled: options.disabled,
            label: options.label,
        }
    }

    pub fn on_change(mut self, callback: impl FnMut(&str, usize) + Send + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn on_complete(mut self, callback: impl FnMut(&str, usize) + Send + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Called once the field is placed in the tree.
    pub fn mount(&mut self) {
        if self.auto_focus {
            self.focus();
        }
    }

    /// Detach every cell and drop all pending timers.
    pub fn unmount(&mut self) {
        for cell in &mut self.cells {
            cell.unmount(&mut self.scheduler);
        }
        self.paste_batches.clear();
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_secret(&self) -> bool {
        self.cells.first().is_some_and(|cell| cell.options().secret)
    }

    /// Aggregate code as last reported by the cells.
    pub fn code(&self) -> String {
        self.state.pin()
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    /// Index of the cell that currently holds focus.
    pub fn focused_index(&self) -> Option<usize> {
        self.cells.iter().position(Cell::has_focus)
    }

    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Virtual time at which the next timer fires.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    fn dispatch(&mut self, intent: FieldIntent) {
        self.state = FieldReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    /// Empty every cell, reset the aggregate and focus the first cell.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.clear(&mut self.scheduler);
        }
        self.dispatch(FieldIntent::Reset);
        self.paste_batches.clear();
        self.focus();
    }

    /// Focus the first cell.
    pub fn focus(&mut self) {
        if !self.cells.is_empty() {
            self.focus_cell(0);
        }
    }

    /// Move focus to `index`. Other cells lose focus only if the target
    /// accepted it.
    pub fn focus_cell(&mut self, index: usize) -> bool {
        let Some(target) = self.cells.get_mut(index) else {
            return false;
        };
        if !target.focus() {
            return false;
        }
        for (i, cell) in self.cells.iter_mut().enumerate() {
            if i != index {
                cell.blur();
            }
        }
        true
    }

    /// Programmatic write into one cell, as if typed (or pasted).
    pub fn update_cell(&mut self, index: usize, raw: &str, is_pasting: bool) {
        if let Some(cell) = self.cells.get_mut(index) {
            cell.update(raw, is_pasting, &mut self.scheduler);
        }
    }

    /// Route a keystroke to the focused cell.
    pub fn on_key(&mut self, key: PinKey) {
        if self.disabled {
            return;
        }
        let Some(index) = self.focused_index() else {
            return;
        };
        let cell_key = match key {
            PinKey::Char(ch) => CellKey::Char(ch),
            PinKey::Backspace => CellKey::Backspace,
            PinKey::Prev => {
                if index > 0 {
                    self.focus_cell(index - 1);
                }
                return;
            }
            PinKey::Next => {
                self.focus_cell(index + 1);
                return;
            }
        };
        let event = self.cells[index].on_key(cell_key, &mut self.scheduler);
        if let Some(event) = event {
            self.handle_cell_event(event);
        }
    }

    /// Offer pasted text to the focused cell.
    pub fn on_paste(&mut self, text: &str) {
        if self.disabled {
            return;
        }
        let Some(index) = self.focused_index() else {
            return;
        };
        if let Some(event) = self.cells[index].capture_paste(text) {
            self.handle_cell_event(event);
        }
    }

    fn handle_cell_event(&mut self, event: CellEvent) {
        match event {
            CellEvent::Backspace { index } => self.on_backspace(index),
            CellEvent::Paste { text } => self.paste(&text),
        }
    }

    fn on_backspace(&mut self, index: usize) {
        if index > 0 {
            self.focus_cell(index - 1);
        }
    }

    /// Spread `text` over the cells, one character each. Text whose length
    /// differs from the field length is discarded.
    pub fn paste(&mut self, text: &str) {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() != self.cells.len() {
            tracing::debug!(
                expected = self.cells.len(),
                got = chars.len(),
                "discarding paste of wrong length"
            );
            return;
        }

        let batch = self.next_batch;
        self.next_batch += 1;
        self.paste_batches.insert(batch, chars.len());
        for (cell, ch) in self.cells.iter_mut().zip(chars) {
            cell.update_in_batch(&ch.to_string(), batch, &mut self.scheduler);
        }
    }

    /// Advance the virtual clock by `by`, running everything that falls due.
    pub fn advance(&mut self, by: Duration) {
        let until = self.scheduler.now() + by;
        self.advance_to(until);
    }

    /// Run every task due at or before `until`.
    pub fn advance_to(&mut self, until: Duration) {
        while let Some((id, task)) = self.scheduler.pop_due(until) {
            self.run_task(id, task);
        }
        self.scheduler.settle_at(until);
    }

    fn run_task(&mut self, id: TimerId, task: PinTask) {
        match task {
            PinTask::Notify {
                index,
                value,
                is_pasting,
                batch,
            } => {
                if let Some(cell) = self.cells.get_mut(index) {
                    cell.on_notified(id);
                }
                self.on_cell_change(value, is_pasting, batch, index);
            }
            PinTask::Conceal { index } => {
                if let Some(cell) = self.cells.get_mut(index) {
                    cell.on_conceal(id);
                }
            }
        }
    }

    fn on_cell_change(
        &mut self,
        value: String,
        is_pasting: bool,
        batch: Option<u64>,
        index: usize,
    ) {
        let advance = value.chars().count() == 1 && index + 1 < self.cells.len();
        self.dispatch(FieldIntent::Write { index, value });

        let mut current = index;
        if advance {
            self.focus_cell(index + 1);
            current = index + 1;
        }

        let code = self.state.pin();
        if !is_pasting {
            if let Some(on_change) = self.on_change.as_mut() {
                on_change(&code, current);
            }
        }

        if is_pasting && !self.closes_paste(batch, index) {
            return;
        }

        if code.chars().count() == self.cells.len() {
            tracing::debug!(index = current, "code complete");
            if let Some(on_complete) = self.on_complete.as_mut() {
                on_complete(&code, current);
            }
        }
    }

    /// Whether a pasting write is the last one its paste owes. Writes
    /// outside any batch only complete from the last slot.
    fn closes_paste(&mut self, batch: Option<u64>, index: usize) -> bool {
        let Some(batch) = batch else {
            return index + 1 == self.cells.len();
        };
        let Some(remaining) = self.paste_batches.get_mut(&batch) else {
            return false;
        };
        *remaining = remaining.saturating_sub(1);
        if *remaining > 0 {
            return false;
        }
        self.paste_batches.remove(&batch);
        true
    }
}
