#![allow(dead_code)]

use parking_lot::Mutex;
use pincode::pin::{InputMode, PinField, PinFieldOptions, PinKey, PinLength};
use std::sync::Arc;
use std::time::Duration;

pub type Calls = Arc<Mutex<Vec<(String, usize)>>>;

/// Callback invocations captured from a field.
#[derive(Clone, Default)]
pub struct Recorder {
    pub changes: Calls,
    pub completes: Calls,
}

impl Recorder {
    pub fn changes(&self) -> Vec<(String, usize)> {
        self.changes.lock().clone()
    }

    pub fn completes(&self) -> Vec<(String, usize)> {
        self.completes.lock().clone()
    }
}

/// Build and mount a field whose callbacks are recorded.
pub fn mounted(options: PinFieldOptions) -> (PinField, Recorder) {
    let recorder = Recorder::default();
    let changes = Arc::clone(&recorder.changes);
    let completes = Arc::clone(&recorder.completes);
    let mut field = PinField::new(options)
        .on_change(move |pin, index| changes.lock().push((pin.to_string(), index)))
        .on_complete(move |pin, index| completes.lock().push((pin.to_string(), index)));
    field.mount();
    (field, recorder)
}

pub fn numeric(length: PinLength) -> PinFieldOptions {
    let mut options = PinFieldOptions {
        length,
        ..PinFieldOptions::default()
    };
    options.rule = pincode::pin::CharRule::new(
        InputMode::Numeric,
        pincode::pin::validate::default_criteria(),
    );
    options
}

/// Type one character and let the deferred notification run.
pub fn type_char(field: &mut PinField, ch: char) {
    field.on_key(PinKey::Char(ch));
    field.advance(Duration::ZERO);
}

pub fn values(field: &PinField) -> Vec<String> {
    field.cells().iter().map(|c| c.value().to_string()).collect()
}
