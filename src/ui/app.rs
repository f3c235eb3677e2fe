use crate::pin::{PinField, PinFieldOptions, PinKey};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Longest the loop sleeps when no timer is pending.
const IDLE_WAIT: Duration = Duration::from_millis(250);

/// Last values seen by the widget callbacks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallbackLog {
    pub last_change: Option<(String, usize)>,
    pub last_complete: Option<(String, usize)>,
    pub completions: usize,
}

pub struct App {
    should_quit: bool,
    field: PinField,
    log: Arc<Mutex<CallbackLog>>,
    started: Instant,
}

impl App {
    /// Build the widget and mount it.
    pub fn new(options: PinFieldOptions, started: Instant) -> Self {
        let log = Arc::new(Mutex::new(CallbackLog::default()));
        let change_log = Arc::clone(&log);
        let complete_log = Arc::clone(&log);
        let mut field = PinField::new(options)
            .on_change(move |pin, index| {
                change_log.lock().last_change = Some((pin.to_string(), index));
            })
            .on_complete(move |pin, index| {
                tracing::info!(index, "PIN entry completed");
                let mut log = complete_log.lock();
                log.last_complete = Some((pin.to_string(), index));
                log.completions += 1;
            });
        field.mount();

        Self {
            should_quit: false,
            field,
            log,
            started,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn field(&self) -> &PinField {
        &self.field
    }

    pub fn callback_log(&self) -> CallbackLog {
        self.log.lock().clone()
    }

    pub fn on_key(&mut self, key: PinKey) {
        self.field.on_key(key);
    }

    pub fn on_paste(&mut self, text: &str) {
        self.field.on_paste(text);
    }

    pub fn clear(&mut self) {
        self.field.clear();
        *self.log.lock() = CallbackLog::default();
    }

    /// Run every widget timer due by `now`.
    pub fn on_tick(&mut self, now: Instant) {
        self.field.advance_to(now.saturating_duration_since(self.started));
    }

    /// How long the event loop may wait before the next timer is due.
    pub fn next_wakeup(&self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.started);
        match self.field.next_deadline() {
            Some(deadline) => deadline.saturating_sub(elapsed).min(IDLE_WAIT),
            None => IDLE_WAIT,
        }
    }

    pub fn shutdown(&mut self) {
        self.field.unmount();
    }
}
