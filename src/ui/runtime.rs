use crate::clipboard::ClipboardSource;
use crate::pin::PinFieldOptions;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Instant;

pub fn run(options: PinFieldOptions, shutdown: ShutdownHandle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(options, Instant::now());
    let events = EventHandler::new(shutdown.clone());
    // Opened lazily: not every session pastes, and headless hosts have none.
    let mut clipboard: Option<ClipboardSource> = None;

    loop {
        app.on_tick(Instant::now());
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(app.next_wakeup(Instant::now())) {
            Ok(AppEvent::Key(key)) => {
                if handle_key(&mut app, key) == InputAction::ClipboardPaste {
                    paste_from_clipboard(&mut app, &mut clipboard);
                }
            }
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    app.shutdown();
    drop(guard);
    Ok(())
}

fn paste_from_clipboard(app: &mut App, clipboard: &mut Option<ClipboardSource>) {
    if clipboard.is_none() {
        match ClipboardSource::open() {
            Ok(source) => *clipboard = Some(source),
            Err(err) => {
                tracing::warn!(error = %err, "skipping paste");
                return;
            }
        }
    }
    let Some(source) = clipboard.as_mut() else {
        return;
    };
    match source.read_code() {
        Ok(code) => app.on_paste(&code),
        Err(err) => tracing::warn!(error = %err, "skipping paste"),
    }
}
