mod common;

use common::{mounted, type_char};
use pincode::pin::view::render_pin_field;
use pincode::pin::{PinField, PinFieldOptions};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::Duration;

fn screen(field: &PinField) -> String {
    let mut terminal = Terminal::new(TestBackend::new(40, 5)).unwrap();
    terminal
        .draw(|frame| render_pin_field(frame, frame.area(), field))
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn renders_label_and_typed_characters() {
    let (mut field, _) = mounted(PinFieldOptions {
        label: Some("Enter code".to_string()),
        ..PinFieldOptions::default()
    });
    type_char(&mut field, 'q');

    let text = screen(&field);
    assert!(text.contains("Enter code"));
    assert!(text.contains('Q'));
}

#[test]
fn renders_mask_once_concealed() {
    let (mut field, _) = mounted(PinFieldOptions {
        secret: true,
        secret_delay: Some(Duration::from_millis(100)),
        ..PinFieldOptions::default()
    });
    type_char(&mut field, '7');
    assert!(screen(&field).contains('7'));

    field.advance(Duration::from_millis(100));
    let text = screen(&field);
    assert!(!text.contains('7'));
    assert!(text.contains('•'));
}
