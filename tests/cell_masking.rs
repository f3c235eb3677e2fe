mod common;

use common::{mounted, type_char};
use pincode::pin::{Glyph, PinFieldOptions, PinKey, PinLength};
use std::time::Duration;

fn secret(delay_ms: Option<u64>) -> PinFieldOptions {
    PinFieldOptions {
        length: PinLength::Six,
        secret: true,
        secret_delay: delay_ms.map(Duration::from_millis),
        ..PinFieldOptions::default()
    }
}

fn glyph(field: &pincode::pin::PinField, index: usize) -> Option<Glyph> {
    field.cell(index).map(|c| c.glyph())
}

#[test]
fn typed_character_is_masked_after_delay() {
    let (mut field, _) = mounted(secret(Some(500)));

    type_char(&mut field, '9');
    assert_eq!(glyph(&field, 0), Some(Glyph::Plain('9')));

    field.advance(Duration::from_millis(499));
    assert_eq!(glyph(&field, 0), Some(Glyph::Plain('9')));

    field.advance(Duration::from_millis(1));
    assert_eq!(glyph(&field, 0), Some(Glyph::Masked('•')));
    assert_eq!(field.code(), "9");
}

#[test]
fn new_keystroke_restarts_reveal_window() {
    let (mut field, _) = mounted(secret(Some(500)));
    type_char(&mut field, '9');
    field.advance(Duration::from_millis(300));

    assert!(field.focus_cell(0));
    type_char(&mut field, '8');

    // The first window would have closed here.
    field.advance(Duration::from_millis(200));
    assert_eq!(glyph(&field, 0), Some(Glyph::Plain('8')));

    field.advance(Duration::from_millis(299));
    assert_eq!(glyph(&field, 0), Some(Glyph::Plain('8')));

    field.advance(Duration::from_millis(1));
    assert_eq!(glyph(&field, 0), Some(Glyph::Masked('•')));
}

#[test]
fn zero_or_missing_delay_masks_immediately() {
    for delay in [None, Some(0)] {
        let (mut field, _) = mounted(secret(delay));
        field.on_key(PinKey::Char('4'));
        assert_eq!(glyph(&field, 0), Some(Glyph::Masked('•')));
        assert_eq!(field.next_deadline(), Some(Duration::ZERO));
    }
}

#[test]
fn slot_emptied_before_delay_stays_blank() {
    let (mut field, _) = mounted(secret(Some(500)));
    type_char(&mut field, '9');
    assert!(field.focus_cell(0));

    field.on_key(PinKey::Backspace);
    field.advance(Duration::from_millis(600));

    let cell = field.cell(0).expect("cell 0");
    assert_eq!(cell.value(), "");
    assert!(cell.state().revealed);
    assert_eq!(cell.glyph(), Glyph::Empty { placeholder: None });
}

#[test]
fn rejected_keystroke_still_restarts_reveal() {
    let (mut field, _) = mounted(PinFieldOptions {
        secret: true,
        secret_delay: Some(Duration::from_millis(500)),
        ..common::numeric(PinLength::Four)
    });

    field.on_key(PinKey::Char('x'));

    assert!(field.cell(0).is_some_and(|c| c.state().revealed));
    assert_eq!(field.next_deadline(), Some(Duration::from_millis(500)));
}

#[test]
fn custom_mask_char_and_placeholder() {
    let (mut field, _) = mounted(PinFieldOptions {
        secret: true,
        mask_char: '*',
        placeholder: Some('_'),
        ..PinFieldOptions::default()
    });

    type_char(&mut field, 'z');

    assert_eq!(glyph(&field, 0), Some(Glyph::Masked('*')));
    assert_eq!(glyph(&field, 1), Some(Glyph::Empty { placeholder: Some('_') }));
}

#[test]
fn clear_cancels_pending_conceal() {
    let (mut field, _) = mounted(secret(Some(500)));
    type_char(&mut field, '9');

    field.clear();

    assert_eq!(field.next_deadline(), None);
    assert!(field.cell(0).is_some_and(|c| !c.state().revealed));
}
