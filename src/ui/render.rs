use crate::pin::view::render_pin_field;
use crate::ui::app::{App, CallbackLog};
use crate::ui::footer::Footer;
use crate::ui::layout::{field_rect, layout_regions};
use crate::ui::theme::{HEADER_TEXT, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (body, footer_area) = layout_regions(frame.area());
    let field = app.field();

    let field_area = field_rect(body, field.label().is_some());
    render_pin_field(frame, field_area, field);

    let status_area = Rect {
        x: body.x,
        y: field_area.y + field_area.height + 1,
        width: body.width,
        height: 2,
    };
    if status_area.bottom() <= body.bottom() {
        let lines = status_lines(&app.callback_log(), field.is_secret());
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            status_area,
        );
    }

    frame.render_widget(Footer::new().widget(footer_area), footer_area);
}

fn status_lines(log: &CallbackLog, secret: bool) -> Vec<Line<'static>> {
    let dim = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let show = |pin: &str| {
        if secret {
            "•".repeat(pin.chars().count())
        } else {
            pin.to_string()
        }
    };

    let change = match &log.last_change {
        Some((pin, index)) => format!("changed: {:<6} cell {}", show(pin), index),
        None => "changed: -".to_string(),
    };
    let complete = match &log.last_complete {
        Some((pin, index)) => Span::styled(
            format!("complete: {} cell {} ({}x)", show(pin), index, log.completions),
            Style::default().fg(STATUS_OK),
        ),
        None => Span::styled("complete: -".to_string(), dim),
    };

    vec![Line::from(Span::styled(change, dim)), Line::from(complete)]
}
