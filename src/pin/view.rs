//! Rendering of a [`PinField`] as a row of boxes.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::pin::cell::{Cell, Glyph};
use crate::pin::field::PinField;
use crate::ui::theme::{CELL_BORDER, CELL_FOCUSED, CELL_TEXT, DISABLED, PLACEHOLDER};

/// Width of one cell including borders.
pub const CELL_WIDTH: u16 = 5;
/// Height of one cell including borders.
pub const CELL_HEIGHT: u16 = 3;
const CELL_GAP: u16 = 1;

/// Total width taken by `cells` boxes.
pub fn field_width(cells: usize) -> u16 {
    let cells = cells as u16;
    cells * CELL_WIDTH + cells.saturating_sub(1) * CELL_GAP
}

/// Rectangle of cell `index` when the row is centered inside `area`.
pub fn cell_rect(area: Rect, cells: usize, index: usize) -> Rect {
    let width = field_width(cells).min(area.width);
    let left = area.x + area.width.saturating_sub(width) / 2;
    let x = left + index as u16 * (CELL_WIDTH + CELL_GAP);
    Rect {
        x,
        y: area.y,
        width: CELL_WIDTH.min((area.x + area.width).saturating_sub(x)),
        height: CELL_HEIGHT.min(area.height),
    }
}

/// Render the label (if any) above the row of cells.
pub fn render_pin_field(frame: &mut Frame, area: Rect, field: &PinField) {
    let mut row = area;
    if let Some(label) = field.label() {
        let style = label_style(field.is_disabled());
        let label_area = Rect { height: 1, ..area };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(label.to_string(), style)))
                .alignment(Alignment::Center),
            label_area,
        );
        row.y = row.y.saturating_add(1);
        row.height = row.height.saturating_sub(1);
    }

    for cell in field.cells() {
        let rect = cell_rect(row, field.len(), cell.index());
        if rect.width == 0 || rect.height == 0 {
            continue;
        }
        frame.render_widget(cell_widget(cell), rect);
    }
}

fn label_style(disabled: bool) -> Style {
    if disabled {
        Style::default().fg(DISABLED).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(CELL_TEXT)
    }
}

fn cell_widget(cell: &Cell) -> Paragraph<'static> {
    let border = if cell.is_disabled() {
        Style::default().fg(DISABLED).add_modifier(Modifier::DIM)
    } else if cell.has_focus() {
        Style::default().fg(CELL_FOCUSED).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(CELL_BORDER)
    };

    let mut text = Style::default().fg(if cell.is_disabled() { DISABLED } else { CELL_TEXT });
    if cell.state().selected {
        text = text.add_modifier(Modifier::REVERSED);
    }

    let content = match cell.glyph() {
        Glyph::Plain(ch) => Span::styled(ch.to_string(), text),
        Glyph::Masked(mask) => Span::styled(mask.to_string(), text),
        Glyph::Empty {
            placeholder: Some(ch),
        } if !cell.has_focus() => Span::styled(ch.to_string(), Style::default().fg(PLACEHOLDER)),
        Glyph::Empty { .. } => Span::raw(" "),
    };

    Paragraph::new(Line::from(content))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_accounts_for_gaps() {
        assert_eq!(field_width(4), 4 * 5 + 3);
        assert_eq!(field_width(6), 6 * 5 + 5);
        assert_eq!(field_width(0), 0);
    }

    #[test]
    fn cells_are_centered_and_spaced() {
        let area = Rect::new(0, 0, 43, 3);
        let first = cell_rect(area, 4, 0);
        let second = cell_rect(area, 4, 1);
        assert_eq!(first.x, 10);
        assert_eq!(second.x, 16);
        assert_eq!(first.width, CELL_WIDTH);
    }

    #[test]
    fn cells_clip_to_narrow_area() {
        let area = Rect::new(0, 0, 8, 3);
        let second = cell_rect(area, 4, 1);
        assert!(second.x + second.width <= 8);
    }
}
