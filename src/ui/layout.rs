use ratatui::layout::Rect;

use crate::pin::view::CELL_HEIGHT;

/// Splits the screen into a body and a three line footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect) {
    let footer_height = 3.min(area.height);
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(footer_height),
    };
    (body, footer)
}

/// Area for the widget (label line plus cells) vertically centered in `body`,
/// leaving the rows below it for callback status.
pub fn field_rect(body: Rect, with_label: bool) -> Rect {
    let height = (CELL_HEIGHT + u16::from(with_label)).min(body.height);
    let y = body.y + body.height.saturating_sub(height + 2) / 2;
    Rect {
        x: body.x,
        y,
        width: body.width,
        height,
    }
}
