use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);

pub const CELL_BORDER: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const CELL_FOCUSED: Color = ACCENT;
pub const CELL_TEXT: Color = HEADER_TEXT;
pub const PLACEHOLDER: Color = Color::Rgb(0x52, 0x52, 0x5b);
pub const DISABLED: Color = GLOBAL_BORDER;
