use ratatui::style::Color;

pub const SKY_ACCENT: Color = Color::Rgb(0x7d, 0xd3, 0xfc);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const PROGRESS_FILLED: Color = Color::Rgb(0x38, 0xbd, 0xf8);
pub const PROGRESS_EMPTY: Color = Color::Rgb(0x33, 0x41, 0x55);
pub const SELECTED_HIGHLIGHT: Color = Color::Rgb(0x0c, 0x4a, 0x6e);
pub const SCORE_TEXT: Color = Color::Rgb(0x93, 0xc5, 0xfd);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
