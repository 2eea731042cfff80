use ratatui::style::Color;

pub const BACKGROUND: Color = Color::Black;
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const DISPLAY_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const HINT_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const PENDING_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const DIGIT_BG: Color = Color::Rgb(0x33, 0x33, 0x33);
pub const FUNCTION_BG: Color = Color::Rgb(0xa5, 0xa5, 0xa5);
pub const OPERATOR_BG: Color = Color::Rgb(0xff, 0x9f, 0x0a);
pub const FLASH_BG: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const FOCUS_TEXT: Color = Color::Rgb(0xfa, 0xcc, 0x15);
