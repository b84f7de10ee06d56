use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const PANEL_BORDER: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const BUTTON_BORDER: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const SUCCESS: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const DANGER: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const SELECTION: Color = Color::Rgb(0x26, 0x26, 0x26);
