use ratatui::style::Color;

use crate::ui::alert::Severity;

pub const BRAND_GREEN: Color = Color::Rgb(0x14, 0x93, 0x42);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const TOAST_TEXT: Color = Color::Rgb(0xf5, 0xf5, 0xf5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const STATUS_INFO: Color = Color::Rgb(0x38, 0xbd, 0xf8);
pub const STATUS_WARNING: Color = Color::Rgb(0xf5, 0x9e, 0x0b);

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Error => STATUS_ERROR,
        Severity::Info => STATUS_INFO,
        Severity::Success => STATUS_OK,
        Severity::Warning => STATUS_WARNING,
    }
}
