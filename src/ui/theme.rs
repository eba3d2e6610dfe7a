use crate::otp::VisualCategory;
use ratatui::style::Color;

pub const BOX_DEFAULT: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const BOX_FOCUSED: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const BOX_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const DIGIT_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);

/// Border color for one digit box.
pub fn category_color(category: VisualCategory) -> Color {
    match category {
        VisualCategory::Default => BOX_DEFAULT,
        VisualCategory::Focused => BOX_FOCUSED,
        VisualCategory::Error => BOX_ERROR,
    }
}
