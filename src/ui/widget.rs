//! Ratatui rendering of the OTP field.

use crate::otp::{OtpView, SHAKE_OFFSET, OTP_LENGTH};
use crate::ui::theme::{category_color, DIGIT_TEXT, STATUS_ERROR};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Widget};

/// Cell width of one digit box, borders included.
pub const BOX_WIDTH: u16 = 5;
/// Cell height of one digit box, borders included.
pub const BOX_HEIGHT: u16 = 3;

/// Six bordered digit boxes driven by an [`OtpView`], horizontally centered
/// in the render area, displaced sideways while a shake is in flight, with
/// an optional error-message line underneath.
pub struct OtpField<'a> {
    view: &'a OtpView,
    spacing: u16,
    error_message: Option<&'a str>,
}

impl<'a> OtpField<'a> {
    pub fn new(view: &'a OtpView) -> Self {
        Self {
            view,
            spacing: 1,
            error_message: None,
        }
    }

    /// Cells of blank space between adjacent boxes. Pure presentation,
    /// passed through from the embedding configuration.
    pub fn spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }

    /// Text rendered verbatim below the boxes. Shown whether or not the
    /// error treatment is active; callers pass it only when they mean it.
    pub fn error_message(mut self, message: Option<&'a str>) -> Self {
        self.error_message = message;
        self
    }

    /// Total width of the box row for a given spacing.
    pub fn row_width(spacing: u16) -> u16 {
        BOX_WIDTH * OTP_LENGTH as u16 + spacing * (OTP_LENGTH as u16 - 1)
    }

    /// Leftmost column of box `index` within `area`, shake applied.
    ///
    /// One shake unit step of `SHAKE_OFFSET` maps to one cell of
    /// displacement, so the whole row visibly jumps a single column left or
    /// right per oscillation.
    pub fn box_x(area: Rect, spacing: u16, shake_offset: i16, index: usize) -> u16 {
        let row = Self::row_width(spacing);
        let centered = area.x + area.width.saturating_sub(row) / 2;
        let shake_cells = shake_offset / SHAKE_OFFSET;
        let base = i32::from(centered) + i32::from(shake_cells);
        let x = base + i32::from(BOX_WIDTH + spacing) * index as i32;
        x.clamp(0, i32::from(u16::MAX)) as u16
    }
}

impl Widget for OtpField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < Self::row_width(self.spacing) || area.height < BOX_HEIGHT {
            return;
        }

        for (index, digit_box) in self.view.boxes.iter().enumerate() {
            let rect = Rect {
                x: Self::box_x(area, self.spacing, self.view.shake_offset, index),
                y: area.y,
                width: BOX_WIDTH,
                height: BOX_HEIGHT,
            };
            if rect.right() > area.right() {
                continue;
            }
            let border = Style::default().fg(category_color(digit_box.category));
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .render(rect, buf);
            let glyph = match digit_box.digit {
                Some(digit) => digit.to_string(),
                None if digit_box.active => "_".to_string(),
                None => " ".to_string(),
            };
            buf.set_string(
                rect.x + BOX_WIDTH / 2,
                rect.y + BOX_HEIGHT / 2,
                glyph,
                Style::default().fg(DIGIT_TEXT),
            );
        }

        if let Some(message) = self.error_message {
            if area.height > BOX_HEIGHT {
                let row = Self::row_width(self.spacing);
                let x = area.x + area.width.saturating_sub(row) / 2;
                let width = usize::from(area.right().saturating_sub(x));
                let mut text: String = message.chars().take(width).collect();
                if text.chars().count() < message.chars().count() {
                    text = message.chars().take(width.saturating_sub(1)).collect();
                    text.push('…');
                }
                buf.set_string(x, area.y + BOX_HEIGHT, text, Style::default().fg(STATUS_ERROR));
            }
        }
    }
}
