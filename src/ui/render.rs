use crate::ui::app::App;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_OK};
use crate::ui::widget::{OtpField, BOX_HEIGHT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());

    frame.render_widget(header_widget(app), header);

    // Boxes plus one message line, with a cell of margin either side so a
    // shake displacement stays inside the widget area.
    let field_width = OtpField::row_width(app.spacing()) + 2;
    let field_area = centered_rect_by_size(field_width, BOX_HEIGHT + 1, body);
    let message = app.error_message();
    frame.render_widget(
        OtpField::new(&app.view())
            .spacing(app.spacing())
            .error_message(message.as_deref()),
        field_area,
    );

    if app.solved() && body.height > field_area.height {
        let status_area = ratatui::layout::Rect {
            x: body.x,
            y: field_area.y + field_area.height,
            width: body.width,
            height: 1,
        };
        let status = Paragraph::new(Line::from(Span::styled(
            "Code verified",
            Style::default().fg(STATUS_OK),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(status, status_area);
    }

    frame.render_widget(footer_widget(footer), footer);
}

fn header_widget(app: &App) -> Paragraph<'static> {
    let focus = if app.focused() { "focused" } else { "unfocused" };
    let line = Line::from(vec![
        Span::styled("One-Time Password", Style::default().fg(HEADER_TEXT)),
        Span::styled(
            format!("  ({focus})"),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        ),
    ]);
    Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn footer_widget(area: ratatui::layout::Rect) -> Paragraph<'static> {
    let hints = " Digits: Enter │ Backspace: Delete │ Tab: Focus │ Ctrl+R: Reset │ Ctrl+Q: Quit";
    let version = format!("v{} ", VERSION);

    // Pad by char count, not byte count, so the version stays flush right.
    let hints_width = hints.chars().count();
    let version_width = version.chars().count();
    let content_width = area.width.saturating_sub(2) as usize;
    let padding = content_width
        .saturating_sub(hints_width)
        .saturating_sub(version_width);

    let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let line = Line::from(vec![
        Span::styled(hints, text_style),
        Span::styled(" ".repeat(padding), text_style),
        Span::styled(version, text_style),
    ]);

    Paragraph::new(line).alignment(Alignment::Left).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
