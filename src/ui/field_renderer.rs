//! Field rendering for the form

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a text field from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(tom)".to_string()
    } else {
        display_value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_str
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    // Required fields get the usual asterisk in the title
    let title = if field.is_required() {
        format!(" {} * ", field.label())
    } else {
        format!(" {} ", field.label())
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
