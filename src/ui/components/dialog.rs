//! Blocking alert dialog

use crate::state::{Alert, AlertKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const MAX_WIDTH: u16 = 60;

/// Render a centered alert overlay; dismissed with Enter or Esc
pub fn render_alert_dialog(frame: &mut Frame, alert: &Alert) {
    let (title, color) = match alert.kind {
        AlertKind::Error => ("Fejl", Color::Red),
        AlertKind::Confirmation => ("Sendt", Color::Green),
    };

    let area = frame.area();
    let padding = 4u16; // 2 chars padding on each side
    let max_line_width = (MAX_WIDTH - padding) as usize;

    // Word-wrap the message
    let wrapped_lines = wrap_text(&alert.message, max_line_width);
    let line_count = wrapped_lines.len();

    let content_width = wrapped_lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(title.len()) as u16;
    let dialog_width = (content_width + padding + 2).min(MAX_WIDTH); // +2 for borders

    // Height: title + blank + message lines + blank + hint + borders
    let dialog_height = (2 + line_count as u16 + 2 + 2).max(5);

    // Center the dialog
    let dialog_x = area.x + (area.width.saturating_sub(dialog_width)) / 2;
    let dialog_y = area.y + (area.height.saturating_sub(dialog_height)) / 2;

    let dialog_area = Rect {
        x: dialog_x,
        y: dialog_y,
        width: dialog_width,
        height: dialog_height,
    };

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for line in wrapped_lines {
        content.push(Line::from(line));
    }

    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::raw("Tryk "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" eller "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" for at lukke"),
    ]));

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, dialog_area);
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            if current_line.chars().count() + word.chars().count() + 1 > max_width
                && !current_line.is_empty()
            {
                lines.push(current_line);
                current_line = String::new();
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_short_line_untouched() {
        assert_eq!(wrap_text("kort besked", 40), vec!["kort besked"]);
    }

    #[test]
    fn test_wrap_text_breaks_long_lines() {
        let lines = wrap_text("Ret fejlene i formularen før du sender!", 20);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.chars().count() <= 20));
    }

    #[test]
    fn test_wrap_text_empty_input() {
        assert_eq!(wrap_text("", 20), vec![String::new()]);
    }
}
