//! Preview panel ("Du har indtastet")

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the read-only projection of the current field values
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let label_style = Style::default().add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Fulde navn: ", label_style),
            Span::raw(form.full_name.as_text().to_string()),
        ]),
        Line::from(vec![
            Span::styled("Telefon: ", label_style),
            Span::raw(form.phone.as_text().to_string()),
        ]),
        Line::from(vec![
            Span::styled("Email: ", label_style),
            Span::raw(form.email.as_text().to_string()),
        ]),
        Line::from(Span::styled("Kommentar: ", label_style)),
    ];

    for comment_line in form.comment.as_text().lines() {
        lines.push(Line::from(comment_line.to_string()));
    }

    lines.push(Line::from(vec![
        Span::styled("Foretrukken kontakt: ", label_style),
        Span::raw(form.preferred_contact.as_text()),
    ]));

    let block = Block::default()
        .title(" Du har indtastet ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
