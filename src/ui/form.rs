//! Contact form rendering

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::draw_field;
use crate::app::App;
use crate::platform;
use crate::state::{ConfirmationStyle, ContactForm, ContactMethod};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the contact form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let block = Block::default()
        .title(" Kontaktformular ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Fulde navn
            Constraint::Length(3),             // Telefonnummer
            Constraint::Length(1),             // Phone error line
            Constraint::Length(3),             // Email
            Constraint::Min(4),                // Kommentar
            Constraint::Length(3),             // Radio row
            Constraint::Length(1),             // Sent message
            Constraint::Length(BUTTON_HEIGHT), // Buttons
            Constraint::Length(1),             // Help text
        ])
        .margin(1)
        .split(area);

    draw_field(frame, chunks[0], &form.full_name, form.active_field_index == 0);
    draw_field(frame, chunks[1], &form.phone, form.active_field_index == 1);

    if !form.phone_error.is_empty() {
        let error = Paragraph::new(form.phone_error.as_str())
            .style(Style::default().fg(Color::Red));
        frame.render_widget(error, chunks[2]);
    }

    draw_field(frame, chunks[3], &form.email, form.active_field_index == 2);
    draw_field(frame, chunks[4], &form.comment, form.active_field_index == 3);

    draw_radio_row(frame, chunks[5], form);

    if !form.sent_message.is_empty() {
        let sent = Paragraph::new(form.sent_message.as_str())
            .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD));
        frame.render_widget(sent, chunks[6]);
    }

    draw_buttons(frame, chunks[7], form);
    draw_help_line(frame, chunks[8], form);
}

/// Draw the preferred-contact radio row
fn draw_radio_row(frame: &mut Frame, area: Rect, form: &ContactForm) {
    let is_active = form.active_field_index == 4;
    let border_color = if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let selected = form.preferred_contact.as_choice();
    let mut spans = Vec::new();
    for method in [ContactMethod::Telefon, ContactMethod::Email] {
        let marker = if selected == method { "(•) " } else { "( ) " };
        let style = if selected == method {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("{marker}{}", method.label()), style));
        spans.push(Span::raw("   "));
    }

    let block = Block::default()
        .title(format!(" {} ", form.preferred_contact.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw the Send/Nulstil buttons row
fn draw_buttons(frame: &mut Frame, area: Rect, form: &ContactForm) {
    let is_focused = form.is_buttons_row_active();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12), // Send
            Constraint::Length(12), // Nulstil
            Constraint::Min(0),     // remaining space
        ])
        .split(area);

    render_button(
        frame,
        chunks[0],
        "Send",
        is_focused && form.selected_button == 0,
    );

    if form.confirmation_style == ConfirmationStyle::Inline {
        render_button(
            frame,
            chunks[1],
            "Nulstil",
            is_focused && form.selected_button == 1,
        );
    }
}

/// Draw keyboard hints for the current focus
fn draw_help_line(frame: &mut Frame, area: Rect, form: &ContactForm) {
    let hints = if form.is_buttons_row_active() {
        "←/→: vælg knap  Enter: aktivér  Tab: næste felt".to_string()
    } else if form.is_active_field_choice() {
        "←/→: skift  t/e: vælg  Enter: send".to_string()
    } else if form.confirmation_style == ConfirmationStyle::Inline {
        format!(
            "Tab: næste felt  {}: send  {}: nulstil  Esc: afslut",
            platform::SUBMIT_SHORTCUT,
            platform::RESET_SHORTCUT
        )
    } else {
        format!(
            "Tab: næste felt  {}: send  Esc: afslut",
            platform::SUBMIT_SHORTCUT
        )
    };

    let help = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
