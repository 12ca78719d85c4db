//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform;
use crate::state::{Alert, AppState, ConfirmationStyle, SENT_MESSAGE};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration, persisted when the style is toggled
    pub config: TuiConfig,
    /// Transient feedback shown in the status bar
    pub status_message: Option<String>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig) -> Self {
        let style = config.confirmation_style();
        Self {
            state: AppState::new(style),
            config,
            status_message: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// The preview panel only exists in the inline style
    pub fn show_preview(&self) -> bool {
        self.state.form.confirmation_style == ConfirmationStyle::Inline
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Blocking alert swallows everything except dismissal (modal)
        if self.state.has_alert() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_alert();
            }
            return;
        }

        // Clear any status messages on key press
        self.status_message = None;

        match key.code {
            // Submit shortcut (Ctrl+S, Cmd+S on macOS)
            KeyCode::Char('s')
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(platform::SHORTCUT_MODIFIER) =>
            {
                self.submit();
            }
            // Reset shortcut, active in the inline style only
            KeyCode::Char('r')
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(platform::SHORTCUT_MODIFIER) =>
            {
                if self.show_preview() {
                    self.reset_form();
                }
            }
            // Toggle confirmation style and persist the choice
            KeyCode::Char('t')
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(platform::SHORTCUT_MODIFIER) =>
            {
                self.toggle_style();
            }
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            KeyCode::Esc => self.quit = true,
            _ => self.handle_form_key(key),
        }
    }

    /// Keys routed to the form itself (field editing, radio row, buttons)
    fn handle_form_key(&mut self, key: KeyEvent) {
        if self.state.form.is_buttons_row_active() {
            match key.code {
                KeyCode::Left | KeyCode::Up => self.state.form.prev_button(),
                KeyCode::Right | KeyCode::Down => self.state.form.next_button(),
                // Button order: 0=Send, 1=Nulstil
                KeyCode::Enter => {
                    if self.state.form.selected_button == 0 {
                        self.submit();
                    } else {
                        self.reset_form();
                    }
                }
                _ => {}
            }
            return;
        }

        if self.state.form.is_active_field_choice() {
            match key.code {
                KeyCode::Left | KeyCode::Right => self.state.form.toggle_preferred_contact(),
                KeyCode::Char(c) => self.state.form.push_char(c),
                KeyCode::Enter => self.submit(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char(c) => {
                let ch = if key.modifiers.contains(KeyModifiers::SHIFT) {
                    c.to_ascii_uppercase()
                } else {
                    c
                };
                self.state.form.push_char(ch);
            }
            KeyCode::Backspace => self.state.form.backspace(),
            KeyCode::Enter => {
                // Enter in the comment field adds a newline; elsewhere it
                // submits the form
                if self.state.form.is_active_field_multiline() {
                    self.state.form.push_char('\n');
                } else {
                    self.submit();
                }
            }
            _ => {}
        }
    }

    /// Run the submit flow and surface the outcome
    fn submit(&mut self) {
        let style = self.state.form.confirmation_style;
        match self.state.form.submit() {
            Ok(submission) => {
                tracing::info!(
                    full_name = %submission.full_name,
                    phone = %submission.phone,
                    email = %submission.email,
                    comment = %submission.comment,
                    preferred_contact = submission.preferred_contact.as_str(),
                    "formular indsendt"
                );
                self.status_message = Some(format!(
                    "Sendt kl. {}",
                    submission.submitted_at.format("%H:%M:%S")
                ));
                if style == ConfirmationStyle::AlertAndReset {
                    self.state.alert = Some(Alert::confirmation(SENT_MESSAGE));
                }
            }
            Err(err) => {
                tracing::warn!(reason = %err, "indsendelse afvist");
                self.state.alert = Some(Alert::error(err.to_string()));
            }
        }
    }

    /// Clear the form back to its defaults (Nulstil)
    fn reset_form(&mut self) {
        self.state.form.reset();
        self.status_message = Some("Formularen er nulstillet".to_string());
    }

    /// Flip between the two confirmation styles and save the choice
    fn toggle_style(&mut self) {
        let style = self.state.form.confirmation_style.toggle();
        self.state.form.set_confirmation_style(style);
        self.config.confirmation_style = Some(style);
        if let Err(err) = self.config.save() {
            tracing::warn!("failed to save config: {err:#}");
        }
        self.status_message = Some(format!("Bekræftelsesstil: {}", style.label()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AlertKind, ContactMethod, SubmitError, PHONE_FORMAT_MESSAGE};
    use pretty_assertions::assert_eq;

    fn inline_app() -> App {
        App::new(TuiConfig {
            confirmation_style: Some(ConfirmationStyle::Inline),
        })
    }

    fn alert_and_reset_app() -> App {
        App::new(TuiConfig {
            confirmation_style: Some(ConfirmationStyle::AlertAndReset),
        })
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn press_ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    /// Tab to a field and fill the whole form with valid values
    fn fill_valid_form(app: &mut App) {
        type_str(app, "Anna Jensen");
        press(app, KeyCode::Tab);
        type_str(app, "12345678");
        press(app, KeyCode::Tab);
        type_str(app, "anna@example.com");
        press(app, KeyCode::Tab);
        type_str(app, "Ring efter 16");
    }

    #[test]
    fn test_new_uses_configured_style() {
        let app = alert_and_reset_app();
        assert_eq!(
            app.state.form.confirmation_style,
            ConfirmationStyle::AlertAndReset
        );
        assert!(!app.show_preview());
    }

    #[test]
    fn test_typing_fills_active_field() {
        let mut app = inline_app();
        type_str(&mut app, "Anna");
        assert_eq!(app.state.form.full_name.as_text(), "Anna");
    }

    #[test]
    fn test_tab_moves_between_fields() {
        let mut app = inline_app();
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "123");
        assert_eq!(app.state.form.phone.as_text(), "123");
        assert_eq!(app.state.form.full_name.as_text(), "");
    }

    #[test]
    fn test_phone_error_appears_and_clears_while_typing() {
        let mut app = inline_app();
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "12a3");
        assert_eq!(app.state.form.phone_error, PHONE_FORMAT_MESSAGE);
        for _ in 0..3 {
            press(&mut app, KeyCode::Backspace);
        }
        type_str(&mut app, "23");
        assert_eq!(app.state.form.phone.as_text(), "123");
        assert_eq!(app.state.form.phone_error, "");
    }

    #[test]
    fn test_submit_with_phone_error_raises_blocking_alert() {
        let mut app = inline_app();
        fill_valid_form(&mut app);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab); // back to phone
        press(&mut app, KeyCode::Char('a'));
        press_ctrl(&mut app, 's');

        let alert = app.state.alert.as_ref().expect("alert expected");
        assert_eq!(alert.kind, AlertKind::Error);
        assert_eq!(alert.message, SubmitError::PendingErrors.to_string());
        assert_eq!(app.state.form.sent_message, "");
    }

    #[test]
    fn test_alert_swallows_keys_until_dismissed() {
        let mut app = inline_app();
        press_ctrl(&mut app, 's'); // empty form, required check fires
        assert!(app.state.has_alert());

        type_str(&mut app, "abc");
        assert_eq!(app.state.form.full_name.as_text(), "");

        press(&mut app, KeyCode::Enter);
        assert!(!app.state.has_alert());

        type_str(&mut app, "abc");
        assert_eq!(app.state.form.full_name.as_text(), "abc");
    }

    #[test]
    fn test_inline_submit_keeps_values_and_sets_sent_message() {
        let mut app = inline_app();
        fill_valid_form(&mut app);
        press_ctrl(&mut app, 's');

        assert!(app.state.alert.is_none());
        assert_eq!(app.state.form.sent_message, SENT_MESSAGE);
        assert_eq!(app.state.form.full_name.as_text(), "Anna Jensen");
        assert!(app
            .status_message
            .as_deref()
            .is_some_and(|m| m.starts_with("Sendt kl.")));
    }

    #[test]
    fn test_alert_and_reset_submit_clears_and_confirms() {
        let mut app = alert_and_reset_app();
        fill_valid_form(&mut app);
        press_ctrl(&mut app, 's');

        let alert = app.state.alert.as_ref().expect("confirmation expected");
        assert_eq!(alert.kind, AlertKind::Confirmation);
        assert_eq!(alert.message, SENT_MESSAGE);
        assert_eq!(app.state.form.full_name.as_text(), "");
        assert_eq!(app.state.form.sent_message, "");
    }

    #[test]
    fn test_enter_on_single_line_field_submits() {
        let mut app = inline_app();
        press(&mut app, KeyCode::Enter);
        assert!(app.state.has_alert()); // rejected: required fields empty
    }

    #[test]
    fn test_enter_in_comment_adds_newline() {
        let mut app = inline_app();
        for _ in 0..3 {
            press(&mut app, KeyCode::Tab);
        }
        type_str(&mut app, "linje 1");
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "linje 2");
        assert_eq!(app.state.form.comment.as_text(), "linje 1\nlinje 2");
        assert!(!app.state.has_alert());
    }

    #[test]
    fn test_radio_row_arrow_keys_toggle() {
        let mut app = inline_app();
        for _ in 0..4 {
            press(&mut app, KeyCode::Tab);
        }
        assert_eq!(
            app.state.form.preferred_contact.as_choice(),
            ContactMethod::Email
        );
        press(&mut app, KeyCode::Left);
        assert_eq!(
            app.state.form.preferred_contact.as_choice(),
            ContactMethod::Telefon
        );
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(
            app.state.form.preferred_contact.as_choice(),
            ContactMethod::Email
        );
    }

    #[test]
    fn test_buttons_row_reset_restores_defaults() {
        let mut app = inline_app();
        fill_valid_form(&mut app);
        press(&mut app, KeyCode::Tab); // radio row
        press(&mut app, KeyCode::Tab); // buttons row
        assert!(app.state.form.is_buttons_row_active());

        press(&mut app, KeyCode::Right); // Nulstil
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state.form.full_name.as_text(), "");
        assert_eq!(app.state.form.comment.as_text(), "");
        assert_eq!(
            app.status_message.as_deref(),
            Some("Formularen er nulstillet")
        );
    }

    #[test]
    fn test_reset_shortcut_ignored_in_alert_and_reset_style() {
        let mut app = alert_and_reset_app();
        type_str(&mut app, "Anna");
        press_ctrl(&mut app, 'r');
        assert_eq!(app.state.form.full_name.as_text(), "Anna");
    }

    #[test]
    fn test_reset_shortcut_inline() {
        let mut app = inline_app();
        type_str(&mut app, "Anna");
        press_ctrl(&mut app, 'r');
        assert_eq!(app.state.form.full_name.as_text(), "");
    }

    #[test]
    fn test_esc_quits() {
        let mut app = inline_app();
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());
    }

    #[test]
    fn test_status_message_cleared_on_next_key() {
        let mut app = inline_app();
        fill_valid_form(&mut app);
        press_ctrl(&mut app, 's');
        assert!(app.status_message.is_some());
        press(&mut app, KeyCode::Tab);
        assert!(app.status_message.is_none());
    }
}
