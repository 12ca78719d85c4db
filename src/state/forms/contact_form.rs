//! Contact form state machine

use super::field::{ContactMethod, FieldId, FieldValue, FormField};
use crate::state::ConfirmationStyle;
use crate::validation::{EmailValidator, RegexValidator, RequiredValidator, Validator};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Inline error shown under the phone field while it contains a non-digit.
pub const PHONE_FORMAT_MESSAGE: &str = "Telefonnummer må kun indeholde tal";

/// Confirmation shown after a successful submit.
pub const SENT_MESSAGE: &str = "Formularen er sendt! ✅";

/// Index of the Send/Nulstil row in the tab order.
const BUTTONS_ROW: usize = 5;

/// Why a submit attempt was rejected. `Display` is the alert text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The form still carries an inline validation error.
    #[error("Ret fejlene i formularen før du sender!")]
    PendingErrors,
    /// A host-level check (required field, email format) failed.
    #[error("{0}")]
    HostValidation(String),
}

/// Snapshot of the values accepted by a submit, used for the local echo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub comment: String,
    pub preferred_contact: ContactMethod,
    pub submitted_at: DateTime<Utc>,
}

/// The contact form: five fields, the derived validation/confirmation
/// strings, and the tab-order bookkeeping for the TUI.
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub confirmation_style: ConfirmationStyle,
    pub full_name: FormField,
    pub phone: FormField,
    pub email: FormField,
    pub comment: FormField,
    pub preferred_contact: FormField,
    /// Empty iff the phone value matched the digits-only pattern at its
    /// last evaluation.
    pub phone_error: String,
    /// Empty until a successful inline-style submit; cleared by reset.
    pub sent_message: String,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row (0=Send, 1=Nulstil)
    pub selected_button: usize,
}

impl ContactForm {
    pub fn new(confirmation_style: ConfirmationStyle) -> Self {
        Self {
            confirmation_style,
            full_name: FormField::text(FieldId::FullName),
            phone: FormField::text(FieldId::Phone),
            email: FormField::text(FieldId::Email),
            comment: FormField::multiline(FieldId::Comment),
            preferred_contact: FormField::choice(FieldId::PreferredContact),
            phone_error: String::new(),
            sent_message: String::new(),
            active_field_index: 0,
            selected_button: 0,
        }
    }

    pub fn field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.full_name),
            1 => Some(&self.phone),
            2 => Some(&self.email),
            3 => Some(&self.comment),
            4 => Some(&self.preferred_contact),
            // Index 5 is the buttons row, no FormField for it
            _ => None,
        }
    }

    fn field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.full_name),
            1 => Some(&mut self.phone),
            2 => Some(&mut self.email),
            3 => Some(&mut self.comment),
            4 => Some(&mut self.preferred_contact),
            _ => None,
        }
    }

    pub fn active_field(&self) -> Option<&FormField> {
        self.field(self.active_field_index)
    }

    /// Number of tab stops (five fields plus the buttons row)
    pub fn field_count(&self) -> usize {
        6
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.active_field().is_some_and(|f| f.is_multiline)
    }

    pub fn is_active_field_choice(&self) -> bool {
        self.active_field()
            .is_some_and(|f| matches!(f.value, FieldValue::Choice(_)))
    }

    /// Move to the next tab stop (wraps around)
    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.field_count();
    }

    /// Move to the previous tab stop (wraps around)
    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.field_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Number of buttons on the buttons row; Nulstil only exists in the
    /// inline style.
    pub fn button_count(&self) -> usize {
        match self.confirmation_style {
            ConfirmationStyle::Inline => 2,
            ConfirmationStyle::AlertAndReset => 1,
        }
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % self.button_count();
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = self.button_count() - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    /// Switch confirmation style, keeping the button selection in range
    pub fn set_confirmation_style(&mut self, style: ConfirmationStyle) {
        self.confirmation_style = style;
        if self.selected_button >= self.button_count() {
            self.selected_button = 0;
        }
    }

    /// Change handler: write `value` into the named field, leaving every
    /// other field untouched. Editing the phone field re-evaluates the
    /// digits-only pattern.
    pub fn set_field(&mut self, id: FieldId, value: &str) {
        match id {
            FieldId::FullName => self.full_name.set_text(value.to_string()),
            FieldId::Phone => {
                self.phone.set_text(value.to_string());
                self.revalidate_phone();
            }
            FieldId::Email => self.email.set_text(value.to_string()),
            FieldId::Comment => self.comment.set_text(value.to_string()),
            FieldId::PreferredContact => {
                if let Some(method) = ContactMethod::from_value(value) {
                    self.preferred_contact.set_choice(method);
                }
            }
        }
    }

    /// Keystroke path of the change handler; routes the phone field
    /// through the same evaluation as `set_field`.
    pub fn push_char(&mut self, c: char) {
        let index = self.active_field_index;
        let Some(field) = self.field_mut(index) else {
            return;
        };
        let id = field.id;
        field.push_char(c);
        if id == FieldId::Phone {
            self.revalidate_phone();
        }
    }

    /// Backspace in the active field
    pub fn backspace(&mut self) {
        let index = self.active_field_index;
        let Some(field) = self.field_mut(index) else {
            return;
        };
        let id = field.id;
        field.pop_char();
        if id == FieldId::Phone {
            self.revalidate_phone();
        }
    }

    /// Flip the radio selection, routed through the change handler
    pub fn toggle_preferred_contact(&mut self) {
        let mut method = self.preferred_contact.as_choice();
        method.toggle();
        self.set_field(FieldId::PreferredContact, method.as_str());
    }

    fn revalidate_phone(&mut self) {
        let digits_only = RegexValidator::new(r"^[0-9]*$", PHONE_FORMAT_MESSAGE)
            .expect("digits pattern compiles");
        self.phone_error = if digits_only.validate(self.phone.as_text()).is_ok() {
            String::new()
        } else {
            digits_only.message().to_string()
        };
    }

    /// Submit handler. Rejects with the alert text while the form carries
    /// an inline error or fails the host-level checks; otherwise returns a
    /// snapshot of the entered values and applies the configured
    /// confirmation behavior.
    pub fn submit(&mut self) -> Result<Submission, SubmitError> {
        if !self.phone_error.is_empty() {
            return Err(SubmitError::PendingErrors);
        }

        let fields = [&self.full_name, &self.phone, &self.email];
        for field in fields.into_iter().filter(|f| f.is_required()) {
            let required = RequiredValidator::new(format!(
                "Udfyld feltet \"{}\" før du sender.",
                field.label()
            ));
            required
                .validate(field.as_text())
                .map_err(SubmitError::HostValidation)?;
        }

        EmailValidator::new()
            .validate(self.email.as_text())
            .map_err(SubmitError::HostValidation)?;

        let submission = Submission {
            full_name: self.full_name.as_text().to_string(),
            phone: self.phone.as_text().to_string(),
            email: self.email.as_text().to_string(),
            comment: self.comment.as_text().to_string(),
            preferred_contact: self.preferred_contact.as_choice(),
            submitted_at: Utc::now(),
        };

        match self.confirmation_style {
            ConfirmationStyle::Inline => {
                self.sent_message = SENT_MESSAGE.to_string();
            }
            ConfirmationStyle::AlertAndReset => {
                self.reset();
            }
        }

        Ok(submission)
    }

    /// Reset handler: restore every field and both derived strings to
    /// their defaults.
    pub fn reset(&mut self) {
        self.full_name.clear();
        self.phone.clear();
        self.email.clear();
        self.comment.clear();
        self.preferred_contact.clear();
        self.phone_error.clear();
        self.sent_message.clear();
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(ConfirmationStyle::default())
    }
}
