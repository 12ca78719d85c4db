//! Application state definitions

use super::forms::ContactForm;
use serde::{Deserialize, Serialize};

/// How a successful submit is confirmed to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConfirmationStyle {
    /// Confirmation text inside the form; values stay visible and the
    /// preview panel and Nulstil button are available
    #[default]
    Inline,
    /// Blocking confirmation dialog, after which all fields are cleared
    AlertAndReset,
}

impl ConfirmationStyle {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Inline => Self::AlertAndReset,
            Self::AlertAndReset => Self::Inline,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Inline => "inline",
            Self::AlertAndReset => "alert-and-reset",
        }
    }
}

/// Kind of blocking alert, deciding title and color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Confirmation,
}

/// A blocking modal alert; all input except dismissal is swallowed while
/// one is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.into(),
        }
    }

    pub fn confirmation(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Confirmation,
            message: message.into(),
        }
    }
}

/// Top-level mutable state behind the render loop
#[derive(Debug, Clone)]
pub struct AppState {
    pub form: ContactForm,
    pub alert: Option<Alert>,
}

impl AppState {
    pub fn new(style: ConfirmationStyle) -> Self {
        Self {
            form: ContactForm::new(style),
            alert: None,
        }
    }

    pub fn has_alert(&self) -> bool {
        self.alert.is_some()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}
