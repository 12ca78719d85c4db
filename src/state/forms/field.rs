//! Form field value objects

/// Preferred way of being contacted, chosen in the radio row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactMethod {
    Telefon,
    #[default]
    Email,
}

impl ContactMethod {
    /// Wire value of the radio option ("telefon" / "email")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Telefon => "telefon",
            Self::Email => "email",
        }
    }

    /// Display label of the radio option
    pub fn label(&self) -> &'static str {
        match self {
            Self::Telefon => "Telefon",
            Self::Email => "Email",
        }
    }

    /// Parse a radio option value
    pub fn from_value(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("telefon") {
            Some(Self::Telefon)
        } else if value.eq_ignore_ascii_case("email") {
            Some(Self::Email)
        } else {
            None
        }
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Self::Telefon => Self::Email,
            Self::Email => Self::Telefon,
        };
    }
}

/// The five addressable fields of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    FullName,
    Phone,
    Email,
    Comment,
    PreferredContact,
}

impl FieldId {
    /// Display label shown next to the field
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Fulde navn",
            Self::Phone => "Telefonnummer",
            Self::Email => "Email",
            Self::Comment => "Kommentar",
            Self::PreferredContact => "Foretrukken kontaktmetode",
        }
    }

    /// Whether the field must be non-empty at submit
    pub fn is_required(&self) -> bool {
        matches!(self, Self::FullName | Self::Phone | Self::Email)
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Choice(ContactMethod),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub id: FieldId,
    pub value: FieldValue,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new single-line text field
    pub fn text(id: FieldId) -> Self {
        Self {
            id,
            value: FieldValue::Text(String::new()),
            is_multiline: false,
        }
    }

    /// Create a new multiline text field
    pub fn multiline(id: FieldId) -> Self {
        Self {
            id,
            value: FieldValue::Text(String::new()),
            is_multiline: true,
        }
    }

    /// Create a new choice field with the default method selected
    pub fn choice(id: FieldId) -> Self {
        Self {
            id,
            value: FieldValue::Choice(ContactMethod::default()),
            is_multiline: false,
        }
    }

    pub fn label(&self) -> &'static str {
        self.id.label()
    }

    pub fn is_required(&self) -> bool {
        self.id.is_required()
    }

    /// Get the text value (choice fields yield their wire value)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice(m) => m.as_str(),
        }
    }

    /// Get the chosen contact method (default for text fields)
    pub fn as_choice(&self) -> ContactMethod {
        match &self.value {
            FieldValue::Choice(m) => *m,
            FieldValue::Text(_) => ContactMethod::default(),
        }
    }

    /// Set the text value
    pub fn set_text(&mut self, value: String) {
        if let FieldValue::Text(s) = &mut self.value {
            *s = value;
        }
    }

    /// Set the chosen contact method
    pub fn set_choice(&mut self, method: ContactMethod) {
        if let FieldValue::Choice(m) = &mut self.value {
            *m = method;
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Choice(m) => match c.to_ascii_lowercase() {
                't' => *m = ContactMethod::Telefon,
                'e' => *m = ContactMethod::Email,
                _ => {}
            },
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Choice(_) => {
                // Radio rows don't support backspace (single choice)
            }
        }
    }

    /// Clear the field value back to its default
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choice(m) => *m = ContactMethod::default(),
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice(m) => m.label().to_string(),
        }
    }
}
