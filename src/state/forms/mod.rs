//! Form domain layer
//!
//! The contact form state machine and its field value objects, kept free
//! of any rendering concerns so the handlers stay unit-testable.

mod contact_form;
mod field;

pub use contact_form::{
    ContactForm, SubmitError, Submission, PHONE_FORMAT_MESSAGE, SENT_MESSAGE,
};
pub use field::{ContactMethod, FieldId, FieldValue, FormField};
