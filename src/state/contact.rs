//! Contact form fields, validation and submission status.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::net::form_relay::{ContactPayload, RelayError};

pub const MAX_MESSAGE_CHARS: usize = 5_000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactFormError {
    #[error("Tell us your name.")]
    MissingName,
    #[error("That email address doesn't look right.")]
    InvalidEmail,
    #[error("Add a short message about the project.")]
    MissingMessage,
    #[error("Keep the message under {max} characters.")]
    MessageTooLong { max: usize },
    #[error("Already sending, hang on.")]
    AlreadySubmitting,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub budget: String,
}

impl ContactForm {
    /// Trimmed payload, or the first field error in display order.
    pub fn validate(&self) -> Result<ContactPayload, ContactFormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ContactFormError::MissingName);
        }
        let email = self.email.trim();
        if !is_plausible_email(email) {
            return Err(ContactFormError::InvalidEmail);
        }
        let message = self.message.trim();
        if message.is_empty() {
            return Err(ContactFormError::MissingMessage);
        }
        if message.chars().count() > MAX_MESSAGE_CHARS {
            return Err(ContactFormError::MessageTooLong { max: MAX_MESSAGE_CHARS });
        }
        let budget = Some(self.budget.trim()).filter(|b| !b.is_empty()).map(str::to_owned);

        Ok(ContactPayload {
            name: name.to_owned(),
            email: email.to_owned(),
            message: message.to_owned(),
            budget,
            subject: ContactPayload::subject_for(name),
        })
    }
}

/// One `@`, a non-empty local part, and a dotted domain with no empty labels.
pub fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return false;
    }
    domain.split('.').all(|label| !label.is_empty())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Sent,
    Failed(String),
}

#[derive(Clone, Debug, Default)]
pub struct ContactFormState {
    pub form: ContactForm,
    pub status: SubmitStatus,
}

impl ContactFormState {
    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Validate and move to `Submitting`. A failed validation leaves the
    /// status untouched so the form can show the error inline.
    pub fn begin_submit(&mut self) -> Result<ContactPayload, ContactFormError> {
        if self.is_submitting() {
            return Err(ContactFormError::AlreadySubmitting);
        }
        let payload = self.form.validate()?;
        self.status = SubmitStatus::Submitting;
        Ok(payload)
    }

    /// Record the relay outcome. Success clears the fields.
    pub fn finish_submit(&mut self, result: &Result<(), RelayError>) {
        match result {
            Ok(()) => {
                self.form = ContactForm::default();
                self.status = SubmitStatus::Sent;
            }
            Err(e) => self.status = SubmitStatus::Failed(e.to_string()),
        }
    }
}
