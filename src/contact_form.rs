use crate::clipboard::{Clipboard, CopiedIndicator};
use crate::configuration::ContactSettings;
use crate::domain::{ContactMessage, FormData, FormErrors, FormField, SubmissionState};
use crate::email_client::{DeliveryStatus, EmailDelivery};
use crate::notifier::{Notice, Notifier};
use crate::site::{CONTACT_EMAIL, RECIPIENT_NAME};

#[derive(thiserror::Error)]
pub enum SubmitError {
    #[error("The contact form has invalid fields: {0}")]
    Invalid(FormErrors),
    #[error("A submission is already in flight")]
    AlreadySubmitting,
    #[error("No submission is in flight")]
    NotSubmitting,
    #[error("The email delivery API answered {0:?} instead of \"OK\"")]
    Rejected(String),
    #[error(transparent)]
    Delivery(#[from] anyhow::Error),
}

impl std::fmt::Debug for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

/// State and behaviour behind the site's contact form.
///
/// Field edits, validation and the outcome of the delivery call all flow
/// through `&mut self`, so one form instance has at most one submission in
/// flight. [`ContactForm::submit`] drives a whole submission;
/// [`ContactForm::begin_submit`] and [`ContactForm::finish_submit`] expose
/// its two halves for callers that run the delivery call themselves.
#[derive(Debug)]
pub struct ContactForm {
    form: FormData,
    errors: FormErrors,
    state: SubmissionState,
    recipient_name: String,
    contact_email: String,
    copied: CopiedIndicator,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(RECIPIENT_NAME, CONTACT_EMAIL)
    }
}

impl ContactForm {
    pub fn new(recipient_name: impl Into<String>, contact_email: impl Into<String>) -> Self {
        Self {
            form: FormData::default(),
            errors: FormErrors::default(),
            state: SubmissionState::Idle,
            recipient_name: recipient_name.into(),
            contact_email: contact_email.into(),
            copied: CopiedIndicator::default(),
        }
    }

    pub fn from_settings(settings: &ContactSettings) -> Self {
        Self::new(settings.recipient_name.clone(), settings.email.clone())
    }

    pub fn form_data(&self) -> &FormData {
        &self.form
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn contact_email(&self) -> &str {
        &self.contact_email
    }

    pub fn is_submit_enabled(&self) -> bool {
        !self.state.is_submitting()
    }

    pub fn is_copied(&self) -> bool {
        self.copied.is_shown()
    }

    /// Overwrite one field and drop any error shown for it.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value.into());
        self.errors.clear(field);
        if self.state.is_terminal() {
            self.state = SubmissionState::Idle;
        }
    }

    /// Recompute the field errors from the current input.
    /// The form is valid when the returned set is empty.
    pub fn validate(&mut self) -> &FormErrors {
        self.errors = self.form.check();
        &self.errors
    }

    /// Validate and, if the input is acceptable, enter `Submitting`.
    ///
    /// Invalid input leaves the state untouched and keeps the errors for
    /// display. A second call while a submission is in flight is refused.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, SubmitError> {
        if self.state.is_submitting() {
            tracing::warn!("Ignoring a submit while another one is in flight");
            return Err(SubmitError::AlreadySubmitting);
        }
        let message = match ContactMessage::try_from(&self.form) {
            Ok(message) => message,
            Err(errors) => {
                self.errors = errors.clone();
                return Err(SubmitError::Invalid(errors));
            }
        };
        self.errors = FormErrors::default();
        self.state = SubmissionState::Submitting;
        Ok(message)
    }

    /// Settle the in-flight submission with the delivery outcome and tell
    /// the user how it went. Typed input is only cleared on success.
    pub fn finish_submit<N: Notifier>(
        &mut self,
        outcome: Result<DeliveryStatus, anyhow::Error>,
        notifier: &N,
    ) -> Result<(), SubmitError> {
        if !self.state.is_submitting() {
            return Err(SubmitError::NotSubmitting);
        }
        let result = match outcome {
            Ok(status) if status.is_ok() => Ok(()),
            Ok(status) => Err(SubmitError::Rejected(status.text)),
            Err(e) => Err(SubmitError::Delivery(e)),
        };
        match &result {
            Ok(()) => {
                tracing::info!("Contact message delivered");
                self.form = FormData::default();
                self.state = SubmissionState::Succeeded;
                notifier.notify(Notice::Sent);
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to send contact message"
                );
                self.state = SubmissionState::Failed;
                notifier.notify(Notice::Failed);
            }
        }
        result
    }

    #[tracing::instrument(
        name = "Submitting the contact form",
        skip(self, delivery, notifier),
        fields(sender_email = %self.form.email, sender_name = %self.form.name)
    )]
    pub async fn submit<D, N>(&mut self, delivery: &D, notifier: &N) -> Result<(), SubmitError>
    where
        D: EmailDelivery,
        N: Notifier,
    {
        let message = self.begin_submit()?;
        let outcome = delivery
            .deliver(&message.template_params(&self.recipient_name))
            .await;
        self.finish_submit(outcome, notifier)
    }

    /// Put the contact address on the clipboard. Failures are logged and
    /// otherwise ignored; the copied indicator simply stays down.
    pub async fn copy_email_to_clipboard<C: Clipboard>(&mut self, clipboard: &C) {
        match clipboard.write_text(&self.contact_email).await {
            Ok(()) => self.copied.show(),
            Err(e) => tracing::error!(error.cause_chain = ?e, "Failed to copy email"),
        }
    }
}
