use crate::domain::{FormData, FormErrors};
use crate::email_client::TemplateParams;

/// A contact form submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    name: String,
    email: String,
    message: String,
}

impl ContactMessage {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Template parameters addressed to `recipient_name`, with replies going
    /// back to the sender.
    pub fn template_params<'a>(&'a self, recipient_name: &'a str) -> TemplateParams<'a> {
        TemplateParams {
            from_name: &self.name,
            from_email: &self.email,
            message: &self.message,
            to_name: recipient_name,
            reply_to: &self.email,
        }
    }
}

impl TryFrom<&FormData> for ContactMessage {
    type Error = FormErrors;

    fn try_from(form: &FormData) -> Result<Self, Self::Error> {
        let errors = form.check();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Self {
            name: form.name.clone(),
            email: form.email.clone(),
            message: form.message.clone(),
        })
    }
}
