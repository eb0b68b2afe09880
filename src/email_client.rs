use anyhow::Context;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::future::Future;

/// Outcome reported by the delivery API for an accepted request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryStatus {
    pub status: u16,
    pub text: String,
}

impl DeliveryStatus {
    /// Only the literal `OK` body counts as a delivered message.
    pub fn is_ok(&self) -> bool {
        self.text == "OK"
    }
}

/// Named parameters substituted into the remote email template.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TemplateParams<'a> {
    pub from_name: &'a str,
    pub from_email: &'a str,
    pub message: &'a str,
    pub to_name: &'a str,
    pub reply_to: &'a str,
}

/// Something that can hand a filled-in template to an email provider.
pub trait EmailDelivery {
    fn deliver(
        &self,
        template_params: &TemplateParams<'_>,
    ) -> impl Future<Output = Result<DeliveryStatus, anyhow::Error>> + Send;
}

/// Client for the EmailJS REST API.
pub struct EmailClient {
    http_client: reqwest::Client,
    base_url: String,
    service_id: String,
    template_id: String,
    public_key: SecretString,
    access_token: Option<SecretString>,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        service_id: String,
        template_id: String,
        public_key: SecretString,
        access_token: Option<SecretString>,
        timeout_duration: std::time::Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout_duration)
            .build()?;

        Ok(Self {
            http_client,
            base_url,
            service_id,
            template_id,
            public_key,
            access_token,
        })
    }

    #[tracing::instrument(
        name = "Sending a message through the email delivery API",
        skip(self, template_params),
        fields(from_email = %template_params.from_email)
    )]
    pub async fn send_email(
        &self,
        template_params: &TemplateParams<'_>,
    ) -> Result<DeliveryStatus, reqwest::Error> {
        let url = format!("{}/api/v1.0/email/send", self.base_url.trim_end_matches('/'));
        let request_body = SendEmailRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: self.public_key.expose_secret(),
            template_params: template_params.clone(),
            access_token: self.access_token.as_ref().map(|t| t.expose_secret()),
        };
        let response = self
            .http_client
            .post(&url)
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        tracing::debug!(status, text = %text, "Email delivery API responded");
        Ok(DeliveryStatus { status, text })
    }
}

impl EmailDelivery for EmailClient {
    async fn deliver(
        &self,
        template_params: &TemplateParams<'_>,
    ) -> Result<DeliveryStatus, anyhow::Error> {
        self.send_email(template_params)
            .await
            .context("Failed to reach the email delivery API")
    }
}

#[derive(Serialize, Debug)]
pub struct SendEmailRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: TemplateParams<'a>,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<&'a str>,
}
