use crate::email_client::EmailClient;
use secrecy::{ExposeSecret, SecretBox, SecretString};
use serde_aux::field_attributes::deserialize_number_from_string;
use std::time::Duration;

#[derive(serde::Deserialize, Debug)]
pub struct Settings {
    pub email_client: EmailClientSettings,
    pub contact: ContactSettings,
}

#[derive(serde::Deserialize, Debug)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: SecretBox<String>,
    #[serde(default)]
    pub access_token: Option<SecretBox<String>>,
    #[serde(
        rename = "timeout_milliseconds",
        deserialize_with = "deserialize_duration_from_millis"
    )]
    pub timeout: Duration,
}

/// Who the contact form delivers to, and the address offered for copying.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct ContactSettings {
    pub email: String,
    pub recipient_name: String,
}

fn deserialize_duration_from_millis<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let millis: u64 = deserialize_number_from_string(deserializer)?;
    Ok(Duration::from_millis(millis))
}

impl EmailClientSettings {
    pub fn client(&self) -> Result<EmailClient, reqwest::Error> {
        let public_key = SecretString::new(self.public_key.expose_secret().clone().into());
        let access_token = self
            .access_token
            .as_ref()
            .map(|token| SecretString::new(token.expose_secret().clone().into()));
        EmailClient::new(
            self.base_url.clone(),
            self.service_id.clone(),
            self.template_id.clone(),
            public_key,
            access_token,
            self.timeout,
        )
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            other => Err(format!("{} is not a valid environment", other)),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("Failed to determine the current directory: {e}"))
    })?;
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(
            configuration_directory.join("base.yaml"),
        ))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
