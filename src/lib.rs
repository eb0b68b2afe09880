pub mod clipboard;
pub mod configuration;
pub mod contact_form;
pub mod domain;
pub mod email_client;
pub mod navigation;
pub mod notifier;
pub mod pagination;
pub mod site;
pub mod telemetry;

pub use configuration::get_configuration;
pub use contact_form::{ContactForm, SubmitError};
pub use email_client::EmailClient;
pub use telemetry::{get_subscriber, init_subscriber};
