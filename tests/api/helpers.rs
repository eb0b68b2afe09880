use once_cell::sync::Lazy;
use portfolio_contact::notifier::{Notice, Notifier};
use portfolio_contact::telemetry::{get_subscriber, init_subscriber};
use portfolio_contact::{ContactForm, EmailClient, SubmitError, get_configuration};
use std::sync::Mutex;
use wiremock::MockServer;

pub struct TestApp {
    pub form: ContactForm,
    pub email_client: EmailClient,
    pub email_server: MockServer,
    pub notifier: RecordingNotifier,
}

#[derive(Default)]
pub struct RecordingNotifier(Mutex<Vec<Notice>>);

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.0.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.0.lock().unwrap().push(notice);
    }
}

impl TestApp {
    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        self.form.submit(&self.email_client, &self.notifier).await
    }

    pub async fn sent_template_params(&self) -> Vec<serde_json::Value> {
        self.email_server
            .received_requests()
            .await
            .expect("Request recording is disabled")
            .iter()
            .map(|request| {
                let body: serde_json::Value =
                    serde_json::from_slice(&request.body).expect("Invalid email request body");
                body["template_params"].clone()
            })
            .collect()
    }
}

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        let _ = init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        let _ = init_subscriber(subscriber);
    }
});

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let email_server = MockServer::start().await;

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        c.email_client.base_url = email_server.uri();
        c
    };

    let email_client = configuration
        .email_client
        .client()
        .expect("Failed to build the email client.");

    TestApp {
        form: ContactForm::from_settings(&configuration.contact),
        email_client,
        email_server,
        notifier: RecordingNotifier::default(),
    }
}
