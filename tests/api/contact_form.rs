use crate::helpers::spawn_app;
use claims::{assert_err, assert_matches, assert_ok};
use portfolio_contact::SubmitError;
use portfolio_contact::domain::{FormData, FormField, SubmissionState};
use portfolio_contact::notifier::Notice;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

const SEND_PATH: &str = "/api/v1.0/email/send";

#[tokio::test]
async fn a_valid_message_is_delivered_and_the_form_is_reset() {
    // Arrange
    let mut app = spawn_app().await;
    app.form.update_field(FormField::Name, "Jane");
    app.form.update_field(FormField::Email, "jane@example.com");
    app.form.update_field(FormField::Message, "Hello");
    assert!(app.form.validate().is_empty());

    Mock::given(path(SEND_PATH))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    let outcome = app.submit().await;

    // Assert
    assert_ok!(outcome);
    assert_eq!(app.form.form_data(), &FormData::default());
    assert_eq!(app.form.state(), SubmissionState::Succeeded);
    assert_eq!(app.notifier.notices(), vec![Notice::Sent]);
}

#[tokio::test]
async fn the_template_names_the_sender_and_the_recipient() {
    let mut app = spawn_app().await;
    app.form.update_field(FormField::Name, "Jane");
    app.form.update_field(FormField::Email, "jane@example.com");
    app.form.update_field(FormField::Message, "Hello");

    Mock::given(path(SEND_PATH))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&app.email_server)
        .await;

    app.submit().await.unwrap();

    let params = &app.sent_template_params().await[0];
    assert_eq!(params["from_name"], "Jane");
    assert_eq!(params["from_email"], "jane@example.com");
    assert_eq!(params["message"], "Hello");
    assert_eq!(params["reply_to"], "jane@example.com");
    assert_eq!(params["to_name"], "Mahmudullah Kayes");
}

#[tokio::test]
async fn invalid_fields_are_reported_without_calling_the_api() {
    // Arrange
    let mut app = spawn_app().await;
    app.form.update_field(FormField::Name, "");
    app.form.update_field(FormField::Email, "bad-email");
    app.form.update_field(FormField::Message, "");

    Mock::given(path(SEND_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(0)
        .mount(&app.email_server)
        .await;

    // Act
    let outcome = app.submit().await;

    // Assert
    assert_matches!(outcome, Err(SubmitError::Invalid(_)));
    let errors = app.form.errors();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors.get(FormField::Name), Some("Name is required"));
    assert_eq!(errors.get(FormField::Email), Some("Email is invalid"));
    assert_eq!(errors.get(FormField::Message), Some("Message is required"));
    assert!(app.notifier.notices().is_empty());
}

#[tokio::test]
async fn a_server_error_keeps_the_typed_message() {
    let mut app = spawn_app().await;
    app.form.update_field(FormField::Name, "Jane");
    app.form.update_field(FormField::Email, "jane@example.com");
    app.form.update_field(FormField::Message, "Hello");
    let before = app.form.form_data().clone();

    Mock::given(path(SEND_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let outcome = app.submit().await;

    assert_matches!(outcome, Err(SubmitError::Delivery(_)));
    assert_eq!(app.form.form_data(), &before);
    assert_eq!(app.form.state(), SubmissionState::Failed);
    assert!(app.form.is_submit_enabled());
    assert_eq!(app.notifier.notices(), vec![Notice::Failed]);
}

#[tokio::test]
async fn a_success_status_with_a_different_body_is_a_failure() {
    let mut app = spawn_app().await;
    app.form.update_field(FormField::Name, "Jane");
    app.form.update_field(FormField::Email, "jane@example.com");
    app.form.update_field(FormField::Message, "Hello");

    Mock::given(path(SEND_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("Sent"))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let outcome = app.submit().await;

    assert_matches!(outcome, Err(SubmitError::Rejected(_)));
    assert_eq!(app.form.form_data().message, "Hello");
    assert_eq!(app.form.state(), SubmissionState::Failed);
}

#[tokio::test]
async fn a_failed_submission_can_be_retried() {
    let mut app = spawn_app().await;
    app.form.update_field(FormField::Name, "Jane");
    app.form.update_field(FormField::Email, "jane@example.com");
    app.form.update_field(FormField::Message, "Hello");

    Mock::given(path(SEND_PATH))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&app.email_server)
        .await;
    Mock::given(path(SEND_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&app.email_server)
        .await;

    assert_err!(app.submit().await);
    assert_ok!(app.submit().await);

    assert_eq!(app.form.state(), SubmissionState::Succeeded);
    assert_eq!(app.notifier.notices(), vec![Notice::Failed, Notice::Sent]);
}
