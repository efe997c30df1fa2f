use crate::utils::{spawn_app_with, TestApp};
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use realhelper::configuration::EmailClientSettings;
use secrecy::Secret;
use std::time::Duration;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

async fn spawn_app_with_notifier(email_server: &MockServer) -> TestApp {
    let base_url = email_server.uri();
    spawn_app_with(move |c| {
        c.set_email_client(EmailClientSettings::new(
            base_url,
            "updates@realhelper.example",
            Secret::new("test-token".into()),
        ));
    })
    .await
    .expect("Failed to spawn our app.")
}

/// The welcome mail is dispatched on a detached task, so give it a moment.
async fn wait_for_deliveries(email_server: &MockServer, expected: usize) -> usize {
    for _ in 0..50 {
        let received = email_server
            .received_requests()
            .await
            .map(|r| r.len())
            .unwrap_or(0);
        if received >= expected {
            return received;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    email_server
        .received_requests()
        .await
        .map(|r| r.len())
        .unwrap_or(0)
}

#[tokio::test]
async fn a_first_subscription_sends_a_welcome_email() {
    // Arrange
    let email_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/email"))
        .respond_with(ResponseTemplate::new(StatusCode::OK))
        .mount(&email_server)
        .await;
    let app = spawn_app_with_notifier(&email_server).await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .post(format!("{}/api/subscribe", app.address()))
        .json(&serde_json::json!({ "email": "user@example.com" }))
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(wait_for_deliveries(&email_server, 1).await, 1);
}

#[tokio::test]
async fn a_repeated_subscription_does_not_send_another_email() {
    // Arrange
    let email_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/email"))
        .respond_with(ResponseTemplate::new(StatusCode::OK))
        .mount(&email_server)
        .await;
    let app = spawn_app_with_notifier(&email_server).await;
    let client = reqwest::Client::new();

    // Act
    for _ in 0..2 {
        client
            .post(format!("{}/api/subscribe", app.address()))
            .json(&serde_json::json!({ "email": "user@example.com" }))
            .send()
            .await
            .expect("Failed to execute request.");
    }

    // Assert
    assert_eq!(wait_for_deliveries(&email_server, 1).await, 1);
    // A second delivery would need another detached task; give one the
    // chance to show up before declaring it absent.
    tokio::time::sleep(Duration::from_millis(200)).await;
    let received = email_server
        .received_requests()
        .await
        .map(|r| r.len())
        .unwrap_or(0);
    assert_eq!(received, 1);
}

#[tokio::test]
async fn the_response_does_not_depend_on_the_notifier() {
    // Arrange
    let email_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/email"))
        .respond_with(ResponseTemplate::new(StatusCode::INTERNAL_SERVER_ERROR))
        .mount(&email_server)
        .await;
    let app = spawn_app_with_notifier(&email_server).await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .post(format!("{}/api/subscribe", app.address()))
        .json(&serde_json::json!({ "email": "user@example.com" }))
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse body");
    assert_eq!(body["message"], "تم التسجيل بنجاح");
}
