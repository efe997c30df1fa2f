use crate::utils::spawn_app;
use axum::http::StatusCode;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn a_registered_profile_can_be_looked_up() {
    // Arrange
    let app = spawn_app().await.expect("Failed to spawn our app.");
    let client = reqwest::Client::new();
    client
        .post(format!("{}/api/subscribe", app.address()))
        .json(&serde_json::json!({ "email": "user@example.com", "name": "Ursula" }))
        .send()
        .await
        .expect("Failed to execute request.");

    // Act
    let response = client
        .get(format!("{}/api/profile", app.address()))
        .query(&[("email", "user@example.com")])
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse body");
    assert_eq!(body["ok"], true);
    assert_eq!(body["profile"]["email"], "user@example.com");
    assert_eq!(body["profile"]["name"], "Ursula");
}

#[tokio::test]
async fn the_lookup_normalizes_the_email() {
    // Arrange
    let app = spawn_app().await.expect("Failed to spawn our app.");
    let client = reqwest::Client::new();
    client
        .post(format!("{}/api/subscribe", app.address()))
        .json(&serde_json::json!({ "email": "user@example.com" }))
        .send()
        .await
        .expect("Failed to execute request.");

    // Act
    let response = client
        .get(format!("{}/api/profile", app.address()))
        .query(&[("email", "USER@EXAMPLE.COM")])
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    let body: serde_json::Value = response.json().await.expect("Failed to parse body");
    assert_eq!(body["ok"], true);
    assert_eq!(body["profile"]["email"], "user@example.com");
}

#[tokio::test]
async fn an_unknown_profile_answers_ok_false() {
    // Arrange
    let app = spawn_app().await.expect("Failed to spawn our app.");
    let client = reqwest::Client::new();

    // Act
    let response = client
        .get(format!("{}/api/profile", app.address()))
        .query(&[("email", "nobody@example.com")])
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse body");
    assert_eq!(body, serde_json::json!({ "ok": false }));
}

#[tokio::test]
async fn a_malformed_email_answers_ok_false() {
    // Arrange
    let app = spawn_app().await.expect("Failed to spawn our app.");
    let client = reqwest::Client::new();

    // Act
    let response = client
        .get(format!("{}/api/profile", app.address()))
        .query(&[("email", "not-an-email")])
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse body");
    assert_eq!(body["ok"], false);
}
