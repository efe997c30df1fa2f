use crate::utils::spawn_app;
use axum::http::StatusCode;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn the_root_serves_the_landing_page() {
    // Arrange
    let app = spawn_app().await.expect("Failed to spawn our app.");
    let client = reqwest::Client::new();

    // Act
    let response = client
        .get(format!("{}/", app.address()))
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(content_type.starts_with("text/html"), "got {content_type}");
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("RealHelper"));
}

#[tokio::test]
async fn unknown_paths_fall_back_to_the_landing_page() {
    // Arrange
    let app = spawn_app().await.expect("Failed to spawn our app.");
    let client = reqwest::Client::new();

    // Act
    let response = client
        .get(format!("{}/some/spa/route", app.address()))
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("RealHelper"));
}
