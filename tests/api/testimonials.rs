use crate::utils::spawn_app;
use axum::http::StatusCode;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn testimonials_returns_the_static_list_in_order() {
    // Arrange
    let app = spawn_app().await.expect("Failed to spawn our app.");
    let client = reqwest::Client::new();

    // Act
    let response = client
        .get(format!("{}/api/testimonials", app.address()))
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let body: Vec<serde_json::Value> = response.json().await.expect("Failed to parse body");
    assert_eq!(body.len(), 3);
    assert_eq!(body[0]["name"], "Sara A.");
    assert!(body.iter().all(|t| t["name"].is_string() && t["text"].is_string()));
}
