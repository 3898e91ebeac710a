//! tests/api/clients_get.rs

use crate::helpers::{assert_error_response, client_body, spawn_app};

#[tokio::test]
async fn list_clients_returns_an_empty_list_for_an_empty_store() {
    // Arrange
    let test_app = spawn_app().await;

    // Act
    let body = test_app.get_clients_json().await;

    // Assert
    assert_eq!(body, serde_json::json!({ "clients": [] }));
}

#[tokio::test]
async fn list_clients_returns_newest_clients_first() {
    // Arrange
    let test_app = spawn_app().await;
    test_app.email_provider_accepts_all().await;
    let emails = ["first@example.com", "second@example.com", "third@example.com"];
    for email in emails {
        let response = test_app
            .post_clients(&client_body("Ann", email, "Ann LLC"))
            .await;
        assert_eq!(response.status().as_u16(), 201);
    }

    // Act
    let body = test_app.get_clients_json().await;

    // Assert
    let listed: Vec<&str> = body["clients"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["email"].as_str().unwrap())
        .collect();
    assert_eq!(
        listed,
        vec!["third@example.com", "second@example.com", "first@example.com"]
    );
}

#[tokio::test]
async fn list_clients_returns_all_stored_fields() {
    // Arrange
    let test_app = spawn_app().await;
    test_app.email_provider_accepts_all().await;
    let created: serde_json::Value = test_app
        .post_clients(&client_body("Ann", "ann@x.com", "Ann LLC"))
        .await
        .json()
        .await
        .unwrap();

    // Act
    let body = test_app.get_clients_json().await;

    // Assert
    let clients = body["clients"].as_array().unwrap();
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0], created["client"]);
    assert_eq!(clients[0]["name"], "Ann");
    assert_eq!(clients[0]["business_name"], "Ann LLC");
    assert!(clients[0]["id"].is_string());
    assert!(clients[0]["created_at"].is_string());
}

#[tokio::test]
async fn list_clients_fails_if_there_is_a_fatal_database_error() {
    // Arrange
    let test_app = spawn_app().await;
    // sabotage the database
    sqlx::query("ALTER TABLE clients DROP COLUMN business_name;")
        .execute(&test_app.db_pool)
        .await
        .unwrap();

    // Act
    let response = test_app.get_clients().await;

    // Assert
    assert_error_response(response, 500, "Failed to fetch clients").await;
}
